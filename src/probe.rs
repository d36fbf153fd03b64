//! Compile-time capability probe used by [`valid!`](crate::valid!) and
//! [`check!`](crate::check!).
//!
//! Each macro argument is wrapped in a [`Probe`] and `.probe()` is called on
//! `&&&&&Probe`. Method resolution tries the receiver at each auto-deref step
//! in turn, so the impl with the most references wins whenever its bounds
//! hold. Precedence, highest first:
//!
//! 1. `T: Validate`                 → [`Value::custom`]
//! 2. `T: Inspect`                  → the built-in rule for `T`
//! 3. `Option<U>` with `U: Validate` → custom, `None` is [`Value::Absent`]
//! 4. `Option<U>`                   → [`Value::nullable`]
//!
//! Steps 3 and 4 also match references to an `Option`, so `&opt` and `opt`
//! classify the same way.
//! 5. anything else                 → [`Value::object`]
//!
//! Not part of the public API.

use std::any::type_name;
use std::fmt;

use crate::{Inspect, Validate, Value};

/// Borrowed macro argument awaiting classification.
pub struct Probe<'a, T: ?Sized>(pub &'a T);

impl<T: ?Sized> fmt::Debug for Probe<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Probe").field(&type_name::<T>()).finish()
    }
}

/// Step 1: the argument implements `Validate`.
pub trait ViaValidate<'a> {
    /// Classify the probed argument.
    fn probe(&self) -> Value<'a>;
}

impl<'a, T: Validate> ViaValidate<'a> for &&&&Probe<'a, T> {
    #[inline]
    fn probe(&self) -> Value<'a> {
        Value::custom(self.0)
    }
}

/// Step 2: the argument has a built-in rule.
pub trait ViaInspect<'a> {
    /// Classify the probed argument.
    fn probe(&self) -> Value<'a>;
}

impl<'a, T: Inspect + ?Sized> ViaInspect<'a> for &&&Probe<'a, T> {
    #[inline]
    fn probe(&self) -> Value<'a> {
        T::to_value(self.0)
    }
}

/// An `Option`, held directly or behind any number of references.
pub trait Optional {
    /// The type inside the `Option`.
    type Inner;

    /// Borrow the inner value, if any.
    fn get(&self) -> Option<&Self::Inner>;
}

impl<U> Optional for Option<U> {
    type Inner = U;

    #[inline]
    fn get(&self) -> Option<&U> {
        self.as_ref()
    }
}

impl<O: Optional + ?Sized> Optional for &O {
    type Inner = O::Inner;

    #[inline]
    fn get(&self) -> Option<&O::Inner> {
        O::get(self)
    }
}

impl<O: Optional + ?Sized> Optional for &mut O {
    type Inner = O::Inner;

    #[inline]
    fn get(&self) -> Option<&O::Inner> {
        O::get(self)
    }
}

/// Step 3: an optional value that implements `Validate`.
pub trait ViaOptionalValidate<'a> {
    /// Classify the probed argument.
    fn probe(&self) -> Value<'a>;
}

impl<'a, O> ViaOptionalValidate<'a> for &&Probe<'a, O>
where
    O: Optional,
    O::Inner: Validate + 'a,
{
    #[inline]
    fn probe(&self) -> Value<'a> {
        let inner: &'a O = self.0;
        match inner.get() {
            Some(value) => Value::custom(value),
            None => Value::Absent,
        }
    }
}

/// Step 4: any other optional value.
pub trait ViaNullable<'a> {
    /// Classify the probed argument.
    fn probe(&self) -> Value<'a>;
}

impl<'a, O> ViaNullable<'a> for &Probe<'a, O>
where
    O: Optional,
    O::Inner: 'a,
{
    #[inline]
    fn probe(&self) -> Value<'a> {
        let inner: &'a O = self.0;
        Value::nullable(inner.get())
    }
}

/// Step 5: fallback for every other type.
pub trait ViaObject<'a> {
    /// Classify the probed argument.
    fn probe(&self) -> Value<'a>;
}

impl<'a, T: ?Sized> ViaObject<'a> for Probe<'a, T> {
    #[inline]
    fn probe(&self) -> Value<'a> {
        Value::object(self.0)
    }
}

/// Returns `true` if every argument is valid; `valid!()` is `false`.
///
/// Arguments may be any expression, by value or by reference. Types that
/// implement [`Validate`](crate::Validate) use their own logic, types with a
/// built-in rule use that rule, and everything else only has to be present.
///
/// # Example
///
/// ```
/// use validity::{valid, Validate};
///
/// struct Order {
///     qty: u32,
/// }
///
/// impl Validate for Order {
///     fn validate(&self) -> bool {
///         self.qty > 0
///     }
/// }
///
/// struct Untyped;
///
/// let order = Order { qty: 3 };
/// assert!(valid!("testify", 1223i32, true, &order, Untyped));
/// assert!(!valid!("testify", Order { qty: 0 }));
/// assert!(!valid!(vec!["a", ""]));
/// assert!(!valid!(None::<Untyped>));
/// assert!(!valid!());
/// ```
#[macro_export]
macro_rules! valid {
    ($($value:expr),* $(,)?) => {{
        #[allow(unused_imports)]
        use $crate::probe::{
            ViaInspect as _, ViaNullable as _, ViaObject as _, ViaOptionalValidate as _,
            ViaValidate as _,
        };
        $crate::valid(&[$((&&&&&$crate::probe::Probe(&$value)).probe()),*])
    }};
}

/// Check every argument, returning the first failure as a
/// [`ValidationError`](crate::ValidationError).
///
/// Accepts the same arguments as [`valid!`](crate::valid!).
///
/// # Example
///
/// ```
/// use validity::check;
///
/// let bytes: Vec<u8> = Vec::new();
/// let err = check!("a", 7u8, bytes).unwrap_err();
/// assert_eq!(err.index(), 2);
/// assert_eq!(
///     err.to_string(),
///     "validation error -empty byte sequence- argument at index [2] | type [bytes] is invalid"
/// );
///
/// assert!(check!().is_err());
/// assert!(check!("a", 'b').is_ok());
/// ```
#[macro_export]
macro_rules! check {
    ($($value:expr),* $(,)?) => {{
        #[allow(unused_imports)]
        use $crate::probe::{
            ViaInspect as _, ViaNullable as _, ViaObject as _, ViaOptionalValidate as _,
            ViaValidate as _,
        };
        $crate::assert(&[$((&&&&&$crate::probe::Probe(&$value)).probe()),*])
    }};
}

#[cfg(test)]
mod tests {
    use crate::{Reason, StrSeq, Validate, Value};
    use std::sync::Arc;

    #[derive(Debug)]
    struct Gate(bool);

    impl Validate for Gate {
        fn validate(&self) -> bool {
            self.0
        }
    }

    struct Opaque;

    #[test]
    fn test_validate_wins() {
        assert!(valid!(Gate(true)));
        assert!(!valid!(Gate(false)));

        let gate = Gate(false);
        assert!(!valid!(&gate));
        assert!(!valid!(&&gate));
        assert!(!valid!(Box::new(Gate(false))));
        assert!(valid!(Arc::new(Gate(true))));

        let err = check!(Gate(true), Gate(false)).unwrap_err();
        assert_eq!(err.index(), 1);
        assert!(err.validator_failure());
    }

    #[test]
    fn test_builtin_rules() {
        let owned = String::from("x");
        let bytes: Vec<u8> = vec![1];
        let words = vec![String::from("a")];

        assert!(valid!("x", owned, &owned, bytes, words, 3u16, -2i64, 0.5f32));
        assert!(!valid!(""));
        assert!(!valid!(String::new()));
        assert!(!valid!(Vec::<u8>::new()));
        assert!(!valid!(vec![String::from("a"), String::new()]));
    }

    #[test]
    fn test_option_of_builtin_is_absent() {
        let none: Option<String> = None;
        let err = check!(none).unwrap_err();
        assert_eq!(err.reason(), Reason::AbsentValue);
        assert_eq!(err.type_name(), None);

        assert!(valid!(Some("x")));
        assert!(!valid!(Some("")));
    }

    #[test]
    fn test_option_of_validator() {
        assert!(valid!(Some(Gate(true))));
        assert!(!valid!(Some(Gate(false))));

        let err = check!(None::<Gate>).unwrap_err();
        assert_eq!(err.reason(), Reason::AbsentValue);
    }

    #[test]
    fn test_option_of_opaque_is_nullable() {
        assert!(valid!(Some(Opaque)));

        let err = check!("a", None::<Opaque>).unwrap_err();
        assert_eq!(err.index(), 1);
        assert_eq!(err.reason(), Reason::StructuralNilReference);
        assert!(err.type_name().is_some_and(|t| t.ends_with("Opaque")));
    }

    #[test]
    fn test_option_by_reference_matches_by_value() {
        let none_gate: Option<Gate> = None;
        let bad_gate = Some(Gate(false));
        let good_gate = Some(Gate(true));
        let none_opaque: Option<Opaque> = None;
        let none_text: Option<String> = None;

        assert_eq!(valid!(&none_gate), valid!(none_gate));
        assert!(!valid!(&none_gate));
        assert!(!valid!(&&none_gate));
        assert!(!valid!(&bad_gate));
        assert!(!valid!(&Some(Gate(false))));
        assert!(valid!(&good_gate));
        assert!(!valid!(&none_opaque));
        assert!(!valid!(&none_text));

        let err = check!(&bad_gate).unwrap_err();
        assert!(err.validator_failure());

        let err = check!(&none_gate).unwrap_err();
        assert_eq!(err.reason(), Reason::AbsentValue);

        let err = check!("a", &none_opaque).unwrap_err();
        assert_eq!(err.index(), 1);
        assert_eq!(err.reason(), Reason::StructuralNilReference);
        assert!(err.type_name().is_some_and(|t| t.ends_with("Opaque")));
    }

    #[test]
    fn test_option_behind_mut_reference() {
        let mut gate = Some(Gate(false));
        assert!(!valid!(&mut gate));

        let mut missing: Option<Opaque> = None;
        assert_eq!(
            check!(&mut missing).unwrap_err().reason(),
            Reason::StructuralNilReference
        );
    }

    #[test]
    fn test_opaque_is_present() {
        assert!(valid!(Opaque, &Opaque));
        assert!(valid!(vec![Opaque]));
    }

    #[test]
    fn test_explicit_values_pass_through() {
        let words = ["a", ""];
        assert!(!valid!(Value::Strings(StrSeq::Borrowed(&words))));
        assert!(!valid!(Value::Absent));
        assert!(valid!(Value::Text("x")));
    }

    #[test]
    fn test_trailing_comma_and_empty() {
        assert!(valid!("a", "b",));
        assert!(!valid!());
        assert_eq!(check!().unwrap_err().reason(), Reason::EmptyInput);
    }

    #[test]
    fn test_probe_debug() {
        let probe = super::Probe(&Opaque);
        assert!(format!("{:?}", probe).contains("Opaque"));
    }
}

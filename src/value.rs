//! Classified views of arbitrary values
//!
//! [`Value`] is the closed set of categories the classifier understands. A
//! `Value` borrows whatever it was built from and is `Copy`, so building one is
//! free and never takes ownership of the input.
//!
//! Values come from three places:
//!
//! - the [`Inspect`] trait, implemented for strings, byte sequences, string
//!   sequences, std scalars, `Option<T>` and the usual pointer types;
//! - explicit constructors such as [`Value::custom`], [`Value::object`] and
//!   [`Value::nullable`], plus `From` for borrowed text, bytes and string
//!   slices;
//! - the [`valid!`](crate::valid!) and [`check!`](crate::check!) macros,
//!   which pick the right category at compile time.
//!
//! # Example
//!
//! ```
//! use validity::{Inspect, Value};
//!
//! assert!(matches!("hello".to_value(), Value::Text("hello")));
//! assert!(matches!(None::<String>.to_value(), Value::Absent));
//! assert_eq!(vec![1u8, 2, 3].to_value().type_name(), Some("bytes"));
//! assert_eq!(7u64.to_value().type_name(), Some("u64"));
//! assert_eq!(Value::from(&b"ab"[..]).type_name(), Some("bytes"));
//! ```

use std::any::{type_name, Any};
use std::borrow::Cow;
use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

use crate::Validate;

/// Type descriptor reported for [`Value::Text`].
pub const TEXT_TYPE: &str = "string";
/// Type descriptor reported for [`Value::Bytes`].
pub const BYTES_TYPE: &str = "bytes";
/// Type descriptor reported for [`Value::Strings`].
pub const STRINGS_TYPE: &str = "[string]";

/// One input, reduced to the category that decides its validity.
#[derive(Clone, Copy)]
pub enum Value<'a> {
    /// No value at all.
    Absent,
    /// A value carrying its own validation logic.
    Custom {
        /// The value's [`Validate`] implementation.
        validator: &'a dyn Validate,
        /// Declared type of the value.
        type_name: &'static str,
    },
    /// Text.
    Text(&'a str),
    /// An ordered byte sequence.
    Bytes(&'a [u8]),
    /// An ordered sequence of strings.
    Strings(StrSeq<'a>),
    /// A numeric, boolean or character scalar.
    Scalar {
        /// Name of the primitive type.
        type_name: &'static str,
    },
    /// Any other value, with no rule beyond being present.
    Object {
        /// Declared type, when known. Type-erased values carry `None`.
        type_name: Option<&'static str>,
        /// `false` when the value was reached through a null reference.
        present: bool,
    },
}

impl<'a> Value<'a> {
    /// Classify a value through its [`Inspect`] implementation.
    #[inline]
    pub fn of<T: Inspect + ?Sized>(value: &'a T) -> Self {
        T::to_value(value)
    }

    /// Wrap a value that validates itself.
    ///
    /// ```
    /// use validity::{assert, Validate, Value};
    ///
    /// struct Never;
    /// impl Validate for Never {
    ///     fn validate(&self) -> bool {
    ///         false
    ///     }
    /// }
    ///
    /// let err = assert(&[Value::custom(&Never)]).unwrap_err();
    /// assert!(err.validator_failure());
    /// ```
    #[inline]
    pub fn custom<T: Validate>(value: &'a T) -> Self {
        Value::Custom {
            validator: value,
            type_name: type_name::<T>(),
        }
    }

    /// A present value of a type with no validation rule.
    #[inline]
    pub fn object<T: ?Sized>(_value: &'a T) -> Self {
        Value::Object {
            type_name: Some(type_name::<T>()),
            present: true,
        }
    }

    /// A value held through a nullable reference.
    ///
    /// `None` is invalid and still reports the declared type `T`.
    ///
    /// ```
    /// use validity::{valid, Value};
    ///
    /// struct Session;
    ///
    /// let missing: Option<&Session> = None;
    /// assert!(!valid(&[Value::nullable(missing)]));
    /// assert!(valid(&[Value::nullable(Some(&Session))]));
    /// ```
    #[inline]
    pub fn nullable<T: ?Sized>(value: Option<&'a T>) -> Self {
        Value::Object {
            type_name: Some(type_name::<T>()),
            present: value.is_some(),
        }
    }

    /// A null reference to a `T`.
    #[inline]
    pub fn null<T: ?Sized>() -> Self {
        Value::Object {
            type_name: Some(type_name::<T>()),
            present: false,
        }
    }

    /// A type-erased value. When it is `None` there is no type to report.
    #[inline]
    pub fn erased(value: Option<&'a dyn Any>) -> Self {
        Value::Object {
            type_name: None,
            present: value.is_some(),
        }
    }

    /// A scalar of type `T`. Always valid.
    #[inline]
    pub fn scalar<T: ?Sized>() -> Self {
        Value::Scalar {
            type_name: type_name::<T>(),
        }
    }

    /// Returns `true` for [`Value::Absent`].
    #[inline]
    pub fn is_absent(&self) -> bool {
        matches!(self, Value::Absent)
    }

    /// Type descriptor used in diagnostics. `None` when nothing is known.
    pub fn type_name(&self) -> Option<&'static str> {
        match self {
            Value::Absent => None,
            Value::Custom { type_name, .. } | Value::Scalar { type_name } => Some(*type_name),
            Value::Text(_) => Some(TEXT_TYPE),
            Value::Bytes(_) => Some(BYTES_TYPE),
            Value::Strings(_) => Some(STRINGS_TYPE),
            Value::Object { type_name, .. } => *type_name,
        }
    }
}

impl<'a> From<&'a str> for Value<'a> {
    fn from(value: &'a str) -> Self {
        Value::Text(value)
    }
}

impl<'a> From<&'a String> for Value<'a> {
    fn from(value: &'a String) -> Self {
        Value::Text(value)
    }
}

impl<'a> From<&'a [u8]> for Value<'a> {
    fn from(value: &'a [u8]) -> Self {
        Value::Bytes(value)
    }
}

impl<'a> From<&'a Vec<u8>> for Value<'a> {
    fn from(value: &'a Vec<u8>) -> Self {
        Value::Bytes(value)
    }
}

impl<'a> From<&'a [String]> for Value<'a> {
    fn from(value: &'a [String]) -> Self {
        Value::Strings(StrSeq::Owned(value))
    }
}

impl<'a> From<&'a Vec<String>> for Value<'a> {
    fn from(value: &'a Vec<String>) -> Self {
        Value::Strings(StrSeq::Owned(value))
    }
}

impl<'a> From<&'a [&'a str]> for Value<'a> {
    fn from(value: &'a [&'a str]) -> Self {
        Value::Strings(StrSeq::Borrowed(value))
    }
}

impl<'a> From<&'a Vec<&'a str>> for Value<'a> {
    fn from(value: &'a Vec<&'a str>) -> Self {
        Value::Strings(StrSeq::Borrowed(value))
    }
}

impl fmt::Debug for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Absent => f.write_str("Absent"),
            Value::Custom { type_name, .. } => {
                f.debug_struct("Custom").field("type_name", type_name).finish()
            }
            Value::Text(s) => f.debug_tuple("Text").field(s).finish(),
            Value::Bytes(b) => f.debug_tuple("Bytes").field(b).finish(),
            Value::Strings(seq) => f.debug_tuple("Strings").field(seq).finish(),
            Value::Scalar { type_name } => {
                f.debug_struct("Scalar").field("type_name", type_name).finish()
            }
            Value::Object { type_name, present } => f
                .debug_struct("Object")
                .field("type_name", type_name)
                .field("present", present)
                .finish(),
        }
    }
}

/// A borrowed sequence of strings, owned or borrowed elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrSeq<'a> {
    /// Elements are `String`s.
    Owned(&'a [String]),
    /// Elements are `&str`s.
    Borrowed(&'a [&'a str]),
}

impl<'a> StrSeq<'a> {
    /// Number of elements.
    pub fn len(&self) -> usize {
        match self {
            StrSeq::Owned(s) => s.len(),
            StrSeq::Borrowed(s) => s.len(),
        }
    }

    /// Returns `true` if the sequence has no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate the elements in order.
    pub fn iter(&self) -> impl Iterator<Item = &'a str> + 'a {
        let (owned, borrowed): (&'a [String], &'a [&'a str]) = match *self {
            StrSeq::Owned(s) => (s, Default::default()),
            StrSeq::Borrowed(s) => (Default::default(), s),
        };
        owned
            .iter()
            .map(String::as_str)
            .chain(borrowed.iter().copied())
    }

    /// Position of the first empty element, if any.
    ///
    /// ```
    /// use validity::StrSeq;
    ///
    /// let words = ["a", "", "c", ""];
    /// assert_eq!(StrSeq::Borrowed(&words).first_empty(), Some(1));
    /// ```
    pub fn first_empty(&self) -> Option<usize> {
        self.iter().position(str::is_empty)
    }
}

/// Types whose validity follows one of the built-in rules.
///
/// Implemented for text, byte sequences, string sequences, std scalars,
/// `Option<T>` (where `None` is [`Value::Absent`]) and pointers to any of
/// these. A type outside the std library can opt into a built-in rule by
/// returning the matching [`Value`]:
///
/// ```
/// use validity::{valid, Inspect, Value};
///
/// struct Complex {
///     re: f64,
///     im: f64,
/// }
///
/// impl Inspect for Complex {
///     fn to_value(&self) -> Value<'_> {
///         Value::scalar::<Complex>()
///     }
/// }
///
/// assert!(valid(&[Value::of(&Complex { re: 0.0, im: 1.0 })]));
/// ```
pub trait Inspect {
    /// Reduce `self` to its [`Value`] category.
    fn to_value(&self) -> Value<'_>;
}

impl Inspect for Value<'_> {
    #[inline]
    fn to_value(&self) -> Value<'_> {
        *self
    }
}

impl Inspect for str {
    #[inline]
    fn to_value(&self) -> Value<'_> {
        Value::Text(self)
    }
}

impl Inspect for String {
    #[inline]
    fn to_value(&self) -> Value<'_> {
        Value::Text(self)
    }
}

impl Inspect for Cow<'_, str> {
    #[inline]
    fn to_value(&self) -> Value<'_> {
        Value::Text(self)
    }
}

impl Inspect for [u8] {
    #[inline]
    fn to_value(&self) -> Value<'_> {
        Value::Bytes(self)
    }
}

impl Inspect for Vec<u8> {
    #[inline]
    fn to_value(&self) -> Value<'_> {
        Value::Bytes(self)
    }
}

impl<const N: usize> Inspect for [u8; N] {
    #[inline]
    fn to_value(&self) -> Value<'_> {
        Value::Bytes(self)
    }
}

impl Inspect for [String] {
    #[inline]
    fn to_value(&self) -> Value<'_> {
        Value::Strings(StrSeq::Owned(self))
    }
}

impl Inspect for Vec<String> {
    #[inline]
    fn to_value(&self) -> Value<'_> {
        Value::Strings(StrSeq::Owned(self))
    }
}

impl Inspect for [&str] {
    #[inline]
    fn to_value(&self) -> Value<'_> {
        Value::Strings(StrSeq::Borrowed(self))
    }
}

impl Inspect for Vec<&str> {
    #[inline]
    fn to_value(&self) -> Value<'_> {
        Value::Strings(StrSeq::Borrowed(self))
    }
}

macro_rules! impl_inspect_scalar {
    ($($t:ty),* $(,)?) => {
        $(
            impl Inspect for $t {
                #[inline]
                fn to_value(&self) -> Value<'_> {
                    Value::Scalar {
                        type_name: stringify!($t),
                    }
                }
            }
        )*
    };
}

impl_inspect_scalar!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char,
);

impl<T: Inspect> Inspect for Option<T> {
    #[inline]
    fn to_value(&self) -> Value<'_> {
        match self {
            Some(value) => T::to_value(value),
            None => Value::Absent,
        }
    }
}

impl<T: Inspect + ?Sized> Inspect for &T {
    #[inline]
    fn to_value(&self) -> Value<'_> {
        T::to_value(self)
    }
}

impl<T: Inspect + ?Sized> Inspect for &mut T {
    #[inline]
    fn to_value(&self) -> Value<'_> {
        T::to_value(self)
    }
}

impl<T: Inspect + ?Sized> Inspect for Box<T> {
    #[inline]
    fn to_value(&self) -> Value<'_> {
        T::to_value(self)
    }
}

impl<T: Inspect + ?Sized> Inspect for Rc<T> {
    #[inline]
    fn to_value(&self) -> Value<'_> {
        T::to_value(self)
    }
}

impl<T: Inspect + ?Sized> Inspect for Arc<T> {
    #[inline]
    fn to_value(&self) -> Value<'_> {
        T::to_value(self)
    }
}

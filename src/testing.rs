//! Testing utilities for code that uses validity
//!
//! Assertion macros with readable panic messages, plus property-based testing
//! support when the `proptest` feature is enabled.
//!
//! # Examples
//!
//! ```rust
//! use validity::{assert_fails_at, assert_invalid, assert_valid, check};
//!
//! assert_valid!("name", 42u8);
//! assert_invalid!("name", "");
//! assert_fails_at!(check!("a", "", "c"), 1);
//! ```

/// Assert that every argument is valid.
///
/// Panics with the rendered [`ValidationError`](crate::ValidationError)
/// otherwise.
///
/// # Example
///
/// ```rust
/// use validity::assert_valid;
///
/// assert_valid!("hello", vec![1u8], true);
/// ```
#[macro_export]
macro_rules! assert_valid {
    ($($value:expr),+ $(,)?) => {
        if let ::std::result::Result::Err(e) = $crate::check!($($value),+) {
            panic!("Expected valid values, got: {}", e);
        }
    };
}

/// Assert that at least one argument is invalid.
///
/// # Example
///
/// ```rust
/// use validity::assert_invalid;
///
/// assert_invalid!("hello", Vec::<u8>::new());
/// ```
#[macro_export]
macro_rules! assert_invalid {
    ($($value:expr),+ $(,)?) => {
        if $crate::valid!($($value),+) {
            panic!("Expected an invalid value, all were valid");
        }
    };
}

/// Assert that an [`assert`](crate::assert) result failed at a given index.
///
/// # Example
///
/// ```rust
/// use validity::{assert_fails_at, check};
///
/// assert_fails_at!(check!("ok", None::<String>), 1);
/// ```
#[macro_export]
macro_rules! assert_fails_at {
    ($result:expr, $index:expr) => {
        match $result {
            ::std::result::Result::Err(e) => {
                assert_eq!(e.index(), $index, "Failed at the wrong index: {}", e);
            }
            ::std::result::Result::Ok(()) => {
                panic!("Expected failure at index {}, got Ok", $index);
            }
        }
    };
}

#[cfg(feature = "proptest")]
use proptest::prelude::*;

#[cfg(feature = "proptest")]
use crate::{Reason, ValidationError};

#[cfg(feature = "proptest")]
impl Arbitrary for Reason {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        prop_oneof![
            Just(Reason::EmptyInput),
            Just(Reason::AbsentValue),
            Just(Reason::EmptyString),
            Just(Reason::EmptyByteSequence),
            (0usize..64).prop_map(|position| Reason::EmptyStringInSequence { position }),
            Just(Reason::CustomValidationFailed),
            Just(Reason::StructuralNilReference),
            Just(Reason::GenericInvalid),
        ]
        .boxed()
    }
}

#[cfg(feature = "proptest")]
impl Arbitrary for ValidationError {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        let type_name = prop::option::of(prop::sample::select(vec![
            crate::value::TEXT_TYPE,
            crate::value::BYTES_TYPE,
            crate::value::STRINGS_TYPE,
            "i32",
            "bool",
        ]));
        (0usize..128, type_name, any::<Reason>())
            .prop_map(|(index, type_name, reason)| ValidationError::new(index, type_name, reason))
            .boxed()
    }
}

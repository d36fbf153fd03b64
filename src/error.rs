//! Diagnostic error returned by [`assert`](crate::assert)
//!
//! A [`ValidationError`] records where the first invalid value sat in the
//! argument list, what type it had, and why it was rejected. Its `Display`
//! output has a fixed layout so it can be matched exactly:
//!
//! ```text
//! validation error -<message>- argument at index [<index>] | type [<type>] is invalid
//! ```
//!
//! The `| type [...]` part is left out when the type is unknown.
//!
//! # Example
//!
//! ```
//! use validity::{assert, Value};
//!
//! let err = assert(&[Value::Text("ok"), Value::Text("")]).unwrap_err();
//! assert_eq!(err.index(), 1);
//! assert_eq!(
//!     err.to_string(),
//!     "validation error -empty string- argument at index [1] | type [string] is invalid"
//! );
//! ```

use std::error::Error as StdError;
use std::fmt;

use crate::Reason;

/// The first invalid value found in an argument list.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ValidationError {
    index: usize,
    type_name: Option<&'static str>,
    reason: Reason,
}

impl ValidationError {
    /// Create a validation error.
    ///
    /// # Example
    ///
    /// ```
    /// use validity::{Reason, ValidationError};
    ///
    /// let err = ValidationError::new(2, Some("bytes"), Reason::EmptyByteSequence);
    /// assert_eq!(err.index(), 2);
    /// assert_eq!(err.message(), "empty byte sequence");
    /// ```
    pub fn new(index: usize, type_name: Option<&'static str>, reason: Reason) -> Self {
        ValidationError {
            index,
            type_name,
            reason,
        }
    }

    /// The error for an empty argument list.
    pub fn empty_input() -> Self {
        ValidationError::new(0, None, Reason::EmptyInput)
    }

    /// Zero-based position of the failing value.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Type descriptor of the failing value, if known.
    pub fn type_name(&self) -> Option<&'static str> {
        self.type_name
    }

    /// Why the value was rejected.
    pub fn reason(&self) -> Reason {
        self.reason
    }

    /// Human-readable reason.
    pub fn message(&self) -> String {
        self.reason.to_string()
    }

    /// Returns `true` if the value's own [`Validate`](crate::Validate)
    /// implementation rejected it, rather than a built-in rule.
    pub fn validator_failure(&self) -> bool {
        self.reason.is_custom()
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "validation error -{}- argument at index [{}",
            self.reason, self.index
        )?;
        if let Some(type_name) = self.type_name {
            write!(f, "] | type [{}", type_name)?;
        }
        f.write_str("] is invalid")
    }
}

impl StdError for ValidationError {}

#[cfg(feature = "serde")]
mod serde_impl {
    use serde::ser::SerializeStruct;
    use serde::{Serialize, Serializer};

    use super::ValidationError;
    use crate::Reason;

    impl Serialize for Reason {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.collect_str(self)
        }
    }

    impl Serialize for ValidationError {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let mut state = serializer.serialize_struct("ValidationError", 4)?;
            state.serialize_field("message", &self.reason)?;
            state.serialize_field("index", &self.index)?;
            state.serialize_field("type", &self.type_name)?;
            state.serialize_field("validator_failure", &self.validator_failure())?;
            state.end()
        }
    }
}

//! Per-value classification
//!
//! [`classify`] is the single place where validity is decided. It never
//! panics and never allocates: every negative result is a [`Reason`] inside a
//! [`Verdict`], not an error of the classifier itself.
//!
//! # Example
//!
//! ```
//! use validity::{classify, Reason, Value, Verdict};
//!
//! assert_eq!(classify(&Value::Text("ok")), Verdict::Valid);
//! assert_eq!(classify(&Value::Text("")), Verdict::Invalid(Reason::EmptyString));
//! assert_eq!(classify(&Value::Absent).reason(), Some(&Reason::AbsentValue));
//! ```

use std::fmt;

use crate::Value;

/// Why a value (or an argument list) was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Reason {
    /// No values were supplied at all.
    EmptyInput,
    /// The value itself was absent.
    AbsentValue,
    /// Zero-length text.
    EmptyString,
    /// Zero-length byte sequence.
    EmptyByteSequence,
    /// A string sequence contained a zero-length element.
    EmptyStringInSequence {
        /// Position of the first empty element.
        position: usize,
    },
    /// The value's own [`Validate`](crate::Validate) implementation returned `false`.
    CustomValidationFailed,
    /// A nullable reference of a known type was null.
    StructuralNilReference,
    /// A value was rejected with nothing more specific to say, e.g. a
    /// type-erased null.
    GenericInvalid,
}

impl Reason {
    /// Returns `true` if the failure came from user validation logic.
    #[inline]
    pub fn is_custom(&self) -> bool {
        matches!(self, Reason::CustomValidationFailed)
    }
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reason::EmptyInput => f.write_str("empty argument list passed to assert"),
            Reason::AbsentValue => f.write_str("nil value"),
            Reason::EmptyString => f.write_str("empty string"),
            Reason::EmptyByteSequence => f.write_str("empty byte sequence"),
            Reason::EmptyStringInSequence { position } => {
                write!(f, "empty string in sequence at index [{}]", position)
            }
            Reason::CustomValidationFailed => f.write_str("validator failed"),
            Reason::StructuralNilReference => f.write_str("nil reference"),
            Reason::GenericInvalid => f.write_str("invalid"),
        }
    }
}

/// Outcome of classifying one value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// The value passed.
    Valid,
    /// The value failed for the given reason.
    Invalid(Reason),
}

impl Verdict {
    /// Returns `true` for [`Verdict::Valid`].
    #[inline]
    pub fn is_valid(&self) -> bool {
        matches!(self, Verdict::Valid)
    }

    /// Returns `true` for [`Verdict::Invalid`].
    #[inline]
    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    /// The rejection reason, if any.
    #[inline]
    pub fn reason(&self) -> Option<&Reason> {
        match self {
            Verdict::Valid => None,
            Verdict::Invalid(reason) => Some(reason),
        }
    }

    /// Returns `true` if the value was rejected by its own validation logic.
    #[inline]
    pub fn via_custom(&self) -> bool {
        self.reason().is_some_and(Reason::is_custom)
    }

    /// Convert into a `Result`, with the reason as the error.
    ///
    /// ```
    /// use validity::{classify, Reason, Value};
    ///
    /// let bytes: &[u8] = &[];
    /// assert_eq!(
    ///     classify(&Value::Bytes(bytes)).into_result(),
    ///     Err(Reason::EmptyByteSequence)
    /// );
    /// ```
    #[inline]
    pub fn into_result(self) -> Result<(), Reason> {
        match self {
            Verdict::Valid => Ok(()),
            Verdict::Invalid(reason) => Err(reason),
        }
    }
}

/// Decide whether one value is valid.
///
/// | category  | invalid when                    | reason                     |
/// |-----------|---------------------------------|----------------------------|
/// | `Absent`  | always                          | `AbsentValue`              |
/// | `Custom`  | `validate()` returns `false`    | `CustomValidationFailed`   |
/// | `Text`    | empty                           | `EmptyString`              |
/// | `Bytes`   | empty                           | `EmptyByteSequence`        |
/// | `Strings` | any element empty               | `EmptyStringInSequence`    |
/// | `Scalar`  | never                           |                            |
/// | `Object`  | null reference                  | `StructuralNilReference`, or `GenericInvalid` when untyped |
pub fn classify(value: &Value<'_>) -> Verdict {
    match *value {
        Value::Absent => Verdict::Invalid(Reason::AbsentValue),
        Value::Custom { validator, .. } => {
            if validator.validate() {
                Verdict::Valid
            } else {
                Verdict::Invalid(Reason::CustomValidationFailed)
            }
        }
        Value::Text(text) if text.is_empty() => Verdict::Invalid(Reason::EmptyString),
        Value::Bytes(bytes) if bytes.is_empty() => Verdict::Invalid(Reason::EmptyByteSequence),
        Value::Strings(seq) => match seq.first_empty() {
            Some(position) => Verdict::Invalid(Reason::EmptyStringInSequence { position }),
            None => Verdict::Valid,
        },
        Value::Object { present: false, type_name: Some(_) } => {
            Verdict::Invalid(Reason::StructuralNilReference)
        }
        Value::Object { present: false, type_name: None } => {
            Verdict::Invalid(Reason::GenericInvalid)
        }
        Value::Text(_) | Value::Bytes(_) | Value::Scalar { .. } | Value::Object { .. } => {
            Verdict::Valid
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{StrSeq, Validate};
    use std::cell::Cell;

    struct Counted<'a> {
        calls: &'a Cell<u32>,
        result: bool,
    }

    impl Validate for Counted<'_> {
        fn validate(&self) -> bool {
            self.calls.set(self.calls.get() + 1);
            self.result
        }
    }

    #[test]
    fn test_absent_is_invalid() {
        assert_eq!(classify(&Value::Absent), Verdict::Invalid(Reason::AbsentValue));
    }

    #[test]
    fn test_custom_delegates_to_validate() {
        let calls = Cell::new(0);
        let pass = Counted {
            calls: &calls,
            result: true,
        };
        let fail = Counted {
            calls: &calls,
            result: false,
        };

        assert!(classify(&Value::custom(&pass)).is_valid());
        let verdict = classify(&Value::custom(&fail));
        assert_eq!(verdict, Verdict::Invalid(Reason::CustomValidationFailed));
        assert!(verdict.via_custom());
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_text() {
        assert!(classify(&Value::Text("a")).is_valid());
        assert_eq!(
            classify(&Value::Text("")).into_result(),
            Err(Reason::EmptyString)
        );
    }

    #[test]
    fn test_bytes() {
        assert!(classify(&Value::Bytes(&[0])).is_valid());
        assert_eq!(
            classify(&Value::Bytes(&[])).reason(),
            Some(&Reason::EmptyByteSequence)
        );
    }

    #[test]
    fn test_string_sequence_reports_first_empty_position() {
        let words = ["testy index 0", "", "testy index 1", ""];
        assert_eq!(
            classify(&Value::Strings(StrSeq::Borrowed(&words))),
            Verdict::Invalid(Reason::EmptyStringInSequence { position: 1 })
        );

        let full = vec![String::from("a"), String::from("b")];
        assert!(classify(&Value::Strings(StrSeq::Owned(&full))).is_valid());

        let empty: [&str; 0] = [];
        assert!(classify(&Value::Strings(StrSeq::Borrowed(&empty))).is_valid());
    }

    #[test]
    fn test_scalars_always_valid() {
        for value in [
            Value::scalar::<i64>(),
            Value::scalar::<u8>(),
            Value::scalar::<f32>(),
            Value::scalar::<bool>(),
        ] {
            assert!(classify(&value).is_valid());
        }
    }

    #[test]
    fn test_objects() {
        struct Handle;

        assert!(classify(&Value::object(&Handle)).is_valid());
        assert!(classify(&Value::nullable(Some(&Handle))).is_valid());
        assert_eq!(
            classify(&Value::null::<Handle>()),
            Verdict::Invalid(Reason::StructuralNilReference)
        );
        assert_eq!(
            classify(&Value::erased(None)),
            Verdict::Invalid(Reason::GenericInvalid)
        );
        assert!(!classify(&Value::null::<Handle>()).via_custom());
    }

    #[test]
    fn test_reason_display() {
        assert_eq!(Reason::AbsentValue.to_string(), "nil value");
        assert_eq!(Reason::EmptyString.to_string(), "empty string");
        assert_eq!(
            Reason::EmptyStringInSequence { position: 3 }.to_string(),
            "empty string in sequence at index [3]"
        );
        assert_eq!(
            Reason::EmptyInput.to_string(),
            "empty argument list passed to assert"
        );
        assert_eq!(Reason::CustomValidationFailed.to_string(), "validator failed");
    }

    #[test]
    fn test_classify_is_idempotent() {
        let words = ["a", ""];
        let value = Value::Strings(StrSeq::Borrowed(&words));
        assert_eq!(classify(&value), classify(&value));
    }
}

//! Bulk checks over an argument list
//!
//! Both entry points walk the values in order and stop at the first invalid
//! one. An empty list is never valid.
//!
//! - [`valid`] answers yes or no.
//! - [`assert`] says which value failed and why.
//!
//! # Example
//!
//! ```
//! use validity::{assert, valid, Inspect, Value};
//!
//! let name = String::from("ada");
//! let age = 42u32;
//! let payload: Vec<u8> = Vec::new();
//! let values = [name.to_value(), age.to_value(), payload.to_value()];
//!
//! assert!(!valid(&values));
//!
//! let err = assert(&values).unwrap_err();
//! assert_eq!(err.index(), 2);
//! assert_eq!(err.type_name(), Some("bytes"));
//! ```

use crate::{classify, ValidationError, Value, Verdict};

/// Returns `true` if the list is non-empty and every value is valid.
///
/// Stops at the first invalid value; later values are not inspected.
pub fn valid(values: &[Value<'_>]) -> bool {
    if values.is_empty() {
        return false;
    }

    values.iter().enumerate().all(|(_index, value)| {
        let verdict = classify(value);

        #[cfg(feature = "tracing")]
        if let Verdict::Invalid(reason) = verdict {
            tracing::trace!(index = _index, %reason, "value is invalid");
        }

        verdict.is_valid()
    })
}

/// Check every value, reporting the first invalid one.
///
/// Returns [`ValidationError::empty_input`] for an empty list.
///
/// # Example
///
/// ```
/// use validity::{assert, Reason, Value};
///
/// let err = assert(&[Value::Text("a"), Value::Absent, Value::Text("")]).unwrap_err();
/// assert_eq!(err.index(), 1);
/// assert_eq!(err.reason(), Reason::AbsentValue);
/// assert_eq!(err.type_name(), None);
/// ```
pub fn assert(values: &[Value<'_>]) -> Result<(), ValidationError> {
    if values.is_empty() {
        #[cfg(feature = "tracing")]
        tracing::debug!("empty argument list");
        return Err(ValidationError::empty_input());
    }

    for (index, value) in values.iter().enumerate() {
        if let Verdict::Invalid(reason) = classify(value) {
            let err = ValidationError::new(index, value.type_name(), reason);

            #[cfg(feature = "tracing")]
            tracing::debug!(
                index,
                type_name = err.type_name().unwrap_or("<unknown>"),
                %reason,
                validator_failure = err.validator_failure(),
                "value failed validation"
            );

            return Err(err);
        }
    }

    Ok(())
}

/// Deprecated alias of [`valid`].
#[deprecated(since = "1.0.0", note = "use `valid` instead")]
pub fn is_valid(values: &[Value<'_>]) -> bool {
    valid(values)
}

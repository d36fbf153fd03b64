//! # Validity
//!
//! Check that every value in a list is usable, and find out which one is not.
//!
//! Every value falls into one category, and each category has one rule:
//!
//! | category                 | valid when                      |
//! |--------------------------|---------------------------------|
//! | absent (`None`)          | never                           |
//! | implements [`Validate`]  | `validate()` returns `true`     |
//! | text                     | non-empty                       |
//! | byte sequence            | non-empty                       |
//! | sequence of strings      | every element non-empty         |
//! | numeric / `bool` / `char`| always                          |
//! | anything else            | present (not a null reference)  |
//!
//! An empty argument list is never valid.
//!
//! ## Quick Example
//!
//! ```rust
//! use validity::{check, valid, Validate};
//!
//! struct Email(String);
//!
//! impl Validate for Email {
//!     fn validate(&self) -> bool {
//!         self.0.contains('@')
//!     }
//! }
//!
//! let email = Email("ada@example.com".to_string());
//! let tags = vec!["admin", "ops"];
//!
//! // Cheap yes/no check
//! assert!(valid!(email, "Ada", tags, 36u8));
//!
//! // Diagnostic check: which argument failed, and why
//! let err = check!("Ada", Email("nope".to_string())).unwrap_err();
//! assert_eq!(err.index(), 1);
//! assert!(err.validator_failure());
//! ```
//!
//! The macros accept any expression. Without macros, build a slice of
//! [`Value`]s and call [`valid`] or [`assert`]:
//!
//! ```rust
//! use validity::{assert, Inspect, Value};
//!
//! let name = String::new();
//! let err = assert(&[name.to_value(), Value::Absent]).unwrap_err();
//! assert_eq!(
//!     err.to_string(),
//!     "validation error -empty string- argument at index [0] | type [string] is invalid"
//! );
//! ```
//!
//! ## Cargo features
//!
//! - `tracing`: emit `tracing` events for failed checks.
//! - `serde`: `Serialize` for [`ValidationError`] and [`Reason`].
//! - `proptest`: `Arbitrary` for [`ValidationError`] and [`Reason`].

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod check;
pub mod classify;
pub mod error;
#[doc(hidden)]
pub mod probe;
pub mod testing;
pub mod validator;
pub mod value;

// Re-exports
#[allow(deprecated)]
pub use check::is_valid;
pub use check::{assert, valid};
pub use classify::{classify, Reason, Verdict};
pub use error::ValidationError;
pub use validator::Validate;
pub use value::{Inspect, StrSeq, Value};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::classify::{classify, Reason, Verdict};
    pub use crate::error::ValidationError;
    pub use crate::validator::Validate;
    pub use crate::value::{Inspect, Value};
    pub use crate::{assert, check, valid};
}

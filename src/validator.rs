//! Custom validation capability
//!
//! Any type can take over its own validity rules by implementing [`Validate`].
//! There is nothing to register: once the trait is implemented, the value
//! participates in [`valid`](crate::valid) and [`assert`](crate::assert)
//! through [`Value::custom`](crate::Value::custom) or the
//! [`valid!`](crate::valid!) / [`check!`](crate::check!) macros.
//!
//! # Example
//!
//! ```
//! use validity::{valid, Validate};
//!
//! struct Port(u16);
//!
//! impl Validate for Port {
//!     fn validate(&self) -> bool {
//!         self.0 != 0
//!     }
//! }
//!
//! assert!(valid!(Port(8080)));
//! assert!(!valid!(Port(0)));
//!
//! // References and smart pointers forward to the inner implementation.
//! let port = Port(443);
//! assert!(valid!(&port));
//! assert!(valid!(Box::new(Port(22))));
//! ```

use std::rc::Rc;
use std::sync::Arc;

/// A value that knows whether it is valid.
///
/// Implementations take `&self`, so the capability is available whether the
/// value is held directly or behind any kind of reference.
pub trait Validate {
    /// Returns `true` if the value satisfies its own rules.
    fn validate(&self) -> bool;
}

impl<T: Validate + ?Sized> Validate for &T {
    #[inline]
    fn validate(&self) -> bool {
        (**self).validate()
    }
}

impl<T: Validate + ?Sized> Validate for &mut T {
    #[inline]
    fn validate(&self) -> bool {
        (**self).validate()
    }
}

impl<T: Validate + ?Sized> Validate for Box<T> {
    #[inline]
    fn validate(&self) -> bool {
        (**self).validate()
    }
}

impl<T: Validate + ?Sized> Validate for Rc<T> {
    #[inline]
    fn validate(&self) -> bool {
        (**self).validate()
    }
}

impl<T: Validate + ?Sized> Validate for Arc<T> {
    #[inline]
    fn validate(&self) -> bool {
        (**self).validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Flag(bool);

    impl Validate for Flag {
        fn validate(&self) -> bool {
            self.0
        }
    }

    fn run<V: Validate>(v: V) -> bool {
        v.validate()
    }

    #[test]
    fn test_owned_and_borrowed_agree() {
        let ok = Flag(true);
        let bad = Flag(false);

        assert!(run(&ok));
        assert!(!run(&bad));
        assert!(run(&&ok));
        assert!(run(Flag(true)));
        assert!(!run(Flag(false)));
    }

    #[test]
    fn test_smart_pointers_forward() {
        assert!(run(Box::new(Flag(true))));
        assert!(!run(Rc::new(Flag(false))));
        assert!(run(Arc::new(Flag(true))));

        let mut flag = Flag(false);
        assert!(!run(&mut flag));
    }

    #[test]
    fn test_trait_object() {
        let boxed: Box<dyn Validate> = Box::new(Flag(false));
        assert!(!run(&boxed));
        assert!(!boxed.validate());
    }
}

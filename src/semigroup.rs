//! Semigroup trait for accumulating validation failures
//!
//! A Semigroup is a type with an associative binary operation. The batch
//! engine relies on it to fold the failures of every validator in a batch
//! into one [`ValidationErrors`](crate::ValidationErrors) without caring
//! whether a validator reported one failure or a whole collection.
//!
//! # Laws
//!
//! ```text
//! a.combine(b).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```
//! use rampart::{Semigroup, ValidationError, ValidationErrors};
//!
//! let first = ValidationErrors::single(ValidationError::new("too short"));
//! let second = ValidationErrors::single(ValidationError::new("should be in"));
//!
//! let all = first.combine(second);
//! assert_eq!(all.messages(), vec!["too short", "should be in"]);
//! ```
//!
//! `Option<S>` is a semigroup whenever `S` is, with `None` acting as the
//! identity. That is what lets the engine start from "no failures yet":
//!
//! ```
//! use rampart::{Semigroup, ValidationError, ValidationErrors};
//!
//! let nothing: Option<ValidationErrors> = None;
//! let some = Some(ValidationErrors::single(ValidationError::new("too long")));
//!
//! assert_eq!(nothing.combine(some.clone()), some);
//! ```

/// A type that supports an associative binary operation
///
/// `combine` takes `self` by value; clone first if the originals are still
/// needed.
pub trait Semigroup: Sized {
    /// Combine this value with another value associatively
    ///
    /// # Examples
    ///
    /// ```
    /// use rampart::{Semigroup, ValidationError, ValidationErrors};
    ///
    /// let a = ValidationErrors::single(ValidationError::new("a"));
    /// let b = ValidationErrors::new(ValidationError::new("b"), vec![ValidationError::new("c")]);
    /// assert_eq!(a.combine(b).messages(), vec!["a", "b", "c"]);
    /// ```
    fn combine(self, other: Self) -> Self;
}

impl<S: Semigroup> Semigroup for Option<S> {
    #[inline]
    fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Some(a), Some(b)) => Some(a.combine(b)),
            (Some(a), None) => Some(a),
            (None, b) => b,
        }
    }
}

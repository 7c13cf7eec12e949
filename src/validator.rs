//! The `Validator` trait and helpers for building heterogeneous batches
//!
//! A validator owns whatever it checks and answers one question: does it
//! pass? Leaves, wrappers and logical groups all implement the same trait,
//! so they nest freely.
//!
//! # Example
//!
//! ```rust
//! use rampart::prelude::*;
//!
//! let name = String::from("ada");
//! let batch = validators![
//!     NotBlank::new(name.clone()),
//!     Length::new(name, 2, 32),
//!     GreaterThan::new(36, 18),
//! ];
//!
//! assert!(validate(&batch).is_ok());
//! ```

use crate::error::Failure;

/// A unit that checks one condition.
///
/// `validate` returns `Ok(())` when the condition holds and a [`Failure`]
/// otherwise. Validators must not have side effects beyond reading the
/// values they were built with.
///
/// # Example
///
/// ```rust
/// use rampart::{Failure, Validator};
///
/// struct Positive(i64);
///
/// impl Validator for Positive {
///     fn validate(&self) -> Result<(), Failure> {
///         if self.0 > 0 {
///             Ok(())
///         } else {
///             Err(Failure::single("should be positive"))
///         }
///     }
/// }
///
/// assert!(Positive(3).validate().is_ok());
/// assert!(Positive(-3).validate().is_err());
/// ```
pub trait Validator: Send + Sync {
    /// Run the check.
    fn validate(&self) -> Result<(), Failure>;

    /// Whether a validation failure from this validator halts the
    /// surrounding batch.
    ///
    /// Only [`Strict`](crate::combinators::Strict) answers `true`; wrappers
    /// that delegate should forward it.
    fn is_strict(&self) -> bool {
        false
    }
}

/// An owned, type-erased validator. Batches are slices of these.
pub type BoxedValidator = Box<dyn Validator>;

impl<V: Validator + ?Sized> Validator for Box<V> {
    #[inline]
    fn validate(&self) -> Result<(), Failure> {
        (**self).validate()
    }

    #[inline]
    fn is_strict(&self) -> bool {
        (**self).is_strict()
    }
}

impl<V: Validator + ?Sized> Validator for &V {
    #[inline]
    fn validate(&self) -> Result<(), Failure> {
        (**self).validate()
    }

    #[inline]
    fn is_strict(&self) -> bool {
        (**self).is_strict()
    }
}

impl<V: Validator + ?Sized> Validator for std::sync::Arc<V> {
    #[inline]
    fn validate(&self) -> Result<(), Failure> {
        (**self).validate()
    }

    #[inline]
    fn is_strict(&self) -> bool {
        (**self).is_strict()
    }
}

/// Validator backed by a closure. Created by [`from_fn`].
#[derive(Clone, Copy)]
pub struct FromFn<F>(F);

impl<F> std::fmt::Debug for FromFn<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FromFn").finish_non_exhaustive()
    }
}

impl<F> Validator for FromFn<F>
where
    F: Fn() -> Result<(), Failure> + Send + Sync,
{
    #[inline]
    fn validate(&self) -> Result<(), Failure> {
        (self.0)()
    }
}

/// Build a validator from a closure.
///
/// Handy for one-off checks and for validators that can malfunction, such as
/// ones consulting a lookup table.
///
/// # Example
///
/// ```rust
/// use rampart::{from_fn, Failure, Validator};
///
/// let reserved = ["admin", "root"];
/// let username = "guest";
///
/// let v = from_fn(move || {
///     if reserved.contains(&username) {
///         Err(Failure::single("is reserved"))
///     } else {
///         Ok(())
///     }
/// });
/// assert!(v.validate().is_ok());
/// ```
pub fn from_fn<F>(f: F) -> FromFn<F>
where
    F: Fn() -> Result<(), Failure> + Send + Sync,
{
    FromFn(f)
}

/// Box a validator for use in a batch.
#[inline]
pub fn boxed<V: Validator + 'static>(validator: V) -> BoxedValidator {
    Box::new(validator)
}

/// Build a `Vec<BoxedValidator>` from validators of different types.
///
/// # Example
///
/// ```rust
/// use rampart::prelude::*;
///
/// let batch = validators![IsOdd::new(3), LessThan::new(3, 10)];
/// assert_eq!(batch.len(), 2);
/// ```
#[macro_export]
macro_rules! validators {
    () => {
        ::std::vec::Vec::<$crate::BoxedValidator>::new()
    };
    ($($validator:expr),+ $(,)?) => {
        ::std::vec![$($crate::validator::boxed($validator)),+]
    };
}

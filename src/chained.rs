//! Fluent builder that runs several checks against one value
//!
//! A [`Chain`] holds a value and a list of steps. Each step is a leaf
//! validator built without a value (`IsEven::default()`,
//! `InRange::between(18, 65)`, `Length::between(2, 255)`); [`Chain::with`]
//! fills the chain's value into it and appends it wrapped in
//! [`Strict`](crate::combinators::Strict). Since every step is strict, a
//! chain reports at most one failure: the first step that fails.
//!
//! # Example
//!
//! ```rust
//! use rampart::prelude::*;
//!
//! let name = validate_str("nauyey")
//!     .with(NotBlank::default())
//!     .with(Length::between(2, 255))
//!     .with(Inclusion::of(["Kent", "Bob", "Fowler"]))
//!     .with(Exclusion::of(["Jack"]));
//!
//! assert_invalid!(name.run(), ["should be in"]);
//! ```
//!
//! A chain is itself a validator, so it can sit in a batch next to other
//! validators. The halt stays inside the chain:
//!
//! ```rust
//! use rampart::prelude::*;
//!
//! let batch = validators![
//!     validate_int(7)
//!         .with(IsEven::default().message("age must be even"))
//!         .with(InRange::between(18, 65)),
//!     NotBlank::new(""),
//! ];
//!
//! assert_invalid!(validate(&batch), ["age must be even", "shouldn't be blank"]);
//! ```

use crate::batch;
use crate::combinators::Strict;
use crate::error::{BatchError, Failure};
use crate::{BoxedValidator, Validator};

/// A validator whose value can be filled in after construction.
///
/// Implemented by the numeric leaves for the type they compare, and by the
/// string leaves for `String`.
pub trait ValueValidator<T>: Validator {
    /// Replace the value this validator checks.
    fn set_value(&mut self, value: T);
}

/// One value checked by a sequence of strict steps.
///
/// Created by [`validate`], [`validate_int`] or [`validate_str`].
pub struct Chain<T> {
    value: T,
    steps: Vec<BoxedValidator>,
}

impl<T: Clone> Chain<T> {
    /// Start a chain over `value` with no steps.
    pub fn new(value: T) -> Self {
        Chain {
            value,
            steps: Vec::new(),
        }
    }

    /// Fill the chain's value into `validator` and append it as a strict
    /// step.
    pub fn with<V>(mut self, mut validator: V) -> Self
    where
        V: ValueValidator<T> + 'static,
    {
        validator.set_value(self.value.clone());
        self.steps.push(Box::new(Strict::new(vec![Box::new(validator)])));
        self
    }
}

impl<T> Chain<T> {
    /// The value being checked.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Number of steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// `true` when no step has been added.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Run every step and report the outcome the way
    /// [`validate`](crate::validate) does.
    pub fn run(&self) -> Result<(), BatchError> {
        batch::validate(&self.steps)
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Chain<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Chain")
            .field("value", &self.value)
            .field("steps", &self.steps.len())
            .finish()
    }
}

impl<T: Send + Sync> Validator for Chain<T> {
    fn validate(&self) -> Result<(), Failure> {
        self.run().map_err(Failure::from)
    }
}

/// Start a chain over any value.
///
/// ```rust
/// use rampart::chained;
/// use rampart::prelude::*;
///
/// let price = chained::validate(9.5_f64)
///     .with(GreaterThan::target(0.0))
///     .with(LessThanOrEqual::target(100.0));
///
/// assert!(price.run().is_ok());
/// ```
pub fn validate<T: Clone>(value: T) -> Chain<T> {
    Chain::new(value)
}

/// Start a chain over an integer.
pub fn validate_int(value: i64) -> Chain<i64> {
    Chain::new(value)
}

/// Start a chain over a string.
pub fn validate_str(value: &str) -> Chain<String> {
    Chain::new(value.to_string())
}

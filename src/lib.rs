//! # Rampart
//!
//! Declarative, composable validation for Rust.
//!
//! Build each check as a small [`Validator`], put them in a batch, and run
//! the batch once. Every validation failure is collected into a single
//! flattened list, in order; a validator that malfunctions stops the batch
//! and is reported on its own.
//!
//! ## Composition
//!
//! - [`strict`](combinators::strict): run members in order, stop at the first
//!   failure and halt the enclosing batch.
//! - [`allow_none`](combinators::allow_none): skip a validator that is
//!   absent.
//! - [`or`](combinators::or), [`xor`](combinators::xor),
//!   [`nand`](combinators::nand): logical groups that count passing members.
//! - [`chained`]: check one value against a sequence of strict steps.
//!
//! ## Quick Example
//!
//! ```rust
//! use rampart::prelude::*;
//!
//! let username = "";
//! let email: Option<String> = None;
//! let phone = "";
//! let age = 16;
//!
//! let result = validate(&validators![
//!     strict(validators![
//!         NotBlank::new(username).message("username is required"),
//!         Length::new(username, 3, 32),
//!     ]),
//!     or(validators![NotNone::new(email), NotBlank::new(phone)])
//!         .message("provide an email or a phone number"),
//!     InRange::new(age, 18, 130).left_message("you must be an adult"),
//! ]);
//!
//! // the strict group halted the batch after its first failure
//! assert_invalid!(result, ["username is required"]);
//! ```
//!
//! ## Cargo features
//!
//! - `tracing`: structured logging of batch progress
//! - `serde`: `Serialize`/`Deserialize` for validation errors
//! - `proptest`: `Arbitrary` strategies in [`testing`]

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod batch;
pub mod chained;
pub mod combinators;
pub mod error;
pub mod semigroup;
pub mod testing;
pub mod validator;
pub mod validators;

#[cfg(feature = "serde")]
mod serde_impl;

// Re-exports
pub use batch::validate;
pub use error::{BatchError, Failure, OperationalError, ValidationError, ValidationErrors};
pub use semigroup::Semigroup;
pub use validator::{from_fn, BoxedValidator, FromFn, Validator};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::batch::validate;
    pub use crate::chained::{validate_int, validate_str, Chain, ValueValidator};
    pub use crate::combinators::{
        allow_none, nand, or, strict, xor, AllowNone, Nand, Or, Strict, Xor,
    };
    pub use crate::error::{
        BatchError, Failure, OperationalError, ValidationError, ValidationErrors,
    };
    pub use crate::semigroup::Semigroup;
    pub use crate::validator::{from_fn, BoxedValidator, Validator};
    pub use crate::validators::{
        EqualTo, Exclusion, GreaterThan, GreaterThanOrEqual, InRange, Inclusion, IsEven, IsOdd,
        Length, LessThan, LessThanOrEqual, NotBlank, NotNone,
    };
    pub use crate::{assert_invalid, assert_operational, assert_valid, validators};
}

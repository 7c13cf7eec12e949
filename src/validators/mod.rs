//! Leaf validators for common field checks
//!
//! Every leaf owns the value it checks, carries a default failure message,
//! and lets the caller replace that message with a builder-style setter:
//!
//! ```rust
//! use rampart::prelude::*;
//!
//! let age = GreaterThanOrEqual::new(16, 18).message("you must be an adult");
//! assert_invalid!(age.validate(), ["you must be an adult"]);
//! ```
//!
//! Checks with two distinct ways to fail ([`InRange`], [`Length`]) expose one
//! setter per side.
//!
//! # Available validators
//!
//! | validator | passes when |
//! |-----------|-------------|
//! | [`NotNone`] | the option is `Some` |
//! | [`IsOdd`], [`IsEven`] | parity matches |
//! | [`GreaterThan`], [`GreaterThanOrEqual`], [`EqualTo`], [`LessThan`], [`LessThanOrEqual`] | comparison with a target holds |
//! | [`InRange`] | `left <= value <= right` |
//! | [`NotBlank`] | the string has a non-whitespace character |
//! | [`Inclusion`], [`Exclusion`] | the string is (not) in a list |
//! | [`Length`] | `min <= chars <= max` |

use std::borrow::Cow;

use crate::error::{Failure, ValidationError};

mod numeric;
mod option;
mod string;

pub use numeric::{
    EqualTo, GreaterThan, GreaterThanOrEqual, InRange, Integer, IsEven, IsOdd, LessThan,
    LessThanOrEqual,
};
pub use option::NotNone;
pub use string::{Exclusion, Inclusion, Length, NotBlank};

/// A single failure carrying the override if one was set, the default
/// otherwise.
pub(crate) fn reject(message: &Option<Cow<'static, str>>, default: &'static str) -> Failure {
    let message = message.clone().unwrap_or(Cow::Borrowed(default));
    Failure::Single(ValidationError::new(message))
}

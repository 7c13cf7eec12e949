//! Validators built out of other validators
//!
//! - [`Strict`] runs its members until the first failure and halts the
//!   surrounding batch when it fails.
//! - [`AllowNone`] passes when the wrapped validator is absent.
//! - [`Or`], [`Xor`] and [`Nand`] decide from how many members passed.
//!
//! All of them are [`Validator`](crate::Validator)s themselves, so they nest:
//!
//! ```rust
//! use rampart::prelude::*;
//!
//! let age: Option<i64> = Some(17);
//!
//! let batch = validators![
//!     strict(validators![
//!         NotNone::new(age),
//!         allow_none(age.map(|a| GreaterThanOrEqual::new(a, 18))),
//!     ]),
//!     xor(validators![
//!         NotBlank::new("ada@example.com"),
//!         NotBlank::new(""),
//!     ]),
//! ];
//!
//! assert_invalid!(validate(&batch), ["should be greater than or equal to"]);
//! ```

mod allow_none;
mod logical;
mod strict;

pub use allow_none::{allow_none, AllowNone};
pub use logical::{nand, or, xor, Nand, Or, Xor};
pub use strict::{strict, Strict};

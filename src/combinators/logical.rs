//! Logical groups: OR, XOR and NAND over a set of members
//!
//! Each group runs its members as an ordinary (non-strict) sub-batch, counts
//! how many members failed, takes every other member as passed, and reports one generic failure of its own when
//! the count does not satisfy its rule. Which members failed, and with which
//! messages, is not reported.
//!
//! | group  | passes when                | default message |
//! |--------|----------------------------|-----------------|
//! | `Or`   | at least one member passed | `at least one`  |
//! | `Xor`  | exactly one member passed  | `only one`      |
//! | `Nand` | at least one member failed | `not all`       |
//!
//! A member counts once however many messages it produced. If a member
//! malfunctions, the operational error propagates out of the group
//! unchanged. If a strict member halts the sub-batch, the members after it
//! never run and count as passed.

use std::borrow::Cow;

use crate::batch;
use crate::error::Failure;
use crate::validators::reject;
use crate::{BoxedValidator, Validator};

macro_rules! logical_group {
    (
        $(#[$meta:meta])*
        $name:ident, $ctor:ident, $default:literal, |$tally:ident| $holds:expr
    ) => {
        $(#[$meta])*
        pub struct $name {
            validators: Vec<BoxedValidator>,
            message: Option<Cow<'static, str>>,
        }

        impl $name {
            /// Default failure message.
            pub const DEFAULT_MESSAGE: &'static str = $default;

            /// Create the group over `validators`.
            pub fn new(validators: Vec<BoxedValidator>) -> Self {
                $name {
                    validators,
                    message: None,
                }
            }

            /// Override the failure message.
            pub fn message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
                self.message = Some(message.into());
                self
            }

            /// Number of members.
            pub fn len(&self) -> usize {
                self.validators.len()
            }

            /// `true` when the group has no members.
            pub fn is_empty(&self) -> bool {
                self.validators.is_empty()
            }
        }

        impl std::fmt::Debug for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.debug_struct(stringify!($name))
                    .field("validators", &self.validators.len())
                    .field("message", &self.message)
                    .finish()
            }
        }

        impl Validator for $name {
            fn validate(&self) -> Result<(), Failure> {
                let $tally = batch::run(&self.validators)?;

                #[cfg(feature = "tracing")]
                tracing::trace!(
                    group = stringify!($name),
                    total = $tally.total,
                    ran = $tally.ran,
                    failed = $tally.failed,
                    "logical group evaluated"
                );

                if $holds {
                    Ok(())
                } else {
                    Err(reject(&self.message, Self::DEFAULT_MESSAGE))
                }
            }
        }

        #[doc = concat!("Build a [`", stringify!($name), "`] group over `validators`.")]
        pub fn $ctor(validators: Vec<BoxedValidator>) -> $name {
            $name::new(validators)
        }
    };
}

logical_group! {
    /// Passes when at least one member passes.
    ///
    /// # Example
    ///
    /// ```rust
    /// use rampart::prelude::*;
    ///
    /// let contact = or(validators![
    ///     NotBlank::new(""),
    ///     NotBlank::new("+44 20 7946 0000"),
    /// ]);
    /// assert!(contact.validate().is_ok());
    ///
    /// let none = or(validators![IsOdd::new(2), IsOdd::new(4)]);
    /// assert_invalid!(none.validate(), ["at least one"]);
    /// ```
    Or, or, "at least one", |tally| tally.passed() >= 1
}

logical_group! {
    /// Passes when exactly one member passes.
    ///
    /// # Example
    ///
    /// ```rust
    /// use rampart::prelude::*;
    ///
    /// let one_of = xor(validators![IsOdd::new(3), IsOdd::new(4), IsOdd::new(6)]);
    /// assert!(one_of.validate().is_ok());
    ///
    /// let two = xor(validators![IsOdd::new(3), IsOdd::new(5), IsOdd::new(6)]);
    /// assert_invalid!(two.validate(), ["only one"]);
    /// ```
    Xor, xor, "only one", |tally| tally.passed() == 1
}

logical_group! {
    /// Passes when at least one member fails.
    ///
    /// # Example
    ///
    /// ```rust
    /// use rampart::prelude::*;
    ///
    /// let not_all = nand(validators![IsOdd::new(3), IsOdd::new(4)]);
    /// assert!(not_all.validate().is_ok());
    ///
    /// let all = nand(validators![IsOdd::new(3), IsOdd::new(5)])
    ///     .message("pick a different combination");
    /// assert_invalid!(all.validate(), ["pick a different combination"]);
    /// ```
    Nand, nand, "not all", |tally| tally.failed >= 1
}

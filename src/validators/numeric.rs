//! Numeric validators
//!
//! Comparisons work for any `PartialOrd` type; parity checks need an
//! [`Integer`].

use std::borrow::Cow;

use super::reject;
use crate::chained::ValueValidator;
use crate::error::Failure;
use crate::Validator;

/// Primitive integers, for parity checks.
pub trait Integer: Copy + Send + Sync {
    /// `true` when the value is divisible by two.
    fn is_even(self) -> bool;
}

macro_rules! impl_integer {
    ($($t:ty),+) => {
        $(
            impl Integer for $t {
                #[inline]
                fn is_even(self) -> bool {
                    self % 2 == 0
                }
            }
        )+
    };
}

impl_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! parity_validator {
    ($(#[$meta:meta])* $name:ident, $default:literal, |$value:ident| $holds:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Default)]
        pub struct $name<T> {
            value: T,
            message: Option<Cow<'static, str>>,
        }

        impl<T> $name<T> {
            /// Default failure message.
            pub const DEFAULT_MESSAGE: &'static str = $default;

            /// Check `value`.
            pub fn new(value: T) -> Self {
                $name {
                    value,
                    message: None,
                }
            }

            /// Override the failure message.
            pub fn message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
                self.message = Some(message.into());
                self
            }
        }

        impl<T: Integer> Validator for $name<T> {
            fn validate(&self) -> Result<(), Failure> {
                let $value = self.value;
                if $holds {
                    Ok(())
                } else {
                    Err(reject(&self.message, Self::DEFAULT_MESSAGE))
                }
            }
        }

        impl<T: Integer> ValueValidator<T> for $name<T> {
            fn set_value(&mut self, value: T) {
                self.value = value;
            }
        }
    };
}

parity_validator! {
    /// Passes when the value is odd.
    ///
    /// ```rust
    /// use rampart::prelude::*;
    ///
    /// assert!(IsOdd::new(5).validate().is_ok());
    /// assert!(IsOdd::new(-3).validate().is_ok());
    /// assert_invalid!(IsOdd::new(4).validate(), ["should be odd"]);
    /// ```
    IsOdd, "should be odd", |value| !value.is_even()
}

parity_validator! {
    /// Passes when the value is even.
    IsEven, "should be even", |value| value.is_even()
}

macro_rules! comparison_validator {
    (
        $(#[$meta:meta])*
        $name:ident: $bound:ident, $default:literal, |$value:ident, $target:ident| $holds:expr
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $name<T> {
            value: T,
            target: T,
            message: Option<Cow<'static, str>>,
        }

        impl<T> $name<T> {
            /// Default failure message.
            pub const DEFAULT_MESSAGE: &'static str = $default;

            /// Compare `value` against `target`.
            pub fn new(value: T, target: T) -> Self {
                $name {
                    value,
                    target,
                    message: None,
                }
            }

            /// Compare against `target`; the value is filled in later by a
            /// [`Chain`](crate::chained::Chain).
            pub fn target(target: T) -> Self
            where
                T: Default,
            {
                Self::new(T::default(), target)
            }

            /// Override the failure message.
            pub fn message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
                self.message = Some(message.into());
                self
            }
        }

        impl<T: $bound + Send + Sync> Validator for $name<T> {
            fn validate(&self) -> Result<(), Failure> {
                let ($value, $target) = (&self.value, &self.target);
                if $holds {
                    Ok(())
                } else {
                    Err(reject(&self.message, Self::DEFAULT_MESSAGE))
                }
            }
        }

        impl<T: $bound + Send + Sync> ValueValidator<T> for $name<T> {
            fn set_value(&mut self, value: T) {
                self.value = value;
            }
        }
    };
}

comparison_validator! {
    /// Passes when `value > target`.
    ///
    /// ```rust
    /// use rampart::prelude::*;
    ///
    /// assert!(GreaterThan::new(6, 5).validate().is_ok());
    /// assert_invalid!(GreaterThan::new(5, 5).validate(), ["should be greater than"]);
    /// ```
    GreaterThan: PartialOrd, "should be greater than", |value, target| value > target
}

comparison_validator! {
    /// Passes when `value >= target`.
    GreaterThanOrEqual: PartialOrd, "should be greater than or equal to", |value, target| value >= target
}

comparison_validator! {
    /// Passes when `value == target`.
    EqualTo: PartialEq, "should equal to", |value, target| value == target
}

comparison_validator! {
    /// Passes when `value < target`.
    LessThan: PartialOrd, "should be less than", |value, target| value < target
}

comparison_validator! {
    /// Passes when `value <= target`.
    ///
    /// Works for any `PartialOrd` type, floats included:
    ///
    /// ```rust
    /// use rampart::prelude::*;
    ///
    /// assert!(LessThanOrEqual::new(0.5, 0.5).validate().is_ok());
    /// assert!(LessThanOrEqual::new(f64::NAN, 1.0).validate().is_err());
    /// ```
    LessThanOrEqual: PartialOrd, "should be less than or equal to", |value, target| value <= target
}

/// Passes when `left <= value <= right`.
///
/// Falling below `left` and rising above `right` report different messages,
/// each with its own override.
///
/// # Example
///
/// ```rust
/// use rampart::prelude::*;
///
/// let age = |value: i32| InRange::new(value, 18, 65).left_message("too young");
///
/// assert!(age(18).validate().is_ok());
/// assert_invalid!(age(17).validate(), ["too young"]);
/// assert_invalid!(age(66).validate(), ["should be less than or equal to right"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InRange<T> {
    value: T,
    left: T,
    right: T,
    left_message: Option<Cow<'static, str>>,
    right_message: Option<Cow<'static, str>>,
}

impl<T> InRange<T> {
    /// Default message when the value is below `left`.
    pub const DEFAULT_LEFT_MESSAGE: &'static str = "should be greater than or equal to left";
    /// Default message when the value is above `right`.
    pub const DEFAULT_RIGHT_MESSAGE: &'static str = "should be less than or equal to right";

    /// Check that `value` lies in `left..=right`.
    pub fn new(value: T, left: T, right: T) -> Self {
        InRange {
            value,
            left,
            right,
            left_message: None,
            right_message: None,
        }
    }

    /// Bounds only; the value is filled in later by a
    /// [`Chain`](crate::chained::Chain).
    pub fn between(left: T, right: T) -> Self
    where
        T: Default,
    {
        Self::new(T::default(), left, right)
    }

    /// Override the message reported below `left`.
    pub fn left_message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.left_message = Some(message.into());
        self
    }

    /// Override the message reported above `right`.
    pub fn right_message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.right_message = Some(message.into());
        self
    }
}

impl<T: PartialOrd + Send + Sync> Validator for InRange<T> {
    fn validate(&self) -> Result<(), Failure> {
        if self.value < self.left {
            return Err(reject(&self.left_message, Self::DEFAULT_LEFT_MESSAGE));
        }
        if self.value > self.right {
            return Err(reject(&self.right_message, Self::DEFAULT_RIGHT_MESSAGE));
        }
        Ok(())
    }
}

impl<T: PartialOrd + Send + Sync> ValueValidator<T> for InRange<T> {
    fn set_value(&mut self, value: T) {
        self.value = value;
    }
}

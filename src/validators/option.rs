use std::borrow::Cow;

use super::reject;
use crate::error::Failure;
use crate::Validator;

/// Passes when the value is present.
///
/// # Example
///
/// ```rust
/// use rampart::prelude::*;
///
/// let email: Option<String> = None;
///
/// assert_invalid!(NotNone::new(email).validate(), ["shouldn't be none"]);
/// assert!(NotNone::new(Some(0)).validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotNone<T> {
    value: Option<T>,
    message: Option<Cow<'static, str>>,
}

impl<T> NotNone<T> {
    /// Default failure message.
    pub const DEFAULT_MESSAGE: &'static str = "shouldn't be none";

    /// Check that `value` is `Some`.
    pub fn new(value: Option<T>) -> Self {
        NotNone {
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

impl<T: Send + Sync> Validator for NotNone<T> {
    fn validate(&self) -> Result<(), Failure> {
        match self.value {
            Some(_) => Ok(()),
            None => Err(reject(&self.message, Self::DEFAULT_MESSAGE)),
        }
    }
}

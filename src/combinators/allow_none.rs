//! Optional validators that pass when absent

use crate::error::Failure;
use crate::Validator;

/// Wraps a validator that may not exist.
///
/// `None` always passes. `Some(v)` behaves exactly like `v`: same outcome,
/// same strictness.
#[derive(Debug, Clone, Default)]
pub struct AllowNone<V> {
    validator: Option<V>,
}

impl<V> AllowNone<V> {
    /// Wrap an optional validator.
    pub fn new(validator: Option<V>) -> Self {
        AllowNone { validator }
    }

    /// The wrapped validator, if present.
    pub fn inner(&self) -> Option<&V> {
        self.validator.as_ref()
    }
}

impl<V: Validator> Validator for AllowNone<V> {
    fn validate(&self) -> Result<(), Failure> {
        match &self.validator {
            Some(validator) => validator.validate(),
            None => Ok(()),
        }
    }

    fn is_strict(&self) -> bool {
        self.validator.as_ref().is_some_and(Validator::is_strict)
    }
}

/// Treat a missing validator as passing.
///
/// # Example
///
/// ```rust
/// use rampart::prelude::*;
///
/// fn nickname_rule(nickname: Option<&str>) -> Option<Length> {
///     nickname.map(|n| Length::new(n, 2, 16))
/// }
///
/// let batch = validators![
///     allow_none(nickname_rule(None)),
///     allow_none(nickname_rule(Some("x"))),
/// ];
///
/// assert_invalid!(validate(&batch), ["too short"]);
/// ```
pub fn allow_none<V: Validator>(validator: Option<V>) -> AllowNone<V> {
    AllowNone::new(validator)
}

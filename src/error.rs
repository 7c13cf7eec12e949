//! Error model for validation outcomes
//!
//! A validator can end in one of three ways besides passing:
//!
//! - a single [`ValidationError`]: the checked value is unacceptable;
//! - a [`ValidationErrors`] collection: several problems at once;
//! - an [`OperationalError`]: the validator itself is broken and the batch
//!   must stop.
//!
//! [`Failure`] is the tagged union over those three. The batch engine folds
//! the first two into one flattened collection and returns
//! [`BatchError::Invalid`]; the third is surfaced untouched as
//! [`BatchError::Operational`].
//!
//! # Examples
//!
//! ```
//! use rampart::{BatchError, ValidationError, ValidationErrors};
//!
//! let errors = ValidationErrors::new(
//!     ValidationError::new("too short"),
//!     vec![ValidationError::new("should be in")],
//! );
//! let err = BatchError::Invalid(errors);
//!
//! match err.validation_errors() {
//!     Some(errors) => assert_eq!(errors.messages(), vec!["too short", "should be in"]),
//!     None => panic!("expected validation errors"),
//! }
//! ```

use std::borrow::Cow;
use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

use crate::Semigroup;

/// A single validation failure carrying a human-readable message.
///
/// Messages are `Cow<'static, str>` so the built-in defaults never allocate.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ValidationError {
    message: Cow<'static, str>,
}

impl ValidationError {
    /// Create a validation error with the given message.
    ///
    /// # Examples
    ///
    /// ```
    /// use rampart::ValidationError;
    ///
    /// let err = ValidationError::new("shouldn't be blank");
    /// assert_eq!(err.message(), "shouldn't be blank");
    /// ```
    pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
        ValidationError {
            message: message.into(),
        }
    }

    /// The message this failure reports.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl StdError for ValidationError {}

/// An ordered, flattened and never-empty collection of validation failures.
///
/// The first failure is stored apart from the rest, so a `ValidationErrors`
/// value always means "validation failed". Passing is expressed as `Ok(())`.
///
/// # Examples
///
/// ```
/// use rampart::{ValidationError, ValidationErrors};
///
/// let mut errors = ValidationErrors::single(ValidationError::new("too short"));
/// errors.push(ValidationError::new("shouldn't be in"));
///
/// assert_eq!(errors.len(), 2);
/// assert_eq!(errors.first().message(), "too short");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors {
    head: ValidationError,
    tail: Vec<ValidationError>,
}

impl ValidationErrors {
    /// Create a collection from its first failure and the remaining ones.
    pub fn new(head: ValidationError, tail: Vec<ValidationError>) -> Self {
        ValidationErrors { head, tail }
    }

    /// Create a collection holding exactly one failure.
    pub fn single(error: ValidationError) -> Self {
        Self::new(error, Vec::new())
    }

    /// Try to build a collection from a `Vec`.
    ///
    /// Returns `None` for an empty vector, since an empty collection would
    /// mean "passed".
    ///
    /// # Examples
    ///
    /// ```
    /// use rampart::{ValidationError, ValidationErrors};
    ///
    /// assert!(ValidationErrors::from_vec(Vec::new()).is_none());
    ///
    /// let errors = ValidationErrors::from_vec(vec![ValidationError::new("too long")]).unwrap();
    /// assert_eq!(errors.len(), 1);
    /// ```
    pub fn from_vec(errors: Vec<ValidationError>) -> Option<Self> {
        let mut errors = errors.into_iter();
        errors.next().map(|head| Self::new(head, errors.collect()))
    }

    /// The first failure in report order.
    pub fn first(&self) -> &ValidationError {
        &self.head
    }

    /// Number of individual failures. Always at least one.
    pub fn len(&self) -> usize {
        1 + self.tail.len()
    }

    /// Always `false`; present for `len_without_is_empty`.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Append a failure at the end.
    pub fn push(&mut self, error: ValidationError) {
        self.tail.push(error);
    }

    /// Iterate over the failures in report order.
    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        std::iter::once(&self.head).chain(self.tail.iter())
    }

    /// The messages of every failure, in report order.
    ///
    /// # Examples
    ///
    /// ```
    /// use rampart::{ValidationError, ValidationErrors};
    ///
    /// let errors = ValidationErrors::new(
    ///     ValidationError::new("should be odd"),
    ///     vec![ValidationError::new("should be less than")],
    /// );
    /// assert_eq!(errors.messages(), vec!["should be odd", "should be less than"]);
    /// ```
    pub fn messages(&self) -> Vec<&str> {
        self.iter().map(ValidationError::message).collect()
    }

    /// Convert into a plain `Vec`.
    pub fn into_vec(self) -> Vec<ValidationError> {
        let mut errors = Vec::with_capacity(self.len());
        errors.push(self.head);
        errors.extend(self.tail);
        errors
    }
}

// Concatenation keeps report order: everything in `self` comes first.
impl Semigroup for ValidationErrors {
    fn combine(mut self, other: Self) -> Self {
        self.tail.push(other.head);
        self.tail.extend(other.tail);
        self
    }
}

impl From<ValidationError> for ValidationErrors {
    fn from(error: ValidationError) -> Self {
        ValidationErrors::single(error)
    }
}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::iter::Chain<std::iter::Once<ValidationError>, std::vec::IntoIter<ValidationError>>;

    fn into_iter(self) -> Self::IntoIter {
        std::iter::once(self.head).chain(self.tail)
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a ValidationError;
    type IntoIter =
        std::iter::Chain<std::iter::Once<&'a ValidationError>, std::slice::Iter<'a, ValidationError>>;

    fn into_iter(self) -> Self::IntoIter {
        std::iter::once(&self.head).chain(self.tail.iter())
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.head)?;
        for error in &self.tail {
            write!(f, "; {}", error)?;
        }
        Ok(())
    }
}

impl StdError for ValidationErrors {}

/// An error signalling that a validator malfunctioned rather than rejected
/// its value.
///
/// The cause is shared behind an `Arc` so outcomes stay cheap to clone.
///
/// # Examples
///
/// ```
/// use rampart::OperationalError;
///
/// let err = OperationalError::new("lookup table missing");
/// assert_eq!(err.to_string(), "lookup table missing");
/// ```
#[derive(Debug, Clone)]
pub struct OperationalError {
    cause: Arc<dyn StdError + Send + Sync + 'static>,
}

impl OperationalError {
    /// Wrap any error (or a plain message) as an operational error.
    pub fn new(cause: impl Into<Box<dyn StdError + Send + Sync + 'static>>) -> Self {
        OperationalError {
            cause: Arc::from(cause.into()),
        }
    }

    /// The underlying cause.
    pub fn inner(&self) -> &(dyn StdError + Send + Sync + 'static) {
        &*self.cause
    }

    /// Attempt to view the cause as a concrete error type.
    ///
    /// # Examples
    ///
    /// ```
    /// use rampart::OperationalError;
    ///
    /// let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
    /// let err = OperationalError::new(io);
    /// assert!(err.downcast_ref::<std::io::Error>().is_some());
    /// ```
    pub fn downcast_ref<E: StdError + 'static>(&self) -> Option<&E> {
        self.cause.downcast_ref::<E>()
    }
}

impl fmt::Display for OperationalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.cause, f)
    }
}

impl StdError for OperationalError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(&*self.cause)
    }
}

/// Why a single validator did not pass.
///
/// # Examples
///
/// ```
/// use rampart::{Failure, ValidationError};
///
/// let failure: Failure = ValidationError::new("too long").into();
/// assert!(failure.is_validation());
///
/// let broken = Failure::operational("connection reset");
/// assert!(broken.is_operational());
/// ```
#[derive(Debug, Clone)]
pub enum Failure {
    /// One validation failure
    Single(ValidationError),
    /// Several validation failures, already flattened
    Collection(ValidationErrors),
    /// The validator itself malfunctioned
    Operational(OperationalError),
}

impl Failure {
    /// Shorthand for a single failure with the given message.
    pub fn single(message: impl Into<Cow<'static, str>>) -> Self {
        Failure::Single(ValidationError::new(message))
    }

    /// Shorthand for an operational failure.
    pub fn operational(cause: impl Into<Box<dyn StdError + Send + Sync + 'static>>) -> Self {
        Failure::Operational(OperationalError::new(cause))
    }

    /// `true` for `Single` and `Collection`.
    pub fn is_validation(&self) -> bool {
        !self.is_operational()
    }

    /// `true` for `Operational`.
    pub fn is_operational(&self) -> bool {
        matches!(self, Failure::Operational(_))
    }

    /// Normalize into either a flattened collection or the operational cause.
    pub fn into_errors(self) -> Result<ValidationErrors, OperationalError> {
        match self {
            Failure::Single(error) => Ok(ValidationErrors::single(error)),
            Failure::Collection(errors) => Ok(errors),
            Failure::Operational(err) => Err(err),
        }
    }
}

impl From<ValidationError> for Failure {
    fn from(error: ValidationError) -> Self {
        Failure::Single(error)
    }
}

impl From<ValidationErrors> for Failure {
    fn from(errors: ValidationErrors) -> Self {
        Failure::Collection(errors)
    }
}

impl From<OperationalError> for Failure {
    fn from(err: OperationalError) -> Self {
        Failure::Operational(err)
    }
}

impl From<BatchError> for Failure {
    fn from(err: BatchError) -> Self {
        match err {
            BatchError::Invalid(errors) => Failure::Collection(errors),
            BatchError::Operational(err) => Failure::Operational(err),
        }
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Failure::Single(error) => fmt::Display::fmt(error, f),
            Failure::Collection(errors) => fmt::Display::fmt(errors, f),
            Failure::Operational(err) => fmt::Display::fmt(err, f),
        }
    }
}

impl StdError for Failure {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Failure::Single(_) => None,
            Failure::Collection(errors) => Some(errors),
            Failure::Operational(err) => Some(err),
        }
    }
}

/// The error returned by a batch run.
///
/// Use [`BatchError::validation_errors`] to tell "the input was rejected"
/// apart from "a validator is broken".
#[derive(Debug, Clone)]
pub enum BatchError {
    /// One or more validators rejected their values
    Invalid(ValidationErrors),
    /// A validator malfunctioned and the batch stopped
    Operational(OperationalError),
}

impl BatchError {
    /// The flattened failures, if this is a validation failure.
    pub fn validation_errors(&self) -> Option<&ValidationErrors> {
        match self {
            BatchError::Invalid(errors) => Some(errors),
            BatchError::Operational(_) => None,
        }
    }

    /// Consume and return the flattened failures, if any.
    pub fn into_validation_errors(self) -> Option<ValidationErrors> {
        match self {
            BatchError::Invalid(errors) => Some(errors),
            BatchError::Operational(_) => None,
        }
    }

    /// The operational cause, if a validator malfunctioned.
    pub fn operational(&self) -> Option<&OperationalError> {
        match self {
            BatchError::Operational(err) => Some(err),
            BatchError::Invalid(_) => None,
        }
    }

    /// `true` when the batch rejected its input.
    pub fn is_validation(&self) -> bool {
        matches!(self, BatchError::Invalid(_))
    }
}

impl fmt::Display for BatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BatchError::Invalid(errors) => write!(f, "validation failed: {}", errors),
            BatchError::Operational(err) => write!(f, "validator malfunctioned: {}", err),
        }
    }
}

impl StdError for BatchError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            BatchError::Invalid(errors) => Some(errors),
            BatchError::Operational(err) => Some(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn errors(messages: &[&'static str]) -> ValidationErrors {
        ValidationErrors::from_vec(messages.iter().map(|m| ValidationError::new(*m)).collect())
            .unwrap()
    }

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError::new("should be even");
        assert_eq!(err.to_string(), "should be even");
        assert_eq!(err.message(), "should be even");
    }

    #[test]
    fn test_validation_error_owned_message() {
        let err = ValidationError::new(format!("must be at most {}", 5));
        assert_eq!(err.message(), "must be at most 5");
    }

    #[test]
    fn test_errors_from_empty_vec_is_none() {
        assert!(ValidationErrors::from_vec(Vec::new()).is_none());
    }

    #[test]
    fn test_errors_from_vec_splits_head_and_tail() {
        let errs = ValidationErrors::from_vec(vec![
            ValidationError::new("a"),
            ValidationError::new("b"),
            ValidationError::new("c"),
        ])
        .unwrap();

        assert_eq!(errs.first().message(), "a");
        assert_eq!(errs.messages(), vec!["a", "b", "c"]);

        let one = ValidationErrors::from_vec(vec![ValidationError::new("only")]).unwrap();
        assert_eq!(one, ValidationErrors::single(ValidationError::new("only")));
    }

    #[test]
    fn test_errors_preserve_order() {
        let errs = errors(&["a", "b", "c"]);
        assert_eq!(errs.len(), 3);
        assert!(!errs.is_empty());
        assert_eq!(errs.first().message(), "a");
        assert_eq!(errs.messages(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_errors_combine_flattens_in_order() {
        let combined = errors(&["a"]).combine(errors(&["b", "c"]));
        assert_eq!(combined.messages(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_errors_combine_associative() {
        let a = errors(&["a"]);
        let b = errors(&["b", "c"]);
        let c = errors(&["d"]);

        let left = a.clone().combine(b.clone()).combine(c.clone());
        let right = a.combine(b.combine(c));

        assert_eq!(left, right);
    }

    #[test]
    fn test_errors_into_vec_and_iter() {
        let errs = errors(&["x", "y"]);
        let borrowed: Vec<&str> = (&errs).into_iter().map(|e| e.message()).collect();
        assert_eq!(borrowed, vec!["x", "y"]);

        let owned = errs.into_vec();
        assert_eq!(owned, vec![ValidationError::new("x"), ValidationError::new("y")]);
    }

    #[test]
    fn test_errors_display_joins_messages() {
        assert_eq!(errors(&["too short", "should be in"]).to_string(), "too short; should be in");
    }

    #[test]
    fn test_operational_error_keeps_source() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "disk on fire");
        let err = OperationalError::new(io);

        assert_eq!(err.to_string(), "disk on fire");
        assert!(err.source().is_some());
        assert!(err.downcast_ref::<std::io::Error>().is_some());
        assert!(err.downcast_ref::<ValidationError>().is_none());
    }

    #[test]
    fn test_failure_into_errors() {
        let single = Failure::single("a").into_errors().unwrap();
        assert_eq!(single.messages(), vec!["a"]);

        let collection = Failure::Collection(errors(&["a", "b"])).into_errors().unwrap();
        assert_eq!(collection.len(), 2);

        let broken = Failure::operational("boom").into_errors();
        assert_eq!(broken.unwrap_err().to_string(), "boom");
    }

    #[test]
    fn test_failure_classification() {
        assert!(Failure::single("a").is_validation());
        assert!(Failure::Collection(errors(&["a"])).is_validation());
        assert!(Failure::operational("boom").is_operational());
        assert!(!Failure::operational("boom").is_validation());
    }

    #[test]
    fn test_batch_error_capability_check() {
        let invalid = BatchError::Invalid(errors(&["a"]));
        assert!(invalid.is_validation());
        assert_eq!(invalid.validation_errors().unwrap().messages(), vec!["a"]);
        assert!(invalid.operational().is_none());

        let broken = BatchError::Operational(OperationalError::new("boom"));
        assert!(!broken.is_validation());
        assert!(broken.validation_errors().is_none());
        assert_eq!(broken.operational().unwrap().to_string(), "boom");
    }

    #[test]
    fn test_batch_error_display() {
        let invalid = BatchError::Invalid(errors(&["a", "b"]));
        assert_eq!(invalid.to_string(), "validation failed: a; b");

        let broken = BatchError::Operational(OperationalError::new("boom"));
        assert_eq!(broken.to_string(), "validator malfunctioned: boom");
    }

    #[test]
    fn test_batch_error_into_failure() {
        let failure: Failure = BatchError::Invalid(errors(&["a", "b"])).into();
        assert!(matches!(failure, Failure::Collection(ref e) if e.len() == 2));

        let failure: Failure = BatchError::Operational(OperationalError::new("boom")).into();
        assert!(failure.is_operational());
    }

    #[test]
    fn test_failure_source_matches_batch_error_source() {
        let op = OperationalError::new("boom");

        let failure = Failure::Operational(op.clone());
        let source = failure.source().unwrap();
        assert!(source.downcast_ref::<OperationalError>().is_some());
        assert_eq!(source.to_string(), "boom");

        let batch = BatchError::Operational(op);
        let source = batch.source().unwrap();
        assert!(source.downcast_ref::<OperationalError>().is_some());

        let failure = Failure::Collection(errors(&["a"]));
        assert!(failure.source().unwrap().downcast_ref::<ValidationErrors>().is_some());
        assert!(Failure::single("a").source().is_none());
    }
}

//! Batch engine: run validators in order and fold their failures
//!
//! [`validate`] is the entry point. It runs every validator of a batch in
//! the order given, collects validation failures into one flattened
//! [`ValidationErrors`], and returns:
//!
//! - `Ok(())` when nothing failed (an empty batch always passes);
//! - [`BatchError::Invalid`] with every collected failure, in order;
//! - [`BatchError::Operational`] as soon as a validator malfunctions. Failures
//!   collected so far are dropped and no further validator runs.
//!
//! A validator whose [`is_strict`](crate::Validator::is_strict) answers `true`
//! stops the batch right after its failure has been collected.
//!
//! # Example
//!
//! ```rust
//! use rampart::prelude::*;
//!
//! let batch = validators![
//!     IsEven::new(3),
//!     strict(validators![LessThan::new(10, 5), IsOdd::new(4)]),
//!     NotBlank::new(""),
//! ];
//!
//! let err = validate(&batch).unwrap_err();
//! let errors = err.validation_errors().unwrap();
//!
//! // the strict group stopped at its first failure and halted the batch
//! assert_eq!(errors.messages(), vec!["should be even", "should be less than"]);
//! ```

use crate::error::{BatchError, OperationalError, ValidationErrors};
use crate::{Semigroup, Validator};

/// What a batch run observed, before it is turned into a public outcome.
///
/// Logical groups need more than the flattened errors: they compare how many
/// members failed against how many members the batch has.
#[derive(Debug, Default)]
pub(crate) struct Tally {
    pub(crate) errors: Option<ValidationErrors>,
    pub(crate) total: usize,
    pub(crate) ran: usize,
    pub(crate) failed: usize,
}

impl Tally {
    /// Members that did not fail, including any skipped after a strict halt.
    pub(crate) fn passed(&self) -> usize {
        self.total - self.failed
    }
}

/// Run `validators` in order, stopping on an operational error or after a
/// strict validator fails.
pub(crate) fn run<V: Validator>(validators: &[V]) -> Result<Tally, OperationalError> {
    let mut tally = Tally {
        total: validators.len(),
        ..Tally::default()
    };

    for validator in validators {
        tally.ran += 1;

        let failure = match validator.validate() {
            Ok(()) => {
                #[cfg(feature = "tracing")]
                tracing::trace!(index = tally.ran - 1, "validator passed");
                continue;
            }
            Err(failure) => failure,
        };

        let errors = match failure.into_errors() {
            Ok(errors) => errors,
            Err(err) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    index = tally.ran - 1,
                    error = %err,
                    "validator malfunctioned, aborting batch"
                );
                return Err(err);
            }
        };

        #[cfg(feature = "tracing")]
        tracing::trace!(index = tally.ran - 1, failures = errors.len(), "validator failed");

        tally.failed += 1;
        tally.errors = tally.errors.take().combine(Some(errors));

        if validator.is_strict() {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                index = tally.ran - 1,
                skipped = validators.len() - tally.ran,
                "strict validator failed, halting batch"
            );
            break;
        }
    }

    Ok(tally)
}

/// Run a batch of validators and report the outcome.
///
/// Order matters: it fixes the order of reported failures and decides which
/// strict validator halts the batch first.
///
/// # Examples
///
/// ```rust
/// use rampart::prelude::*;
///
/// // an empty batch always passes
/// assert!(validate(&validators![]).is_ok());
///
/// let batch = validators![IsOdd::new(2), IsEven::new(2), IsOdd::new(4)];
/// let err = validate(&batch).unwrap_err();
/// assert_eq!(err.validation_errors().unwrap().len(), 2);
/// ```
///
/// Operational errors are surfaced untouched:
///
/// ```rust
/// use rampart::prelude::*;
///
/// let batch = validators![
///     IsOdd::new(2),
///     from_fn(|| Err(Failure::operational("lookup table missing"))),
///     IsOdd::new(4),
/// ];
///
/// let err = validate(&batch).unwrap_err();
/// assert!(err.validation_errors().is_none());
/// assert_eq!(err.operational().unwrap().to_string(), "lookup table missing");
/// ```
pub fn validate<V: Validator>(validators: &[V]) -> Result<(), BatchError> {
    let tally = run(validators).map_err(BatchError::Operational)?;

    #[cfg(feature = "tracing")]
    tracing::debug!(
        ran = tally.ran,
        failed = tally.failed,
        total = validators.len(),
        "batch finished"
    );

    match tally.errors {
        Some(errors) => Err(BatchError::Invalid(errors)),
        None => Ok(()),
    }
}

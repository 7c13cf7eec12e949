//! Testing utilities for code built on rampart
//!
//! This module provides a scripted [`Probe`] validator, assertion macros for
//! batch and validator outcomes, and (behind the `proptest` feature)
//! property-based testing support.
//!
//! # Examples
//!
//! ## Probe
//!
//! ```rust
//! use rampart::prelude::*;
//! use rampart::testing::Probe;
//!
//! let late = Probe::fail("never reported");
//! let batch = validators![
//!     strict(validators![Probe::fail("first")]),
//!     late.clone(),
//! ];
//!
//! let _ = validate(&batch);
//! assert_eq!(late.calls(), 0);
//! ```
//!
//! ## Assertion Macros
//!
//! ```rust
//! use rampart::prelude::*;
//! use rampart::{assert_invalid, assert_operational, assert_valid};
//!
//! assert_valid!(validate(&validators![IsOdd::new(1)]));
//! assert_invalid!(validate(&validators![IsOdd::new(2)]), ["should be odd"]);
//! assert_operational!(from_fn(|| Err(Failure::operational("boom"))).validate());
//! ```

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::error::{Failure, ValidationError, ValidationErrors};
use crate::Validator;

/// The scripted result of a [`Probe`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// Validation passes
    Pass,
    /// Validation fails with these messages; one message yields
    /// `Failure::Single`, several yield `Failure::Collection`
    Fail(Vec<String>),
    /// The validator malfunctions with this message
    Broken(String),
}

impl ProbeOutcome {
    /// How many individual validation failures this outcome contributes.
    pub fn failure_count(&self) -> usize {
        match self {
            ProbeOutcome::Fail(messages) => messages.len(),
            _ => 0,
        }
    }
}

/// A validator with a fixed outcome that counts how often it ran.
///
/// Clones share the counter, so keep a clone outside the batch to observe
/// whether the engine reached it.
///
/// # Example
///
/// ```rust
/// use rampart::testing::Probe;
/// use rampart::Validator;
///
/// let probe = Probe::fail_many(&["a", "b"]);
/// assert!(probe.validate().is_err());
/// assert!(probe.validate().is_err());
/// assert_eq!(probe.calls(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Probe {
    outcome: ProbeOutcome,
    calls: Arc<AtomicUsize>,
}

impl Probe {
    /// A probe with the given outcome.
    ///
    /// # Panics
    ///
    /// Panics if `outcome` is `Fail` with no messages.
    pub fn new(outcome: ProbeOutcome) -> Self {
        if let ProbeOutcome::Fail(messages) = &outcome {
            assert!(!messages.is_empty(), "a failing probe needs at least one message");
        }
        Probe {
            outcome,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// A probe that always passes.
    pub fn pass() -> Self {
        Self::new(ProbeOutcome::Pass)
    }

    /// A probe that fails with a single message.
    pub fn fail(message: &str) -> Self {
        Self::new(ProbeOutcome::Fail(vec![message.to_string()]))
    }

    /// A probe that fails with a collection of messages.
    pub fn fail_many(messages: &[&str]) -> Self {
        Self::new(ProbeOutcome::Fail(
            messages.iter().map(|m| m.to_string()).collect(),
        ))
    }

    /// A probe that malfunctions.
    pub fn broken(message: &str) -> Self {
        Self::new(ProbeOutcome::Broken(message.to_string()))
    }

    /// How many times `validate` has been called on this probe or its clones.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// The scripted outcome.
    pub fn outcome(&self) -> &ProbeOutcome {
        &self.outcome
    }
}

impl Validator for Probe {
    fn validate(&self) -> Result<(), Failure> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        match &self.outcome {
            ProbeOutcome::Pass => Ok(()),
            ProbeOutcome::Fail(messages) if messages.len() == 1 => {
                Err(Failure::single(messages[0].clone()))
            }
            ProbeOutcome::Fail(messages) => {
                let errors = messages
                    .iter()
                    .map(|m| ValidationError::new(m.clone()))
                    .collect();
                match ValidationErrors::from_vec(errors) {
                    Some(errors) => Err(Failure::Collection(errors)),
                    None => Ok(()),
                }
            }
            ProbeOutcome::Broken(message) => Err(Failure::operational(message.clone())),
        }
    }
}

/// Assert that a validation outcome is `Ok`.
///
/// Works with `Result<(), BatchError>` and `Result<(), Failure>`.
///
/// # Example
///
/// ```rust
/// use rampart::prelude::*;
/// use rampart::assert_valid;
///
/// assert_valid!(IsEven::new(4).validate());
/// ```
#[macro_export]
macro_rules! assert_valid {
    ($result:expr) => {
        match $result {
            Ok(()) => {}
            Err(e) => {
                panic!("Expected Ok, got Err: {}", e);
            }
        }
    };
}

/// Assert that a validation outcome is a validation failure, optionally with
/// specific messages in order.
///
/// # Example
///
/// ```rust
/// use rampart::prelude::*;
/// use rampart::assert_invalid;
///
/// let batch = validators![IsEven::new(3), LessThan::new(9, 2)];
/// assert_invalid!(validate(&batch));
/// assert_invalid!(validate(&batch), ["should be even", "should be less than"]);
/// ```
#[macro_export]
macro_rules! assert_invalid {
    (@errors $result:expr) => {
        match $result {
            Ok(()) => panic!("Expected validation failure, got Ok"),
            Err(e) => {
                let failure: $crate::Failure = ::std::convert::From::from(e);
                match failure.into_errors() {
                    Ok(errors) => errors,
                    Err(err) => {
                        panic!("Expected validation failure, got operational error: {}", err)
                    }
                }
            }
        }
    };
    ($result:expr) => {
        $crate::assert_invalid!(@errors $result);
    };
    ($result:expr, $expected:expr) => {
        let errors = $crate::assert_invalid!(@errors $result);
        assert_eq!(errors.messages(), $expected);
    };
}

/// Assert that a validation outcome is an operational error.
///
/// # Example
///
/// ```rust
/// use rampart::prelude::*;
/// use rampart::assert_operational;
///
/// let batch = validators![from_fn(|| Err(Failure::operational("boom")))];
/// assert_operational!(validate(&batch));
/// ```
#[macro_export]
macro_rules! assert_operational {
    ($result:expr) => {
        match $result {
            Ok(()) => panic!("Expected operational error, got Ok"),
            Err(e) => {
                let failure: $crate::Failure = ::std::convert::From::from(e);
                if !failure.is_operational() {
                    panic!("Expected operational error, got validation failure: {}", failure);
                }
            }
        }
    };
}

#[cfg(feature = "proptest")]
use proptest::prelude::*;

#[cfg(feature = "proptest")]
impl Arbitrary for ProbeOutcome {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        prop_oneof![
            4 => Just(ProbeOutcome::Pass),
            4 => prop::collection::vec("[a-z]{1,8}", 1..4).prop_map(ProbeOutcome::Fail),
            1 => "[a-z]{1,8}".prop_map(ProbeOutcome::Broken),
        ]
        .boxed()
    }
}

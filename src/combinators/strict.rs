//! Strict groups: fail fast and halt the surrounding batch

use crate::error::Failure;
use crate::{BoxedValidator, Validator};

/// A group that stops at its first failing member.
///
/// The first failure is returned exactly as the member produced it; siblings
/// after it never run. Because `Strict` reports [`is_strict`], a batch that
/// contains it also stops right after collecting that failure.
///
/// [`is_strict`]: Validator::is_strict
#[derive(Default)]
pub struct Strict {
    validators: Vec<BoxedValidator>,
}

impl Strict {
    /// Create a strict group over `validators`, run in order.
    pub fn new(validators: Vec<BoxedValidator>) -> Self {
        Strict { validators }
    }

    /// Append another member.
    pub fn push<V: Validator + 'static>(&mut self, validator: V) {
        self.validators.push(Box::new(validator));
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.validators.len()
    }

    /// `true` when the group has no members (and therefore always passes).
    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }
}

impl std::fmt::Debug for Strict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Strict")
            .field("validators", &self.validators.len())
            .finish()
    }
}

impl Validator for Strict {
    fn validate(&self) -> Result<(), Failure> {
        for validator in &self.validators {
            validator.validate()?;
        }
        Ok(())
    }

    fn is_strict(&self) -> bool {
        true
    }
}

/// Wrap validators in a [`Strict`] group.
///
/// # Example
///
/// ```rust
/// use rampart::prelude::*;
///
/// let batch = validators![
///     IsOdd::new(2),
///     strict(validators![GreaterThan::new(1, 5), LessThan::new(9, 5)]),
///     IsEven::new(3),
/// ];
///
/// // `IsEven` never runs: the strict group failed first
/// assert_invalid!(validate(&batch), ["should be odd", "should be greater than"]);
/// ```
pub fn strict(validators: Vec<BoxedValidator>) -> Strict {
    Strict::new(validators)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::Probe;
    use crate::{validate, validators};

    #[test]
    fn test_empty_strict_passes() {
        assert!(strict(Vec::new()).validate().is_ok());
        assert!(Strict::default().is_empty());
    }

    #[test]
    fn test_strict_is_marked() {
        assert!(strict(validators![Probe::pass()]).is_strict());
    }

    #[test]
    fn test_returns_first_failure_verbatim() {
        let third = Probe::fail("third");
        let group = strict(validators![
            Probe::pass(),
            Probe::fail_many(&["second-a", "second-b"]),
            third.clone(),
        ]);

        let failure = group.validate().unwrap_err();
        assert!(matches!(failure, Failure::Collection(ref e) if e.messages() == ["second-a", "second-b"]));
        assert_eq!(third.calls(), 0);
    }

    #[test]
    fn test_operational_error_passes_through() {
        let failure = strict(validators![Probe::broken("boom"), Probe::fail("x")])
            .validate()
            .unwrap_err();
        assert!(failure.is_operational());
    }

    #[test]
    fn test_push_appends_member() {
        let mut group = strict(validators![Probe::pass()]);
        group.push(Probe::fail("late"));

        assert_eq!(group.len(), 2);
        assert!(group.validate().is_err());
    }

    #[test]
    fn test_halts_outer_batch() {
        let (a, b, c, d, e, f) = (
            Probe::pass(),
            Probe::fail("B"),
            Probe::pass(),
            Probe::fail("D"),
            Probe::pass(),
            Probe::fail("F"),
        );

        let batch = validators![
            a.clone(),
            b.clone(),
            strict(validators![c.clone(), d.clone(), e.clone()]),
            f.clone(),
        ];

        let err = validate(&batch).unwrap_err();
        assert_eq!(err.validation_errors().unwrap().messages(), vec!["B", "D"]);
        assert_eq!(
            [a.calls(), b.calls(), c.calls(), d.calls(), e.calls(), f.calls()],
            [1, 1, 1, 1, 0, 0]
        );
    }

    #[test]
    fn test_passing_strict_group_does_not_halt() {
        let after = Probe::fail("after");
        let batch = validators![strict(validators![Probe::pass()]), after.clone()];

        let err = validate(&batch).unwrap_err();
        assert_eq!(err.validation_errors().unwrap().messages(), vec!["after"]);
        assert_eq!(after.calls(), 1);
    }

    #[test]
    fn test_only_first_failing_strict_group_halts() {
        let batch = validators![
            Probe::fail("plain"),
            strict(validators![Probe::pass()]),
            strict(validators![Probe::fail("first strict")]),
            strict(validators![Probe::fail("second strict")]),
        ];

        let err = validate(&batch).unwrap_err();
        assert_eq!(
            err.validation_errors().unwrap().messages(),
            vec!["plain", "first strict"]
        );
    }
}

//! Integration tests for running mixed batches end to end

use rampart::prelude::*;
use rampart::testing::Probe;

#[test]
fn test_failures_are_flattened_in_order() {
    // #1 and #3 fail singly, #5 returns a two-element collection
    let batch = validators![
        Probe::fail("#1"),
        Probe::pass(),
        Probe::fail("#3"),
        Probe::pass(),
        Probe::fail_many(&["#5a", "#5b"]),
    ];

    let err = validate(&batch).unwrap_err();
    let errors = err.validation_errors().unwrap();

    assert_eq!(errors.len(), 4);
    assert_eq!(errors.messages(), vec!["#1", "#3", "#5a", "#5b"]);
}

#[test]
fn test_strict_group_halts_outer_batch() {
    let a = Probe::pass();
    let c = Probe::pass();
    let e = Probe::pass();
    let f = Probe::fail("F");

    let batch = validators![
        a.clone(),
        Probe::fail("B"),
        strict(validators![c.clone(), Probe::fail("D"), e.clone()]),
        f.clone(),
    ];

    assert_invalid!(validate(&batch), ["B", "D"]);
    assert_eq!(a.calls(), 1);
    assert_eq!(c.calls(), 1);
    assert_eq!(e.calls(), 0);
    assert_eq!(f.calls(), 0);
}

#[test]
fn test_passing_strict_group_does_not_halt() {
    let after = Probe::fail("after");
    let batch = validators![strict(validators![Probe::pass()]), after.clone()];

    assert_invalid!(validate(&batch), ["after"]);
    assert_eq!(after.calls(), 1);
}

#[test]
fn test_strict_group_keeps_collection_from_member() {
    let batch = validators![strict(validators![
        Probe::fail_many(&["x", "y"]),
        Probe::fail("never"),
    ])];

    assert_invalid!(validate(&batch), ["x", "y"]);
}

#[test]
fn test_operational_error_wins_over_collected_failures() {
    let batch = validators![
        NotBlank::new(""),
        from_fn(|| Err(Failure::operational(std::io::Error::other("disk gone")))),
        IsOdd::new(2),
    ];

    let err = validate(&batch).unwrap_err();
    assert!(!err.is_validation());

    let op = err.operational().unwrap();
    assert_eq!(op.to_string(), "disk gone");
    assert!(op.downcast_ref::<std::io::Error>().is_some());
}

#[test]
fn test_operational_error_inside_strict_group_propagates() {
    let batch = validators![strict(validators![Probe::broken("boom")]), Probe::pass()];
    assert_operational!(validate(&batch));
}

#[test]
fn test_allow_none_passes_anywhere() {
    let batch = validators![
        allow_none(None::<IsOdd<i32>>),
        IsOdd::new(1),
        allow_none(None::<Strict>),
    ];
    assert_valid!(validate(&batch));
}

#[test]
fn test_allow_none_keeps_strictness() {
    let after = Probe::fail("after");
    let batch = validators![
        allow_none(Some(strict(validators![Probe::fail("inner")]))),
        after.clone(),
    ];

    assert_invalid!(validate(&batch), ["inner"]);
    assert_eq!(after.calls(), 0);
}

#[test]
fn test_override_round_trips_verbatim() {
    let batch = validators![
        IsEven::new(3).message("pick an even seat number"),
        Length::new("ab", 3, 10).too_short_message("name needs 3+ letters"),
        or(validators![IsOdd::new(2)]).message("nothing odd here"),
    ];

    assert_invalid!(
        validate(&batch),
        ["pick an even seat number", "name needs 3+ letters", "nothing odd here"]
    );
}

#[test]
fn test_logical_groups_in_a_batch() {
    let batch = validators![
        or(validators![NotBlank::new(""), NotBlank::new("x")]),
        xor(validators![IsOdd::new(1), IsOdd::new(3)]),
        nand(validators![IsOdd::new(1), IsOdd::new(3)]),
    ];

    assert_invalid!(validate(&batch), ["only one", "not all"]);
}

#[test]
fn test_nested_batch_as_validator() {
    let inner = from_fn(|| {
        validate(&validators![IsOdd::new(2), IsEven::new(3)]).map_err(Failure::from)
    });
    let batch = validators![inner, NotBlank::new(" ")];

    assert_invalid!(
        validate(&batch),
        ["should be odd", "should be even", "shouldn't be blank"]
    );
}

#[test]
fn test_display_formats() {
    let err = validate(&validators![IsOdd::new(2), NotBlank::new("")]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "validation failed: should be odd; shouldn't be blank"
    );

    let err = validate(&validators![Probe::broken("boom")]).unwrap_err();
    assert_eq!(err.to_string(), "validator malfunctioned: boom");
}

#[test]
fn test_shared_batch_can_run_twice() {
    let batch = std::sync::Arc::new(validators![IsOdd::new(2), IsEven::new(2)]);

    let handles: Vec<_> = (0..2)
        .map(|_| {
            let batch = std::sync::Arc::clone(&batch);
            std::thread::spawn(move || validate(batch.as_slice()).unwrap_err().to_string())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), "validation failed: should be odd");
    }
}

//! Demonstrates tracing integration with the batch engine
//!
//! Run with: cargo run --example tracing_demo --features tracing

use rampart::prelude::*;

fn main() {
    // Set up tracing subscriber
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    tracing::info!("Starting tracing demo");

    let batch = validators![
        IsOdd::new(3),
        NotBlank::new(""),
        xor(validators![IsEven::new(2), IsEven::new(4)]),
        strict(validators![LessThan::new(10, 5)]),
        GreaterThan::new(1, 0),
    ];

    match validate(&batch) {
        Ok(()) => tracing::info!("batch passed"),
        Err(e) => tracing::warn!("batch rejected: {}", e),
    }

    // An operational error aborts the batch
    let broken = validators![
        IsOdd::new(2),
        from_fn(|| Err(Failure::operational("lookup table unavailable"))),
        IsOdd::new(4),
    ];

    if let Err(e) = validate(&broken) {
        tracing::error!("batch aborted: {}", e);
    }
}

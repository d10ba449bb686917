//! Shared pieces of the timing harness: the canonical input list and the
//! serializable report row written by the benchmark binary.

use num_bigint::BigUint;
use serde::Serialize;
use std::str::FromStr;

/// The canonical benchmark inputs, sorted ascending. Mix of worst-case
/// primes (101, 9973, 104729, 9999991, 99999959, 99999971) and composites
/// with divisor pairs at varying gaps, topped by a 66-bit close-factor
/// semiprime that exceeds f64 precision.
pub const CANONICAL_INPUTS: &[&str] = &[
    "101",
    "9973",
    "101909",
    "104729",
    "609133",
    "1300039",
    "3000009",
    "9999991",
    "99999959",
    "99999971",
    "700000133",
    "61335395416403926747",
];

/// Parse the canonical list into BigUints.
pub fn canonical_inputs() -> Vec<BigUint> {
    CANONICAL_INPUTS
        .iter()
        .map(|s| BigUint::from_str(s).expect("canonical input is a valid decimal integer"))
        .collect()
}

/// One timed factorization, as written to the JSON report.
#[derive(Debug, Serialize)]
pub struct TimingRow {
    pub n: String,
    pub bits: u64,
    pub p: String,
    pub q: String,
    pub micros: u128,
    pub trivial: bool,
}

/// The full report emitted by the harness binary.
#[derive(Debug, Serialize)]
pub struct TimingReport {
    pub rows: Vec<TimingRow>,
    pub total_wall_seconds: f64,
}

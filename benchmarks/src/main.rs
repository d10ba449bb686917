//! Timing harness for Fermat factorization.
//!
//! Runs the canonical input list with per-call timing, then scales over
//! generated close-factor semiprimes and small worst-case primes. Writes
//! the canonical-list timings to a JSON report.

use std::time::Instant;

use benchmarks::{canonical_inputs, TimingReport, TimingRow};
use fermat_core::{factorize, generate_close_semiprime};
use num_bigint::BigUint;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

fn main() {
    println!("=== Fermat Difference-of-Squares Factorization ===\n");

    let start = Instant::now();

    let report = section_1_canonical_list();
    section_2_close_semiprimes();
    section_3_worst_case_primes();

    save_json("fermat_timing_report.json", &report);
    println!(
        "\nTotal wall time: {:.3}s",
        start.elapsed().as_secs_f64()
    );
}

// -------------------------------------------------------------------------
// Section 1 — Canonical input list
// -------------------------------------------------------------------------

fn section_1_canonical_list() -> TimingReport {
    println!("--- Section 1: Canonical Input List ---\n");
    println!(
        "  {:>22} {:>5} {:>22} {:>12} {:>10} {:>6}",
        "n", "bits", "p x q", "time_us", "trivial", "ok"
    );
    println!("  {}", "-".repeat(82));

    let section_start = Instant::now();
    let mut rows = Vec::new();

    for n in canonical_inputs() {
        let call_start = Instant::now();
        let result = factorize(&n).expect("canonical inputs are positive");
        let micros = call_start.elapsed().as_micros();

        let verified = result.verify(&n);
        println!(
            "  {:>22} {:>5} {:>22} {:>12} {:>10} {:>6}",
            n,
            n.bits(),
            format!("{}", result),
            micros,
            if result.is_trivial() { "yes" } else { "no" },
            if verified { "OK" } else { "BAD" }
        );

        rows.push(TimingRow {
            n: n.to_string(),
            bits: n.bits(),
            p: result.p.to_string(),
            q: result.q.to_string(),
            micros,
            trivial: result.is_trivial(),
        });
    }
    println!();

    TimingReport {
        rows,
        total_wall_seconds: section_start.elapsed().as_secs_f64(),
    }
}

// -------------------------------------------------------------------------
// Section 2 — Close-factor semiprimes of increasing size
// -------------------------------------------------------------------------

fn section_2_close_semiprimes() {
    println!("--- Section 2: Close-Factor Semiprimes (adjacent primes) ---\n");
    println!(
        "  {:>5} {:>40} {:>10} {:>12} {:>6}",
        "bits", "n", "gap", "time_us", "ok"
    );
    println!("  {}", "-".repeat(79));

    // Seeded for reproducible targets across runs
    let mut rng = StdRng::seed_from_u64(12345);
    let factor_bits: Vec<u32> = vec![16, 24, 32, 40, 48, 56, 64];

    for &bits in &factor_bits {
        let target = generate_close_semiprime(bits, &mut rng);

        let start = Instant::now();
        let result = factorize(&target.n).expect("target is positive");
        let micros = start.elapsed().as_micros();

        let recovered = result.p == target.p && result.q == target.q;
        println!(
            "  {:>5} {:>40} {:>10} {:>12} {:>6}",
            target.n.bits(),
            target.n,
            target.gap(),
            micros,
            if recovered { "OK" } else { "BAD" }
        );
    }
    println!();
    println!("  Fermat cost tracks the factor gap, not the input size.");
    println!();
}

// -------------------------------------------------------------------------
// Section 3 — Worst-case primes
// -------------------------------------------------------------------------

fn section_3_worst_case_primes() {
    println!("--- Section 3: Worst-Case Primes ---\n");
    println!("  Prime inputs walk a from ceil(sqrt(n)) to (n+1)/2, the");
    println!("  guaranteed termination bound, and return (1, n).\n");
    println!(
        "  {:>10} {:>14} {:>12}",
        "n", "loop_steps", "time_us"
    );
    println!("  {}", "-".repeat(40));

    let primes: Vec<u64> = vec![101, 9973, 104729, 1299709];

    for &p in &primes {
        let n = BigUint::from(p);

        let start = Instant::now();
        let result = factorize(&n).expect("prime input is positive");
        let micros = start.elapsed().as_micros();

        assert!(result.is_trivial(), "{} is prime", p);

        // Steps the search loop takes before hitting the bound
        let steps = (p + 1) / 2 - p.isqrt();
        println!("  {:>10} {:>14} {:>12}", p, steps, micros);
    }
    println!();
}

// -------------------------------------------------------------------------
// Utilities
// -------------------------------------------------------------------------

fn save_json<T: Serialize>(path: &str, data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => {
            if let Err(e) = std::fs::write(path, &json) {
                eprintln!("  Could not write {}: {}", path, e);
            } else {
                println!("  Report saved: {}", path);
            }
        }
        Err(e) => eprintln!("  Could not serialize report: {}", e),
    }
}

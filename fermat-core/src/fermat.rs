//! Fermat's difference-of-squares factorization.
//!
//! For odd n, search for a with a^2 - n a perfect square b^2; then
//! n = a^2 - b^2 = (a - b)(a + b). The search starts at ceil(sqrt(n))
//! and is bounded by a = (n+1)/2, where it is guaranteed to succeed
//! with b = (n-1)/2, producing the trivial pair (1, n). Prime inputs
//! therefore terminate with (1, n) rather than looping forever.

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{One, Zero};
use serde::Serialize;
use std::fmt;

use crate::arith::{is_perfect_square, isqrt};

/// Error kind for [`factorize`]. The method is defined for positive
/// integers only, and `BigUint` already rules out negatives and
/// fractions at the type level, so zero is the only rejected input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FermatError {
    InvalidInput,
}

impl fmt::Display for FermatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FermatError::InvalidInput => write!(f, "input must be a positive integer"),
        }
    }
}

impl std::error::Error for FermatError {}

/// An ordered factor pair with `p * q == n` and `p <= q`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FactorPair {
    pub p: BigUint,
    pub q: BigUint,
}

impl FactorPair {
    /// Verify the pair against the number it claims to factor.
    pub fn verify(&self, n: &BigUint) -> bool {
        &self.p * &self.q == *n
    }

    /// True if the pair is the trivial (1, n) split, i.e. no proper
    /// factor was found (n prime, n == 1, or n a power of two).
    pub fn is_trivial(&self) -> bool {
        self.p.is_one()
    }
}

impl fmt::Display for FactorPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} x {}", self.p, self.q)
    }
}

/// Fermat split of an odd positive integer m into (a - b, a + b).
///
/// Returns the complementary divisor pair of m whose members are
/// closest together (the pair Fermat's method converges to first),
/// already ordered ascending. For prime m this is (1, m); for a
/// perfect square it is (sqrt(m), sqrt(m)).
pub fn fermat_split(m: &BigUint) -> (BigUint, BigUint) {
    debug_assert!(m.is_odd(), "fermat_split requires an odd input");

    let one = BigUint::one();
    if m.is_one() {
        return (one.clone(), one);
    }

    let mut a = isqrt(m);
    if &(&a * &a) == m {
        // n = a^2 exactly: b = 0
        return (a.clone(), a);
    }
    a += 1u32; // ceil(sqrt(m))

    // At a = (m+1)/2 the candidate b^2 = ((m-1)/2)^2 is always a
    // perfect square, so the loop cannot run past this bound.
    let limit = (m + BigUint::one()) >> 1u32;
    while a <= limit {
        let b_squared = &a * &a - m;
        if let Some(b) = is_perfect_square(&b_squared) {
            return (&a - &b, &a + &b);
        }
        a += 1u32;
    }

    // Unreachable for odd m >= 3; kept so the bound is explicit.
    (one, m.clone())
}

/// Factor a positive integer into an ordered pair (p, q) with p * q == n.
///
/// Even inputs are handled by stripping the full power of two first,
/// applying Fermat's method to the remaining odd part, and attaching
/// the 2^k onto the smaller Fermat factor before reordering. Degenerate
/// cases: `factorize(1) == (1, 1)`; prime n and n = 2^k yield `(1, n)`.
///
/// Pure and stateless; safe to call concurrently with no coordination.
pub fn factorize(n: &BigUint) -> Result<FactorPair, FermatError> {
    if n.is_zero() {
        return Err(FermatError::InvalidInput);
    }

    // n = 2^twos * odd
    let mut odd = n.clone();
    let mut twos: u64 = 0;
    while odd.is_even() {
        odd >>= 1u32;
        twos += 1;
    }

    let (small, large) = fermat_split(&odd);

    let (p, q) = if twos > 0 {
        let boosted = small << twos;
        if boosted <= large {
            (boosted, large)
        } else {
            (large, boosted)
        }
    } else {
        (small, large)
    };

    Ok(FactorPair { p, q })
}

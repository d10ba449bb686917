//! Close-factor semiprime targets for benchmarks.
//!
//! Fermat's method costs O(gap) in the distance between sqrt(n) and the
//! nearest divisor pair, so meaningful timing targets pair a random prime
//! with the next prime above it. Worst-case (prime) inputs are taken from
//! the canonical list instead of being generated.

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::One;
use rand::Rng;

use crate::arith::is_probably_prime;

/// Miller-Rabin rounds used for target generation.
const PRIME_ROUNDS: u32 = 20;

/// A semiprime with known factors for verifying benchmark results.
#[derive(Debug, Clone)]
pub struct SemiprimeTarget {
    pub n: BigUint,
    pub p: BigUint,
    pub q: BigUint,
    pub bit_size: u32,
}

impl SemiprimeTarget {
    /// Factor gap q - p; the quantity that drives Fermat search length.
    pub fn gap(&self) -> BigUint {
        &self.q - &self.p
    }
}

/// Generate a random prime of approximately `bits` bit size.
pub fn random_prime(bits: u32, rng: &mut impl Rng) -> BigUint {
    assert!(bits >= 2, "Cannot generate a prime with fewer than 2 bits");
    loop {
        let num_bytes = (bits as usize + 7) / 8;
        let mut bytes = vec![0u8; num_bytes];
        rng.fill(&mut bytes[..]);

        // Clear excess high bits so the candidate fits in `bits` bits.
        let excess_bits = (num_bytes * 8) as u32 - bits;
        if excess_bits > 0 {
            bytes[0] &= (1u8 << (8 - excess_bits)) - 1;
        }

        // Set the top bit so the candidate has exactly `bits` bits.
        let top_bit_in_byte = (bits - 1) % 8;
        bytes[0] |= 1u8 << top_bit_in_byte;

        // Set the bottom bit to ensure odd
        if let Some(last) = bytes.last_mut() {
            *last |= 0x01;
        }

        let candidate = BigUint::from_bytes_be(&bytes);
        if is_probably_prime(&candidate, PRIME_ROUNDS) {
            return candidate;
        }
    }
}

/// Smallest probable prime strictly greater than `n`.
pub fn next_prime_above(n: &BigUint) -> BigUint {
    let two = BigUint::from(2u32);
    if *n < two {
        return two;
    }
    // Start at the next odd number above n
    let mut candidate = n + BigUint::one();
    if candidate.is_even() {
        candidate += BigUint::one();
    }
    while !is_probably_prime(&candidate, PRIME_ROUNDS) {
        candidate += &two;
    }
    candidate
}

/// Generate a semiprime whose factors are adjacent primes of `bits` bits.
///
/// The resulting gap is the local prime gap near a random `bits`-bit
/// prime, which keeps the Fermat search short at any input size.
pub fn generate_close_semiprime(bits: u32, rng: &mut impl Rng) -> SemiprimeTarget {
    let p = random_prime(bits, rng);
    let q = next_prime_above(&p);
    let n = &p * &q;
    SemiprimeTarget {
        n,
        p,
        q,
        bit_size: bits,
    }
}

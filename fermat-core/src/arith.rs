//! Exact integer arithmetic helpers: Newton integer square root,
//! perfect-square testing, and Miller-Rabin primality.

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{One, Zero};
use rand::Rng;

/// Compute floor(sqrt(n)) for BigUint using Newton's method.
///
/// Exact for any magnitude; a floating-point sqrt would lose precision
/// past 2^53, which silently breaks the perfect-square test below.
pub fn isqrt(n: &BigUint) -> BigUint {
    if n.is_zero() {
        return BigUint::zero();
    }
    if *n == BigUint::one() {
        return BigUint::one();
    }

    // Initial guess: 2^((bits+1)/2), always >= sqrt(n)
    let bits = n.bits();
    let mut x = BigUint::one() << ((bits + 1) / 2);

    loop {
        // x_next = (x + n/x) / 2
        let x_next = (&x + n / &x) >> 1;
        if x_next >= x {
            return x;
        }
        x = x_next;
    }
}

/// Check if n is a perfect square. Returns Some(sqrt) if so, None otherwise.
pub fn is_perfect_square(n: &BigUint) -> Option<BigUint> {
    if n.is_zero() {
        return Some(BigUint::zero());
    }
    let s = isqrt(n);
    if &(&s * &s) == n {
        Some(s)
    } else {
        None
    }
}

/// Miller-Rabin probabilistic primality test.
pub fn is_probably_prime(n: &BigUint, rounds: u32) -> bool {
    let one = BigUint::one();
    let two = &one + &one;
    let three = &two + &one;

    if *n < two {
        return false;
    }
    if *n == two || *n == three {
        return true;
    }
    if n.is_even() {
        return false;
    }

    // Write n-1 as 2^r * d
    let n_minus_1 = n - &one;
    let mut d = n_minus_1.clone();
    let mut r: u32 = 0;
    while d.is_even() {
        d >>= 1u32;
        r += 1;
    }

    let mut rng = rand::thread_rng();

    'witness: for _ in 0..rounds {
        // Random a in [2, n-2]
        let a = loop {
            let bytes = n.to_bytes_be();
            let mut random_bytes = vec![0u8; bytes.len()];
            rng.fill(&mut random_bytes[..]);
            let a = BigUint::from_bytes_be(&random_bytes) % n;
            if a >= two && a <= &n_minus_1 - &one {
                break a;
            }
        };

        let mut x = a.modpow(&d, n);

        if x == one || x == n_minus_1 {
            continue 'witness;
        }

        for _ in 0..r - 1 {
            x = x.modpow(&two, n);
            if x == n_minus_1 {
                continue 'witness;
            }
        }

        return false;
    }

    true
}

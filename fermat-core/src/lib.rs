//! Fermat difference-of-squares factorization over arbitrary-precision integers.
//!
//! The core entry point is [`factorize`], which splits a positive integer
//! into an ordered factor pair `(p, q)` with `p * q == n` and `p <= q`.
//! Everything is exact `BigUint` arithmetic; no floating point is used
//! anywhere, so inputs beyond 2^53 factor without precision loss.

pub mod arith;
pub mod fermat;
pub mod targets;

pub use arith::{is_perfect_square, is_probably_prime, isqrt};
pub use fermat::{factorize, fermat_split, FactorPair, FermatError};
pub use targets::{generate_close_semiprime, next_prime_above, random_prime, SemiprimeTarget};

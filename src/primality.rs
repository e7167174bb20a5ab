//! # Primality — Trial-Division Primality Tests
//!
//! Two deterministic tests over `i64`:
//!
//! - [`is_prime`]: odd trial division up to ⌊√n⌋. Any factorization n = a·b
//!   with a ≤ b has a ≤ √n, so no larger divisor needs checking.
//! - [`is_prime_naive`]: divides by every d in 2..n. Quadratic and only useful
//!   as a reference oracle.
//!
//! Both are total: every `i64` is a valid input, and anything below 2 is
//! simply not prime.

/// Deterministic primality test by trial division.
pub fn is_prime(n: i64) -> bool {
    if n < 2 {
        return false;
    }
    if n == 2 {
        return true;
    }
    let n = n as u64;
    if n.is_multiple_of(2) {
        return false;
    }
    let limit = n.isqrt();
    (3..=limit).step_by(2).all(|d| !n.is_multiple_of(d))
}

/// Reference primality test dividing by every candidate below `n`.
pub fn is_prime_naive(n: i64) -> bool {
    if n < 2 {
        return false;
    }
    (2..n).all(|d| n % d != 0)
}

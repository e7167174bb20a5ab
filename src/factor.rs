//! # Factor — Prime Factorization and Divisors
//!
//! Trial-division factorization for `i64` inputs. Factor 2 is stripped first,
//! then odd candidates from 3 are tried while `d² ≤ remaining`. Each found
//! factor is divided out completely before advancing, so every emitted factor
//! is prime and the output is non-decreasing. Whatever survives the loop is
//! itself prime and becomes the last factor.
//!
//! Inputs below 2 have no prime factorization and yield an empty result.

/// Prime factors of `n` with repetition, in non-decreasing order.
///
/// The product of the returned factors equals `n` for every `n >= 2`.
pub fn prime_factors(n: i64) -> Vec<u64> {
    if n < 2 {
        return vec![];
    }
    let mut n = n as u64;
    let mut factors = Vec::new();
    while n.is_multiple_of(2) {
        factors.push(2);
        n /= 2;
    }
    let mut d = 3u64;
    while d * d <= n {
        while n.is_multiple_of(d) {
            factors.push(d);
            n /= d;
        }
        d += 2;
    }
    if n > 1 {
        factors.push(n);
    }
    factors
}

/// Prime factorization of `n` as (prime, exponent) pairs in ascending prime order.
pub fn factor_powers(n: i64) -> Vec<(u64, u32)> {
    let mut powers: Vec<(u64, u32)> = Vec::new();
    for p in prime_factors(n) {
        match powers.last_mut() {
            Some((q, exp)) if *q == p => *exp += 1,
            _ => powers.push((p, 1)),
        }
    }
    powers
}

/// All positive divisors of `n` in ascending order. Empty for `n < 1`.
pub fn divisors(n: i64) -> Vec<u64> {
    if n < 1 {
        return vec![];
    }
    let n = n as u64;
    let mut small = Vec::new();
    let mut large = Vec::new();
    for d in 1..=n.isqrt() {
        if n.is_multiple_of(d) {
            small.push(d);
            if d != n / d {
                large.push(n / d);
            }
        }
    }
    small.extend(large.into_iter().rev());
    small
}

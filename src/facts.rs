//! # Facts — Derived Report About a Single Integer
//!
//! Combines the core operations into one summary. For a prime: its position
//! in the sequence of primes, twin-prime neighbours, and (for p ≡ 1 mod 4) a
//! representation as a sum of two squares, which exists by Fermat's theorem
//! on sums of two squares. For anything else: the prime factorization and the
//! full divisor list.

use serde::Serialize;

use crate::factor::{divisors, prime_factors};
use crate::primality::is_prime;
use crate::sieve::prime_count;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PrimeFacts {
    Prime {
        n: u64,
        /// 1-based index among the primes. `None` when `n` is above the
        /// position limit passed to [`PrimeFacts::compute`].
        position: Option<usize>,
        lower_twin: Option<u64>,
        upper_twin: Option<u64>,
        /// `(a, b)` with `a <= b` and `a² + b² = n`.
        two_squares: Option<(u64, u64)>,
    },
    NotPrime {
        n: i64,
        factors: Vec<u64>,
        divisors: Vec<u64>,
    },
}

impl PrimeFacts {
    /// Build the report for `n`. The position lookup sieves up to `n`, so it
    /// only runs when `n <= position_limit`.
    pub fn compute(n: i64, position_limit: i64) -> Self {
        if !is_prime(n) {
            return PrimeFacts::NotPrime {
                n,
                factors: prime_factors(n),
                divisors: divisors(n),
            };
        }

        let position = (n <= position_limit).then(|| prime_count(n));
        let lower_twin = (n > 2 && is_prime(n - 2)).then(|| (n - 2) as u64);
        let upper_twin = n
            .checked_add(2)
            .filter(|&m| n > 2 && is_prime(m))
            .map(|m| m as u64);
        let n = n as u64;
        let two_squares = if n % 4 == 1 { two_squares(n) } else { None };

        PrimeFacts::Prime {
            n,
            position,
            lower_twin,
            upper_twin,
            two_squares,
        }
    }

    pub fn n(&self) -> i64 {
        match self {
            PrimeFacts::Prime { n, .. } => *n as i64,
            PrimeFacts::NotPrime { n, .. } => *n,
        }
    }

    pub fn is_prime(&self) -> bool {
        matches!(self, PrimeFacts::Prime { .. })
    }
}

/// Find `(a, b)` with `a <= b` and `a² + b² = n`, smallest `a` first.
pub fn two_squares(n: u64) -> Option<(u64, u64)> {
    (0..=(n / 2).isqrt()).find_map(|a| {
        let rest = n - a * a;
        let b = rest.isqrt();
        (b * b == rest).then_some((a, b))
    })
}

#[cfg(test)]
mod tests {
    //! Tests for the facts report: positions against known indices (13 is
    //! the 6th prime, 7919 the 1000th), twin detection at both ends, the
    //! sum-of-two-squares witness, the position cutoff, and the composite
    //! branch with factors and divisors.

    use super::*;

    #[test]
    fn prime_position() {
        match PrimeFacts::compute(13, 1_000_000) {
            PrimeFacts::Prime { position, .. } => assert_eq!(position, Some(6)),
            other => panic!("expected prime facts, got {:?}", other),
        }
        match PrimeFacts::compute(7919, 1_000_000) {
            PrimeFacts::Prime { position, .. } => assert_eq!(position, Some(1000)),
            other => panic!("expected prime facts, got {:?}", other),
        }
    }

    #[test]
    fn position_skipped_above_limit() {
        match PrimeFacts::compute(7919, 1000) {
            PrimeFacts::Prime { position, .. } => assert_eq!(position, None),
            other => panic!("expected prime facts, got {:?}", other),
        }
    }

    #[test]
    fn twins_on_both_sides() {
        // 5 pairs with 3 below and 7 above
        assert_eq!(
            PrimeFacts::compute(5, 100),
            PrimeFacts::Prime {
                n: 5,
                position: Some(3),
                lower_twin: Some(3),
                upper_twin: Some(7),
                two_squares: Some((1, 2)),
            }
        );
    }

    #[test]
    fn two_has_no_twins() {
        assert_eq!(
            PrimeFacts::compute(2, 100),
            PrimeFacts::Prime {
                n: 2,
                position: Some(1),
                lower_twin: None,
                upper_twin: None,
                two_squares: None,
            }
        );
    }

    #[test]
    fn prime_3_mod_4_has_no_two_squares() {
        match PrimeFacts::compute(23, 100) {
            PrimeFacts::Prime {
                two_squares,
                lower_twin,
                upper_twin,
                ..
            } => {
                assert_eq!(two_squares, None);
                assert_eq!(lower_twin, None);
                assert_eq!(upper_twin, None);
            }
            other => panic!("expected prime facts, got {:?}", other),
        }
    }

    #[test]
    fn two_squares_witness() {
        assert_eq!(two_squares(13), Some((2, 3)));
        assert_eq!(two_squares(97), Some((4, 9)));
        assert_eq!(two_squares(3), None);
        for p in crate::sieve::sieve(5000).into_iter().filter(|p| p % 4 == 1) {
            let (a, b) = two_squares(p).unwrap();
            assert!(a <= b);
            assert_eq!(a * a + b * b, p);
        }
    }

    #[test]
    fn composite_report() {
        assert_eq!(
            PrimeFacts::compute(12, 100),
            PrimeFacts::NotPrime {
                n: 12,
                factors: vec![2, 2, 3],
                divisors: vec![1, 2, 3, 4, 6, 12],
            }
        );
    }

    #[test]
    fn non_positive_report_is_empty() {
        let facts = PrimeFacts::compute(-4, 100);
        assert!(!facts.is_prime());
        assert_eq!(facts.n(), -4);
        assert_eq!(
            facts,
            PrimeFacts::NotPrime {
                n: -4,
                factors: vec![],
                divisors: vec![],
            }
        );
    }

    #[test]
    fn serializes_with_kind_tag() {
        let json = serde_json::to_value(PrimeFacts::compute(12, 100)).unwrap();
        assert_eq!(json["kind"], "not_prime");
        assert_eq!(json["factors"], serde_json::json!([2, 2, 3]));
        let json = serde_json::to_value(PrimeFacts::compute(13, 100)).unwrap();
        assert_eq!(json["kind"], "prime");
        assert_eq!(json["two_squares"], serde_json::json!([2, 3]));
    }
}

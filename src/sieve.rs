//! # Sieve — Prime Generation and Range Search
//!
//! Bulk prime enumeration. Provides:
//!
//! 1. **Sieve of Eratosthenes** ([`sieve`], [`PrimeTable`]) over a packed
//!    one-bit-per-index table whose size is fixed at allocation.
//! 2. **Range search** ([`primes_in_range`]) by per-candidate trial division,
//!    for windows far from zero where a full sieve would be wasteful.
//! 3. **First-N primes** ([`first_primes`]) using an explicit upper bound on
//!    the n-th prime, so one sieve pass always suffices.
//! 4. **Prime counting** ([`prime_count`]), π(x) by sieving.
//!
//! ## Algorithm: Sieve of Eratosthenes
//!
//! Start with every index in `0..=limit` marked prime, clear 0 and 1, then for
//! each p with p² ≤ limit that is still marked, clear p², p² + p, … up to the
//! limit. Multiples below p² were already cleared by a smaller prime factor.
//! Complexity: O(n log log n) time, O(n/8) bytes of space.
//!
//! ## Algorithm: n-th Prime Bound
//!
//! For k ≥ 6 the k-th prime satisfies p_k < k·(ln k + ln ln k). Smaller k are
//! covered by the constant 13 (p₅ = 11).
//!
//! ## References
//!
//! - Eratosthenes of Cyrene, ~240 BCE (sieve algorithm).
//! - J. Barkley Rosser and Lowell Schoenfeld, "Approximate formulas for some
//!   functions of prime numbers", Illinois J. Math. 6(1):64–94, 1962.

use crate::primality::is_prime;

/// All primes `<= limit` in ascending order. Empty for `limit < 2`.
pub fn sieve(limit: i64) -> Vec<u64> {
    if limit < 2 {
        return vec![];
    }
    PrimeTable::new(limit as u64).to_vec()
}

/// All primes in `[start, end]` (both inclusive) in ascending order.
///
/// Tests each candidate with [`is_prime`]. Empty when `start > end`.
pub fn primes_in_range(start: i64, end: i64) -> Vec<u64> {
    (start.max(2)..=end)
        .filter(|&n| is_prime(n))
        .map(|n| n as u64)
        .collect()
}

/// The first `count` primes in ascending order.
pub fn first_primes(count: usize) -> Vec<u64> {
    if count == 0 {
        return vec![];
    }
    let mut primes = PrimeTable::new(nth_prime_upper_bound(count)).to_vec();
    primes.truncate(count);
    primes
}

/// An upper bound on the `k`-th prime (1-based). Returns 0 for `k == 0`.
pub fn nth_prime_upper_bound(k: usize) -> u64 {
    match k {
        0 => 0,
        1..=5 => 13,
        _ => {
            let kf = k as f64;
            (kf * (kf.ln() + kf.ln().ln())).ceil() as u64
        }
    }
}

/// Number of primes `<= limit`, π(limit).
pub fn prime_count(limit: i64) -> usize {
    if limit < 2 {
        return 0;
    }
    PrimeTable::new(limit as u64).count()
}

/// Estimate prime count up to n using the prime counting function approximation.
fn estimate_prime_count(n: u64) -> usize {
    if n < 10 {
        return 4;
    }
    let nf = n as f64;
    (1.3 * nf / nf.ln()) as usize
}

/// Sieved primality table over `0..=limit`.
///
/// One bit per index: bit `i` lives in word `i / 64`, position `i % 64`, and is
/// set iff `i` is prime. Bits past `limit` in the last word are always clear,
/// so whole-word operations need no bounds masking.
pub struct PrimeTable {
    words: Box<[u64]>,
    limit: u64,
}

impl PrimeTable {
    /// Allocate a table for `0..=limit` and run the sieve over it.
    pub fn new(limit: u64) -> Self {
        let mut table = Self::new_all_set(limit);
        table.clear(0);
        if limit >= 1 {
            table.clear(1);
        }
        let mut p = 2u64;
        while p <= limit / p {
            if table.is_prime(p) {
                let mut m = p * p;
                while m <= limit {
                    table.clear(m);
                    m += p;
                }
            }
            p += 1;
        }
        table
    }

    fn new_all_set(limit: u64) -> Self {
        let num_words = (limit / 64 + 1) as usize;
        let mut words = vec![u64::MAX; num_words].into_boxed_slice();
        let extra = 63 - (limit % 64);
        words[num_words - 1] >>= extra;
        PrimeTable { words, limit }
    }

    /// Largest index covered by this table.
    #[inline]
    pub fn limit(&self) -> u64 {
        self.limit
    }

    /// Whether `n` is prime.
    ///
    /// # Panics
    /// Panics if `n > limit`.
    #[inline]
    pub fn is_prime(&self, n: u64) -> bool {
        assert!(
            n <= self.limit,
            "PrimeTable index out of bounds: {} > {}",
            n,
            self.limit
        );
        self.words[(n / 64) as usize] & (1u64 << (n % 64)) != 0
    }

    #[inline]
    fn clear(&mut self, n: u64) {
        debug_assert!(n <= self.limit);
        self.words[(n / 64) as usize] &= !(1u64 << (n % 64));
    }

    /// Number of primes in the table.
    pub fn count(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Iterate over the primes in ascending order.
    pub fn primes(&self) -> impl Iterator<Item = u64> + '_ {
        self.words.iter().enumerate().flat_map(|(wi, &word)| SetBits {
            word,
            base: wi as u64 * 64,
        })
    }

    /// Collect the primes into a vector.
    pub fn to_vec(&self) -> Vec<u64> {
        let mut primes = Vec::with_capacity(estimate_prime_count(self.limit));
        primes.extend(self.primes());
        primes
    }
}

/// Iterator over set bits within a single u64 word.
struct SetBits {
    word: u64,
    base: u64,
}

impl Iterator for SetBits {
    type Item = u64;

    #[inline]
    fn next(&mut self) -> Option<u64> {
        if self.word == 0 {
            return None;
        }
        let tz = self.word.trailing_zeros() as u64;
        self.word &= self.word - 1; // clear lowest set bit
        Some(self.base + tz)
    }
}

//! # CLI Execution Functions
//!
//! Extracted from `main.rs` to keep the entry point slim. Each function
//! enforces the configured limits, calls into the toolkit, and prints either
//! formatted text or a JSON document to stdout.

use anyhow::Result;
use primekit::config::{Limits, RangeCheck};
use primekit::{display, factor, facts::PrimeFacts, primality, session::Session, sieve};
use tracing::{info, info_span, warn};

fn print_json(value: &serde_json::Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn run_interactive(limits: Limits) -> Result<()> {
    info!("starting interactive session");
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock(), limits);
    session.run()?;
    info!(queries = session.history().len(), "session ended");
    Ok(())
}

pub fn run_check(limits: &Limits, n: i64, naive: bool, json: bool) -> Result<()> {
    let prime = if naive {
        // Quadratic; keep it inside the same bound as the sieve.
        if n > limits.max_sieve_limit {
            anyhow::bail!(
                "--naive only accepts numbers up to {} (got {})",
                limits.max_sieve_limit,
                n
            );
        }
        primality::is_prime_naive(n)
    } else {
        primality::is_prime(n)
    };

    if json {
        let factors = if prime {
            vec![]
        } else {
            factor::prime_factors(n)
        };
        return print_json(&serde_json::json!({
            "n": n,
            "is_prime": prime,
            "factors": factors,
        }));
    }
    print!("{}", display::render_check(n, prime));
    Ok(())
}

pub fn run_factor(n: i64, powers: bool, json: bool) -> Result<()> {
    if n < 2 {
        anyhow::bail!("Prime factorization is only for numbers >= 2 (got {})", n);
    }
    let factors = factor::prime_factors(n);
    let grouped = factor::factor_powers(n);

    if json {
        return print_json(&serde_json::json!({
            "n": n,
            "factors": factors,
            "powers": grouped,
        }));
    }
    let product = if powers {
        display::join_powers(&grouped)
    } else {
        display::join_factors(&factors)
    };
    println!("{} = {}", n, product);
    Ok(())
}

pub fn run_range(limits: &Limits, start: i64, end: i64, json: bool) -> Result<()> {
    if limits.check_range(start, end)? == RangeCheck::Large {
        warn!(
            start,
            end,
            warn_width = limits.range_warn_width,
            "large range, this may take time"
        );
    }

    let span = info_span!("range", start, end);
    let primes = span.in_scope(|| sieve::primes_in_range(start, end));
    info!(start, end, found = primes.len(), "range search complete");

    if json {
        return print_json(&serde_json::json!({
            "start": start,
            "end": end,
            "count": primes.len(),
            "primes": primes,
        }));
    }
    if primes.is_empty() {
        println!("No prime numbers in range [{}, {}]", start, end);
    } else {
        print!(
            "{}",
            display::render_table("PRIME NUMBERS", &primes, limits.per_row)
        );
    }
    Ok(())
}

pub fn run_sieve(limits: &Limits, limit: i64, json: bool) -> Result<()> {
    limits.check_sieve_limit(limit)?;

    let span = info_span!("sieve", limit);
    let primes = span.in_scope(|| sieve::sieve(limit));
    info!(limit, found = primes.len(), "sieve complete");

    if json {
        return print_json(&serde_json::json!({
            "limit": limit,
            "count": primes.len(),
            "primes": primes,
        }));
    }
    print!(
        "{}",
        display::render_table("PRIME NUMBERS", &primes, limits.per_row)
    );
    Ok(())
}

pub fn run_first(limits: &Limits, requested: usize, json: bool) -> Result<()> {
    let (count, clamped) = limits.clamp_count(requested);
    if clamped {
        warn!(requested, limit = count, "prime count clamped");
    }
    let primes = sieve::first_primes(count);

    if json {
        return print_json(&serde_json::json!({
            "requested": requested,
            "count": primes.len(),
            "primes": primes,
        }));
    }
    print!(
        "{}",
        display::render_table("PRIME NUMBERS", &primes, limits.per_row)
    );
    Ok(())
}

pub fn run_facts(limits: &Limits, n: i64, json: bool) -> Result<()> {
    limits.check_facts_n(n)?;
    let facts = PrimeFacts::compute(n, limits.max_sieve_limit);
    if json {
        return print_json(&serde_json::to_value(&facts)?);
    }
    print!("{}", display::render_facts(&facts));
    Ok(())
}

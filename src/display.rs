//! # Display — Plain-Text Rendering
//!
//! Framed prime tables, factorization strings and fact reports. Every
//! renderer builds and returns a `String`; printing is left to the caller.

use crate::facts::PrimeFacts;

const RULE_WIDTH: usize = 60;

fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

fn push_line(out: &mut String, line: &str) {
    out.push_str(line);
    out.push('\n');
}

/// Render primes as a framed table, `per_row` entries per line, followed by
/// a total line.
pub fn render_table(title: &str, primes: &[u64], per_row: usize) -> String {
    let mut out = String::new();
    push_line(&mut out, &rule());
    push_line(&mut out, title);
    push_line(&mut out, &rule());
    for row in primes.chunks(per_row.max(1)) {
        let cells: Vec<String> = row.iter().map(|p| format!("{:>5}", p)).collect();
        push_line(&mut out, &cells.join("  "));
    }
    push_line(&mut out, &rule());
    push_line(&mut out, &format!("Total: {} primes", primes.len()));
    out
}

/// `2 × 2 × 2 × 3 × 3 × 5`
pub fn join_factors(factors: &[u64]) -> String {
    factors
        .iter()
        .map(u64::to_string)
        .collect::<Vec<_>>()
        .join(" × ")
}

/// `2^3 × 3^2 × 5`
pub fn join_powers(powers: &[(u64, u32)]) -> String {
    powers
        .iter()
        .map(|&(p, e)| {
            if e == 1 {
                p.to_string()
            } else {
                format!("{}^{}", p, e)
            }
        })
        .collect::<Vec<_>>()
        .join(" × ")
}

/// Verdict line for a primality check, with the factorization appended for
/// composites above 1.
pub fn render_check(n: i64, prime: bool) -> String {
    if prime {
        return format!("{} IS a prime number!\n", n);
    }
    let mut out = format!("{} is NOT a prime number\n", n);
    if n > 1 {
        let factors = crate::factor::prime_factors(n);
        push_line(&mut out, &format!("Prime factorization: {}", join_factors(&factors)));
    }
    out
}

fn join_list(values: &[u64]) -> String {
    values
        .iter()
        .map(u64::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn ordinal(n: usize) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{}{}", n, suffix)
}

/// Render a [`PrimeFacts`] report.
pub fn render_facts(facts: &PrimeFacts) -> String {
    let mut out = String::new();
    push_line(&mut out, &rule());
    push_line(&mut out, &format!("FACTS ABOUT {}", facts.n()));
    push_line(&mut out, &rule());
    match facts {
        PrimeFacts::Prime {
            position,
            lower_twin,
            upper_twin,
            two_squares,
            ..
        } => {
            push_line(&mut out, "This IS a prime number!");
            if let Some(pos) = position {
                push_line(&mut out, &format!("Position: {} prime number", ordinal(*pos)));
            }
            if let Some(t) = lower_twin {
                push_line(&mut out, &format!("Twin prime with: {} (lower twin)", t));
            }
            if let Some(t) = upper_twin {
                push_line(&mut out, &format!("Twin prime with: {} (upper twin)", t));
            }
            if let Some((a, b)) = two_squares {
                push_line(&mut out, &format!("Sum of two squares: {}^2 + {}^2", a, b));
            }
        }
        PrimeFacts::NotPrime {
            factors, divisors, ..
        } => {
            push_line(&mut out, "This is NOT a prime number");
            if !factors.is_empty() {
                push_line(&mut out, &format!("Prime factorization: {}", join_factors(factors)));
            }
            if !divisors.is_empty() {
                push_line(&mut out, &format!("All divisors: {}", join_list(divisors)));
            }
        }
    }
    push_line(&mut out, &rule());
    out
}

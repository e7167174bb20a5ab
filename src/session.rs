//! # Session — Interactive Menu Loop
//!
//! A menu-driven front end over the toolkit. All state lives on the
//! [`Session`] value: the input and output handles, the active [`Limits`],
//! and the history of completed queries. Generic over `BufRead` / `Write` so
//! tests can drive it with in-memory buffers.
//!
//! Malformed numbers print `Invalid input!` and return to the menu. End of
//! input at any prompt ends the session cleanly.

use anyhow::Result;
use std::io::{BufRead, Write};
use std::str::FromStr;
use tracing::{debug, warn};

use crate::config::{Limits, RangeCheck};
use crate::display;
use crate::facts::PrimeFacts;
use crate::factor::prime_factors;
use crate::primality::is_prime;
use crate::sieve::{first_primes, primes_in_range};

const MENU: &str = "\nOptions:
1. Check if a number is prime
2. Find primes in a range
3. Find prime factors
4. First N prime numbers
5. Prime number facts
6. Show history
7. Exit
";

/// One completed query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub command: &'static str,
    pub input: String,
    pub summary: String,
}

enum Input<T> {
    Value(T),
    Invalid,
    Eof,
}

/// One line read from the input, decoded.
enum Line {
    Text(String),
    /// Not valid UTF-8.
    Malformed,
    Eof,
}

#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

pub struct Session<R, W> {
    input: R,
    output: W,
    limits: Limits,
    history: Vec<HistoryEntry>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, limits: Limits) -> Self {
        Session {
            input,
            output,
            limits,
            history: Vec::new(),
        }
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Run the menu loop until the user exits or input ends.
    pub fn run(&mut self) -> Result<()> {
        writeln!(self.output, "{}", "=".repeat(60))?;
        writeln!(self.output, "PRIME NUMBER CHECKER")?;
        writeln!(self.output, "{}", "=".repeat(60))?;
        writeln!(
            self.output,
            "A prime number is a natural number greater than 1\n\
             that has no positive divisors other than 1 and itself."
        )?;

        loop {
            write!(self.output, "{}", MENU)?;
            let choice = match self.prompt("\nEnter choice (1-7): ")? {
                Line::Text(choice) => choice,
                Line::Malformed => {
                    writeln!(self.output, "Invalid choice!")?;
                    continue;
                }
                Line::Eof => break,
            };
            debug!(choice = %choice, "menu selection");
            let flow = match choice.as_str() {
                "1" => self.check()?,
                "2" => self.range()?,
                "3" => self.factor()?,
                "4" => self.first()?,
                "5" => self.facts()?,
                "6" => self.show_history()?,
                "7" => {
                    writeln!(self.output, "\nGoodbye!")?;
                    Flow::Quit
                }
                _ => {
                    writeln!(self.output, "Invalid choice!")?;
                    Flow::Continue
                }
            };
            if flow == Flow::Quit {
                break;
            }
        }
        self.output.flush()?;
        Ok(())
    }

    fn prompt(&mut self, message: &str) -> Result<Line> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(Line::Eof);
        }
        Ok(match String::from_utf8(buf) {
            Ok(line) => Line::Text(line.trim().to_string()),
            Err(_) => Line::Malformed,
        })
    }

    fn prompt_number<T: FromStr>(&mut self, message: &str) -> Result<Input<T>> {
        Ok(match self.prompt(message)? {
            Line::Eof => Input::Eof,
            Line::Malformed => Input::Invalid,
            Line::Text(text) => match text.parse() {
                Ok(v) => Input::Value(v),
                Err(_) => Input::Invalid,
            },
        })
    }

    /// Read one number, handling EOF and malformed input. `Err(flow)` means
    /// the caller should return that flow immediately.
    fn read_number<T: FromStr>(&mut self, message: &str) -> Result<std::result::Result<T, Flow>> {
        match self.prompt_number(message)? {
            Input::Value(v) => Ok(Ok(v)),
            Input::Eof => Ok(Err(Flow::Quit)),
            Input::Invalid => {
                writeln!(self.output, "Invalid input!")?;
                Ok(Err(Flow::Continue))
            }
        }
    }

    fn record(&mut self, command: &'static str, input: String, summary: String) {
        self.history.push(HistoryEntry {
            command,
            input,
            summary,
        });
    }

    fn check(&mut self) -> Result<Flow> {
        let n: i64 = match self.read_number("\nEnter a number to check: ")? {
            Ok(n) => n,
            Err(flow) => return Ok(flow),
        };
        let prime = is_prime(n);
        write!(self.output, "\n{}", display::render_check(n, prime))?;
        let summary = if prime { "prime" } else { "not prime" };
        self.record("check", n.to_string(), summary.to_string());
        Ok(Flow::Continue)
    }

    fn range(&mut self) -> Result<Flow> {
        let start: i64 = match self.read_number("\nStart of range: ")? {
            Ok(n) => n,
            Err(flow) => return Ok(flow),
        };
        let end: i64 = match self.read_number("End of range: ")? {
            Ok(n) => n,
            Err(flow) => return Ok(flow),
        };
        match self.limits.check_range(start, end) {
            Err(e) => {
                writeln!(self.output, "{}", e)?;
                return Ok(Flow::Continue);
            }
            Ok(RangeCheck::Large) => {
                warn!(start, end, "large range requested");
                writeln!(self.output, "\nLarge range! This may take time...")?;
            }
            Ok(RangeCheck::Ok) => {}
        }

        let primes = primes_in_range(start, end);
        if primes.is_empty() {
            writeln!(self.output, "\nNo prime numbers in range [{}, {}]", start, end)?;
        } else {
            write!(
                self.output,
                "\n{}",
                display::render_table("PRIME NUMBERS", &primes, self.limits.per_row)
            )?;
        }
        self.record(
            "range",
            format!("[{}, {}]", start, end),
            format!("{} primes", primes.len()),
        );
        Ok(Flow::Continue)
    }

    fn factor(&mut self) -> Result<Flow> {
        let n: i64 = match self.read_number("\nEnter a number to factorize: ")? {
            Ok(n) => n,
            Err(flow) => return Ok(flow),
        };
        if n < 2 {
            writeln!(self.output, "Prime factorization is only for numbers >= 2")?;
            return Ok(Flow::Continue);
        }
        let product = display::join_factors(&prime_factors(n));
        writeln!(self.output, "\n{} = {}", n, product)?;
        self.record("factor", n.to_string(), product);
        Ok(Flow::Continue)
    }

    fn first(&mut self) -> Result<Flow> {
        let requested: usize = match self.read_number("\nHow many primes to find? ")? {
            Ok(n) => n,
            Err(flow) => return Ok(flow),
        };
        let (count, clamped) = self.limits.clamp_count(requested);
        if clamped {
            warn!(requested, count, "prime count clamped");
            writeln!(self.output, "\nLarge number! Limiting to {}", count)?;
        }
        let primes = first_primes(count);
        write!(
            self.output,
            "\n{}",
            display::render_table("PRIME NUMBERS", &primes, self.limits.per_row)
        )?;
        self.record(
            "first",
            requested.to_string(),
            format!("{} primes", primes.len()),
        );
        Ok(Flow::Continue)
    }

    fn facts(&mut self) -> Result<Flow> {
        let n: i64 = match self.read_number("\nEnter a number: ")? {
            Ok(n) => n,
            Err(flow) => return Ok(flow),
        };
        if let Err(e) = self.limits.check_facts_n(n) {
            writeln!(self.output, "{}", e)?;
            return Ok(Flow::Continue);
        }
        let facts = PrimeFacts::compute(n, self.limits.max_sieve_limit);
        write!(self.output, "\n{}", display::render_facts(&facts))?;
        let summary = if facts.is_prime() { "prime" } else { "not prime" };
        self.record("facts", n.to_string(), summary.to_string());
        Ok(Flow::Continue)
    }

    fn show_history(&mut self) -> Result<Flow> {
        if self.history.is_empty() {
            writeln!(self.output, "\nNo queries yet")?;
            return Ok(Flow::Continue);
        }
        writeln!(self.output)?;
        for (i, entry) in self.history.iter().enumerate() {
            writeln!(
                self.output,
                "{:>3}. {:<6} {} -> {}",
                i + 1,
                entry.command,
                entry.input,
                entry.summary
            )?;
        }
        Ok(Flow::Continue)
    }
}

//! # Config — Input Limits
//!
//! Caps applied by the CLI and the interactive session before any input
//! reaches the toolkit, so call duration and sieve memory stay bounded.
//! Read from the `[limits]` table of a TOML file; every field is optional and
//! falls back to its default.
//!
//! ```toml
//! [limits]
//! range_warn_width = 10000
//! max_range_width = 1000000
//! max_count = 10000
//! max_sieve_limit = 10000000
//! max_facts_n = 1000000000000
//! per_row = 10
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Top-level config file layout.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub limits: Limits,
}

/// The `[limits]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Limits {
    /// Range width above which a search logs a warning.
    pub range_warn_width: u64,
    /// Range width above which a search is rejected.
    pub max_range_width: u64,
    /// First-N requests above this are clamped.
    pub max_count: usize,
    /// Largest sieve limit accepted, also the cutoff for prime positions.
    pub max_sieve_limit: i64,
    /// Largest number accepted by the facts report. Divisor and
    /// sum-of-two-squares searches scan up to its square root.
    pub max_facts_n: i64,
    /// Columns in rendered prime tables.
    pub per_row: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Limits {
            range_warn_width: 10_000,
            max_range_width: 1_000_000,
            max_count: 10_000,
            max_sieve_limit: 10_000_000,
            max_facts_n: 1_000_000_000_000,
            per_row: 10,
        }
    }
}

/// Outcome of checking a requested range against the limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeCheck {
    Ok,
    Large,
}

impl Limits {
    /// Check the width of `[start, end]`. Errors when above `max_range_width`.
    pub fn check_range(&self, start: i64, end: i64) -> Result<RangeCheck> {
        if start > end {
            return Ok(RangeCheck::Ok);
        }
        let width = end.abs_diff(start);
        if width > self.max_range_width {
            anyhow::bail!(
                "Range width {} exceeds the maximum of {}",
                width,
                self.max_range_width
            );
        }
        if width > self.range_warn_width {
            return Ok(RangeCheck::Large);
        }
        Ok(RangeCheck::Ok)
    }

    /// Errors when `limit` is above `max_sieve_limit`.
    pub fn check_sieve_limit(&self, limit: i64) -> Result<()> {
        if limit > self.max_sieve_limit {
            anyhow::bail!(
                "Sieve limit {} exceeds the maximum of {}",
                limit,
                self.max_sieve_limit
            );
        }
        Ok(())
    }

    /// Errors when `n` is above `max_facts_n`.
    pub fn check_facts_n(&self, n: i64) -> Result<()> {
        if n > self.max_facts_n {
            anyhow::bail!(
                "Facts are only available for numbers up to {} (got {})",
                self.max_facts_n,
                n
            );
        }
        Ok(())
    }

    /// Clamp a first-N request to `max_count`. Returns the count to use and
    /// whether it was reduced.
    pub fn clamp_count(&self, count: usize) -> (usize, bool) {
        if count > self.max_count {
            (self.max_count, true)
        } else {
            (count, false)
        }
    }
}

/// Parse a config from a TOML string.
pub fn parse_toml(content: &str) -> Result<Config> {
    let config: Config = toml::from_str(content)?;
    validate_limits(&config.limits)?;
    Ok(config)
}

/// Parse a config from a TOML file path.
pub fn parse_toml_file(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading config file {}", path.display()))?;
    parse_toml(&content).with_context(|| format!("parsing config file {}", path.display()))
}

/// Load limits from `path`, or the defaults when no path is given.
pub fn load(path: Option<&Path>) -> Result<Limits> {
    match path {
        Some(p) => {
            let config = parse_toml_file(p)?;
            debug!(path = %p.display(), limits = ?config.limits, "loaded config");
            Ok(config.limits)
        }
        None => Ok(Limits::default()),
    }
}

fn validate_limits(limits: &Limits) -> Result<()> {
    if limits.per_row == 0 {
        anyhow::bail!("limits.per_row must be at least 1");
    }
    if limits.range_warn_width > limits.max_range_width {
        anyhow::bail!(
            "limits.range_warn_width ({}) must not exceed limits.max_range_width ({})",
            limits.range_warn_width,
            limits.max_range_width
        );
    }
    if limits.max_sieve_limit < 2 {
        anyhow::bail!("limits.max_sieve_limit must be at least 2");
    }
    if limits.max_facts_n < 2 {
        anyhow::bail!("limits.max_facts_n must be at least 2");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    //! Config parsing and limit checks: defaults for missing fields, each
    //! validation rule, file loading via tempfile, and the range, sieve,
    //! facts and count guards at their boundaries.

    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let config = parse_toml("").unwrap();
        assert_eq!(config.limits, Limits::default());
    }

    #[test]
    fn partial_section_keeps_other_defaults() {
        let config = parse_toml("[limits]\nmax_count = 50\nper_row = 5\n").unwrap();
        assert_eq!(config.limits.max_count, 50);
        assert_eq!(config.limits.per_row, 5);
        assert_eq!(config.limits.max_sieve_limit, 10_000_000);
    }

    #[test]
    fn zero_per_row_rejected() {
        let err = parse_toml("[limits]\nper_row = 0\n").unwrap_err();
        assert!(err.to_string().contains("per_row"));
    }

    #[test]
    fn warn_above_max_rejected() {
        let err =
            parse_toml("[limits]\nrange_warn_width = 500\nmax_range_width = 100\n").unwrap_err();
        assert!(err.to_string().contains("range_warn_width"));
    }

    #[test]
    fn tiny_sieve_limit_rejected() {
        let err = parse_toml("[limits]\nmax_sieve_limit = 1\n").unwrap_err();
        assert!(err.to_string().contains("max_sieve_limit"));
    }

    #[test]
    fn tiny_facts_limit_rejected() {
        let err = parse_toml("[limits]\nmax_facts_n = 0\n").unwrap_err();
        assert!(err.to_string().contains("max_facts_n"));
    }

    #[test]
    fn facts_n_check() {
        let limits = Limits {
            max_facts_n: 1000,
            ..Limits::default()
        };
        assert!(limits.check_facts_n(1000).is_ok());
        assert!(limits.check_facts_n(i64::MIN).is_ok());
        let err = limits.check_facts_n(1001).unwrap_err();
        assert!(err.to_string().contains("up to 1000"));
        // 2·(2^61 − 1): divisor enumeration alone would scan ~2·10^9 candidates
        assert!(Limits::default().check_facts_n(2 * ((1i64 << 61) - 1)).is_err());
    }

    #[test]
    fn malformed_toml_rejected() {
        assert!(parse_toml("[limits\nper_row = 3").is_err());
        assert!(parse_toml("[limits]\nper_row = \"ten\"\n").is_err());
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("primekit.toml");
        std::fs::write(&path, "[limits]\nmax_sieve_limit = 5000\n").unwrap();
        let limits = load(Some(&path)).unwrap();
        assert_eq!(limits.max_sieve_limit, 5000);
    }

    #[test]
    fn load_missing_file_names_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let err = load(Some(&path)).unwrap_err();
        assert!(format!("{:#}", err).contains("absent.toml"));
    }

    #[test]
    fn load_without_path_is_default() {
        assert_eq!(load(None).unwrap(), Limits::default());
    }

    #[test]
    fn range_checks() {
        let limits = Limits {
            range_warn_width: 10,
            max_range_width: 100,
            ..Limits::default()
        };
        assert_eq!(limits.check_range(0, 10).unwrap(), RangeCheck::Ok);
        assert_eq!(limits.check_range(0, 11).unwrap(), RangeCheck::Large);
        assert_eq!(limits.check_range(5, 3).unwrap(), RangeCheck::Ok);
        assert!(limits.check_range(0, 101).is_err());
        assert!(limits.check_range(i64::MIN, i64::MAX).is_err());
    }

    #[test]
    fn sieve_limit_and_count() {
        let limits = Limits {
            max_count: 100,
            max_sieve_limit: 1000,
            ..Limits::default()
        };
        assert!(limits.check_sieve_limit(1000).is_ok());
        assert!(limits.check_sieve_limit(-3).is_ok());
        assert!(limits.check_sieve_limit(1001).is_err());
        assert_eq!(limits.clamp_count(50), (50, false));
        assert_eq!(limits.clamp_count(500), (100, true));
    }
}

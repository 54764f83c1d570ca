//! Configuration for the comparison layer and the command-line tool.
//!
//! Every section is optional in the TOML file; missing values fall back to
//! their defaults.
//!
//! ```toml
//! [limits]
//! max_amount = 100000
//!
//! [history]
//! capacity = 10
//!
//! [logging]
//! level = "debug"
//! format = "json"
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing_subscriber::{fmt, EnvFilter};

use crate::error::{Error, Result};

/// Default practical ceiling on the requested amount.
///
/// The exact solver allocates two tables of `amount + 1` entries.
pub const DEFAULT_MAX_AMOUNT: usize = 1_000_000;

/// Default number of comparisons kept in the rolling history.
pub const DEFAULT_HISTORY_CAPACITY: usize = 10;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub limits: Limits,
    pub history: HistoryConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Reads a TOML configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        text.parse()
    }
}

impl std::str::FromStr for Config {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }
}

/// Bounds applied to requests before either solver runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Limits {
    pub max_amount: usize,
}

impl Limits {
    pub fn check_amount(&self, amount: usize) -> Result<()> {
        if amount > self.max_amount {
            return Err(Error::AmountTooLarge {
                amount,
                max: self.max_amount,
            });
        }
        Ok(())
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_amount: DEFAULT_MAX_AMOUNT,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    pub capacity: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_HISTORY_CAPACITY,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl LoggingConfig {
    /// Installs the global subscriber. `RUST_LOG` overrides `level`.
    ///
    /// Records emitted through the `log` facade are forwarded to the same
    /// subscriber. Output goes to stderr so stdout stays parseable.
    pub fn init(&self) {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level));

        match self.format.as_str() {
            "json" => {
                fmt()
                    .json()
                    .with_env_filter(filter)
                    .with_writer(std::io::stderr)
                    .init();
            }
            _ => {
                fmt()
                    .with_env_filter(filter)
                    .with_writer(std::io::stderr)
                    .init();
            }
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".into(),
            format: "pretty".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: Config = "".parse().unwrap();
        assert_eq!(config.limits.max_amount, DEFAULT_MAX_AMOUNT);
        assert_eq!(config.history.capacity, DEFAULT_HISTORY_CAPACITY);
        assert_eq!(config.logging, LoggingConfig::default());
    }

    #[test]
    fn test_partial_config() {
        let config: Config = "[limits]\nmax_amount = 500\n\n[logging]\nformat = \"json\"\n"
            .parse()
            .unwrap();
        assert_eq!(config.limits.max_amount, 500);
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.history.capacity, DEFAULT_HISTORY_CAPACITY);
    }

    #[test]
    fn test_invalid_config() {
        let err = "[limits]\nmax_amount = \"lots\"\n".parse::<Config>();
        assert!(matches!(err, Err(Error::Config(_))));
    }

    #[test]
    fn test_limits() {
        let limits = Limits { max_amount: 100 };
        assert!(limits.check_amount(100).is_ok());
        assert!(matches!(
            limits.check_amount(101),
            Err(Error::AmountTooLarge { amount: 101, max: 100 })
        ));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("coinchange.toml");
        fs::write(&path, "[history]\ncapacity = 3\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.history.capacity, 3);

        assert!(matches!(
            Config::load(dir.path().join("missing.toml")),
            Err(Error::Io(_))
        ));
    }
}

// Runtime configuration read from the environment (and a `.env` file if present).
//
// Variables
// - REGISTRATION_LOG: tracing filter directive, defaults to "error".
// - REGISTRATION_MIN_PAYMENT_RATIO: minimum payment as a fraction of the
//   outstanding balance, defaults to 0.4. Must lie in [0, 1].

use crate::modules::registration::core::policy::{DEFAULT_MINIMUM_PAYMENT_RATIO, PaymentPolicy};
use thiserror::Error;

pub const LOG_FILTER_VAR: &str = "REGISTRATION_LOG";
pub const MIN_PAYMENT_RATIO_VAR: &str = "REGISTRATION_MIN_PAYMENT_RATIO";
pub const DEFAULT_LOG_FILTER: &str = "error";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {name}: {value:?} ({reason})")]
    Invalid {
        name: &'static str,
        value: String,
        reason: &'static str,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub log_filter: String,
    pub payment_policy: PaymentPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            payment_policy: PaymentPolicy::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let log_filter = lookup(LOG_FILTER_VAR)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        let minimum_ratio = match lookup(MIN_PAYMENT_RATIO_VAR) {
            None => DEFAULT_MINIMUM_PAYMENT_RATIO,
            Some(raw) => parse_ratio(&raw)?,
        };

        Ok(Self {
            log_filter,
            payment_policy: PaymentPolicy::new(minimum_ratio),
        })
    }
}

fn parse_ratio(raw: &str) -> Result<f64, ConfigError> {
    let invalid = |reason| ConfigError::Invalid {
        name: MIN_PAYMENT_RATIO_VAR,
        value: raw.to_string(),
        reason,
    };
    let ratio: f64 = raw.trim().parse().map_err(|_| invalid("not a number"))?;
    if !(0.0..=1.0).contains(&ratio) {
        return Err(invalid("must be between 0 and 1"));
    }
    Ok(ratio)
}

use std::env;
use std::time::Duration;

use crate::error::AppError;

pub const DEFAULT_STORE_TIMEOUT_MS: u64 = 2_000;

/// Runtime knobs of the scoring services.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoringConfig {
    /// Upper bound for each individual store call.
    pub store_timeout: Duration,
    /// Attach a suggested checkout to throw responses.
    pub suggest_checkouts: bool,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            store_timeout: Duration::from_millis(DEFAULT_STORE_TIMEOUT_MS),
            suggest_checkouts: true,
        }
    }
}

impl ScoringConfig {
    /// Build from `DARTS_STORE_TIMEOUT_MS` and `DARTS_SUGGEST_CHECKOUTS`,
    /// falling back to defaults for unset variables.
    pub fn from_env() -> Result<Self, AppError> {
        let defaults = Self::default();

        let store_timeout = match optional_var("DARTS_STORE_TIMEOUT_MS")? {
            Some(raw) => {
                let ms: u64 = raw.trim().parse().map_err(|_| {
                    AppError::config(format!(
                        "DARTS_STORE_TIMEOUT_MS must be a number of milliseconds, got '{raw}'"
                    ))
                })?;
                if ms == 0 {
                    return Err(AppError::config("DARTS_STORE_TIMEOUT_MS must be positive"));
                }
                Duration::from_millis(ms)
            }
            None => defaults.store_timeout,
        };

        let suggest_checkouts = match optional_var("DARTS_SUGGEST_CHECKOUTS")? {
            Some(raw) => parse_flag("DARTS_SUGGEST_CHECKOUTS", &raw)?,
            None => defaults.suggest_checkouts,
        };

        Ok(Self {
            store_timeout,
            suggest_checkouts,
        })
    }
}

/// Unset reads as `None`; non-unicode values are a config error.
fn optional_var(name: &str) -> Result<Option<String>, AppError> {
    match env::var(name) {
        Ok(v) => Ok(Some(v)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(AppError::from(e)),
    }
}

fn parse_flag(name: &str, raw: &str) -> Result<bool, AppError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(AppError::config(format!(
            "{name} must be a boolean flag, got '{raw}'"
        ))),
    }
}

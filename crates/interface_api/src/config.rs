//! Application configuration

use serde::Deserialize;
use std::path::PathBuf;

use core_kernel::{CoreError, Timezone};
use domain_analytics::RiskThresholds;

/// Prefix of the environment variables read by [`AppConfig::from_env`]
pub const ENV_PREFIX: &str = "DASHBOARD";

/// Application configuration
///
/// Every field has a default, so an empty environment yields a working
/// setup that stores its data under `./data`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Directory holding `policyholders.json` and `claims.json`
    pub data_dir: PathBuf,
    /// Log level
    pub log_level: String,
    /// Timezone used to bucket claims by month
    pub timezone: Timezone,
    /// High-risk thresholds
    pub risk: RiskThresholds,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            data_dir: PathBuf::from("data"),
            log_level: "info".to_string(),
            timezone: Timezone::default(),
            risk: RiskThresholds::default(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from `DASHBOARD_*` environment variables
    ///
    /// Nested values use a double underscore, e.g.
    /// `DASHBOARD_RISK__MAX_RECENT_CLAIMS=5`.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        Self::from_environment(Self::environment())
    }

    /// The environment source used by [`AppConfig::from_env`]
    pub fn environment() -> config::Environment {
        config::Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
    }

    /// Loads configuration from an explicit environment source
    pub fn from_environment(environment: config::Environment) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(environment)
            .build()?
            .try_deserialize()
    }

    /// Checks values that deserialize fine but cannot be used
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.port == 0 {
            return Err(CoreError::configuration("port must be non-zero"));
        }
        if self.risk.max_claim_ratio <= rust_decimal::Decimal::ZERO {
            return Err(CoreError::configuration(format!(
                "risk.max_claim_ratio must be positive, got {}",
                self.risk.max_claim_ratio
            )));
        }
        Ok(())
    }

    /// Returns the server address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

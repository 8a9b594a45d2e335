use serde::Deserialize;

use crate::domain::team::{
    ApplicantOverflow, RegistryLimits, DEFAULT_MAX_APPLICANTS, DEFAULT_MAX_TEAMS,
    FIVE_MEMBER_CAPACITY,
};
use crate::infrastructure::observability::MetricsConfig;

/// Application configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub registry: RegistryConfig,
    #[serde(default)]
    pub metrics: MetricsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Team registry limits
#[derive(Debug, Clone, Deserialize)]
pub struct RegistryConfig {
    /// Most teams alive at once
    #[serde(default = "default_max_teams")]
    pub max_teams: usize,
    /// Longest applicant queue per team
    #[serde(default = "default_max_applicants")]
    pub max_applicants: usize,
    /// Behaviour when an applicant queue is full
    #[serde(default)]
    pub applicant_overflow: ApplicantOverflow,
    /// Capacity used when a create request does not name one
    #[serde(default = "default_capacity")]
    pub default_capacity: usize,
}

fn default_max_teams() -> usize {
    DEFAULT_MAX_TEAMS
}

fn default_max_applicants() -> usize {
    DEFAULT_MAX_APPLICANTS
}

fn default_capacity() -> usize {
    FIVE_MEMBER_CAPACITY
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            max_teams: default_max_teams(),
            max_applicants: default_max_applicants(),
            applicant_overflow: ApplicantOverflow::default(),
            default_capacity: default_capacity(),
        }
    }
}

impl RegistryConfig {
    /// Limits handed to the registry; zero-sized settings fall back to the
    /// defaults
    pub fn limits(&self) -> RegistryLimits {
        RegistryLimits {
            max_teams: self.max_teams,
            max_applicants: self.max_applicants,
            applicant_overflow: self.applicant_overflow,
        }
        .or_defaults()
    }

    pub fn default_capacity(&self) -> usize {
        non_zero_or(self.default_capacity, FIVE_MEMBER_CAPACITY)
    }
}

fn non_zero_or(value: usize, fallback: usize) -> usize {
    if value == 0 { fallback } else { value }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

use crate::core::RankingPolicy;
use crate::models::TierName;
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    #[serde(default)]
    pub ranking: RankingSettings,
    #[serde(default)]
    pub enhancer: EnhancerSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RankingSettings {
    #[serde(default = "default_limit")]
    pub default_limit: u16,
    #[serde(default = "default_max_limit")]
    pub max_limit: u16,
    #[serde(default = "default_top_k")]
    pub enhancement_top_k: usize,
    /// Candidates below this tier are never returned
    #[serde(default)]
    pub min_tier: Option<TierName>,
}

impl Default for RankingSettings {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            max_limit: default_max_limit(),
            enhancement_top_k: default_top_k(),
            min_tier: None,
        }
    }
}

fn default_limit() -> u16 { 20 }
fn default_max_limit() -> u16 { 100 }
fn default_top_k() -> usize { 10 }

#[derive(Debug, Clone, Deserialize)]
pub struct EnhancerSettings {
    #[serde(default)]
    pub enabled: bool,
    pub endpoint: Option<String>,
    pub api_key: Option<String>,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for EnhancerSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            endpoint: None,
            api_key: None,
            timeout_ms: default_timeout_ms(),
        }
    }
}

fn default_timeout_ms() -> u64 { 2000 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with MENTORFIT)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., MENTORFIT__SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("MENTORFIT")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true)
                    .ignore_empty(true),
            )
            .build()?;

        let settings = apply_env_fallbacks(settings)?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("MENTORFIT")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true)
                    .ignore_empty(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Ranking policy derived from the ranking and enhancer sections
    pub fn ranking_policy(&self) -> RankingPolicy {
        RankingPolicy {
            enhancement_top_k: self.ranking.enhancement_top_k,
            enhancement_timeout: Duration::from_millis(self.enhancer.timeout_ms),
        }
    }
}

/// Accept the enhancer key from the bare `ENHANCER_API_KEY` variable
/// when the prefixed one is not set
fn apply_env_fallbacks(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    if non_blank(env::var("MENTORFIT__ENHANCER__API_KEY").ok()).is_some() {
        return Ok(settings);
    }

    match non_blank(env::var("ENHANCER_API_KEY").ok()) {
        Some(api_key) => Config::builder()
            .add_source(settings)
            .set_override("enhancer.api_key", api_key)?
            .build(),
        None => Ok(settings),
    }
}

/// An unfilled `.env` entry counts as unset
fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

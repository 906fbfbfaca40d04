use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::time::Duration;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub stores: StoreSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 3002 }

/// Where the mentor and mentee services live
#[derive(Debug, Clone, Deserialize)]
pub struct StoreSettings {
    #[serde(default = "default_mentor_url")]
    pub mentor_url: String,
    #[serde(default = "default_mentee_url")]
    pub mentee_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl StoreSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            mentor_url: default_mentor_url(),
            mentee_url: default_mentee_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_mentor_url() -> String { "http://localhost:3001".to_string() }
fn default_mentee_url() -> String { "http://localhost:3003".to_string() }
fn default_timeout_secs() -> u64 { 10 }

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
    /// 4. Environment variables (prefixed with MENTOR_MATCH)
    /// 5. The bare `MENTOR_SERVICE_URL`, `MENTEE_SERVICE_URL` and `PORT` variables
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., MENTOR_MATCH__STORES__MENTOR_URL -> stores.mentor_url
            .add_source(env_source())
            .build()?;

        let settings = apply_legacy_env(settings, |key| std::env::var(key).ok())?;

        settings.try_deserialize()
    }
}

fn env_source() -> Environment {
    Environment::with_prefix("MENTOR_MATCH")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

/// Apply the unprefixed variables the services have always been deployed with
fn apply_legacy_env<F>(settings: Config, lookup: F) -> Result<Config, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut builder = Config::builder().add_source(settings);

    if let Some(url) = lookup("MENTOR_SERVICE_URL") {
        builder = builder.set_override("stores.mentor_url", url)?;
    }
    if let Some(url) = lookup("MENTEE_SERVICE_URL") {
        builder = builder.set_override("stores.mentee_url", url)?;
    }
    if let Some(port) = lookup("PORT") {
        let port: u16 = port
            .trim()
            .parse()
            .map_err(|_| ConfigError::Message(format!("PORT is not a valid port: {}", port)))?;
        builder = builder.set_override("server.port", i64::from(port))?;
    }

    builder.build()
}

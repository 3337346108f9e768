//! Environment-driven configuration.
//!
//! ```rust
//! use std::collections::HashMap;
//!
//! use parley::ParleyConfig;
//! use pprovider::Provider;
//!
//! let env = HashMap::from([
//!     ("MISTRAL_API_KEY", "mistral-key"),
//!     ("PARLEY_PROVIDER", "openai"),
//!     ("PARLEY_WINDOW_SIZE", "6"),
//! ]);
//! let config = ParleyConfig::from_lookup(|key| env.get(key).map(|value| value.to_string()))
//!     .expect("config should parse");
//!
//! assert_eq!(config.session.initial_provider, Provider::OpenAi);
//! assert_eq!(config.session.window_size, 6);
//! assert!(config.mistral.api_key.is_some());
//! assert!(config.openai.api_key.is_none());
//! ```

use std::time::Duration;

use pprovider::Provider;
use psession::SessionConfig;

use crate::ConfigError;
use crate::providers::DEFAULT_TIMEOUT;

pub const OPENAI_API_KEY: &str = "OPENAI_API_KEY";
pub const MISTRAL_API_KEY: &str = "MISTRAL_API_KEY";
pub const PARLEY_OPENAI_MODEL: &str = "PARLEY_OPENAI_MODEL";
pub const PARLEY_MISTRAL_MODEL: &str = "PARLEY_MISTRAL_MODEL";
pub const PARLEY_OPENAI_BASE_URL: &str = "PARLEY_OPENAI_BASE_URL";
pub const PARLEY_MISTRAL_BASE_URL: &str = "PARLEY_MISTRAL_BASE_URL";
pub const PARLEY_WINDOW_SIZE: &str = "PARLEY_WINDOW_SIZE";
pub const PARLEY_TIMEOUT_SECS: &str = "PARLEY_TIMEOUT_SECS";
pub const PARLEY_PROVIDER: &str = "PARLEY_PROVIDER";
pub const PARLEY_REPLAY: &str = "PARLEY_REPLAY";
pub const PARLEY_SYSTEM_PROMPT: &str = "PARLEY_SYSTEM_PROMPT";

/// Connection settings for one provider. A missing key leaves the provider unconfigured.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ProviderSettings {
    pub api_key: Option<String>,
    pub model: Option<String>,
    pub base_url: Option<String>,
}

impl std::fmt::Debug for ProviderSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderSettings")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParleyConfig {
    pub openai: ProviderSettings,
    pub mistral: ProviderSettings,
    pub timeout: Duration,
    pub session: SessionConfig,
}

impl Default for ParleyConfig {
    fn default() -> Self {
        Self {
            openai: ProviderSettings::default(),
            mistral: ProviderSettings::default(),
            timeout: DEFAULT_TIMEOUT,
            session: SessionConfig::default(),
        }
    }
}

impl ParleyConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let mut session = SessionConfig::default();
        if let Some(value) = read(PARLEY_PROVIDER) {
            let provider = value.parse::<Provider>().map_err(|err| {
                ConfigError::invalid_value(PARLEY_PROVIDER, &value, err.to_string())
            })?;
            session = session.with_initial_provider(provider);
        }

        if let Some(value) = read(PARLEY_WINDOW_SIZE) {
            session = session.with_window_size(parse_window_size(&value)?);
        }

        if let Some(value) = read(PARLEY_REPLAY) {
            session = session.with_replay(parse_flag(PARLEY_REPLAY, &value)?);
        }

        if let Some(value) = read(PARLEY_SYSTEM_PROMPT) {
            session = session.with_system_prompt(value);
        }

        let timeout = match read(PARLEY_TIMEOUT_SECS) {
            Some(value) => parse_timeout(&value)?,
            None => DEFAULT_TIMEOUT,
        };

        Ok(Self {
            openai: ProviderSettings {
                api_key: read(OPENAI_API_KEY),
                model: read(PARLEY_OPENAI_MODEL),
                base_url: read(PARLEY_OPENAI_BASE_URL),
            },
            mistral: ProviderSettings {
                api_key: read(MISTRAL_API_KEY),
                model: read(PARLEY_MISTRAL_MODEL),
                base_url: read(PARLEY_MISTRAL_BASE_URL),
            },
            timeout,
            session,
        })
    }

    pub fn provider_settings(&self, provider: Provider) -> Option<&ProviderSettings> {
        match provider {
            Provider::OpenAi => Some(&self.openai),
            Provider::MistralAi => Some(&self.mistral),
            Provider::Gemini => None,
        }
    }
}

fn parse_window_size(value: &str) -> Result<usize, ConfigError> {
    match value.parse::<usize>() {
        Ok(0) => Err(ConfigError::invalid_value(
            PARLEY_WINDOW_SIZE,
            value,
            "must be at least 1",
        )),
        Ok(size) => Ok(size),
        Err(err) => Err(ConfigError::invalid_value(
            PARLEY_WINDOW_SIZE,
            value,
            err.to_string(),
        )),
    }
}

fn parse_timeout(value: &str) -> Result<Duration, ConfigError> {
    match value.parse::<u64>() {
        Ok(0) => Err(ConfigError::invalid_value(
            PARLEY_TIMEOUT_SECS,
            value,
            "must be at least 1",
        )),
        Ok(seconds) => Ok(Duration::from_secs(seconds)),
        Err(err) => Err(ConfigError::invalid_value(
            PARLEY_TIMEOUT_SECS,
            value,
            err.to_string(),
        )),
    }
}

fn parse_flag(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::invalid_value(
            key,
            value,
            "expected true or false",
        )),
    }
}

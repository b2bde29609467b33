// src/config.rs
//! Process-wide configuration, read once from the environment at startup.

use std::{path::PathBuf, time::Duration};

use thiserror::Error;

use crate::services::prompt::DEFAULT_SYSTEM_PROMPT;

pub const DEFAULT_PORT: u16 = 10000;
pub const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_FRONTEND_DIR: &str = "frontend/build";
pub const DEFAULT_FALLBACK_REPLY: &str = "No reply from API";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("OPENROUTER_KEY is not set")]
    MissingApiKey,
    #[error("{name} has an invalid value: {value:?}")]
    Invalid { name: &'static str, value: String },
}

/// What to answer when the provider returns no usable choice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EmptyChoicesPolicy {
    /// Reply with `RelayOptions::fallback_reply_text`.
    #[default]
    Fallback,
    /// Reply with `reply: null` and a `no_choices` warning.
    Warn,
}

#[derive(Clone)]
pub struct ProviderConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub timeout: Duration,
}

// Keeps the key out of startup logs.
impl std::fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub frontend_dir: PathBuf,
    pub health_check_enabled: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            frontend_dir: PathBuf::from(DEFAULT_FRONTEND_DIR),
            health_check_enabled: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RelayOptions {
    pub system_prompt: String,
    pub fallback_reply_text: String,
    pub empty_choices: EmptyChoicesPolicy,
}

impl Default for RelayOptions {
    fn default() -> Self {
        Self {
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
            fallback_reply_text: DEFAULT_FALLBACK_REPLY.to_string(),
            empty_choices: EmptyChoicesPolicy::Fallback,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub provider: ProviderConfig,
    pub server: ServerConfig,
    pub relay: RelayOptions,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup. Unset and
    /// empty values both fall back to the default.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_key = get("OPENROUTER_KEY").ok_or(ConfigError::MissingApiKey)?;

        let port = match get("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::Invalid {
                name: "PORT",
                value: raw,
            })?,
            None => DEFAULT_PORT,
        };

        let timeout_secs = match get("PROVIDER_TIMEOUT_SECS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                _ => {
                    return Err(ConfigError::Invalid {
                        name: "PROVIDER_TIMEOUT_SECS",
                        value: raw,
                    });
                }
            },
            None => DEFAULT_TIMEOUT_SECS,
        };

        let health_check_enabled = match get("HEALTH_CHECK_ENABLED") {
            Some(raw) => parse_bool(&raw).ok_or(ConfigError::Invalid {
                name: "HEALTH_CHECK_ENABLED",
                value: raw,
            })?,
            None => false,
        };

        let empty_choices = match get("EMPTY_CHOICES") {
            Some(raw) => match raw.trim().to_ascii_lowercase().as_str() {
                "fallback" => EmptyChoicesPolicy::Fallback,
                "warn" => EmptyChoicesPolicy::Warn,
                _ => {
                    return Err(ConfigError::Invalid {
                        name: "EMPTY_CHOICES",
                        value: raw,
                    });
                }
            },
            None => EmptyChoicesPolicy::Fallback,
        };

        Ok(Self {
            provider: ProviderConfig {
                api_key,
                base_url: get("OPENROUTER_BASE_URL")
                    .map(|url| url.trim_end_matches('/').to_string())
                    .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
                model: get("OPENROUTER_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
                timeout: Duration::from_secs(timeout_secs),
            },
            server: ServerConfig {
                port,
                frontend_dir: get("FRONTEND_DIR")
                    .map(PathBuf::from)
                    .unwrap_or_else(|| PathBuf::from(DEFAULT_FRONTEND_DIR)),
                health_check_enabled,
            },
            relay: RelayOptions {
                system_prompt: get("SYSTEM_PROMPT")
                    .unwrap_or_else(|| DEFAULT_SYSTEM_PROMPT.to_string()),
                fallback_reply_text: get("FALLBACK_REPLY")
                    .unwrap_or_else(|| DEFAULT_FALLBACK_REPLY.to_string()),
                empty_choices,
            },
        })
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

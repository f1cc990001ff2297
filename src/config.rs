// src/config.rs
use crate::domain::slug::SlugPolicy;
use std::env;
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    listen_addr: String,
    slug_policy: SlugPolicy,
    allowed_origins: Vec<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".into()
}

fn default_allowed_origins() -> Vec<String> {
    vec!["http://localhost:3000".into()]
}

impl AppConfig {
    /// Build configuration from environment variables, falling back to
    /// defaults for anything unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Allow dotenv files to populate env vars when present.
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`] but reads values through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let listen_addr = lookup("LISTEN_ADDR").unwrap_or_else(default_listen_addr);
        if listen_addr.trim().is_empty() {
            return Err(ConfigError::Invalid("LISTEN_ADDR cannot be empty".into()));
        }

        let slug_policy = match lookup("SLUG_POLICY") {
            Some(raw) => raw
                .parse::<SlugPolicy>()
                .map_err(|err| ConfigError::Invalid(format!("SLUG_POLICY: {err}")))?,
            None => SlugPolicy::default(),
        };

        let allowed_origins = match lookup("ALLOWED_ORIGINS") {
            Some(raw) => {
                let origins: Vec<String> = raw
                    .split(',')
                    .map(|p| p.trim().to_string())
                    .filter(|p| !p.is_empty())
                    .collect();
                if origins.is_empty() {
                    tracing::warn!("ALLOWED_ORIGINS is blank; keeping default origins");
                    default_allowed_origins()
                } else {
                    origins
                }
            }
            None => default_allowed_origins(),
        };

        Ok(Self {
            listen_addr,
            slug_policy,
            allowed_origins,
        })
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    pub fn slug_policy(&self) -> SlugPolicy {
        self.slug_policy
    }

    pub fn allowed_origins(&self) -> &[String] {
        &self.allowed_origins
    }
}

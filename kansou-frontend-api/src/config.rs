use thiserror::Error;

pub const BACKEND_URL: &str = "KANSOU_BACKEND_URL";
pub const BACKEND_ANON_KEY: &str = "KANSOU_BACKEND_ANON_KEY";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing configuration value {0}")]
    Missing(&'static str),
}

/// Connection parameters of the backend project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL without a trailing slash.
    pub url: String,
    /// Public key that identifies the project.
    pub anon_key: String,
}

impl Config {
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &'static str| {
            lookup(name)
                .map(|value| value.trim().to_owned())
                .filter(|value| !value.is_empty())
                .ok_or(ConfigError::Missing(name))
        };
        let url = required(BACKEND_URL)?.trim_end_matches('/').to_owned();
        let anon_key = required(BACKEND_ANON_KEY)?;
        Ok(Self { url, anon_key })
    }
}

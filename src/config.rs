//! Client configuration management.
//!
//! Configuration is read from `SEALIA_`-prefixed environment variables using
//! the `envy` crate, after an optional `.env` file has been loaded.

use std::path::PathBuf;

use serde::Deserialize;

/// Client configuration loaded from environment variables.
///
/// # Environment Variables
///
/// - `SEALIA_API_URL` (optional): base URL of the REST API, defaults to `http://localhost:5000/api`
/// - `SEALIA_TOKEN_FILE` (optional): where the bearer token is persisted, defaults to `.sealia/token`
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_api_url")]
    pub api_url: String,

    #[serde(default = "default_token_file")]
    pub token_file: PathBuf,
}

fn default_api_url() -> String {
    "http://localhost:5000/api".to_string()
}

fn default_token_file() -> PathBuf {
    PathBuf::from(".sealia/token")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            token_file: default_token_file(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// A `.env` file is loaded first if one exists. Field names map to
    /// prefixed variables: `api_url` -> `SEALIA_API_URL`.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is present but cannot be parsed.
    pub fn from_env() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();

        Self::from_vars(std::env::vars())
    }

    /// Build configuration from an explicit set of variables.
    pub fn from_vars<I>(vars: I) -> Result<Self, envy::Error>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::prefixed("SEALIA_").from_iter::<_, Config>(vars)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_variables_are_missing() {
        let config = Config::from_vars(Vec::<(String, String)>::new()).unwrap();
        assert_eq!(config.api_url, "http://localhost:5000/api");
        assert_eq!(config.token_file, PathBuf::from(".sealia/token"));
    }

    #[test]
    fn prefixed_variables_override_defaults() {
        let vars = vec![
            (
                "SEALIA_API_URL".to_string(),
                "https://api.sealia.test/v2".to_string(),
            ),
            ("SEALIA_TOKEN_FILE".to_string(), "/tmp/tok".to_string()),
            ("API_URL".to_string(), "ignored".to_string()),
        ];

        let config = Config::from_vars(vars).unwrap();
        assert_eq!(config.api_url, "https://api.sealia.test/v2");
        assert_eq!(config.token_file, PathBuf::from("/tmp/tok"));
    }
}

//! Client configuration from environment variables.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `MESAS_API_URL` | `http://localhost:3000` | Base URL of the Mesa API (Mestre, Mesa, Ficha collections) |
//! | `MESAS_CATALOG_URL` | `https://apifakedelivery.vercel.app` | Base URL of the read-only delivery catalog |
//! | `MESAS_TIMEOUT_SECS` | `15` | Per-request timeout on native targets |
//! | `MESAS_UPDATE_METHOD` | `post` | Verb used for updates: `post` (identifier in body) or `put` |
//!
//! A `.env` file is honored via [`dotenvy`]. Web builds have no process
//! environment, so the same variables are also read at compile time.

use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "http://localhost:3000";
pub const DEFAULT_CATALOG_URL: &str = "https://apifakedelivery.vercel.app";
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// HTTP verb used when a mutation carries an existing identifier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UpdateMethod {
    /// `POST` to the collection with the identifier in the body.
    #[default]
    Post,
    /// `PUT` to the collection with the identifier in the body.
    Put,
}

impl FromStr for UpdateMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "post" => Ok(Self::Post),
            "put" => Ok(Self::Put),
            other => Err(format!("unknown update method: {other}")),
        }
    }
}

/// Endpoints and request policy shared by every client.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    pub api_url: String,
    pub catalog_url: String,
    pub timeout: Duration,
    pub update_method: UpdateMethod,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            catalog_url: DEFAULT_CATALOG_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            update_method: UpdateMethod::Post,
        }
    }
}

impl ApiConfig {
    /// Load from the process environment (after reading `.env`), falling back
    /// to values baked in at compile time.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok().or_else(|| compiled(key)))
    }

    /// Build from an arbitrary key lookup. Unset or invalid values use the
    /// defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let api_url = lookup("MESAS_API_URL")
            .map(|url| normalize_base(&url))
            .filter(|url| !url.is_empty())
            .unwrap_or(defaults.api_url);
        let catalog_url = lookup("MESAS_CATALOG_URL")
            .map(|url| normalize_base(&url))
            .filter(|url| !url.is_empty())
            .unwrap_or(defaults.catalog_url);

        let timeout = match lookup("MESAS_TIMEOUT_SECS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    tracing::warn!("Invalid MESAS_TIMEOUT_SECS value {raw:?}, using default");
                    defaults.timeout
                }
            },
            None => defaults.timeout,
        };

        let update_method = match lookup("MESAS_UPDATE_METHOD") {
            Some(raw) => raw.parse().unwrap_or_else(|e| {
                tracing::warn!("{e}, using POST");
                UpdateMethod::Post
            }),
            None => defaults.update_method,
        };

        Self {
            api_url,
            catalog_url,
            timeout,
            update_method,
        }
    }
}

fn compiled(key: &str) -> Option<String> {
    let value = match key {
        "MESAS_API_URL" => option_env!("MESAS_API_URL"),
        "MESAS_CATALOG_URL" => option_env!("MESAS_CATALOG_URL"),
        "MESAS_TIMEOUT_SECS" => option_env!("MESAS_TIMEOUT_SECS"),
        "MESAS_UPDATE_METHOD" => option_env!("MESAS_UPDATE_METHOD"),
        _ => None,
    };
    value.map(str::to_string)
}

fn normalize_base(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_nothing_is_set() {
        let config = ApiConfig::from_lookup(|_| None);
        assert_eq!(config, ApiConfig::default());
        assert_eq!(config.catalog_url, "https://apifakedelivery.vercel.app");
    }

    #[test]
    fn test_reads_and_normalizes_urls() {
        let config = ApiConfig::from_lookup(lookup_from(&[
            ("MESAS_API_URL", " https://mesas.example.com/api/ "),
            ("MESAS_CATALOG_URL", "http://catalog.local/"),
        ]));
        assert_eq!(config.api_url, "https://mesas.example.com/api");
        assert_eq!(config.catalog_url, "http://catalog.local");
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = ApiConfig::from_lookup(lookup_from(&[
            ("MESAS_API_URL", "   "),
            ("MESAS_TIMEOUT_SECS", "soon"),
            ("MESAS_UPDATE_METHOD", "patch"),
        ]));
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        assert_eq!(config.update_method, UpdateMethod::Post);
    }

    #[test]
    fn test_put_updates_opt_in() {
        let config = ApiConfig::from_lookup(lookup_from(&[
            ("MESAS_UPDATE_METHOD", "PUT"),
            ("MESAS_TIMEOUT_SECS", "5"),
        ]));
        assert_eq!(config.update_method, UpdateMethod::Put);
        assert_eq!(config.timeout, Duration::from_secs(5));
    }
}

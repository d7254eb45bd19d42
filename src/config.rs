use log::info;
use std::collections::HashMap;
use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use thiserror::Error;

const DEFAULT_SERVER_ADDRESS: &str = "0.0.0.0:8000";
const PRODUCTION_API_URL: &str = "https://api.cosmicjs.com/v3";
const STAGING_API_URL: &str = "https://api.cosmic-staging.com/v3";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{0} env var not set")]
    Missing(&'static str),
    #[error("invalid value for {key}: {value}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ApiEnvironment {
    Staging,
    Production,
}

impl ApiEnvironment {
    fn default_api_url(&self) -> &'static str {
        match self {
            ApiEnvironment::Staging => STAGING_API_URL,
            ApiEnvironment::Production => PRODUCTION_API_URL,
        }
    }
}

/// Connection identity for the hosted content API.
#[derive(Clone, PartialEq)]
pub struct CosmicConfig {
    pub bucket_slug: String,
    pub read_key: String,
    /// Provisioned alongside the read key; no read-only flow uses it.
    pub write_key: Option<String>,
    pub api_url: String,
}

impl std::fmt::Debug for CosmicConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CosmicConfig")
            .field("bucket_slug", &self.bucket_slug)
            .field("read_key", &"<redacted>")
            .field("write_key", &self.write_key.as_ref().map(|_| "<redacted>"))
            .field("api_url", &self.api_url)
            .finish()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ContentSource {
    Cosmic(CosmicConfig),
    Fixtures(PathBuf),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub server_address: SocketAddr,
    pub content: ContentSource,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(&env::vars().collect())
    }

    pub fn from_vars(vars: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let lookup = |key: &str| vars.get(key).filter(|v| !v.trim().is_empty()).cloned();

        let server_address_raw = lookup("SERVER_ADDRESS").unwrap_or_else(|| {
            info!("SERVER_ADDRESS not set, using default: {DEFAULT_SERVER_ADDRESS}");
            DEFAULT_SERVER_ADDRESS.to_string()
        });
        let server_address =
            server_address_raw
                .parse::<SocketAddr>()
                .map_err(|_| ConfigError::Invalid {
                    key: "SERVER_ADDRESS",
                    value: server_address_raw.clone(),
                })?;

        if let Some(path) = lookup("CONTENT_FIXTURES_PATH") {
            return Ok(Self {
                server_address,
                content: ContentSource::Fixtures(PathBuf::from(path)),
            });
        }

        let environment = match lookup("COSMIC_API_ENVIRONMENT").as_deref() {
            None | Some("staging") => ApiEnvironment::Staging,
            Some("production") => ApiEnvironment::Production,
            Some(other) => {
                return Err(ConfigError::Invalid {
                    key: "COSMIC_API_ENVIRONMENT",
                    value: other.to_string(),
                })
            }
        };

        let cosmic = CosmicConfig {
            bucket_slug: lookup("COSMIC_BUCKET_SLUG")
                .ok_or(ConfigError::Missing("COSMIC_BUCKET_SLUG"))?,
            read_key: lookup("COSMIC_READ_KEY").ok_or(ConfigError::Missing("COSMIC_READ_KEY"))?,
            write_key: lookup("COSMIC_WRITE_KEY"),
            api_url: lookup("COSMIC_API_URL")
                .unwrap_or_else(|| environment.default_api_url().to_string()),
        };

        Ok(Self {
            server_address,
            content: ContentSource::Cosmic(cosmic),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn cosmic_source_defaults_to_staging() {
        let config = Config::from_vars(&vars(&[
            ("COSMIC_BUCKET_SLUG", "space-db"),
            ("COSMIC_READ_KEY", "r"),
            ("COSMIC_WRITE_KEY", "w"),
        ]))
        .unwrap();

        assert_eq!(config.server_address, "0.0.0.0:8000".parse().unwrap());
        assert_eq!(
            config.content,
            ContentSource::Cosmic(CosmicConfig {
                bucket_slug: "space-db".to_string(),
                read_key: "r".to_string(),
                write_key: Some("w".to_string()),
                api_url: STAGING_API_URL.to_string(),
            })
        );
    }

    #[test]
    fn missing_read_key_is_reported_by_name() {
        let err = Config::from_vars(&vars(&[("COSMIC_BUCKET_SLUG", "space-db")])).unwrap_err();
        assert_eq!(err, ConfigError::Missing("COSMIC_READ_KEY"));
        assert_eq!(err.to_string(), "COSMIC_READ_KEY env var not set");
    }

    #[test]
    fn fixtures_path_skips_cosmic_credentials() {
        let config = Config::from_vars(&vars(&[
            ("CONTENT_FIXTURES_PATH", "fixtures/space.json"),
            ("SERVER_ADDRESS", "127.0.0.1:3000"),
        ]))
        .unwrap();

        assert_eq!(
            config.content,
            ContentSource::Fixtures(PathBuf::from("fixtures/space.json"))
        );
        assert_eq!(config.server_address, "127.0.0.1:3000".parse().unwrap());
    }

    #[test]
    fn unknown_environment_is_rejected() {
        let err = Config::from_vars(&vars(&[
            ("COSMIC_BUCKET_SLUG", "space-db"),
            ("COSMIC_READ_KEY", "r"),
            ("COSMIC_API_ENVIRONMENT", "qa"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "COSMIC_API_ENVIRONMENT", .. }));
    }

    #[test]
    fn debug_output_redacts_keys() {
        let config = CosmicConfig {
            bucket_slug: "space-db".to_string(),
            read_key: "secret-read".to_string(),
            write_key: Some("secret-write".to_string()),
            api_url: PRODUCTION_API_URL.to_string(),
        };
        let printed = format!("{:?}", config);
        assert!(!printed.contains("secret"));
    }
}

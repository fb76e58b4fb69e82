//! Server configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `ORDER_GATE_HOST` - Bind address (default: 127.0.0.1)
//! - `ORDER_GATE_PORT` - Listen port (default: 3000)
//! - `ORDER_GATE_GEOCODER_URL` - Geocoding service base URL
//!   (default: <https://api-adresse.data.gouv.fr>)
//! - `ORDER_GATE_CATALOG_PATH` - JSON product catalog (default: built-in catalog)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment tag (e.g. production)

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use thiserror::Error;
use url::Url;

/// Default public address geocoding service.
pub const DEFAULT_GEOCODER_URL: &str = "https://api-adresse.data.gouv.fr";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Order service configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Geocoding service configuration
    pub geocoder: GeocoderConfig,
    /// Product catalog file; `None` uses the built-in catalog
    pub catalog_path: Option<PathBuf>,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment tag
    pub sentry_environment: Option<String>,
}

/// Address geocoding service configuration.
#[derive(Debug, Clone)]
pub struct GeocoderConfig {
    /// Base URL; searches go to `<base_url>/search/`
    pub base_url: Url,
}

impl Default for GeocoderConfig {
    #[allow(clippy::unwrap_used)] // constant URL
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_GEOCODER_URL).unwrap(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an unparseable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("ORDER_GATE_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("ORDER_GATE_HOST".to_string(), e.to_string())
            })?;
        let port = get_env_or_default("ORDER_GATE_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("ORDER_GATE_PORT".to_string(), e.to_string())
            })?;

        let geocoder = GeocoderConfig::from_env()?;
        let catalog_path = get_optional_env("ORDER_GATE_CATALOG_PATH").map(PathBuf::from);
        let sentry_dsn = get_optional_env("SENTRY_DSN");
        let sentry_environment = get_optional_env("SENTRY_ENVIRONMENT");

        Ok(Self {
            host,
            port,
            geocoder,
            catalog_path,
            sentry_dsn,
            sentry_environment,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl GeocoderConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let raw = get_env_or_default("ORDER_GATE_GEOCODER_URL", DEFAULT_GEOCODER_URL);
        Ok(Self {
            base_url: parse_base_url("ORDER_GATE_GEOCODER_URL", &raw)?,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional environment variable, treating empty values as unset.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    get_optional_env(key).unwrap_or_else(|| default.to_string())
}

/// Parse an HTTP(S) base URL.
fn parse_base_url(var_name: &str, raw: &str) -> Result<Url, ConfigError> {
    let url =
        Url::parse(raw).map_err(|e| ConfigError::InvalidEnvVar(var_name.to_string(), e.to_string()))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidEnvVar(
            var_name.to_string(),
            format!("unsupported scheme '{}'", url.scheme()),
        ));
    }

    Ok(url)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_base_url_accepts_http_and_https() {
        assert!(parse_base_url("TEST_VAR", "https://api-adresse.data.gouv.fr").is_ok());
        assert!(parse_base_url("TEST_VAR", "http://127.0.0.1:8080").is_ok());
    }

    #[test]
    fn test_parse_base_url_rejects_other_schemes() {
        let err = parse_base_url("TEST_VAR", "ftp://example.org").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(ref name, _) if name == "TEST_VAR"));
    }

    #[test]
    fn test_parse_base_url_rejects_garbage() {
        assert!(parse_base_url("TEST_VAR", "not a url").is_err());
    }

    #[test]
    fn test_default_geocoder_url() {
        let config = GeocoderConfig::default();
        assert_eq!(config.base_url.host_str(), Some("api-adresse.data.gouv.fr"));
    }

    #[test]
    fn test_socket_addr() {
        let config = ServerConfig {
            host: "127.0.0.1".parse().unwrap(),
            port: 3000,
            geocoder: GeocoderConfig::default(),
            catalog_path: None,
            sentry_dsn: None,
            sentry_environment: None,
        };

        let addr = config.socket_addr();
        assert_eq!(addr.ip().to_string(), "127.0.0.1");
        assert_eq!(addr.port(), 3000);
    }
}

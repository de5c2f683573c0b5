//! Gateway configuration loaded from environment variables.
//!
//! Follows 12-factor style: all settings come from environment variables
//! (or a `.env` file via `dotenvy`).
//!
//! | Key                    | Default        |
//! |------------------------|----------------|
//! | `LISTEN_ADDR`          | `0.0.0.0:8080` |
//! | `MATCH_BATCH_SIZE`     | `10`           |
//! | `CONNECTION_BUFFER`    | `32`           |
//! | `REQUEST_TIMEOUT_SECS` | `10`           |
//! | `LOG_FORMAT`           | `pretty`       |

use std::net::SocketAddr;
use std::time::Duration;

use crate::domain::BatchSize;

/// Configuration errors detected at startup.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// `LISTEN_ADDR` is not a valid socket address.
    #[error("invalid LISTEN_ADDR {value:?}: {source}")]
    ListenAddr {
        /// Raw value that failed to parse.
        value: String,
        /// Parser error.
        source: std::net::AddrParseError,
    },

    /// A numeric setting is outside its allowed range.
    #[error("{key} must be at least {min}, got {value}")]
    OutOfRange {
        /// Environment variable name.
        key: &'static str,
        /// Minimum accepted value.
        min: usize,
        /// Value that was supplied.
        value: usize,
    },
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable, multi-field lines.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

/// Top-level gateway configuration.
///
/// Loaded once at startup via [`GatewayConfig::from_env`].
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Socket address to bind the HTTP server to (e.g. `0.0.0.0:8080`).
    pub listen_addr: SocketAddr,

    /// Players consumed per match.
    pub batch_size: BatchSize,

    /// Capacity of each connection's outbound queue.
    pub connection_buffer: usize,

    /// Timeout applied to HTTP requests.
    pub request_timeout: Duration,

    /// Log output format.
    pub log_format: LogFormat,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            batch_size: BatchSize::default(),
            connection_buffer: 32,
            request_timeout: Duration::from_secs(10),
            log_format: LogFormat::Pretty,
        }
    }
}

impl GatewayConfig {
    /// Loads configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv().ok()` to optionally load a `.env` file.
    ///
    /// # Errors
    ///
    /// See [`GatewayConfig::from_lookup`].
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds configuration from an arbitrary key lookup.
    ///
    /// Missing keys and unparseable numbers fall back to defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ListenAddr`] if `LISTEN_ADDR` is set but does
    /// not parse, and [`ConfigError::OutOfRange`] if `MATCH_BATCH_SIZE` is
    /// below 2 or `CONNECTION_BUFFER` is 0.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let listen_addr = match lookup("LISTEN_ADDR") {
            Some(value) => value
                .parse::<SocketAddr>()
                .map_err(|source| ConfigError::ListenAddr { value, source })?,
            None => defaults.listen_addr,
        };

        let batch = parse_value(&lookup, "MATCH_BATCH_SIZE", defaults.batch_size.get());
        let batch_size = BatchSize::new(batch).ok_or(ConfigError::OutOfRange {
            key: "MATCH_BATCH_SIZE",
            min: BatchSize::MIN,
            value: batch,
        })?;

        let connection_buffer =
            parse_value(&lookup, "CONNECTION_BUFFER", defaults.connection_buffer);
        if connection_buffer == 0 {
            return Err(ConfigError::OutOfRange {
                key: "CONNECTION_BUFFER",
                min: 1,
                value: 0,
            });
        }

        let request_timeout = Duration::from_secs(parse_value(
            &lookup,
            "REQUEST_TIMEOUT_SECS",
            defaults.request_timeout.as_secs(),
        ));

        let log_format = match lookup("LOG_FORMAT").as_deref() {
            Some("json") | Some("JSON") => LogFormat::Json,
            _ => LogFormat::Pretty,
        };

        Ok(Self {
            listen_addr,
            batch_size,
            connection_buffer,
            request_timeout,
            log_format,
        })
    }
}

/// Parses a looked-up value as `T`, returning `default` on missing or
/// invalid values.
fn parse_value<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    lookup(key)
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

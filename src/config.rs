//! Sync configuration parsed from environment variables.

use std::path::PathBuf;
use std::time::Duration;

use crate::consts::DEFAULT_PERSIST_DEBOUNCE_MS;
use crate::error::ConfigError;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

impl Default for StoreTimeouts {
    fn default() -> Self {
        Self { request_secs: DEFAULT_REQUEST_TIMEOUT_SECS, connect_secs: DEFAULT_CONNECT_TIMEOUT_SECS }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncConfig {
    /// Store base URL without a trailing slash.
    pub api_base_url: String,
    /// Quiet period before a pending write is sent.
    pub persist_debounce_ms: u64,
    /// Arm a write when a resize gesture is released.
    pub persist_gesture_settles: bool,
    /// Resize the shape immediately when a field is edited.
    pub mirror_fields_to_shape: bool,
    pub timeouts: StoreTimeouts,
    /// Directory the export helper writes into.
    pub download_dir: PathBuf,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            persist_debounce_ms: DEFAULT_PERSIST_DEBOUNCE_MS,
            persist_gesture_settles: true,
            mirror_fields_to_shape: false,
            timeouts: StoreTimeouts::default(),
            download_dir: PathBuf::from("."),
        }
    }
}

impl SyncConfig {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `RECT_API_BASE_URL`: default `http://localhost:8080/api`
    /// - `RECT_PERSIST_DEBOUNCE_MS`: default 3000
    /// - `RECT_PERSIST_GESTURE_SETTLES`: `true` (default) or `false`
    /// - `RECT_MIRROR_FIELDS_TO_SHAPE`: `false` (default) or `true`
    /// - `RECT_REQUEST_TIMEOUT_SECS`: default 30
    /// - `RECT_CONNECT_TIMEOUT_SECS`: default 10
    /// - `RECT_DOWNLOAD_DIR`: default `.`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for a boolean that is not recognized.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let api_base_url = std::env::var("RECT_API_BASE_URL")
            .unwrap_or(defaults.api_base_url)
            .trim_end_matches('/')
            .to_string();
        let persist_gesture_settles = env_bool("RECT_PERSIST_GESTURE_SETTLES", defaults.persist_gesture_settles)?;
        let mirror_fields_to_shape = env_bool("RECT_MIRROR_FIELDS_TO_SHAPE", defaults.mirror_fields_to_shape)?;
        let timeouts = StoreTimeouts {
            request_secs: env_parse("RECT_REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS),
            connect_secs: env_parse("RECT_CONNECT_TIMEOUT_SECS", DEFAULT_CONNECT_TIMEOUT_SECS),
        };
        let download_dir = std::env::var("RECT_DOWNLOAD_DIR").map_or(defaults.download_dir, PathBuf::from);

        Ok(Self {
            api_base_url,
            persist_debounce_ms: env_parse("RECT_PERSIST_DEBOUNCE_MS", DEFAULT_PERSIST_DEBOUNCE_MS),
            persist_gesture_settles,
            mirror_fields_to_shape,
            timeouts,
            download_dir,
        })
    }

    #[must_use]
    pub fn persist_debounce(&self) -> Duration {
        Duration::from_millis(self.persist_debounce_ms)
    }
}

fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    match std::env::var(key) {
        Ok(raw) => raw.parse::<T>().unwrap_or(default),
        Err(_) => default,
    }
}

fn env_bool(key: &str, default: bool) -> Result<bool, ConfigError> {
    match std::env::var(key) {
        Ok(raw) => parse_bool(key, Some(&raw), default),
        Err(_) => Ok(default),
    }
}

fn parse_bool(key: &str, raw: Option<&str>, default: bool) -> Result<bool, ConfigError> {
    let Some(raw) = raw else {
        return Ok(default);
    };
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        other => Err(ConfigError::Parse(format!("{key}: expected a boolean, got '{other}'"))),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

//! Runtime configuration
//!
//! Settings are read from `CLIPPER_*` environment variables with defaults
//! suitable for a local backend.

use crate::animation::{Rgb, WaveformConfig};
use crate::{ClipperError, Result};
use std::time::Duration;

pub const ENV_API_URL: &str = "CLIPPER_API_URL";
pub const ENV_POLL_INTERVAL_MS: &str = "CLIPPER_POLL_INTERVAL_MS";
pub const ENV_REQUEST_TIMEOUT_SECS: &str = "CLIPPER_REQUEST_TIMEOUT_SECS";
pub const ENV_CONNECT_TIMEOUT_SECS: &str = "CLIPPER_CONNECT_TIMEOUT_SECS";
pub const ENV_POLL_WARNING_AFTER: &str = "CLIPPER_POLL_WARNING_AFTER";
pub const ENV_WAVEFORM_COLOR: &str = "CLIPPER_WAVEFORM_COLOR";

/// Configuration for the dashboard and its backend worker
#[derive(Clone, Debug)]
pub struct ClipperConfig {
    /// Base URL the `/jobs` endpoints hang off
    pub api_base_url: String,

    /// Delay between status fetches for a non-terminal job
    pub poll_interval: Duration,

    /// Per-request timeout for status fetches
    pub request_timeout: Duration,

    /// TCP connect timeout
    pub connect_timeout: Duration,

    /// Consecutive poll failures before the dashboard shows a soft warning
    pub poll_warning_after: u32,

    /// Decorative waveform parameters
    pub waveform: WaveformConfig,
}

impl Default for ClipperConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8000/api".to_string(),
            poll_interval: Duration::from_millis(4000),
            request_timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            poll_warning_after: 3,
            waveform: WaveformConfig::default(),
        }
    }
}

impl ClipperConfig {
    /// Build a configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup(ENV_API_URL) {
            config.api_base_url = url.trim().to_string();
        }
        if let Some(ms) = parse_var::<u64>(&lookup, ENV_POLL_INTERVAL_MS)? {
            config.poll_interval = Duration::from_millis(ms);
        }
        if let Some(secs) = parse_var::<u64>(&lookup, ENV_REQUEST_TIMEOUT_SECS)? {
            config.request_timeout = Duration::from_secs(secs);
        }
        if let Some(secs) = parse_var::<u64>(&lookup, ENV_CONNECT_TIMEOUT_SECS)? {
            config.connect_timeout = Duration::from_secs(secs);
        }
        if let Some(n) = parse_var::<u32>(&lookup, ENV_POLL_WARNING_AFTER)? {
            config.poll_warning_after = n;
        }
        if let Some(raw) = lookup(ENV_WAVEFORM_COLOR) {
            config.waveform.color = Rgb::from_hex(&raw).ok_or_else(|| {
                ClipperError::Config(format!("{}={:?}: expected #rrggbb", ENV_WAVEFORM_COLOR, raw))
            })?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Set the API base URL
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    /// Set the poll cadence
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Uploads carry whole episodes, so they get a much longer budget
    pub fn upload_timeout(&self) -> Duration {
        self.request_timeout * 10
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        let url = self.api_base_url.trim();
        if url.is_empty() {
            return Err(ClipperError::Config("API base URL is empty".to_string()));
        }
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ClipperError::Config(format!(
                "API base URL must be http(s): {}",
                url
            )));
        }
        if self.poll_interval.is_zero() {
            return Err(ClipperError::Config(
                "Poll interval must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

fn parse_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| ClipperError::Config(format!("{}={:?}: {}", key, raw, e))),
    }
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
    fn test_default_config() {
        let config = ClipperConfig::default();
        assert_eq!(config.poll_interval, Duration::from_millis(4000));
        assert_eq!(config.poll_warning_after, 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_overrides() {
        let config = ClipperConfig::from_lookup(lookup_from(&[
            (ENV_API_URL, "https://clipper.example/api "),
            (ENV_POLL_INTERVAL_MS, "1500"),
            (ENV_POLL_WARNING_AFTER, "5"),
        ]))
        .unwrap();

        assert_eq!(config.api_base_url, "https://clipper.example/api");
        assert_eq!(config.poll_interval, Duration::from_millis(1500));
        assert_eq!(config.poll_warning_after, 5);
    }

    #[test]
    fn test_waveform_color_from_env() {
        let config =
            ClipperConfig::from_lookup(lookup_from(&[(ENV_WAVEFORM_COLOR, "#5CE1E6")])).unwrap();
        assert_eq!(config.waveform.color, Rgb(0x5c, 0xe1, 0xe6));
        assert_eq!(config.waveform.amplitude, 24.0);

        let err = ClipperConfig::from_lookup(lookup_from(&[(ENV_WAVEFORM_COLOR, "purple")]))
            .unwrap_err();
        assert!(matches!(err, ClipperError::Config(_)));
    }

    #[test]
    fn test_bad_number_is_config_error() {
        let err = ClipperConfig::from_lookup(lookup_from(&[(ENV_POLL_INTERVAL_MS, "soon")]))
            .unwrap_err();
        assert!(matches!(err, ClipperError::Config(_)));
    }

    #[test]
    fn test_rejects_relative_url_and_zero_interval() {
        let config = ClipperConfig::default().with_api_base_url("/api");
        assert!(config.validate().is_err());

        let config = ClipperConfig::default().with_poll_interval(Duration::ZERO);
        assert!(config.validate().is_err());
    }
}

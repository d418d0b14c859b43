use crate::constants::OPEN_NOTIFY_URL;
use std::env;
use std::str::FromStr;
use std::time::Duration;

pub const TIMEOUT_ENV: &str = "SPACEWATCH_TIMEOUT_SECS";
pub const RETRIES_ENV: &str = "SPACEWATCH_RETRIES";
pub const RETRY_DELAY_ENV: &str = "SPACEWATCH_RETRY_DELAY_MS";
pub const BASE_URL_ENV: &str = "SPACEWATCH_BASE_URL";

/// Settings for talking to the Open Notify API.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
    /// Extra attempts after the first one fails. Zero disables retrying.
    pub retries: u32,
    pub retry_delay: Duration,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            base_url: OPEN_NOTIFY_URL.to_string(),
            timeout: Duration::from_secs(10),
            retries: 2,
            retry_delay: Duration::from_millis(500),
            user_agent: concat!("spacewatch/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl ClientConfig {
    /// Defaults, overridden by any `SPACEWATCH_*` variables that are set.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`ClientConfig::from_env`] but reads values through `lookup`.
    /// Values that fail to parse are ignored.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        // A zero timeout fails every request immediately.
        match parse_var::<u64, _>(&lookup, TIMEOUT_ENV) {
            Some(0) => tracing::warn!(key = TIMEOUT_ENV, "ignoring zero timeout"),
            Some(secs) => config.timeout = Duration::from_secs(secs),
            None => {}
        }
        if let Some(retries) = parse_var::<u32, _>(&lookup, RETRIES_ENV) {
            config.retries = retries;
        }
        if let Some(ms) = parse_var::<u64, _>(&lookup, RETRY_DELAY_ENV) {
            config.retry_delay = Duration::from_millis(ms);
        }
        if let Some(url) = lookup(BASE_URL_ENV).filter(|url| !url.trim().is_empty()) {
            config.base_url = url.trim().trim_end_matches('/').to_string();
        }

        config
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_retries(mut self, retries: u32, delay: Duration) -> Self {
        self.retries = retries;
        self.retry_delay = delay;
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

fn parse_var<T, F>(lookup: &F, key: &str) -> Option<T>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(key)?;
    match raw.trim().parse::<T>() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!(%key, value = %raw, "ignoring unparsable setting");
            None
        }
    }
}

use super::tracker_errors::TrackerErrors;
use crate::config::client::ClientConfig;
use reqwest::blocking::Client;
use std::thread;

/// Fetches the body of a GET request. Implemented over HTTP for real use and
/// by canned responders in tests.
pub trait Transport {
    fn get(&self, url: &str) -> Result<String, TrackerErrors>;
}

pub struct HttpTransport {
    client: Client,
    config: ClientConfig,
}

impl HttpTransport {
    pub fn new(config: ClientConfig) -> Result<Self, TrackerErrors> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn get_once(&self, url: &str) -> Result<String, TrackerErrors> {
        let response = self.client.get(url).send()?;
        let status = response.status();

        if !status.is_success() {
            return Err(TrackerErrors::HttpStatus(status));
        }

        Ok(response.text()?)
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &str) -> Result<String, TrackerErrors> {
        tracing::debug!(%url, timeout = ?self.config.timeout, "GET");
        with_retries(&self.config, || self.get_once(url))
    }
}

/// Runs `attempt` until it succeeds, fails with a non-transient error, or the
/// configured retries are used up.
pub fn with_retries<T, F>(config: &ClientConfig, mut attempt: F) -> Result<T, TrackerErrors>
where
    F: FnMut() -> Result<T, TrackerErrors>,
{
    let mut tries = 0;
    loop {
        match attempt() {
            Ok(value) => return Ok(value),
            Err(e) if e.is_transient() && tries < config.retries => {
                tries += 1;
                tracing::debug!(error = %e, attempt = tries, "retrying request");
                if !config.retry_delay.is_zero() {
                    thread::sleep(config.retry_delay);
                }
            }
            Err(e) => return Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;
    use std::cell::Cell;
    use std::io;
    use std::time::Duration;

    fn no_delay(retries: u32) -> ClientConfig {
        ClientConfig::default().with_retries(retries, Duration::ZERO)
    }

    #[test]
    fn retries_transient_failures_until_success() {
        let calls = Cell::new(0);
        let result = with_retries(&no_delay(2), || {
            calls.set(calls.get() + 1);
            if calls.get() < 3 {
                Err(TrackerErrors::HttpStatus(StatusCode::BAD_GATEWAY))
            } else {
                Ok("ok")
            }
        });

        assert_eq!(result.unwrap(), "ok");
        assert_eq!(calls.get(), 3);
    }

    #[test]
    fn gives_up_after_configured_retries() {
        let calls = Cell::new(0);
        let result: Result<(), _> = with_retries(&no_delay(1), || {
            calls.set(calls.get() + 1);
            Err(io::Error::new(io::ErrorKind::TimedOut, "timed out").into())
        });

        assert!(matches!(result, Err(TrackerErrors::IoError(_))));
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn permanent_failures_are_not_retried() {
        let calls = Cell::new(0);
        let result: Result<(), _> = with_retries(&no_delay(5), || {
            calls.set(calls.get() + 1);
            Err(TrackerErrors::HttpStatus(StatusCode::NOT_FOUND))
        });

        assert!(matches!(
            result,
            Err(TrackerErrors::HttpStatus(StatusCode::NOT_FOUND))
        ));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn http_transport_builds_with_explicit_timeout() {
        let config = ClientConfig::default().with_timeout(Duration::from_secs(2));
        let transport = HttpTransport::new(config).unwrap();
        assert_eq!(transport.config().timeout, Duration::from_secs(2));
    }
}

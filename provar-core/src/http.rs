//! Blocking REST fetch helper.
//!
//! Wraps `ureq` with the status classification shared by the UniProt and
//! Ensembl clients: 400/404/502 mean "no data" and yield `None`,
//! 429/503/504 are rate-limit class and are retried with exponential
//! backoff up to a fixed budget, and any other failing status is logged
//! and treated as "no data" so the pipeline can continue.

use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use crate::errors::FetchError;
use crate::utils::{append_log, current_time};

/// Retry budget for rate-limit-class responses and transport errors.
pub const DEFAULT_MAX_RETRIES: u32 = 5;

/// Initial backoff; doubles after every failed attempt.
pub const DEFAULT_BACKOFF_MS: u64 = 500;

#[derive(Debug, Clone)]
pub struct RestFetcher {
    max_retries: u32,
    backoff: Duration,
    verbose: bool,
    error_log: Option<PathBuf>,
}

impl Default for RestFetcher {
    fn default() -> Self {
        RestFetcher {
            max_retries: DEFAULT_MAX_RETRIES,
            backoff: Duration::from_millis(DEFAULT_BACKOFF_MS),
            verbose: false,
            error_log: None,
        }
    }
}

impl RestFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub fn with_backoff(mut self, backoff: Duration) -> Self {
        self.backoff = backoff;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Enables appending unexpected-status failures to a log file.
    pub fn with_error_log(mut self, path: PathBuf) -> Self {
        self.error_log = Some(path);
        self
    }

    /// GETs a URL and returns the body, or `None` when the resource is
    /// reported as unavailable (400/404/502 or any other non-retryable
    /// failure status). Rate-limit responses are retried; spending the
    /// whole retry budget is an explicit error.
    pub fn get_text(&self, url: &str) -> Result<Option<String>, FetchError> {
        let mut delay = self.backoff;
        let mut attempts = 0u32;
        loop {
            match ureq::get(url).call() {
                Ok(response) => {
                    if self.verbose {
                        println!("{} {}", response.status(), url);
                    }
                    return Ok(Some(response.into_string()?));
                }
                Err(ureq::Error::Status(code, _)) => {
                    if self.verbose {
                        println!("{} {}", code, url);
                    }
                    match code {
                        400 | 404 | 502 => return Ok(None),
                        429 | 503 | 504 => {}
                        _ => {
                            self.log_failure(url, &format!("Error {}", code));
                            return Ok(None);
                        }
                    }
                }
                Err(ureq::Error::Transport(transport)) => {
                    if self.verbose {
                        println!("Transport error for {}: {}", url, transport);
                    }
                }
            }

            attempts += 1;
            if attempts > self.max_retries {
                self.log_failure(url, "Retry budget exhausted");
                return Err(FetchError::RetryBudgetExceeded {
                    url: url.to_string(),
                    attempts,
                });
            }
            thread::sleep(delay);
            delay = delay.saturating_mul(2);
        }
    }

    /// Like [`RestFetcher::get_text`] but splits the body into lines.
    pub fn get_lines(&self, url: &str) -> Result<Option<Vec<String>>, FetchError> {
        let body = self.get_text(url)?;
        Ok(body.map(|text| text.lines().map(str::to_string).collect()))
    }

    fn log_failure(&self, url: &str, reason: &str) {
        if let Some(path) = &self.error_log {
            let message = format!(
                "{}\t{}: Could not download the data from {}",
                current_time(),
                reason,
                url
            );
            let _ = append_log(path, &message);
        }
    }
}

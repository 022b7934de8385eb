//! Artifact transport
//!
//! The manager never talks to the network directly; it asks a [`Transport`]
//! for a byte stream. [`HttpTransport`] performs blocking GET requests with
//! `ureq`. Tests substitute their own transports.

use crate::error::{FetchError, FetchResult};
use std::io::Read;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Source of artifact bytes
pub trait Transport {
    /// Open a stream over the resource at `url`
    fn open(&self, url: &Url) -> FetchResult<Box<dyn Read>>;
}

/// Blocking HTTP(S) transport. No authentication, retry or resume.
pub struct HttpTransport {
    agent: ureq::Agent,
}

impl HttpTransport {
    /// Create a transport. `None` disables the timeout entirely.
    pub fn new(timeout: Option<Duration>) -> Self {
        let agent: ureq::Agent = ureq::Agent::config_builder()
            .timeout_global(timeout)
            .build()
            .into();
        debug!("HTTP transport timeout: {:?}", timeout);
        Self { agent }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new(None)
    }
}

impl Transport for HttpTransport {
    fn open(&self, url: &Url) -> FetchResult<Box<dyn Read>> {
        debug!("GET {}", url);

        // Non-2xx statuses surface as errors
        let response = self
            .agent
            .get(url.as_str())
            .call()
            .map_err(|e| FetchError::transfer(url.as_str(), e))?;

        Ok(Box::new(response.into_body().into_reader()))
    }
}

//! Existence checks for candidate URLs.
//!
//! A probe answers one question: does this URL serve a page right now? Every
//! failure mode (non-2xx status, DNS failure, refused connection, timeout,
//! malformed URL) collapses to `false`. Probes never return errors and never
//! retry.

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::config::ProbeConfig;
use crate::{Error, Result};

/// A bounded-timeout reachability check.
///
/// Implementations must be cheap to share across concurrent resolutions.
#[async_trait]
pub trait Probe: Send + Sync {
    /// Return `true` if `url` is reachable.
    async fn probe(&self, url: &str) -> bool;
}

/// Probe that reports every URL as unreachable without any I/O.
///
/// Pairs with unvalidated resolution, which never consults its probe, so no
/// HTTP client has to be built.
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineProbe;

#[async_trait]
impl Probe for OfflineProbe {
    async fn probe(&self, url: &str) -> bool {
        debug!(%url, "offline, skipping");
        false
    }
}

/// HTTP probe backed by a shared `reqwest` client.
///
/// Issues a `GET` per URL, follows a limited number of redirects, and treats
/// only a final 2xx status as reachable.
#[derive(Debug, Clone)]
pub struct HttpProbe {
    client: Client,
}

impl HttpProbe {
    /// Build a probe from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Network`] if the HTTP client cannot be constructed.
    pub fn new(config: &ProbeConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.as_str())
            .redirect(reqwest::redirect::Policy::limited(config.max_redirects))
            .build()
            .map_err(Error::Network)?;
        Ok(Self { client })
    }

    /// Build a probe with default settings (5 second timeout).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Network`] if the HTTP client cannot be constructed.
    pub fn with_defaults() -> Result<Self> {
        Self::new(&ProbeConfig::default())
    }
}

#[async_trait]
impl Probe for HttpProbe {
    async fn probe(&self, url: &str) -> bool {
        match self.client.get(url).send().await {
            Ok(response) => {
                let status = response.status();
                debug!(%url, %status, "probe response");
                status.is_success()
            },
            Err(e) => {
                debug!(%url, error = %e, timeout = e.is_timeout(), "probe failed");
                false
            },
        }
    }
}

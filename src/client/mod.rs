//! HTTP client for the postal-code directory service (ViaCEP).
//!
//! This module provides a synchronous HTTP client that can be used from async contexts
//! via `tokio::task::spawn_blocking`. It maps transport and status failures to
//! [`LookupError`] and decodes the JSON body into a [`LookupOutcome`].
//! There is no retry; every call issues exactly one request.

mod async_wrapper;
pub use async_wrapper::{AsyncPostalClient, AsyncPostalClientImpl};

use crate::config::Config;
use crate::domain::PostalCode;
use crate::error::{LookupError, LookupResult};
use crate::metrics::{HttpTimer, Metrics};
use crate::models::{LookupOutcome, PostalLookupResponse};
use std::sync::Arc;

/// HTTP client for the postal-code directory service.
///
/// This client uses `ureq` for synchronous HTTP requests and can be called
/// from async contexts using `tokio::task::spawn_blocking`.
#[derive(Clone)]
pub struct PostalLookupClient {
    /// Base URL, e.g. `https://viacep.com.br/ws`
    base_url: String,

    /// HTTP client agent
    agent: Arc<ureq::Agent>,

    /// Metrics collector
    metrics: Metrics,
}

impl PostalLookupClient {
    /// Create a new client from configuration, applying its timeout if any.
    pub fn new(config: &Config) -> Self {
        let mut builder = ureq::AgentBuilder::new();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }

        Self {
            base_url: config.postal_lookup_url.clone(),
            agent: Arc::new(builder.build()),
            metrics: Metrics::new(),
        }
    }

    /// Create a client with a custom base URL and no timeout (useful for testing).
    #[doc(hidden)]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            agent: Arc::new(ureq::AgentBuilder::new().build()),
            metrics: Metrics::new(),
        }
    }

    /// Get a reference to the metrics collector.
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Build the lookup URL for a postal code: `{base}/{cep}/json/`.
    fn build_url(&self, code: &PostalCode) -> String {
        let base = self.base_url.trim_end_matches('/');
        format!("{}/{}/json/", base, code.as_str())
    }

    /// Execute a GET request.
    fn get(&self, url: &str) -> Result<ureq::Response, LookupError> {
        let timer = HttpTimer::new(self.metrics.clone());
        tracing::debug!("GET {}", url);

        let result = self
            .agent
            .get(url)
            .set("Accept", "application/json")
            .call()
            .map_err(|e| self.map_error(e));

        match &result {
            Ok(response) => {
                tracing::debug!("GET {} - Success (status: {})", url, response.status());
                timer.complete();
            }
            Err(e) => {
                tracing::warn!("GET {} - Error: {}", url, e);
                timer.complete_with_error();
            }
        }

        result
    }

    /// Map a ureq error to a LookupError.
    fn map_error(&self, error: ureq::Error) -> LookupError {
        match error {
            ureq::Error::Status(status, response) => {
                let message = response
                    .into_string()
                    .unwrap_or_else(|_| "Unknown error".to_string());
                LookupError::ApiError { status, message }
            }
            ureq::Error::Transport(transport) => {
                if transport.kind() == ureq::ErrorKind::Io && is_timeout(&transport) {
                    LookupError::Timeout
                } else {
                    LookupError::HttpError(transport.to_string())
                }
            }
        }
    }

    /// Look up the address for a postal code.
    ///
    /// Returns `Ok(LookupOutcome::NotFound)` when the service answers that the
    /// code is unassigned, and an error for transport, status or decode failures.
    pub fn lookup(&self, code: &PostalCode) -> LookupResult<LookupOutcome> {
        let url = self.build_url(code);
        let response = self.get(&url)?;
        let body = response
            .into_string()
            .map_err(|e| LookupError::HttpError(e.to_string()))?;

        let parsed: PostalLookupResponse = serde_json::from_str(&body)?;
        let outcome = LookupOutcome::from(parsed);

        match &outcome {
            LookupOutcome::Found(_) => self.metrics.record_address_found(),
            LookupOutcome::NotFound => {
                tracing::debug!("Postal code {} is not assigned", code);
                self.metrics.record_not_found();
            }
        }

        Ok(outcome)
    }
}

/// True when the transport failure was an expired read/write deadline.
fn is_timeout(transport: &ureq::Transport) -> bool {
    std::error::Error::source(transport)
        .and_then(|source| source.downcast_ref::<std::io::Error>())
        .map(|io| {
            matches!(
                io.kind(),
                std::io::ErrorKind::TimedOut | std::io::ErrorKind::WouldBlock
            )
        })
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_url() {
        let code = PostalCode::new("01310-100").unwrap();

        let client = PostalLookupClient::with_base_url("https://viacep.com.br/ws/");
        assert_eq!(
            client.build_url(&code),
            "https://viacep.com.br/ws/01310100/json/"
        );

        let client = PostalLookupClient::new(&Config::default());
        assert_eq!(
            client.build_url(&code),
            "https://viacep.com.br/ws/01310100/json/"
        );
    }

    #[test]
    fn test_new_client_has_empty_metrics() {
        let client = PostalLookupClient::new(&Config::default());
        assert_eq!(client.metrics().http_requests_total(), 0);
    }
}

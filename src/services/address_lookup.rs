//! Address lookup adapter.
//!
//! Enforces the eight-digit precondition before any request is made and
//! fans batch lookups out concurrently. Each lookup is independent: one
//! failure never affects the others, and nothing is retried or cached.

use crate::client::AsyncPostalClient;
use crate::domain::PostalCode;
use crate::error::{LookupError, LookupResult};
use crate::models::LookupOutcome;
use async_trait::async_trait;
use futures::stream::{self, StreamExt};
use std::sync::Arc;

/// Address lookup operations.
#[async_trait]
pub trait AddressLookupService: Send + Sync {
    /// Resolve one postal code, given as raw (possibly masked) text.
    async fn lookup(&self, postal_code: &str) -> LookupResult<LookupOutcome>;

    /// Resolve several postal codes. Results are returned in input order.
    async fn lookup_many(&self, postal_codes: &[String]) -> Vec<LookupResult<LookupOutcome>>;
}

/// Default implementation of AddressLookupService.
pub struct AddressLookupServiceImpl {
    client: Arc<dyn AsyncPostalClient>,
    max_concurrency: usize,
}

impl AddressLookupServiceImpl {
    /// Create a new lookup service. `max_concurrency` is clamped to at least 1.
    pub fn new(client: Arc<dyn AsyncPostalClient>, max_concurrency: usize) -> Self {
        Self {
            client,
            max_concurrency: max_concurrency.max(1),
        }
    }
}

#[async_trait]
impl AddressLookupService for AddressLookupServiceImpl {
    async fn lookup(&self, postal_code: &str) -> LookupResult<LookupOutcome> {
        let code = PostalCode::new(postal_code).map_err(|e| {
            tracing::debug!("Rejected lookup before request: {}", e);
            LookupError::InvalidPostalCode(postal_code.to_string())
        })?;

        tracing::info!("Looking up postal code {}", code);
        self.client.lookup(&code).await
    }

    async fn lookup_many(&self, postal_codes: &[String]) -> Vec<LookupResult<LookupOutcome>> {
        stream::iter(postal_codes.to_vec())
            .map(|code| async move { self.lookup(&code).await })
            .buffered(self.max_concurrency)
            .collect()
            .await
    }
}

//! Async wrapper around the synchronous PostalLookupClient.
//!
//! This module provides an async interface to the synchronous client by using
//! `tokio::task::spawn_blocking` to run HTTP operations on a dedicated thread pool,
//! preventing blocking of the async runtime. Dropping the returned future
//! abandons the result; the request itself is not cancelled server-side.

use crate::client::PostalLookupClient;
use crate::domain::PostalCode;
use crate::error::{LookupError, LookupResult};
use crate::models::LookupOutcome;
use async_trait::async_trait;
use std::sync::Arc;

/// Async directory-service client.
///
/// Taking a [`PostalCode`] rather than raw text means a malformed code can
/// never reach an implementation of this trait.
#[async_trait]
pub trait AsyncPostalClient: Send + Sync {
    async fn lookup(&self, code: &PostalCode) -> LookupResult<LookupOutcome>;
}

/// Async wrapper around synchronous PostalLookupClient.
#[derive(Clone)]
pub struct AsyncPostalClientImpl {
    client: Arc<PostalLookupClient>,
}

impl AsyncPostalClientImpl {
    pub fn new(client: PostalLookupClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }

    /// Access the wrapped synchronous client.
    pub fn inner(&self) -> &PostalLookupClient {
        &self.client
    }
}

#[async_trait]
impl AsyncPostalClient for AsyncPostalClientImpl {
    async fn lookup(&self, code: &PostalCode) -> LookupResult<LookupOutcome> {
        let client = self.client.clone();
        let code = code.clone();

        tokio::task::spawn_blocking(move || client.lookup(&code))
            .await
            .map_err(|e| LookupError::HttpError(format!("Task join error: {}", e)))?
    }
}

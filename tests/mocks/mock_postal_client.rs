use async_trait::async_trait;
use br_fields_mcp_server::domain::PostalCode;
use br_fields_mcp_server::error::{LookupError, LookupResult};
use br_fields_mcp_server::models::{Address, LookupOutcome};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Mock directory-service client for testing.
///
/// Codes registered with `add_address` resolve to that address, codes
/// registered with `add_failure` return a timeout, and everything else is
/// reported as not found.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockPostalClient {
    addresses: Arc<Mutex<HashMap<String, Address>>>,
    failures: Arc<Mutex<Vec<String>>>,
    requested: Arc<Mutex<Vec<String>>>,
    delay: Option<Duration>,
    in_flight: Arc<AtomicUsize>,
    max_in_flight: Arc<AtomicUsize>,
}

#[allow(dead_code)]
impl MockPostalClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every lookup take `delay` before answering.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn add_address(&self, code: &str, address: Address) {
        let mut addresses = self.addresses.lock().unwrap();
        addresses.insert(code.to_string(), address);
    }

    pub fn add_failure(&self, code: &str) {
        let mut failures = self.failures.lock().unwrap();
        failures.push(code.to_string());
    }

    pub fn call_count(&self) -> usize {
        self.requested.lock().unwrap().len()
    }

    pub fn requested_codes(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }

    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl br_fields_mcp_server::client::AsyncPostalClient for MockPostalClient {
    async fn lookup(&self, code: &PostalCode) -> LookupResult<LookupOutcome> {
        self.requested.lock().unwrap().push(code.as_str().to_string());

        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        if self.failures.lock().unwrap().iter().any(|c| c == code.as_str()) {
            return Err(LookupError::Timeout);
        }

        let addresses = self.addresses.lock().unwrap();
        Ok(match addresses.get(code.as_str()) {
            Some(address) => LookupOutcome::Found(address.clone()),
            None => LookupOutcome::NotFound,
        })
    }
}

//! Data models for directory-service lookups.

pub mod address;

pub use address::{Address, LookupOutcome, PostalLookupResponse};

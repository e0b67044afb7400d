//! BR Fields MCP Server - formatting, validation and postal lookup for Brazilian form fields.
//!
//! The core is a small, pure engine that masks CPF, CNPJ, phone and CEP values
//! as they are typed and checks CPF/CNPJ check digits. Around it sit an address
//! lookup adapter for the ViaCEP directory service and an MCP server that
//! exposes everything to MCP clients.
//!
//! # Architecture
//!
//! - **domain**: digit extraction, mask formatters, check-digit validators, validation results
//! - **models**: address and lookup outcome types
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **client**: HTTP client for the directory service
//! - **services**: address lookup adapter and the field service boundary
//! - **metrics**: lookup counters
//! - **server**: MCP protocol server
//!
//! # Example
//!
//! ```
//! use br_fields_mcp_server::domain::{format_cpf, is_valid_cpf, extract};
//!
//! assert_eq!(format_cpf("1114447"), "111.444.7");
//! assert!(is_valid_cpf(extract("111.444.777-35").as_str()));
//! ```

pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod metrics;
pub mod models;
pub mod server;
pub mod services;

// Re-export commonly used types
pub use client::{AsyncPostalClient, AsyncPostalClientImpl, PostalLookupClient};
pub use config::Config;
pub use domain::{
    extract, format, is_valid_cnpj, is_valid_cpf, DigitString, MaskKind, PostalCode,
    ValidationResult,
};
pub use error::{ConfigError, LookupError, LookupResult};
pub use metrics::{HttpTimer, Metrics, MetricsSummary};
pub use models::{Address, LookupOutcome};
pub use server::BrFieldsMcpServer;
pub use services::{AddressLookupService, AddressLookupServiceImpl, FieldService, FormattedField};

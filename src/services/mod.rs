//! Application service layer.
//!
//! Services sit between the MCP handlers and the domain engine / lookup
//! client. They provide a clean boundary the integration layer calls into.

mod address_lookup;
mod field_service;

pub use address_lookup::{AddressLookupService, AddressLookupServiceImpl};
pub use field_service::{FieldService, FormattedField};

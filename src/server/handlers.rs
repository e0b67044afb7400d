//! MCP tool handlers for the BR Fields server.
//!
//! This module implements all the MCP tools using the rmcp SDK's tool_router pattern.
//! Handlers only translate between MCP parameters and the field service; all
//! formatting and validation rules live in `crate::domain`.

use crate::domain::{MaskKind, ValidationMode};
use crate::error::{LookupError, LookupResult};
use crate::models::LookupOutcome;
use crate::services::{AddressLookupService, FieldService};
use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::*;
use rmcp::{tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use schemars::JsonSchema;
use serde::Deserialize;
use std::borrow::Cow;
use std::sync::Arc;

/// The MCP server that exposes Brazilian field formatting, validation and CEP lookup.
#[derive(Clone)]
pub struct BrFieldsMcpServer {
    field_service: Arc<FieldService>,
    tool_router: ToolRouter<Self>,
}

// Implement ServerHandler using the tool_handler macro
#[tool_handler]
impl ServerHandler for BrFieldsMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities {
                tools: Some(Default::default()),
                ..Default::default()
            },
            server_info: Implementation {
                name: "br-fields-mcp-server".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some("Formats and validates Brazilian form fields (CPF, CNPJ, phone, CEP) and resolves addresses from postal codes.".into()),
        }
    }
}

// Helper structs for tool parameters
#[derive(Debug, Deserialize, JsonSchema)]
struct FormatFieldParams {
    /// Raw field text, masked or not
    value: String,
    kind: MaskKind,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct ValidateFieldParams {
    value: String,
    kind: MaskKind,
    #[serde(default)]
    mode: Option<ValidationMode>,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct LookupPostalCodeParams {
    postal_code: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct LookupPostalCodesParams {
    postal_codes: Vec<String>,
}

// Helper function to convert errors to MCP errors
fn to_mcp_error(e: impl std::fmt::Display) -> McpError {
    McpError {
        code: ErrorCode::INTERNAL_ERROR,
        message: Cow::from(e.to_string()),
        data: None,
    }
}

/// Malformed postal codes are the caller's fault; everything else is ours.
fn lookup_error_to_mcp(e: LookupError) -> McpError {
    if e.is_precondition_failure() {
        McpError {
            code: ErrorCode::INVALID_PARAMS,
            message: Cow::from(e.to_string()),
            data: None,
        }
    } else {
        to_mcp_error(e)
    }
}

/// JSON entry for one code of a batch lookup.
fn batch_entry(postal_code: &str, result: &LookupResult<LookupOutcome>) -> serde_json::Value {
    match result {
        Ok(LookupOutcome::Found(address)) => serde_json::json!({
            "postal_code": postal_code,
            "status": "found",
            "address": address,
        }),
        Ok(LookupOutcome::NotFound) => serde_json::json!({
            "postal_code": postal_code,
            "status": "not_found",
        }),
        Err(e) => {
            let status = if e.is_precondition_failure() {
                "invalid"
            } else {
                "error"
            };
            serde_json::json!({
                "postal_code": postal_code,
                "status": status,
                "error": e.to_string(),
            })
        }
    }
}

// Tool router implementation
#[tool_router]
impl BrFieldsMcpServer {
    /// Create a new server backed by the given address lookup service.
    pub fn new(address_lookup: Arc<dyn AddressLookupService>) -> Self {
        Self {
            field_service: Arc::new(FieldService::new(address_lookup)),
            tool_router: Self::tool_router(),
        }
    }

    /// Apply the display mask for a field kind.
    #[tool(
        description = "Format raw input for a Brazilian form field. kind is one of cpf, cnpj, phone (telefone), postal_code (cep). Non-digits are stripped, extra digits dropped, and separators added progressively as in live typing."
    )]
    async fn format_field(
        &self,
        params: Parameters<FormatFieldParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let field = self.field_service.format_field(&params.value, params.kind);

        let json_response = serde_json::to_string_pretty(&field).map_err(to_mcp_error)?;
        Ok(CallToolResult::success(vec![Content::text(json_response)]))
    }

    /// Validate a field value.
    #[tool(
        description = "Validate a Brazilian form field. mode 'strict' (default) requires a complete, correct value; mode 'blur' only flags complete CPF/CNPJ values with wrong check digits, as when a field loses focus."
    )]
    async fn validate_field(
        &self,
        params: Parameters<ValidateFieldParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let result = self.field_service.validate_field(
            &params.value,
            params.kind,
            params.mode.unwrap_or_default(),
        );

        let json_response = serde_json::to_string_pretty(&result).map_err(to_mcp_error)?;
        Ok(CallToolResult::success(vec![Content::text(json_response)]))
    }

    /// Resolve an address from a CEP.
    #[tool(
        description = "Look up the street, city and state for a Brazilian postal code (CEP). Returns status 'found' with the address fields the directory provides, or 'not_found' for an unassigned code."
    )]
    async fn lookup_postal_code(
        &self,
        params: Parameters<LookupPostalCodeParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        tracing::info!("MCP Handler: lookup_postal_code called");
        let outcome = self
            .field_service
            .lookup_address(&params.postal_code)
            .await
            .map_err(|e| {
                tracing::error!("Postal code lookup failed: {}", e);
                lookup_error_to_mcp(e)
            })?;

        let json_response = serde_json::to_string_pretty(&outcome).map_err(to_mcp_error)?;
        Ok(CallToolResult::success(vec![Content::text(json_response)]))
    }

    /// Resolve several CEPs concurrently.
    #[tool(
        description = "Look up several Brazilian postal codes at once. Each code gets its own result (found, not_found, invalid or error); one failure does not affect the others."
    )]
    async fn lookup_postal_codes(
        &self,
        params: Parameters<LookupPostalCodesParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        tracing::info!(
            "MCP Handler: lookup_postal_codes called with {} codes",
            params.postal_codes.len()
        );
        let results = self
            .field_service
            .lookup_addresses(&params.postal_codes)
            .await;

        let json_response = serde_json::to_string_pretty(&serde_json::json!({
            "results": params
                .postal_codes
                .iter()
                .zip(&results)
                .map(|(code, result)| batch_entry(code, result))
                .collect::<Vec<_>>(),
        }))
        .map_err(to_mcp_error)?;

        Ok(CallToolResult::success(vec![Content::text(json_response)]))
    }
}

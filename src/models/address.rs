//! Address model returned by the postal-code directory service.

use serde::{Deserialize, Deserializer, Serialize};

/// An address resolved from a CEP.
///
/// Every field is optional. Fields the directory service leaves out, or
/// sends as empty strings, stay `None`; nothing is filled in by default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    /// Street name (API field: logradouro)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,

    /// City (API field: localidade)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    /// Two-letter state code, e.g. "SP" (API field: uf)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region_code: Option<String>,
}

impl Address {
    /// True when the response carried none of the address fields.
    pub fn is_empty(&self) -> bool {
        self.street.is_none() && self.city.is_none() && self.region_code.is_none()
    }
}

/// Result of a lookup that reached the directory service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "address", rename_all = "snake_case")]
pub enum LookupOutcome {
    /// The CEP is assigned; the address holds whatever fields were returned.
    Found(Address),
    /// The CEP is well formed but maps to no address.
    NotFound,
}

impl LookupOutcome {
    pub fn address(&self) -> Option<&Address> {
        match self {
            LookupOutcome::Found(address) => Some(address),
            LookupOutcome::NotFound => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, LookupOutcome::Found(_))
    }
}

/// Raw JSON body of a directory-service response.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PostalLookupResponse {
    pub logradouro: Option<String>,
    pub localidade: Option<String>,
    pub uf: Option<String>,

    /// Set when the CEP is unassigned. Sent as `true` or as `"true"`.
    #[serde(deserialize_with = "deserialize_flag")]
    pub erro: bool,
}

/// Accept a boolean or its string spelling.
fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Text(String),
    }

    Ok(match Option::<Flag>::deserialize(deserializer)? {
        Some(Flag::Bool(value)) => value,
        Some(Flag::Text(text)) => text.eq_ignore_ascii_case("true"),
        None => false,
    })
}

/// Drop missing and blank values.
fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl From<PostalLookupResponse> for LookupOutcome {
    fn from(response: PostalLookupResponse) -> Self {
        if response.erro {
            return LookupOutcome::NotFound;
        }

        LookupOutcome::Found(Address {
            street: non_empty(response.logradouro),
            city: non_empty(response.localidade),
            region_code: non_empty(response.uf),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> LookupOutcome {
        serde_json::from_str::<PostalLookupResponse>(json)
            .unwrap()
            .into()
    }

    #[test]
    fn test_full_response() {
        let outcome = parse(
            r#"{
                "cep": "01310-100",
                "logradouro": "Avenida Paulista",
                "complemento": "de 612 a 1510 - lado par",
                "bairro": "Bela Vista",
                "localidade": "São Paulo",
                "uf": "SP",
                "ibge": "3550308"
            }"#,
        );

        assert_eq!(
            outcome,
            LookupOutcome::Found(Address {
                street: Some("Avenida Paulista".to_string()),
                city: Some("São Paulo".to_string()),
                region_code: Some("SP".to_string()),
            })
        );
    }

    #[test]
    fn test_missing_fields_stay_unset() {
        let outcome = parse(r#"{"cep": "69945-000", "logradouro": "", "localidade": "Acrelândia", "uf": "AC"}"#);
        let address = outcome.address().unwrap();
        assert_eq!(address.street, None);
        assert_eq!(address.city.as_deref(), Some("Acrelândia"));

        let outcome = parse("{}");
        assert!(outcome.is_found());
        assert!(outcome.address().unwrap().is_empty());
    }

    #[test]
    fn test_error_flag_variants() {
        assert_eq!(parse(r#"{"erro": true}"#), LookupOutcome::NotFound);
        assert_eq!(parse(r#"{"erro": "true"}"#), LookupOutcome::NotFound);
        assert!(parse(r#"{"erro": false, "uf": "RJ"}"#).is_found());
        assert!(parse(r#"{"erro": null, "uf": "RJ"}"#).is_found());
    }

    #[test]
    fn test_outcome_serialization() {
        let found = LookupOutcome::Found(Address {
            street: None,
            city: Some("Rio de Janeiro".to_string()),
            region_code: Some("RJ".to_string()),
        });
        assert_eq!(
            serde_json::to_value(&found).unwrap(),
            serde_json::json!({
                "status": "found",
                "address": { "city": "Rio de Janeiro", "region_code": "RJ" }
            })
        );
        assert_eq!(
            serde_json::to_value(LookupOutcome::NotFound).unwrap(),
            serde_json::json!({ "status": "not_found" })
        );
    }
}

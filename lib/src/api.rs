/// Contains API-related struct definitions shared between the server
/// routes and its clients.
use serde::{Deserialize, Serialize};

/// Inbound payload for the send-failed-billing endpoint.
///
/// Every field is optional: a malformed body is treated as an empty
/// payload and validation reports the missing fields instead.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SendRequest {
    pub to: Option<String>,
    pub customer_name: Option<String>,
    pub amount: Option<Amount>,
    pub retry_url: Option<String>,
    pub invoice_number: Option<String>,
    pub attach_path: Option<String>,
}

/// Billed amount as supplied by the caller. Numbers keep their JSON
/// representation, so `29` renders as `29` and not `29.0`.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(untagged)]
pub enum Amount {
    Text(String),
    Number(serde_json::Number),
}

impl Amount {
    /// An empty string or a zero amount counts as unset.
    pub fn is_truthy(&self) -> bool {
        match self {
            Amount::Text(s) => !s.is_empty(),
            Amount::Number(n) => n.as_f64().map(|v| v != 0.0).unwrap_or(true),
        }
    }
}

impl std::fmt::Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Amount::Text(s) => write!(f, "{}", s),
            Amount::Number(n) => write!(f, "{}", n),
        }
    }
}

/// JSON body returned on a successful send, embedding the provider's
/// own response payload.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SendResponse {
    pub success: bool,
    pub data: serde_json::Value,
}

/// JSON body returned on any failure.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amount_accepts_string_or_number() {
        let req: SendRequest =
            serde_json::from_str(r#"{"to": "a@b.com", "amount": 29}"#).unwrap();
        assert_eq!(req.amount.unwrap().to_string(), "29");

        let req: SendRequest =
            serde_json::from_str(r#"{"to": "a@b.com", "amount": "$29.99"}"#).unwrap();
        assert_eq!(req.amount.unwrap().to_string(), "$29.99");
    }

    #[test]
    fn amount_truthiness() {
        let truthy: Amount = serde_json::from_str("29.5").unwrap();
        assert!(truthy.is_truthy());

        let zero: Amount = serde_json::from_str("0").unwrap();
        assert!(!zero.is_truthy());

        let empty: Amount = serde_json::from_str(r#""""#).unwrap();
        assert!(!empty.is_truthy());
    }

    #[test]
    fn missing_fields_default_to_none() {
        let req: SendRequest = serde_json::from_str("{}").unwrap();
        assert!(req.to.is_none());
        assert!(req.customer_name.is_none());
        assert!(req.attach_path.is_none());
    }

    #[test]
    fn error_response_omits_empty_details() {
        let body = serde_json::to_value(ErrorResponse {
            error: "nope".to_string(),
            details: None,
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({ "error": "nope" }));
    }
}

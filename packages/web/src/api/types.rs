//! Wire types for the generate/verify endpoints

use serde::{Deserialize, Deserializer, Serialize};

/// Request body for `POST /authorized/generate`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub email: String,
    pub phone: String,
    pub ticket: String,
}

/// Request body for `POST /authorized/verify`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyRequest {
    pub authorized_code: String,
    pub email: String,
    pub phone: String,
    pub ticket: String,
}

/// Response body shared by both endpoints.
///
/// `success` is canonically a boolean; an earlier backend revision sent the
/// strings `"true"`/`"false"`, which are still accepted here so the legacy
/// encoding never leaks past this module.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub result_code: String,
    #[serde(deserialize_with = "bool_or_string")]
    pub success: bool,
    #[serde(default)]
    pub message: String,
}

impl AuthResponse {
    pub fn new(result_code: &str, success: bool, message: &str) -> Self {
        Self {
            result_code: result_code.to_string(),
            success,
            message: message.to_string(),
        }
    }
}

fn bool_or_string<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum BoolOrString {
        Bool(bool),
        String(String),
    }

    match BoolOrString::deserialize(deserializer)? {
        BoolOrString::Bool(value) => Ok(value),
        BoolOrString::String(value) => Ok(value == "true"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_with_boolean_success() {
        let response: AuthResponse = serde_json::from_str(
            r#"{"resultCode": "100", "success": true, "message": "code sent"}"#,
        )
        .unwrap();
        assert_eq!(response.result_code, "100");
        assert!(response.success);
        assert_eq!(response.message, "code sent");
    }

    #[test]
    fn test_response_with_legacy_string_success() {
        let response: AuthResponse =
            serde_json::from_str(r#"{"resultCode": "200", "success": "false", "message": ""}"#)
                .unwrap();
        assert_eq!(response.result_code, "200");
        assert!(!response.success);

        let response: AuthResponse =
            serde_json::from_str(r#"{"resultCode": "100", "success": "true", "message": "ok"}"#)
                .unwrap();
        assert!(response.success);
    }

    #[test]
    fn test_response_without_message() {
        let response: AuthResponse =
            serde_json::from_str(r#"{"resultCode": "300", "success": false}"#).unwrap();
        assert_eq!(response.message, "");
    }

    #[test]
    fn test_verify_request_field_names() {
        let request = VerifyRequest {
            authorized_code: "123456".to_string(),
            email: "a@b.com".to_string(),
            phone: "(+886)912345678".to_string(),
            ticket: "t-1".to_string(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("authorizedCode").is_some());
        assert!(json.get("ticket").is_some());
    }
}

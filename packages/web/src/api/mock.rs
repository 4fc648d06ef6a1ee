//! Compiled-in mock backend for demo and local development
//!
//! Generate is keyed by the local part of the email (`100@...` succeeds,
//! `200@...`/`300@...` fail with those result codes); verify echoes the
//! typed code when it is one of the known result codes.

use super::client::ApiError;
use super::types::{AuthResponse, GenerateRequest, VerifyRequest};

pub async fn mock_generate(request: &GenerateRequest) -> Result<AuthResponse, ApiError> {
    tracing::debug!(email = %request.email, phone = %request.phone, "mock generate");

    let response = match request.email.split('@').next() {
        Some("200") => AuthResponse::new("200", false, "Code could not be created (mock)."),
        Some("300") => AuthResponse::new("300", false, "Code could not be delivered (mock)."),
        _ => AuthResponse::new("100", true, ""),
    };
    Ok(response)
}

pub async fn mock_verify(request: &VerifyRequest) -> Result<AuthResponse, ApiError> {
    tracing::debug!(code = %request.authorized_code, "mock verify");

    let response = match request.authorized_code.as_str() {
        "100" => AuthResponse::new("100", true, ""),
        code @ ("300" | "400" | "500" | "600") => AuthResponse::new(code, false, ""),
        _ => AuthResponse::new("200", false, ""),
    };
    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generate_request(email: &str) -> GenerateRequest {
        GenerateRequest {
            email: email.to_string(),
            phone: "(+1)5551234".to_string(),
            ticket: "t-1".to_string(),
        }
    }

    fn verify_request(code: &str) -> VerifyRequest {
        VerifyRequest {
            authorized_code: code.to_string(),
            email: "100@example.com".to_string(),
            phone: "(+1)5551234".to_string(),
            ticket: "t-1".to_string(),
        }
    }

    #[tokio::test]
    async fn test_mock_generate_by_email() {
        let ok = mock_generate(&generate_request("100@example.com")).await.unwrap();
        assert_eq!(ok.result_code, "100");
        assert!(ok.success);

        let failed = mock_generate(&generate_request("200@example.com")).await.unwrap();
        assert_eq!(failed.result_code, "200");
        assert!(!failed.success);

        let undelivered = mock_generate(&generate_request("300@example.com")).await.unwrap();
        assert_eq!(undelivered.result_code, "300");

        let other = mock_generate(&generate_request("someone@example.com")).await.unwrap();
        assert_eq!(other.result_code, "100");
    }

    #[tokio::test]
    async fn test_mock_verify_by_code() {
        let ok = mock_verify(&verify_request("100")).await.unwrap();
        assert_eq!(ok.result_code, "100");
        assert!(ok.success);

        for code in ["300", "400", "500", "600"] {
            let response = mock_verify(&verify_request(code)).await.unwrap();
            assert_eq!(response.result_code, code);
            assert!(!response.success);
        }

        // Anything else counts as a wrong code
        let wrong = mock_verify(&verify_request("999999")).await.unwrap();
        assert_eq!(wrong.result_code, "200");
    }
}

//! HTTP DTOs for auth endpoints.

use serde::{Deserialize, Serialize};

/// Request to register or log in.
#[derive(Debug, Clone, Deserialize)]
pub struct CredentialsRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Response for successful auth operations.
#[derive(Debug, Clone, Serialize)]
pub struct AuthResponse {
    pub success: bool,
    pub message: &'static str,
    #[serde(rename = "userId")]
    pub user_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credentials_request_deserializes() {
        let json = r#"{"email": "A@Example.com", "password": "secret"}"#;
        let req: CredentialsRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.email, "A@Example.com");
        assert_eq!(req.password, "secret");
    }

    #[test]
    fn missing_fields_default_to_empty() {
        let req: CredentialsRequest = serde_json::from_str("{}").unwrap();
        assert!(req.email.is_empty());
        assert!(req.password.is_empty());
    }

    #[test]
    fn auth_response_uses_camel_case_user_id() {
        let response = AuthResponse {
            success: true,
            message: "Login successful",
            user_id: "a@b.c".to_string(),
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["userId"], "a@b.c");
    }
}

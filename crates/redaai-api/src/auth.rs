//! Auth API client: login, registration, password recovery.

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::client::ApiClient;
use crate::problem::{ApiProblem, ApiResult};

#[derive(Debug, Clone, Serialize)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SignUpCredentials {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Login response envelope as returned by the gateway.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthEnvelope {
    #[serde(rename = "statusCode")]
    pub status_code: Option<u16>,
    pub body: Option<AuthPayload>,
}

/// Inner login payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthPayload {
    #[serde(default)]
    pub message: Option<String>,
    pub token: String,
    pub user: AuthUser,
}

/// User fields of the login payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthUser {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub score: f64,
    #[serde(default)]
    pub last_access: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Registration response. The body shape is implementation-defined on
/// this backend, so it is kept as raw JSON.
#[derive(Debug, Clone, Deserialize)]
pub struct SignUpResponse {
    #[serde(rename = "statusCode")]
    pub status_code: Option<u16>,
    #[serde(default)]
    pub body: Option<serde_json::Value>,
}

/// Typed wrapper for the authentication feature area.
///
/// Pure request/response shaping; no business logic, no retries, no
/// side effects beyond the call itself.
#[async_trait]
pub trait AuthApi: Send + Sync {
    async fn login(&self, credentials: LoginCredentials) -> ApiResult<AuthPayload>;

    async fn sign_up(&self, credentials: SignUpCredentials) -> ApiResult<SignUpResponse>;

    async fn forgot_password(&self, email: &str) -> ApiResult<()>;
}

/// HTTP implementation over the shared [`ApiClient`].
pub struct HttpAuthApi {
    api: Arc<ApiClient>,
}

impl HttpAuthApi {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl AuthApi for HttpAuthApi {
    async fn login(&self, credentials: LoginCredentials) -> ApiResult<AuthPayload> {
        let envelope: AuthEnvelope = self.api.post("/dev/login", &credentials).await?;
        // A success status with no body is still unusable.
        envelope.body.ok_or(ApiProblem::BadData)
    }

    async fn sign_up(&self, credentials: SignUpCredentials) -> ApiResult<SignUpResponse> {
        self.api.post("/dev/register-user", &credentials).await
    }

    async fn forgot_password(&self, email: &str) -> ApiResult<()> {
        #[derive(Serialize)]
        struct Request<'a> {
            email: &'a str,
        }
        self.api
            .post_ignoring_body("/auth/forgot-password", &Request { email })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_decodes() {
        let json = r#"{
            "statusCode": 200,
            "body": {
                "message": "ok",
                "token": "fake-token",
                "user": {
                    "name": "Test User",
                    "email": "test@example.com",
                    "score": 0,
                    "last_access": "2024-03-04",
                    "created_at": "2024-03-04"
                }
            }
        }"#;

        let envelope: AuthEnvelope = serde_json::from_str(json).unwrap();
        let payload = envelope.body.unwrap();
        assert_eq!(payload.token, "fake-token");
        assert_eq!(payload.user.name, "Test User");
        assert_eq!(payload.user.score, 0.0);
    }

    #[test]
    fn test_envelope_without_body() {
        let envelope: AuthEnvelope = serde_json::from_str(r#"{"statusCode": 200}"#).unwrap();
        assert!(envelope.body.is_none());
    }

    #[test]
    fn test_user_optional_fields_default() {
        let json = r#"{"name": "Ana", "email": "ana@mail.com"}"#;
        let user: AuthUser = serde_json::from_str(json).unwrap();
        assert_eq!(user.score, 0.0);
        assert!(user.last_access.is_none());
        assert!(user.created_at.is_none());
    }

    #[test]
    fn test_credentials_serialize_shape() {
        let creds = LoginCredentials {
            email: "user@mail.com".to_string(),
            password: "secret".to_string(),
        };
        let json = serde_json::to_value(&creds).unwrap();
        assert_eq!(json["email"], "user@mail.com");
        assert_eq!(json["password"], "secret");
    }
}

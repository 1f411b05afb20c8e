use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

pub const LOGIN_FAILED_MESSAGE: &str = "로그인에 실패했습니다.";
pub const UNKNOWN_ERROR_MESSAGE: &str = "알 수 없는 오류가 발생했습니다.";
pub const INVALID_TOKEN_MESSAGE: &str = "인증 토큰이 올바르지 않습니다.";

const MAX_TOKEN_LEN: usize = 4096;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginFormData {
    pub email: String,
    pub password: String,
    #[serde(rename = "rememberMe", default)]
    pub remember_me: bool,
}

/// Profile echoed by the auth service. Informational only, so every field is
/// optional and `id` keeps whatever JSON type the server sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthUser {
    pub id: Value,
    pub email: String,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default, deserialize_with = "lenient_user")]
    pub user: Option<AuthUser>,
}

// An unreadable `user` must not fail an otherwise successful login.
fn lenient_user<'de, D>(deserializer: D) -> Result<Option<AuthUser>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw.and_then(|value| serde_json::from_value(value).ok()))
}

impl AuthResponse {
    /// Server-supplied message, ignoring blank strings.
    pub fn message(&self) -> Option<&str> {
        self.message
            .as_deref()
            .map(str::trim)
            .filter(|msg| !msg.is_empty())
    }
}

/// A bearer token that passed shape validation and may be persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthToken(String);

impl AuthToken {
    pub fn parse(raw: &str) -> Result<Self, ApiError> {
        let trimmed = raw.trim();
        if trimmed.is_empty()
            || trimmed.len() > MAX_TOKEN_LEN
            || trimmed
                .chars()
                .any(|c| c.is_whitespace() || c.is_control())
        {
            return Err(ApiError::invalid_token());
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
#[error("{error}")]
pub struct ApiError {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.error
    }
}

impl ApiError {
    fn with_code(msg: impl Into<String>, code: &str) -> Self {
        Self {
            error: msg.into(),
            code: code.to_string(),
            details: None,
        }
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "REQUEST_FAILED")
    }

    pub fn login_failed(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "LOGIN_FAILED")
    }

    pub fn invalid_token() -> Self {
        Self::with_code(INVALID_TOKEN_MESSAGE, "INVALID_TOKEN")
    }

    pub fn storage(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "STORAGE_ERROR")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn login_form_data_serializes_remember_me_in_camel_case() {
        let data = LoginFormData {
            email: "admin@logwatch.io".into(),
            password: "secret1".into(),
            remember_me: true,
        };
        let v = serde_json::to_value(&data).unwrap();
        assert_eq!(
            v,
            json!({
                "email": "admin@logwatch.io",
                "password": "secret1",
                "rememberMe": true
            })
        );
    }

    #[test]
    fn login_form_data_remember_me_defaults_false() {
        let raw = r#"{"email":"a@b.co","password":"secret1"}"#;
        let data: LoginFormData = serde_json::from_str(raw).unwrap();
        assert!(!data.remember_me);
    }

    #[test]
    fn auth_response_tolerates_missing_optional_fields() {
        let parsed: AuthResponse = serde_json::from_str(r#"{"success":true}"#).unwrap();
        assert!(parsed.success);
        assert!(parsed.token.is_none());
        assert!(parsed.user.is_none());

        let empty: AuthResponse = serde_json::from_str("{}").unwrap();
        assert!(!empty.success);
    }

    #[test]
    fn auth_response_parses_user() {
        let raw = json!({
            "success": true,
            "token": "abc",
            "user": { "id": "u1", "email": "ops@logwatch.io", "name": "Ops" }
        });
        let parsed: AuthResponse = serde_json::from_value(raw).unwrap();
        let user = parsed.user.unwrap();
        assert_eq!(user.id, "u1");
        assert_eq!(user.name, "Ops");
    }

    #[test]
    fn auth_response_tolerates_unexpected_user_shapes() {
        let raw = json!({ "success": true, "token": "abc", "user": { "id": 42 } });
        let parsed: AuthResponse = serde_json::from_value(raw).unwrap();
        assert_eq!(parsed.token.as_deref(), Some("abc"));
        let user = parsed.user.unwrap();
        assert_eq!(user.id, json!(42));
        assert!(user.name.is_empty());

        let raw = json!({ "success": true, "token": "abc", "user": "ops" });
        let parsed: AuthResponse = serde_json::from_value(raw).unwrap();
        assert!(parsed.success);
        assert!(parsed.user.is_none());
    }

    #[test]
    fn blank_message_is_treated_as_absent() {
        let response = AuthResponse {
            message: Some("   ".into()),
            ..Default::default()
        };
        assert_eq!(response.message(), None);

        let response = AuthResponse {
            message: Some("bad credentials".into()),
            ..Default::default()
        };
        assert_eq!(response.message(), Some("bad credentials"));
    }

    #[test]
    fn auth_token_accepts_trimmed_opaque_values() {
        let token = AuthToken::parse("  eyJhbGciOi.payload.sig \n").unwrap();
        assert_eq!(token.as_str(), "eyJhbGciOi.payload.sig");
    }

    #[test]
    fn auth_token_rejects_malformed_values() {
        let oversized = "x".repeat(MAX_TOKEN_LEN + 1);
        for raw in ["", "   ", "abc def", "abc\u{0}", oversized.as_str()] {
            let err = AuthToken::parse(raw).unwrap_err();
            assert_eq!(err.code, "INVALID_TOKEN", "accepted {:?}", raw);
        }
    }

    #[test]
    fn api_error_helpers_set_codes() {
        assert_eq!(ApiError::request_failed("x").code, "REQUEST_FAILED");
        assert_eq!(ApiError::login_failed("x").code, "LOGIN_FAILED");
        assert_eq!(ApiError::storage("x").code, "STORAGE_ERROR");
        assert_eq!(ApiError::invalid_token().error, INVALID_TOKEN_MESSAGE);
    }

    #[test]
    fn api_error_display_and_string_conversion_match_error_text() {
        let error = ApiError::login_failed("bad credentials");
        assert_eq!(format!("{}", error), "bad credentials");

        let raw: String = ApiError::request_failed("offline").into();
        assert_eq!(raw, "offline");
    }
}

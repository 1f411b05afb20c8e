use reqwest::header::{HeaderValue, CONTENT_TYPE};
use serde_json::Value;

use super::{
    client::ApiClient,
    types::{ApiError, AuthResponse, LoginFormData, LOGIN_FAILED_MESSAGE, UNKNOWN_ERROR_MESSAGE},
};

impl ApiClient {
    /// Posts the credentials to `{base}/auth/login`.
    ///
    /// A 2xx reply is returned as parsed, whatever its `success` flag says;
    /// interpreting it is up to the caller. Non-2xx replies become
    /// `LOGIN_FAILED` errors carrying the server's `message` when it sent one.
    pub async fn login(&self, request: &LoginFormData) -> Result<AuthResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let url = Self::endpoint(&base_url, "auth/login");
        log::debug!("POST {}", url);

        let response = self
            .http_client()
            .post(&url)
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .json(request)
            .send()
            .await
            .map_err(|e| {
                log::warn!("Login request failed: {}", e);
                ApiError::request_failed(UNKNOWN_ERROR_MESSAGE)
            })?;

        let status = response.status();
        if status.is_success() {
            response.json::<AuthResponse>().await.map_err(|e| {
                log::warn!("Failed to parse login response: {}", e);
                ApiError::request_failed(UNKNOWN_ERROR_MESSAGE)
            })
        } else {
            log::info!("Login rejected with status {}", status);
            let message = response
                .json::<Value>()
                .await
                .ok()
                .as_ref()
                .and_then(server_message)
                .unwrap_or_else(|| LOGIN_FAILED_MESSAGE.to_string());
            Err(ApiError::login_failed(message))
        }
    }
}

fn server_message(body: &Value) -> Option<String> {
    body.get("message")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|msg| !msg.is_empty())
        .map(str::to_string)
}

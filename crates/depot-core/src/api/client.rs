//! The request primitive and verb wrappers.

use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::ApiError;
use crate::auth::AuthSession;
use crate::config::Config;

/// Authenticated HTTP client.
///
/// Each call is an independent asynchronous operation: no queuing, no
/// deduplication, no retry, no timeout. Racing calls that both hit a 401
/// are fine; logout is idempotent.
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
    auth: AuthSession,
}

impl ApiClient {
    /// Creates a client against an explicit base URL.
    pub fn new(base_url: impl Into<String>, auth: AuthSession) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            http: reqwest::Client::new(),
            auth,
        }
    }

    /// Creates a client from the loaded config (honors `DEPOT_BASE_URL`).
    pub fn from_config(config: &Config, auth: AuthSession) -> Self {
        Self::new(config.resolved_base_url(), auth)
    }

    pub fn auth(&self) -> &AuthSession {
        &self.auth
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issues a request and decodes the uniform response envelope.
    ///
    /// Headers: `Content-Type: application/json` always; `x-access-token`
    /// and `user_id` when a full session exists. The HTTP status code is the
    /// authoritative success signal, not the envelope shape:
    ///
    /// - 401 clears the session before the error is returned, regardless of
    ///   the response body.
    /// - Other non-2xx statuses fail with the envelope's `error` or
    ///   `message` text, falling back to a generic message.
    /// - 2xx bodies unwrap the envelope's `data` field when present,
    ///   otherwise decode the whole body.
    pub async fn request<T, B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = format!("{}{}", self.base_url, path);

        let mut builder = self
            .http
            .request(method, &url)
            .header(reqwest::header::CONTENT_TYPE, "application/json");

        if let Some(session) = self.auth.session() {
            builder = builder
                .header("x-access-token", &session.token)
                .header("user_id", session.user.id.to_string());
        }

        if let Some(body) = body {
            builder = builder.json(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        if status == reqwest::StatusCode::UNAUTHORIZED {
            tracing::warn!(%url, "received 401, clearing session");
            self.auth.logout();
            return Err(ApiError::SessionExpired);
        }

        if !status.is_success() {
            let message = serde_json::from_slice::<Value>(&bytes)
                .ok()
                .and_then(|v| envelope_message(&v))
                .unwrap_or_else(|| "request failed".to_string());
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let value: Value = serde_json::from_slice(&bytes).map_err(|e| {
            tracing::warn!(%url, error = %e, "response body is not JSON");
            ApiError::Decode
        })?;

        serde_json::from_value(unwrap_envelope(value)).map_err(|e| {
            tracing::warn!(%url, error = %e, "response payload has an unexpected shape");
            ApiError::Decode
        })
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.request::<T, Value>(Method::GET, path, None).await
    }

    pub async fn post<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(Method::POST, path, Some(body)).await
    }

    pub async fn put<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(Method::PUT, path, Some(body)).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.request::<T, Value>(Method::DELETE, path, None).await
    }
}

/// Extracts the failure text from an error envelope.
///
/// `error` wins over `message`; empty strings count as absent.
fn envelope_message(value: &Value) -> Option<String> {
    for key in ["error", "message"] {
        if let Some(msg) = value.get(key).and_then(Value::as_str)
            && !msg.is_empty()
        {
            return Some(msg.to_string());
        }
    }
    None
}

/// Success payloads come either wrapped (`{"data": ...}`) or flat (login,
/// acknowledgements). One uniform rule: unwrap `data` when the object has it.
fn unwrap_envelope(value: Value) -> Value {
    match value {
        Value::Object(mut map) if map.contains_key("data") => {
            map.remove("data").unwrap_or(Value::Null)
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn unwraps_data_when_present() {
        let value = json!({"data": {"id": 1}});
        assert_eq!(unwrap_envelope(value), json!({"id": 1}));
    }

    #[test]
    fn flat_payloads_pass_through() {
        let value = json!({"token": "t1", "user_id": 7, "username": "alice"});
        assert_eq!(unwrap_envelope(value.clone()), value);
    }

    #[test]
    fn error_field_wins_over_message() {
        let value = json!({"error": "name required", "message": "other"});
        assert_eq!(envelope_message(&value), Some("name required".to_string()));
    }

    #[test]
    fn empty_error_falls_through_to_message() {
        let value = json!({"error": "", "message": "fallback text"});
        assert_eq!(envelope_message(&value), Some("fallback text".to_string()));
    }

    #[test]
    fn no_text_at_all_is_none() {
        assert_eq!(envelope_message(&json!({"data": []})), None);
        assert_eq!(envelope_message(&json!(42)), None);
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let dir = tempfile::tempdir().unwrap();
        let auth = AuthSession::new(crate::storage::Store::at(dir.path().join("s.json")));
        let client = ApiClient::new("http://localhost:5000/", auth);
        assert_eq!(client.base_url(), "http://localhost:5000");
    }
}

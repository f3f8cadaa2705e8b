use serde_json::Value;

use super::error::ApiError;

/// Core HTTP client function for calls against the entity backend.
/// Only GET, POST and PUT are used; any other method falls back to GET.
/// Handles authentication, request building and status mapping.
///
/// An empty success body is returned as `Value::Null`.
pub async fn api_call(
    client: &reqwest::Client,
    api_base_url: &str,
    api_token: &str,
    method: &str,
    endpoint: &str,
    body: Option<&Value>,
) -> Result<Value, ApiError> {
    let url = format!("{}{}", api_base_url, endpoint);
    tracing::debug!(method, %url, has_body = body.is_some(), "API request");

    let mut req = match method {
        "GET" => client.get(&url),
        "POST" => client.post(&url),
        "PUT" => client.put(&url),
        _ => client.get(&url),
    };

    if !api_token.is_empty() {
        req = req.bearer_auth(api_token);
    }

    if let Some(b) = body {
        req = req.json(b);
    }

    let response = req
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !status.is_success() {
        tracing::debug!(status = status.as_u16(), body = %text, "API error response");
        return Err(ApiError::Status {
            status: status.as_u16(),
            body: text,
        });
    }

    if text.trim().is_empty() {
        return Ok(Value::Null);
    }

    serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
}

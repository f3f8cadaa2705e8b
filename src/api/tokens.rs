use super::client::api_call;
use super::error::ApiError;
use crate::models::Token;

const TOKENS_ENDPOINT: &str = "/api/tokens";

fn decode_token(payload: serde_json::Value) -> Result<Token, ApiError> {
    serde_json::from_value(payload).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Fetch a single token by id.
pub async fn get_token(
    client: &reqwest::Client,
    api_base_url: &str,
    api_token: &str,
    id: i64,
) -> Result<Token, ApiError> {
    let endpoint = format!("{}/{}", TOKENS_ENDPOINT, id);
    match api_call(client, api_base_url, api_token, "GET", &endpoint, None).await {
        Ok(payload) => decode_token(payload),
        Err(ApiError::Status { status: 404, .. }) => Err(ApiError::NotFound(id)),
        Err(e) => Err(e),
    }
}

/// Persist a new token and return the stored record.
pub async fn create_token(
    client: &reqwest::Client,
    api_base_url: &str,
    api_token: &str,
    token: &Token,
) -> Result<Token, ApiError> {
    let body = serde_json::to_value(token).map_err(|e| ApiError::Decode(e.to_string()))?;
    let payload = api_call(client, api_base_url, api_token, "POST", TOKENS_ENDPOINT, Some(&body)).await?;
    decode_token(payload)
}

/// Replace an existing token. The id travels in the body.
pub async fn update_token(
    client: &reqwest::Client,
    api_base_url: &str,
    api_token: &str,
    token: &Token,
) -> Result<Token, ApiError> {
    let id = token.id.ok_or(ApiError::MissingId)?;
    let body = serde_json::to_value(token).map_err(|e| ApiError::Decode(e.to_string()))?;
    match api_call(client, api_base_url, api_token, "PUT", TOKENS_ENDPOINT, Some(&body)).await {
        Ok(payload) => decode_token(payload),
        Err(ApiError::Status { status: 404, .. }) => Err(ApiError::NotFound(id)),
        Err(e) => Err(e),
    }
}

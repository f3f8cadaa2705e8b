use crate::models::Product;
use super::client::api_call;
use super::error::ApiError;

/// Load the products a token can reference.
/// Entries without a numeric id are skipped.
pub async fn load_products(
    client: &reqwest::Client,
    api_base_url: &str,
    api_token: &str,
) -> Result<Vec<Product>, ApiError> {
    let payload = api_call(client, api_base_url, api_token, "GET", "/api/products", None).await?;
    let arr = payload
        .as_array()
        .ok_or_else(|| ApiError::Decode("expected a JSON array of products".into()))?;

    let mut out = Vec::with_capacity(arr.len());
    for item in arr {
        match serde_json::from_value::<Product>(item.clone()) {
            Ok(product) => out.push(product),
            Err(e) => tracing::warn!(%e, ?item, "Skipping malformed product"),
        }
    }
    Ok(out)
}

use async_trait::async_trait;

use super::{ProductBackend, TokenBackend};
use crate::api::{create_token, get_token, load_products, update_token, ApiError};
use crate::models::{Product, Token};

/// Backend that forwards every call to the configured REST API.
#[derive(Clone)]
pub struct RestBackend {
    pub client: reqwest::Client,
    pub api_base_url: String,
    pub api_token: String,
}

impl RestBackend {
    pub fn new(client: reqwest::Client, api_base_url: String, api_token: String) -> Self {
        Self {
            client,
            api_base_url,
            api_token,
        }
    }
}

#[async_trait]
impl TokenBackend for RestBackend {
    async fn fetch_token(&self, id: i64) -> Result<Token, ApiError> {
        get_token(&self.client, &self.api_base_url, &self.api_token, id).await
    }

    async fn create_token(&self, token: &Token) -> Result<Token, ApiError> {
        create_token(&self.client, &self.api_base_url, &self.api_token, token).await
    }

    async fn update_token(&self, token: &Token) -> Result<Token, ApiError> {
        update_token(&self.client, &self.api_base_url, &self.api_token, token).await
    }
}

#[async_trait]
impl ProductBackend for RestBackend {
    async fn fetch_products(&self) -> Result<Vec<Product>, ApiError> {
        load_products(&self.client, &self.api_base_url, &self.api_token).await
    }
}

//! Persistence seams behind the token and product stores.
//!
//! The stores never talk HTTP themselves; they go through these traits so the
//! same form lifecycle runs against the REST backend or an in-memory one.

use async_trait::async_trait;

use crate::api::ApiError;
use crate::models::{Product, Token};

pub mod memory;
pub mod rest;

pub use memory::{BackendCall, MemoryBackend};
pub use rest::RestBackend;

#[async_trait]
pub trait TokenBackend: Send + Sync {
    async fn fetch_token(&self, id: i64) -> Result<Token, ApiError>;
    async fn create_token(&self, token: &Token) -> Result<Token, ApiError>;
    async fn update_token(&self, token: &Token) -> Result<Token, ApiError>;
}

#[async_trait]
pub trait ProductBackend: Send + Sync {
    async fn fetch_products(&self) -> Result<Vec<Product>, ApiError>;
}

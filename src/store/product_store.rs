use std::sync::{Arc, Mutex};

use crate::backend::ProductBackend;
use crate::models::Product;

/// Reference list of products for the token form's dropdown.
#[derive(Clone)]
pub struct ProductStore {
    backend: Arc<dyn ProductBackend>,
    products: Arc<Mutex<Vec<Product>>>,
}

impl ProductStore {
    pub fn new(backend: Arc<dyn ProductBackend>) -> Self {
        Self {
            backend,
            products: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn products(&self) -> Vec<Product> {
        self.products.lock().unwrap().clone()
    }

    /// Refresh the list. On failure the list is emptied so a stale
    /// selection cannot be submitted.
    pub async fn get_products(&self) {
        let fetched = match self.backend.fetch_products().await {
            Ok(list) => list,
            Err(e) => {
                tracing::warn!(%e, "Failed to load products");
                Vec::new()
            }
        };
        *self.products.lock().unwrap() = fetched;
    }
}

use std::sync::Arc;

use crate::backend::{ProductBackend, TokenBackend};
use crate::form::{FormMode, TokenEditForm};
use crate::store::{ProductStore, TokenStore};

#[derive(Clone)]
pub struct AppState {
    pub token_backend: Arc<dyn TokenBackend>,
    pub product_backend: Arc<dyn ProductBackend>,
    /// Where a successful save navigates to.
    pub token_list_path: String,
    pub custom_css: Option<String>,
}

impl AppState {
    pub fn new(
        token_backend: Arc<dyn TokenBackend>,
        product_backend: Arc<dyn ProductBackend>,
        token_list_path: String,
    ) -> Self {
        Self {
            token_backend,
            product_backend,
            token_list_path,
            custom_css: None,
        }
    }

    /// A fresh form with its own stores, one per request.
    pub fn token_form(&self, mode: FormMode) -> TokenEditForm {
        TokenEditForm::new(
            mode,
            TokenStore::new(self.token_backend.clone()),
            ProductStore::new(self.product_backend.clone()),
            self.token_list_path.clone(),
        )
    }
}

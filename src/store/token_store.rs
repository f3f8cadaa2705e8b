use std::sync::{Arc, Mutex};

use crate::backend::TokenBackend;
use crate::models::Token;

/// Observable state of the token store.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TokenState {
    pub entity: Token,
    pub loading: bool,
    pub updating: bool,
    pub update_success: bool,
    pub error_message: Option<String>,
}

/// Holds the token being edited and the flags the form reacts to.
///
/// Backend failures never escape: they are logged and kept in
/// `error_message` for the form to display.
#[derive(Clone)]
pub struct TokenStore {
    backend: Arc<dyn TokenBackend>,
    state: Arc<Mutex<TokenState>>,
}

impl TokenStore {
    pub fn new(backend: Arc<dyn TokenBackend>) -> Self {
        Self {
            backend,
            state: Arc::new(Mutex::new(TokenState::default())),
        }
    }

    pub fn snapshot(&self) -> TokenState {
        self.state.lock().unwrap().clone()
    }

    /// Drop any stale draft and flags.
    pub fn reset(&self) {
        *self.state.lock().unwrap() = TokenState::default();
    }

    pub async fn get_entity(&self, id: i64) {
        {
            let mut state = self.state.lock().unwrap();
            state.loading = true;
            state.update_success = false;
            state.error_message = None;
        }
        let result = self.backend.fetch_token(id).await;
        let mut state = self.state.lock().unwrap();
        state.loading = false;
        match result {
            Ok(token) => state.entity = token,
            Err(e) => {
                tracing::warn!(%e, id, "Failed to load token");
                state.error_message = Some(e.to_string());
            }
        }
    }

    pub async fn create_entity(&self, token: Token) {
        self.begin_update();
        let result = self.backend.create_token(&token).await;
        self.finish_update(result.map_err(|e| {
            tracing::warn!(%e, "Failed to create token");
            e.to_string()
        }));
    }

    pub async fn update_entity(&self, token: Token) {
        self.begin_update();
        let result = self.backend.update_token(&token).await;
        self.finish_update(result.map_err(|e| {
            tracing::warn!(%e, id = ?token.id, "Failed to update token");
            e.to_string()
        }));
    }

    fn begin_update(&self) {
        let mut state = self.state.lock().unwrap();
        state.updating = true;
        state.update_success = false;
        state.error_message = None;
    }

    fn finish_update(&self, result: Result<Token, String>) {
        let mut state = self.state.lock().unwrap();
        state.updating = false;
        match result {
            Ok(saved) => {
                tracing::info!(id = ?saved.id, "Token saved");
                state.entity = saved;
                state.update_success = true;
            }
            Err(message) => state.error_message = Some(message),
        }
    }
}

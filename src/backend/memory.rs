use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use super::{ProductBackend, TokenBackend};
use crate::api::ApiError;
use crate::models::{Product, Token};

/// A call received by [`MemoryBackend`], kept in arrival order.
#[derive(Clone, Debug, PartialEq)]
pub enum BackendCall {
    FetchToken(i64),
    CreateToken(Token),
    UpdateToken(Token),
    FetchProducts,
}

/// In-process backend used by `serve --in-memory` and the tests.
pub struct MemoryBackend {
    tokens: Mutex<BTreeMap<i64, Token>>,
    products: Mutex<Vec<Product>>,
    next_id: Mutex<i64>,
    calls: Mutex<Vec<BackendCall>>,
    unavailable: AtomicBool,
}

impl MemoryBackend {
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            tokens: Mutex::new(BTreeMap::new()),
            products: Mutex::new(products),
            next_id: Mutex::new(1),
            calls: Mutex::new(Vec::new()),
            unavailable: AtomicBool::new(false),
        }
    }

    /// Backend preloaded with a handful of products for local use.
    pub fn with_sample_products() -> Self {
        Self::new(vec![
            Product { id: 1, code: "CLASSIC".into() },
            Product { id: 2, code: "GOLD".into() },
            Product { id: 3, code: "PLATINUM".into() },
        ])
    }

    /// Store a token as-is, bypassing the call log. Returns its id.
    pub fn insert_token(&self, mut token: Token) -> i64 {
        let mut next_id = self.next_id.lock().unwrap();
        let id = match token.id {
            Some(id) => id,
            None => *next_id,
        };
        if id >= *next_id {
            *next_id = id + 1;
        }
        token.id = Some(id);
        self.tokens.lock().unwrap().insert(id, token);
        id
    }

    pub fn token(&self, id: i64) -> Option<Token> {
        self.tokens.lock().unwrap().get(&id).cloned()
    }

    pub fn calls(&self) -> Vec<BackendCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Make every subsequent call fail with a 503 until switched back.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::Relaxed);
    }

    fn record(&self, call: BackendCall) -> Result<(), ApiError> {
        self.calls.lock().unwrap().push(call);
        if self.unavailable.load(Ordering::Relaxed) {
            return Err(ApiError::Status {
                status: 503,
                body: "backend unavailable".into(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl TokenBackend for MemoryBackend {
    async fn fetch_token(&self, id: i64) -> Result<Token, ApiError> {
        self.record(BackendCall::FetchToken(id))?;
        self.token(id).ok_or(ApiError::NotFound(id))
    }

    async fn create_token(&self, token: &Token) -> Result<Token, ApiError> {
        self.record(BackendCall::CreateToken(token.clone()))?;
        let mut stored = token.clone();
        stored.id = None;
        let id = self.insert_token(stored);
        self.token(id).ok_or(ApiError::NotFound(id))
    }

    async fn update_token(&self, token: &Token) -> Result<Token, ApiError> {
        self.record(BackendCall::UpdateToken(token.clone()))?;
        let id = token.id.ok_or(ApiError::MissingId)?;
        let mut tokens = self.tokens.lock().unwrap();
        match tokens.get_mut(&id) {
            Some(existing) => {
                *existing = token.clone();
                Ok(existing.clone())
            }
            None => Err(ApiError::NotFound(id)),
        }
    }
}

#[async_trait]
impl ProductBackend for MemoryBackend {
    async fn fetch_products(&self) -> Result<Vec<Product>, ApiError> {
        self.record(BackendCall::FetchProducts)?;
        Ok(self.products.lock().unwrap().clone())
    }
}

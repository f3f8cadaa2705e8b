//! Create-or-update lifecycle of the token edit form.
//!
//! A form is bound to one [`FormMode`] for its whole life. Mounting clears or
//! loads the draft and loads the product list; saving merges the posted values
//! over the stored entity; a successful save yields the list path exactly once.

pub mod validation;
pub mod view;

pub use validation::validate;
pub use view::{default_product_id, ProductOption, TokenFormView};

use crate::models::{FieldError, ProductRef, Token, TokenFormValues};
use crate::store::{ProductStore, TokenStore};
use crate::utils::{non_blank, parse_id};

/// Whether the form creates a new token or edits an existing one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(i64),
}

impl FormMode {
    /// A route without an identifier opens the form in create mode.
    pub fn from_route(id: Option<i64>) -> Self {
        match id {
            Some(id) => FormMode::Edit(id),
            None => FormMode::Create,
        }
    }

    pub fn is_new(&self) -> bool {
        matches!(self, FormMode::Create)
    }

    pub fn id(&self) -> Option<i64> {
        match self {
            FormMode::Create => None,
            FormMode::Edit(id) => Some(*id),
        }
    }
}

/// Fires once on the first false -> true edge of `update_success`.
#[derive(Debug, Default)]
pub struct SuccessLatch {
    last_seen: bool,
    fired: bool,
}

impl SuccessLatch {
    pub fn observe(&mut self, update_success: bool) -> bool {
        let rising = update_success && !self.last_seen;
        self.last_seen = update_success;
        if rising && !self.fired {
            self.fired = true;
            return true;
        }
        false
    }
}

pub struct TokenEditForm {
    mode: FormMode,
    tokens: TokenStore,
    products: ProductStore,
    list_path: String,
    navigation: SuccessLatch,
}

impl TokenEditForm {
    pub fn new(mode: FormMode, tokens: TokenStore, products: ProductStore, list_path: impl Into<String>) -> Self {
        Self {
            mode,
            tokens,
            products,
            list_path: list_path.into(),
            navigation: SuccessLatch::default(),
        }
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn tokens(&self) -> &TokenStore {
        &self.tokens
    }

    /// Reset or load the draft, and load the product list. The two requests
    /// run concurrently.
    pub async fn mount(&self) {
        let entity = async {
            match self.mode {
                FormMode::Create => self.tokens.reset(),
                FormMode::Edit(id) => self.tokens.get_entity(id).await,
            }
        };
        tokio::join!(entity, self.products.get_products());
    }

    /// The stored entity with the posted values laid over it.
    pub fn merge(&self, values: &TokenFormValues) -> Token {
        merge_values(&self.tokens.snapshot().entity, values, self.mode)
    }

    /// Submit the form. Nothing is sent while `errors` is non-empty.
    /// Returns whether a create or update was issued.
    pub async fn save_entity(&self, values: &TokenFormValues, errors: &[FieldError]) -> bool {
        if !errors.is_empty() {
            tracing::debug!(count = errors.len(), "Submission blocked by validation errors");
            return false;
        }
        let entity = self.merge(values);
        if self.mode.is_new() {
            self.tokens.create_entity(entity).await;
        } else {
            self.tokens.update_entity(entity).await;
        }
        true
    }

    /// Check the store and return the list path if the form should navigate
    /// away now. Returns `Some` at most once per form.
    pub fn poll_navigation(&mut self) -> Option<&str> {
        let update_success = self.tokens.snapshot().update_success;
        if self.navigation.observe(update_success) {
            Some(self.list_path.as_str())
        } else {
            None
        }
    }

    /// View of the form bound to `draft`, or to the stored entity when no
    /// draft is given (an empty one in create mode).
    pub fn view(&self, draft: Option<Token>, errors: Vec<FieldError>) -> TokenFormView {
        let state = self.tokens.snapshot();
        let draft = draft.unwrap_or_else(|| {
            if self.mode.is_new() {
                Token::default()
            } else {
                state.entity.clone()
            }
        });
        let products = self.products.products();
        let mut view = TokenFormView::build(
            self.mode.is_new(),
            &draft,
            &products,
            state.loading,
            state.updating,
            &self.list_path,
        );
        view.errors = errors;
        view.error_message = state.error_message;
        view
    }
}

fn overlay(current: &mut Option<String>, posted: &Option<String>) {
    if let Some(raw) = posted {
        *current = non_blank(Some(raw));
    }
}

/// Lay posted values over `entity`. Fields missing from the post keep the
/// entity's value; blank optional fields become absent. A new token never
/// carries an id, an edited one keeps the id it was loaded with.
pub fn merge_values(entity: &Token, values: &TokenFormValues, mode: FormMode) -> Token {
    let mut merged = entity.clone();
    if let Some(raw) = &values.client_account_name {
        merged.client_account_name = raw.trim().to_string();
    }
    overlay(&mut merged.client_id, &values.client_id);
    overlay(&mut merged.iin, &values.iin);
    overlay(&mut merged.item_id, &values.item_id);
    overlay(&mut merged.name, &values.name);
    overlay(&mut merged.svc_start, &values.svc_start);
    overlay(&mut merged.token_type, &values.token_type);
    if let Some(raw) = &values.product_id {
        merged.product = parse_id(raw).map(|id| ProductRef { id });
    }
    merged.id = if mode.is_new() { None } else { entity.id.or(mode.id()) };
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latch_fires_once_on_rising_edge() {
        let mut latch = SuccessLatch::default();
        assert!(!latch.observe(false));
        assert!(latch.observe(true));
        assert!(!latch.observe(true));
        assert!(!latch.observe(false));
        assert!(!latch.observe(true));
    }

    #[test]
    fn test_from_route() {
        assert_eq!(FormMode::from_route(None), FormMode::Create);
        assert_eq!(FormMode::from_route(Some(3)), FormMode::Edit(3));
        assert!(FormMode::Create.is_new());
        assert_eq!(FormMode::Edit(3).id(), Some(3));
    }

    #[test]
    fn test_merge_overrides_and_keeps_unposted_fields() {
        let entity = Token {
            id: Some(5),
            client_account_name: "old".into(),
            iin: Some("400000".into()),
            name: Some("Primary".into()),
            product: Some(ProductRef { id: 1 }),
            ..Default::default()
        };
        let values = TokenFormValues {
            client_account_name: Some(" new ".into()),
            name: Some("".into()),
            product_id: Some("2".into()),
            ..Default::default()
        };
        let merged = merge_values(&entity, &values, FormMode::Edit(5));
        assert_eq!(merged.id, Some(5));
        assert_eq!(merged.client_account_name, "new");
        assert_eq!(merged.iin.as_deref(), Some("400000"));
        assert_eq!(merged.name, None);
        assert_eq!(merged.product_id(), Some(2));
    }

    #[test]
    fn test_merge_in_create_mode_drops_posted_id() {
        let values = TokenFormValues {
            id: Some("77".into()),
            client_account_name: Some("acme".into()),
            product_id: Some("1".into()),
            ..Default::default()
        };
        let merged = merge_values(&Token::default(), &values, FormMode::Create);
        assert_eq!(merged.id, None);
    }

    #[test]
    fn test_merge_in_edit_mode_falls_back_to_route_id() {
        let merged = merge_values(&Token::default(), &TokenFormValues::default(), FormMode::Edit(8));
        assert_eq!(merged.id, Some(8));
    }
}

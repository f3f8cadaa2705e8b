use crate::models::{FieldError, Product, Token};

/// One entry of the product dropdown.
#[derive(Clone, Debug, PartialEq)]
pub struct ProductOption {
    pub id: i64,
    pub code: String,
    pub selected: bool,
}

/// Everything the token form template needs, flattened to display text.
#[derive(Clone, Debug)]
pub struct TokenFormView {
    pub is_new: bool,
    pub loading: bool,
    pub updating: bool,
    pub id: String,
    pub client_account_name: String,
    pub client_id: String,
    pub iin: String,
    pub item_id: String,
    pub name: String,
    pub svc_start: String,
    pub token_type: String,
    pub products: Vec<ProductOption>,
    pub errors: Vec<FieldError>,
    pub error_message: Option<String>,
    pub list_path: String,
}

impl TokenFormView {
    pub fn build(
        is_new: bool,
        draft: &Token,
        products: &[Product],
        loading: bool,
        updating: bool,
        list_path: &str,
    ) -> Self {
        let selected = default_product_id(is_new, draft, products);
        let text = |v: &Option<String>| v.clone().unwrap_or_default();
        Self {
            is_new,
            loading,
            updating,
            id: draft.id.map(|id| id.to_string()).unwrap_or_default(),
            client_account_name: draft.client_account_name.clone(),
            client_id: text(&draft.client_id),
            iin: text(&draft.iin),
            item_id: text(&draft.item_id),
            name: text(&draft.name),
            svc_start: text(&draft.svc_start),
            token_type: text(&draft.token_type),
            products: products
                .iter()
                .map(|p| ProductOption {
                    id: p.id,
                    code: p.code.clone(),
                    selected: Some(p.id) == selected,
                })
                .collect(),
            errors: Vec::new(),
            error_message: None,
            list_path: list_path.to_string(),
        }
    }

    pub fn error_for(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    pub fn selected_product_id(&self) -> Option<i64> {
        self.products.iter().find(|p| p.selected).map(|p| p.id)
    }
}

/// Product preselected in the dropdown: the draft's own reference, or the
/// first product when creating without a selection.
pub fn default_product_id(is_new: bool, draft: &Token, products: &[Product]) -> Option<i64> {
    match draft.product_id() {
        Some(id) => Some(id),
        None if is_new => products.first().map(|p| p.id),
        None => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProductRef;

    fn products() -> Vec<Product> {
        vec![
            Product { id: 4, code: "CLASSIC".into() },
            Product { id: 9, code: "GOLD".into() },
        ]
    }

    #[test]
    fn test_create_defaults_to_first_product() {
        assert_eq!(default_product_id(true, &Token::default(), &products()), Some(4));
    }

    #[test]
    fn test_explicit_selection_wins() {
        let draft = Token {
            product: Some(ProductRef { id: 9 }),
            ..Default::default()
        };
        assert_eq!(default_product_id(true, &draft, &products()), Some(9));
    }

    #[test]
    fn test_edit_without_reference_selects_nothing() {
        assert_eq!(default_product_id(false, &Token::default(), &products()), None);
    }

    #[test]
    fn test_empty_product_list_has_no_default() {
        assert_eq!(default_product_id(true, &Token::default(), &[]), None);
    }

    #[test]
    fn test_view_marks_single_selected_option() {
        let view = TokenFormView::build(true, &Token::default(), &products(), false, false, "/token");
        assert_eq!(view.selected_product_id(), Some(4));
        assert_eq!(view.products.iter().filter(|p| p.selected).count(), 1);
        assert_eq!(view.id, "");
    }
}

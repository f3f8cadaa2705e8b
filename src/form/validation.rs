use crate::models::{FieldError, TokenFormValues};
use crate::utils::{non_blank, parse_id};

pub const CLIENT_ACCOUNT_NAME: &str = "clientAccountName";
pub const PRODUCT: &str = "token.id";

/// Field-level checks run before a submission is attempted.
pub fn validate(values: &TokenFormValues) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if non_blank(values.client_account_name.as_ref()).is_none() {
        errors.push(FieldError::required(CLIENT_ACCOUNT_NAME));
    }

    match non_blank(values.product_id.as_ref()) {
        None => errors.push(FieldError::required(PRODUCT)),
        Some(raw) if parse_id(&raw).is_none() => errors.push(FieldError {
            field: PRODUCT,
            message: "Select a valid product.".into(),
        }),
        Some(_) => {}
    }

    errors
}

use serde::Deserialize;

/// Raw values posted by the token form. Every field arrives as text; an
/// unchecked browser may omit any of them.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenFormValues {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub client_account_name: Option<String>,
    #[serde(default)]
    pub client_id: Option<String>,
    #[serde(default)]
    pub iin: Option<String>,
    #[serde(default)]
    pub item_id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub svc_start: Option<String>,
    #[serde(rename = "type", default)]
    pub token_type: Option<String>,
    #[serde(rename = "token.id", default)]
    pub product_id: Option<String>,
}

/// Validation failure attached to a single form field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn required(field: &'static str) -> Self {
        Self {
            field,
            message: "This field is required.".into(),
        }
    }
}

use askama::Template;
use crate::form::TokenFormView;

#[derive(Template)]
#[template(path = "token_update.html")]
pub struct TokenUpdateTemplate {
    pub flash_messages: Vec<String>,
    pub has_flash_messages: bool,
    pub view: TokenFormView,
}

pub mod app_state;
pub mod product;
pub mod token;
pub mod token_form;

pub use app_state::AppState;
pub use product::Product;
pub use token::{ProductRef, Token};
pub use token_form::{FieldError, TokenFormValues};

pub mod token_store;
pub mod product_store;

pub use token_store::{TokenState, TokenStore};
pub use product_store::ProductStore;

// REST calls against the entity backend
pub mod client;
pub mod error;
pub mod tokens;
pub mod products;

// Re-export commonly used functions
pub use error::ApiError;
pub use tokens::{get_token, create_token, update_token};
pub use products::load_products;

// Individual template files
pub mod token_update_template;

pub use token_update_template::TokenUpdateTemplate;

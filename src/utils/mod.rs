// Parsing utilities
pub mod parse_int;
pub mod form_text;

// JSON utilities
pub mod json_converter;

// Re-export all utilities for convenient access
pub use parse_int::parse_id;
pub use form_text::non_blank;
pub use json_converter::value_to_short_string;

pub mod helpers;
pub mod tokens;

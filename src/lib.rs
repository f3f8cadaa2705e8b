pub mod api;
pub mod backend;
pub mod config;
pub mod form;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod store;
pub mod templates;
pub mod utils;

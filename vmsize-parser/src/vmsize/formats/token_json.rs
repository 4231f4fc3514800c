//! Token JSON format module declaration

#[allow(clippy::module_inception)]
pub mod token_json;

pub use token_json::TokenJsonFormatter;

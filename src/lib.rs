pub mod config;
pub mod errors;
pub mod extract;
pub mod gemini;
pub mod models;
pub mod prompt;
pub mod routes;

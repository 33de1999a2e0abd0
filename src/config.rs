// src/config.rs

use dotenvy::dotenv;
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    /// Connection string for the document store.
    /// Optional: when unset the API starts with an uninitialized store.
    pub database_url: Option<String>,

    /// Name of the database within the store.
    pub database_name: Option<String>,

    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let database_url = env::var("DATABASE_URL").ok();
        let database_name = env::var("DATABASE_NAME").ok();

        let rust_log = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        Self {
            database_url,
            database_name,
            rust_log,
        }
    }
}

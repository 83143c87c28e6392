// src/config.rs

use std::env;
use dotenvy::dotenv;

/// Number of questions returned per page by `GET /questions`.
pub const QUESTIONS_PER_PAGE: i64 = 10;

/// `quiz_category.type` value the front-end sends when the player picks "all categories".
pub const ALL_CATEGORIES: &str = "click";

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub rust_log: String,
    pub bind_addr: String,
    pub log_dir: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let database_url = env::var("DATABASE_URL")
            .expect("DATABASE_URL must be set");

        let rust_log = env::var("RUST_LOG")
            .unwrap_or_else(|_| "info".to_string());

        let bind_addr = env::var("BIND_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:3000".to_string());

        let log_dir = env::var("LOG_DIR")
            .unwrap_or_else(|_| "logs".to_string());

        Self {
            database_url,
            rust_log,
            bind_addr,
            log_dir,
        }
    }
}

//! Application settings loaded from environment variables.

use std::env;
use std::path::PathBuf;

use super::constants::{
    DEFAULT_INDEX_FILE, DEFAULT_PUBLIC_DIR, DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT,
};

/// Application configuration
#[derive(Clone)]
pub struct Config {
    database_url: Option<String>,
    pub server_host: String,
    pub server_port: u16,
    pub public_dir: PathBuf,
    pub index_file: PathBuf,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("database_url", &self.database_url.as_ref().map(|_| "[REDACTED]"))
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .field("public_dir", &self.public_dir)
            .field("index_file", &self.index_file)
            .finish()
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// A missing `DATABASE_URL` is not an error here; the serve command
    /// refuses to start without it.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL").ok().filter(|url| !url.trim().is_empty());
        if database_url.is_none() {
            tracing::warn!("DATABASE_URL is not set");
        }

        Self {
            database_url,
            server_host: env::var("SERVER_HOST")
                .unwrap_or_else(|_| DEFAULT_SERVER_HOST.to_string()),
            server_port: env::var("PORT")
                .or_else(|_| env::var("SERVER_PORT"))
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_SERVER_PORT),
            public_dir: env::var("PUBLIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_PUBLIC_DIR)),
            index_file: env::var("INDEX_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_INDEX_FILE)),
        }
    }

    /// Get the database connection URL, if configured.
    pub fn database_url(&self) -> Option<&str> {
        self.database_url.as_deref()
    }

    /// Replace the database connection URL.
    pub fn with_database_url(mut self, url: impl Into<String>) -> Self {
        self.database_url = Some(url.into());
        self
    }

    /// Get the full server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: None,
            server_host: DEFAULT_SERVER_HOST.to_string(),
            server_port: DEFAULT_SERVER_PORT,
            public_dir: PathBuf::from(DEFAULT_PUBLIC_DIR),
            index_file: PathBuf::from(DEFAULT_INDEX_FILE),
        }
    }
}

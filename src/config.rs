//! # Configuration Management
//!
//! This module handles loading configuration from environment variables.
//! It uses the "12-factor app" methodology where configuration comes from the environment.
//!
//! ## Environment Variables
//! - `SUPABASE_URL`: Base URL of the user record store (required)
//! - `SUPABASE_ANON_KEY`: Access key sent with every store request (required)
//! - `HOST`: Server bind address (default: 127.0.0.1)
//! - `PORT`: Server port (default: 8000)
//! - `USERS_TABLE`: Table holding the user records (default: users)
//! - `STORE_TIMEOUT_SECS`: Optional timeout for store requests (default: none)

use anyhow::{bail, Context, Result};
use std::fmt;
use std::time::Duration;

/// Application configuration
///
/// Holds every value needed to run the server. All fields are public for easy
/// access from other modules.
///
/// `Debug` is implemented by hand so the store key never ends up in the logs
/// when the configuration is printed at startup.
#[derive(Clone)]
pub struct Config {
    /// Server host/IP address to bind to
    /// Examples: "127.0.0.1" (localhost only), "0.0.0.0" (all interfaces)
    pub host: String,

    /// Server port number (1-65535)
    /// Default: 8000
    pub port: u16,

    /// Base URL of the Supabase project, e.g. "https://abc.supabase.co"
    pub store_url: String,

    /// Anonymous access key for the Supabase project
    pub store_key: String,

    /// Name of the table holding id/username/password rows
    pub users_table: String,

    /// Timeout applied to every outbound store request, if any
    pub store_timeout: Option<Duration>,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("store_url", &self.store_url)
            .field("store_key", &"<redacted>")
            .field("users_table", &self.users_table)
            .field("store_timeout", &self.store_timeout)
            .finish()
    }
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads variables from .env file (if present) using dotenvy
    /// 2. Reads each configuration value from the process environment
    /// 3. Falls back to defaults for host, port and table name
    /// 4. Fails if the store URL or key is missing, or a number doesn't parse
    ///
    /// ## Example .env file
    /// ```text
    /// SUPABASE_URL=https://abc.supabase.co
    /// SUPABASE_ANON_KEY=eyJhbGciOi...
    /// HOST=127.0.0.1
    /// PORT=8000
    /// ```
    pub fn from_env() -> Result<Self> {
        // Load .env file if it exists (dotenvy doesn't error if file missing)
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    ///
    /// `from_env` passes the process environment; tests pass a map.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Treat empty values the same as unset ones
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let (store_url, store_key) = match (get("SUPABASE_URL"), get("SUPABASE_ANON_KEY")) {
            (Some(url), Some(key)) => (url, key),
            _ => bail!("SUPABASE_URL and SUPABASE_ANON_KEY must be set in environment variables"),
        };

        let port = match get("PORT") {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("PORT must be a valid port number, got {raw:?}"))?,
            None => 8000,
        };

        let store_timeout = match get("STORE_TIMEOUT_SECS") {
            Some(raw) => {
                let secs: u64 = raw
                    .parse()
                    .with_context(|| format!("STORE_TIMEOUT_SECS must be a whole number of seconds, got {raw:?}"))?;
                if secs == 0 {
                    bail!("STORE_TIMEOUT_SECS must be at least 1; unset it to disable the timeout");
                }
                Some(Duration::from_secs(secs))
            }
            None => None,
        };

        Ok(Config {
            host: get("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port,
            store_url,
            store_key,
            users_table: get("USERS_TABLE").unwrap_or_else(|| "users".to_string()),
            store_timeout,
        })
    }

    /// Get the socket address to bind the server to
    ///
    /// Combines host and port into a format suitable for `tokio::net::TcpListener::bind()`.
    /// Example: "127.0.0.1:8000"
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

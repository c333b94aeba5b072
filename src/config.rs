//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server
//! starts.
//!
//! ## Required Variables
//!
//! None. Without `AIRTABLE_TOKEN` the service runs on an in-process store,
//! which is useful for local development but loses points on restart.
//!
//! ## Optional Variables
//!
//! - `AIRTABLE_TOKEN` - Airtable personal access token (enables the Airtable store)
//! - `AIRTABLE_BASE_ID` / `AIRTABLE_TABLE_ID` - target base and table
//! - `FIELD_NAME` / `FIELD_LAT` / `FIELD_LNG` / `FIELD_ROLE` - column names
//!   in the table (defaults match the production base, where the latitude
//!   column is historically named "Attitude")
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `HTTP_TIMEOUT_SECONDS` - Outbound request timeout (default: 10)
//! - `POINTS_DEFAULT_MAX` - Points returned when the query omits `max` (default: 2000)
//! - `POINTS_MAX_CAP` - Hard cap on the `max` query parameter (default: 5000)

use anyhow::Result;
use std::env;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Airtable access token. `None` selects the in-memory store.
    pub airtable_token: Option<String>,
    pub airtable_base_id: String,
    pub airtable_table_id: String,

    /// Column name holding the submitter name.
    pub field_name: String,
    /// Column name holding latitude.
    pub field_lat: String,
    /// Column name holding longitude.
    pub field_lng: String,
    /// Column name holding the role.
    pub field_role: String,

    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,

    /// Timeout in seconds for outbound HTTP requests (Airtable calls and
    /// shortlink resolution). Bounds how long a hung redirect chain can
    /// stall a submission.
    pub http_timeout_seconds: u64,

    /// Number of points listed when the query omits `max`.
    pub points_default_max: usize,
    /// Upper bound applied to the `max` query parameter.
    pub points_max_cap: usize,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let airtable_token = env::var("AIRTABLE_TOKEN").ok().filter(|t| !t.is_empty());

        let airtable_base_id =
            env::var("AIRTABLE_BASE_ID").unwrap_or_else(|_| "appAHi3IJKwxUuxBb".to_string());
        let airtable_table_id =
            env::var("AIRTABLE_TABLE_ID").unwrap_or_else(|_| "tblEU37Z4McYDA86w".to_string());

        let field_name = env::var("FIELD_NAME").unwrap_or_else(|_| "Name".to_string());
        let field_lat = env::var("FIELD_LAT").unwrap_or_else(|_| "Attitude".to_string());
        let field_lng = env::var("FIELD_LNG").unwrap_or_else(|_| "Longitude".to_string());
        let field_role = env::var("FIELD_ROLE").unwrap_or_else(|_| "Role".to_string());

        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let http_timeout_seconds = env::var("HTTP_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10);

        let points_default_max = env::var("POINTS_DEFAULT_MAX")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(2000);

        let points_max_cap = env::var("POINTS_MAX_CAP")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(5000);

        Ok(Config {
            airtable_token,
            airtable_base_id,
            airtable_table_id,
            field_name,
            field_lat,
            field_lng,
            field_role,
            listen_addr,
            log_level,
            log_format,
            http_timeout_seconds,
            points_default_max,
            points_max_cap,
        })
    }

    /// Validates the loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns an error on out-of-range or malformed values.
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.http_timeout_seconds == 0 || self.http_timeout_seconds > 300 {
            anyhow::bail!(
                "HTTP_TIMEOUT_SECONDS must be between 1 and 300, got {}",
                self.http_timeout_seconds
            );
        }

        // Base and table ids land in the request path.
        if self.airtable_base_id.is_empty() || self.airtable_base_id.contains('/') {
            anyhow::bail!("AIRTABLE_BASE_ID is empty or contains '/'");
        }
        if self.airtable_table_id.is_empty() || self.airtable_table_id.contains('/') {
            anyhow::bail!("AIRTABLE_TABLE_ID is empty or contains '/'");
        }

        if self.points_default_max == 0 {
            anyhow::bail!("POINTS_DEFAULT_MAX must be at least 1");
        }

        if self.points_max_cap < self.points_default_max {
            anyhow::bail!(
                "POINTS_MAX_CAP ({}) must not be below POINTS_DEFAULT_MAX ({})",
                self.points_max_cap,
                self.points_default_max
            );
        }

        Ok(())
    }

    /// Returns whether the Airtable store is configured.
    pub fn is_airtable_enabled(&self) -> bool {
        self.airtable_token.is_some()
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);

        if let Some(ref token) = self.airtable_token {
            tracing::info!(
                "  Airtable: base {} table {} (token {})",
                self.airtable_base_id,
                self.airtable_table_id,
                mask_secret(token)
            );
        } else {
            tracing::info!("  Airtable: disabled (in-memory store)");
        }

        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  HTTP timeout: {}s", self.http_timeout_seconds);
        tracing::info!(
            "  Points page: default {} cap {}",
            self.points_default_max,
            self.points_max_cap
        );
    }
}

/// Masks a secret for logging, keeping a short recognizable prefix.
fn mask_secret(secret: &str) -> String {
    if secret.len() <= 4 {
        return "***".to_string();
    }
    format!("{}***", &secret[..4])
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}

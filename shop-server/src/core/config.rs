use std::path::PathBuf;

/// Server configuration
///
/// # Environment variables
///
/// Every field can be overridden through the environment:
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | WORK_DIR | /var/lib/shop | Working directory (database, logs) |
/// | CANCELLATION_WINDOW_HOURS | 24 | Hours after creation an order may be cancelled |
/// | RETURN_WINDOW_DAYS | 14 | Days after creation a delivered order may be returned |
/// | ENVIRONMENT | development | Runtime environment |
/// | LOG_LEVEL | info | Default tracing filter |
///
/// # Examples
///
/// ```ignore
/// WORK_DIR=/data/shop CANCELLATION_WINDOW_HOURS=48 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Working directory for the database and log files
    pub work_dir: String,
    /// Business window: cancellation allowed this many hours after creation
    pub cancellation_window_hours: i64,
    /// Business window: returns allowed this many days after creation
    pub return_window_days: i64,
    /// Runtime environment: development | staging | production
    pub environment: String,
    /// Default log filter when RUST_LOG is unset
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Unset variables fall back to defaults.
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "/var/lib/shop".into()),
            cancellation_window_hours: std::env::var("CANCELLATION_WINDOW_HOURS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(24),
            return_window_days: std::env::var("RETURN_WINDOW_DAYS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(14),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
        }
    }

    /// Override the working directory, keeping everything else from env
    ///
    /// Commonly used in tests
    pub fn with_work_dir(work_dir: impl Into<String>) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config
    }

    /// Path of the embedded database file
    pub fn db_path(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("shop.redb")
    }

    /// Whether this is a production deployment
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

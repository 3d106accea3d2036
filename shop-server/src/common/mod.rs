//! Common infrastructure: environment setup and logging

pub mod logger;

use crate::core::Config;

/// Prepare the process environment: .env file, working directory, logging
///
/// Call once at startup, before any other initialization.
pub fn setup_environment() -> anyhow::Result<Config> {
    dotenv::dotenv().ok();

    let config = Config::from_env();
    std::fs::create_dir_all(&config.work_dir)?;

    let log_dir = format!("{}/logs", config.work_dir);
    logger::init_logger_with_file(
        &config.log_level,
        config.is_production(),
        Some(log_dir.as_str()),
    )?;

    Ok(config)
}

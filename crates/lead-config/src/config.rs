use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_LOG_LEVEL, DatabaseConfig, LogLevel, LoggingConfig,
    ServerConfig, TelegramConfig,
};

use log::{info, warn};

/// Process configuration, read once at startup.
///
/// Every knob is an environment variable; a `.env` file is honored for
/// development via dotenvy. Missing database or Telegram settings are not
/// errors: the server starts degraded and reports the gaps.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub telegram: TelegramConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Fails only on values that are set but unusable, such as a PORT that
    /// is not a number.
    pub fn from_env() -> ConfigErrorResult<Self> {
        // Load .env file if present (development convenience)
        let _ = dotenvy::dotenv();

        let mut config = Config::default();

        if let Ok(host) = std::env::var("HOST") {
            config.server.host = host;
        }

        if let Ok(raw) = std::env::var("PORT") {
            config.server.port = raw.parse().map_err(|_| {
                ConfigError::invalid_var("PORT", format!("must be a number 0-65535, got {raw:?}"))
            })?;
        }

        config.database.url = std::env::var("DATABASE_URL").ok();
        config.database.name = std::env::var("DATABASE_NAME").ok();

        config.telegram.bot_token = std::env::var("TELEGRAM_BOT_TOKEN").ok();
        config.telegram.chat_id = std::env::var("TELEGRAM_CHAT_ID").ok();

        if let Ok(level) = std::env::var("LOG_LEVEL") {
            config.logging.level = level.parse().unwrap_or(LogLevel(DEFAULT_LOG_LEVEL));
        }

        if let Ok(colored) = std::env::var("LOG_COLORED") {
            config.logging.colored = colored.parse().unwrap_or(true);
        }

        Ok(config)
    }

    /// Get bind address as string.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}:{}", self.server.host, self.server.port);

        match (&self.database.url, &self.database.name) {
            (Some(_), Some(name)) => info!("  database: configured (name: {name})"),
            (Some(_), None) => info!("  database: configured"),
            (None, _) => warn!("  database: DATABASE_URL not set, document store disabled"),
        }

        if self.telegram.is_configured() {
            info!("  telegram: relay enabled");
        } else if self.telegram.is_partially_configured() {
            warn!(
                "  telegram: relay disabled, TELEGRAM_BOT_TOKEN and TELEGRAM_CHAT_ID must both be set"
            );
        } else {
            info!("  telegram: relay disabled");
        }

        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
    }
}

//! Bot configuration loaded from env: Telegram connection, web app URL, shared secret, logging.

use anyhow::Result;
use dbot_telegram::TelegramConfig;
use std::env;
use webapp_auth::SharedSecret;

/// Used when WEBAPP_URL is unset.
pub const DEFAULT_WEBAPP_URL: &str = "https://your-webapp-url.com";
pub const DEFAULT_LOG_FILE: &str = "logs/wallpaper-bot.log";

/// Process-wide settings read once at startup and passed into constructors.
#[derive(Debug, Clone)]
pub struct BotConfig {
    /// BOT_TOKEN or TELEGRAM_BOT_TOKEN
    pub bot_token: String,
    /// BOT_SECRET; validates data signed by the web app
    pub bot_secret: SharedSecret,
    /// WEBAPP_URL; base URL of the embedded web app
    pub webapp_url: String,
    /// TELEGRAM_API_URL or TELOXIDE_API_URL
    pub telegram_api_url: Option<String>,
    /// LOG_FILE
    pub log_file: String,
}

/// Reads BOT_SECRET. Missing or empty is an error: without it no web-app data can be trusted.
pub fn load_secret() -> Result<SharedSecret> {
    match env::var("BOT_SECRET") {
        Ok(secret) if !secret.is_empty() => Ok(SharedSecret::from(secret)),
        _ => anyhow::bail!("BOT_SECRET not set"),
    }
}

impl BotConfig {
    /// Load from environment variables. `token` overrides BOT_TOKEN if provided.
    /// Call validate() after load to check config before init.
    pub fn load(token: Option<String>) -> Result<Self> {
        let bot_token = match token {
            Some(token) => token,
            None => env::var("BOT_TOKEN")
                .or_else(|_| env::var("TELEGRAM_BOT_TOKEN"))
                .map_err(|_| anyhow::anyhow!("BOT_TOKEN not set"))?,
        };
        let bot_secret = load_secret()?;
        let webapp_url = env::var("WEBAPP_URL").unwrap_or_else(|_| DEFAULT_WEBAPP_URL.to_string());
        let telegram_api_url = env::var("TELEGRAM_API_URL")
            .or_else(|_| env::var("TELOXIDE_API_URL"))
            .ok();
        let log_file = env::var("LOG_FILE").unwrap_or_else(|_| DEFAULT_LOG_FILE.to_string());

        Ok(Self {
            bot_token,
            bot_secret,
            webapp_url,
            telegram_api_url,
            log_file,
        })
    }

    /// Validate config (web app URL must be absolute; Telegram API URL valid if set).
    pub fn validate(&self) -> Result<()> {
        if self.bot_secret.is_empty() {
            anyhow::bail!("BOT_SECRET must not be empty");
        }
        if reqwest::Url::parse(&self.webapp_url).is_err() {
            anyhow::bail!("WEBAPP_URL is not a valid absolute URL: {}", self.webapp_url);
        }
        self.telegram().validate()
    }

    /// Framework-level view of this config (token, API URL, log file).
    pub fn telegram(&self) -> TelegramConfig {
        TelegramConfig {
            bot_token: self.bot_token.clone(),
            telegram_api_url: self.telegram_api_url.clone(),
            log_file: Some(self.log_file.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        for var in [
            "BOT_TOKEN",
            "TELEGRAM_BOT_TOKEN",
            "BOT_SECRET",
            "WEBAPP_URL",
            "TELEGRAM_API_URL",
            "TELOXIDE_API_URL",
            "LOG_FILE",
        ] {
            env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn test_load_config_with_defaults() {
        clear_env();
        env::set_var("BOT_TOKEN", "test_token");
        env::set_var("BOT_SECRET", "test_secret");

        let config = BotConfig::load(None).unwrap();

        assert_eq!(config.bot_token, "test_token");
        assert_eq!(config.bot_secret, SharedSecret::from("test_secret"));
        assert_eq!(config.webapp_url, DEFAULT_WEBAPP_URL);
        assert!(config.telegram_api_url.is_none());
        assert_eq!(config.log_file, DEFAULT_LOG_FILE);
        assert!(config.validate().is_ok());
        clear_env();
    }

    #[test]
    #[serial]
    fn test_load_config_with_custom_values() {
        clear_env();
        env::set_var("TELEGRAM_BOT_TOKEN", "fallback_token");
        env::set_var("BOT_SECRET", "s3cret");
        env::set_var("WEBAPP_URL", "https://wallpapers.example.com/app");
        env::set_var("TELEGRAM_API_URL", "http://127.0.0.1:8081");
        env::set_var("LOG_FILE", "/tmp/wallpaper.log");

        let config = BotConfig::load(None).unwrap();

        assert_eq!(config.bot_token, "fallback_token");
        assert_eq!(config.webapp_url, "https://wallpapers.example.com/app");
        assert_eq!(config.telegram_api_url.as_deref(), Some("http://127.0.0.1:8081"));
        assert_eq!(config.log_file, "/tmp/wallpaper.log");
        let telegram = config.telegram();
        assert_eq!(telegram.bot_token, "fallback_token");
        assert_eq!(telegram.log_file.as_deref(), Some("/tmp/wallpaper.log"));
        assert!(config.validate().is_ok());
        clear_env();
    }

    #[test]
    #[serial]
    fn test_load_config_with_override_token() {
        clear_env();
        env::set_var("BOT_TOKEN", "env_token");
        env::set_var("BOT_SECRET", "s");

        let config = BotConfig::load(Some("override_token".to_string())).unwrap();

        assert_eq!(config.bot_token, "override_token");
        clear_env();
    }

    #[test]
    #[serial]
    fn test_missing_secret_is_fatal() {
        clear_env();
        env::set_var("BOT_TOKEN", "test_token");
        let err = BotConfig::load(None).unwrap_err();
        assert!(err.to_string().contains("BOT_SECRET"));

        env::set_var("BOT_SECRET", "");
        assert!(BotConfig::load(None).is_err());
        assert!(load_secret().is_err());
        clear_env();
    }

    #[test]
    #[serial]
    fn test_missing_token_is_fatal() {
        clear_env();
        env::set_var("BOT_SECRET", "s");
        assert!(BotConfig::load(None).is_err());
        clear_env();
    }

    #[test]
    #[serial]
    fn test_validate_rejects_bad_urls() {
        clear_env();
        env::set_var("BOT_TOKEN", "test_token");
        env::set_var("BOT_SECRET", "s");
        env::set_var("WEBAPP_URL", "not a url");
        assert!(BotConfig::load(None).unwrap().validate().is_err());

        env::set_var("WEBAPP_URL", "https://ok.example.com");
        env::set_var("TELEGRAM_API_URL", "not-a-valid-url");
        assert!(BotConfig::load(None).unwrap().validate().is_err());
        clear_env();
    }

    #[test]
    fn test_debug_does_not_leak_secret() {
        let config = BotConfig {
            bot_token: "t".to_string(),
            bot_secret: SharedSecret::from("do-not-print"),
            webapp_url: DEFAULT_WEBAPP_URL.to_string(),
            telegram_api_url: None,
            log_file: DEFAULT_LOG_FILE.to_string(),
        };
        assert!(!format!("{:?}", config).contains("do-not-print"));
    }
}

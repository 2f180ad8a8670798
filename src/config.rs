// src/config.rs
use std::env;

use chrono::Duration;
use thiserror::Error;

use crate::application::services::rate_limiter::RateLimitPolicy;

#[derive(Clone, Debug)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub username: Option<String>,
    pub password: Option<String>,
    pub encryption: String,
    pub from_email: String,
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    listen_addr: String,
    site_url: String,
    cron_key: String,
    rate_limit_max_requests: u64,
    rate_limit_window_secs: i64,
    notify_max_in_flight: usize,
    smtp: Option<SmtpConfig>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".into()
}

fn default_site_url() -> String {
    "http://localhost:8080".into()
}

impl AppConfig {
    /// Build configuration from environment variables. Uses sensible defaults
    /// for optional values and validates required keys.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Allow dotenv files to populate env vars when present.
        dotenvy::dotenv().ok();

        let listen_addr = env::var("LISTEN_ADDR").unwrap_or_else(|_| default_listen_addr());
        let site_url = env::var("SITE_URL").unwrap_or_else(|_| default_site_url());

        let cron_key =
            env::var("CRON_SHARED_SECRET").map_err(|_| ConfigError::Missing("CRON_SHARED_SECRET"))?;
        if cron_key.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "CRON_SHARED_SECRET must not be empty".into(),
            ));
        }

        let rate_limit_max_requests = env::var("RATE_LIMIT_MAX_REQUESTS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(5);

        let rate_limit_window_secs = env::var("RATE_LIMIT_WINDOW_SECS")
            .ok()
            .and_then(|v| v.parse::<i64>().ok())
            .unwrap_or(15 * 60);
        if rate_limit_window_secs <= 0 {
            return Err(ConfigError::Invalid(
                "RATE_LIMIT_WINDOW_SECS must be positive".into(),
            ));
        }

        let notify_max_in_flight = env::var("NOTIFY_MAX_IN_FLIGHT")
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
            .unwrap_or(16);

        let smtp = match env::var("SMTP_HOST") {
            Ok(host) => {
                let from_email =
                    env::var("SMTP_FROM").map_err(|_| ConfigError::Missing("SMTP_FROM"))?;
                Some(SmtpConfig {
                    host,
                    port: env::var("SMTP_PORT")
                        .ok()
                        .and_then(|v| v.parse::<u16>().ok())
                        .unwrap_or(587),
                    username: env::var("SMTP_USERNAME").ok(),
                    password: env::var("SMTP_PASSWORD").ok(),
                    encryption: env::var("SMTP_ENCRYPTION")
                        .unwrap_or_else(|_| "starttls".into()),
                    from_email,
                })
            }
            Err(_) => None,
        };

        Ok(Self {
            listen_addr,
            site_url,
            cron_key,
            rate_limit_max_requests,
            rate_limit_window_secs,
            notify_max_in_flight,
            smtp,
        })
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    pub fn site_url(&self) -> &str {
        &self.site_url
    }

    /// Shared secret expected on the sweeper trigger endpoint.
    pub fn cron_key(&self) -> &str {
        &self.cron_key
    }

    pub fn rate_limit_policy(&self) -> RateLimitPolicy {
        RateLimitPolicy {
            max_requests: self.rate_limit_max_requests,
            window: Duration::seconds(self.rate_limit_window_secs),
        }
    }

    pub fn notify_max_in_flight(&self) -> usize {
        self.notify_max_in_flight
    }

    pub fn smtp(&self) -> Option<&SmtpConfig> {
        self.smtp.as_ref()
    }
}

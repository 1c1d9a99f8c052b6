//! Application configuration loaded from environment variables.
//!
//! Everything is collected once at startup; nothing reads the environment
//! after `AppConfig::from_env` returns.

use std::env;

/// Top-level server configuration.
///
/// Reads from environment variables:
/// - `HOST`: bind address (default `"0.0.0.0"`)
/// - `PORT`: listen port (default `3000`)
/// - `DATABASE_URL`: Postgres connection string
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub payments: PaymentConfig,
    pub mail: MailConfig,
}

/// Payment gateway credentials and endpoints.
///
/// Base URLs are configurable so tests can point the adapter at a local
/// address instead of the real processors.
#[derive(Debug, Clone)]
pub struct PaymentConfig {
    pub razorpay_key_id: String,
    pub razorpay_key_secret: String,
    pub razorpay_base_url: String,
    pub stripe_secret_key: String,
    pub stripe_base_url: String,
    /// Storefront base currency, e.g. "INR"
    pub currency: String,
    /// Bound on every outbound gateway call
    pub timeout_secs: u64,
}

/// Mail delivery settings for the HTTP mail API collaborator.
#[derive(Debug, Clone)]
pub struct MailConfig {
    /// Endpoint of the mail API; notifications are skipped when unset
    pub api_url: Option<String>,
    pub from_address: String,
    /// Where commission alerts for the artist are sent
    pub artist_email: String,
}

impl AppConfig {
    /// Loads configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "postgres://localhost:5432/artgallery".to_string()),
            payments: PaymentConfig::from_env(),
            mail: MailConfig::from_env(),
        }
    }

    /// Returns the `"host:port"` bind address string.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl PaymentConfig {
    fn from_env() -> Self {
        Self {
            razorpay_key_id: env::var("RAZORPAY_KEY_ID").unwrap_or_default(),
            razorpay_key_secret: env::var("RAZORPAY_KEY_SECRET").unwrap_or_default(),
            razorpay_base_url: env::var("RAZORPAY_BASE_URL")
                .unwrap_or_else(|_| "https://api.razorpay.com".to_string()),
            stripe_secret_key: env::var("STRIPE_SECRET_KEY").unwrap_or_default(),
            stripe_base_url: env::var("STRIPE_BASE_URL")
                .unwrap_or_else(|_| "https://api.stripe.com".to_string()),
            currency: env::var("PAYMENT_CURRENCY").unwrap_or_else(|_| "INR".to_string()),
            timeout_secs: env::var("GATEWAY_TIMEOUT_SECS")
                .ok()
                .and_then(|t| t.parse().ok())
                .unwrap_or(10),
        }
    }
}

impl Default for PaymentConfig {
    fn default() -> Self {
        Self {
            razorpay_key_id: String::new(),
            razorpay_key_secret: String::new(),
            razorpay_base_url: "https://api.razorpay.com".to_string(),
            stripe_secret_key: String::new(),
            stripe_base_url: "https://api.stripe.com".to_string(),
            currency: "INR".to_string(),
            timeout_secs: 10,
        }
    }
}

impl MailConfig {
    fn from_env() -> Self {
        Self {
            api_url: env::var("MAIL_API_URL").ok(),
            from_address: env::var("MAIL_FROM")
                .unwrap_or_else(|_| "noreply@yuviart.example".to_string()),
            artist_email: env::var("ARTIST_EMAIL")
                .unwrap_or_else(|_| "artist@yuviart.example".to_string()),
        }
    }
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            api_url: None,
            from_address: "noreply@yuviart.example".to_string(),
            artist_email: "artist@yuviart.example".to_string(),
        }
    }
}

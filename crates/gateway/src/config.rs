//! Application configuration loaded from environment variables.

use common::OrderId;
use notifier::DeclineConfig;

/// Gateway configuration with sensible defaults.
///
/// Reads from environment variables:
/// - `HOST` — bind address (default: `"0.0.0.0"`)
/// - `PORT` — listen port (default: `3000`)
/// - `RUST_LOG` — tracing filter directive (default: `"info"`)
/// - `STORE_BASE_URL` — secure storefront URL used for order links
/// - `STORE_NAME` — store name when an event does not carry one
/// - `DECLINE_NOTIFICATION_ENABLED`, `DECLINE_NOTIFICATION_SUBJECT`,
///   `DECLINE_NOTIFICATION_CONTENT`, `DECLINE_NOTIFICATION_SENDER_EMAIL`,
///   `DECLINE_NOTIFICATION_SENDER_NAME` — default-scope decline settings
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub log_level: String,
    pub store_base_url: String,
    pub store_name: String,
    pub decline: DeclineConfig,
}

impl Config {
    /// Loads configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let var = |key: &str, default: String| lookup(key).unwrap_or(default);

        Self {
            host: var("HOST", defaults.host),
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            log_level: var("RUST_LOG", defaults.log_level),
            store_base_url: var("STORE_BASE_URL", defaults.store_base_url),
            store_name: var("STORE_NAME", defaults.store_name),
            decline: DeclineConfig {
                enabled: lookup("DECLINE_NOTIFICATION_ENABLED")
                    .is_some_and(|v| parse_flag(&v)),
                subject_template: var("DECLINE_NOTIFICATION_SUBJECT", String::new()),
                body_template: var("DECLINE_NOTIFICATION_CONTENT", String::new()),
                sender_email: var("DECLINE_NOTIFICATION_SENDER_EMAIL", String::new()),
                sender_name: var("DECLINE_NOTIFICATION_SENDER_NAME", String::new()),
            },
        }
    }

    /// Returns the `"host:port"` bind address string.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Returns the storefront URL of the customer's order view page.
    pub fn order_view_url(&self, order_id: OrderId) -> String {
        format!(
            "{}/sales/order/view/order_id/{}/",
            self.store_base_url.trim_end_matches('/'),
            order_id
        )
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            log_level: "info".to_string(),
            store_base_url: "https://localhost".to_string(),
            store_name: "Default Store View".to_string(),
            decline: DeclineConfig::disabled(),
        }
    }
}

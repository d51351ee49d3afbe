//! Runtime Configuration
//!
//! Read once from the environment at startup and passed to the components
//! that need it. Nothing reads the environment after boot.

/// How long a lead's coupon stays valid
pub const LEAD_EXPIRY_DAYS: i64 = 30;

/// Application configuration
#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Address the HTTP server binds to
    pub bind_addr: String,

    /// Externally reachable base URL, used to synthesize payment
    /// success/cancel redirects when the caller supplies none
    pub public_base_url: String,

    /// ISO currency code for checkout sessions
    pub currency: String,

    /// Prefix for generated coupon codes
    pub coupon_prefix: String,

    /// Discount granted to new leads, in percent
    pub lead_discount_percent: u32,
}

impl AppConfig {
    /// Build configuration from environment variables, falling back to
    /// development defaults.
    pub fn from_env() -> Self {
        Self {
            bind_addr: env_or("BIND_ADDR", "0.0.0.0:8000"),
            public_base_url: env_or("PUBLIC_BASE_URL", "http://localhost:8000"),
            currency: env_or("CURRENCY", "usd"),
            coupon_prefix: env_or("COUPON_PREFIX", "SNATCH"),
            lead_discount_percent: env_or("LEAD_DISCOUNT_PERCENT", "15")
                .parse()
                .unwrap_or(15),
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_env();
        assert!(!config.currency.is_empty());
        assert!(!config.coupon_prefix.is_empty());
        assert!(config.lead_discount_percent > 0);
    }
}

use std::env;

use business::domain::checkout::model::CustomerValidator;

const DEFAULT_CART_TTL_MINUTES: i64 = 120;

/// Cart and checkout behavior.
#[derive(Debug, Clone)]
pub struct CheckoutConfig {
    pub validate_phone_format: bool,
    pub cart_session_ttl: chrono::Duration,
}

impl CheckoutConfig {
    /// Environment variables:
    /// - CHECKOUT_VALIDATE_PHONE: Check phone format at checkout (default: true)
    /// - CART_SESSION_TTL_MINUTES: Idle time before a cart is dropped (default: 120)
    pub fn from_env() -> Self {
        Self {
            validate_phone_format: parse_flag(env::var("CHECKOUT_VALIDATE_PHONE").ok(), true),
            cart_session_ttl: chrono::Duration::minutes(
                env::var("CART_SESSION_TTL_MINUTES")
                    .ok()
                    .and_then(|value| value.parse::<i64>().ok())
                    .filter(|minutes| *minutes > 0)
                    .unwrap_or(DEFAULT_CART_TTL_MINUTES),
            ),
        }
    }

    pub fn validator(&self) -> CustomerValidator {
        CustomerValidator {
            validate_phone_format: self.validate_phone_format,
        }
    }
}

fn parse_flag(value: Option<String>, default: bool) -> bool {
    match value.as_deref().map(str::trim).map(str::to_lowercase).as_deref() {
        Some("true" | "1" | "yes") => true,
        Some("false" | "0" | "no") => false,
        _ => default,
    }
}

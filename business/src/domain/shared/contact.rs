use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex")
});

static PHONE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9][0-9\s-]*$").expect("valid phone regex"));

const MIN_PHONE_DIGITS: usize = 10;

pub fn is_valid_email(value: &str) -> bool {
    EMAIL.is_match(value.trim())
}

/// Loose phone check: optional leading `+`, then digits, spaces and hyphens,
/// with at least ten digits overall.
pub fn is_valid_phone(value: &str) -> bool {
    let value = value.trim();
    PHONE.is_match(value) && value.chars().filter(char::is_ascii_digit).count() >= MIN_PHONE_DIGITS
}

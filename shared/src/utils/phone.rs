//! Phone number utilities

use once_cell::sync::Lazy;
use regex::Regex;

// Indian mobile number regex (10 digits, leading 6-9)
static INDIA_MOBILE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[6-9]\d{9}$").unwrap());

// International phone number regex (E.164 format)
static INTERNATIONAL_PHONE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+[1-9]\d{1,14}$").unwrap());

/// Normalize a phone number by removing common formatting characters
pub fn normalize_phone_number(phone: &str) -> String {
    phone
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect()
}

/// Check if a phone number is a valid Indian mobile number
pub fn is_valid_indian_mobile(phone: &str) -> bool {
    let normalized = normalize_phone_number(phone);
    INDIA_MOBILE_REGEX.is_match(&normalized)
}

/// Check if a phone number is valid in international E.164 format
pub fn is_valid_international_phone(phone: &str) -> bool {
    let normalized = normalize_phone_number(phone);
    INTERNATIONAL_PHONE_REGEX.is_match(&normalized)
}

/// Check if a phone number is valid (either Indian mobile or international)
pub fn is_valid_phone(phone: &str) -> bool {
    let normalized = normalize_phone_number(phone);
    is_valid_indian_mobile(&normalized) || is_valid_international_phone(&normalized)
}

/// Format an Indian mobile number for display
pub fn format_indian_mobile(phone: &str) -> Option<String> {
    let normalized = normalize_phone_number(phone);
    if is_valid_indian_mobile(&normalized) {
        Some(format!("{} {}", &normalized[0..5], &normalized[5..10]))
    } else {
        None
    }
}

/// Mask a phone number for display and logs (e.g. 902****0156)
pub fn mask_phone_number(phone: &str) -> String {
    let normalized = normalize_phone_number(phone);
    if normalized.len() >= 7 {
        format!(
            "{}****{}",
            &normalized[0..3],
            &normalized[normalized.len() - 4..]
        )
    } else {
        "****".to_string()
    }
}

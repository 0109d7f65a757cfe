//! Input validation performed before any network call.
//!
//! Validation failures are reported to the user directly; nothing here ever
//! reaches the wire.

use std::sync::OnceLock;

use regex::Regex;

pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

pub fn is_email(value: &str) -> bool {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex is valid")
    });
    re.is_match(value)
}

/// Phone numbers: 8 to 15 digits, spaces and dashes ignored.
pub fn is_phone(value: &str) -> bool {
    let digits: String = value.chars().filter(|c| !c.is_whitespace() && *c != '-').collect();
    (8..=15).contains(&digits.len()) && digits.chars().all(|c| c.is_ascii_digit())
}

pub fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

pub fn is_positive_quantity(value: i64) -> bool {
    value > 0
}

pub fn min_length(value: &str, min: usize) -> bool {
    value.chars().count() >= min
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_detection() {
        assert!(is_blank(""));
        assert!(is_blank("   \t"));
        assert!(!is_blank("a"));
    }

    #[test]
    fn email_shapes() {
        assert!(is_email("ana@example.com"));
        assert!(!is_email("ana@example"));
        assert!(!is_email("not an email"));
        assert!(!is_email("a b@example.com"));
    }

    #[test]
    fn phone_shapes() {
        assert!(is_phone("11 4321-5678"));
        assert!(is_phone("541143215678"));
        assert!(!is_phone("1234567"));
        assert!(!is_phone("phone"));
    }

    #[test]
    fn positive_numbers() {
        assert!(is_positive(0.01));
        assert!(!is_positive(0.0));
        assert!(!is_positive(-5.0));
        assert!(!is_positive(f64::NAN));
        assert!(!is_positive(f64::INFINITY));
    }

    #[test]
    fn quantities() {
        assert!(is_positive_quantity(1));
        assert!(!is_positive_quantity(0));
        assert!(!is_positive_quantity(-3));
    }

    #[test]
    fn lengths() {
        assert!(min_length("abcd", 4));
        assert!(!min_length("abc", 4));
    }
}

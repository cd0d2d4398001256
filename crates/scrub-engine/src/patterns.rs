//! Value pattern library.
//!
//! Validators decide whether a string *is* an instance of a category,
//! independent of the field it arrived in. Email, passport, and UPI are
//! anchored whole-string matches; digit-run patterns (phone, aadhaar, PIN
//! code) and IPv4 match anywhere in the value but never inside a longer
//! digit run.

use once_cell::sync::Lazy;
use regex::{Match, Regex};

static TEN_DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b[0-9]{10}\b").unwrap());

static TWELVE_DIGITS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(?:[0-9]{12}|[0-9]{4} [0-9]{4} [0-9]{4})\b").unwrap());

static PASSPORT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Z][0-9]{7}$").unwrap());

static UPI: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9._-]{2,}@[A-Za-z]{2,}$").unwrap());

static EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").unwrap());

static IPV4: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?:(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\.){3}(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\b")
        .unwrap()
});

// Indian PIN code.
static PIN_CODE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b[0-9]{6}\b").unwrap());

/// True when the value contains a 10-digit run not embedded in a longer one.
#[must_use]
pub fn is_phone(value: &str) -> bool {
    TEN_DIGITS.is_match(value)
}

/// True when the value contains 12 digits, plain or grouped 4-4-4.
#[must_use]
pub fn is_aadhaar(value: &str) -> bool {
    TWELVE_DIGITS.is_match(value)
}

/// True when the whole value is one uppercase letter plus seven digits.
#[must_use]
pub fn is_passport(value: &str) -> bool {
    PASSPORT.is_match(value)
}

/// True when the whole value is a UPI handle: identifier, `@`, provider.
#[must_use]
pub fn is_upi(value: &str) -> bool {
    UPI.is_match(value)
}

/// True when the whole value is an email address with a dotted TLD.
#[must_use]
pub fn is_email(value: &str) -> bool {
    EMAIL.is_match(value)
}

/// True when the value contains an IPv4 dotted quad with octets 0-255.
#[must_use]
pub fn is_ipv4(value: &str) -> bool {
    IPV4.is_match(value)
}

/// True when the value contains a 6-digit PIN code.
#[must_use]
pub fn has_pin_code(value: &str) -> bool {
    PIN_CODE.is_match(value)
}

/// True when the value holds at least two alphabetic tokens.
#[must_use]
pub fn is_full_name(value: &str) -> bool {
    value
        .split(|c: char| !c.is_alphabetic())
        .filter(|t| !t.is_empty())
        .count()
        >= 2
}

/// True when the value holds any non-blank text.
#[must_use]
pub fn is_non_blank(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Locates the 10-digit run inside a phone value.
#[must_use]
pub fn locate_phone(value: &str) -> Option<Match<'_>> {
    TEN_DIGITS.find(value)
}

/// Locates the 12-digit run inside an aadhaar value.
#[must_use]
pub fn locate_aadhaar(value: &str) -> Option<Match<'_>> {
    TWELVE_DIGITS.find(value)
}

/// Locates a 6-digit PIN code inside an address value.
#[must_use]
pub fn locate_pin_code(value: &str) -> Option<Match<'_>> {
    PIN_CODE.find(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_digit_run_guard() {
        assert!(is_phone("9876543210"));
        assert!(is_phone("call 9876543210 now"));
        // Embedded in a longer digit run: not a phone.
        assert!(!is_phone("98765432101"));
        assert!(!is_phone("123456789"));
    }

    #[test]
    fn test_aadhaar_grouping() {
        assert!(is_aadhaar("123456789012"));
        assert!(is_aadhaar("1234 5678 9012"));
        assert!(!is_aadhaar("1234-5678-9012"));
        assert!(!is_aadhaar("1234567890123"));
        assert!(!is_aadhaar("1234 56789012"));
    }

    #[test]
    fn test_passport_is_anchored() {
        assert!(is_passport("P1234567"));
        assert!(!is_passport("p1234567"));
        assert!(!is_passport("P123456"));
        assert!(!is_passport("my passport is P1234567"));
    }

    #[test]
    fn test_upi_shape() {
        assert!(is_upi("asha.rao@upi"));
        assert!(is_upi("user_99@ybl"));
        assert!(!is_upi("a@upi"));
        assert!(!is_upi("user@9pay"));
        assert!(!is_upi("no-at-sign"));
    }

    #[test]
    fn test_email_is_anchored() {
        assert!(is_email("a@b.com"));
        assert!(is_email("first.last+tag@mail.example.org"));
        assert!(!is_email("a@b"));
        assert!(!is_email("contact a@b.com today"));
    }

    #[test]
    fn test_ipv4_octet_bounds() {
        assert!(is_ipv4("192.168.1.1"));
        assert!(is_ipv4("last seen from 10.0.0.255"));
        assert!(!is_ipv4("256.1.1.1"));
        assert!(!is_ipv4("1.2.3"));
    }

    #[test]
    fn test_full_name_tokens() {
        assert!(is_full_name("Asha Rao"));
        assert!(is_full_name("asha    rao"));
        assert!(!is_full_name("Asha"));
        assert!(!is_full_name("  "));
    }

    #[test]
    fn test_pin_code() {
        assert!(has_pin_code("12 MG Road, 560001"));
        assert!(!has_pin_code("12 MG Road"));
        // Part of a longer run is not a PIN.
        assert!(!has_pin_code("5600011"));
    }
}

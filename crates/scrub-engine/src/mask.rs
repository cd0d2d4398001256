//! Masking engine.
//!
//! Each masker is a total function from value to redacted value: enough
//! structure survives for downstream analytics, the identifying middle does
//! not. A value that does not carry the expected shape degrades to the
//! sentinel token instead of passing through unmasked.

use crate::patterns;
use serde::{Deserialize, Serialize};

/// Masking options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaskOptions {
    /// Filler character for destroyed spans.
    pub mask_char: char,
    /// Replacement for values that cannot be masked shape-preservingly.
    pub sentinel: String,
}

impl Default for MaskOptions {
    fn default() -> Self {
        Self {
            mask_char: 'X',
            sentinel: "[REDACTED_PII]".to_string(),
        }
    }
}

impl MaskOptions {
    /// Sets the filler character.
    #[must_use]
    pub fn with_mask_char(mut self, mask_char: char) -> Self {
        self.mask_char = mask_char;
        self
    }

    /// Sets the sentinel token.
    #[must_use]
    pub fn with_sentinel(mut self, sentinel: impl Into<String>) -> Self {
        self.sentinel = sentinel.into();
        self
    }

    fn fill(&self, n: usize) -> String {
        std::iter::repeat(self.mask_char).take(n).collect()
    }
}

/// Replaces `value[start..end]` with `replacement`, keeping the rest.
fn splice(value: &str, start: usize, end: usize, replacement: &str) -> String {
    let mut out = String::with_capacity(value.len() + replacement.len());
    out.push_str(&value[..start]);
    out.push_str(replacement);
    out.push_str(&value[end..]);
    out
}

/// Keeps the first two and last two digits of the 10-digit run, destroying
/// the middle six. Surrounding text is preserved.
#[must_use]
pub fn phone(value: &str, opts: &MaskOptions) -> String {
    let Some(m) = patterns::locate_phone(value) else {
        return opts.sentinel.clone();
    };
    let run = m.as_str();
    let masked = format!("{}{}{}", &run[..2], opts.fill(6), &run[8..]);
    splice(value, m.start(), m.end(), &masked)
}

/// Destroys all digits except the last four, regrouped as `XXXX XXXX 9012`.
#[must_use]
pub fn aadhaar(value: &str, opts: &MaskOptions) -> String {
    let Some(m) = patterns::locate_aadhaar(value) else {
        return opts.sentinel.clone();
    };
    let digits: String = m.as_str().chars().filter(char::is_ascii_digit).collect();
    let masked = format!("{0} {0} {1}", opts.fill(4), &digits[8..]);
    splice(value, m.start(), m.end(), &masked)
}

/// Keeps the leading letter, destroys the seven digits.
#[must_use]
pub fn passport(value: &str, opts: &MaskOptions) -> String {
    if !patterns::is_passport(value) {
        return opts.sentinel.clone();
    }
    format!("{}{}", &value[..1], opts.fill(7))
}

/// Masks the handle of a UPI identifier, keeping the provider.
#[must_use]
pub fn upi(value: &str, opts: &MaskOptions) -> String {
    local_part(value, opts)
}

/// Masks the local part of an email address, keeping the domain.
#[must_use]
pub fn email(value: &str, opts: &MaskOptions) -> String {
    local_part(value, opts)
}

fn local_part(value: &str, opts: &MaskOptions) -> String {
    let Some((local, domain)) = value.split_once('@') else {
        return opts.sentinel.clone();
    };
    let masked = if local.chars().count() <= 2 {
        opts.fill(2)
    } else {
        let kept: String = local.chars().take(2).collect();
        format!("{kept}{}", opts.fill(3))
    };
    format!("{masked}@{domain}")
}

/// Keeps the first character of each whitespace-separated token.
#[must_use]
pub fn name(value: &str, opts: &MaskOptions) -> String {
    if value.trim().is_empty() {
        return opts.sentinel.clone();
    }
    value
        .split_whitespace()
        .map(|token| {
            let mut chars = token.chars();
            match chars.next() {
                Some(first) => format!("{first}{}", opts.fill(chars.count())),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Keeps a three-character prefix and any PIN code, destroying the rest.
#[must_use]
pub fn address(value: &str, opts: &MaskOptions) -> String {
    if value.trim().is_empty() {
        return opts.sentinel.clone();
    }
    let prefix = if value.chars().count() >= 3 {
        let head: String = value.chars().take(3).collect();
        format!("{head}{}", opts.fill(3))
    } else {
        opts.fill(3)
    };
    match patterns::locate_pin_code(value) {
        Some(pin) => format!("{prefix}..., {}", pin.as_str()),
        None => format!("{prefix}..."),
    }
}

/// Keeps the first and last octet, destroying the middle two.
#[must_use]
pub fn ip(value: &str, opts: &MaskOptions) -> String {
    let parts: Vec<&str> = value.trim().split('.').collect();
    match parts.as_slice() {
        [a, _, _, d] => format!("{a}.{fill}.{fill}.{d}", fill = opts.fill(3)),
        _ => opts.sentinel.clone(),
    }
}

/// Keeps the first and last three characters of long identifiers; short ones
/// are destroyed entirely.
#[must_use]
pub fn device(value: &str, opts: &MaskOptions) -> String {
    let count = value.chars().count();
    if count == 0 {
        return opts.sentinel.clone();
    }
    if count <= 6 {
        return opts.fill(6);
    }
    let head: String = value.chars().take(3).collect();
    let tail: String = value.chars().skip(count - 3).collect();
    format!("{head}{}{tail}", opts.fill(3))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts() -> MaskOptions {
        MaskOptions::default()
    }

    #[test]
    fn test_phone_keeps_edges() {
        assert_eq!(phone("9876543210", &opts()), "98XXXXXX10");
        // Surrounding text survives, only the run is rewritten.
        assert_eq!(phone("call 9876543210 now", &opts()), "call 98XXXXXX10 now");
        assert_eq!(phone("no digits here", &opts()), "[REDACTED_PII]");
    }

    #[test]
    fn test_aadhaar_keeps_last_four() {
        assert_eq!(aadhaar("1234 5678 9012", &opts()), "XXXX XXXX 9012");
        assert_eq!(aadhaar("123456789012", &opts()), "XXXX XXXX 9012");
        assert_eq!(aadhaar("short", &opts()), "[REDACTED_PII]");
    }

    #[test]
    fn test_passport_keeps_letter() {
        assert_eq!(passport("P1234567", &opts()), "PXXXXXXX");
        assert_eq!(passport("1234567", &opts()), "[REDACTED_PII]");
    }

    #[test]
    fn test_local_part_masking() {
        assert_eq!(email("asha.rao@mail.com", &opts()), "asXXX@mail.com");
        assert_eq!(email("a@b.com", &opts()), "XX@b.com");
        assert_eq!(email("not-an-email", &opts()), "[REDACTED_PII]");
        assert_eq!(upi("asharao@upi", &opts()), "asXXX@upi");
    }

    #[test]
    fn test_name_tokens() {
        assert_eq!(name("Asha Rao", &opts()), "AXXX RXX");
        assert_eq!(name("Asha", &opts()), "AXXX");
        assert_eq!(name("  ", &opts()), "[REDACTED_PII]");
    }

    #[test]
    fn test_address_keeps_prefix_and_pin() {
        assert_eq!(address("12 MG Road, 560001", &opts()), "12 XXX..., 560001");
        assert_eq!(address("12 MG Road", &opts()), "12 XXX...");
        assert_eq!(address("ab", &opts()), "XXX...");
    }

    #[test]
    fn test_ip_keeps_outer_octets() {
        assert_eq!(ip("192.168.1.1", &opts()), "192.XXX.XXX.1");
        assert_eq!(ip("not-an-ip", &opts()), "[REDACTED_PII]");
    }

    #[test]
    fn test_device_by_length() {
        assert_eq!(device("abc123", &opts()), "XXXXXX");
        assert_eq!(device("DEV-77F2-AA", &opts()), "DEVXXX-AA");
        assert_eq!(device("", &opts()), "[REDACTED_PII]");
    }

    #[test]
    fn test_custom_mask_char() {
        let opts = MaskOptions::default().with_mask_char('*');
        assert_eq!(phone("9876543210", &opts), "98******10");
    }
}

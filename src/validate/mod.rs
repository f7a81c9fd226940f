//! Format checks for CPF and MAC address input.

use once_cell::sync::Lazy;
use regex::Regex;

/// Six hex pairs, each joined by `:` or `-`. Separators may differ per group.
static MAC_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9A-Fa-f]{2}[:-]){5}([0-9A-Fa-f]{2})$").expect("static MAC pattern")
});

/// True when `input` carries exactly 11 digits once every non-digit is dropped.
///
/// Only the digit count is checked, not the CPF check digits.
pub fn is_valid_cpf(input: &str) -> bool {
    input.chars().filter(char::is_ascii_digit).count() == 11
}

/// True when `input` is a MAC address like `AA:BB:CC:DD:EE:FF` or `aa-bb-cc-dd-ee-ff`.
pub fn is_valid_mac(input: &str) -> bool {
    MAC_RE.is_match(input)
}

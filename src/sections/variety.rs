//! Character variety sections - uppercase, digit and symbol checks.

use secrecy::{ExposeSecret, SecretString};
use super::{RULE_BONUS, SectionResult};

fn check(password: &SecretString, present: fn(&char) -> bool, issue: &'static str) -> SectionResult {
    if password.expose_secret().chars().any(|c| present(&c)) {
        SectionResult::passed(RULE_BONUS)
    } else {
        SectionResult::failed(issue)
    }
}

/// Requires at least one `A`-`Z` letter.
pub fn uppercase_section(password: &SecretString) -> SectionResult {
    check(password, char::is_ascii_uppercase, "Add an Uppercase letter (A-Z)")
}

/// Requires at least one `0`-`9` digit.
pub fn digit_section(password: &SecretString) -> SectionResult {
    check(password, char::is_ascii_digit, "Add a Number (0-9)")
}

/// Requires at least one character outside `[A-Za-z0-9]`.
pub fn symbol_section(password: &SecretString) -> SectionResult {
    check(password, |c| !c.is_ascii_alphanumeric(), "Add a Symbol (!@#$)")
}

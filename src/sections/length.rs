//! Length sections - minimum length and long-password bonus.

use secrecy::{ExposeSecret, SecretString};
use super::{RULE_BONUS, SectionResult};

const MIN_LENGTH: usize = 8;
const LONG_LENGTH: usize = 12;

/// Length in UTF-16 code units, so characters outside the BMP count twice.
fn password_len(password: &SecretString) -> usize {
    password.expose_secret().encode_utf16().count()
}

/// Checks if the password meets the minimum length.
pub fn length_section(password: &SecretString) -> SectionResult {
    if password_len(password) < MIN_LENGTH {
        return SectionResult::failed("Too short (Minimum 8 chars)");
    }
    SectionResult::passed(RULE_BONUS)
}

/// Extra bonus for passwords longer than 12 characters. Never reports an issue.
pub fn long_password_section(password: &SecretString) -> SectionResult {
    if password_len(password) > LONG_LENGTH {
        return SectionResult::passed(RULE_BONUS);
    }
    SectionResult::passed(0)
}

//! Dictionary section - penalizes passwords containing a weak pattern.

use crate::weak_patterns::WeakPatterns;
use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;

const DICTIONARY_PENALTY: i64 = -30;

/// Checks the password against the weak pattern list (case-insensitive substring).
pub fn dictionary_section(password: &SecretString, patterns: &WeakPatterns) -> SectionResult {
    if patterns.matches(password.expose_secret()) {
        return SectionResult::penalized(
            DICTIONARY_PENALTY,
            "Contains common dictionary word (Avoid 'password', '123')",
        );
    }
    SectionResult::passed(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[test]
    fn test_dictionary_section_common_word() {
        let result = dictionary_section(&secret("admin1234!A"), &WeakPatterns::builtin());
        assert_eq!(result.points, -30);
        assert!(result.issue.is_some_and(|i| i.contains("dictionary")));
    }

    #[test]
    fn test_dictionary_section_case_insensitive() {
        let result = dictionary_section(&secret("QWERTYuiop"), &WeakPatterns::builtin());
        assert_eq!(result.points, -30);
    }

    #[test]
    fn test_dictionary_section_strong_password() {
        let result = dictionary_section(&secret("CorrectHorseBatteryStaple!9"), &WeakPatterns::builtin());
        assert_eq!(result, SectionResult::passed(0));
    }
}

//! Password scoring sections
//!
//! Each section checks one rule and reports its points and, when the rule
//! fails, an improvement message.

mod dictionary;
mod length;
mod variety;

pub use dictionary::dictionary_section;
pub use length::{length_section, long_password_section};
pub use variety::{digit_section, symbol_section, uppercase_section};

/// Points awarded by a passing composition rule.
pub const RULE_BONUS: i64 = 20;

/// Outcome of a single section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionResult {
    /// Signed contribution to the raw score.
    pub points: i64,
    /// Improvement message when the rule failed.
    pub issue: Option<&'static str>,
}

impl SectionResult {
    pub fn passed(points: i64) -> Self {
        Self { points, issue: None }
    }

    pub fn failed(issue: &'static str) -> Self {
        Self { points: 0, issue: Some(issue) }
    }

    pub fn penalized(points: i64, issue: &'static str) -> Self {
        Self { points, issue: Some(issue) }
    }
}

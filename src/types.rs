//! Result types produced by the password scorer.

use std::fmt;

/// Password score, always within `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct PasswordScore(u8);

impl PasswordScore {
    pub const MAX: u8 = 100;

    /// Builds a score from a raw accumulated value, clamping it to `0..=100`.
    pub fn new(raw: i64) -> Self {
        Self(raw.clamp(0, Self::MAX as i64) as u8)
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for PasswordScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Qualitative strength label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PasswordStrength {
    Weak,
    Medium,
    Good,
    Strong,
}

impl PasswordStrength {
    /// Maps a clamped score to its label. Bands: `<=40`, `>40`, `>60`, `>80`.
    pub fn from_score(score: PasswordScore) -> Self {
        match score.value() {
            81.. => PasswordStrength::Strong,
            61..=80 => PasswordStrength::Good,
            41..=60 => PasswordStrength::Medium,
            _ => PasswordStrength::Weak,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PasswordStrength::Weak => "Weak",
            PasswordStrength::Medium => "Medium",
            PasswordStrength::Good => "Good",
            PasswordStrength::Strong => "Strong",
        }
    }
}

impl fmt::Display for PasswordStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Illustrative crack-time bucket. Fixed per strength band, not computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CrackTime {
    /// Shown for an empty password.
    NotApplicable,
    Seconds,
    ThreeDays,
    FiveMonths,
    Centuries,
}

impl CrackTime {
    pub fn for_strength(strength: PasswordStrength) -> Self {
        match strength {
            PasswordStrength::Weak => CrackTime::Seconds,
            PasswordStrength::Medium => CrackTime::ThreeDays,
            PasswordStrength::Good => CrackTime::FiveMonths,
            PasswordStrength::Strong => CrackTime::Centuries,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CrackTime::NotApplicable => "--",
            CrackTime::Seconds => "Seconds",
            CrackTime::ThreeDays => "3 Days",
            CrackTime::FiveMonths => "5 Months",
            CrackTime::Centuries => "Centuries",
        }
    }
}

impl fmt::Display for CrackTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of scoring one password.
///
/// The strength label is derived from `score`; read it with
/// [`PasswordAssessment::strength`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordAssessment {
    pub score: PasswordScore,
    pub crack_time: CrackTime,
    /// Improvement messages in rule order (length, uppercase, digit, symbol, dictionary).
    pub issues: Vec<String>,
}

impl PasswordAssessment {
    pub fn strength(&self) -> PasswordStrength {
        PasswordStrength::from_score(self.score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_is_clamped() {
        assert_eq!(PasswordScore::new(-30).value(), 0);
        assert_eq!(PasswordScore::new(140).value(), 100);
        assert_eq!(PasswordScore::new(55).value(), 55);
    }

    #[test]
    fn test_strength_bands() {
        let cases = [
            (0, PasswordStrength::Weak),
            (40, PasswordStrength::Weak),
            (41, PasswordStrength::Medium),
            (60, PasswordStrength::Medium),
            (61, PasswordStrength::Good),
            (80, PasswordStrength::Good),
            (81, PasswordStrength::Strong),
            (100, PasswordStrength::Strong),
        ];
        for (raw, expected) in cases {
            assert_eq!(
                PasswordStrength::from_score(PasswordScore::new(raw)),
                expected,
                "score {}",
                raw
            );
        }
    }

    #[test]
    fn test_crack_time_labels() {
        assert_eq!(CrackTime::for_strength(PasswordStrength::Weak).label(), "Seconds");
        assert_eq!(CrackTime::for_strength(PasswordStrength::Medium).label(), "3 Days");
        assert_eq!(CrackTime::for_strength(PasswordStrength::Good).label(), "5 Months");
        assert_eq!(CrackTime::for_strength(PasswordStrength::Strong).label(), "Centuries");
        assert_eq!(CrackTime::NotApplicable.to_string(), "--");
    }
}

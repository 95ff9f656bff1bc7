//! Link classifier - flags insecure transport and brand impersonation.

use std::fmt;
use thiserror::Error;

use crate::brands::BrandRegistry;
use crate::extract::{find_url, hostname};

/// Conditions reported to the caller instead of a verdict.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassifyError {
    #[error("Please paste a link first")]
    EmptyInput,
    #[error("No valid URL found")]
    NoUrlFound,
}

/// Classification outcome for a link.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// Host is under an official brand domain.
    Verified,
    /// Plain `http://` link.
    UnsafeProtocol,
    /// Host contains a brand keyword but is not under its official domain.
    /// Carries the brand name, uppercased.
    Phishing(String),
    /// Host is unknown to the registry.
    Suspicious,
    /// The URL could not be parsed.
    Invalid,
}

impl Verdict {
    pub fn title(&self) -> String {
        match self {
            Verdict::Verified => "VERIFIED LEGITIMATE".to_string(),
            Verdict::UnsafeProtocol => "UNSAFE PROTOCOL".to_string(),
            Verdict::Phishing(brand) => format!("PHISHING ({brand})"),
            Verdict::Suspicious => "SUSPICIOUS".to_string(),
            Verdict::Invalid => "INVALID URL".to_string(),
        }
    }

    /// Only a verified official domain counts as safe.
    pub fn is_safe(&self) -> bool {
        matches!(self, Verdict::Verified)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.title())
    }
}

/// A verdict together with what it was computed from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassificationVerdict {
    pub verdict: Verdict,
    /// The URL substring found in the input (lowercased).
    pub url: String,
    /// Parsed hostname. `None` when the URL was malformed.
    pub domain: Option<String>,
}

impl ClassificationVerdict {
    pub fn title(&self) -> String {
        self.verdict.title()
    }

    pub fn description(&self) -> String {
        match &self.verdict {
            Verdict::Verified => "This is a verified official domain.".to_string(),
            Verdict::UnsafeProtocol => {
                "This site uses HTTP (Not Encrypted). Data can be intercepted.".to_string()
            }
            Verdict::Phishing(brand) => format!(
                "This link mimics {brand} but the domain '{}' is fake.",
                self.domain.as_deref().unwrap_or_default()
            ),
            Verdict::Suspicious => {
                "Domain not in safety database. Proceed with caution.".to_string()
            }
            Verdict::Invalid => "The link structure is malformed.".to_string(),
        }
    }

    pub fn is_safe(&self) -> bool {
        self.verdict.is_safe()
    }
}

/// Classifies links against a brand registry.
#[derive(Debug, Clone, Default)]
pub struct LinkClassifier {
    registry: BrandRegistry,
}

impl LinkClassifier {
    pub fn new(registry: BrandRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &BrandRegistry {
        &self.registry
    }

    /// Classifies the first URL found in `text`.
    ///
    /// Checks run in a fixed order: parse, plain HTTP, official domain, brand
    /// keyword. The first check that decides wins.
    ///
    /// # Errors
    ///
    /// - [`ClassifyError::EmptyInput`] if `text` is blank
    /// - [`ClassifyError::NoUrlFound`] if `text` contains no URL
    pub fn classify(&self, text: &str) -> Result<ClassificationVerdict, ClassifyError> {
        let input = text.to_lowercase();
        let input = input.trim();
        if input.is_empty() {
            return Err(ClassifyError::EmptyInput);
        }

        let raw = find_url(input).ok_or(ClassifyError::NoUrlFound)?;

        let verdict_for = |verdict: Verdict, domain: Option<String>| {
            #[cfg(feature = "tracing")]
            tracing::debug!(url = raw, verdict = %verdict, "link classified");
            ClassificationVerdict {
                verdict,
                url: raw.to_string(),
                domain,
            }
        };

        let Some(domain) = hostname(raw) else {
            return Ok(verdict_for(Verdict::Invalid, None));
        };

        if raw.starts_with("http://") {
            return Ok(verdict_for(Verdict::UnsafeProtocol, Some(domain)));
        }

        if self.registry.is_official(&domain) {
            return Ok(verdict_for(Verdict::Verified, Some(domain)));
        }

        let verdict = match self.registry.impersonated_brand(&domain) {
            Some(brand) => Verdict::Phishing(brand.keyword().to_uppercase()),
            None => Verdict::Suspicious,
        };
        Ok(verdict_for(verdict, Some(domain)))
    }
}

/// Classifies the first URL in `text` against the built-in brand registry.
pub fn classify_link(text: &str) -> Result<ClassificationVerdict, ClassifyError> {
    LinkClassifier::default().classify(text)
}

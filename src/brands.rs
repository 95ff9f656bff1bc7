//! Brand registry - known brand keywords and their official domain suffixes.

use thiserror::Error;

const BUILTIN_BRANDS: [(&str, &str); 15] = [
    ("facebook", "facebook.com"),
    ("instagram", "instagram.com"),
    ("google", "google.com"),
    ("gmail", "google.com"),
    ("sbi", "onlinesbi.sbi"),
    ("amazon", "amazon.in"),
    ("flipkart", "flipkart.com"),
    ("netflix", "netflix.com"),
    ("paytm", "paytm.com"),
    ("whatsapp", "whatsapp.com"),
    ("twitter", "twitter.com"),
    ("x", "x.com"),
    ("github", "github.com"),
    ("hdfc", "hdfcbank.com"),
    ("icici", "icicibank.com"),
];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Brand keyword must be lowercase alphanumeric: {0:?}")]
    InvalidKeyword(String),
    #[error("Duplicate brand keyword: {0}")]
    DuplicateKeyword(String),
    #[error("Empty domain suffix for brand: {0}")]
    EmptySuffix(String),
}

/// A brand keyword and the domain suffix it officially lives under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrandEntry {
    keyword: String,
    suffix: String,
}

impl BrandEntry {
    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }
}

/// Ordered brand list. Order matters: the first matching keyword wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrandRegistry {
    entries: Vec<BrandEntry>,
}

impl Default for BrandRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl BrandRegistry {
    /// The built-in registry of commonly impersonated services.
    pub fn builtin() -> Self {
        Self {
            entries: BUILTIN_BRANDS
                .iter()
                .map(|(keyword, suffix)| BrandEntry {
                    keyword: keyword.to_string(),
                    suffix: suffix.to_string(),
                })
                .collect(),
        }
    }

    /// Builds a registry from `(keyword, suffix)` pairs, keeping their order.
    ///
    /// Keywords must be non-empty lowercase ASCII alphanumerics and unique.
    /// Several keywords may share one suffix.
    pub fn from_entries<I, K, S>(entries: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = (K, S)>,
        K: Into<String>,
        S: Into<String>,
    {
        let mut built: Vec<BrandEntry> = Vec::new();
        for (keyword, suffix) in entries {
            let keyword = keyword.into();
            let suffix = suffix.into();

            let valid = !keyword.is_empty()
                && keyword
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit());
            if !valid {
                return Err(RegistryError::InvalidKeyword(keyword));
            }
            if built.iter().any(|e| e.keyword == keyword) {
                return Err(RegistryError::DuplicateKeyword(keyword));
            }
            if suffix.trim().is_empty() {
                return Err(RegistryError::EmptySuffix(keyword));
            }

            built.push(BrandEntry {
                keyword,
                suffix: suffix.trim().to_lowercase(),
            });
        }
        Ok(Self { entries: built })
    }

    pub fn entries(&self) -> &[BrandEntry] {
        &self.entries
    }

    /// True when `hostname` ends with any official suffix.
    ///
    /// Plain string suffix test, so `secure.facebook.com` passes.
    pub fn is_official(&self, hostname: &str) -> bool {
        self.entries.iter().any(|e| hostname.ends_with(e.suffix.as_str()))
    }

    /// Returns the first brand whose keyword appears in `hostname` while the
    /// hostname is not under that brand's suffix.
    ///
    /// `.` and `-` are removed before the containment test, so
    /// `face-book.example` still contains `facebook`.
    pub fn impersonated_brand(&self, hostname: &str) -> Option<&BrandEntry> {
        let compact: String = hostname.chars().filter(|c| !matches!(c, '.' | '-')).collect();
        self.entries.iter().find(|e| {
            compact.contains(e.keyword.as_str()) && !hostname.ends_with(e.suffix.as_str())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_order_is_preserved() {
        let registry = BrandRegistry::builtin();
        let keywords: Vec<&str> = registry.entries().iter().map(|e| e.keyword()).collect();
        assert_eq!(keywords.len(), 15);
        assert_eq!(keywords[0], "facebook");
        assert_eq!(keywords[3], "gmail");
        assert_eq!(keywords[11], "x");
        assert_eq!(keywords[14], "icici");
    }

    #[test]
    fn test_shared_suffix() {
        let registry = BrandRegistry::builtin();
        let google: Vec<&str> = registry
            .entries()
            .iter()
            .filter(|e| e.suffix() == "google.com")
            .map(|e| e.keyword())
            .collect();
        assert_eq!(google, vec!["google", "gmail"]);
    }

    #[test]
    fn test_is_official_suffix_match() {
        let registry = BrandRegistry::builtin();
        assert!(registry.is_official("facebook.com"));
        assert!(registry.is_official("secure.facebook.com"));
        assert!(registry.is_official("www.onlinesbi.sbi"));
        assert!(!registry.is_official("facebook.com.evil.io"));
    }

    #[test]
    fn test_impersonated_brand_first_match_wins() {
        let registry = BrandRegistry::builtin();
        let brand = registry.impersonated_brand("netflix-facebook.io").unwrap();
        assert_eq!(brand.keyword(), "facebook");
    }

    #[test]
    fn test_impersonated_brand_ignores_separators() {
        let registry = BrandRegistry::builtin();
        let brand = registry.impersonated_brand("pay-tm.login.io").unwrap();
        assert_eq!(brand.keyword(), "paytm");
    }

    #[test]
    fn test_impersonated_brand_none() {
        let registry = BrandRegistry::builtin();
        assert!(registry.impersonated_brand("randomsite123.biz").is_none());
    }

    #[test]
    fn test_from_entries_valid() {
        let registry =
            BrandRegistry::from_entries([("acme", "Acme.com"), ("acmemail", "acme.com")]).unwrap();
        assert_eq!(registry.entries().len(), 2);
        assert_eq!(registry.entries()[0].suffix(), "acme.com");
        assert!(registry.is_official("mail.acme.com"));
    }

    #[test]
    fn test_from_entries_invalid_keyword() {
        let result = BrandRegistry::from_entries([("Acme", "acme.com")]);
        assert_eq!(result, Err(RegistryError::InvalidKeyword("Acme".to_string())));

        let result = BrandRegistry::from_entries([("", "acme.com")]);
        assert!(matches!(result, Err(RegistryError::InvalidKeyword(_))));

        let result = BrandRegistry::from_entries([("ac-me", "acme.com")]);
        assert!(matches!(result, Err(RegistryError::InvalidKeyword(_))));
    }

    #[test]
    fn test_from_entries_duplicate_keyword() {
        let result = BrandRegistry::from_entries([("acme", "acme.com"), ("acme", "acme.org")]);
        assert_eq!(result, Err(RegistryError::DuplicateKeyword("acme".to_string())));
    }

    #[test]
    fn test_from_entries_empty_suffix() {
        let result = BrandRegistry::from_entries([("acme", "  ")]);
        assert_eq!(result, Err(RegistryError::EmptySuffix("acme".to_string())));
    }
}

//! Phishing link and password strength heuristics
//!
//! Two independent, stateless engines:
//!
//! - a link classifier that finds the first URL in pasted text and flags
//!   plain HTTP, brand impersonation or unknown domains
//! - a password scorer that rates a password from 0 to 100 against
//!   composition rules and weak patterns, plus a hardener that suggests a
//!   stronger variant
//!
//! # Features
//!
//! - `async` (default): Enables debounced scoring with cancellation support
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_WEAK_PATTERNS_PATH`: Extra weak patterns file read by
//!   [`WeakPatterns::from_env`] (one pattern per line)
//!
//! # Example
//!
//! ```rust
//! use link_pwd_guard::{classify_link, harden_password, score_password, Verdict};
//! use secrecy::SecretString;
//!
//! let result = classify_link("Check out https://facebook-secure-login.net now").unwrap();
//! assert_eq!(result.verdict, Verdict::Phishing("FACEBOOK".to_string()));
//!
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//! let assessment = score_password(&password);
//! println!("Score: {}", assessment.score);
//! println!("Strength: {}", assessment.strength());
//! println!("Crack time: {}", assessment.crack_time);
//!
//! let suggestion = harden_password(&password);
//! assert!(suggestion.is_some());
//! ```

// Internal modules
mod brands;
mod classifier;
mod evaluator;
mod extract;
mod hardener;
mod sections;
mod types;
mod weak_patterns;

// Public API
pub use brands::{BrandEntry, BrandRegistry, RegistryError};
pub use classifier::{ClassificationVerdict, ClassifyError, LinkClassifier, Verdict, classify_link};
pub use evaluator::{PasswordScorer, score_password};
pub use hardener::harden_password;
pub use types::{CrackTime, PasswordAssessment, PasswordScore, PasswordStrength};
pub use weak_patterns::{WEAK_PATTERNS_PATH_VAR, WeakPatterns, WeakPatternsError, weak_patterns_path};

#[cfg(feature = "async")]
pub use evaluator::score_password_tx;

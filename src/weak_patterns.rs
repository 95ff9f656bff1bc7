//! Weak pattern management module
//!
//! Holds the substrings that mark a password as dictionary-like and handles
//! loading additional patterns from an external file.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable naming an extra weak-pattern file.
pub const WEAK_PATTERNS_PATH_VAR: &str = "PWD_WEAK_PATTERNS_PATH";

const BUILTIN_PATTERNS: [&str; 5] = ["password", "1234", "admin", "qwerty", "user"];

#[derive(Error, Debug)]
pub enum WeakPatternsError {
    #[error("Weak pattern file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read weak pattern file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Weak pattern file is empty")]
    EmptyFile,
}

/// Ordered, lowercase set of weak substrings.
///
/// Immutable once built; pass it to a [`crate::PasswordScorer`] to use it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeakPatterns {
    patterns: Vec<String>,
}

impl Default for WeakPatterns {
    fn default() -> Self {
        Self::builtin()
    }
}

impl WeakPatterns {
    /// The fixed list: `password`, `1234`, `admin`, `qwerty`, `user`.
    pub fn builtin() -> Self {
        Self {
            patterns: BUILTIN_PATTERNS.iter().map(|p| p.to_string()).collect(),
        }
    }

    /// Returns the built-in list extended with the patterns of `path`.
    ///
    /// One pattern per line; lines are trimmed and lowercased, blank lines
    /// and duplicates are skipped.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File does not exist
    /// - File cannot be read
    /// - File has no patterns
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, WeakPatternsError> {
        let path = path.as_ref();

        if !path.exists() {
            #[cfg(feature = "tracing")]
            tracing::error!("Weak pattern loading FAILED: FileNotFound {:?}", path);
            return Err(WeakPatternsError::FileNotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;

        if content.trim().is_empty() {
            #[cfg(feature = "tracing")]
            tracing::error!("Weak pattern loading FAILED: Empty file {:?}", path);
            return Err(WeakPatternsError::EmptyFile);
        }

        let mut set = Self::builtin();
        for line in content.lines() {
            let pattern = line.trim().to_lowercase();
            if !pattern.is_empty() && !set.patterns.contains(&pattern) {
                set.patterns.push(pattern);
            }
        }

        #[cfg(feature = "tracing")]
        tracing::info!("Weak patterns loaded: {} patterns from {:?}", set.len(), path);

        Ok(set)
    }

    /// Loads from `PWD_WEAK_PATTERNS_PATH` when set, otherwise the built-in list.
    pub fn from_env() -> Result<Self, WeakPatternsError> {
        match weak_patterns_path() {
            Some(path) => Self::from_path(path),
            None => Ok(Self::builtin()),
        }
    }

    /// Case-insensitive substring test against every pattern.
    pub fn matches(&self, password: &str) -> bool {
        let lower = password.to_lowercase();
        self.patterns.iter().any(|p| lower.contains(p.as_str()))
    }

    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

/// Returns the extra weak-pattern file path from the environment, if any.
pub fn weak_patterns_path() -> Option<PathBuf> {
    std::env::var(WEAK_PATTERNS_PATH_VAR).ok().map(PathBuf::from)
}

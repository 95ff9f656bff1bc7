//! Password scorer - runs the scoring sections and builds the assessment.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::sections::{
    SectionResult, dictionary_section, digit_section, length_section, long_password_section,
    symbol_section, uppercase_section,
};
use crate::types::{CrackTime, PasswordAssessment, PasswordScore, PasswordStrength};
use crate::weak_patterns::WeakPatterns;

/// Scores passwords against the composition rules and a weak pattern list.
#[derive(Debug, Clone, Default)]
pub struct PasswordScorer {
    patterns: WeakPatterns,
}

impl PasswordScorer {
    pub fn new(patterns: WeakPatterns) -> Self {
        Self { patterns }
    }

    pub fn patterns(&self) -> &WeakPatterns {
        &self.patterns
    }

    /// Scores `password`. Total: every input, including empty, yields an assessment.
    pub fn score(&self, password: &SecretString) -> PasswordAssessment {
        let patterns = &self.patterns;
        let mut raw: i64 = 0;
        let mut issues = Vec::new();

        // Order fixes the order of the issue list.
        let sections: [(&str, &dyn Fn(&SecretString) -> SectionResult); 6] = [
            ("length", &length_section),
            ("uppercase", &uppercase_section),
            ("digit", &digit_section),
            ("symbol", &symbol_section),
            ("dictionary", &|p: &SecretString| dictionary_section(p, patterns)),
            ("long", &long_password_section),
        ];

        for (_section_name, section_fn) in sections {
            let result = section_fn(password);

            #[cfg(feature = "tracing")]
            tracing::trace!(section = _section_name, points = result.points, "section evaluated");

            raw += result.points;
            if let Some(issue) = result.issue {
                issues.push(issue.to_string());
            }
        }

        let score = PasswordScore::new(raw);

        if password.expose_secret().is_empty() {
            return PasswordAssessment {
                score,
                crack_time: CrackTime::NotApplicable,
                issues: Vec::new(),
            };
        }

        PasswordAssessment {
            score,
            crack_time: CrackTime::for_strength(PasswordStrength::from_score(score)),
            issues,
        }
    }

    /// Debounced scoring for callers that re-score on every keystroke.
    ///
    /// Waits briefly, then scores and sends the assessment unless `token`
    /// was cancelled in the meantime.
    #[cfg(feature = "async")]
    pub async fn score_tx(
        &self,
        password: &SecretString,
        token: CancellationToken,
        tx: mpsc::Sender<PasswordAssessment>,
    ) {
        use std::time::Duration;

        tokio::select! {
            _ = token.cancelled() => {
                #[cfg(feature = "tracing")]
                tracing::debug!("password scoring cancelled before debounce elapsed");
                return;
            }
            _ = tokio::time::sleep(Duration::from_millis(DEBOUNCE_MS)) => {}
        }

        let assessment = self.score(password);

        if let Err(_e) = tx.send(assessment).await {
            #[cfg(feature = "tracing")]
            tracing::error!("Failed to send password assessment: {}", _e);
        }
    }
}

#[cfg(feature = "async")]
const DEBOUNCE_MS: u64 = 300;

/// Scores `password` with the built-in weak pattern list.
pub fn score_password(password: &SecretString) -> PasswordAssessment {
    PasswordScorer::default().score(password)
}

/// Async version of [`score_password`] that delivers the result via channel.
#[cfg(feature = "async")]
pub async fn score_password_tx(
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<PasswordAssessment>,
) {
    #[cfg(feature = "tracing")]
    tracing::info!("password scoring is about to start...");

    PasswordScorer::default().score_tx(password, token, tx).await;
}


#[cfg(all(test, feature = "async"))]
mod async_tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[tokio::test(start_paused = true)]
    async fn test_score_password_tx() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();

        score_password_tx(&secret("TestPass123!"), token, tx).await;

        let assessment = rx.recv().await.expect("Should receive assessment");
        assert_eq!(assessment.score.value(), 80);
        assert_eq!(assessment.strength(), PasswordStrength::Good);
    }

    #[tokio::test(start_paused = true)]
    async fn test_score_tx_cancelled() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();
        token.cancel();

        PasswordScorer::default()
            .score_tx(&secret("TestPass123!"), token, tx)
            .await;

        // sender dropped without sending
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_score_tx_receiver_dropped() {
        let (tx, rx) = mpsc::channel(1);
        drop(rx);

        // must not panic when nobody listens
        score_password_tx(&secret("TestPass123!"), CancellationToken::new(), tx).await;
    }
}

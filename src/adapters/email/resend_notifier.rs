//! Resend implementation of ResultNotifier.
//!
//! Sends the results summary through the Resend HTTP API with bounded
//! exponential-backoff retries. Failures after the final attempt are
//! reported as a non-fatal `NotificationError`; the submission that
//! triggered the email has already committed and is never affected.

use async_trait::async_trait;
use secrecy::{ExposeSecret, Secret};
use serde_json::json;
use std::time::Duration;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::{ResultNotifier, ResultsEmail};

const RESEND_API_URL: &str = "https://api.resend.com/emails";

/// Configuration for the Resend notifier.
#[derive(Debug, Clone)]
pub struct ResendNotifierConfig {
    pub api_key: Secret<String>,
    /// Formatted From header, e.g. "Culture Compass <results@example.com>".
    pub from: String,
    /// Total send attempts before giving up.
    pub max_attempts: u32,
    /// Delay before the first retry; doubles per attempt.
    pub base_delay: Duration,
}

impl ResendNotifierConfig {
    /// Config with the standard retry policy (3 attempts, 1s base).
    pub fn new(api_key: Secret<String>, from: impl Into<String>) -> Self {
        Self {
            api_key,
            from: from.into(),
            max_attempts: 3,
            base_delay: Duration::from_secs(1),
        }
    }
}

/// Resend implementation of the ResultNotifier port.
pub struct ResendNotifier {
    client: reqwest::Client,
    config: ResendNotifierConfig,
}

impl ResendNotifier {
    /// Creates a notifier with its own HTTP client.
    pub fn new(config: ResendNotifierConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    fn render_html(email: &ResultsEmail) -> String {
        let mut sections = String::new();
        for (label, score) in &email.section_scores {
            sections.push_str(&format!("<li>{}: {}%</li>", label, score));
        }

        let mut recommendations = String::new();
        for (area, title) in &email.top_recommendations {
            recommendations.push_str(&format!("<li><strong>{}</strong>: {}</li>", area, title));
        }

        format!(
            "<h1>Your {} results</h1>\
             <p>Overall score: <strong>{}</strong> &mdash; {}</p>\
             <p>{}</p>\
             <h2>Section scores</h2><ul>{}</ul>\
             <h2>Where to focus next</h2><ul>{}</ul>",
            email.assessment_type.as_str().to_uppercase(),
            email.score,
            email.level,
            email.level_description,
            sections,
            recommendations,
        )
    }

    async fn send_once(&self, email: &ResultsEmail) -> Result<(), String> {
        let body = json!({
            "from": self.config.from,
            "to": [email.recipient],
            "subject": format!(
                "Your {} assessment results: {}",
                email.assessment_type.as_str().to_uppercase(),
                email.level
            ),
            "html": Self::render_html(email),
        });

        let response = self
            .client
            .post(RESEND_API_URL)
            .bearer_auth(self.config.api_key.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(|e| format!("request failed: {}", e))?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(format!("Resend returned status {}", response.status()))
        }
    }
}

#[async_trait]
impl ResultNotifier for ResendNotifier {
    async fn send_results(&self, email: &ResultsEmail) -> Result<(), DomainError> {
        let mut delay = self.config.base_delay;
        let mut last_error = String::new();

        for attempt in 1..=self.config.max_attempts.max(1) {
            match self.send_once(email).await {
                Ok(()) => {
                    if attempt > 1 {
                        tracing::info!(
                            recipient = %email.recipient,
                            attempt,
                            "results email delivered after retry"
                        );
                    }
                    return Ok(());
                }
                Err(e) => {
                    tracing::warn!(
                        recipient = %email.recipient,
                        attempt,
                        error = %e,
                        "results email attempt failed"
                    );
                    last_error = e;
                }
            }

            if attempt < self.config.max_attempts {
                tokio::time::sleep(delay).await;
                delay *= 2;
            }
        }

        Err(DomainError::new(
            ErrorCode::NotificationError,
            format!(
                "results email to {} failed after {} attempts: {}",
                email.recipient, self.config.max_attempts, last_error
            ),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::assessment::AssessmentType;

    fn sample_email() -> ResultsEmail {
        ResultsEmail {
            recipient: "artisan@example.com".to_string(),
            assessment_type: AssessmentType::Cirf,
            score: 62,
            level: "Established".to_string(),
            level_description: "Solid performance with some areas for improvement.".to_string(),
            section_scores: vec![("Cultural Capital".to_string(), 70)],
            top_recommendations: vec![(
                "Financial Resilience".to_string(),
                "Build Operating Reserves".to_string(),
            )],
        }
    }

    #[test]
    fn html_rendering_includes_scores_and_recommendations() {
        let html = ResendNotifier::render_html(&sample_email());
        assert!(html.contains("CIRF"));
        assert!(html.contains("62"));
        assert!(html.contains("Cultural Capital: 70%"));
        assert!(html.contains("Build Operating Reserves"));
    }

    #[test]
    fn config_defaults_to_three_attempts() {
        let config = ResendNotifierConfig::new(Secret::new("re_test".to_string()), "Test <t@e.com>");
        assert_eq!(config.max_attempts, 3);
        assert_eq!(config.base_delay, Duration::from_secs(1));
    }
}

//! # Suggestion gateway — Gemini-backed goal breakdown
//!
//! Thin client over the Gemini `generateContent` REST endpoint, used for two
//! deliberately asymmetric features:
//!
//! - [`SuggestionClient::suggest_breakdown`] — an explicit user action. Asks
//!   for a structured-output JSON array of [`SuggestedMilestone`]s and fails
//!   closed: a missing key, an upstream failure, or a payload that does not
//!   match the schema all surface as a [`SuggestError`] for the view to
//!   render as a blocking message.
//! - [`SuggestionClient::generate_motivation`] — ambient decoration. Never
//!   fails: any problem yields a fixed fallback string so the dashboard is
//!   never blocked by the AI being unavailable.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use thiserror::Error;

use crate::models::CreateMilestoneRequest;

const GEMINI_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
const GEMINI_MODEL: &str = "gemini-2.5-flash";

const MOTIVATION_NO_KEY: &str = "Keep pushing forward! You're doing great.";
const MOTIVATION_EMPTY: &str = "Great job on your progress!";
const MOTIVATION_ERROR: &str = "Every step counts!";

/// Failure of the breakdown flow. Rendered verbatim by the view.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SuggestError {
    #[error("AI assistant is not configured")]
    MissingKey,

    #[error("Suggestion request failed: {0}")]
    Upstream(String),

    /// The model produced text that does not match the suggestion schema.
    /// Rejected rather than partially trusted.
    #[error("Could not read the AI response: {0}")]
    InvalidPayload(String),
}

/// An AI-generated candidate milestone. Transient — it becomes a
/// [`CreateMilestoneRequest`] only when the user accepts it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestedMilestone {
    pub title: String,
    pub description: String,
    pub days_from_now: i64,
}

impl SuggestedMilestone {
    /// Convert to a create request with `achieve_date = today + daysFromNow`.
    pub fn to_create_request(&self, today: NaiveDate) -> CreateMilestoneRequest {
        CreateMilestoneRequest {
            title: self.title.clone(),
            description: Some(self.description.clone()),
            achieve_date: Some(today + Duration::days(self.days_from_now)),
        }
    }
}

/// Client for the external generative-completion API.
#[derive(Clone, Debug)]
pub struct SuggestionClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl SuggestionClient {
    /// A `None` key disables the breakdown flow and puts motivation into
    /// fallback mode.
    pub fn new(api_key: Option<String>) -> Self {
        Self::with_base_url(GEMINI_BASE, api_key)
    }

    pub fn with_base_url(base_url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            api_key,
        }
    }

    pub fn has_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Break `goal` into 3-5 suggested milestones.
    pub async fn suggest_breakdown(
        &self,
        goal: &str,
    ) -> Result<Vec<SuggestedMilestone>, SuggestError> {
        let Some(key) = self.api_key.as_deref() else {
            return Err(SuggestError::MissingKey);
        };

        let prompt = format!(
            "I have a main goal: \"{goal}\". \
             Break this down into 3-5 concrete, actionable milestones. \
             For each milestone, provide a title, a short description, and a \
             suggested number of days from today to achieve it (logical progression)."
        );

        let body = json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": {
                    "type": "ARRAY",
                    "items": {
                        "type": "OBJECT",
                        "properties": {
                            "title": { "type": "STRING" },
                            "description": { "type": "STRING" },
                            "daysFromNow": { "type": "INTEGER" },
                        },
                        "required": ["title", "description", "daysFromNow"],
                    },
                },
            },
        });

        let text = self.generate(key, body).await.map_err(|err| {
            tracing::error!("suggestion request failed: {err}");
            err
        })?;
        parse_suggestions(text.as_deref().unwrap_or(""))
    }

    /// A one-sentence motivational quote. Infallible by design.
    pub async fn generate_motivation(&self, completed_count: usize) -> String {
        let Some(key) = self.api_key.as_deref() else {
            return MOTIVATION_NO_KEY.to_string();
        };

        let prompt = format!(
            "Write a short, punchy, 1-sentence motivational quote for a user \
             who has completed {completed_count} milestones. Avoid using Markdown formatting."
        );
        let body = json!({ "contents": [{ "parts": [{ "text": prompt }] }] });

        match self.generate(key, body).await {
            Ok(Some(text)) => text.replace("**", ""),
            Ok(None) => MOTIVATION_EMPTY.to_string(),
            Err(_) => MOTIVATION_ERROR.to_string(),
        }
    }

    /// One `generateContent` call; returns the first candidate's text.
    async fn generate(&self, key: &str, body: Value) -> Result<Option<String>, SuggestError> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, GEMINI_MODEL, key
        );

        let response = self
            .http
            .post(url)
            .json(&body)
            .send()
            .await
            .map_err(|e| SuggestError::Upstream(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SuggestError::Upstream(format!("status {status}")));
        }

        let data: Value = response
            .json()
            .await
            .map_err(|e| SuggestError::Upstream(e.to_string()))?;

        Ok(candidate_text(&data))
    }
}

/// Extract `candidates[0].content.parts[0].text` from a Gemini response.
fn candidate_text(data: &Value) -> Option<String> {
    data["candidates"][0]["content"]["parts"][0]["text"]
        .as_str()
        .map(str::to_string)
}

/// Validate the model's text against the suggestion schema.
///
/// No text at all means "no suggestions"; text that fails to parse as the
/// schema is rejected outright.
fn parse_suggestions(text: &str) -> Result<Vec<SuggestedMilestone>, SuggestError> {
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_json::from_str(text).map_err(|e| SuggestError::InvalidPayload(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_suggestions_empty_text() {
        assert_eq!(parse_suggestions("").unwrap(), Vec::new());
        assert_eq!(parse_suggestions("  \n ").unwrap(), Vec::new());
    }

    #[test]
    fn test_parse_suggestions_valid_payload() {
        let text = r#"[
            {"title": "Buy running shoes", "description": "Get fitted", "daysFromNow": 3},
            {"title": "Run 1k", "description": "First short run", "daysFromNow": 7}
        ]"#;
        let suggestions = parse_suggestions(text).unwrap();
        assert_eq!(suggestions.len(), 2);
        assert_eq!(suggestions[0].title, "Buy running shoes");
        assert_eq!(suggestions[1].days_from_now, 7);
    }

    #[test]
    fn test_parse_suggestions_rejects_wrong_shape() {
        // Not an array
        assert!(matches!(
            parse_suggestions(r#"{"title": "x"}"#),
            Err(SuggestError::InvalidPayload(_))
        ));
        // Missing required field
        assert!(matches!(
            parse_suggestions(r#"[{"title": "x", "description": "y"}]"#),
            Err(SuggestError::InvalidPayload(_))
        ));
        // Wrong type for daysFromNow
        assert!(matches!(
            parse_suggestions(r#"[{"title": "x", "description": "y", "daysFromNow": "soon"}]"#),
            Err(SuggestError::InvalidPayload(_))
        ));
    }

    #[test]
    fn test_accepting_a_suggestion_offsets_today() {
        let suggestion = SuggestedMilestone {
            title: "Run 5k".to_string(),
            description: "Full distance".to_string(),
            days_from_now: 10,
        };
        let today: NaiveDate = "2024-12-31".parse().unwrap();

        let req = suggestion.to_create_request(today);
        assert_eq!(req.title, "Run 5k");
        assert_eq!(req.achieve_date, Some("2025-01-10".parse().unwrap()));

        // And it serializes as YYYY-MM-DD on the wire
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["achieveDate"], "2025-01-10");
    }

    #[test]
    fn test_candidate_text_extraction() {
        let data = json!({
            "candidates": [{ "content": { "parts": [{ "text": "hello" }] } }]
        });
        assert_eq!(candidate_text(&data).as_deref(), Some("hello"));
        assert_eq!(candidate_text(&json!({})), None);
    }

    #[tokio::test]
    async fn test_breakdown_without_key_fails_closed() {
        let client = SuggestionClient::new(None);
        assert_eq!(
            client.suggest_breakdown("Run a marathon").await,
            Err(SuggestError::MissingKey)
        );
    }

    #[tokio::test]
    async fn test_motivation_without_key_uses_fallback() {
        let client = SuggestionClient::new(None);
        assert_eq!(client.generate_motivation(3).await, MOTIVATION_NO_KEY);
    }

    #[tokio::test]
    async fn test_motivation_never_fails_on_upstream_error() {
        // Points at a closed port; the transport error must collapse into
        // the fallback string.
        let client = SuggestionClient::with_base_url(
            "http://127.0.0.1:1",
            Some("test-key".to_string()),
        );
        assert_eq!(client.generate_motivation(1).await, MOTIVATION_ERROR);
    }
}

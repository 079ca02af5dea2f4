//! Birthday insights via the Gemini generative-text API.
//!
//! One blocking request per submission, run on a worker thread owned by
//! the UI state. Insights are decorative: every failure path (missing
//! key, network error, bad status, malformed payload) resolves to the
//! static fallback payload instead of surfacing an error.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use log::{info, warn};
use reqwest::blocking::Client;
use serde::Deserialize;
use serde_json::json;
use shared::BirthdayInsights;

const GEMINI_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const GEMINI_MODEL: &str = "gemini-3-flash-preview";
const API_KEY_VAR: &str = "GEMINI_API_KEY";

/// Client for the insights provider.
#[derive(Clone)]
pub struct InsightsService {
    api_key: Option<String>,
    endpoint: String,
    http: Client,
}

impl InsightsService {
    /// Build the service from the environment. A missing API key is not
    /// an error: the service then always serves the fallback payload.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var(API_KEY_VAR).ok().filter(|key| !key.is_empty());
        if api_key.is_none() {
            warn!(
                "{} not set - birthday insights will use fallback content",
                API_KEY_VAR
            );
        }

        let http = Client::builder()
            .build()
            .context("Failed to build insights HTTP client")?;

        Ok(Self {
            api_key,
            endpoint: GEMINI_ENDPOINT.to_string(),
            http,
        })
    }

    /// Fetch insights for a birth date. Never fails.
    pub fn fetch_insights(&self, birth: NaiveDate) -> BirthdayInsights {
        match self.request_insights(birth) {
            Ok(insights) => insights,
            Err(e) => {
                warn!("Falling back to static insights: {e:#}");
                BirthdayInsights::fallback()
            }
        }
    }

    fn request_insights(&self, birth: NaiveDate) -> Result<BirthdayInsights> {
        let api_key = self
            .api_key
            .as_deref()
            .context("no insights API key configured")?;

        let prompt = format!(
            "Generate fun facts and insights for a person born on {}.",
            birth.format("%Y-%m-%d")
        );
        let body = json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
            "systemInstruction": {
                "parts": [{
                    "text": "You are a helpful assistant providing fun trivia based on birthdates. Keep facts concise and engaging."
                }]
            },
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": {
                    "type": "OBJECT",
                    "properties": {
                        "zodiac": {
                            "type": "STRING",
                            "description": "The zodiac sign of the person."
                        },
                        "zodiacTrait": {
                            "type": "STRING",
                            "description": "One positive, interesting personality trait associated with this zodiac sign."
                        },
                        "historicalFacts": {
                            "type": "ARRAY",
                            "items": { "type": "STRING" },
                            "description": "3 short, interesting historical events or pop culture moments that happened in the same birth year or on the same day in history."
                        }
                    },
                    "required": ["zodiac", "zodiacTrait", "historicalFacts"]
                }
            }
        });

        let url = format!(
            "{}/{}:generateContent?key={}",
            self.endpoint, GEMINI_MODEL, api_key
        );

        info!("Requesting birthday insights for {}", birth);
        let response = self
            .http
            .post(&url)
            .json(&body)
            .send()
            .context("Network error sending insights request")?;

        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("Insights API returned HTTP {}", status.as_u16());
        }

        let parsed: GenerateContentResponse = response
            .json()
            .context("Failed to parse insights response JSON")?;
        let text = payload_text(parsed).context("No text in insights response")?;

        let insights: BirthdayInsights = serde_json::from_str(&text)
            .context("Provider returned malformed insights JSON")?;
        validate_insights(insights)
    }
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    parts: Option<Vec<ContentPart>>,
}

#[derive(Deserialize)]
struct ContentPart {
    text: Option<String>,
}

/// First text part of the first candidate, where the model puts its JSON
/// answer.
fn payload_text(response: GenerateContentResponse) -> Option<String> {
    response
        .candidates
        .and_then(|candidates| candidates.into_iter().next())
        .and_then(|candidate| candidate.content)
        .and_then(|content| content.parts)
        .and_then(|parts| parts.into_iter().next())
        .and_then(|part| part.text)
}

/// Loose validation of the provider payload: blank zodiac fields or an
/// empty fact list count as malformed; extra facts are truncated to 3.
fn validate_insights(mut insights: BirthdayInsights) -> Result<BirthdayInsights> {
    if insights.zodiac.trim().is_empty() || insights.zodiac_trait.trim().is_empty() {
        anyhow::bail!("provider returned blank zodiac fields");
    }

    insights.historical_facts.retain(|fact| !fact.trim().is_empty());
    if insights.historical_facts.is_empty() {
        anyhow::bail!("provider returned no historical facts");
    }
    insights.historical_facts.truncate(3);

    Ok(insights)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service_with_key(api_key: Option<&str>, endpoint: &str) -> InsightsService {
        InsightsService {
            api_key: api_key.map(str::to_string),
            endpoint: endpoint.to_string(),
            http: Client::new(),
        }
    }

    fn birth() -> NaiveDate {
        NaiveDate::from_ymd_opt(1990, 4, 20).unwrap()
    }

    #[test]
    fn test_missing_api_key_yields_fallback() {
        let service = service_with_key(None, GEMINI_ENDPOINT);
        assert_eq!(service.fetch_insights(birth()), BirthdayInsights::fallback());
    }

    #[test]
    fn test_network_error_yields_fallback() {
        // Nothing listens on the discard port, so the request fails fast
        let service = service_with_key(Some("test-key"), "http://127.0.0.1:9");
        assert_eq!(service.fetch_insights(birth()), BirthdayInsights::fallback());
    }

    #[test]
    fn test_payload_text_extraction() {
        let raw = r#"{
            "candidates": [{
                "content": {
                    "parts": [{ "text": "{\"zodiac\":\"Taurus\"}" }]
                }
            }]
        }"#;
        let response: GenerateContentResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(
            payload_text(response).as_deref(),
            Some("{\"zodiac\":\"Taurus\"}")
        );
    }

    #[test]
    fn test_payload_text_missing_candidates() {
        let response: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(payload_text(response), None);
    }

    #[test]
    fn test_validate_truncates_to_three_facts() {
        let insights = BirthdayInsights {
            zodiac: "Taurus".to_string(),
            zodiac_trait: "Reliable".to_string(),
            historical_facts: vec![
                "One".to_string(),
                "Two".to_string(),
                "Three".to_string(),
                "Four".to_string(),
            ],
        };
        let validated = validate_insights(insights).unwrap();
        assert_eq!(validated.historical_facts.len(), 3);
    }

    #[test]
    fn test_validate_rejects_blank_payload() {
        let insights = BirthdayInsights {
            zodiac: "  ".to_string(),
            zodiac_trait: "Reliable".to_string(),
            historical_facts: vec!["One".to_string()],
        };
        assert!(validate_insights(insights).is_err());

        let insights = BirthdayInsights {
            zodiac: "Taurus".to_string(),
            zodiac_trait: "Reliable".to_string(),
            historical_facts: vec![],
        };
        assert!(validate_insights(insights).is_err());
    }
}

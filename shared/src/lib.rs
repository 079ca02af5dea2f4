use serde::{Deserialize, Serialize};

/// Elapsed age between a birth date and a reference date, broken into
/// whole calendar components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeDetails {
    /// Whole years elapsed
    pub years: i32,
    /// Remaining whole months (0-11)
    pub months: u32,
    /// Remaining days after the month component
    pub days: u32,
}

/// Offset from a reference date to the next anniversary of a birth date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NextBirthday {
    /// Whole months until the anniversary (0-11)
    pub months: u32,
    /// Remaining days after the month component
    pub days: u32,
    /// Weekday name the anniversary falls on (e.g. "Saturday")
    pub weekday: String,
}

/// Insight payload returned by the generative-text provider.
///
/// Field names mirror the provider's JSON schema, hence the camelCase
/// renames on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthdayInsights {
    /// Zodiac sign for the birth date
    pub zodiac: String,
    /// One personality trait associated with the sign
    #[serde(rename = "zodiacTrait")]
    pub zodiac_trait: String,
    /// Short historical facts for the birth year/day (at most 3)
    #[serde(rename = "historicalFacts")]
    pub historical_facts: Vec<String>,
}

impl BirthdayInsights {
    /// Static substitute content used whenever the provider call fails.
    /// Insights are decorative, so failures resolve to this instead of
    /// surfacing an error.
    pub fn fallback() -> Self {
        Self {
            zodiac: "Unknown".to_string(),
            zodiac_trait: "Mysterious".to_string(),
            historical_facts: vec![
                "Could not retrieve historical data at this time.".to_string()
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insights_wire_format_roundtrip() {
        let json = r#"{
            "zodiac": "Capricorn",
            "zodiacTrait": "Disciplined",
            "historicalFacts": ["Fact one", "Fact two", "Fact three"]
        }"#;

        let insights: BirthdayInsights = serde_json::from_str(json).unwrap();
        assert_eq!(insights.zodiac, "Capricorn");
        assert_eq!(insights.zodiac_trait, "Disciplined");
        assert_eq!(insights.historical_facts.len(), 3);
    }

    #[test]
    fn test_fallback_payload() {
        let fallback = BirthdayInsights::fallback();
        assert_eq!(fallback.zodiac, "Unknown");
        assert_eq!(fallback.zodiac_trait, "Mysterious");
        assert_eq!(
            fallback.historical_facts,
            vec!["Could not retrieve historical data at this time.".to_string()]
        );
    }
}

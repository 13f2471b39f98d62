//! Review service wire types
//!
//! Request bodies and response shapes for `/search`, `/summary`,
//! `/predict` and `/top-places`.

use serde::{Deserialize, Serialize};
use serde_json::Number;

/// Dataset the service should answer from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    Yelp,
    Amazon,
}

impl Source {
    pub fn label(self) -> &'static str {
        match self {
            Source::Yelp => "yelp",
            Source::Amazon => "amazon",
        }
    }

    /// Cycle used by the source toggle: service default, yelp, amazon
    pub fn cycle(current: Option<Source>) -> Option<Source> {
        match current {
            None => Some(Source::Yelp),
            Some(Source::Yelp) => Some(Source::Amazon),
            Some(Source::Amazon) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchRequest<'a> {
    pub query: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<Source>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRequest<'a> {
    pub selected: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<Source>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictRequest<'a> {
    pub review: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected: Option<&'a str>,
}

/// One review as returned inside a summary
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ReviewSample {
    pub sentiment: String,
    pub review: String,
}

/// Aggregated sentiment for one item
///
/// Percentages are kept as JSON numbers so they can be shown exactly as
/// the service sent them.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Summary {
    pub positive: Number,
    pub neutral: Number,
    pub negative: Number,
    pub suggestion: String,
    #[serde(default)]
    pub reviews: Vec<ReviewSample>,
    #[serde(default)]
    pub count: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Prediction {
    pub sentiment: String,
}

/// The two static lists shown before anything is selected
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TopLists {
    #[serde(default)]
    pub visit: Vec<String>,
    #[serde(default)]
    pub avoid: Vec<String>,
}

impl TopLists {
    pub fn is_empty(&self) -> bool {
        self.visit.is_empty() && self.avoid.is_empty()
    }
}

/// Error body the service sends alongside 4xx answers
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub error: String,
}

/// Coarse sentiment class used for colouring labels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentimentKind {
    Positive,
    Neutral,
    Negative,
    Unknown,
}

impl SentimentKind {
    /// Labels arrive as "Positive" from predictions and "positive" from
    /// stored reviews
    pub fn classify(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "positive" => SentimentKind::Positive,
            "neutral" => SentimentKind::Neutral,
            "negative" => SentimentKind::Negative,
            _ => SentimentKind::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_search_request_omits_missing_source() {
        let body = serde_json::to_value(SearchRequest {
            query: "piz",
            source: None,
        })
        .unwrap();
        assert_eq!(body, json!({"query": "piz"}));
    }

    #[test]
    fn test_summary_request_includes_source() {
        let body = serde_json::to_value(SummaryRequest {
            selected: "Pizza Place",
            source: Some(Source::Amazon),
        })
        .unwrap();
        assert_eq!(body, json!({"selected": "Pizza Place", "source": "amazon"}));
    }

    #[test]
    fn test_summary_for_unknown_item_has_no_reviews() {
        let summary: Summary = serde_json::from_value(json!({
            "positive": 0, "neutral": 0, "negative": 0,
            "suggestion": "Not enough data"
        }))
        .unwrap();
        assert!(summary.reviews.is_empty());
        assert_eq!(summary.count, None);
        assert_eq!(summary.positive.to_string(), "0");
    }

    #[test]
    fn test_summary_keeps_number_text_as_sent() {
        let summary: Summary = serde_json::from_str(
            r#"{"positive": 12.50, "neutral": 1e2, "negative": 0, "suggestion": "Mixed"}"#,
        )
        .unwrap();
        assert_eq!(summary.positive.to_string(), "12.50");
        assert_eq!(summary.neutral.to_string(), "1e2");
    }

    #[test]
    fn test_summary_keeps_percentages_verbatim() {
        let summary: Summary = serde_json::from_value(json!({
            "positive": 67, "neutral": 12.5, "negative": 20,
            "suggestion": "✅ Should Visit",
            "reviews": [{"sentiment": "positive", "review": "lovely"}],
            "count": 42
        }))
        .unwrap();
        assert_eq!(summary.positive.to_string(), "67");
        assert_eq!(summary.neutral.to_string(), "12.5");
        assert_eq!(summary.count, Some(42));
        assert_eq!(summary.reviews[0].review, "lovely");
    }

    #[test]
    fn test_summary_missing_percentages_is_rejected() {
        let result: Result<Summary, _> =
            serde_json::from_value(json!({"suggestion": "x", "reviews": []}));
        assert!(result.is_err());
    }

    #[test]
    fn test_sentiment_classification_ignores_case() {
        assert_eq!(SentimentKind::classify("Positive"), SentimentKind::Positive);
        assert_eq!(SentimentKind::classify("negative"), SentimentKind::Negative);
        assert_eq!(SentimentKind::classify(" NEUTRAL "), SentimentKind::Neutral);
        assert_eq!(SentimentKind::classify("mixed"), SentimentKind::Unknown);
    }

    #[test]
    fn test_source_cycle_returns_to_default() {
        let mut source = None;
        source = Source::cycle(source);
        assert_eq!(source, Some(Source::Yelp));
        source = Source::cycle(source);
        assert_eq!(source, Some(Source::Amazon));
        source = Source::cycle(source);
        assert_eq!(source, None);
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ResponseTone {
    Professional,
    Friendly,
    Casual,
}

impl fmt::Display for ResponseTone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ResponseTone::Professional => "Professional",
            ResponseTone::Friendly => "Friendly",
            ResponseTone::Casual => "Casual",
        };
        write!(f, "{label}")
    }
}

impl ResponseTone {
    pub fn parse(value: &str) -> Option<ResponseTone> {
        match value {
            "Professional" => Some(ResponseTone::Professional),
            "Friendly" => Some(ResponseTone::Friendly),
            "Casual" => Some(ResponseTone::Casual),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ResponseLength {
    Short,
    Medium,
    Long,
}

impl fmt::Display for ResponseLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ResponseLength::Short => "Short",
            ResponseLength::Medium => "Medium",
            ResponseLength::Long => "Long",
        };
        write!(f, "{label}")
    }
}

impl ResponseLength {
    pub fn parse(value: &str) -> Option<ResponseLength> {
        match value {
            "Short" => Some(ResponseLength::Short),
            "Medium" => Some(ResponseLength::Medium),
            "Long" => Some(ResponseLength::Long),
            _ => None,
        }
    }
}

/// Per-business toggles the backend consults before auto-replying. The UI
/// edits these but never executes auto-replies itself; 1-2 star reviews are
/// excluded server-side regardless of any toggle here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AiSettings {
    pub enable_auto_reply: bool,
    pub auto_reply_to_positive_reviews: bool,
    pub auto_reply_to_neutral_reviews: bool,
    pub auto_reply_to_questions: bool,
    pub enable_ai_suggestions: bool,
    pub enable_sentiment_analysis: bool,
    pub enable_competitor_analysis: bool,
    pub enable_insights_generation: bool,
    pub response_tone: ResponseTone,
    pub response_length: ResponseLength,
}

impl Default for AiSettings {
    fn default() -> Self {
        AiSettings {
            enable_auto_reply: false,
            auto_reply_to_positive_reviews: true,
            auto_reply_to_neutral_reviews: false,
            auto_reply_to_questions: true,
            enable_ai_suggestions: true,
            enable_sentiment_analysis: true,
            enable_competitor_analysis: true,
            enable_insights_generation: true,
            response_tone: ResponseTone::Professional,
            response_length: ResponseLength::Medium,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedResponse {
    pub response: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Insights {
    pub insights: String,
    #[serde(default)]
    pub generated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReviewSummary {
    pub summary: String,
    pub review_count: u32,
    pub period: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        };
        write!(f, "{label}")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub category: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Recommendations {
    pub recommendations: Vec<Recommendation>,
}

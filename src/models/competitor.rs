use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SentimentCounts {
    pub positive: u32,
    pub neutral: u32,
    pub negative: u32,
}

impl SentimentCounts {
    pub fn total(&self) -> u32 {
        self.positive + self.neutral + self.negative
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RatingBucket {
    pub rating: u8,
    pub count: u32,
}

/// A tracked external business with aggregated metrics, refreshed by a
/// manual sync action.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Competitor {
    pub id: i64,
    pub name: String,
    pub platform: String,
    pub platform_business_id: String,
    pub total_reviews: u32,
    pub avg_rating: f64,
    /// Percentage change over the trailing period; negative means declining.
    pub rating_trend: f64,
    pub response_rate: f64,
    pub avg_response_time_hours: f64,
    pub sentiment: SentimentCounts,
    pub review_distribution: Vec<RatingBucket>,
    pub recent_review_count: u32,
    pub last_updated: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCompetitor {
    pub business_id: i64,
    pub name: String,
    pub platform: String,
    pub platform_business_id: String,
}

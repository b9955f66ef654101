use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::competitor::{RatingBucket, SentimentCounts};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SmsUsage {
    pub sent: u32,
    pub limit: u32,
    pub remaining: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecentReview {
    pub id: i64,
    pub platform: String,
    pub reviewer_name: String,
    pub rating: u8,
    pub review_date: DateTime<Utc>,
}

/// Headline numbers for the dashboard stat grid. Defaults to zeroed records
/// so the grid still renders when a fetch fails.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_reviews: u32,
    pub average_rating: f64,
    pub unread_reviews: u32,
    pub connected_platforms: u32,
    pub sms_usage: SmsUsage,
    pub subscription_plan: String,
    pub recent_reviews: Vec<RecentReview>,
}

impl Default for DashboardSummary {
    fn default() -> Self {
        DashboardSummary {
            total_reviews: 0,
            average_rating: 0.0,
            unread_reviews: 0,
            connected_platforms: 0,
            sms_usage: SmsUsage::default(),
            subscription_plan: "Free".to_string(),
            recent_reviews: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsOverview {
    pub total_reviews: u32,
    pub average_rating: f64,
    /// Percentage of reviews with an owner response, 0-100.
    pub response_rate: f64,
    pub sentiment_breakdown: SentimentCounts,
    pub this_month_reviews: u32,
    pub monthly_change: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RatingTrendPoint {
    /// `YYYY-MM` bucket label from the backend.
    pub date: String,
    pub count: u32,
    pub avg_rating: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlatformStats {
    pub platform: String,
    pub total_reviews: u32,
    pub average_rating: f64,
    pub positive_count: u32,
    pub neutral_count: u32,
    pub negative_count: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlatformBreakdown {
    pub platform_breakdown: Vec<PlatformStats>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SentimentSlice {
    pub sentiment: String,
    pub count: u32,
    pub percentage: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SentimentAnalysis {
    pub sentiment_analysis: Vec<SentimentSlice>,
    pub rating_distribution: Vec<RatingBucket>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TopKeyword {
    pub word: String,
    pub positive_count: u32,
    pub negative_count: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResponseTimeStats {
    pub average_hours: f64,
    pub median_hours: f64,
    pub responded_count: u32,
    pub total_count: u32,
}

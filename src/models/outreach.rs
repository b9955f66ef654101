use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An outreach contact sourced from the point-of-sale integration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: i64,
    pub name: String,
    pub phone_number: String,
    #[serde(default)]
    pub email: Option<String>,
    pub total_visits: u32,
    #[serde(default)]
    pub last_visit: Option<DateTime<Utc>>,
    pub average_spend: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    pub id: i64,
    pub name: String,
    /// Template text; `{name}`, `{business_name}` and `{review_link}` are
    /// expanded by the backend at send time.
    pub message: String,
    pub status: String,
    #[serde(default)]
    pub scheduled_for: Option<DateTime<Utc>>,
    #[serde(default)]
    pub sent_at: Option<DateTime<Utc>>,
    pub recipient_count: u32,
    #[serde(default)]
    pub sent_count: u32,
    #[serde(default)]
    pub response_rate: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCampaign {
    pub business_id: i64,
    pub name: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduled_for: Option<DateTime<Utc>>,
    pub recipient_phone_numbers: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkSmsRequest {
    pub business_id: i64,
    pub phone_numbers: Vec<String>,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkSmsResult {
    pub message: String,
    pub sent_count: u32,
}

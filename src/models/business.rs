use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A tenant profile. One user may belong to several businesses; the UI
/// currently exercises a single hardcoded business id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Business {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub zip_code: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub logo_url: Option<String>,
    #[serde(default)]
    pub platform_connections_count: u32,
    #[serde(default)]
    pub reviews_count: u32,
    #[serde(default)]
    pub avg_rating: f64,
    pub created_at: DateTime<Utc>,
}

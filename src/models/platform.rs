use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Link between a business and an external review platform. Created via the
/// connect action, removed via disconnect, refreshed via sync.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlatformConnection {
    pub id: i64,
    pub business_id: i64,
    pub platform: String,
    pub external_business_id: String,
    #[serde(default)]
    pub external_business_name: Option<String>,
    pub connected_at: DateTime<Utc>,
    #[serde(default)]
    pub last_synced_at: Option<DateTime<Utc>>,
    pub is_active: bool,
    pub auto_sync: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectResponse {
    pub auth_url: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncResult {
    pub message: String,
    pub reviews_imported: u32,
}

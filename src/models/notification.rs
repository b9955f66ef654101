use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::review::encode_query;

/// Alert feed entry. `kind` is the backend's numeric category (0 = new
/// review, 1 = review reply, 2 = low-rating alert); `data` carries a JSON
/// payload the UI treats as opaque.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: u8,
    pub title: String,
    pub message: String,
    #[serde(default)]
    pub data: Option<String>,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub read_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NotificationPage {
    pub notifications: Vec<Notification>,
    pub total_count: u32,
    pub page: u32,
    pub page_size: u32,
    pub total_pages: u32,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NotificationFilter {
    pub unread_only: Option<bool>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

impl NotificationFilter {
    pub fn query_string(&self) -> String {
        let mut params: Vec<(&str, String)> = Vec::new();
        if let Some(unread_only) = self.unread_only {
            params.push(("unreadOnly", unread_only.to_string()));
        }
        if let Some(page) = self.page {
            params.push(("page", page.to_string()));
        }
        if let Some(page_size) = self.page_size {
            params.push(("pageSize", page_size.to_string()));
        }
        encode_query(&params)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UnreadCount {
    pub count: u32,
}

/// Per-user delivery-channel toggles.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NotificationPreferences {
    pub email_notifications: bool,
    pub push_notifications: bool,
    pub sms_notifications: bool,
    pub notify_on_new_review: bool,
    pub notify_on_review_reply: bool,
    pub notify_on_low_rating: bool,
}

impl Default for NotificationPreferences {
    fn default() -> Self {
        NotificationPreferences {
            email_notifications: true,
            push_notifications: false,
            sms_notifications: false,
            notify_on_new_review: true,
            notify_on_review_reply: true,
            notify_on_low_rating: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_filter_query() {
        let filter = NotificationFilter {
            unread_only: Some(true),
            page: Some(1),
            page_size: Some(20),
        };
        assert_eq!(filter.query_string(), "?unreadOnly=true&page=1&pageSize=20");
        assert_eq!(NotificationFilter::default().query_string(), "");
    }

    #[test]
    fn kind_serializes_as_type() {
        let notification = Notification {
            id: 1,
            kind: 2,
            title: "Low Rating Alert".to_string(),
            message: "Jane Doe left a 2-star review".to_string(),
            data: None,
            is_read: false,
            created_at: Utc::now(),
            read_at: None,
        };
        let json = serde_json::to_value(&notification).unwrap();
        assert_eq!(json.get("type").and_then(|v| v.as_u64()), Some(2));
        assert!(json.get("kind").is_none());
    }
}

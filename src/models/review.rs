use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse classification produced by the backend; only displayed here.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
    Mixed,
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Sentiment::Positive => "Positive",
            Sentiment::Neutral => "Neutral",
            Sentiment::Negative => "Negative",
            Sentiment::Mixed => "Mixed",
        };
        write!(f, "{label}")
    }
}

impl Sentiment {
    pub fn parse(value: &str) -> Option<Sentiment> {
        match value {
            "Positive" => Some(Sentiment::Positive),
            "Neutral" => Some(Sentiment::Neutral),
            "Negative" => Some(Sentiment::Negative),
            "Mixed" => Some(Sentiment::Mixed),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: i64,
    pub business_id: i64,
    pub platform: String,
    pub reviewer_name: String,
    #[serde(default)]
    pub reviewer_avatar: Option<String>,
    pub rating: u8,
    pub review_text: String,
    pub review_date: DateTime<Utc>,
    #[serde(default)]
    pub sentiment: Option<Sentiment>,
    #[serde(default)]
    pub sentiment_score: Option<f64>,
    pub is_read: bool,
    pub is_flagged: bool,
    #[serde(default)]
    pub response_text: Option<String>,
    #[serde(default)]
    pub responded_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub ai_suggested_response: Option<String>,
}

/// Server-side filter parameters; every present field becomes a query
/// parameter. The demo implementation applies the same fields in memory.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReviewFilter {
    pub business_id: Option<i64>,
    pub platform: Option<String>,
    pub sentiment: Option<Sentiment>,
    pub rating: Option<u8>,
    pub is_read: Option<bool>,
    pub is_flagged: Option<bool>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

impl ReviewFilter {
    pub fn for_business(business_id: i64) -> Self {
        ReviewFilter {
            business_id: Some(business_id),
            ..ReviewFilter::default()
        }
    }

    /// Renders `?a=b&c=d` for every present field, or an empty string.
    pub fn query_string(&self) -> String {
        let mut params: Vec<(&str, String)> = Vec::new();
        if let Some(id) = self.business_id {
            params.push(("businessId", id.to_string()));
        }
        if let Some(platform) = &self.platform {
            params.push(("platform", platform.clone()));
        }
        if let Some(sentiment) = self.sentiment {
            params.push(("sentiment", sentiment.to_string()));
        }
        if let Some(rating) = self.rating {
            params.push(("rating", rating.to_string()));
        }
        if let Some(is_read) = self.is_read {
            params.push(("isRead", is_read.to_string()));
        }
        if let Some(is_flagged) = self.is_flagged {
            params.push(("isFlagged", is_flagged.to_string()));
        }
        if let Some(page) = self.page {
            params.push(("page", page.to_string()));
        }
        if let Some(page_size) = self.page_size {
            params.push(("pageSize", page_size.to_string()));
        }
        encode_query(&params)
    }

    /// In-memory counterpart used by the demo backend; pagination fields are
    /// applied separately.
    pub fn matches(&self, review: &Review) -> bool {
        if let Some(id) = self.business_id {
            if review.business_id != id {
                return false;
            }
        }
        if let Some(platform) = &self.platform {
            if &review.platform != platform {
                return false;
            }
        }
        if let Some(sentiment) = self.sentiment {
            if review.sentiment != Some(sentiment) {
                return false;
            }
        }
        if let Some(rating) = self.rating {
            if review.rating != rating {
                return false;
            }
        }
        if let Some(is_read) = self.is_read {
            if review.is_read != is_read {
                return false;
            }
        }
        if let Some(is_flagged) = self.is_flagged {
            if review.is_flagged != is_flagged {
                return false;
            }
        }
        true
    }
}

pub fn encode_query(params: &[(&str, String)]) -> String {
    if params.is_empty() {
        return String::new();
    }
    let encoded: Vec<String> = params
        .iter()
        .map(|(key, value)| format!("{key}={}", urlencoding::encode(value)))
        .collect();
    format!("?{}", encoded.join("&"))
}

/// Paged review listing; both backends return the same envelope.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReviewPage {
    pub reviews: Vec<Review>,
    pub total_count: u32,
    pub page: u32,
    pub page_size: u32,
    pub total_pages: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn review(id: i64, platform: &str, rating: u8, flagged: bool) -> Review {
        Review {
            id,
            business_id: 1,
            platform: platform.to_string(),
            reviewer_name: "Test Reviewer".to_string(),
            reviewer_avatar: None,
            rating,
            review_text: "fine".to_string(),
            review_date: Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(),
            sentiment: Some(Sentiment::Positive),
            sentiment_score: Some(0.9),
            is_read: false,
            is_flagged: flagged,
            response_text: None,
            responded_at: None,
            ai_suggested_response: None,
        }
    }

    #[test]
    fn empty_filter_renders_no_query() {
        assert_eq!(ReviewFilter::default().query_string(), "");
    }

    #[test]
    fn every_present_field_becomes_a_parameter() {
        let filter = ReviewFilter {
            business_id: Some(1),
            platform: Some("Google".to_string()),
            sentiment: Some(Sentiment::Mixed),
            rating: Some(4),
            is_read: Some(false),
            is_flagged: Some(true),
            page: Some(2),
            page_size: Some(10),
        };
        assert_eq!(
            filter.query_string(),
            "?businessId=1&platform=Google&sentiment=Mixed&rating=4&isRead=false&isFlagged=true&page=2&pageSize=10"
        );
    }

    #[test]
    fn query_values_are_percent_encoded() {
        let filter = ReviewFilter {
            platform: Some("Google Maps".to_string()),
            ..ReviewFilter::default()
        };
        assert_eq!(filter.query_string(), "?platform=Google%20Maps");
    }

    #[test]
    fn flagged_filter_matches_only_flagged_reviews() {
        let filter = ReviewFilter {
            is_flagged: Some(true),
            ..ReviewFilter::default()
        };
        assert!(filter.matches(&review(1, "Google", 5, true)));
        assert!(!filter.matches(&review(2, "Google", 5, false)));
    }

    #[test]
    fn filter_fields_combine() {
        let filter = ReviewFilter {
            platform: Some("Yelp".to_string()),
            rating: Some(4),
            ..ReviewFilter::default()
        };
        assert!(filter.matches(&review(1, "Yelp", 4, false)));
        assert!(!filter.matches(&review(2, "Yelp", 5, false)));
        assert!(!filter.matches(&review(3, "Google", 4, false)));
    }

    #[test]
    fn review_wire_names_are_camel_case() {
        let json = serde_json::to_value(review(7, "Google", 5, false)).unwrap();
        assert!(json.get("businessId").is_some());
        assert!(json.get("isFlagged").is_some());
        assert!(json.get("reviewDate").is_some());
        assert!(json.get("business_id").is_none());
    }
}

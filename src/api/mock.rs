//! Demo backend.
//!
//! Method-for-method parallel of [`HttpClient`](crate::api::HttpClient)
//! serving fixture data after a short artificial delay, so the whole UI is
//! usable with no backend process at all. Never issues a network request.

use async_trait::async_trait;
use chrono::Utc;
use gloo_timers::future::sleep;
use leptos::logging::log;
use std::time::Duration;

use crate::api::error::{ApiError, ApiResult};
use crate::api::fixtures;
use crate::api::{ApiMessage, ApiResponse, BackendApi};
use crate::models::ai::{
    AiSettings, GeneratedResponse, Insights, Recommendations, ReviewSummary,
};
use crate::models::analytics::{
    AnalyticsOverview, DashboardSummary, PlatformBreakdown, RatingTrendPoint, ResponseTimeStats,
    SentimentAnalysis, TopKeyword,
};
use crate::models::business::Business;
use crate::models::competitor::{Competitor, NewCompetitor, SentimentCounts};
use crate::models::notification::{
    NotificationFilter, NotificationPage, NotificationPreferences, UnreadCount,
};
use crate::models::outreach::{BulkSmsRequest, BulkSmsResult, Campaign, Customer, NewCampaign};
use crate::models::platform::{ConnectResponse, PlatformConnection, SyncResult};
use crate::models::review::{ReviewFilter, ReviewPage};
use crate::models::team::{
    AcceptInvitationRequest, Invitation, InvitationDetails, Role, TeamMember,
};
use crate::models::user::{RegisterRequest, RegisterResponse, UpdateProfileRequest, User};

const DELAY_MS: u64 = 300;
const POLL_DELAY_MS: u64 = 100;
const SEND_DELAY_MS: u64 = 500;

fn paginate<T: Clone>(items: &[T], page: u32, page_size: u32) -> (Vec<T>, u32, u32) {
    let total_count = items.len() as u32;
    let page_size = page_size.max(1);
    let total_pages = total_count.div_ceil(page_size).max(1);
    let start = ((page.max(1) - 1) * page_size) as usize;
    let slice = items
        .iter()
        .skip(start)
        .take(page_size as usize)
        .cloned()
        .collect();
    (slice, total_count, total_pages)
}

fn not_found(what: &str, id: i64) -> ApiError {
    ApiError::Status {
        status: 404,
        message: format!("{what} {id} not found"),
    }
}

#[derive(Default)]
pub struct MockApi;

impl MockApi {
    pub fn new() -> Self {
        MockApi
    }

    async fn delay(&self, ms: u64) {
        sleep(Duration::from_millis(ms)).await;
    }
}

#[async_trait(?Send)]
impl BackendApi for MockApi {
    async fn register(&self, req: RegisterRequest) -> ApiResult<ApiResponse<RegisterResponse>> {
        self.delay(DELAY_MS).await;
        log!("[MOCK API] register {}", req.email);
        let mut user = fixtures::demo_user();
        user.email = req.email;
        user.full_name = req.full_name;
        user.company_name = req.company_name;
        user.phone_number = req.phone_number;
        Ok(ApiResponse::new(RegisterResponse {
            user,
            message: "Registration completed successfully".to_string(),
        }))
    }

    async fn get_current_user(&self) -> ApiResult<ApiResponse<User>> {
        self.delay(DELAY_MS).await;
        log!("[MOCK API] get_current_user");
        Ok(ApiResponse::new(fixtures::demo_user()))
    }

    async fn update_profile(&self, req: UpdateProfileRequest) -> ApiResult<ApiResponse<User>> {
        self.delay(DELAY_MS).await;
        log!("[MOCK API] update_profile");
        let mut user = fixtures::demo_user();
        if let Some(full_name) = req.full_name {
            user.full_name = full_name;
        }
        if let Some(email) = req.email {
            user.email = email;
        }
        if req.phone_number.is_some() {
            user.phone_number = req.phone_number;
        }
        Ok(ApiResponse::new(user))
    }

    async fn get_my_businesses(&self) -> ApiResult<ApiResponse<Vec<Business>>> {
        self.delay(DELAY_MS).await;
        log!("[MOCK API] get_my_businesses");
        Ok(ApiResponse::new(fixtures::businesses()))
    }

    async fn get_reviews(&self, filter: ReviewFilter) -> ApiResult<ApiResponse<ReviewPage>> {
        self.delay(DELAY_MS).await;
        log!("[MOCK API] get_reviews{}", filter.query_string());
        let matching: Vec<_> = fixtures::reviews()
            .into_iter()
            .filter(|r| filter.matches(r))
            .collect();
        let page = filter.page.unwrap_or(1);
        let page_size = filter.page_size.unwrap_or(20);
        let (reviews, total_count, total_pages) = paginate(&matching, page, page_size);
        Ok(ApiResponse::new(ReviewPage {
            reviews,
            total_count,
            page,
            page_size,
            total_pages,
        }))
    }

    async fn reply_to_review(
        &self,
        id: i64,
        _response_text: String,
    ) -> ApiResult<ApiResponse<ApiMessage>> {
        self.delay(DELAY_MS).await;
        log!("[MOCK API] reply_to_review {id}");
        if !fixtures::reviews().iter().any(|r| r.id == id) {
            return Err(not_found("review", id));
        }
        Ok(ApiResponse::new(ApiMessage::new("Response posted successfully")))
    }

    async fn mark_review_as_read(
        &self,
        id: i64,
        is_read: bool,
    ) -> ApiResult<ApiResponse<ApiMessage>> {
        self.delay(DELAY_MS).await;
        log!("[MOCK API] mark_review_as_read {id} -> {is_read}");
        Ok(ApiResponse::new(ApiMessage::new("Review updated")))
    }

    async fn flag_review(&self, id: i64, is_flagged: bool) -> ApiResult<ApiResponse<ApiMessage>> {
        self.delay(DELAY_MS).await;
        log!("[MOCK API] flag_review {id} -> {is_flagged}");
        Ok(ApiResponse::new(ApiMessage::new("Review updated")))
    }

    async fn get_business_integrations(
        &self,
        business_id: i64,
    ) -> ApiResult<ApiResponse<Vec<PlatformConnection>>> {
        self.delay(DELAY_MS).await;
        log!("[MOCK API] get_business_integrations {business_id}");
        let connections = fixtures::platform_connections()
            .into_iter()
            .filter(|c| c.business_id == business_id)
            .collect();
        Ok(ApiResponse::new(connections))
    }

    async fn connect_platform(
        &self,
        platform: String,
        business_id: i64,
    ) -> ApiResult<ApiResponse<ConnectResponse>> {
        self.delay(DELAY_MS).await;
        log!("[MOCK API] connect_platform {platform} for business {business_id}");
        Ok(ApiResponse::new(ConnectResponse {
            auth_url: format!("https://demo.reviewhub.com/oauth/{platform}?state=demo"),
            message: format!("Redirecting to {platform} authorization"),
        }))
    }

    async fn disconnect_platform(&self, connection_id: i64) -> ApiResult<ApiResponse<ApiMessage>> {
        self.delay(DELAY_MS).await;
        log!("[MOCK API] disconnect_platform {connection_id}");
        Ok(ApiResponse::new(ApiMessage::new("Platform disconnected")))
    }

    async fn sync_platform(&self, connection_id: i64) -> ApiResult<ApiResponse<SyncResult>> {
        self.delay(DELAY_MS).await;
        log!("[MOCK API] sync_platform {connection_id}");
        Ok(ApiResponse::new(SyncResult {
            message: "Sync completed".to_string(),
            reviews_imported: 5,
        }))
    }

    async fn get_dashboard_summary(
        &self,
        business_id: i64,
    ) -> ApiResult<ApiResponse<DashboardSummary>> {
        self.delay(DELAY_MS).await;
        log!("[MOCK API] get_dashboard_summary {business_id}");
        Ok(ApiResponse::new(fixtures::dashboard_summary()))
    }

    async fn get_analytics_overview(
        &self,
        business_id: i64,
    ) -> ApiResult<ApiResponse<AnalyticsOverview>> {
        self.delay(DELAY_MS).await;
        log!("[MOCK API] get_analytics_overview {business_id}");
        Ok(ApiResponse::new(fixtures::analytics_overview()))
    }

    async fn get_rating_trend(
        &self,
        business_id: i64,
        months: u32,
    ) -> ApiResult<ApiResponse<Vec<RatingTrendPoint>>> {
        self.delay(DELAY_MS).await;
        log!("[MOCK API] get_rating_trend {business_id} over {months} months");
        Ok(ApiResponse::new(fixtures::rating_trend(months)))
    }

    async fn get_platform_breakdown(
        &self,
        business_id: i64,
    ) -> ApiResult<ApiResponse<PlatformBreakdown>> {
        self.delay(DELAY_MS).await;
        log!("[MOCK API] get_platform_breakdown {business_id}");
        Ok(ApiResponse::new(fixtures::platform_breakdown()))
    }

    async fn get_sentiment_analysis(
        &self,
        business_id: i64,
        days: u32,
    ) -> ApiResult<ApiResponse<SentimentAnalysis>> {
        self.delay(DELAY_MS).await;
        log!("[MOCK API] get_sentiment_analysis {business_id} over {days} days");
        Ok(ApiResponse::new(fixtures::sentiment_analysis()))
    }

    async fn get_top_keywords(
        &self,
        business_id: i64,
        limit: u32,
    ) -> ApiResult<ApiResponse<Vec<TopKeyword>>> {
        self.delay(DELAY_MS).await;
        log!("[MOCK API] get_top_keywords {business_id} limit {limit}");
        Ok(ApiResponse::new(fixtures::top_keywords(limit)))
    }

    async fn get_response_time(
        &self,
        business_id: i64,
    ) -> ApiResult<ApiResponse<ResponseTimeStats>> {
        self.delay(DELAY_MS).await;
        log!("[MOCK API] get_response_time {business_id}");
        Ok(ApiResponse::new(fixtures::response_time()))
    }

    async fn get_customers(&self, business_id: i64) -> ApiResult<ApiResponse<Vec<Customer>>> {
        self.delay(DELAY_MS).await;
        log!("[MOCK API] get_customers {business_id}");
        Ok(ApiResponse::new(fixtures::customers()))
    }

    async fn get_campaigns(&self, business_id: i64) -> ApiResult<ApiResponse<Vec<Campaign>>> {
        self.delay(DELAY_MS).await;
        log!("[MOCK API] get_campaigns {business_id}");
        Ok(ApiResponse::new(fixtures::campaigns()))
    }

    async fn create_campaign(&self, req: NewCampaign) -> ApiResult<ApiResponse<Campaign>> {
        self.delay(SEND_DELAY_MS).await;
        log!(
            "[MOCK API] create_campaign '{}' for {} recipients",
            req.name,
            req.recipient_phone_numbers.len()
        );
        let recipient_count = req.recipient_phone_numbers.len() as u32;
        let scheduled = req.scheduled_for.is_some();
        Ok(ApiResponse::new(Campaign {
            id: fixtures::campaigns().iter().map(|c| c.id).max().unwrap_or(0) + 1,
            name: req.name,
            message: req.message,
            status: if scheduled { "Scheduled" } else { "Sent" }.to_string(),
            scheduled_for: req.scheduled_for,
            sent_at: if scheduled { None } else { Some(Utc::now()) },
            recipient_count,
            sent_count: if scheduled { 0 } else { recipient_count },
            response_rate: None,
        }))
    }

    async fn send_bulk_sms(&self, req: BulkSmsRequest) -> ApiResult<ApiResponse<BulkSmsResult>> {
        self.delay(SEND_DELAY_MS).await;
        let count = req.phone_numbers.len() as u32;
        log!("[MOCK API] send_bulk_sms to {count} recipients");
        Ok(ApiResponse::new(BulkSmsResult {
            message: format!("SMS sent to {count} recipients"),
            sent_count: count,
        }))
    }

    async fn get_competitors(&self, business_id: i64) -> ApiResult<ApiResponse<Vec<Competitor>>> {
        self.delay(DELAY_MS).await;
        log!("[MOCK API] get_competitors {business_id}");
        Ok(ApiResponse::new(fixtures::competitors()))
    }

    async fn add_competitor(&self, req: NewCompetitor) -> ApiResult<ApiResponse<Competitor>> {
        self.delay(DELAY_MS).await;
        log!("[MOCK API] add_competitor '{}' on {}", req.name, req.platform);
        Ok(ApiResponse::new(Competitor {
            id: fixtures::competitors().iter().map(|c| c.id).max().unwrap_or(0) + 1,
            name: req.name,
            platform: req.platform,
            platform_business_id: req.platform_business_id,
            total_reviews: 0,
            avg_rating: 0.0,
            rating_trend: 0.0,
            response_rate: 0.0,
            avg_response_time_hours: 0.0,
            sentiment: SentimentCounts::default(),
            review_distribution: Vec::new(),
            recent_review_count: 0,
            last_updated: Utc::now(),
        }))
    }

    async fn delete_competitor(&self, id: i64) -> ApiResult<ApiResponse<ApiMessage>> {
        self.delay(DELAY_MS).await;
        log!("[MOCK API] delete_competitor {id}");
        Ok(ApiResponse::new(ApiMessage::new("Competitor removed")))
    }

    async fn sync_competitor(&self, id: i64) -> ApiResult<ApiResponse<Competitor>> {
        self.delay(DELAY_MS).await;
        log!("[MOCK API] sync_competitor {id}");
        let mut competitor = fixtures::competitors()
            .into_iter()
            .find(|c| c.id == id)
            .ok_or_else(|| not_found("competitor", id))?;
        competitor.last_updated = Utc::now();
        Ok(ApiResponse::new(competitor))
    }

    async fn get_notifications(
        &self,
        filter: NotificationFilter,
    ) -> ApiResult<ApiResponse<NotificationPage>> {
        self.delay(DELAY_MS).await;
        log!("[MOCK API] get_notifications{}", filter.query_string());
        let matching: Vec<_> = fixtures::notifications()
            .into_iter()
            .filter(|n| !filter.unread_only.unwrap_or(false) || !n.is_read)
            .collect();
        let page = filter.page.unwrap_or(1);
        let page_size = filter.page_size.unwrap_or(20);
        let (notifications, total_count, total_pages) = paginate(&matching, page, page_size);
        Ok(ApiResponse::new(NotificationPage {
            notifications,
            total_count,
            page,
            page_size,
            total_pages,
        }))
    }

    async fn get_unread_count(&self) -> ApiResult<ApiResponse<UnreadCount>> {
        self.delay(POLL_DELAY_MS).await;
        let count = fixtures::notifications().iter().filter(|n| !n.is_read).count() as u32;
        Ok(ApiResponse::new(UnreadCount { count }))
    }

    async fn mark_notification_read(&self, id: i64) -> ApiResult<ApiResponse<ApiMessage>> {
        self.delay(DELAY_MS).await;
        log!("[MOCK API] mark_notification_read {id}");
        Ok(ApiResponse::new(ApiMessage::new("Notification marked as read")))
    }

    async fn mark_all_notifications_read(&self) -> ApiResult<ApiResponse<ApiMessage>> {
        self.delay(DELAY_MS).await;
        log!("[MOCK API] mark_all_notifications_read");
        Ok(ApiResponse::new(ApiMessage::new("All notifications marked as read")))
    }

    async fn delete_notification(&self, id: i64) -> ApiResult<ApiResponse<ApiMessage>> {
        self.delay(DELAY_MS).await;
        log!("[MOCK API] delete_notification {id}");
        Ok(ApiResponse::new(ApiMessage::new("Notification deleted")))
    }

    async fn get_notification_preferences(
        &self,
    ) -> ApiResult<ApiResponse<NotificationPreferences>> {
        self.delay(DELAY_MS).await;
        log!("[MOCK API] get_notification_preferences");
        Ok(ApiResponse::new(fixtures::notification_preferences()))
    }

    async fn update_notification_preferences(
        &self,
        prefs: NotificationPreferences,
    ) -> ApiResult<ApiResponse<NotificationPreferences>> {
        self.delay(DELAY_MS).await;
        log!("[MOCK API] update_notification_preferences");
        Ok(ApiResponse::new(prefs))
    }

    async fn get_team_members(&self, business_id: i64) -> ApiResult<ApiResponse<Vec<TeamMember>>> {
        self.delay(DELAY_MS).await;
        log!("[MOCK API] get_team_members {business_id}");
        Ok(ApiResponse::new(fixtures::team_members()))
    }

    async fn get_pending_invitations(
        &self,
        business_id: i64,
    ) -> ApiResult<ApiResponse<Vec<Invitation>>> {
        self.delay(DELAY_MS).await;
        log!("[MOCK API] get_pending_invitations {business_id}");
        Ok(ApiResponse::new(fixtures::pending_invitations()))
    }

    async fn invite_team_member(
        &self,
        business_id: i64,
        email: String,
        role: Role,
    ) -> ApiResult<ApiResponse<ApiMessage>> {
        self.delay(DELAY_MS).await;
        log!("[MOCK API] invite_team_member {email} as {role} to business {business_id}");
        let invitation = fixtures::invitation(email, role);
        Ok(ApiResponse::new(ApiMessage::new(format!(
            "Invitation sent to {}",
            invitation.email
        ))))
    }

    async fn revoke_invitation(&self, invitation_id: i64) -> ApiResult<ApiResponse<ApiMessage>> {
        self.delay(DELAY_MS).await;
        log!("[MOCK API] revoke_invitation {invitation_id}");
        Ok(ApiResponse::new(ApiMessage::new("Invitation revoked")))
    }

    async fn remove_team_member(
        &self,
        business_id: i64,
        user_id: i64,
    ) -> ApiResult<ApiResponse<ApiMessage>> {
        self.delay(DELAY_MS).await;
        log!("[MOCK API] remove_team_member {user_id} from business {business_id}");
        Ok(ApiResponse::new(ApiMessage::new("Team member removed")))
    }

    async fn update_member_role(
        &self,
        business_id: i64,
        user_id: i64,
        role: Role,
    ) -> ApiResult<ApiResponse<ApiMessage>> {
        self.delay(DELAY_MS).await;
        log!("[MOCK API] update_member_role {user_id} -> {role} in business {business_id}");
        Ok(ApiResponse::new(ApiMessage::new("Role updated")))
    }

    async fn get_invitation_details(
        &self,
        token: String,
    ) -> ApiResult<ApiResponse<InvitationDetails>> {
        self.delay(DELAY_MS).await;
        log!("[MOCK API] get_invitation_details {token}");
        Ok(ApiResponse::new(fixtures::invitation_details()))
    }

    async fn accept_invitation(
        &self,
        token: String,
        req: AcceptInvitationRequest,
    ) -> ApiResult<ApiResponse<ApiMessage>> {
        self.delay(DELAY_MS).await;
        log!("[MOCK API] accept_invitation {token} for {}", req.full_name);
        Ok(ApiResponse::new(ApiMessage::new(
            "Invitation accepted, account created",
        )))
    }

    async fn get_ai_settings(&self, business_id: i64) -> ApiResult<ApiResponse<AiSettings>> {
        self.delay(DELAY_MS).await;
        log!("[MOCK API] get_ai_settings {business_id}");
        Ok(ApiResponse::new(fixtures::ai_settings()))
    }

    async fn update_ai_settings(
        &self,
        business_id: i64,
        settings: AiSettings,
    ) -> ApiResult<ApiResponse<AiSettings>> {
        self.delay(DELAY_MS).await;
        log!("[MOCK API] update_ai_settings {business_id}");
        Ok(ApiResponse::new(settings))
    }

    async fn generate_ai_response(
        &self,
        review_id: i64,
    ) -> ApiResult<ApiResponse<GeneratedResponse>> {
        self.delay(DELAY_MS).await;
        log!("[MOCK API] generate_ai_response for review {review_id}");
        let response = fixtures::reviews()
            .into_iter()
            .find(|r| r.id == review_id)
            .and_then(|r| r.ai_suggested_response)
            .unwrap_or_else(|| {
                "Thank you for taking the time to share your experience with us. \
                 Your feedback helps us improve!"
                    .to_string()
            });
        Ok(ApiResponse::new(GeneratedResponse { response }))
    }

    async fn improve_ai_response(
        &self,
        review_id: i64,
        original: String,
    ) -> ApiResult<ApiResponse<GeneratedResponse>> {
        self.delay(DELAY_MS).await;
        log!("[MOCK API] improve_ai_response for review {review_id}");
        Ok(ApiResponse::new(GeneratedResponse {
            response: format!(
                "{} We truly appreciate your feedback and hope to welcome you back soon!",
                original.trim_end_matches(|c: char| c.is_whitespace())
            ),
        }))
    }

    async fn get_analytics_insights(&self, business_id: i64) -> ApiResult<ApiResponse<Insights>> {
        self.delay(DELAY_MS).await;
        log!("[MOCK API] get_analytics_insights {business_id}");
        Ok(ApiResponse::new(fixtures::analytics_insights()))
    }

    async fn get_competitor_insights(&self, business_id: i64) -> ApiResult<ApiResponse<Insights>> {
        self.delay(DELAY_MS).await;
        log!("[MOCK API] get_competitor_insights {business_id}");
        Ok(ApiResponse::new(fixtures::competitor_insights()))
    }

    async fn get_review_summary(
        &self,
        business_id: i64,
        days: u32,
    ) -> ApiResult<ApiResponse<ReviewSummary>> {
        self.delay(DELAY_MS).await;
        log!("[MOCK API] get_review_summary {business_id} over {days} days");
        Ok(ApiResponse::new(fixtures::review_summary(days)))
    }

    async fn get_recommendations(
        &self,
        business_id: i64,
    ) -> ApiResult<ApiResponse<Recommendations>> {
        self.delay(DELAY_MS).await;
        log!("[MOCK API] get_recommendations {business_id}");
        Ok(ApiResponse::new(fixtures::recommendations()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paginate_slices_and_reports_totals() {
        let items: Vec<u32> = (1..=5).collect();
        let (page1, total, pages) = paginate(&items, 1, 2);
        assert_eq!(page1, vec![1, 2]);
        assert_eq!(total, 5);
        assert_eq!(pages, 3);

        let (page3, _, _) = paginate(&items, 3, 2);
        assert_eq!(page3, vec![5]);

        let (beyond, _, _) = paginate(&items, 4, 2);
        assert!(beyond.is_empty());
    }

    #[test]
    fn paginate_never_reports_zero_pages() {
        let items: Vec<u32> = Vec::new();
        let (slice, total, pages) = paginate(&items, 1, 20);
        assert!(slice.is_empty());
        assert_eq!(total, 0);
        assert_eq!(pages, 1);
    }
}

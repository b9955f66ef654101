//! Live REST client.
//!
//! Thin wrapper over gloo-net: every call builds one JSON request against
//! the configured base URL, attaches a bearer token, sends it exactly once
//! and maps the response into the shared envelope.

use async_trait::async_trait;
use futures::future::LocalBoxFuture;
use gloo_net::http::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::cell::Cell;
use std::rc::Rc;

use crate::api::error::{ApiError, ApiResult};
use crate::api::{ApiMessage, ApiResponse, BackendApi};
use crate::models::ai::{
    AiSettings, GeneratedResponse, Insights, Recommendations, ReviewSummary,
};
use crate::models::analytics::{
    AnalyticsOverview, DashboardSummary, PlatformBreakdown, RatingTrendPoint, ResponseTimeStats,
    SentimentAnalysis, TopKeyword,
};
use crate::models::business::Business;
use crate::models::competitor::{Competitor, NewCompetitor};
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

/// Async closure yielding a bearer token. Injected by the auth layer so the
/// client never reaches into identity-provider state itself.
pub type TokenRetriever = Rc<dyn Fn() -> LocalBoxFuture<'static, Result<String, ApiError>>>;

/// Latch ensuring the 401 redirect to `/login` fires at most once per client
/// lifetime, even when several in-flight calls fail together.
#[derive(Clone, Default)]
pub struct RedirectGuard(Rc<Cell<bool>>);

impl RedirectGuard {
    pub fn new() -> Self {
        RedirectGuard::default()
    }

    /// Returns true exactly once.
    pub fn fire(&self) -> bool {
        let already = self.0.replace(true);
        !already
    }
}

/// Shape the backend uses for error bodies; both field names occur.
#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

fn error_message(status: u16, body: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) => parsed.message.or(parsed.error),
        Err(_) if !body.trim().is_empty() => Some(body.trim().to_string()),
        Err(_) => None,
    }
    .unwrap_or_else(|| format!("request failed with status {status}"))
}

pub struct HttpClient {
    base_url: String,
    token: TokenRetriever,
    redirect_guard: RedirectGuard,
}

impl HttpClient {
    pub fn new(base_url: String, token: TokenRetriever) -> Self {
        HttpClient {
            base_url,
            token,
            redirect_guard: RedirectGuard::new(),
        }
    }

    async fn builder(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut builder = RequestBuilder::new(&url)
            .method(method)
            .header("Content-Type", "application/json");
        match (self.token)().await {
            Ok(token) => {
                builder = builder.header("Authorization", &format!("Bearer {token}"));
            }
            Err(err) => {
                // Proceed unauthenticated; the server will answer 401 and the
                // redirect guard takes over from there.
                leptos::logging::warn!("[API] token retrieval failed: {err}");
            }
        }
        builder
    }

    async fn decode<T: DeserializeOwned>(&self, response: Response) -> ApiResult<T> {
        let status = response.status();
        if !response.ok() {
            let body = response.text().await.unwrap_or_default();
            if status == 401 && self.redirect_guard.fire() {
                leptos::logging::warn!("[API] session rejected, redirecting to login");
                if let Some(window) = web_sys::window() {
                    let _ = window.location().set_href("/login");
                }
            }
            return Err(ApiError::Status {
                status,
                message: error_message(status, &body),
            });
        }
        let value = response.json::<T>().await?;
        Ok(value)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let request = self.builder(Method::GET, path).await.build()?;
        let response = request.send().await?;
        self.decode(response).await
    }

    async fn send_json<B: Serialize, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        let request = self.builder(method, path).await.json(body)?;
        let response = request.send().await?;
        self.decode(response).await
    }

    async fn send_empty<T: DeserializeOwned>(&self, method: Method, path: &str) -> ApiResult<T> {
        let request = self.builder(method, path).await.build()?;
        let response = request.send().await?;
        self.decode(response).await
    }
}

#[async_trait(?Send)]
impl BackendApi for HttpClient {
    async fn register(&self, req: RegisterRequest) -> ApiResult<ApiResponse<RegisterResponse>> {
        self.send_json(Method::POST, "/auth/register", &req).await
    }

    async fn get_current_user(&self) -> ApiResult<ApiResponse<User>> {
        self.get("/auth/me").await
    }

    async fn update_profile(&self, req: UpdateProfileRequest) -> ApiResult<ApiResponse<User>> {
        self.send_json(Method::PUT, "/auth/profile", &req).await
    }

    async fn get_my_businesses(&self) -> ApiResult<ApiResponse<Vec<Business>>> {
        self.get("/businesses/my-businesses").await
    }

    async fn get_reviews(&self, filter: ReviewFilter) -> ApiResult<ApiResponse<ReviewPage>> {
        self.get(&format!("/reviews{}", filter.query_string())).await
    }

    async fn reply_to_review(
        &self,
        id: i64,
        response_text: String,
    ) -> ApiResult<ApiResponse<ApiMessage>> {
        self.send_json(
            Method::POST,
            &format!("/reviews/{id}/reply"),
            &serde_json::json!({ "responseText": response_text }),
        )
        .await
    }

    async fn mark_review_as_read(
        &self,
        id: i64,
        is_read: bool,
    ) -> ApiResult<ApiResponse<ApiMessage>> {
        self.send_json(
            Method::PATCH,
            &format!("/reviews/{id}/read"),
            &serde_json::json!({ "isRead": is_read }),
        )
        .await
    }

    async fn flag_review(&self, id: i64, is_flagged: bool) -> ApiResult<ApiResponse<ApiMessage>> {
        self.send_json(
            Method::PATCH,
            &format!("/reviews/{id}/flag"),
            &serde_json::json!({ "isFlagged": is_flagged }),
        )
        .await
    }

    async fn get_business_integrations(
        &self,
        business_id: i64,
    ) -> ApiResult<ApiResponse<Vec<PlatformConnection>>> {
        self.get(&format!("/integrations/business/{business_id}")).await
    }

    async fn connect_platform(
        &self,
        platform: String,
        business_id: i64,
    ) -> ApiResult<ApiResponse<ConnectResponse>> {
        self.send_json(
            Method::POST,
            &format!("/integrations/connect/{platform}"),
            &serde_json::json!({ "businessId": business_id }),
        )
        .await
    }

    async fn disconnect_platform(&self, connection_id: i64) -> ApiResult<ApiResponse<ApiMessage>> {
        self.send_empty(Method::DELETE, &format!("/integrations/{connection_id}"))
            .await
    }

    async fn sync_platform(&self, connection_id: i64) -> ApiResult<ApiResponse<SyncResult>> {
        self.send_empty(Method::POST, &format!("/integrations/{connection_id}/sync"))
            .await
    }

    async fn get_dashboard_summary(
        &self,
        business_id: i64,
    ) -> ApiResult<ApiResponse<DashboardSummary>> {
        self.get(&format!("/analytics/dashboard-summary/{business_id}")).await
    }

    async fn get_analytics_overview(
        &self,
        business_id: i64,
    ) -> ApiResult<ApiResponse<AnalyticsOverview>> {
        self.get(&format!("/analytics/overview/{business_id}")).await
    }

    async fn get_rating_trend(
        &self,
        business_id: i64,
        months: u32,
    ) -> ApiResult<ApiResponse<Vec<RatingTrendPoint>>> {
        self.get(&format!("/analytics/rating-trend/{business_id}?months={months}"))
            .await
    }

    async fn get_platform_breakdown(
        &self,
        business_id: i64,
    ) -> ApiResult<ApiResponse<PlatformBreakdown>> {
        self.get(&format!("/analytics/platform-breakdown/{business_id}")).await
    }

    async fn get_sentiment_analysis(
        &self,
        business_id: i64,
        days: u32,
    ) -> ApiResult<ApiResponse<SentimentAnalysis>> {
        self.get(&format!("/analytics/sentiment-analysis/{business_id}?days={days}"))
            .await
    }

    async fn get_top_keywords(
        &self,
        business_id: i64,
        limit: u32,
    ) -> ApiResult<ApiResponse<Vec<TopKeyword>>> {
        self.get(&format!("/analytics/top-keywords/{business_id}?limit={limit}"))
            .await
    }

    async fn get_response_time(
        &self,
        business_id: i64,
    ) -> ApiResult<ApiResponse<ResponseTimeStats>> {
        self.get(&format!("/analytics/response-time/{business_id}")).await
    }

    async fn get_customers(&self, business_id: i64) -> ApiResult<ApiResponse<Vec<Customer>>> {
        self.get(&format!("/customers/business/{business_id}")).await
    }

    async fn get_campaigns(&self, business_id: i64) -> ApiResult<ApiResponse<Vec<Campaign>>> {
        self.get(&format!("/campaigns/business/{business_id}")).await
    }

    async fn create_campaign(&self, req: NewCampaign) -> ApiResult<ApiResponse<Campaign>> {
        self.send_json(Method::POST, "/campaigns", &req).await
    }

    async fn send_bulk_sms(&self, req: BulkSmsRequest) -> ApiResult<ApiResponse<BulkSmsResult>> {
        self.send_json(Method::POST, "/sms/send-bulk", &req).await
    }

    async fn get_competitors(&self, business_id: i64) -> ApiResult<ApiResponse<Vec<Competitor>>> {
        self.get(&format!("/competitors/{business_id}")).await
    }

    async fn add_competitor(&self, req: NewCompetitor) -> ApiResult<ApiResponse<Competitor>> {
        self.send_json(Method::POST, "/competitors", &req).await
    }

    async fn delete_competitor(&self, id: i64) -> ApiResult<ApiResponse<ApiMessage>> {
        self.send_empty(Method::DELETE, &format!("/competitors/{id}")).await
    }

    async fn sync_competitor(&self, id: i64) -> ApiResult<ApiResponse<Competitor>> {
        self.send_empty(Method::POST, &format!("/competitors/{id}/sync")).await
    }

    async fn get_notifications(
        &self,
        filter: NotificationFilter,
    ) -> ApiResult<ApiResponse<NotificationPage>> {
        self.get(&format!("/notifications{}", filter.query_string())).await
    }

    async fn get_unread_count(&self) -> ApiResult<ApiResponse<UnreadCount>> {
        self.get("/notifications/unread-count").await
    }

    async fn mark_notification_read(&self, id: i64) -> ApiResult<ApiResponse<ApiMessage>> {
        self.send_empty(Method::PUT, &format!("/notifications/{id}/read")).await
    }

    async fn mark_all_notifications_read(&self) -> ApiResult<ApiResponse<ApiMessage>> {
        self.send_empty(Method::PUT, "/notifications/mark-all-read").await
    }

    async fn delete_notification(&self, id: i64) -> ApiResult<ApiResponse<ApiMessage>> {
        self.send_empty(Method::DELETE, &format!("/notifications/{id}")).await
    }

    async fn get_notification_preferences(
        &self,
    ) -> ApiResult<ApiResponse<NotificationPreferences>> {
        self.get("/notifications/preferences").await
    }

    async fn update_notification_preferences(
        &self,
        prefs: NotificationPreferences,
    ) -> ApiResult<ApiResponse<NotificationPreferences>> {
        self.send_json(Method::PUT, "/notifications/preferences", &prefs).await
    }

    async fn get_team_members(&self, business_id: i64) -> ApiResult<ApiResponse<Vec<TeamMember>>> {
        self.get(&format!("/team/{business_id}/members")).await
    }

    async fn get_pending_invitations(
        &self,
        business_id: i64,
    ) -> ApiResult<ApiResponse<Vec<Invitation>>> {
        self.get(&format!("/team/{business_id}/invitations")).await
    }

    async fn invite_team_member(
        &self,
        business_id: i64,
        email: String,
        role: Role,
    ) -> ApiResult<ApiResponse<ApiMessage>> {
        self.send_json(
            Method::POST,
            &format!("/team/{business_id}/invite"),
            &serde_json::json!({ "email": email, "role": role.to_string() }),
        )
        .await
    }

    async fn revoke_invitation(&self, invitation_id: i64) -> ApiResult<ApiResponse<ApiMessage>> {
        self.send_empty(Method::DELETE, &format!("/team/invitations/{invitation_id}"))
            .await
    }

    async fn remove_team_member(
        &self,
        business_id: i64,
        user_id: i64,
    ) -> ApiResult<ApiResponse<ApiMessage>> {
        self.send_empty(Method::DELETE, &format!("/team/{business_id}/members/{user_id}"))
            .await
    }

    async fn update_member_role(
        &self,
        business_id: i64,
        user_id: i64,
        role: Role,
    ) -> ApiResult<ApiResponse<ApiMessage>> {
        self.send_json(
            Method::PUT,
            &format!("/team/{business_id}/members/{user_id}/role"),
            &serde_json::json!({ "role": role.to_string() }),
        )
        .await
    }

    async fn get_invitation_details(
        &self,
        token: String,
    ) -> ApiResult<ApiResponse<InvitationDetails>> {
        self.get(&format!("/team/invitation/{token}/details")).await
    }

    async fn accept_invitation(
        &self,
        token: String,
        req: AcceptInvitationRequest,
    ) -> ApiResult<ApiResponse<ApiMessage>> {
        self.send_json(
            Method::POST,
            &format!("/team/invitation/{token}/accept-and-register"),
            &req,
        )
        .await
    }

    async fn get_ai_settings(&self, business_id: i64) -> ApiResult<ApiResponse<AiSettings>> {
        self.get(&format!("/ai/settings?businessId={business_id}")).await
    }

    async fn update_ai_settings(
        &self,
        business_id: i64,
        settings: AiSettings,
    ) -> ApiResult<ApiResponse<AiSettings>> {
        self.send_json(
            Method::PUT,
            &format!("/ai/settings?businessId={business_id}"),
            &settings,
        )
        .await
    }

    async fn generate_ai_response(
        &self,
        review_id: i64,
    ) -> ApiResult<ApiResponse<GeneratedResponse>> {
        self.send_empty(Method::POST, &format!("/ai/generate-response/{review_id}"))
            .await
    }

    async fn improve_ai_response(
        &self,
        review_id: i64,
        original: String,
    ) -> ApiResult<ApiResponse<GeneratedResponse>> {
        self.send_json(
            Method::POST,
            &format!("/ai/improve-response/{review_id}"),
            &serde_json::json!({ "originalResponse": original }),
        )
        .await
    }

    async fn get_analytics_insights(&self, business_id: i64) -> ApiResult<ApiResponse<Insights>> {
        self.get(&format!("/ai/insights/analytics/{business_id}")).await
    }

    async fn get_competitor_insights(&self, business_id: i64) -> ApiResult<ApiResponse<Insights>> {
        self.get(&format!("/ai/insights/competitors/{business_id}")).await
    }

    async fn get_review_summary(
        &self,
        business_id: i64,
        days: u32,
    ) -> ApiResult<ApiResponse<ReviewSummary>> {
        self.get(&format!("/ai/insights/review-summary/{business_id}?days={days}"))
            .await
    }

    async fn get_recommendations(
        &self,
        business_id: i64,
    ) -> ApiResult<ApiResponse<Recommendations>> {
        self.get(&format!("/ai/insights/recommendations/{business_id}")).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redirect_guard_fires_once() {
        let guard = RedirectGuard::new();
        assert!(guard.fire());
        assert!(!guard.fire());
        let clone = guard.clone();
        assert!(!clone.fire());
    }

    #[test]
    fn error_message_prefers_json_message_field() {
        assert_eq!(
            error_message(400, r#"{"message":"invalid phone number"}"#),
            "invalid phone number"
        );
        assert_eq!(
            error_message(500, r#"{"error":"internal error"}"#),
            "internal error"
        );
    }

    #[test]
    fn error_message_falls_back_to_body_then_status() {
        assert_eq!(error_message(502, "Bad Gateway"), "Bad Gateway");
        assert_eq!(error_message(503, "  "), "request failed with status 503");
        assert_eq!(error_message(500, "{}"), "request failed with status 500");
    }
}

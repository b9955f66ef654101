//! API access layer.
//!
//! One typed method per backend operation, behind a strategy trait so page
//! code never branches on mode: [`HttpClient`] talks to the live REST
//! backend, [`MockApi`] serves fixtures after an artificial delay. The
//! strategy is selected once at startup from build-time configuration and
//! injected through Leptos context.

pub mod error;
pub mod fixtures;
pub mod http;
pub mod mock;

use async_trait::async_trait;
use leptos::{expect_context, provide_context};
use serde::{Deserialize, Serialize};
use std::ops::Deref;
use std::rc::Rc;

use crate::auth::AuthContext;
use crate::config;
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

pub use error::{ApiError, ApiResult};
pub use http::HttpClient;
pub use mock::MockApi;

/// The `{ data: T }` envelope both backends return, so callers are
/// mode-agnostic.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiResponse<T> {
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        ApiResponse { data }
    }
}

/// Plain acknowledgement body for mutations.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiMessage {
    pub message: String,
}

impl ApiMessage {
    pub fn new(message: impl Into<String>) -> Self {
        ApiMessage {
            message: message.into(),
        }
    }
}

/// One method per backend operation. Both implementations accept the same
/// parameters and return the same envelope.
#[async_trait(?Send)]
pub trait BackendApi {
    // auth
    async fn register(&self, req: RegisterRequest) -> ApiResult<ApiResponse<RegisterResponse>>;
    async fn get_current_user(&self) -> ApiResult<ApiResponse<User>>;
    async fn update_profile(&self, req: UpdateProfileRequest) -> ApiResult<ApiResponse<User>>;

    // businesses
    async fn get_my_businesses(&self) -> ApiResult<ApiResponse<Vec<Business>>>;

    // reviews
    async fn get_reviews(&self, filter: ReviewFilter) -> ApiResult<ApiResponse<ReviewPage>>;
    async fn reply_to_review(
        &self,
        id: i64,
        response_text: String,
    ) -> ApiResult<ApiResponse<ApiMessage>>;
    async fn mark_review_as_read(&self, id: i64, is_read: bool)
        -> ApiResult<ApiResponse<ApiMessage>>;
    async fn flag_review(&self, id: i64, is_flagged: bool) -> ApiResult<ApiResponse<ApiMessage>>;

    // integrations
    async fn get_business_integrations(
        &self,
        business_id: i64,
    ) -> ApiResult<ApiResponse<Vec<PlatformConnection>>>;
    async fn connect_platform(
        &self,
        platform: String,
        business_id: i64,
    ) -> ApiResult<ApiResponse<ConnectResponse>>;
    async fn disconnect_platform(&self, connection_id: i64) -> ApiResult<ApiResponse<ApiMessage>>;
    async fn sync_platform(&self, connection_id: i64) -> ApiResult<ApiResponse<SyncResult>>;

    // analytics
    async fn get_dashboard_summary(
        &self,
        business_id: i64,
    ) -> ApiResult<ApiResponse<DashboardSummary>>;
    async fn get_analytics_overview(
        &self,
        business_id: i64,
    ) -> ApiResult<ApiResponse<AnalyticsOverview>>;
    async fn get_rating_trend(
        &self,
        business_id: i64,
        months: u32,
    ) -> ApiResult<ApiResponse<Vec<RatingTrendPoint>>>;
    async fn get_platform_breakdown(
        &self,
        business_id: i64,
    ) -> ApiResult<ApiResponse<PlatformBreakdown>>;
    async fn get_sentiment_analysis(
        &self,
        business_id: i64,
        days: u32,
    ) -> ApiResult<ApiResponse<SentimentAnalysis>>;
    async fn get_top_keywords(
        &self,
        business_id: i64,
        limit: u32,
    ) -> ApiResult<ApiResponse<Vec<TopKeyword>>>;
    async fn get_response_time(
        &self,
        business_id: i64,
    ) -> ApiResult<ApiResponse<ResponseTimeStats>>;

    // customers, campaigns, sms
    async fn get_customers(&self, business_id: i64) -> ApiResult<ApiResponse<Vec<Customer>>>;
    async fn get_campaigns(&self, business_id: i64) -> ApiResult<ApiResponse<Vec<Campaign>>>;
    async fn create_campaign(&self, req: NewCampaign) -> ApiResult<ApiResponse<Campaign>>;
    async fn send_bulk_sms(&self, req: BulkSmsRequest) -> ApiResult<ApiResponse<BulkSmsResult>>;

    // competitors
    async fn get_competitors(&self, business_id: i64) -> ApiResult<ApiResponse<Vec<Competitor>>>;
    async fn add_competitor(&self, req: NewCompetitor) -> ApiResult<ApiResponse<Competitor>>;
    async fn delete_competitor(&self, id: i64) -> ApiResult<ApiResponse<ApiMessage>>;
    async fn sync_competitor(&self, id: i64) -> ApiResult<ApiResponse<Competitor>>;

    // notifications
    async fn get_notifications(
        &self,
        filter: NotificationFilter,
    ) -> ApiResult<ApiResponse<NotificationPage>>;
    async fn get_unread_count(&self) -> ApiResult<ApiResponse<UnreadCount>>;
    async fn mark_notification_read(&self, id: i64) -> ApiResult<ApiResponse<ApiMessage>>;
    async fn mark_all_notifications_read(&self) -> ApiResult<ApiResponse<ApiMessage>>;
    async fn delete_notification(&self, id: i64) -> ApiResult<ApiResponse<ApiMessage>>;
    async fn get_notification_preferences(
        &self,
    ) -> ApiResult<ApiResponse<NotificationPreferences>>;
    async fn update_notification_preferences(
        &self,
        prefs: NotificationPreferences,
    ) -> ApiResult<ApiResponse<NotificationPreferences>>;

    // team
    async fn get_team_members(&self, business_id: i64) -> ApiResult<ApiResponse<Vec<TeamMember>>>;
    async fn get_pending_invitations(
        &self,
        business_id: i64,
    ) -> ApiResult<ApiResponse<Vec<Invitation>>>;
    async fn invite_team_member(
        &self,
        business_id: i64,
        email: String,
        role: Role,
    ) -> ApiResult<ApiResponse<ApiMessage>>;
    async fn revoke_invitation(&self, invitation_id: i64) -> ApiResult<ApiResponse<ApiMessage>>;
    async fn remove_team_member(
        &self,
        business_id: i64,
        user_id: i64,
    ) -> ApiResult<ApiResponse<ApiMessage>>;
    async fn update_member_role(
        &self,
        business_id: i64,
        user_id: i64,
        role: Role,
    ) -> ApiResult<ApiResponse<ApiMessage>>;
    async fn get_invitation_details(
        &self,
        token: String,
    ) -> ApiResult<ApiResponse<InvitationDetails>>;
    async fn accept_invitation(
        &self,
        token: String,
        req: AcceptInvitationRequest,
    ) -> ApiResult<ApiResponse<ApiMessage>>;

    // ai
    async fn get_ai_settings(&self, business_id: i64) -> ApiResult<ApiResponse<AiSettings>>;
    async fn update_ai_settings(
        &self,
        business_id: i64,
        settings: AiSettings,
    ) -> ApiResult<ApiResponse<AiSettings>>;
    async fn generate_ai_response(
        &self,
        review_id: i64,
    ) -> ApiResult<ApiResponse<GeneratedResponse>>;
    async fn improve_ai_response(
        &self,
        review_id: i64,
        original: String,
    ) -> ApiResult<ApiResponse<GeneratedResponse>>;
    async fn get_analytics_insights(&self, business_id: i64) -> ApiResult<ApiResponse<Insights>>;
    async fn get_competitor_insights(&self, business_id: i64) -> ApiResult<ApiResponse<Insights>>;
    async fn get_review_summary(
        &self,
        business_id: i64,
        days: u32,
    ) -> ApiResult<ApiResponse<ReviewSummary>>;
    async fn get_recommendations(&self, business_id: i64)
        -> ApiResult<ApiResponse<Recommendations>>;
}

/// Handle to the selected backend strategy, shared through Leptos context.
#[derive(Clone)]
pub struct Api(Rc<dyn BackendApi>);

impl Api {
    /// Resolves the process-wide mode once. Demo mode never issues a real
    /// network request; live mode gets its token retriever from the auth
    /// integration at construction time.
    pub fn from_config(auth: &AuthContext) -> Api {
        if config::demo_mode() {
            leptos::logging::log!("[API] demo mode enabled, all calls served from fixtures");
            Api(Rc::new(MockApi::new()))
        } else {
            Api(Rc::new(HttpClient::new(
                config::api_base_url(),
                auth.token_retriever(),
            )))
        }
    }

    pub fn mock() -> Api {
        Api(Rc::new(MockApi::new()))
    }

    pub fn provide(self) {
        provide_context(self);
    }

    pub fn expect() -> Api {
        expect_context::<Api>()
    }
}

impl Deref for Api {
    type Target = dyn BackendApi;

    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}

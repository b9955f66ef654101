/// Main application entry point for ReviewHub.
/// Wires the auth provider, the API handle and the router together.
use leptos::*;
use leptos_meta::{provide_meta_context, Stylesheet, Title};
use leptos_router::{Redirect, Route, Router, Routes};

use crate::api::Api;
use crate::auth::AuthContext;
use crate::components::{AuthGuard, Navigation};
use crate::pages::accept_invitation::AcceptInvitationPage;
use crate::pages::ai_insights::AiInsightsPage;
use crate::pages::analytics::AnalyticsPage;
use crate::pages::competitors::CompetitorsPage;
use crate::pages::dashboard::DashboardPage;
use crate::pages::integrations::IntegrationsPage;
use crate::pages::login::LoginPage;
use crate::pages::notifications::NotificationsPage;
use crate::pages::pos_automation::PosAutomationPage;
use crate::pages::register_complete::RegisterCompletePage;
use crate::pages::reviews::ReviewsPage;
use crate::pages::settings::SettingsPage;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/reviewhub.css"/>
        <Title text="ReviewHub"/>
        <Router>
            <AppProviders/>
        </Router>
    }
}

/// Contexts that need the router (the redirect login flow navigates) are
/// installed here, inside the `Router` scope.
#[component]
fn AppProviders() -> impl IntoView {
    let auth = AuthContext::provide_from_config();
    Api::from_config(&auth).provide();

    view! {
        <Routes>
            <Route path="/login" view=LoginPage/>
            <Route path="/accept-invitation" view=AcceptInvitationPage/>
            <Route
                path="/register-complete"
                view=|| {
                    view! {
                        <AuthGuard>
                            <RegisterCompletePage/>
                        </AuthGuard>
                    }
                }
            />
            <Route path="/" view=|| view! { <Redirect path="/dashboard"/> }/>
            <Route path="/dashboard" view=|| protected(DashboardPage)/>
            <Route path="/reviews" view=|| protected(ReviewsPage)/>
            <Route path="/integrations" view=|| protected(IntegrationsPage)/>
            <Route path="/analytics" view=|| protected(AnalyticsPage)/>
            <Route path="/competitors" view=|| protected(CompetitorsPage)/>
            <Route path="/pos-automation" view=|| protected(PosAutomationPage)/>
            <Route path="/ai-insights" view=|| protected(AiInsightsPage)/>
            <Route path="/notifications" view=|| protected(NotificationsPage)/>
            <Route path="/settings" view=|| protected(SettingsPage)/>
        </Routes>
    }
}

/// Wraps a page in the auth gate and the navigation chrome.
fn protected<F, V>(page: F) -> impl IntoView
where
    F: Fn() -> V + Clone + 'static,
    V: IntoView,
{
    view! {
        <AuthGuard>
            {
                let page = page.clone();
                view! { <Navigation>{page()}</Navigation> }
            }
        </AuthGuard>
    }
}

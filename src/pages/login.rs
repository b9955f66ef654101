//! Public landing page with the sign-in entry point.

use leptos::logging::log;
use leptos::*;
use leptos_router::{use_navigate, use_query_map};

use crate::auth::{take_return_path, AuthContext};

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = AuthContext::expect();
    let query = use_query_map();

    let registration_notice = move || {
        query.with(|q| {
            (q.get("message").map(String::as_str) == Some("registration_success")).then(|| {
                view! {
                    <div class="notice-banner">
                        "Registration complete. Sign in to get started."
                    </div>
                }
            })
        })
    };

    // Already signed in: skip the landing page.
    {
        let is_authenticated = auth.is_authenticated;
        let is_loading = auth.is_loading;
        create_effect(move |_| {
            if is_authenticated.get() && !is_loading.get() {
                let target = take_return_path().unwrap_or_else(|| "/dashboard".to_string());
                log!("[AUTH] already signed in, continuing to {target}");
                let navigate = use_navigate();
                navigate(&target, Default::default());
            }
        });
    }

    let sign_in = {
        let auth = auth.clone();
        move |_| {
            auth.login_with_redirect(Some("/dashboard".to_string()));
        }
    };

    view! {
        <div class="login-page">
            <div class="marketing-panel">
                <h1>"ReviewHub"</h1>
                <p class="tagline">"Every review. Every platform. One inbox."</p>
                <ul class="feature-list">
                    <li>"Collect reviews from Google, Yelp, Facebook and more"</li>
                    <li>"Reply faster with AI-drafted responses"</li>
                    <li>"Track ratings, sentiment and competitors over time"</li>
                    <li>"Reach customers with SMS review campaigns"</li>
                </ul>
            </div>
            <div class="signin-card">
                {registration_notice}
                <h2>"Welcome back"</h2>
                <p>"Sign in to your dashboard."</p>
                <button class="primary signin-button" on:click=sign_in>
                    "Sign In"
                </button>
            </div>
        </div>
    }
}

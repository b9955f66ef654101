//! Gate in front of every protected route.
//!
//! Children render only after the identity provider has resolved AND the
//! backend has confirmed the account. A 404 from the user check means the
//! identity exists but was never registered; 403 means the account was
//! deactivated. The check re-runs on every mount; nothing is cached across
//! navigations.

use leptos::logging::log;
use leptos::*;
use leptos_router::use_navigate;

use crate::api::Api;
use crate::auth::{self, AuthContext};

/// Where the gate lands once identity and backend status are known.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateOutcome {
    RenderChildren,
    RedirectToLogin,
    RedirectToRegistration,
    InactiveScreen,
}

impl GateOutcome {
    /// Total over every {is_authenticated, backend status} combination, so
    /// exactly one outcome holds.
    pub fn resolve(is_authenticated: bool, backend_status: Option<u16>) -> GateOutcome {
        if !is_authenticated {
            return GateOutcome::RedirectToLogin;
        }
        match backend_status {
            None => GateOutcome::RenderChildren,
            Some(404) => GateOutcome::RedirectToRegistration,
            Some(403) => GateOutcome::InactiveScreen,
            Some(401) => GateOutcome::RedirectToLogin,
            // Transient server trouble is not an auth problem; let the page
            // surface its own errors.
            Some(_) => GateOutcome::RenderChildren,
        }
    }
}

#[derive(Clone, Copy, PartialEq)]
enum GatePhase {
    Loading,
    Checking,
    Ready(GateOutcome),
}

#[component]
pub fn AuthGuard(children: ChildrenFn) -> impl IntoView {
    let auth = AuthContext::expect();
    let api = Api::expect();
    let (phase, set_phase) = create_signal(GatePhase::Loading);
    let children = store_value(children);

    create_effect(move |_| {
        if auth.is_loading.get() {
            set_phase.set(GatePhase::Loading);
            return;
        }
        if !auth.is_authenticated.get() {
            set_phase.set(GatePhase::Ready(GateOutcome::RedirectToLogin));
            return;
        }
        set_phase.set(GatePhase::Checking);
        let api = api.clone();
        spawn_local(async move {
            let status = match api.get_current_user().await {
                Ok(_) => None,
                Err(err) => {
                    log!("[AUTH] user check failed: {err}");
                    err.status()
                }
            };
            set_phase.set(GatePhase::Ready(GateOutcome::resolve(true, status)));
        });
    });

    view! {
        {move || match phase.get() {
            GatePhase::Loading | GatePhase::Checking => view! {
                <div class="auth-gate-loading">
                    <div class="spinner"></div>
                    <p>"Checking your session..."</p>
                </div>
            }
            .into_view(),
            GatePhase::Ready(GateOutcome::RenderChildren) => {
                children.with_value(|children| children()).into_view()
            }
            GatePhase::Ready(GateOutcome::RedirectToLogin) => {
                create_effect(move |_| {
                    if let Some(window) = web_sys::window() {
                        if let Ok(path) = window.location().pathname() {
                            auth::store_return_path(&path);
                        }
                    }
                    let navigate = use_navigate();
                    navigate("/login", Default::default());
                });
                view! { <div class="auth-gate-loading"></div> }.into_view()
            }
            GatePhase::Ready(GateOutcome::RedirectToRegistration) => {
                create_effect(move |_| {
                    let already_there = web_sys::window()
                        .and_then(|w| w.location().pathname().ok())
                        .is_some_and(|p| p == "/register-complete");
                    if !already_there {
                        let navigate = use_navigate();
                        navigate("/register-complete", Default::default());
                    }
                });
                view! { <div class="auth-gate-loading"></div> }.into_view()
            }
            GatePhase::Ready(GateOutcome::InactiveScreen) => view! {
                <div class="inactive-account">
                    <h1>"Account Deactivated"</h1>
                    <p>
                        "Your account has been deactivated. If you believe this is a \
                         mistake, please reach out to our support team."
                    </p>
                    <a href="mailto:support@reviewhub.com">"Contact Support"</a>
                </div>
            }
            .into_view(),
        }}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unauthenticated_always_goes_to_login() {
        assert_eq!(
            GateOutcome::resolve(false, None),
            GateOutcome::RedirectToLogin
        );
        assert_eq!(
            GateOutcome::resolve(false, Some(404)),
            GateOutcome::RedirectToLogin
        );
    }

    #[test]
    fn backend_status_routes_authenticated_visitors() {
        assert_eq!(GateOutcome::resolve(true, None), GateOutcome::RenderChildren);
        assert_eq!(
            GateOutcome::resolve(true, Some(404)),
            GateOutcome::RedirectToRegistration
        );
        assert_eq!(
            GateOutcome::resolve(true, Some(403)),
            GateOutcome::InactiveScreen
        );
        assert_eq!(
            GateOutcome::resolve(true, Some(401)),
            GateOutcome::RedirectToLogin
        );
    }

    #[test]
    fn server_errors_do_not_block_rendering() {
        for status in [400, 429, 500, 502, 503] {
            assert_eq!(
                GateOutcome::resolve(true, Some(status)),
                GateOutcome::RenderChildren
            );
        }
    }
}

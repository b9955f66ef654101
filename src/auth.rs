//! Identity provider integration.
//!
//! The app consumes a six-member surface: {is_authenticated, is_loading,
//! user, get_access_token, login_with_redirect, logout}. Two providers
//! implement it behind [`AuthContext`]: a demo provider that starts signed
//! in as the demo user, and a redirect provider that drives the hosted
//! login flow and parses tokens out of the callback fragment. Silent
//! renewal and MFA stay the identity service's business.

use futures::future::LocalBoxFuture;
use futures::FutureExt;
use gloo_timers::future::sleep;
use leptos::{
    create_effect, create_signal, expect_context, provide_context, spawn_local, ReadSignal,
    SignalGet, SignalSet, WriteSignal,
};
use serde::Deserialize;
use std::rc::Rc;
use std::time::Duration;

use crate::api::error::ApiError;
use crate::api::http::TokenRetriever;
use crate::config;

const TOKEN_KEY: &str = "reviewhub.access_token";
const RETURN_TO_KEY: &str = "reviewhub.return_to";
const DEMO_TOKEN: &str = "demo-token-12345";

/// Claims the UI cares about, decoded from the id token.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AuthUser {
    pub sub: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

#[derive(Clone)]
pub struct AuthContext {
    pub is_authenticated: ReadSignal<bool>,
    pub is_loading: ReadSignal<bool>,
    pub user: ReadSignal<Option<AuthUser>>,
    token: TokenRetriever,
    login: Rc<dyn Fn(Option<String>)>,
    logout: Rc<dyn Fn()>,
}

impl AuthContext {
    /// Selects the provider matching the build-time mode and installs it in
    /// context. Must run inside a reactive scope.
    pub fn provide_from_config() -> AuthContext {
        let auth = if config::demo_mode() {
            AuthContext::demo()
        } else {
            AuthContext::redirect()
        };
        provide_context(auth.clone());
        auth
    }

    pub fn expect() -> AuthContext {
        expect_context::<AuthContext>()
    }

    /// Capability handed to the HTTP client so it never touches provider
    /// state directly.
    pub fn token_retriever(&self) -> TokenRetriever {
        self.token.clone()
    }

    /// Starts the login flow; `return_to` is restored after the callback.
    pub fn login_with_redirect(&self, return_to: Option<String>) {
        (self.login)(return_to);
    }

    pub fn logout(&self) {
        (self.logout)();
    }

    /// Provider that is always signed in as the demo account. Login
    /// resolves after a short simulated delay so spinners stay honest.
    pub fn demo() -> AuthContext {
        let (is_authenticated, set_authenticated) = create_signal(true);
        let (is_loading, set_loading) = create_signal(false);
        let (user, _set_user) = create_signal(Some(AuthUser {
            sub: "demo|user-1".to_string(),
            name: "Demo User".to_string(),
            email: "demo@reviewhub.com".to_string(),
        }));

        let login = Rc::new(move |return_to: Option<String>| {
            if let Some(path) = return_to {
                store_return_path(&path);
            }
            set_loading.set(true);
            spawn_local(async move {
                sleep(Duration::from_millis(500)).await;
                set_authenticated.set(true);
                set_loading.set(false);
                navigate_to(&take_return_path().unwrap_or_else(|| "/".to_string()));
            });
        });

        let logout = Rc::new(move || {
            set_authenticated.set(false);
            navigate_to("/login");
        });

        AuthContext {
            is_authenticated,
            is_loading,
            user,
            token: Rc::new(|| async { Ok::<_, ApiError>(DEMO_TOKEN.to_string()) }.boxed_local()),
            login,
            logout,
        }
    }

    /// Provider backed by a hosted-login identity service using the
    /// implicit flow: login navigates to the authorize endpoint, the
    /// callback lands back on the app with tokens in the URL fragment.
    pub fn redirect() -> AuthContext {
        let (is_authenticated, set_authenticated) = create_signal(false);
        let (is_loading, set_loading) = create_signal(true);
        let (user, set_user) = create_signal(None::<AuthUser>);

        // Fragment parsing touches window, so it only runs on the client.
        create_effect(move |_| {
            resolve_session(set_authenticated, set_loading, set_user);
        });

        let login = Rc::new(move |return_to: Option<String>| {
            if let Some(path) = return_to {
                store_return_path(&path);
            }
            if let Some(window) = web_sys::window() {
                let origin = window.location().origin().unwrap_or_default();
                let url = build_authorize_url(
                    config::auth_domain(),
                    config::auth_client_id(),
                    config::auth_audience(),
                    &origin,
                );
                let _ = window.location().set_href(&url);
            }
        });

        let logout = Rc::new(move || {
            set_authenticated.set(false);
            set_user.set(None);
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(TOKEN_KEY);
            }
            if let Some(window) = web_sys::window() {
                let origin = window.location().origin().unwrap_or_default();
                let url = format!(
                    "https://{}/v2/logout?client_id={}&returnTo={}",
                    config::auth_domain(),
                    config::auth_client_id(),
                    urlencoding::encode(&origin),
                );
                let _ = window.location().set_href(&url);
            }
        });

        AuthContext {
            is_authenticated,
            is_loading,
            user,
            token: Rc::new(|| {
                async {
                    stored_token().ok_or_else(|| ApiError::Token("no active session".to_string()))
                }
                .boxed_local()
            }),
            login,
            logout,
        }
    }
}

fn resolve_session(
    set_authenticated: WriteSignal<bool>,
    set_loading: WriteSignal<bool>,
    set_user: WriteSignal<Option<AuthUser>>,
) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let fragment = window.location().hash().unwrap_or_default();
    if let Some(tokens) = parse_callback_fragment(&fragment) {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(TOKEN_KEY, &tokens.access_token);
        }
        set_user.set(decode_claims(&tokens.id_token));
        set_authenticated.set(true);
        set_loading.set(false);
        // Strip the fragment and land where the user wanted to go.
        let target = take_return_path().unwrap_or_else(|| "/".to_string());
        navigate_to(&target);
        return;
    }
    if stored_token().is_some() {
        set_authenticated.set(true);
    }
    set_loading.set(false);
}

struct CallbackTokens {
    access_token: String,
    id_token: String,
}

/// Pulls `access_token` and `id_token` out of an implicit-flow callback
/// fragment like `#access_token=…&id_token=…&token_type=Bearer`.
fn parse_callback_fragment(fragment: &str) -> Option<CallbackTokens> {
    let fragment = fragment.strip_prefix('#')?;
    let mut access_token = None;
    let mut id_token = None;
    for pair in fragment.split('&') {
        let (key, value) = pair.split_once('=')?;
        match key {
            "access_token" => access_token = Some(value.to_string()),
            "id_token" => id_token = Some(value.to_string()),
            _ => {}
        }
    }
    Some(CallbackTokens {
        access_token: access_token?,
        id_token: id_token?,
    })
}

fn build_authorize_url(domain: &str, client_id: &str, audience: &str, origin: &str) -> String {
    format!(
        "https://{domain}/authorize?response_type={}&client_id={client_id}&redirect_uri={}&scope={}&audience={}",
        urlencoding::encode("token id_token"),
        urlencoding::encode(origin),
        urlencoding::encode("openid profile email"),
        urlencoding::encode(audience),
    )
}

/// JWT payloads are base64url without padding; atob wants standard base64.
fn normalize_base64url(segment: &str) -> String {
    let mut out: String = segment
        .chars()
        .map(|c| match c {
            '-' => '+',
            '_' => '/',
            other => other,
        })
        .collect();
    while out.len() % 4 != 0 {
        out.push('=');
    }
    out
}

fn decode_claims(id_token: &str) -> Option<AuthUser> {
    let payload = id_token.split('.').nth(1)?;
    let window = web_sys::window()?;
    let decoded = window.atob(&normalize_base64url(payload)).ok()?;
    serde_json::from_str(&decoded).ok()
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

fn stored_token() -> Option<String> {
    local_storage()?.get_item(TOKEN_KEY).ok().flatten()
}

/// Stashes the path a visitor asked for before being bounced to login.
pub fn store_return_path(path: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(RETURN_TO_KEY, path);
    }
}

/// One-shot read; the stash is cleared so stale paths never resurface.
pub fn take_return_path() -> Option<String> {
    let storage = local_storage()?;
    let path = storage.get_item(RETURN_TO_KEY).ok().flatten()?;
    let _ = storage.remove_item(RETURN_TO_KEY);
    Some(path)
}

fn navigate_to(path: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href(path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn callback_fragment_yields_both_tokens() {
        let tokens =
            parse_callback_fragment("#access_token=abc123&id_token=xyz789&token_type=Bearer")
                .unwrap();
        assert_eq!(tokens.access_token, "abc123");
        assert_eq!(tokens.id_token, "xyz789");
    }

    #[test]
    fn fragment_without_tokens_is_rejected() {
        assert!(parse_callback_fragment("").is_none());
        assert!(parse_callback_fragment("#error=access_denied").is_none());
        assert!(parse_callback_fragment("#access_token=only").is_none());
    }

    #[test]
    fn authorize_url_encodes_every_component() {
        let url = build_authorize_url(
            "tenant.auth0.com",
            "client-1",
            "https://api.reviewhub.com",
            "http://localhost:3004",
        );
        assert!(url.starts_with("https://tenant.auth0.com/authorize?response_type=token%20id_token"));
        assert!(url.contains("client_id=client-1"));
        assert!(url.contains("redirect_uri=http%3A%2F%2Flocalhost%3A3004"));
        assert!(url.contains("scope=openid%20profile%20email"));
        assert!(url.contains("audience=https%3A%2F%2Fapi.reviewhub.com"));
    }

    #[test]
    fn base64url_segments_are_padded_and_translated() {
        assert_eq!(normalize_base64url("eyJzdWIiOiIxIn0"), "eyJzdWIiOiIxIn0=");
        assert_eq!(normalize_base64url("a-b_"), "a+b/");
    }
}

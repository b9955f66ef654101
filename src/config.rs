//! Build-time configuration.
//!
//! Every knob is resolved once per build via `option_env!`; there is no
//! runtime configuration surface. Demo mode swaps the whole API layer and
//! identity provider for in-memory fakes, so it must be baked in at compile
//! time rather than toggled per request.

pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";

/// `REVIEWHUB_DEMO_MODE=true` serves fixtures instead of contacting a backend.
pub fn demo_mode() -> bool {
    matches!(option_env!("REVIEWHUB_DEMO_MODE"), Some("true"))
}

pub fn api_base_url() -> String {
    option_env!("REVIEWHUB_API_URL")
        .unwrap_or(DEFAULT_API_URL)
        .to_string()
}

pub fn auth_domain() -> &'static str {
    option_env!("REVIEWHUB_AUTH_DOMAIN").unwrap_or("your-domain.auth0.com")
}

pub fn auth_client_id() -> &'static str {
    option_env!("REVIEWHUB_AUTH_CLIENT_ID").unwrap_or("your-client-id")
}

pub fn auth_audience() -> &'static str {
    option_env!("REVIEWHUB_AUTH_AUDIENCE").unwrap_or("https://api.reviewhub.com")
}

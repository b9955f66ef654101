//! Application shell: fixed top bar, side drawer on desktop, hamburger menu
//! on mobile. Wraps every protected page.

use leptos::logging::log;
use leptos::*;
use leptos_router::{use_location, A};
use std::time::Duration;

use crate::api::Api;
use crate::auth::AuthContext;

const NAV_ITEMS: [(&str, &str); 8] = [
    ("/dashboard", "Dashboard"),
    ("/reviews", "Reviews"),
    ("/integrations", "Integrations"),
    ("/analytics", "Analytics"),
    ("/pos-automation", "POS Automation"),
    ("/competitors", "Competitors"),
    ("/ai-insights", "AI Insights"),
    ("/settings", "Settings"),
];

const POLL_INTERVAL_SECS: u64 = 30;

/// Exact count up to nine, "9+" beyond.
pub fn badge_label(count: u32) -> String {
    if count > 9 {
        "9+".to_string()
    } else {
        count.to_string()
    }
}

#[component]
pub fn Navigation(children: Children) -> impl IntoView {
    let auth = AuthContext::expect();
    let api = Api::expect();
    let location = use_location();
    let (unread, set_unread) = create_signal(0u32);
    let (menu_open, set_menu_open) = create_signal(false);

    // Unread badge poll, one fetch immediately and then every 30 seconds
    // for the shell's lifetime.
    {
        let api = api.clone();
        create_effect(move |_| {
            let fetch = {
                let api = api.clone();
                move || {
                    let api = api.clone();
                    spawn_local(async move {
                        match api.get_unread_count().await {
                            Ok(response) => set_unread.set(response.data.count),
                            Err(err) => log!("[NAV] unread count fetch failed: {err}"),
                        }
                    });
                }
            };
            fetch();
            match set_interval_with_handle(fetch, Duration::from_secs(POLL_INTERVAL_SECS)) {
                Ok(handle) => on_cleanup(move || handle.clear()),
                Err(err) => log!("[NAV] could not start unread poll: {err:?}"),
            }
        });
    }

    let user_name = {
        let auth = auth.clone();
        move || {
            auth.user
                .get()
                .map(|u| u.name)
                .unwrap_or_else(|| "Account".to_string())
        }
    };

    let on_logout = {
        let auth = auth.clone();
        move |_| auth.logout()
    };

    // Memo is Copy, so each nav item closure gets its own handle.
    let pathname = location.pathname;

    view! {
        <div class="app-shell">
            <header class="topbar">
                <button
                    class="hamburger"
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    "\u{2630}"
                </button>
                <A href="/dashboard" class="brand">"ReviewHub"</A>
                <div class="topbar-actions">
                    <A href="/notifications" class="bell">
                        "\u{1F514}"
                        <Show when={move || unread.get() > 0}>
                            <span class="badge">{move || badge_label(unread.get())}</span>
                        </Show>
                    </A>
                    <div class="user-menu">
                        <span class="user-name">{user_name}</span>
                        <button class="logout" on:click=on_logout>"Log Out"</button>
                    </div>
                </div>
            </header>
            <nav class=move || {
                if menu_open.get() { "side-nav open" } else { "side-nav" }
            }>
                {NAV_ITEMS
                    .iter()
                    .map(|(href, label)| {
                        let href = *href;
                        let label = *label;
                        view! {
                            <A
                                href=href
                                class=move || {
                                    if pathname.get() == href { "nav-item active" } else { "nav-item" }
                                }
                                on:click=move |_| set_menu_open.set(false)
                            >
                                {label}
                            </A>
                        }
                    })
                    .collect::<Vec<_>>()}
            </nav>
            <main class="page-content">{children()}</main>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn badge_shows_exact_count_up_to_nine() {
        assert_eq!(badge_label(0), "0");
        assert_eq!(badge_label(1), "1");
        assert_eq!(badge_label(9), "9");
    }

    #[test]
    fn badge_caps_above_nine() {
        assert_eq!(badge_label(10), "9+");
        assert_eq!(badge_label(250), "9+");
    }

    #[test]
    fn every_section_has_a_nav_entry() {
        assert_eq!(NAV_ITEMS.len(), 8);
        assert!(NAV_ITEMS.iter().all(|(href, _)| href.starts_with('/')));
    }
}

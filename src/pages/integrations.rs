//! Platform connections: a static catalog of supported review platforms
//! joined against this business's live connections.

use chrono::Utc;
use leptos::logging::log;
use leptos::*;

use crate::api::Api;
use crate::models::platform::PlatformConnection;
use crate::pages::BUSINESS_ID;
use crate::utils::time::time_since;

struct CatalogEntry {
    name: &'static str,
    description: &'static str,
    connectable: bool,
}

const CATALOG: [CatalogEntry; 5] = [
    CatalogEntry {
        name: "Google",
        description: "Google Business Profile reviews",
        connectable: true,
    },
    CatalogEntry {
        name: "Yelp",
        description: "Yelp business page reviews",
        connectable: true,
    },
    CatalogEntry {
        name: "Facebook",
        description: "Facebook page recommendations",
        connectable: true,
    },
    CatalogEntry {
        name: "TripAdvisor",
        description: "TripAdvisor listing reviews",
        connectable: false,
    },
    CatalogEntry {
        name: "Zomato",
        description: "Zomato restaurant reviews",
        connectable: false,
    },
];

fn confirm(message: &str) -> bool {
    web_sys::window()
        .map(|w| w.confirm_with_message(message).unwrap_or(false))
        .unwrap_or(false)
}

#[component]
pub fn IntegrationsPage() -> impl IntoView {
    let api = Api::expect();
    let (connections, set_connections) = create_signal(Vec::<PlatformConnection>::new());
    let (loading, set_loading) = create_signal(true);
    let (error, set_error) = create_signal(None::<String>);
    let (syncing, set_syncing) = create_signal(None::<i64>);
    let (reload, set_reload) = create_signal(0u32);

    {
        let api = api.clone();
        create_effect(move |_| {
            let _ = reload.get();
            let api = api.clone();
            set_loading.set(true);
            spawn_local(async move {
                match api.get_business_integrations(BUSINESS_ID).await {
                    Ok(response) => {
                        set_connections.set(response.data);
                        set_error.set(None);
                    }
                    Err(err) => {
                        log!("[INTEGRATIONS] fetch failed: {err}");
                        set_error.set(Some(err.to_string()));
                    }
                }
                set_loading.set(false);
            });
        });
    }

    let on_connect = store_value({
        let api = api.clone();
        move |platform: &'static str| {
            let api = api.clone();
            spawn_local(async move {
                match api.connect_platform(platform.to_string(), BUSINESS_ID).await {
                    Ok(response) => {
                        if let Some(window) = web_sys::window() {
                            let _ = window.location().set_href(&response.data.auth_url);
                        }
                    }
                    Err(err) => {
                        log!("[INTEGRATIONS] connect failed: {err}");
                        set_error.set(Some(err.to_string()));
                    }
                }
            });
        }
    });

    let on_disconnect = store_value({
        let api = api.clone();
        move |connection_id: i64, platform: String| {
            if !confirm(&format!("Disconnect {platform}? Imported reviews are kept.")) {
                return;
            }
            let api = api.clone();
            spawn_local(async move {
                match api.disconnect_platform(connection_id).await {
                    Ok(_) => set_reload.update(|n| *n += 1),
                    Err(err) => {
                        log!("[INTEGRATIONS] disconnect failed: {err}");
                        set_error.set(Some(err.to_string()));
                    }
                }
            });
        }
    });

    let on_sync = store_value({
        let api = api.clone();
        move |connection_id: i64| {
            let api = api.clone();
            set_syncing.set(Some(connection_id));
            spawn_local(async move {
                match api.sync_platform(connection_id).await {
                    Ok(response) => {
                        log!(
                            "[INTEGRATIONS] sync imported {} reviews",
                            response.data.reviews_imported
                        );
                        set_reload.update(|n| *n += 1);
                    }
                    Err(err) => {
                        log!("[INTEGRATIONS] sync failed: {err}");
                        set_error.set(Some(err.to_string()));
                    }
                }
                set_syncing.set(None);
            });
        }
    });

    let connected_count = move || connections.get().iter().filter(|c| c.is_active).count();

    view! {
        <div class="integrations-page">
            <h1>"Integrations"</h1>
            {move || {
                error
                    .get()
                    .map(|message| view! { <div class="error-banner">{message}</div> })
            }}
            <div class="integration-summary">
                <span>{move || format!("{} of {} platforms connected", connected_count(), CATALOG.len())}</span>
            </div>
            <Show when=move || !loading.get() fallback=|| view! { <div class="spinner"></div> }>
                <div class="platform-cards">
                    {move || {
                        let current = connections.get();
                        CATALOG
                            .iter()
                            .map(|entry| {
                                let connection = current
                                    .iter()
                                    .find(|c| c.platform == entry.name)
                                    .cloned();
                                view! {
                                    <div class="platform-card">
                                        <h3>{entry.name}</h3>
                                        <p>{entry.description}</p>
                                        {match connection {
                                            Some(connection) => {
                                                let id = connection.id;
                                                let platform = connection.platform.clone();
                                                view! {
                                                    <div class="connection-state">
                                                        <span class="connected-tag">"Connected"</span>
                                                        {connection
                                                            .last_synced_at
                                                            .map(|synced| {
                                                                view! {
                                                                    <span class="last-sync">
                                                                        "Synced "
                                                                        {time_since(synced, Utc::now())}
                                                                    </span>
                                                                }
                                                            })}
                                                        <button
                                                            disabled=move || {
                                                                syncing.get() == Some(id)
                                                            }
                                                            on:click=move |_| on_sync.with_value(|f| f(id))
                                                        >
                                                            {move || {
                                                                if syncing.get() == Some(id) {
                                                                    "Syncing..."
                                                                } else {
                                                                    "Sync Now"
                                                                }
                                                            }}
                                                        </button>
                                                        <button on:click=move |_| {
                                                            on_disconnect
                                                                .with_value(|f| f(id, platform.clone()))
                                                        }>
                                                            "Disconnect"
                                                        </button>
                                                    </div>
                                                }
                                                    .into_view()
                                            }
                                            None if entry.connectable => {
                                                let name = entry.name;
                                                view! {
                                                    <button
                                                        class="connect-button"
                                                        on:click=move |_| on_connect.with_value(|f| f(name))
                                                    >
                                                        "Connect"
                                                    </button>
                                                }
                                                    .into_view()
                                            }
                                            None => view! {
                                                <span class="coming-soon">"Coming Soon"</span>
                                            }
                                                .into_view(),
                                        }}
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_marks_oauth_capable_platforms() {
        let connectable: Vec<_> = CATALOG
            .iter()
            .filter(|e| e.connectable)
            .map(|e| e.name)
            .collect();
        assert_eq!(connectable, vec!["Google", "Yelp", "Facebook"]);
        let pending: Vec<_> = CATALOG
            .iter()
            .filter(|e| !e.connectable)
            .map(|e| e.name)
            .collect();
        assert_eq!(pending, vec!["TripAdvisor", "Zomato"]);
    }
}

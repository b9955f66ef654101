//! Competitor tracking with a client-side comparison against the business's
//! own numbers.

use futures::future::join;
use leptos::logging::log;
use leptos::*;

use crate::api::Api;
use crate::models::analytics::AnalyticsOverview;
use crate::models::competitor::{Competitor, NewCompetitor};
use crate::pages::BUSINESS_ID;

const REVIEW_SCALE: u32 = 2000;
const RECENT_SCALE: u32 = 200;

/// Comparison-bar widths, normalized to fixed scales so rows are visually
/// comparable: rating out of 5, review count out of 2000 capped, recent
/// count out of 200 capped.
pub fn rating_bar_width(avg_rating: f64) -> u32 {
    ((avg_rating / 5.0) * 100.0).clamp(0.0, 100.0) as u32
}

pub fn review_bar_width(total_reviews: u32) -> u32 {
    (total_reviews * 100 / REVIEW_SCALE).min(100)
}

pub fn recent_bar_width(recent_count: u32) -> u32 {
    (recent_count * 100 / RECENT_SCALE).min(100)
}

pub fn validate_new_competitor(
    name: &str,
    platform: &str,
    platform_business_id: &str,
) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("Competitor name is required".to_string());
    }
    if platform.trim().is_empty() {
        return Err("Platform is required".to_string());
    }
    if platform_business_id.trim().is_empty() {
        return Err("Platform business ID is required".to_string());
    }
    Ok(())
}

fn confirm(message: &str) -> bool {
    web_sys::window()
        .map(|w| w.confirm_with_message(message).unwrap_or(false))
        .unwrap_or(false)
}

#[component]
pub fn CompetitorsPage() -> impl IntoView {
    let api = Api::expect();
    let (competitors, set_competitors) = create_signal(Vec::<Competitor>::new());
    let (own, set_own) = create_signal(AnalyticsOverview::default());
    let (loading, set_loading) = create_signal(true);
    let (error, set_error) = create_signal(None::<String>);
    let (detailed, set_detailed) = create_signal(false);
    let (syncing, set_syncing) = create_signal(None::<i64>);
    let (reload, set_reload) = create_signal(0u32);

    let (new_name, set_new_name) = create_signal(String::new());
    let (new_platform, set_new_platform) = create_signal("Google".to_string());
    let (new_external_id, set_new_external_id) = create_signal(String::new());
    let (adding, set_adding) = create_signal(false);

    {
        let api = api.clone();
        create_effect(move |_| {
            let _ = reload.get();
            let api = api.clone();
            set_loading.set(true);
            spawn_local(async move {
                let (competitors_result, own_result) = join(
                    api.get_competitors(BUSINESS_ID),
                    api.get_analytics_overview(BUSINESS_ID),
                )
                .await;
                match competitors_result {
                    Ok(response) => set_competitors.set(response.data),
                    Err(err) => {
                        log!("[COMPETITORS] list fetch failed: {err}");
                        set_error.set(Some(err.to_string()));
                    }
                }
                match own_result {
                    Ok(response) => set_own.set(response.data),
                    Err(err) => {
                        log!("[COMPETITORS] own overview fetch failed: {err}");
                        set_error.set(Some(err.to_string()));
                    }
                }
                set_loading.set(false);
            });
        });
    }

    let on_add = {
        let api = api.clone();
        move |ev: ev::SubmitEvent| {
            ev.prevent_default();
            let name = new_name.get_untracked();
            let platform = new_platform.get_untracked();
            let external_id = new_external_id.get_untracked();
            if let Err(message) = validate_new_competitor(&name, &platform, &external_id) {
                set_error.set(Some(message));
                return;
            }
            let api = api.clone();
            set_adding.set(true);
            spawn_local(async move {
                let req = NewCompetitor {
                    business_id: BUSINESS_ID,
                    name: name.trim().to_string(),
                    platform,
                    platform_business_id: external_id.trim().to_string(),
                };
                match api.add_competitor(req).await {
                    Ok(_) => {
                        set_new_name.set(String::new());
                        set_new_external_id.set(String::new());
                        set_error.set(None);
                        set_reload.update(|n| *n += 1);
                    }
                    Err(err) => {
                        log!("[COMPETITORS] add failed: {err}");
                        set_error.set(Some(err.to_string()));
                    }
                }
                set_adding.set(false);
            });
        }
    };

    let on_sync = store_value({
        let api = api.clone();
        move |id: i64| {
            let api = api.clone();
            set_syncing.set(Some(id));
            spawn_local(async move {
                match api.sync_competitor(id).await {
                    Ok(_) => set_reload.update(|n| *n += 1),
                    Err(err) => {
                        log!("[COMPETITORS] sync failed: {err}");
                        set_error.set(Some(err.to_string()));
                    }
                }
                set_syncing.set(None);
            });
        }
    });

    let on_remove = store_value({
        let api = api.clone();
        move |id: i64, name: String| {
            if !confirm(&format!("Stop tracking {name}?")) {
                return;
            }
            let api = api.clone();
            spawn_local(async move {
                match api.delete_competitor(id).await {
                    Ok(_) => set_reload.update(|n| *n += 1),
                    Err(err) => {
                        log!("[COMPETITORS] delete failed: {err}");
                        set_error.set(Some(err.to_string()));
                    }
                }
            });
        }
    });

    view! {
        <div class="competitors-page">
            <div class="page-head">
                <h1>"Competitors"</h1>
                <button on:click=move |_| set_detailed.update(|d| *d = !*d)>
                    {move || if detailed.get() { "Overview" } else { "Detailed" }}
                </button>
            </div>
            {move || {
                error
                    .get()
                    .map(|message| view! { <div class="error-banner">{message}</div> })
            }}
            <form class="add-competitor" on:submit=on_add>
                <input
                    type="text"
                    placeholder="Competitor name"
                    prop:value=new_name
                    on:input=move |ev| set_new_name.set(event_target_value(&ev))
                />
                <select on:change=move |ev| set_new_platform.set(event_target_value(&ev))>
                    <option value="Google">"Google"</option>
                    <option value="Yelp">"Yelp"</option>
                    <option value="Facebook">"Facebook"</option>
                </select>
                <input
                    type="text"
                    placeholder="Platform business ID"
                    prop:value=new_external_id
                    on:input=move |ev| set_new_external_id.set(event_target_value(&ev))
                />
                <button type="submit" disabled=move || adding.get()>
                    {move || if adding.get() { "Adding..." } else { "Track Competitor" }}
                </button>
            </form>
            <Show when=move || !loading.get() fallback=|| view! { <div class="spinner"></div> }>
                <div class="comparison-table">
                    <div class="comparison-row own-business">
                        <span class="competitor-name">"My Business"</span>
                        <div class="meter">
                            <div
                                class="meter-fill"
                                style=move || {
                                    format!(
                                        "width: {}%",
                                        rating_bar_width(own.get().average_rating),
                                    )
                                }
                            ></div>
                        </div>
                        <span>{move || format!("{:.1}\u{2605}", own.get().average_rating)}</span>
                        <span>{move || format!("{} reviews", own.get().total_reviews)}</span>
                    </div>
                    {move || {
                        competitors
                            .get()
                            .into_iter()
                            .map(|competitor| {
                                let id = competitor.id;
                                let name = competitor.name.clone();
                                let is_detailed = detailed;
                                view! {
                                    <div class="comparison-row">
                                        <span class="competitor-name">
                                            {competitor.name.clone()}
                                            <span class="platform-name">
                                                {competitor.platform.clone()}
                                            </span>
                                        </span>
                                        <div class="meter">
                                            <div
                                                class="meter-fill"
                                                style=format!(
                                                    "width: {}%",
                                                    rating_bar_width(competitor.avg_rating),
                                                )
                                            ></div>
                                        </div>
                                        <span>
                                            {format!("{:.1}\u{2605}", competitor.avg_rating)}
                                        </span>
                                        <span>
                                            {format!("{} reviews", competitor.total_reviews)}
                                        </span>
                                        <span class={if competitor.rating_trend >= 0.0 {
                                            "trend up"
                                        } else {
                                            "trend down"
                                        }}>
                                            {format!("{:+.1}%", competitor.rating_trend)}
                                        </span>
                                        <Show when=move || is_detailed.get()>
                                            <div class="detailed-metrics">
                                                <div class="meter">
                                                    <div
                                                        class="meter-fill"
                                                        style=format!(
                                                            "width: {}%",
                                                            review_bar_width(
                                                                competitor.total_reviews,
                                                            ),
                                                        )
                                                    ></div>
                                                </div>
                                                <div class="meter">
                                                    <div
                                                        class="meter-fill"
                                                        style=format!(
                                                            "width: {}%",
                                                            recent_bar_width(
                                                                competitor.recent_review_count,
                                                            ),
                                                        )
                                                    ></div>
                                                </div>
                                                <span>
                                                    {format!(
                                                        "Responds to {:.0}% in {:.1}h",
                                                        competitor.response_rate,
                                                        competitor.avg_response_time_hours,
                                                    )}
                                                </span>
                                                <span>
                                                    {format!(
                                                        "{}% positive",
                                                        competitor.sentiment.positive,
                                                    )}
                                                </span>
                                            </div>
                                        </Show>
                                        <div class="row-actions">
                                            <button
                                                disabled=move || syncing.get() == Some(id)
                                                on:click=move |_| on_sync.with_value(|f| f(id))
                                            >
                                                {move || {
                                                    if syncing.get() == Some(id) {
                                                        "Syncing..."
                                                    } else {
                                                        "Sync"
                                                    }
                                                }}
                                            </button>
                                            <button on:click=move |_| {
                                                on_remove.with_value(|f| f(id, name.clone()))
                                            }>
                                                "Remove"
                                            </button>
                                        </div>
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
    fn bars_normalize_against_fixed_scales() {
        assert_eq!(rating_bar_width(5.0), 100);
        assert_eq!(rating_bar_width(2.5), 50);
        assert_eq!(review_bar_width(1000), 50);
        assert_eq!(review_bar_width(5000), 100);
        assert_eq!(recent_bar_width(100), 50);
        assert_eq!(recent_bar_width(999), 100);
    }

    #[test]
    fn zero_metrics_render_empty_bars() {
        assert_eq!(rating_bar_width(0.0), 0);
        assert_eq!(review_bar_width(0), 0);
        assert_eq!(recent_bar_width(0), 0);
    }

    #[test]
    fn new_competitor_form_requires_every_field() {
        assert!(validate_new_competitor("Cafe", "Google", "gbp-1").is_ok());
        assert!(validate_new_competitor("", "Google", "gbp-1").is_err());
        assert!(validate_new_competitor("Cafe", "  ", "gbp-1").is_err());
        assert!(validate_new_competitor("Cafe", "Google", "").is_err());
    }
}

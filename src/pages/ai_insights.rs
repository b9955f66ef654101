//! AI-generated insight feeds: analytics, competitor position, review
//! summary and actionable recommendations.

use futures::future::join4;
use leptos::logging::log;
use leptos::*;

use crate::api::Api;
use crate::models::ai::{Insights, Priority, Recommendations, ReviewSummary};
use crate::pages::BUSINESS_ID;

fn priority_class(priority: Priority) -> &'static str {
    match priority {
        Priority::High => "priority-badge high",
        Priority::Medium => "priority-badge medium",
        Priority::Low => "priority-badge low",
    }
}

#[component]
pub fn AiInsightsPage() -> impl IntoView {
    let api = Api::expect();
    let (days, set_days) = create_signal(30u32);
    let (analytics, set_analytics) = create_signal(None::<Insights>);
    let (competitor, set_competitor) = create_signal(None::<Insights>);
    let (summary, set_summary) = create_signal(None::<ReviewSummary>);
    let (recommendations, set_recommendations) = create_signal(
        Recommendations { recommendations: Vec::new() },
    );
    let (loading, set_loading) = create_signal(true);
    let (error, set_error) = create_signal(None::<String>);
    let (reload, set_reload) = create_signal(0u32);

    {
        let api = api.clone();
        create_effect(move |_| {
            let _ = reload.get();
            let period = days.get();
            let api = api.clone();
            set_loading.set(true);
            spawn_local(async move {
                let (analytics_result, competitor_result, summary_result, recs_result) = join4(
                    api.get_analytics_insights(BUSINESS_ID),
                    api.get_competitor_insights(BUSINESS_ID),
                    api.get_review_summary(BUSINESS_ID, period),
                    api.get_recommendations(BUSINESS_ID),
                )
                .await;
                let mut failed = None;
                match analytics_result {
                    Ok(response) => set_analytics.set(Some(response.data)),
                    Err(err) => failed = Some(err.to_string()),
                }
                match competitor_result {
                    Ok(response) => set_competitor.set(Some(response.data)),
                    Err(err) => failed = Some(err.to_string()),
                }
                match summary_result {
                    Ok(response) => set_summary.set(Some(response.data)),
                    Err(err) => failed = Some(err.to_string()),
                }
                match recs_result {
                    Ok(response) => set_recommendations.set(response.data),
                    Err(err) => failed = Some(err.to_string()),
                }
                if let Some(message) = &failed {
                    log!("[AI_INSIGHTS] fetch failed: {message}");
                }
                set_error.set(failed);
                set_loading.set(false);
            });
        });
    }

    view! {
        <div class="ai-insights-page">
            <div class="page-head">
                <h1>"AI Insights"</h1>
                <select on:change=move |ev| {
                    if let Ok(value) = event_target_value(&ev).parse::<u32>() {
                        set_days.set(value);
                    }
                }>
                    <option value="7">"Last 7 days"</option>
                    <option value="30" selected=true>"Last 30 days"</option>
                    <option value="90">"Last 90 days"</option>
                </select>
                <button on:click=move |_| set_reload.update(|n| *n += 1)>"Refresh"</button>
            </div>
            {move || {
                error
                    .get()
                    .map(|message| view! { <div class="error-banner">{message}</div> })
            }}
            <Show when=move || !loading.get() fallback=|| view! { <div class="spinner"></div> }>
                <section class="insight-card">
                    <h2>"Performance Insights"</h2>
                    {move || {
                        analytics
                            .get()
                            .map(|insights| {
                                view! {
                                    <p class="insight-text" style="white-space: pre-line">
                                        {insights.insights}
                                    </p>
                                }
                            })
                    }}
                </section>
                <section class="insight-card">
                    <h2>"Competitive Position"</h2>
                    {move || {
                        competitor
                            .get()
                            .map(|insights| {
                                view! {
                                    <p class="insight-text" style="white-space: pre-line">
                                        {insights.insights}
                                    </p>
                                }
                            })
                    }}
                </section>
                <section class="insight-card">
                    <h2>
                        "Review Summary"
                        {move || {
                            summary
                                .get()
                                .map(|s| format!(" ({} reviews, {})", s.review_count, s.period))
                        }}
                    </h2>
                    {move || {
                        summary
                            .get()
                            .map(|s| {
                                view! {
                                    <p class="insight-text" style="white-space: pre-line">
                                        {s.summary}
                                    </p>
                                }
                            })
                    }}
                </section>
                <section class="insight-card">
                    <h2>"Recommendations"</h2>
                    <ol class="recommendation-list">
                        {move || {
                            recommendations
                                .get()
                                .recommendations
                                .into_iter()
                                .map(|rec| {
                                    view! {
                                        <li class="recommendation">
                                            <div class="recommendation-head">
                                                <span class="recommendation-title">
                                                    {rec.title.clone()}
                                                </span>
                                                <span class=priority_class(rec.priority)>
                                                    {rec.priority.to_string()}
                                                </span>
                                                <span class="recommendation-category">
                                                    {rec.category.clone()}
                                                </span>
                                            </div>
                                            <p>{rec.description.clone()}</p>
                                        </li>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </ol>
                </section>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_maps_to_badge_class() {
        assert_eq!(priority_class(Priority::High), "priority-badge high");
        assert_eq!(priority_class(Priority::Medium), "priority-badge medium");
        assert_eq!(priority_class(Priority::Low), "priority-badge low");
    }
}

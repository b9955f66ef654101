//! Landing page: headline stats, sentiment bar, platform breakdown and a
//! recent-review feed, fed by three concurrent fetches.

use chrono::Utc;
use futures::future::join3;
use leptos::logging::log;
use leptos::*;

use crate::api::Api;
use crate::models::analytics::{AnalyticsOverview, DashboardSummary, PlatformBreakdown};
use crate::models::competitor::SentimentCounts;
use crate::pages::BUSINESS_ID;
use crate::utils::time::time_since;

const MONTHLY_REVIEW_TARGET: u32 = 50;
const SMS_WARNING_THRESHOLD: u32 = 80;

/// Share of each sentiment class as whole percentages. Sums to 100 within
/// rounding for a nonzero total, and renders 0/0/0 when there is nothing to
/// divide.
pub fn sentiment_percentages(counts: &SentimentCounts) -> (u32, u32, u32) {
    let total = counts.total();
    if total == 0 {
        return (0, 0, 0);
    }
    let share = |count: u32| (count * 100 + total / 2) / total;
    (
        share(counts.positive),
        share(counts.neutral),
        share(counts.negative),
    )
}

/// Percentage of the SMS allowance consumed, clamped to 100.
pub fn sms_usage_percent(sent: u32, limit: u32) -> u32 {
    if limit == 0 {
        return 0;
    }
    ((sent * 100) / limit).min(100)
}

fn star_row(rating: f64) -> String {
    let filled = rating.round().clamp(0.0, 5.0) as usize;
    let mut row = "\u{2605}".repeat(filled);
    row.push_str(&"\u{2606}".repeat(5 - filled));
    row
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let api = Api::expect();
    let (summary, set_summary) = create_signal(DashboardSummary::default());
    let (breakdown, set_breakdown) = create_signal(PlatformBreakdown::default());
    let (overview, set_overview) = create_signal(AnalyticsOverview::default());
    let (loading, set_loading) = create_signal(true);
    let (error, set_error) = create_signal(None::<String>);

    create_effect(move |_| {
        let api = api.clone();
        spawn_local(async move {
            let (summary_result, breakdown_result, overview_result) = join3(
                api.get_dashboard_summary(BUSINESS_ID),
                api.get_platform_breakdown(BUSINESS_ID),
                api.get_analytics_overview(BUSINESS_ID),
            )
            .await;
            match summary_result {
                Ok(response) => set_summary.set(response.data),
                Err(err) => {
                    log!("[DASHBOARD] summary fetch failed: {err}");
                    set_error.set(Some(err.to_string()));
                }
            }
            match breakdown_result {
                Ok(response) => set_breakdown.set(response.data),
                Err(err) => {
                    log!("[DASHBOARD] platform breakdown fetch failed: {err}");
                    set_error.set(Some(err.to_string()));
                }
            }
            match overview_result {
                Ok(response) => set_overview.set(response.data),
                Err(err) => {
                    log!("[DASHBOARD] overview fetch failed: {err}");
                    set_error.set(Some(err.to_string()));
                }
            }
            set_loading.set(false);
        });
    });

    let percentages = move || sentiment_percentages(&overview.get().sentiment_breakdown);

    view! {
        <div class="dashboard-page">
            <h1>"Dashboard"</h1>
            {move || {
                error
                    .get()
                    .map(|message| view! { <div class="error-banner">{message}</div> })
            }}
            <Show when=move || !loading.get() fallback=|| view! { <div class="spinner"></div> }>
                <div class="stat-grid">
                    <div class="stat-card">
                        <span class="stat-value">{move || summary.get().total_reviews}</span>
                        <span class="stat-label">"Total Reviews"</span>
                    </div>
                    <div class="stat-card">
                        <span class="stat-value">
                            {move || format!("{:.1}", summary.get().average_rating)}
                        </span>
                        <span class="stars">{move || star_row(summary.get().average_rating)}</span>
                        <span class="stat-label">"Average Rating"</span>
                    </div>
                    <div class="stat-card">
                        <span class="stat-value">{move || summary.get().unread_reviews}</span>
                        <span class="stat-label">"Unread Reviews"</span>
                    </div>
                    <div class="stat-card">
                        <span class="stat-value">{move || summary.get().connected_platforms}</span>
                        <span class="stat-label">"Connected Platforms"</span>
                    </div>
                </div>
                <section class="sentiment-section">
                    <h2>"Sentiment"</h2>
                    <div class="sentiment-bar">
                        <div
                            class="segment positive"
                            style=move || format!("width: {}%", percentages().0)
                        ></div>
                        <div
                            class="segment neutral"
                            style=move || format!("width: {}%", percentages().1)
                        ></div>
                        <div
                            class="segment negative"
                            style=move || format!("width: {}%", percentages().2)
                        ></div>
                    </div>
                    <div class="sentiment-legend">
                        <span>{move || format!("Positive {}%", percentages().0)}</span>
                        <span>{move || format!("Neutral {}%", percentages().1)}</span>
                        <span>{move || format!("Negative {}%", percentages().2)}</span>
                    </div>
                </section>
                <section class="progress-section">
                    <h2>"This Month"</h2>
                    <p>
                        {move || {
                            format!(
                                "{} of {MONTHLY_REVIEW_TARGET} reviews",
                                overview.get().this_month_reviews,
                            )
                        }}
                    </p>
                    <div class="progress-bar">
                        <div
                            class="progress-fill"
                            style=move || {
                                let pct = (overview.get().this_month_reviews * 100
                                    / MONTHLY_REVIEW_TARGET)
                                    .min(100);
                                format!("width: {pct}%")
                            }
                        ></div>
                    </div>
                </section>
                <section class="sms-section">
                    <h2>"SMS Usage"</h2>
                    <p>
                        {move || {
                            let usage = summary.get().sms_usage;
                            format!("{} of {} messages used", usage.sent, usage.limit)
                        }}
                    </p>
                    <div class="progress-bar">
                        <div
                            class=move || {
                                let usage = summary.get().sms_usage;
                                if sms_usage_percent(usage.sent, usage.limit)
                                    > SMS_WARNING_THRESHOLD
                                {
                                    "progress-fill warning"
                                } else {
                                    "progress-fill"
                                }
                            }
                            style=move || {
                                let usage = summary.get().sms_usage;
                                format!(
                                    "width: {}%",
                                    sms_usage_percent(usage.sent, usage.limit),
                                )
                            }
                        ></div>
                    </div>
                </section>
                <section class="platform-section">
                    <h2>"By Platform"</h2>
                    <ul class="platform-rows">
                        {move || {
                            breakdown
                                .get()
                                .platform_breakdown
                                .into_iter()
                                .map(|row| {
                                    view! {
                                        <li class="platform-row">
                                            <span class="platform-name">{row.platform.clone()}</span>
                                            <span>{row.total_reviews} " reviews"</span>
                                            <span>{format!("{:.1}", row.average_rating)}</span>
                                        </li>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </ul>
                </section>
                <section class="recent-section">
                    <h2>"Recent Reviews"</h2>
                    <ul class="recent-reviews">
                        {move || {
                            summary
                                .get()
                                .recent_reviews
                                .into_iter()
                                .map(|review| {
                                    view! {
                                        <li class="recent-review">
                                            <span class="reviewer">
                                                {review.reviewer_name.clone()}
                                            </span>
                                            <span class="stars">
                                                {star_row(review.rating as f64)}
                                            </span>
                                            <span class="platform-name">
                                                {review.platform.clone()}
                                            </span>
                                            <span class="when">
                                                {time_since(review.review_date, Utc::now())}
                                            </span>
                                        </li>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </ul>
                </section>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentages_sum_to_100_within_rounding() {
        let counts = SentimentCounts {
            positive: 204,
            neutral: 49,
            negative: 16,
        };
        let (pos, neu, neg) = sentiment_percentages(&counts);
        let sum = pos + neu + neg;
        assert!((99..=101).contains(&sum), "sum was {sum}");
        assert!(pos > neu && neu > neg);
    }

    #[test]
    fn zero_total_renders_zeroes() {
        assert_eq!(
            sentiment_percentages(&SentimentCounts::default()),
            (0, 0, 0)
        );
    }

    #[test]
    fn single_class_takes_the_whole_bar() {
        let counts = SentimentCounts {
            positive: 12,
            neutral: 0,
            negative: 0,
        };
        assert_eq!(sentiment_percentages(&counts), (100, 0, 0));
    }

    #[test]
    fn sms_usage_clamps_and_handles_zero_limit() {
        assert_eq!(sms_usage_percent(7, 10), 70);
        assert_eq!(sms_usage_percent(15, 10), 100);
        assert_eq!(sms_usage_percent(3, 0), 0);
    }

    #[test]
    fn star_row_rounds_to_nearest() {
        assert_eq!(star_row(4.5), "\u{2605}\u{2605}\u{2605}\u{2605}\u{2605}");
        assert_eq!(star_row(3.2), "\u{2605}\u{2605}\u{2605}\u{2606}\u{2606}");
        assert_eq!(star_row(0.0), "\u{2606}\u{2606}\u{2606}\u{2606}\u{2606}");
    }
}

//! Analytics: date-ranged metrics with CSS bar charts and a CSV export of
//! the rating trend.

use leptos::logging::log;
use leptos::*;
use wasm_bindgen::JsCast;

use crate::api::Api;
use crate::models::analytics::{
    AnalyticsOverview, PlatformBreakdown, RatingTrendPoint, ResponseTimeStats, SentimentAnalysis,
    TopKeyword,
};
use crate::pages::BUSINESS_ID;

const KEYWORD_LIMIT: u32 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DateRange {
    Week,
    Month,
    Quarter,
    Year,
}

impl DateRange {
    fn days(self) -> u32 {
        match self {
            DateRange::Week => 7,
            DateRange::Month => 30,
            DateRange::Quarter => 90,
            DateRange::Year => 365,
        }
    }

    fn months(self) -> u32 {
        match self {
            DateRange::Week | DateRange::Month => 1,
            DateRange::Quarter => 3,
            DateRange::Year => 12,
        }
    }

    fn parse(value: &str) -> DateRange {
        match value {
            "7" => DateRange::Week,
            "90" => DateRange::Quarter,
            "365" => DateRange::Year,
            _ => DateRange::Month,
        }
    }
}

/// Spreadsheet-friendly dump of the trend series, one row per month bucket.
pub fn rating_trend_csv(points: &[RatingTrendPoint]) -> String {
    let mut csv = String::from("date,count,avgRating\n");
    for point in points {
        csv.push_str(&format!(
            "{},{},{:.2}\n",
            point.date, point.count, point.avg_rating
        ));
    }
    csv
}

fn download_csv(contents: &str, filename: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Ok(element) = document.create_element("a") else {
        return;
    };
    let Ok(anchor) = element.dyn_into::<web_sys::HtmlAnchorElement>() else {
        return;
    };
    anchor.set_href(&format!(
        "data:text/csv;charset=utf-8,{}",
        urlencoding::encode(contents)
    ));
    anchor.set_download(filename);
    anchor.click();
}

#[component]
pub fn AnalyticsPage() -> impl IntoView {
    let api = Api::expect();
    let (range, set_range) = create_signal(DateRange::Month);
    let (overview, set_overview) = create_signal(AnalyticsOverview::default());
    let (trend, set_trend) = create_signal(Vec::<RatingTrendPoint>::new());
    let (breakdown, set_breakdown) = create_signal(PlatformBreakdown::default());
    let (sentiment, set_sentiment) = create_signal(SentimentAnalysis::default());
    let (keywords, set_keywords) = create_signal(Vec::<TopKeyword>::new());
    let (response_time, set_response_time) = create_signal(ResponseTimeStats::default());
    let (loading, set_loading) = create_signal(true);
    let (error, set_error) = create_signal(None::<String>);

    {
        let api = api.clone();
        create_effect(move |_| {
            let selected = range.get();
            let api = api.clone();
            set_loading.set(true);
            spawn_local(async move {
                let (
                    overview_result,
                    trend_result,
                    breakdown_result,
                    sentiment_result,
                    keywords_result,
                    response_result,
                ) = futures::join!(
                    api.get_analytics_overview(BUSINESS_ID),
                    api.get_rating_trend(BUSINESS_ID, selected.months()),
                    api.get_platform_breakdown(BUSINESS_ID),
                    api.get_sentiment_analysis(BUSINESS_ID, selected.days()),
                    api.get_top_keywords(BUSINESS_ID, KEYWORD_LIMIT),
                    api.get_response_time(BUSINESS_ID),
                );
                let mut failed = None;
                match overview_result {
                    Ok(response) => set_overview.set(response.data),
                    Err(err) => failed = Some(err.to_string()),
                }
                match trend_result {
                    Ok(response) => set_trend.set(response.data),
                    Err(err) => failed = Some(err.to_string()),
                }
                match breakdown_result {
                    Ok(response) => set_breakdown.set(response.data),
                    Err(err) => failed = Some(err.to_string()),
                }
                match sentiment_result {
                    Ok(response) => set_sentiment.set(response.data),
                    Err(err) => failed = Some(err.to_string()),
                }
                match keywords_result {
                    Ok(response) => set_keywords.set(response.data),
                    Err(err) => failed = Some(err.to_string()),
                }
                match response_result {
                    Ok(response) => set_response_time.set(response.data),
                    Err(err) => failed = Some(err.to_string()),
                }
                if let Some(message) = &failed {
                    log!("[ANALYTICS] fetch failed: {message}");
                }
                set_error.set(failed);
                set_loading.set(false);
            });
        });
    }

    let export_csv = move |_| {
        let csv = rating_trend_csv(&trend.get_untracked());
        download_csv(&csv, "rating-trend.csv");
    };

    view! {
        <div class="analytics-page">
            <div class="page-head">
                <h1>"Analytics"</h1>
                <select on:change=move |ev| {
                    set_range.set(DateRange::parse(&event_target_value(&ev)))
                }>
                    <option value="7">"Last 7 days"</option>
                    <option value="30" selected=true>"Last 30 days"</option>
                    <option value="90">"Last 90 days"</option>
                    <option value="365">"Last year"</option>
                </select>
                <button on:click=export_csv>"Export CSV"</button>
            </div>
            {move || {
                error
                    .get()
                    .map(|message| view! { <div class="error-banner">{message}</div> })
            }}
            <Show when=move || !loading.get() fallback=|| view! { <div class="spinner"></div> }>
                <div class="stat-grid">
                    <div class="stat-card">
                        <span class="stat-value">{move || overview.get().total_reviews}</span>
                        <span class="stat-label">"Total Reviews"</span>
                    </div>
                    <div class="stat-card">
                        <span class="stat-value">
                            {move || format!("{:.1}", overview.get().average_rating)}
                        </span>
                        <span class="stat-label">"Average Rating"</span>
                    </div>
                    <div class="stat-card">
                        <span class="stat-value">
                            {move || format!("{:.0}%", overview.get().response_rate)}
                        </span>
                        <span class="stat-label">"Response Rate"</span>
                    </div>
                    <div class="stat-card">
                        <span class="stat-value">
                            {move || format!("{:+.1}%", overview.get().monthly_change)}
                        </span>
                        <span class="stat-label">"Monthly Change"</span>
                    </div>
                </div>
                <section class="chart-section">
                    <h2>"Rating Trend"</h2>
                    <div class="bar-chart">
                        {move || {
                            let points = trend.get();
                            let max_count = points.iter().map(|p| p.count).max().unwrap_or(1).max(1);
                            points
                                .into_iter()
                                .map(|point| {
                                    let height = point.count * 100 / max_count;
                                    view! {
                                        <div class="bar-column">
                                            <div
                                                class="bar"
                                                style=format!("height: {height}%")
                                                title=format!(
                                                    "{} reviews, {:.1} average",
                                                    point.count,
                                                    point.avg_rating,
                                                )
                                            ></div>
                                            <span class="bar-label">{point.date.clone()}</span>
                                        </div>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </div>
                </section>
                <section class="chart-section">
                    <h2>"Sentiment"</h2>
                    <ul class="sentiment-rows">
                        {move || {
                            sentiment
                                .get()
                                .sentiment_analysis
                                .into_iter()
                                .map(|slice| {
                                    view! {
                                        <li class="sentiment-row">
                                            <span>{slice.sentiment.clone()}</span>
                                            <div class="meter">
                                                <div
                                                    class="meter-fill"
                                                    style=format!("width: {}%", slice.percentage)
                                                ></div>
                                            </div>
                                            <span>{format!("{}% ({})", slice.percentage, slice.count)}</span>
                                        </li>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </ul>
                </section>
                <section class="chart-section">
                    <h2>"Rating Distribution"</h2>
                    <ul class="distribution-rows">
                        {move || {
                            let distribution = sentiment.get().rating_distribution;
                            let max = distribution.iter().map(|b| b.count).max().unwrap_or(1).max(1);
                            distribution
                                .into_iter()
                                .map(|bucket| {
                                    view! {
                                        <li class="distribution-row">
                                            <span>{format!("{}\u{2605}", bucket.rating)}</span>
                                            <div class="meter">
                                                <div
                                                    class="meter-fill"
                                                    style=format!(
                                                        "width: {}%",
                                                        bucket.count * 100 / max,
                                                    )
                                                ></div>
                                            </div>
                                            <span>{bucket.count}</span>
                                        </li>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </ul>
                </section>
                <section class="chart-section">
                    <h2>"Top Keywords"</h2>
                    <ul class="keyword-rows">
                        {move || {
                            keywords
                                .get()
                                .into_iter()
                                .map(|keyword| {
                                    let total = (keyword.positive_count
                                        + keyword.negative_count)
                                        .max(1);
                                    let positive_share = keyword.positive_count * 100 / total;
                                    view! {
                                        <li class="keyword-row">
                                            <span class="keyword">{keyword.word.clone()}</span>
                                            <div class="split-bar">
                                                <div
                                                    class="split-positive"
                                                    style=format!("width: {positive_share}%")
                                                ></div>
                                                <div
                                                    class="split-negative"
                                                    style=format!(
                                                        "width: {}%",
                                                        100 - positive_share,
                                                    )
                                                ></div>
                                            </div>
                                            <span class="split-counts">
                                                {format!(
                                                    "+{} / -{}",
                                                    keyword.positive_count,
                                                    keyword.negative_count,
                                                )}
                                            </span>
                                        </li>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </ul>
                </section>
                <section class="chart-section">
                    <h2>"Response Time"</h2>
                    <p>
                        {move || {
                            let stats = response_time.get();
                            format!(
                                "Average {:.1}h, median {:.1}h. {} of {} reviews answered.",
                                stats.average_hours,
                                stats.median_hours,
                                stats.responded_count,
                                stats.total_count,
                            )
                        }}
                    </p>
                </section>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csv_has_header_and_one_row_per_point() {
        let points = vec![
            RatingTrendPoint {
                date: "2024-01".to_string(),
                count: 95,
                avg_rating: 4.2,
            },
            RatingTrendPoint {
                date: "2024-02".to_string(),
                count: 102,
                avg_rating: 4.15,
            },
        ];
        let csv = rating_trend_csv(&points);
        let lines: Vec<_> = csv.lines().collect();
        assert_eq!(lines[0], "date,count,avgRating");
        assert_eq!(lines[1], "2024-01,95,4.20");
        assert_eq!(lines[2], "2024-02,102,4.15");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn csv_of_empty_series_is_header_only() {
        assert_eq!(rating_trend_csv(&[]), "date,count,avgRating\n");
    }

    #[test]
    fn date_ranges_map_to_fetch_parameters() {
        assert_eq!(DateRange::Week.days(), 7);
        assert_eq!(DateRange::Week.months(), 1);
        assert_eq!(DateRange::Quarter.days(), 90);
        assert_eq!(DateRange::Quarter.months(), 3);
        assert_eq!(DateRange::Year.months(), 12);
        assert_eq!(DateRange::parse("bogus"), DateRange::Month);
    }
}

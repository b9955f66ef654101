//! Review inbox: server-side filters, client-side search, pagination and a
//! reply modal with AI assistance.

use chrono::Utc;
use leptos::logging::log;
use leptos::*;

use crate::api::Api;
use crate::models::review::{Review, ReviewFilter, Sentiment};
use crate::pages::BUSINESS_ID;
use crate::utils::time::time_since;

const PAGE_SIZE: u32 = 10;

/// Case-insensitive match over reviewer name and body; an empty query
/// matches everything.
pub fn matches_search(review: &Review, query: &str) -> bool {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return true;
    }
    review.reviewer_name.to_lowercase().contains(&query)
        || review.review_text.to_lowercase().contains(&query)
}

fn parse_tristate(value: &str) -> Option<bool> {
    match value {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

#[component]
pub fn ReviewsPage() -> impl IntoView {
    let api = Api::expect();
    let (reviews, set_reviews) = create_signal(Vec::<Review>::new());
    let (total_pages, set_total_pages) = create_signal(1u32);
    let (page, set_page) = create_signal(1u32);
    let (loading, set_loading) = create_signal(true);
    let (error, set_error) = create_signal(None::<String>);
    let (reload, set_reload) = create_signal(0u32);

    let (platform, set_platform) = create_signal(None::<String>);
    let (sentiment, set_sentiment) = create_signal(None::<Sentiment>);
    let (rating, set_rating) = create_signal(None::<u8>);
    let (read_state, set_read_state) = create_signal(None::<bool>);
    let (flagged_only, set_flagged_only) = create_signal(false);
    let (search, set_search) = create_signal(String::new());

    let (selected, set_selected) = create_signal(None::<Review>);
    let (reply_text, set_reply_text) = create_signal(String::new());
    let (generating, set_generating) = create_signal(false);
    let (replying, set_replying) = create_signal(false);

    {
        let api = api.clone();
        create_effect(move |_| {
            let _ = reload.get();
            let filter = ReviewFilter {
                business_id: Some(BUSINESS_ID),
                platform: platform.get(),
                sentiment: sentiment.get(),
                rating: rating.get(),
                is_read: read_state.get(),
                is_flagged: flagged_only.get().then_some(true),
                page: Some(page.get()),
                page_size: Some(PAGE_SIZE),
            };
            let api = api.clone();
            set_loading.set(true);
            spawn_local(async move {
                match api.get_reviews(filter).await {
                    Ok(response) => {
                        set_reviews.set(response.data.reviews);
                        set_total_pages.set(response.data.total_pages);
                        set_error.set(None);
                    }
                    Err(err) => {
                        log!("[REVIEWS] fetch failed: {err}");
                        set_error.set(Some(err.to_string()));
                    }
                }
                set_loading.set(false);
            });
        });
    }

    let visible_reviews = move || {
        let query = search.get();
        reviews
            .get()
            .into_iter()
            .filter(|review| matches_search(review, &query))
            .collect::<Vec<_>>()
    };

    let toggle_read = {
        let api = api.clone();
        move |review: Review| {
            let api = api.clone();
            spawn_local(async move {
                match api.mark_review_as_read(review.id, !review.is_read).await {
                    Ok(_) => set_reload.update(|n| *n += 1),
                    Err(err) => {
                        log!("[REVIEWS] read toggle failed: {err}");
                        set_error.set(Some(err.to_string()));
                    }
                }
            });
        }
    };

    let toggle_flag = {
        let api = api.clone();
        move |review: Review| {
            let api = api.clone();
            spawn_local(async move {
                match api.flag_review(review.id, !review.is_flagged).await {
                    Ok(_) => set_reload.update(|n| *n += 1),
                    Err(err) => {
                        log!("[REVIEWS] flag toggle failed: {err}");
                        set_error.set(Some(err.to_string()));
                    }
                }
            });
        }
    };

    let open_reply = move |review: Review| {
        set_reply_text.set(
            review
                .ai_suggested_response
                .clone()
                .unwrap_or_default(),
        );
        set_selected.set(Some(review));
    };

    let generate_response = {
        let api = api.clone();
        move |_| {
            let Some(review) = selected.get_untracked() else {
                return;
            };
            let api = api.clone();
            set_generating.set(true);
            spawn_local(async move {
                match api.generate_ai_response(review.id).await {
                    Ok(response) => set_reply_text.set(response.data.response),
                    Err(err) => {
                        log!("[REVIEWS] generate failed: {err}");
                        set_error.set(Some(err.to_string()));
                    }
                }
                set_generating.set(false);
            });
        }
    };

    let improve_response = {
        let api = api.clone();
        move |_| {
            let Some(review) = selected.get_untracked() else {
                return;
            };
            let draft = reply_text.get_untracked();
            if draft.trim().is_empty() {
                return;
            }
            let api = api.clone();
            set_generating.set(true);
            spawn_local(async move {
                match api.improve_ai_response(review.id, draft).await {
                    Ok(response) => set_reply_text.set(response.data.response),
                    Err(err) => {
                        log!("[REVIEWS] improve failed: {err}");
                        set_error.set(Some(err.to_string()));
                    }
                }
                set_generating.set(false);
            });
        }
    };

    let submit_reply = {
        let api = api.clone();
        move |_| {
            let Some(review) = selected.get_untracked() else {
                return;
            };
            let text = reply_text.get_untracked();
            if text.trim().is_empty() {
                set_error.set(Some("Response text cannot be empty".to_string()));
                return;
            }
            let api = api.clone();
            set_replying.set(true);
            spawn_local(async move {
                match api.reply_to_review(review.id, text).await {
                    Ok(_) => {
                        set_selected.set(None);
                        set_reply_text.set(String::new());
                        set_reload.update(|n| *n += 1);
                    }
                    Err(err) => {
                        log!("[REVIEWS] reply failed: {err}");
                        set_error.set(Some(err.to_string()));
                    }
                }
                set_replying.set(false);
            });
        }
    };

    view! {
        <div class="reviews-page">
            <h1>"Reviews"</h1>
            {move || {
                error
                    .get()
                    .map(|message| view! { <div class="error-banner">{message}</div> })
            }}
            <div class="review-filters">
                <input
                    type="search"
                    placeholder="Search reviewer or text"
                    prop:value=search
                    on:input=move |ev| set_search.set(event_target_value(&ev))
                />
                <select on:change=move |ev| {
                    let value = event_target_value(&ev);
                    set_platform.set((value != "all").then_some(value));
                    set_page.set(1);
                }>
                    <option value="all">"All Platforms"</option>
                    <option value="Google">"Google"</option>
                    <option value="Yelp">"Yelp"</option>
                    <option value="Facebook">"Facebook"</option>
                    <option value="TripAdvisor">"TripAdvisor"</option>
                </select>
                <select on:change=move |ev| {
                    set_sentiment.set(Sentiment::parse(&event_target_value(&ev)));
                    set_page.set(1);
                }>
                    <option value="all">"All Sentiment"</option>
                    <option value="Positive">"Positive"</option>
                    <option value="Neutral">"Neutral"</option>
                    <option value="Negative">"Negative"</option>
                    <option value="Mixed">"Mixed"</option>
                </select>
                <select on:change=move |ev| {
                    set_rating.set(event_target_value(&ev).parse::<u8>().ok());
                    set_page.set(1);
                }>
                    <option value="all">"All Ratings"</option>
                    <option value="5">"5 stars"</option>
                    <option value="4">"4 stars"</option>
                    <option value="3">"3 stars"</option>
                    <option value="2">"2 stars"</option>
                    <option value="1">"1 star"</option>
                </select>
                <select on:change=move |ev| {
                    set_read_state.set(parse_tristate(&event_target_value(&ev)));
                    set_page.set(1);
                }>
                    <option value="all">"Read & Unread"</option>
                    <option value="false">"Unread"</option>
                    <option value="true">"Read"</option>
                </select>
                <label class="flag-filter">
                    <input
                        type="checkbox"
                        prop:checked=flagged_only
                        on:change=move |ev| {
                            set_flagged_only.set(event_target_checked(&ev));
                            set_page.set(1);
                        }
                    />
                    "Flagged only"
                </label>
            </div>
            <Show when=move || !loading.get() fallback=|| view! { <div class="spinner"></div> }>
                <ul class="review-list">
                    {move || {
                        visible_reviews()
                            .into_iter()
                            .map(|review| {
                                let toggle_read = toggle_read.clone();
                                let toggle_flag = toggle_flag.clone();
                                let open_reply = open_reply.clone();
                                let read_target = review.clone();
                                let flag_target = review.clone();
                                let reply_target = review.clone();
                                view! {
                                    <li class=if review.is_read {
                                        "review-card"
                                    } else {
                                        "review-card unread"
                                    }>
                                        <div class="review-head">
                                            <span class="reviewer">
                                                {review.reviewer_name.clone()}
                                            </span>
                                            <span class="platform-name">
                                                {review.platform.clone()}
                                            </span>
                                            <span class="rating">
                                                {format!("{}/5", review.rating)}
                                            </span>
                                            {review
                                                .sentiment
                                                .map(|s| {
                                                    view! {
                                                        <span class="sentiment-tag">
                                                            {s.to_string()}
                                                        </span>
                                                    }
                                                })}
                                            <span class="when">
                                                {time_since(review.review_date, Utc::now())}
                                            </span>
                                        </div>
                                        <p class="review-body">{review.review_text.clone()}</p>
                                        {review
                                            .response_text
                                            .clone()
                                            .map(|text| {
                                                view! {
                                                    <p class="owner-response">
                                                        <strong>"Your response: "</strong>
                                                        {text}
                                                    </p>
                                                }
                                            })}
                                        <div class="review-actions">
                                            <button on:click=move |_| {
                                                toggle_read(read_target.clone())
                                            }>
                                                {if review.is_read {
                                                    "Mark Unread"
                                                } else {
                                                    "Mark Read"
                                                }}
                                            </button>
                                            <button on:click=move |_| {
                                                toggle_flag(flag_target.clone())
                                            }>
                                                {if review.is_flagged { "Unflag" } else { "Flag" }}
                                            </button>
                                            <button on:click=move |_| {
                                                open_reply(reply_target.clone())
                                            }>
                                                "Reply"
                                            </button>
                                        </div>
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </ul>
                <div class="pagination">
                    <button
                        disabled=move || page.get() <= 1
                        on:click=move |_| set_page.update(|p| *p = p.saturating_sub(1).max(1))
                    >
                        "Previous"
                    </button>
                    <span>
                        {move || format!("Page {} of {}", page.get(), total_pages.get())}
                    </span>
                    <button
                        disabled=move || page.get() >= total_pages.get()
                        on:click=move |_| set_page.update(|p| *p += 1)
                    >
                        "Next"
                    </button>
                </div>
            </Show>
            <Show when=move || selected.get().is_some()>
                <div class="modal-backdrop" on:click=move |_| set_selected.set(None)></div>
                <div class="reply-modal">
                    <h2>"Reply to Review"</h2>
                    {move || {
                        selected
                            .get()
                            .map(|review| {
                                view! {
                                    <blockquote class="quoted-review">
                                        <strong>{review.reviewer_name.clone()}</strong>
                                        <p>{review.review_text.clone()}</p>
                                    </blockquote>
                                }
                            })
                    }}
                    <textarea
                        rows=5
                        placeholder="Write your response"
                        prop:value=reply_text
                        on:input=move |ev| set_reply_text.set(event_target_value(&ev))
                    ></textarea>
                    <div class="modal-actions">
                        <button
                            disabled=move || generating.get()
                            on:click=generate_response.clone()
                        >
                            {move || if generating.get() { "Working..." } else { "AI Generate" }}
                        </button>
                        <button
                            disabled=move || generating.get()
                            on:click=improve_response.clone()
                        >
                            "AI Improve"
                        </button>
                        <button disabled=move || replying.get() on:click=submit_reply.clone()>
                            {move || if replying.get() { "Sending..." } else { "Send Reply" }}
                        </button>
                        <button on:click=move |_| set_selected.set(None)>"Cancel"</button>
                    </div>
                </div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn review(name: &str, text: &str) -> Review {
        Review {
            id: 1,
            business_id: 1,
            platform: "Google".to_string(),
            reviewer_name: name.to_string(),
            reviewer_avatar: None,
            rating: 5,
            review_text: text.to_string(),
            review_date: Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap(),
            sentiment: Some(Sentiment::Positive),
            sentiment_score: Some(0.9),
            is_read: false,
            is_flagged: false,
            response_text: None,
            responded_at: None,
            ai_suggested_response: None,
        }
    }

    #[test]
    fn search_matches_name_and_body_case_insensitively() {
        let r = review("Sarah Johnson", "Amazing coffee and friendly staff");
        assert!(matches_search(&r, "sarah"));
        assert!(matches_search(&r, "COFFEE"));
        assert!(matches_search(&r, "  friendly  "));
        assert!(!matches_search(&r, "pizza"));
    }

    #[test]
    fn empty_search_matches_everything() {
        let r = review("Mike", "fine");
        assert!(matches_search(&r, ""));
        assert!(matches_search(&r, "   "));
    }

    #[test]
    fn tristate_parsing() {
        assert_eq!(parse_tristate("true"), Some(true));
        assert_eq!(parse_tristate("false"), Some(false));
        assert_eq!(parse_tristate("all"), None);
    }
}

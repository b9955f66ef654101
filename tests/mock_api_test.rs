#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

use reviewhub::api::{Api, BackendApi};
use reviewhub::models::notification::NotificationFilter;
use reviewhub::models::review::ReviewFilter;
use reviewhub::models::team::Role;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
async fn dashboard_summary_is_populated() {
    let api = Api::mock();
    let summary = api.get_dashboard_summary(1).await.unwrap().data;
    assert!(summary.total_reviews > 0);
    assert!(summary.average_rating > 0.0);
    assert!(summary.recent_reviews.len() <= 5);
    assert!(summary.sms_usage.sent <= summary.sms_usage.limit);
}

#[wasm_bindgen_test]
async fn review_filters_narrow_the_page() {
    let api = Api::mock();

    let all = api.get_reviews(ReviewFilter::default()).await.unwrap().data;
    assert!(all.total_count >= all.reviews.len() as u32);
    assert_eq!(all.page, 1);

    let flagged = api
        .get_reviews(ReviewFilter {
            is_flagged: Some(true),
            ..Default::default()
        })
        .await
        .unwrap()
        .data;
    assert!(flagged.total_count < all.total_count);
    assert!(flagged.reviews.iter().all(|r| r.is_flagged));

    let unread = api
        .get_reviews(ReviewFilter {
            is_read: Some(false),
            ..Default::default()
        })
        .await
        .unwrap()
        .data;
    assert!(unread.reviews.iter().all(|r| !r.is_read));
}

#[wasm_bindgen_test]
async fn notifications_honor_the_unread_filter() {
    let api = Api::mock();
    let unread = api
        .get_notifications(NotificationFilter {
            unread_only: Some(true),
            ..Default::default()
        })
        .await
        .unwrap()
        .data;
    assert!(unread.notifications.iter().all(|n| !n.is_read));

    let count = api.get_unread_count().await.unwrap().data;
    assert_eq!(count.count, unread.total_count);
}

#[wasm_bindgen_test]
async fn unknown_competitor_sync_is_a_404() {
    let api = Api::mock();
    let err = api.sync_competitor(9999).await.unwrap_err();
    assert_eq!(err.status(), Some(404));
}

#[wasm_bindgen_test]
async fn improving_a_response_extends_it() {
    let api = Api::mock();
    let generated = api.generate_ai_response(1).await.unwrap().data;
    assert!(!generated.response.is_empty());

    let improved = api
        .improve_ai_response(1, generated.response.clone())
        .await
        .unwrap()
        .data;
    assert!(improved.response.len() > generated.response.len());
}

#[wasm_bindgen_test]
async fn inviting_echoes_the_invitee() {
    let api = Api::mock();
    let reply = api
        .invite_team_member(1, "new.hire@example.com".to_string(), Role::Member)
        .await
        .unwrap()
        .data;
    assert!(reply.message.contains("new.hire@example.com"));
}

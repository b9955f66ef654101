#![cfg(target_arch = "wasm32")]

use std::time::Duration;

use gloo_timers::future::sleep;
use leptos::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

use reviewhub::components::AiSettingsTab;
use reviewhub::models::ai::AiSettings;

wasm_bindgen_test_configure!(run_in_browser);

fn mount_panel(settings: RwSignal<AiSettings>) -> web_sys::Element {
    let document = web_sys::window().unwrap().document().unwrap();
    let container = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&container).unwrap();

    mount_to(
        container.clone().unchecked_into(),
        move || {
            let (saving, _) = create_signal(false);
            view! {
                <AiSettingsTab settings=settings saving=saving on_save=move |_: ()| {}/>
            }
        },
    );
    container
}

#[wasm_bindgen_test]
async fn sub_toggles_follow_the_master_switch() {
    let settings = create_rw_signal(AiSettings::default());
    let container = mount_panel(settings);
    sleep(Duration::from_millis(20)).await;

    assert!(
        container.query_selector(".sub-toggles").unwrap().is_none(),
        "dependent toggles should be hidden while auto-reply is off"
    );

    settings.update(|s| s.enable_auto_reply = true);
    sleep(Duration::from_millis(20)).await;

    assert!(
        container.query_selector(".sub-toggles").unwrap().is_some(),
        "dependent toggles should appear once auto-reply is on"
    );

    settings.update(|s| s.enable_auto_reply = false);
    sleep(Duration::from_millis(20)).await;

    assert!(container.query_selector(".sub-toggles").unwrap().is_none());
}

#[wasm_bindgen_test]
async fn hidden_sub_toggle_values_are_preserved() {
    let settings = create_rw_signal(AiSettings {
        enable_auto_reply: true,
        auto_reply_to_positive_reviews: true,
        ..Default::default()
    });
    let container = mount_panel(settings);
    sleep(Duration::from_millis(20)).await;

    settings.update(|s| s.enable_auto_reply = false);
    sleep(Duration::from_millis(20)).await;
    settings.update(|s| s.enable_auto_reply = true);
    sleep(Duration::from_millis(20)).await;

    assert!(settings.get_untracked().auto_reply_to_positive_reviews);
    assert!(container.query_selector(".sub-toggles").unwrap().is_some());
}

//! AI settings panel embedded in the settings page. The page owns the
//! settings signal and the save call; this component only edits it. The
//! dependent auto-reply toggles are hidden while the master toggle is off
//! but keep their stored values, and 1-2 star reviews are never auto-replied
//! regardless of anything here.

use leptos::*;

use crate::models::ai::{AiSettings, ResponseLength, ResponseTone};

#[component]
fn ToggleRow(
    label: &'static str,
    description: &'static str,
    checked: Signal<bool>,
    #[prop(into)] on_toggle: Callback<bool>,
) -> impl IntoView {
    view! {
        <label class="toggle-row">
            <div class="toggle-text">
                <span class="toggle-label">{label}</span>
                <span class="toggle-description">{description}</span>
            </div>
            <input
                type="checkbox"
                prop:checked=checked
                on:change=move |ev| on_toggle.call(event_target_checked(&ev))
            />
        </label>
    }
}

#[component]
pub fn AiSettingsTab(
    settings: RwSignal<AiSettings>,
    #[prop(into)] saving: Signal<bool>,
    #[prop(into)] on_save: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="ai-settings">
            <section class="settings-card">
                <h3>"Auto-Reply"</h3>
                <ToggleRow
                    label="Enable Auto-Reply"
                    description="Let the assistant respond to eligible reviews automatically"
                    checked=Signal::derive(move || settings.get().enable_auto_reply)
                    on_toggle=move |on| settings.update(|s| s.enable_auto_reply = on)
                />
                <Show when=move || settings.get().enable_auto_reply>
                    <div class="sub-toggles">
                        <ToggleRow
                            label="Positive reviews (4-5 stars)"
                            description="Auto-reply to clearly happy customers"
                            checked=Signal::derive(move || {
                                settings.get().auto_reply_to_positive_reviews
                            })
                            on_toggle=move |on| {
                                settings.update(|s| s.auto_reply_to_positive_reviews = on)
                            }
                        />
                        <ToggleRow
                            label="Neutral reviews (3 stars)"
                            description="Auto-reply to middle-of-the-road feedback"
                            checked=Signal::derive(move || {
                                settings.get().auto_reply_to_neutral_reviews
                            })
                            on_toggle=move |on| {
                                settings.update(|s| s.auto_reply_to_neutral_reviews = on)
                            }
                        />
                        <ToggleRow
                            label="Reviews containing questions"
                            description="Auto-reply when a review asks something"
                            checked=Signal::derive(move || settings.get().auto_reply_to_questions)
                            on_toggle=move |on| {
                                settings.update(|s| s.auto_reply_to_questions = on)
                            }
                        />
                    </div>
                </Show>
                <p class="safety-note">
                    "1-2 star reviews are never auto-replied. They always wait for a \
                     personal response."
                </p>
            </section>
            <section class="settings-card">
                <h3>"AI Assistance"</h3>
                <ToggleRow
                    label="Response suggestions"
                    description="Draft suggested replies for every review"
                    checked=Signal::derive(move || settings.get().enable_ai_suggestions)
                    on_toggle=move |on| settings.update(|s| s.enable_ai_suggestions = on)
                />
                <ToggleRow
                    label="Sentiment analysis"
                    description="Classify review tone automatically"
                    checked=Signal::derive(move || settings.get().enable_sentiment_analysis)
                    on_toggle=move |on| settings.update(|s| s.enable_sentiment_analysis = on)
                />
                <ToggleRow
                    label="Competitor analysis"
                    description="Track how competitors compare"
                    checked=Signal::derive(move || settings.get().enable_competitor_analysis)
                    on_toggle=move |on| settings.update(|s| s.enable_competitor_analysis = on)
                />
                <ToggleRow
                    label="Insights generation"
                    description="Summarize trends across your reviews"
                    checked=Signal::derive(move || settings.get().enable_insights_generation)
                    on_toggle=move |on| settings.update(|s| s.enable_insights_generation = on)
                />
            </section>
            <section class="settings-card">
                <h3>"Response Style"</h3>
                <label class="select-row">
                    "Tone"
                    <select on:change=move |ev| {
                        if let Some(tone) = ResponseTone::parse(&event_target_value(&ev)) {
                            settings.update(|s| s.response_tone = tone);
                        }
                    }>
                        {[
                            ResponseTone::Professional,
                            ResponseTone::Friendly,
                            ResponseTone::Casual,
                        ]
                            .into_iter()
                            .map(|tone| {
                                view! {
                                    <option
                                        value=tone.to_string()
                                        selected=move || settings.get().response_tone == tone
                                    >
                                        {tone.to_string()}
                                    </option>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </select>
                </label>
                <label class="select-row">
                    "Length"
                    <select on:change=move |ev| {
                        if let Some(length) = ResponseLength::parse(&event_target_value(&ev)) {
                            settings.update(|s| s.response_length = length);
                        }
                    }>
                        {[ResponseLength::Short, ResponseLength::Medium, ResponseLength::Long]
                            .into_iter()
                            .map(|length| {
                                view! {
                                    <option
                                        value=length.to_string()
                                        selected=move || settings.get().response_length == length
                                    >
                                        {length.to_string()}
                                    </option>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </select>
                </label>
            </section>
            <button
                class="save-button"
                disabled=move || saving.get()
                on:click=move |_| on_save.call(())
            >
                {move || if saving.get() { "Saving..." } else { "Save AI Settings" }}
            </button>
        </div>
    }
}

//! Settings hub: profile, team, notification preferences, AI behavior,
//! billing and security tabs.

use futures::future::join4;
use leptos::logging::log;
use leptos::*;

use crate::api::Api;
use crate::components::{AiSettingsTab, TeamManagement};
use crate::models::ai::AiSettings;
use crate::models::business::Business;
use crate::models::notification::NotificationPreferences;
use crate::models::user::UpdateProfileRequest;
use crate::pages::BUSINESS_ID;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SettingsTab {
    Profile,
    Team,
    Notifications,
    Ai,
    Billing,
    Security,
}

const TABS: [(SettingsTab, &str); 6] = [
    (SettingsTab::Profile, "Profile"),
    (SettingsTab::Team, "Team"),
    (SettingsTab::Notifications, "Notifications"),
    (SettingsTab::Ai, "AI"),
    (SettingsTab::Billing, "Billing"),
    (SettingsTab::Security, "Security"),
];

#[component]
fn PreferenceToggle(
    label: &'static str,
    checked: Signal<bool>,
    #[prop(into)] on_toggle: Callback<bool>,
) -> impl IntoView {
    view! {
        <label class="toggle-row">
            <span class="toggle-label">{label}</span>
            <input
                type="checkbox"
                prop:checked=checked
                on:change=move |ev| on_toggle.call(event_target_checked(&ev))
            />
        </label>
    }
}

#[component]
pub fn SettingsPage() -> impl IntoView {
    let api = Api::expect();
    let (tab, set_tab) = create_signal(SettingsTab::Profile);
    let (loading, set_loading) = create_signal(true);
    let (error, set_error) = create_signal(None::<String>);
    let (notice, set_notice) = create_signal(None::<String>);

    let (full_name, set_full_name) = create_signal(String::new());
    let (email, set_email) = create_signal(String::new());
    let (phone, set_phone) = create_signal(String::new());
    let (plan, set_plan) = create_signal("Free".to_string());
    let (business, set_business) = create_signal(None::<Business>);
    let (saving_profile, set_saving_profile) = create_signal(false);

    let preferences = create_rw_signal(NotificationPreferences::default());
    let (saving_preferences, set_saving_preferences) = create_signal(false);

    let ai_settings = create_rw_signal(AiSettings::default());
    let (saving_ai, set_saving_ai) = create_signal(false);

    {
        let api = api.clone();
        create_effect(move |_| {
            let api = api.clone();
            spawn_local(async move {
                let (user_result, businesses_result, prefs_result, ai_result) = join4(
                    api.get_current_user(),
                    api.get_my_businesses(),
                    api.get_notification_preferences(),
                    api.get_ai_settings(BUSINESS_ID),
                )
                .await;
                let mut failed = None;
                match user_result {
                    Ok(response) => {
                        let user = response.data;
                        set_full_name.set(user.full_name);
                        set_email.set(user.email);
                        set_phone.set(user.phone_number.unwrap_or_default());
                        set_plan.set(user.subscription_plan);
                    }
                    Err(err) => failed = Some(err.to_string()),
                }
                match businesses_result {
                    Ok(response) => set_business.set(response.data.into_iter().next()),
                    Err(err) => failed = Some(err.to_string()),
                }
                match prefs_result {
                    Ok(response) => preferences.set(response.data),
                    Err(err) => failed = Some(err.to_string()),
                }
                match ai_result {
                    Ok(response) => ai_settings.set(response.data),
                    Err(err) => failed = Some(err.to_string()),
                }
                if let Some(message) = &failed {
                    log!("[SETTINGS] fetch failed: {message}");
                }
                set_error.set(failed);
                set_loading.set(false);
            });
        });
    }

    let save_profile = {
        let api = api.clone();
        move |ev: ev::SubmitEvent| {
            ev.prevent_default();
            let api = api.clone();
            set_saving_profile.set(true);
            spawn_local(async move {
                let req = UpdateProfileRequest {
                    full_name: Some(full_name.get_untracked()),
                    email: Some(email.get_untracked()),
                    phone_number: {
                        let value = phone.get_untracked();
                        (!value.trim().is_empty()).then_some(value)
                    },
                };
                match api.update_profile(req).await {
                    Ok(_) => {
                        set_notice.set(Some("Profile updated".to_string()));
                        set_error.set(None);
                    }
                    Err(err) => {
                        log!("[SETTINGS] profile save failed: {err}");
                        set_error.set(Some(err.to_string()));
                    }
                }
                set_saving_profile.set(false);
            });
        }
    };

    let save_preferences = {
        let api = api.clone();
        move |_| {
            let api = api.clone();
            set_saving_preferences.set(true);
            spawn_local(async move {
                match api
                    .update_notification_preferences(preferences.get_untracked())
                    .await
                {
                    Ok(response) => {
                        preferences.set(response.data);
                        set_notice.set(Some("Notification preferences saved".to_string()));
                        set_error.set(None);
                    }
                    Err(err) => {
                        log!("[SETTINGS] preferences save failed: {err}");
                        set_error.set(Some(err.to_string()));
                    }
                }
                set_saving_preferences.set(false);
            });
        }
    };

    let save_ai = {
        let api = api.clone();
        move |_| {
            let api = api.clone();
            set_saving_ai.set(true);
            spawn_local(async move {
                match api
                    .update_ai_settings(BUSINESS_ID, ai_settings.get_untracked())
                    .await
                {
                    Ok(response) => {
                        ai_settings.set(response.data);
                        set_notice.set(Some("AI settings saved".to_string()));
                        set_error.set(None);
                    }
                    Err(err) => {
                        log!("[SETTINGS] AI settings save failed: {err}");
                        set_error.set(Some(err.to_string()));
                    }
                }
                set_saving_ai.set(false);
            });
        }
    };

    view! {
        <div class="settings-page">
            <h1>"Settings"</h1>
            {move || {
                error
                    .get()
                    .map(|message| view! { <div class="error-banner">{message}</div> })
            }}
            {move || {
                notice
                    .get()
                    .map(|message| view! { <div class="notice-banner">{message}</div> })
            }}
            <div class="tab-bar">
                {TABS
                    .iter()
                    .map(|(target, label)| {
                        let target = *target;
                        let label = *label;
                        view! {
                            <button
                                class=move || {
                                    if tab.get() == target { "tab active" } else { "tab" }
                                }
                                on:click=move |_| set_tab.set(target)
                            >
                                {label}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
            <Show when=move || !loading.get() fallback=|| view! { <div class="spinner"></div> }>
                <Show when=move || tab.get() == SettingsTab::Profile>
                    <form class="profile-form" on:submit=save_profile.clone()>
                        <label>
                            "Full name"
                            <input
                                type="text"
                                prop:value=full_name
                                on:input=move |ev| set_full_name.set(event_target_value(&ev))
                            />
                        </label>
                        <label>
                            "Email"
                            <input
                                type="email"
                                prop:value=email
                                on:input=move |ev| set_email.set(event_target_value(&ev))
                            />
                        </label>
                        <label>
                            "Phone"
                            <input
                                type="tel"
                                prop:value=phone
                                on:input=move |ev| set_phone.set(event_target_value(&ev))
                            />
                        </label>
                        <button type="submit" disabled=move || saving_profile.get()>
                            {move || if saving_profile.get() { "Saving..." } else { "Save Profile" }}
                        </button>
                    </form>
                    {move || {
                        business
                            .get()
                            .map(|b| {
                                view! {
                                    <div class="business-card">
                                        <h3>{b.name.clone()}</h3>
                                        <p>{b.industry.clone().unwrap_or_default()}</p>
                                        <p>
                                            {[
                                                b.address.clone(),
                                                b.city.clone(),
                                                b.state.clone(),
                                            ]
                                                .into_iter()
                                                .flatten()
                                                .collect::<Vec<_>>()
                                                .join(", ")}
                                        </p>
                                        <p>{b.phone_number.clone().unwrap_or_default()}</p>
                                    </div>
                                }
                            })
                    }}
                </Show>
                <Show when=move || tab.get() == SettingsTab::Team>
                    <TeamManagement business_id=BUSINESS_ID/>
                </Show>
                <Show when=move || tab.get() == SettingsTab::Notifications>
                    <div class="preferences-form">
                        <h3>"Channels"</h3>
                        <PreferenceToggle
                            label="Email notifications"
                            checked=Signal::derive(move || preferences.get().email_notifications)
                            on_toggle=move |on| {
                                preferences.update(|p| p.email_notifications = on)
                            }
                        />
                        <PreferenceToggle
                            label="Push notifications"
                            checked=Signal::derive(move || preferences.get().push_notifications)
                            on_toggle=move |on| {
                                preferences.update(|p| p.push_notifications = on)
                            }
                        />
                        <PreferenceToggle
                            label="SMS notifications"
                            checked=Signal::derive(move || preferences.get().sms_notifications)
                            on_toggle=move |on| {
                                preferences.update(|p| p.sms_notifications = on)
                            }
                        />
                        <h3>"Notify me about"</h3>
                        <PreferenceToggle
                            label="New reviews"
                            checked=Signal::derive(move || preferences.get().notify_on_new_review)
                            on_toggle=move |on| {
                                preferences.update(|p| p.notify_on_new_review = on)
                            }
                        />
                        <PreferenceToggle
                            label="Replies to reviews"
                            checked=Signal::derive(move || {
                                preferences.get().notify_on_review_reply
                            })
                            on_toggle=move |on| {
                                preferences.update(|p| p.notify_on_review_reply = on)
                            }
                        />
                        <PreferenceToggle
                            label="Low-rating alerts"
                            checked=Signal::derive(move || preferences.get().notify_on_low_rating)
                            on_toggle=move |on| {
                                preferences.update(|p| p.notify_on_low_rating = on)
                            }
                        />
                        <button
                            disabled=move || saving_preferences.get()
                            on:click=save_preferences.clone()
                        >
                            {move || {
                                if saving_preferences.get() {
                                    "Saving..."
                                } else {
                                    "Save Preferences"
                                }
                            }}
                        </button>
                    </div>
                </Show>
                <Show when=move || tab.get() == SettingsTab::Ai>
                    <AiSettingsTab
                        settings=ai_settings
                        saving=saving_ai
                        on_save=save_ai.clone()
                    />
                </Show>
                <Show when=move || tab.get() == SettingsTab::Billing>
                    <div class="billing-card">
                        <h3>"Current Plan"</h3>
                        <p class="plan-name">{move || plan.get()}</p>
                        <p>"Plan changes and invoices are handled by our billing portal."</p>
                    </div>
                </Show>
                <Show when=move || tab.get() == SettingsTab::Security>
                    <div class="security-cards">
                        <div class="security-card">
                            <h3>"Password"</h3>
                            <p>
                                "Passwords are managed by your identity provider. Use its \
                                 account page to change yours."
                            </p>
                        </div>
                        <div class="security-card">
                            <h3>"Multi-factor Authentication"</h3>
                            <p>
                                "MFA enrollment happens during sign-in when your \
                                 organization requires it."
                            </p>
                        </div>
                    </div>
                </Show>
            </Show>
        </div>
    }
}

//! Post-signup profile completion for accounts the identity provider
//! knows but the backend does not yet.

use leptos::logging::log;
use leptos::*;
use leptos_router::use_navigate;

use crate::api::Api;
use crate::auth::AuthContext;
use crate::models::user::RegisterRequest;

#[component]
pub fn RegisterCompletePage() -> impl IntoView {
    let api = Api::expect();
    let auth = AuthContext::expect();

    let (full_name, set_full_name) = create_signal(String::new());
    let (company, set_company) = create_signal(String::new());
    let (phone, set_phone) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);
    let (error, set_error) = create_signal(None::<String>);

    // Prefill from the identity provider's profile.
    {
        let user = auth.user;
        create_effect(move |_| {
            if full_name.get_untracked().is_empty() {
                if let Some(profile) = user.get() {
                    set_full_name.set(profile.name);
                }
            }
        });
    }

    let email = {
        let user = auth.user;
        Signal::derive(move || user.get().map(|u| u.email).unwrap_or_default())
    };

    let submit = {
        let api = api.clone();
        let navigate = use_navigate();
        move |ev: ev::SubmitEvent| {
            ev.prevent_default();
            let name = full_name.get_untracked().trim().to_string();
            if name.is_empty() {
                set_error.set(Some("Please enter your full name.".to_string()));
                return;
            }
            let api = api.clone();
            let navigate = navigate.clone();
            set_submitting.set(true);
            spawn_local(async move {
                let req = RegisterRequest {
                    email: email.get_untracked(),
                    full_name: name,
                    company_name: {
                        let value = company.get_untracked();
                        (!value.trim().is_empty()).then_some(value)
                    },
                    phone_number: {
                        let value = phone.get_untracked();
                        (!value.trim().is_empty()).then_some(value)
                    },
                };
                match api.register(req).await {
                    Ok(response) => {
                        log!("[AUTH] registration complete: {}", response.data.message);
                        navigate("/dashboard", Default::default());
                    }
                    Err(err) => {
                        log!("[AUTH] registration failed: {err}");
                        set_error.set(Some(err.to_string()));
                        set_submitting.set(false);
                    }
                }
            });
        }
    };

    view! {
        <div class="register-complete-page">
            <div class="register-card">
                <h1>"Almost there"</h1>
                <p>"Tell us a little about yourself to finish setting up your account."</p>
                {move || {
                    error
                        .get()
                        .map(|message| view! { <div class="error-banner">{message}</div> })
                }}
                <form on:submit=submit>
                    <label>
                        "Email"
                        <input type="email" prop:value=email disabled=true/>
                    </label>
                    <label>
                        "Full name"
                        <input
                            type="text"
                            prop:value=full_name
                            on:input=move |ev| set_full_name.set(event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "Company (optional)"
                        <input
                            type="text"
                            prop:value=company
                            on:input=move |ev| set_company.set(event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "Phone (optional)"
                        <input
                            type="tel"
                            prop:value=phone
                            on:input=move |ev| set_phone.set(event_target_value(&ev))
                        />
                    </label>
                    <button type="submit" disabled=move || submitting.get()>
                        {move || {
                            if submitting.get() { "Creating account..." } else { "Finish Setup" }
                        }}
                    </button>
                </form>
            </div>
        </div>
    }
}

//! Invitation acceptance: a signed-out registration form reached from an
//! emailed invite link carrying a `?token=` query parameter.

use leptos::logging::log;
use leptos::*;
use leptos_router::{use_query_map, A};

use crate::api::Api;
use crate::models::team::{AcceptInvitationRequest, InvitationDetails};

const SPECIAL_CHARS: &str = r#"!@#$%^&*()_+-=[]{};':"\|,.<>/?"#;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PasswordChecks {
    pub min_length: bool,
    pub uppercase: bool,
    pub lowercase: bool,
    pub digit: bool,
    pub special: bool,
}

impl PasswordChecks {
    pub fn all_pass(&self) -> bool {
        self.min_length && self.uppercase && self.lowercase && self.digit && self.special
    }
}

/// Evaluates the registration password rules.
pub fn check_password(password: &str) -> PasswordChecks {
    PasswordChecks {
        min_length: password.len() >= 8,
        uppercase: password.chars().any(|c| c.is_ascii_uppercase()),
        lowercase: password.chars().any(|c| c.is_ascii_lowercase()),
        digit: password.chars().any(|c| c.is_ascii_digit()),
        special: password.chars().any(|c| SPECIAL_CHARS.contains(c)),
    }
}

#[component]
fn ChecklistItem(label: &'static str, #[prop(into)] pass: Signal<bool>) -> impl IntoView {
    view! {
        <li class=move || if pass.get() { "check pass" } else { "check" }>
            <span class="check-mark">{move || if pass.get() { "✓" } else { "○" }}</span>
            {label}
        </li>
    }
}

#[component]
pub fn AcceptInvitationPage() -> impl IntoView {
    let api = Api::expect();
    let query = use_query_map();
    let token = move || query.with(|q| q.get("token").cloned()).unwrap_or_default();

    let (loading, set_loading) = create_signal(true);
    let (error, set_error) = create_signal(None::<String>);
    let (details, set_details) = create_signal(None::<InvitationDetails>);
    let (registered, set_registered) = create_signal(false);

    let (full_name, set_full_name) = create_signal(String::new());
    let (phone, set_phone) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (confirm, set_confirm) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);

    {
        let api = api.clone();
        create_effect(move |_| {
            let token = token();
            let api = api.clone();
            spawn_local(async move {
                if token.is_empty() {
                    set_error.set(Some("This invitation link is missing its token.".to_string()));
                    set_loading.set(false);
                    return;
                }
                match api.get_invitation_details(token).await {
                    Ok(response) => set_details.set(Some(response.data)),
                    Err(err) => {
                        log!("[TEAM] invitation lookup failed: {err}");
                        set_error.set(Some(err.to_string()));
                    }
                }
                set_loading.set(false);
            });
        });
    }

    let checks = Signal::derive(move || check_password(&password.get()));
    let passwords_match =
        Signal::derive(move || !confirm.get().is_empty() && password.get() == confirm.get());
    let can_submit = Signal::derive(move || {
        !full_name.get().trim().is_empty()
            && checks.get().all_pass()
            && passwords_match.get()
            && !submitting.get()
    });

    let submit = store_value({
        let api = api.clone();
        move |ev: ev::SubmitEvent| {
            ev.prevent_default();
            if !can_submit.get_untracked() {
                return;
            }
            let api = api.clone();
            let token = token();
            set_submitting.set(true);
            spawn_local(async move {
                let req = AcceptInvitationRequest {
                    full_name: full_name.get_untracked().trim().to_string(),
                    password: password.get_untracked(),
                    phone_number: {
                        let value = phone.get_untracked();
                        (!value.trim().is_empty()).then_some(value)
                    },
                };
                match api.accept_invitation(token, req).await {
                    Ok(_) => {
                        set_error.set(None);
                        set_registered.set(true);
                    }
                    Err(err) => {
                        log!("[TEAM] accept invitation failed: {err}");
                        set_error.set(Some(err.to_string()));
                    }
                }
                set_submitting.set(false);
            });
        }
    });

    view! {
        <div class="accept-invitation-page">
            <Show when=move || !loading.get() fallback=|| view! { <div class="spinner"></div> }>
                <Show
                    when=move || registered.get()
                    fallback=move || {
                        view! {
                            <div class="invitation-card">
                                {move || {
                                    error
                                        .get()
                                        .map(|message| {
                                            view! { <div class="error-banner">{message}</div> }
                                        })
                                }}
                                {move || {
                                    details
                                        .get()
                                        .map(|d| {
                                            view! {
                                                <div class="invitation-summary">
                                                    <h1>"Join " {d.business_name.clone()}</h1>
                                                    <p>
                                                        {d.inviter_name.clone()}
                                                        " invited you ("
                                                        {d.email.clone()}
                                                        ") to join as "
                                                        {d.role.to_string()}
                                                        "."
                                                    </p>
                                                </div>
                                            }
                                        })
                                }}
                                <Show when=move || details.get().is_some()>
                                    <form class="registration-form" on:submit=move |ev| submit.with_value(|f| f(ev))>
                                        <label>
                                            "Full name"
                                            <input
                                                type="text"
                                                prop:value=full_name
                                                on:input=move |ev| {
                                                    set_full_name.set(event_target_value(&ev))
                                                }
                                            />
                                        </label>
                                        <label>
                                            "Phone (optional)"
                                            <input
                                                type="tel"
                                                prop:value=phone
                                                on:input=move |ev| {
                                                    set_phone.set(event_target_value(&ev))
                                                }
                                            />
                                        </label>
                                        <label>
                                            "Password"
                                            <input
                                                type="password"
                                                prop:value=password
                                                on:input=move |ev| {
                                                    set_password.set(event_target_value(&ev))
                                                }
                                            />
                                        </label>
                                        <ul class="password-checklist">
                                            <ChecklistItem
                                                label="At least 8 characters"
                                                pass=Signal::derive(move || checks.get().min_length)
                                            />
                                            <ChecklistItem
                                                label="One uppercase letter"
                                                pass=Signal::derive(move || checks.get().uppercase)
                                            />
                                            <ChecklistItem
                                                label="One lowercase letter"
                                                pass=Signal::derive(move || checks.get().lowercase)
                                            />
                                            <ChecklistItem
                                                label="One number"
                                                pass=Signal::derive(move || checks.get().digit)
                                            />
                                            <ChecklistItem
                                                label="One special character"
                                                pass=Signal::derive(move || checks.get().special)
                                            />
                                        </ul>
                                        <label>
                                            "Confirm password"
                                            <input
                                                type="password"
                                                prop:value=confirm
                                                on:input=move |ev| {
                                                    set_confirm.set(event_target_value(&ev))
                                                }
                                            />
                                        </label>
                                        <Show when=move || {
                                            !confirm.get().is_empty() && !passwords_match.get()
                                        }>
                                            <p class="field-error">"Passwords do not match."</p>
                                        </Show>
                                        <button type="submit" disabled=move || !can_submit.get()>
                                            {move || {
                                                if submitting.get() {
                                                    "Creating account..."
                                                } else {
                                                    "Accept & Create Account"
                                                }
                                            }}
                                        </button>
                                    </form>
                                </Show>
                            </div>
                        }
                    }
                >
                    <div class="invitation-card success">
                        <h1>"Account created"</h1>
                        <p>
                            "Your account is ready. You may be asked to set up multi-factor \
                             authentication the first time you sign in."
                        </p>
                        <A class="primary" href="/login?message=registration_success">
                            "Continue to Sign In"
                        </A>
                    </div>
                </Show>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weak_password_fails_every_rule() {
        let checks = check_password("");
        assert!(!checks.min_length);
        assert!(!checks.uppercase);
        assert!(!checks.lowercase);
        assert!(!checks.digit);
        assert!(!checks.special);
        assert!(!checks.all_pass());
    }

    #[test]
    fn strong_password_passes() {
        assert!(check_password("Str0ng!pass").all_pass());
    }

    #[test]
    fn rules_are_independent() {
        assert!(check_password("nouppercase1!").lowercase);
        assert!(!check_password("nouppercase1!").uppercase);
        assert!(check_password("NOLOWER1!").uppercase);
        assert!(!check_password("NOLOWER1!").lowercase);
        assert!(!check_password("NoDigits!!").digit);
        assert!(!check_password("NoSpecial11").special);
        assert!(!check_password("Sh0rt!").min_length);
    }

    #[test]
    fn brackets_and_backslash_count_as_special() {
        assert!(check_password("Passw0rd[").special);
        assert!(check_password("Passw0rd\\").special);
        assert!(check_password("Passw0rd-").special);
    }
}

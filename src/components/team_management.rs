//! Team panel embedded in the settings page: member list with role control,
//! pending invitations with revoke, and an invite form.

use futures::future::join;
use leptos::logging::log;
use leptos::*;

use crate::api::Api;
use crate::models::team::{Invitation, Role, TeamMember};

fn confirm(message: &str) -> bool {
    web_sys::window()
        .map(|w| w.confirm_with_message(message).unwrap_or(false))
        .unwrap_or(false)
}

#[component]
pub fn TeamManagement(business_id: i64) -> impl IntoView {
    let api = Api::expect();
    let (members, set_members) = create_signal(Vec::<TeamMember>::new());
    let (invitations, set_invitations) = create_signal(Vec::<Invitation>::new());
    let (loading, set_loading) = create_signal(true);
    let (error, set_error) = create_signal(None::<String>);
    let (invite_email, set_invite_email) = create_signal(String::new());
    let (invite_role, set_invite_role) = create_signal(Role::Member);
    let (inviting, set_inviting) = create_signal(false);
    let (reload, set_reload) = create_signal(0u32);

    {
        let api = api.clone();
        create_effect(move |_| {
            let _ = reload.get();
            let api = api.clone();
            set_loading.set(true);
            spawn_local(async move {
                let (members_result, invitations_result) = join(
                    api.get_team_members(business_id),
                    api.get_pending_invitations(business_id),
                )
                .await;
                match members_result {
                    Ok(response) => set_members.set(response.data),
                    Err(err) => {
                        log!("[TEAM] members fetch failed: {err}");
                        set_error.set(Some(err.to_string()));
                    }
                }
                match invitations_result {
                    Ok(response) => set_invitations.set(response.data),
                    Err(err) => {
                        log!("[TEAM] invitations fetch failed: {err}");
                        set_error.set(Some(err.to_string()));
                    }
                }
                set_loading.set(false);
            });
        });
    }

    let on_invite = {
        let api = api.clone();
        move |ev: ev::SubmitEvent| {
            ev.prevent_default();
            let email = invite_email.get().trim().to_string();
            if email.is_empty() || !email.contains('@') {
                set_error.set(Some("Enter a valid email address".to_string()));
                return;
            }
            let api = api.clone();
            set_inviting.set(true);
            spawn_local(async move {
                match api
                    .invite_team_member(business_id, email, invite_role.get_untracked())
                    .await
                {
                    Ok(_) => {
                        set_invite_email.set(String::new());
                        set_error.set(None);
                        set_reload.update(|n| *n += 1);
                    }
                    Err(err) => {
                        log!("[TEAM] invite failed: {err}");
                        set_error.set(Some(err.to_string()));
                    }
                }
                set_inviting.set(false);
            });
        }
    };

    let on_revoke = store_value({
        let api = api.clone();
        move |invitation_id: i64| {
            let api = api.clone();
            spawn_local(async move {
                match api.revoke_invitation(invitation_id).await {
                    Ok(_) => set_reload.update(|n| *n += 1),
                    Err(err) => {
                        log!("[TEAM] revoke failed: {err}");
                        set_error.set(Some(err.to_string()));
                    }
                }
            });
        }
    });

    let on_role_change = store_value({
        let api = api.clone();
        move |user_id: i64, value: String| {
            let Some(role) = Role::parse(&value) else {
                return;
            };
            let api = api.clone();
            spawn_local(async move {
                match api.update_member_role(business_id, user_id, role).await {
                    Ok(_) => set_reload.update(|n| *n += 1),
                    Err(err) => {
                        log!("[TEAM] role change failed: {err}");
                        set_error.set(Some(err.to_string()));
                    }
                }
            });
        }
    });

    let on_remove = store_value({
        let api = api.clone();
        move |user_id: i64, name: String| {
            if !confirm(&format!("Remove {name} from the team?")) {
                return;
            }
            let api = api.clone();
            spawn_local(async move {
                match api.remove_team_member(business_id, user_id).await {
                    Ok(_) => set_reload.update(|n| *n += 1),
                    Err(err) => {
                        log!("[TEAM] remove failed: {err}");
                        set_error.set(Some(err.to_string()));
                    }
                }
            });
        }
    });

    view! {
        <div class="team-management">
            <h2>"Team Members"</h2>
            {move || {
                error
                    .get()
                    .map(|message| view! { <div class="error-banner">{message}</div> })
            }}
            <form class="invite-form" on:submit=on_invite>
                <input
                    type="email"
                    placeholder="colleague@company.com"
                    prop:value=invite_email
                    on:input=move |ev| set_invite_email.set(event_target_value(&ev))
                />
                <select on:change=move |ev| {
                    if let Some(role) = Role::parse(&event_target_value(&ev)) {
                        set_invite_role.set(role);
                    }
                }>
                    <option value="Member" selected=move || invite_role.get() == Role::Member>
                        "Member"
                    </option>
                    <option value="Admin" selected=move || invite_role.get() == Role::Admin>
                        "Admin"
                    </option>
                </select>
                <button type="submit" disabled=move || inviting.get()>
                    {move || if inviting.get() { "Sending..." } else { "Send Invite" }}
                </button>
            </form>
            <Show
                when=move || !loading.get()
                fallback=|| view! { <div class="spinner"></div> }
            >
                <Show when=move || !invitations.get().is_empty()>
                    <h3>"Pending Invitations"</h3>
                    <ul class="invitation-list">
                        {move || {
                            invitations
                                .get()
                                .into_iter()
                                .map(|invitation| {
                                    let id = invitation.id;
                                    view! {
                                        <li class="invitation-row">
                                            <span>{invitation.email.clone()}</span>
                                            <span class="role-tag">
                                                {invitation.role.to_string()}
                                            </span>
                                            <span class="expires">
                                                "Expires "
                                                {invitation.expires_at.format("%b %-d").to_string()}
                                            </span>
                                            <button on:click=move |_| on_revoke.with_value(|f| f(id))>
                                                "Revoke"
                                            </button>
                                        </li>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </ul>
                </Show>
                <ul class="member-list">
                    {move || {
                        members
                            .get()
                            .into_iter()
                            .map(|member| {
                                let user_id = member.user_id;
                                let name = member.user.full_name.clone();
                                let remove_name = name.clone();
                                let is_owner = member.role == Role::Owner;
                                view! {
                                    <li class="member-row">
                                        <div class="member-identity">
                                            <span class="member-name">{name}</span>
                                            <span class="member-email">
                                                {member.user.email.clone()}
                                            </span>
                                        </div>
                                        <Show
                                            when=move || !is_owner
                                            fallback=|| {
                                                view! { <span class="role-tag">"Owner"</span> }
                                            }
                                        >
                                            <select on:change=move |ev| on_role_change
                                                .with_value(|f| f(
                                                    user_id,
                                                    event_target_value(&ev),
                                                ))>
                                                <option
                                                    value="Admin"
                                                    selected=member.role == Role::Admin
                                                >
                                                    "Admin"
                                                </option>
                                                <option
                                                    value="Member"
                                                    selected=member.role == Role::Member
                                                >
                                                    "Member"
                                                </option>
                                            </select>
                                            <button on:click={
                                                let remove_name = remove_name.clone();
                                                move |_| on_remove
                                                    .with_value(|f| f(user_id, remove_name.clone()))
                                            }>
                                                "Remove"
                                            </button>
                                        </Show>
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </ul>
            </Show>
        </div>
    }
}

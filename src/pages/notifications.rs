//! Notification center: paginated list with unread filter and per-item
//! and bulk read controls.

use chrono::Utc;
use leptos::logging::log;
use leptos::*;

use crate::api::Api;
use crate::models::notification::{Notification, NotificationFilter};
use crate::utils::time::time_since;

const PAGE_SIZE: u32 = 20;

/// Human label for the notification kind discriminant.
pub fn kind_label(kind: u8) -> &'static str {
    match kind {
        0 => "New review",
        1 => "Review reply",
        2 => "Low rating",
        _ => "Notification",
    }
}

#[component]
pub fn NotificationsPage() -> impl IntoView {
    let api = Api::expect();
    let (reload, set_reload) = create_signal(0u32);
    let (loading, set_loading) = create_signal(true);
    let (error, set_error) = create_signal(None::<String>);
    let (items, set_items) = create_signal(Vec::<Notification>::new());
    let (page, set_page) = create_signal(1u32);
    let (total_pages, set_total_pages) = create_signal(1u32);
    let (total_count, set_total_count) = create_signal(0u32);
    let (unread_only, set_unread_only) = create_signal(false);

    {
        let api = api.clone();
        create_effect(move |_| {
            let _ = reload.get();
            let filter = NotificationFilter {
                unread_only: unread_only.get().then_some(true),
                page: Some(page.get()),
                page_size: Some(PAGE_SIZE),
            };
            let api = api.clone();
            set_loading.set(true);
            spawn_local(async move {
                match api.get_notifications(filter).await {
                    Ok(response) => {
                        let data = response.data;
                        set_items.set(data.notifications);
                        set_total_pages.set(data.total_pages.max(1));
                        set_total_count.set(data.total_count);
                        set_error.set(None);
                    }
                    Err(err) => {
                        log!("[NOTIFICATIONS] fetch failed: {err}");
                        set_error.set(Some(err.to_string()));
                    }
                }
                set_loading.set(false);
            });
        });
    }

    let refetch = move || set_reload.update(|n| *n += 1);

    let mark_read = store_value({
        let api = api.clone();
        move |id: i64| {
            let api = api.clone();
            spawn_local(async move {
                if let Err(err) = api.mark_notification_read(id).await {
                    log!("[NOTIFICATIONS] mark read failed: {err}");
                    set_error.set(Some(err.to_string()));
                }
                refetch();
            });
        }
    });

    let mark_all_read = {
        let api = api.clone();
        move |_| {
            let api = api.clone();
            spawn_local(async move {
                if let Err(err) = api.mark_all_notifications_read().await {
                    log!("[NOTIFICATIONS] mark all read failed: {err}");
                    set_error.set(Some(err.to_string()));
                }
                refetch();
            });
        }
    };

    let delete_one = store_value({
        let api = api.clone();
        move |id: i64| {
            let api = api.clone();
            spawn_local(async move {
                if let Err(err) = api.delete_notification(id).await {
                    log!("[NOTIFICATIONS] delete failed: {err}");
                    set_error.set(Some(err.to_string()));
                }
                refetch();
            });
        }
    });

    view! {
        <div class="notifications-page">
            <div class="page-header">
                <h1>"Notifications"</h1>
                <div class="header-actions">
                    <label class="filter-toggle">
                        <input
                            type="checkbox"
                            prop:checked=unread_only
                            on:change=move |ev| {
                                set_page.set(1);
                                set_unread_only.set(event_target_checked(&ev));
                            }
                        />
                        "Unread only"
                    </label>
                    <button class="secondary" on:click=mark_all_read>
                        "Mark all as read"
                    </button>
                </div>
            </div>
            {move || {
                error
                    .get()
                    .map(|message| view! { <div class="error-banner">{message}</div> })
            }}
            <Show when=move || !loading.get() fallback=|| view! { <div class="spinner"></div> }>
                {move || {
                    let list = items.get();
                    if list.is_empty() {
                        view! {
                            <div class="empty-state">
                                <p>"You're all caught up."</p>
                            </div>
                        }
                            .into_view()
                    } else {
                        let now = Utc::now();
                        list.into_iter()
                            .map(|notification| {
                                let id = notification.id;
                                let is_read = notification.is_read;
                                let row_class = if is_read {
                                    "notification-row"
                                } else {
                                    "notification-row unread"
                                };
                                view! {
                                    <div class=row_class>
                                        <div class="notification-body">
                                            <span class="notification-kind">
                                                {kind_label(notification.kind)}
                                            </span>
                                            <h3>{notification.title.clone()}</h3>
                                            <p>{notification.message.clone()}</p>
                                            <span class="timestamp">
                                                {time_since(notification.created_at, now)}
                                            </span>
                                        </div>
                                        <div class="notification-actions">
                                            <Show when=move || !is_read>
                                                <button
                                                    class="link-button"
                                                    on:click=move |_| mark_read
                                                        .with_value(|f| f(id))
                                                >
                                                    "Mark read"
                                                </button>
                                            </Show>
                                            <button
                                                class="link-button danger"
                                                on:click=move |_| delete_one
                                                    .with_value(|f| f(id))
                                            >
                                                "Delete"
                                            </button>
                                        </div>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()
                            .into_view()
                    }
                }}
                <div class="pagination">
                    <button
                        disabled=move || page.get() <= 1
                        on:click=move |_| {
                            set_page.update(|p| *p = p.saturating_sub(1).max(1));
                        }
                    >
                        "Previous"
                    </button>
                    <span>
                        {move || {
                            format!(
                                "Page {} of {} ({} total)",
                                page.get(),
                                total_pages.get(),
                                total_count.get(),
                            )
                        }}
                    </span>
                    <button
                        disabled=move || page.get() >= total_pages.get()
                        on:click=move |_| set_page.update(|p| *p += 1)
                    >
                        "Next"
                    </button>
                </div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_labels_cover_known_discriminants() {
        assert_eq!(kind_label(0), "New review");
        assert_eq!(kind_label(1), "Review reply");
        assert_eq!(kind_label(2), "Low rating");
        assert_eq!(kind_label(9), "Notification");
    }
}

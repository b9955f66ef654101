//! Customer outreach: bulk SMS to point-of-sale customers, campaign
//! management and a local template catalog.

use chrono::Utc;
use futures::future::join;
use leptos::logging::log;
use leptos::*;
use std::collections::HashSet;

use crate::api::Api;
use crate::models::outreach::{BulkSmsRequest, Campaign, Customer, NewCampaign};
use crate::pages::BUSINESS_ID;
use crate::utils::time::time_since;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutreachTab {
    Customers,
    Campaigns,
    Templates,
}

/// Named SMS template; page-local catalog, no backend endpoint.
struct MessageTemplate {
    name: &'static str,
    category: &'static str,
    body: &'static str,
}

const TEMPLATES: [MessageTemplate; 4] = [
    MessageTemplate {
        name: "Review Request",
        category: "Review Request",
        body: "Hi {name}, thanks for visiting {business_name}! We'd love your feedback: \
               {review_link}",
    },
    MessageTemplate {
        name: "Thank You",
        category: "Thank You",
        body: "Thank you for dining with us, {name}! We hope to see you again at \
               {business_name} soon.",
    },
    MessageTemplate {
        name: "Follow Up",
        category: "Follow-up",
        body: "Hi {name}, it's been a while since your last visit to {business_name}. \
               We miss you!",
    },
    MessageTemplate {
        name: "Weekend Promotion",
        category: "Promotion",
        body: "{name}, this weekend only: 20% off at {business_name}. Show this text \
               to redeem.",
    },
];

/// Substitutes sample values so the catalog can show what a recipient sees.
pub fn render_template_preview(body: &str) -> String {
    body.replace("{name}", "Alex")
        .replace("{business_name}", "Main Street Cafe")
        .replace("{review_link}", "https://reviewhub.com/r/demo")
}

pub fn validate_bulk_sms(message: &str, recipient_count: usize) -> Result<(), String> {
    if recipient_count == 0 {
        return Err("Select at least one customer".to_string());
    }
    if message.trim().is_empty() {
        return Err("Message cannot be empty".to_string());
    }
    Ok(())
}

pub fn validate_campaign(
    name: &str,
    message: &str,
    recipient_count: usize,
) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("Campaign name is required".to_string());
    }
    if message.trim().is_empty() {
        return Err("Campaign message is required".to_string());
    }
    if recipient_count == 0 {
        return Err("Campaign needs at least one recipient".to_string());
    }
    Ok(())
}

#[component]
pub fn PosAutomationPage() -> impl IntoView {
    let api = Api::expect();
    let (tab, set_tab) = create_signal(OutreachTab::Customers);
    let (customers, set_customers) = create_signal(Vec::<Customer>::new());
    let (campaigns, set_campaigns) = create_signal(Vec::<Campaign>::new());
    let (loading, set_loading) = create_signal(true);
    let (error, set_error) = create_signal(None::<String>);
    let (notice, set_notice) = create_signal(None::<String>);
    let (reload, set_reload) = create_signal(0u32);

    let (selected, set_selected) = create_signal(HashSet::<i64>::new());
    let (sms_message, set_sms_message) = create_signal(String::new());
    let (sending, set_sending) = create_signal(false);

    let (campaign_name, set_campaign_name) = create_signal(String::new());
    let (campaign_message, set_campaign_message) = create_signal(String::new());
    let (creating, set_creating) = create_signal(false);

    {
        let api = api.clone();
        create_effect(move |_| {
            let _ = reload.get();
            let api = api.clone();
            set_loading.set(true);
            spawn_local(async move {
                let (customers_result, campaigns_result) = join(
                    api.get_customers(BUSINESS_ID),
                    api.get_campaigns(BUSINESS_ID),
                )
                .await;
                match customers_result {
                    Ok(response) => set_customers.set(response.data),
                    Err(err) => {
                        log!("[OUTREACH] customers fetch failed: {err}");
                        set_error.set(Some(err.to_string()));
                    }
                }
                match campaigns_result {
                    Ok(response) => set_campaigns.set(response.data),
                    Err(err) => {
                        log!("[OUTREACH] campaigns fetch failed: {err}");
                        set_error.set(Some(err.to_string()));
                    }
                }
                set_loading.set(false);
            });
        });
    }

    let selected_phone_numbers = move || {
        let chosen = selected.get_untracked();
        customers
            .get_untracked()
            .into_iter()
            .filter(|c| chosen.contains(&c.id))
            .map(|c| c.phone_number)
            .collect::<Vec<_>>()
    };

    let on_send_sms = store_value({
        let api = api.clone();
        move |_| {
            let numbers = selected_phone_numbers();
            let message = sms_message.get_untracked();
            if let Err(reason) = validate_bulk_sms(&message, numbers.len()) {
                set_error.set(Some(reason));
                return;
            }
            let api = api.clone();
            set_sending.set(true);
            spawn_local(async move {
                let req = BulkSmsRequest {
                    business_id: BUSINESS_ID,
                    phone_numbers: numbers,
                    message,
                };
                match api.send_bulk_sms(req).await {
                    Ok(response) => {
                        set_notice.set(Some(response.data.message));
                        set_sms_message.set(String::new());
                        set_selected.set(HashSet::new());
                        set_error.set(None);
                    }
                    Err(err) => {
                        log!("[OUTREACH] bulk SMS failed: {err}");
                        set_error.set(Some(err.to_string()));
                    }
                }
                set_sending.set(false);
            });
        }
    });

    let on_create_campaign = store_value({
        let api = api.clone();
        move |ev: ev::SubmitEvent| {
            ev.prevent_default();
            let name = campaign_name.get_untracked();
            let message = campaign_message.get_untracked();
            let numbers = customers
                .get_untracked()
                .into_iter()
                .map(|c| c.phone_number)
                .collect::<Vec<_>>();
            if let Err(reason) = validate_campaign(&name, &message, numbers.len()) {
                set_error.set(Some(reason));
                return;
            }
            let api = api.clone();
            set_creating.set(true);
            spawn_local(async move {
                let req = NewCampaign {
                    business_id: BUSINESS_ID,
                    name: name.trim().to_string(),
                    message,
                    scheduled_for: None,
                    recipient_phone_numbers: numbers,
                };
                match api.create_campaign(req).await {
                    Ok(response) => {
                        set_notice.set(Some(format!(
                            "Campaign '{}' created",
                            response.data.name
                        )));
                        set_campaign_name.set(String::new());
                        set_campaign_message.set(String::new());
                        set_error.set(None);
                        set_reload.update(|n| *n += 1);
                    }
                    Err(err) => {
                        log!("[OUTREACH] campaign creation failed: {err}");
                        set_error.set(Some(err.to_string()));
                    }
                }
                set_creating.set(false);
            });
        }
    });

    let tab_button = move |target: OutreachTab, label: &'static str| {
        view! {
            <button
                class=move || if tab.get() == target { "tab active" } else { "tab" }
                on:click=move |_| set_tab.set(target)
            >
                {label}
            </button>
        }
    };

    view! {
        <div class="pos-automation-page">
            <h1>"POS Automation"</h1>
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
                {tab_button(OutreachTab::Customers, "Customers")}
                {tab_button(OutreachTab::Campaigns, "Campaigns")}
                {tab_button(OutreachTab::Templates, "Templates")}
            </div>
            <Show when=move || !loading.get() fallback=|| view! { <div class="spinner"></div> }>
                <Show when=move || tab.get() == OutreachTab::Customers>
                    <div class="customers-tab">
                        <ul class="customer-list">
                            {move || {
                                customers
                                    .get()
                                    .into_iter()
                                    .map(|customer| {
                                        let id = customer.id;
                                        view! {
                                            <li class="customer-row">
                                                <input
                                                    type="checkbox"
                                                    prop:checked=move || {
                                                        selected.get().contains(&id)
                                                    }
                                                    on:change=move |_| {
                                                        set_selected.update(|chosen| {
                                                            if !chosen.remove(&id) {
                                                                chosen.insert(id);
                                                            }
                                                        })
                                                    }
                                                />
                                                <span class="customer-name">
                                                    {customer.name.clone()}
                                                </span>
                                                <span>{customer.phone_number.clone()}</span>
                                                <span>
                                                    {format!("{} visits", customer.total_visits)}
                                                </span>
                                                <span>
                                                    {customer
                                                        .last_visit
                                                        .map(|visit| {
                                                            time_since(visit, Utc::now())
                                                        })
                                                        .unwrap_or_else(|| "never".to_string())}
                                                </span>
                                            </li>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </ul>
                        <div class="bulk-sms">
                            <textarea
                                rows=3
                                placeholder="Message to selected customers"
                                prop:value=sms_message
                                on:input=move |ev| set_sms_message.set(event_target_value(&ev))
                            ></textarea>
                            <button
                                disabled=move || sending.get()
                                on:click=move |ev| on_send_sms.with_value(|f| f(ev))
                            >
                                {move || {
                                    if sending.get() {
                                        "Sending...".to_string()
                                    } else {
                                        format!("Send SMS ({})", selected.get().len())
                                    }
                                }}
                            </button>
                        </div>
                    </div>
                </Show>
                <Show when=move || tab.get() == OutreachTab::Campaigns>
                    <div class="campaigns-tab">
                        <form class="campaign-form" on:submit=move |ev| on_create_campaign.with_value(|f| f(ev))>
                            <input
                                type="text"
                                placeholder="Campaign name"
                                prop:value=campaign_name
                                on:input=move |ev| set_campaign_name.set(event_target_value(&ev))
                            />
                            <textarea
                                rows=3
                                placeholder="Message template. Use {name}, {business_name}, {review_link}."
                                prop:value=campaign_message
                                on:input=move |ev| {
                                    set_campaign_message.set(event_target_value(&ev))
                                }
                            ></textarea>
                            <button type="submit" disabled=move || creating.get()>
                                {move || {
                                    if creating.get() { "Creating..." } else { "Create Campaign" }
                                }}
                            </button>
                        </form>
                        <ul class="campaign-list">
                            {move || {
                                campaigns
                                    .get()
                                    .into_iter()
                                    .map(|campaign| {
                                        view! {
                                            <li class="campaign-row">
                                                <span class="campaign-name">
                                                    {campaign.name.clone()}
                                                </span>
                                                <span class="status-tag">
                                                    {campaign.status.clone()}
                                                </span>
                                                <span>
                                                    {format!(
                                                        "{}/{} sent",
                                                        campaign.sent_count,
                                                        campaign.recipient_count,
                                                    )}
                                                </span>
                                                <span>
                                                    {campaign
                                                        .response_rate
                                                        .map(|rate| {
                                                            format!("{:.0}% responded", rate * 100.0)
                                                        })
                                                        .unwrap_or_else(|| "-".to_string())}
                                                </span>
                                            </li>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </ul>
                    </div>
                </Show>
                <Show when=move || tab.get() == OutreachTab::Templates>
                    <ul class="template-list">
                        {TEMPLATES
                            .iter()
                            .map(|template| {
                                view! {
                                    <li class="template-card">
                                        <div class="template-head">
                                            <span class="template-name">{template.name}</span>
                                            <span class="template-category">
                                                {template.category}
                                            </span>
                                        </div>
                                        <p class="template-body">{template.body}</p>
                                        <p class="template-preview">
                                            <strong>"Preview: "</strong>
                                            {render_template_preview(template.body)}
                                        </p>
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </ul>
                </Show>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_expands_every_placeholder() {
        let preview = render_template_preview(
            "Hi {name}, thanks for visiting {business_name}! Review us: {review_link}",
        );
        assert_eq!(
            preview,
            "Hi Alex, thanks for visiting Main Street Cafe! Review us: \
             https://reviewhub.com/r/demo"
        );
        assert!(!preview.contains('{'));
    }

    #[test]
    fn bulk_sms_needs_recipients_and_text() {
        assert!(validate_bulk_sms("Hello!", 3).is_ok());
        assert!(validate_bulk_sms("Hello!", 0).is_err());
        assert!(validate_bulk_sms("   ", 3).is_err());
    }

    #[test]
    fn campaign_validation_covers_name_message_audience() {
        assert!(validate_campaign("Promo", "20% off", 10).is_ok());
        assert!(validate_campaign("", "20% off", 10).is_err());
        assert!(validate_campaign("Promo", "", 10).is_err());
        assert!(validate_campaign("Promo", "20% off", 0).is_err());
    }

    #[test]
    fn catalog_covers_the_four_categories() {
        let categories: Vec<_> = TEMPLATES.iter().map(|t| t.category).collect();
        assert_eq!(
            categories,
            vec!["Review Request", "Thank You", "Follow-up", "Promotion"]
        );
    }
}

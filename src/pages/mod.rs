pub mod accept_invitation;
pub mod ai_insights;
pub mod analytics;
pub mod competitors;
pub mod dashboard;
pub mod integrations;
pub mod login;
pub mod notifications;
pub mod pos_automation;
pub mod register_complete;
pub mod reviews;
pub mod settings;

/// The UI currently exercises a single business.
pub(crate) const BUSINESS_ID: i64 = 1;

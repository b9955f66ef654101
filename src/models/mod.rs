pub mod ai;
pub mod analytics;
pub mod business;
pub mod competitor;
pub mod notification;
pub mod outreach;
pub mod platform;
pub mod review;
pub mod team;
pub mod user;

pub mod ai_settings_tab;
pub mod auth_guard;
pub mod navigation;
pub mod team_management;

pub use ai_settings_tab::AiSettingsTab;
pub use auth_guard::AuthGuard;
pub use navigation::Navigation;
pub use team_management::TeamManagement;

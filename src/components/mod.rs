//! UI Components
//!
//! Reusable Leptos components.

mod progress_bar;
mod option_group;
mod welcome_screen;
mod floor_plan_upload;
mod onboarding_flow;
mod food_tracker;
mod reminder_system;
mod citizen_app_connect;
mod dashboard;
mod chat_assistant;

pub use progress_bar::ProgressBar;
pub use option_group::{OptionGroup, TagGroup, YesNoGroup};
pub use welcome_screen::WelcomeScreen;
pub use floor_plan_upload::FloorPlanUpload;
pub use onboarding_flow::OnboardingFlow;
pub use food_tracker::FoodTracker;
pub use reminder_system::ReminderSystem;
pub use citizen_app_connect::CitizenAppConnect;
pub use dashboard::Dashboard;
pub use chat_assistant::ChatAssistant;

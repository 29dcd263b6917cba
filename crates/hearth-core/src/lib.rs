//! Hearth Core
//!
//! Everything the preparedness app decides, with no UI and no I/O:
//! - profile: questionnaire answers and their option catalogs
//! - onboarding: the step-by-step wizard with per-step gates
//! - checklist, food, reminders: plans generated from a profile
//! - responder, chat: the rule-based assistant and its transcript
//! - router: which top-level view is showing
//! - record: the snake_case shape used by storage

mod error;
mod profile;
mod onboarding;
mod checklist;
mod food;
mod reminders;
mod responder;
mod chat;
mod router;
mod community;
mod record;

#[cfg(test)]
mod tests;

/// Emitted by the backend once the profile database is open
pub const DB_INITIALIZED_EVENT: &str = "db-initialized";

pub use error::{DomainError, DomainResult};
pub use profile::{
    CitizenApp, FoodStock, HousingType, Mobility, ProfileDraft, ReminderPreference, SocialSupport,
    Transportation, UserProfile, DIETARY_OPTIONS, DISASTER_OPTIONS, MAX_HOUSEHOLD,
};
pub use onboarding::{Advance, OnboardingSequencer, OnboardingStep};
pub use checklist::{generate_checklist, greeting_for_hour, Checklist, ChecklistItem, Priority};
pub use food::{recommended_supplies, tips as food_tips, FoodCategory, FoodItem, FoodSupply};
pub use reminders::{generate_reminders, preference_notes, Reminder, ReminderList, ReminderType};
pub use responder::{classify, opening_message, respond, thinking_delay, Topic, THINKING_DELAY_MS};
pub use chat::{ChatSession, Message, PendingReply, Sender};
pub use router::{View, ViewRouter};
pub use community::{community_note, network_advice, NetworkAdvice};
pub use record::ProfileRecord;

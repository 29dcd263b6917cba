//! Reminder Generator

use serde::{Deserialize, Serialize};

use crate::checklist::Priority;
use crate::profile::{ReminderPreference, UserProfile};

/// Location keyword that adds the wildfire reminder
const WILDFIRE_REGION: &str = "california";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReminderType {
    Weekly,
    Monthly,
    Seasonal,
    Weather,
    Immediate,
}

impl ReminderType {
    pub fn icon(&self) -> &'static str {
        match self {
            ReminderType::Weekly => "📅",
            ReminderType::Monthly => "🗓️",
            ReminderType::Seasonal => "🍂",
            ReminderType::Weather => "🌤️",
            ReminderType::Immediate => "⚠️",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reminder {
    pub id: u32,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub reminder_type: ReminderType,
    pub priority: Priority,
    pub completed: bool,
    pub category: String,
}

impl Reminder {
    fn new(
        id: u32,
        title: &str,
        description: &str,
        reminder_type: ReminderType,
        priority: Priority,
        category: &str,
    ) -> Self {
        Self {
            id,
            title: title.to_string(),
            description: description.to_string(),
            reminder_type,
            priority,
            completed: false,
            category: category.to_string(),
        }
    }
}

pub fn generate_reminders(profile: &UserProfile) -> Vec<Reminder> {
    let mut reminders = vec![
        Reminder::new(
            1,
            "Check emergency kit",
            "Review and update your emergency supplies",
            ReminderType::Monthly,
            Priority::Medium,
            "Supplies",
        ),
        Reminder::new(
            2,
            "Test smoke detectors",
            "Replace batteries if needed",
            ReminderType::Monthly,
            Priority::High,
            "Safety",
        ),
        Reminder::new(
            3,
            "Update emergency contacts",
            "Make sure everyone has current contact info",
            ReminderType::Seasonal,
            Priority::Medium,
            "Communication",
        ),
        Reminder::new(
            4,
            "Review evacuation routes",
            "Walk through your escape routes with household members",
            ReminderType::Seasonal,
            Priority::High,
            "Planning",
        ),
    ];

    if profile.location.to_lowercase().contains(WILDFIRE_REGION) {
        reminders.push(Reminder::new(
            5,
            "Wildfire season prep",
            "Check defensible space and go-bag",
            ReminderType::Seasonal,
            Priority::High,
            "Wildfire",
        ));
    }

    if profile.medications().is_some() {
        reminders.push(Reminder::new(
            6,
            "Check medication supplies",
            "Ensure you have at least 2 weeks of medications",
            ReminderType::Weekly,
            Priority::High,
            "Medical",
        ));
    }

    reminders.push(Reminder::new(
        7,
        "Weather alert check",
        "Review local weather conditions and warnings",
        ReminderType::Weather,
        Priority::Medium,
        "Weather",
    ));

    reminders
}

/// Settings notes for the chosen reminder style
pub fn preference_notes(preference: Option<ReminderPreference>) -> Vec<&'static str> {
    let mut notes = Vec::new();
    match preference {
        Some(ReminderPreference::Gentle) => notes.push("Soft notifications, no pressure"),
        Some(ReminderPreference::Urgent) => notes.push("Only critical weather alerts"),
        _ => {}
    }
    notes.push("Tailored to your location and needs");
    notes.push("Sync with weather alerts in your area");
    notes
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReminderList {
    reminders: Vec<Reminder>,
}

impl ReminderList {
    pub fn for_profile(profile: &UserProfile) -> Self {
        Self {
            reminders: generate_reminders(profile),
        }
    }

    pub fn toggle(&mut self, id: u32) -> bool {
        match self.reminders.iter_mut().find(|r| r.id == id) {
            Some(reminder) => {
                reminder.completed = !reminder.completed;
                true
            }
            None => false,
        }
    }

    pub fn active(&self) -> Vec<Reminder> {
        self.reminders.iter().filter(|r| !r.completed).cloned().collect()
    }

    pub fn completed(&self) -> Vec<Reminder> {
        self.reminders.iter().filter(|r| r.completed).cloned().collect()
    }
}

//! Checklist Generator
//!
//! Eight fixed preparedness tasks. A few explanations (and one priority) are
//! filled in from the profile at generation time and never change after.

use serde::{Deserialize, Serialize};

use crate::profile::{SocialSupport, Transportation, UserProfile};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// Sort rank: high < medium < low
    pub fn rank(&self) -> u8 {
        match self {
            Priority::High => 0,
            Priority::Medium => 1,
            Priority::Low => 2,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub id: u32,
    pub task: String,
    pub category: String,
    pub priority: Priority,
    pub completed: bool,
    pub explanation: String,
}

impl ChecklistItem {
    fn new(id: u32, task: &str, category: &str, priority: Priority, explanation: String) -> Self {
        Self {
            id,
            task: task.to_string(),
            category: category.to_string(),
            priority,
            completed: false,
            explanation,
        }
    }
}

/// Build the checklist for a profile, in catalog order
pub fn generate_checklist(profile: &UserProfile) -> Vec<ChecklistItem> {
    let n = profile.household_size;

    let food_explanation = if profile.dietary.is_empty() {
        "Non-perishable foods like canned goods, dried fruits, and energy bars.".to_string()
    } else {
        format!(
            "Non-perishable foods that fit your dietary needs: {}.",
            profile.dietary.join(", ")
        )
    };

    let evacuation_explanation = match profile.transportation {
        Transportation::OwnCar => "Plan multiple routes by car in case primary roads are blocked.",
        _ => "Identify public transit routes and walking paths from your location.",
    };

    let neighbors_priority = match profile.social_support {
        SocialSupport::Isolated => Priority::High,
        _ => Priority::Medium,
    };

    vec![
        ChecklistItem::new(
            1,
            "Create emergency contact list",
            "Communication",
            Priority::High,
            "Having contacts readily available when phone service may be limited is crucial.".into(),
        ),
        ChecklistItem::new(
            2,
            "Assemble 3-day water supply",
            "Water & Food",
            Priority::High,
            format!(
                "Store 1 gallon per person per day. For your household of {}, that's {} gallons total.",
                n,
                n.saturating_mul(3)
            ),
        ),
        ChecklistItem::new(
            3,
            "Prepare emergency food kit",
            "Water & Food",
            Priority::High,
            food_explanation,
        ),
        ChecklistItem::new(
            4,
            "Identify evacuation routes",
            "Transportation",
            Priority::High,
            evacuation_explanation.into(),
        ),
        ChecklistItem::new(
            5,
            "Assemble first aid kit",
            "Medical",
            Priority::Medium,
            "Include medications, bandages, antiseptic, and any mobility-specific supplies you need.".into(),
        ),
        ChecklistItem::new(
            6,
            "Create important documents backup",
            "Documents",
            Priority::Medium,
            "Digital copies of ID, insurance, medical records stored securely online or on waterproof USB.".into(),
        ),
        ChecklistItem::new(
            7,
            "Connect with neighbors",
            "Community",
            neighbors_priority,
            "Building local connections strengthens everyone's resilience. Start with just one neighbor.".into(),
        ),
        ChecklistItem::new(
            8,
            "Prepare emergency lighting",
            "Supplies",
            Priority::Medium,
            "Flashlights, battery-powered or hand-crank radio, and extra batteries.".into(),
        ),
    ]
}

/// The dashboard's working copy of the checklist
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Checklist {
    items: Vec<ChecklistItem>,
}

impl Checklist {
    pub fn for_profile(profile: &UserProfile) -> Self {
        Self {
            items: generate_checklist(profile),
        }
    }

    pub fn items(&self) -> &[ChecklistItem] {
        &self.items
    }

    /// Flip the completed flag; returns false for an unknown id
    pub fn toggle(&mut self, id: u32) -> bool {
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.completed = !item.completed;
                true
            }
            None => false,
        }
    }

    /// Incomplete first, then by priority; catalog order breaks ties
    pub fn display_order(&self) -> Vec<ChecklistItem> {
        let mut sorted = self.items.clone();
        sorted.sort_by_key(|item| (item.completed, item.priority.rank()));
        sorted
    }

    pub fn completed_count(&self) -> usize {
        self.items.iter().filter(|item| item.completed).count()
    }

    pub fn completion_percentage(&self) -> u32 {
        if self.items.is_empty() {
            return 0;
        }
        let ratio = self.completed_count() as f64 / self.items.len() as f64;
        (ratio * 100.0).round() as u32
    }
}

/// Dashboard headline for the given local hour (0-23)
pub fn greeting_for_hour(hour: u32, name: &str) -> String {
    let greeting = if hour < 12 {
        "Good morning"
    } else if hour < 18 {
        "Good afternoon"
    } else {
        "Good evening"
    };
    format!("{}, {}! Let's continue building your resilience today.", greeting, name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::fixture;

    #[test]
    fn test_water_explanation_scales_with_household() {
        for size in 1..=12 {
            let mut profile = fixture();
            profile.household_size = size;
            let items = generate_checklist(&profile);
            let water = items.iter().find(|i| i.id == 2).unwrap();
            assert!(water
                .explanation
                .contains(&format!("that's {} gallons total", size * 3)));
        }
    }

    #[test]
    fn test_food_kit_lists_dietary_tags() {
        let mut profile = fixture();
        assert!(generate_checklist(&profile)[2]
            .explanation
            .starts_with("Non-perishable foods like canned goods"));

        profile.dietary = vec!["Halal".into(), "Gluten-free".into()];
        assert_eq!(
            generate_checklist(&profile)[2].explanation,
            "Non-perishable foods that fit your dietary needs: Halal, Gluten-free."
        );
    }

    #[test]
    fn test_evacuation_branches_on_transportation() {
        let mut profile = fixture();
        assert!(generate_checklist(&profile)[3].explanation.contains("by car"));
        profile.transportation = Transportation::BikeWalk;
        assert!(generate_checklist(&profile)[3].explanation.contains("walking paths"));
    }

    #[test]
    fn test_neighbors_priority_for_isolated_users() {
        let mut profile = fixture();
        assert_eq!(generate_checklist(&profile)[6].priority, Priority::Medium);
        profile.social_support = SocialSupport::Isolated;
        assert_eq!(generate_checklist(&profile)[6].priority, Priority::High);
    }

    #[test]
    fn test_display_order_puts_completed_last() {
        let mut checklist = Checklist::for_profile(&fixture());
        assert!(checklist.toggle(1));
        assert!(!checklist.toggle(99));

        let order: Vec<u32> = checklist.display_order().iter().map(|i| i.id).collect();
        assert_eq!(order, vec![2, 3, 4, 5, 6, 7, 8, 1]);
    }

    #[test]
    fn test_completion_percentage_rounds() {
        let mut checklist = Checklist::for_profile(&fixture());
        assert_eq!(checklist.completion_percentage(), 0);
        checklist.toggle(1);
        assert_eq!(checklist.completion_percentage(), 13);
        checklist.toggle(2);
        checklist.toggle(3);
        assert_eq!(checklist.completed_count(), 3);
        assert_eq!(checklist.completion_percentage(), 38);
    }

    #[test]
    fn test_greeting_for_hour() {
        assert!(greeting_for_hour(8, "Sam").starts_with("Good morning, Sam!"));
        assert!(greeting_for_hour(12, "Sam").starts_with("Good afternoon"));
        assert!(greeting_for_hour(21, "Sam").starts_with("Good evening"));
    }
}

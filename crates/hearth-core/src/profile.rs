//! Profile Schema
//!
//! The answers collected during onboarding. `UserProfile` is the complete,
//! validated form; `ProfileDraft` is what the wizard fills in step by step.
//!
//! Across the IPC boundary every field is camelCase (`householdSize`,
//! `socialSupport`, ...). The snake_case storage shape lives in `record`.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Declares a closed set of answers with a wire string and a human label.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $variant:ident => ($wire:literal, $label:literal), )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $( #[serde(rename = $wire)] $variant, )+
        }

        impl $name {
            /// Every option, in the order the questionnaire shows them
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $wire,)+
                }
            }

            pub fn label(&self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($wire => Ok($name::$variant),)+
                    other => Err(DomainError::InvalidInput(format!(
                        concat!("unknown ", stringify!($name), " '{}'"),
                        other
                    ))),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

wire_enum! {
    pub enum HousingType {
        House => ("house", "House with yard"),
        Apartment => ("apartment", "Apartment/Condo"),
        MobileHome => ("mobile_home", "Mobile home"),
        SharedHousing => ("shared_housing", "Shared housing/Room rental"),
        Other => ("other", "Other housing situation"),
    }
}

wire_enum! {
    pub enum Transportation {
        OwnCar => ("own_car", "Own car/vehicle"),
        SharedCar => ("shared_car", "Shared car (family/friends)"),
        PublicTransport => ("public_transport", "Public transportation"),
        BikeWalk => ("bike_walk", "Bike/Walking only"),
        Limited => ("limited", "Very limited transportation options"),
    }
}

wire_enum! {
    pub enum Mobility {
        NoLimitations => ("none", "No mobility limitations"),
        SomeDifficulty => ("some_difficulty", "Some difficulty with stairs/walking"),
        MobilityAid => ("mobility_aid", "Use mobility aid (wheelchair, walker, etc.)"),
        Significant => ("significant", "Significant mobility limitations"),
    }
}

wire_enum! {
    pub enum SocialSupport {
        Strong => ("strong", "Strong - I have close neighbors/friends nearby who I can count on"),
        Some => ("some", "Some - I know a few people in my area but we're not very close"),
        Limited => ("limited", "Limited - I don't know many people in my immediate area"),
        Isolated => ("isolated", "Isolated - I don't have strong local connections right now"),
    }
}

wire_enum! {
    pub enum FoodStock {
        NothingOnHand => ("none", "Almost nothing on hand"),
        FewDays => ("few_days", "A few days' worth"),
        OneWeek => ("one_week", "About a week"),
        TwoWeeksPlus => ("two_weeks_plus", "Two weeks or more"),
    }
}

wire_enum! {
    pub enum CitizenApp {
        YesActive => ("yes-active", "Yes, I use it regularly"),
        YesOccasional => ("yes-occasional", "Yes, occasionally"),
        NoInterested => ("no-interested", "No, but I'm interested"),
        NoNotInterested => ("no-not-interested", "No, and I'm not interested"),
    }
}

wire_enum! {
    pub enum ReminderPreference {
        Gentle => ("gentle", "Gentle nudges, no pressure"),
        Regular => ("regular", "Regular check-ins"),
        Urgent => ("urgent", "Only when it's urgent"),
        Minimal => ("minimal", "Keep it minimal"),
    }
}

impl HousingType {
    /// Wire value with the underscore spoken as a space ("mobile home")
    pub fn spoken(&self) -> String {
        self.as_str().replacen('_', " ", 1)
    }
}

impl Transportation {
    pub fn spoken(&self) -> String {
        self.as_str().replacen('_', " ", 1)
    }
}

/// Dietary tags offered by the questionnaire
pub const DIETARY_OPTIONS: &[&str] = &[
    "Vegetarian",
    "Vegan",
    "Halal",
    "Kosher",
    "Gluten-free",
    "Dairy-free",
    "Diabetic",
    "Baby formula/food needed",
];

/// Disaster kinds a user can say they are worried about
pub const DISASTER_OPTIONS: &[&str] = &[
    "Earthquake",
    "Wildfire",
    "Flood",
    "Hurricane",
    "Tornado",
    "Winter storm",
    "Extreme heat",
    "Power outage",
];

/// Largest household the planner sizes supplies for
pub const MAX_HOUSEHOLD: u32 = 100;

pub fn valid_household_size(n: u32) -> bool {
    (1..=MAX_HOUSEHOLD).contains(&n)
}

/// A completed questionnaire
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub name: String,
    pub location: String,
    pub household_size: u32,
    pub housing_type: HousingType,
    pub transportation: Transportation,
    pub mobility: Mobility,
    pub pets: bool,
    pub social_support: SocialSupport,
    /// Set semantics; insertion order is only kept for display
    #[serde(default)]
    pub dietary: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub floor_plan: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub food_stock: Option<FoodStock>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medications: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emergency_contacts: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub citizen_app: Option<CitizenApp>,
    #[serde(default)]
    pub concerned_disasters: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub biggest_worry: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reminder_preference: Option<ReminderPreference>,
}

impl UserProfile {
    pub fn has_dietary(&self, tag: &str) -> bool {
        self.dietary.iter().any(|d| d == tag)
    }

    /// Medications text, if the user actually wrote something
    pub fn medications(&self) -> Option<&str> {
        self.medications
            .as_deref()
            .map(str::trim)
            .filter(|m| !m.is_empty())
    }
}

/// Partially answered questionnaire
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDraft {
    pub name: Option<String>,
    pub location: Option<String>,
    pub household_size: Option<u32>,
    pub housing_type: Option<HousingType>,
    pub transportation: Option<Transportation>,
    pub mobility: Option<Mobility>,
    pub pets: Option<bool>,
    pub social_support: Option<SocialSupport>,
    pub dietary: Vec<String>,

    pub floor_plan: Option<String>,
    pub food_stock: Option<FoodStock>,
    pub medications: Option<String>,
    pub emergency_contacts: Option<String>,
    pub citizen_app: Option<CitizenApp>,
    pub concerned_disasters: Vec<String>,
    pub biggest_worry: Option<String>,
    pub reminder_preference: Option<ReminderPreference>,
}

impl ProfileDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_name(&self) -> bool {
        non_blank(&self.name).is_some()
    }

    pub fn has_location(&self) -> bool {
        non_blank(&self.location).is_some()
    }

    pub fn has_household_size(&self) -> bool {
        self.household_size.is_some_and(valid_household_size)
    }

    pub fn toggle_dietary(&mut self, tag: &str) {
        toggle_tag(&mut self.dietary, tag);
    }

    pub fn toggle_concern(&mut self, tag: &str) {
        toggle_tag(&mut self.concerned_disasters, tag);
    }

    /// Build the full profile, or `None` while any required answer is missing
    pub fn build(&self) -> Option<UserProfile> {
        Some(UserProfile {
            name: non_blank(&self.name)?,
            location: non_blank(&self.location)?,
            household_size: self.household_size.filter(|n| valid_household_size(*n))?,
            housing_type: self.housing_type?,
            transportation: self.transportation?,
            mobility: self.mobility?,
            pets: self.pets?,
            social_support: self.social_support?,
            dietary: self.dietary.clone(),
            floor_plan: non_blank(&self.floor_plan),
            food_stock: self.food_stock,
            medications: non_blank(&self.medications),
            emergency_contacts: non_blank(&self.emergency_contacts),
            citizen_app: self.citizen_app,
            concerned_disasters: self.concerned_disasters.clone(),
            biggest_worry: non_blank(&self.biggest_worry),
            reminder_preference: self.reminder_preference,
        })
    }
}

fn non_blank(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

fn toggle_tag(tags: &mut Vec<String>, tag: &str) {
    if let Some(pos) = tags.iter().position(|t| t == tag) {
        tags.remove(pos);
    } else {
        tags.push(tag.to_string());
    }
}

#[cfg(test)]
pub(crate) fn fixture() -> UserProfile {
    UserProfile {
        name: "Alex".to_string(),
        location: "Portland, OR".to_string(),
        household_size: 2,
        housing_type: HousingType::Apartment,
        transportation: Transportation::OwnCar,
        mobility: Mobility::NoLimitations,
        pets: false,
        social_support: SocialSupport::Some,
        dietary: Vec::new(),
        floor_plan: None,
        food_stock: None,
        medications: None,
        emergency_contacts: None,
        citizen_app: None,
        concerned_disasters: Vec::new(),
        biggest_worry: None,
        reminder_preference: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_draft() -> ProfileDraft {
        ProfileDraft {
            name: Some("Alex".into()),
            location: Some("Fresno, California".into()),
            household_size: Some(3),
            housing_type: Some(HousingType::House),
            transportation: Some(Transportation::Limited),
            mobility: Some(Mobility::MobilityAid),
            pets: Some(true),
            social_support: Some(SocialSupport::Isolated),
            ..ProfileDraft::default()
        }
    }

    #[test]
    fn test_build_requires_every_required_field() {
        assert!(complete_draft().build().is_some());

        let mut draft = complete_draft();
        draft.pets = None;
        assert!(draft.build().is_none());

        let mut draft = complete_draft();
        draft.name = Some("   ".into());
        assert!(draft.build().is_none());

        let mut draft = complete_draft();
        draft.household_size = Some(0);
        assert!(draft.build().is_none());
    }

    #[test]
    fn test_household_size_is_bounded() {
        let mut draft = complete_draft();
        draft.household_size = Some(MAX_HOUSEHOLD);
        assert!(draft.has_household_size());
        assert_eq!(draft.build().unwrap().household_size, MAX_HOUSEHOLD);

        draft.household_size = "400000000".parse().ok();
        assert!(!draft.has_household_size());
        assert!(draft.build().is_none());
    }

    #[test]
    fn test_blank_optional_fields_become_absent() {
        let mut draft = complete_draft();
        draft.medications = Some("  ".into());
        draft.biggest_worry = Some(" losing power ".into());

        let profile = draft.build().unwrap();
        assert_eq!(profile.medications, None);
        assert_eq!(profile.biggest_worry.as_deref(), Some("losing power"));
    }

    #[test]
    fn test_toggle_dietary_keeps_set_semantics() {
        let mut draft = ProfileDraft::new();
        draft.toggle_dietary("Vegan");
        draft.toggle_dietary("Gluten-free");
        draft.toggle_dietary("Vegan");
        assert_eq!(draft.dietary, vec!["Gluten-free".to_string()]);
    }

    #[test]
    fn test_wire_strings() {
        assert_eq!(HousingType::MobileHome.as_str(), "mobile_home");
        assert_eq!(HousingType::MobileHome.spoken(), "mobile home");
        assert_eq!("no-interested".parse::<CitizenApp>(), Ok(CitizenApp::NoInterested));
        assert!("castle".parse::<HousingType>().is_err());
    }

    #[test]
    fn test_profile_serializes_camel_case() {
        let json = serde_json::to_value(fixture()).unwrap();
        assert_eq!(json["householdSize"], 2);
        assert_eq!(json["housingType"], "apartment");
        assert_eq!(json["socialSupport"], "some");
        assert_eq!(json["mobility"], "none");
        assert!(json.get("floorPlan").is_none());
    }
}

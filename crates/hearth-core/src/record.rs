//! Storage Record
//!
//! The flat, snake_case row a profile becomes at the persistence boundary.
//! Enum answers are kept as their wire strings so the table stays readable
//! and tolerant of new options.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::profile::{valid_household_size, UserProfile};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileRecord {
    pub user_id: String,
    pub name: String,
    pub location: String,
    pub household_size: i64,
    pub housing_type: String,
    pub transportation: String,
    pub mobility: String,
    pub pets: bool,
    pub social_support: String,
    pub dietary: Vec<String>,
    pub floor_plan: Option<String>,
    pub food_stock: Option<String>,
    pub medications: Option<String>,
    pub emergency_contacts: Option<String>,
    pub citizen_app: Option<String>,
    pub concerned_disasters: Vec<String>,
    pub biggest_worry: Option<String>,
    pub reminder_preference: Option<String>,
}

impl ProfileRecord {
    pub fn from_profile(user_id: &str, profile: &UserProfile) -> Self {
        Self {
            user_id: user_id.to_string(),
            name: profile.name.clone(),
            location: profile.location.clone(),
            household_size: i64::from(profile.household_size),
            housing_type: profile.housing_type.as_str().to_string(),
            transportation: profile.transportation.as_str().to_string(),
            mobility: profile.mobility.as_str().to_string(),
            pets: profile.pets,
            social_support: profile.social_support.as_str().to_string(),
            dietary: profile.dietary.clone(),
            floor_plan: profile.floor_plan.clone(),
            food_stock: profile.food_stock.map(|v| v.as_str().to_string()),
            medications: profile.medications.clone(),
            emergency_contacts: profile.emergency_contacts.clone(),
            citizen_app: profile.citizen_app.map(|v| v.as_str().to_string()),
            concerned_disasters: profile.concerned_disasters.clone(),
            biggest_worry: profile.biggest_worry.clone(),
            reminder_preference: profile.reminder_preference.map(|v| v.as_str().to_string()),
        }
    }

    pub fn into_profile(self) -> DomainResult<UserProfile> {
        let household_size = u32::try_from(self.household_size)
            .ok()
            .filter(|n| valid_household_size(*n))
            .ok_or_else(|| {
                DomainError::InvalidInput(format!("household_size {}", self.household_size))
            })?;

        Ok(UserProfile {
            name: self.name,
            location: self.location,
            household_size,
            housing_type: self.housing_type.parse()?,
            transportation: self.transportation.parse()?,
            mobility: self.mobility.parse()?,
            pets: self.pets,
            social_support: self.social_support.parse()?,
            dietary: self.dietary,
            floor_plan: self.floor_plan,
            food_stock: self.food_stock.as_deref().map(str::parse).transpose()?,
            medications: self.medications,
            emergency_contacts: self.emergency_contacts,
            citizen_app: self.citizen_app.as_deref().map(str::parse).transpose()?,
            concerned_disasters: self.concerned_disasters,
            biggest_worry: self.biggest_worry,
            reminder_preference: self
                .reminder_preference
                .as_deref()
                .map(str::parse)
                .transpose()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{fixture, CitizenApp, FoodStock, ReminderPreference, MAX_HOUSEHOLD};

    #[test]
    fn test_record_keeps_every_field() {
        let mut profile = fixture();
        profile.dietary = vec!["Vegan".into(), "Halal".into()];
        profile.floor_plan = Some("data:image/png;base64,AAAA".into());
        profile.food_stock = Some(FoodStock::FewDays);
        profile.medications = Some("inhaler".into());
        profile.citizen_app = Some(CitizenApp::NoNotInterested);
        profile.concerned_disasters = vec!["Flood".into()];
        profile.reminder_preference = Some(ReminderPreference::Minimal);

        let record = ProfileRecord::from_profile("u-1", &profile);
        assert_eq!(record.user_id, "u-1");
        assert_eq!(record.housing_type, "apartment");
        assert_eq!(record.citizen_app.as_deref(), Some("no-not-interested"));

        assert_eq!(record.into_profile().unwrap(), profile);
    }

    #[test]
    fn test_record_serializes_snake_case() {
        let json = serde_json::to_value(ProfileRecord::from_profile("u-1", &fixture())).unwrap();
        assert_eq!(json["household_size"], 2);
        assert_eq!(json["social_support"], "some");
        assert!(json.get("householdSize").is_none());
    }

    #[test]
    fn test_unknown_values_are_rejected() {
        let mut record = ProfileRecord::from_profile("u-1", &fixture());
        record.housing_type = "castle".into();
        assert!(matches!(record.into_profile(), Err(DomainError::InvalidInput(_))));

        let mut record = ProfileRecord::from_profile("u-1", &fixture());
        record.household_size = 0;
        assert!(record.into_profile().is_err());

        let mut record = ProfileRecord::from_profile("u-1", &fixture());
        record.household_size = i64::from(MAX_HOUSEHOLD) + 1;
        assert!(matches!(record.into_profile(), Err(DomainError::InvalidInput(_))));
    }
}

//! Stored Profile
//!
//! A completed profile as it sits in the `profiles` table: one row per user.

use hearth_core::UserProfile;

use super::entity::Entity;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredProfile {
    pub user_id: String,
    pub profile: UserProfile,
    /// Milliseconds since the Unix epoch of the last write
    pub updated_at: i64,
}

impl StoredProfile {
    pub fn new(user_id: &str, profile: UserProfile, updated_at: i64) -> Self {
        Self {
            user_id: user_id.to_string(),
            profile,
            updated_at,
        }
    }
}

impl Entity for StoredProfile {
    type Id = String;

    fn id(&self) -> String {
        self.user_id.clone()
    }
}

//! Repository Integration Tests
//!
//! Tests for ProfileRepository and SessionRepository with in-memory SQLite.

#[cfg(test)]
mod tests {
    use crate::domain::{DomainError, LocalUser, StoredProfile, UserProfile};
    use crate::repository::{init_db, DbState, Repository};
    use hearth_core::{CitizenApp, HousingType, Mobility, SocialSupport, Transportation};
    use std::path::{Path, PathBuf};

    async fn setup_test_db() -> DbState {
        // Use in-memory database for tests
        let conn = init_db(Path::new(":memory:")).await.expect("Failed to init test DB");
        DbState::with_connection(PathBuf::from(":memory:"), conn)
    }

    fn profile() -> UserProfile {
        UserProfile {
            name: "Alex".to_string(),
            location: "Portland, OR".to_string(),
            household_size: 3,
            housing_type: HousingType::House,
            transportation: Transportation::BikeWalk,
            mobility: Mobility::MobilityAid,
            pets: true,
            social_support: SocialSupport::Limited,
            dietary: vec!["Vegan".to_string(), "Gluten-free".to_string()],
            floor_plan: None,
            food_stock: None,
            medications: Some("insulin".to_string()),
            emergency_contacts: None,
            citizen_app: Some(CitizenApp::NoInterested),
            concerned_disasters: vec!["Earthquake".to_string()],
            biggest_worry: Some("Getting the kids home".to_string()),
            reminder_preference: None,
        }
    }

    #[tokio::test]
    async fn test_insert_and_select_profile() {
        let db = setup_test_db().await;
        let repo = db.profiles();

        repo.insert(&StoredProfile::new("user-1", profile(), 100))
            .await
            .expect("Failed to insert");

        let found = repo
            .select_one(&"user-1".to_string())
            .await
            .expect("Select failed")
            .expect("Row missing");
        assert_eq!(found.profile, profile());
        assert_eq!(found.updated_at, 100);
    }

    #[tokio::test]
    async fn test_insert_is_upsert() {
        let db = setup_test_db().await;
        let repo = db.profiles();

        repo.insert(&StoredProfile::new("user-1", profile(), 1)).await.unwrap();

        let mut changed = profile();
        changed.household_size = 5;
        changed.dietary.clear();
        changed.medications = None;
        repo.insert(&StoredProfile::new("user-1", changed.clone(), 2)).await.unwrap();

        assert_eq!(repo.count().await.unwrap(), 1);
        let found = repo.select_one(&"user-1".to_string()).await.unwrap().unwrap();
        assert_eq!(found.profile, changed);
        assert_eq!(found.updated_at, 2);
    }

    #[tokio::test]
    async fn test_select_missing_profile() {
        let db = setup_test_db().await;
        let found = db.profiles().select_one(&"nobody".to_string()).await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_delete_profile() {
        let db = setup_test_db().await;
        let repo = db.profiles();
        repo.insert(&StoredProfile::new("user-1", profile(), 1)).await.unwrap();
        repo.insert(&StoredProfile::new("user-2", profile(), 1)).await.unwrap();

        repo.delete(&"user-1".to_string()).await.expect("Delete failed");
        repo.delete(&"user-1".to_string()).await.expect("Second delete failed");

        assert!(repo.select_one(&"user-1".to_string()).await.unwrap().is_none());
        assert!(repo.select_one(&"user-2".to_string()).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_corrupt_row_is_rejected() {
        let db = setup_test_db().await;
        let repo = db.profiles();
        repo.insert(&StoredProfile::new("user-1", profile(), 1)).await.unwrap();

        {
            let guard = db.conn.lock().await;
            guard
                .as_ref()
                .unwrap()
                .execute("UPDATE profiles SET mobility = 'hover' WHERE user_id = 'user-1'", [])
                .unwrap();
        }

        let err = repo.select_one(&"user-1".to_string()).await.unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn test_unreadable_profile_is_not_saved() {
        let db = setup_test_db().await;
        let repo = db.profiles();

        let mut empty = profile();
        empty.household_size = 0;
        let err = repo.insert(&StoredProfile::new("user-1", empty, 1)).await.unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput(_)));

        let mut oversized = profile();
        oversized.household_size = hearth_core::MAX_HOUSEHOLD + 1;
        let err = repo.insert(&StoredProfile::new("user-1", oversized, 1)).await.unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput(_)));

        assert_eq!(repo.count().await.unwrap(), 0);
        assert!(repo.select_one(&"user-1".to_string()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_uninitialized_db_reports_internal() {
        let db = DbState::new(PathBuf::from("unused.db"));
        assert!(!db.is_ready().await);

        let err = db.profiles().select_one(&"user-1".to_string()).await.unwrap_err();
        assert_eq!(err, DomainError::Internal("Database not initialized".to_string()));
        assert!(db.sessions().current().await.is_err());
    }

    #[tokio::test]
    async fn test_session_lifecycle() {
        let db = setup_test_db().await;
        let sessions = db.sessions();

        assert!(sessions.current().await.unwrap().is_none());

        let first = sessions.create(LocalUser::provision(10, b"a")).await.unwrap();
        let again = sessions.create(LocalUser::provision(20, b"b")).await.unwrap();
        assert_eq!(first, again);
        assert_eq!(sessions.current().await.unwrap(), Some(first.clone()));

        sessions.clear().await.unwrap();
        assert!(sessions.current().await.unwrap().is_none());

        let next = sessions.create(LocalUser::provision(30, b"c")).await.unwrap();
        assert_ne!(next.id, first.id);
    }
}

//! Profile Commands
//!
//! One-shot persistence of the completed questionnaire.

use tauri::State;

use crate::AppState;
use crate::domain::{StoredProfile, UserProfile};
use crate::repository::Repository;

#[tauri::command]
pub async fn save_profile(
    user_id: String,
    profile: UserProfile,
    state: State<'_, AppState>,
) -> Result<(), String> {
    let now = chrono::Utc::now().timestamp_millis();
    let stored = StoredProfile::new(&user_id, profile, now);

    state.db_state.profiles().insert(&stored).await.map_err(|e| {
        log::error!("Saving profile for {} failed: {}", user_id, e);
        e.to_string()
    })?;
    log::info!("Profile saved for {}", user_id);
    Ok(())
}

#[tauri::command]
pub async fn load_profile(
    user_id: String,
    state: State<'_, AppState>,
) -> Result<Option<UserProfile>, String> {
    let stored = state
        .db_state
        .profiles()
        .select_one(&user_id)
        .await
        .map_err(|e| e.to_string())?;
    Ok(stored.map(|s| s.profile))
}

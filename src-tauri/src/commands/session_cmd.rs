//! Session Commands
//!
//! The local stand-in for an auth provider: one provisioned user per device.

use tauri::State;

use crate::AppState;
use crate::domain::LocalUser;

#[tauri::command]
pub async fn current_user(state: State<'_, AppState>) -> Result<Option<LocalUser>, String> {
    state.db_state.sessions().current().await.map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn start_session(state: State<'_, AppState>) -> Result<LocalUser, String> {
    let now = chrono::Utc::now().timestamp_millis();
    let salt = state.paths.data_dir.to_string_lossy().into_owned();
    let candidate = LocalUser::provision(now, salt.as_bytes());

    let user = state
        .db_state
        .sessions()
        .create(candidate)
        .await
        .map_err(|e| e.to_string())?;
    log::info!("Session started for {}", user.id);
    Ok(user)
}

#[tauri::command]
pub async fn sign_out(state: State<'_, AppState>) -> Result<(), String> {
    state.db_state.sessions().clear().await.map_err(|e| e.to_string())?;
    log::info!("Signed out");
    Ok(())
}

//! Profile Commands
//!
//! Frontend bindings for saving and loading the questionnaire.

use hearth_core::UserProfile;
use serde::Serialize;

use super::{call, call_unit};

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
struct SaveProfileArgs<'a> {
    #[serde(rename = "userId")]
    user_id: &'a str,
    profile: &'a UserProfile,
}

#[derive(Serialize)]
struct LoadProfileArgs<'a> {
    #[serde(rename = "userId")]
    user_id: &'a str,
}

// ========================
// Commands
// ========================

pub async fn save_profile(user_id: &str, profile: &UserProfile) -> Result<(), String> {
    let js_args = serde_wasm_bindgen::to_value(&SaveProfileArgs { user_id, profile })
        .map_err(|e| e.to_string())?;
    call_unit("save_profile", js_args).await
}

pub async fn load_profile(user_id: &str) -> Result<Option<UserProfile>, String> {
    let js_args = serde_wasm_bindgen::to_value(&LoadProfileArgs { user_id })
        .map_err(|e| e.to_string())?;
    call("load_profile", js_args).await
}

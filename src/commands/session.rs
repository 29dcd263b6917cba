use wasm_bindgen::JsValue;

use crate::models::LocalUser;
use super::{call, call_unit};

pub async fn current_user() -> Result<Option<LocalUser>, String> {
    call("current_user", JsValue::NULL).await
}

/// Provision the local user, or return the existing one
pub async fn start_session() -> Result<LocalUser, String> {
    call("start_session", JsValue::NULL).await
}

pub async fn sign_out() -> Result<(), String> {
    call_unit("sign_out", JsValue::NULL).await
}

use wasm_bindgen::JsValue;

use super::call;

/// Let the user pick an image; returns it as a data URL
pub async fn pick_floor_plan() -> Result<Option<String>, String> {
    call("pick_floor_plan", JsValue::NULL).await
}

//! Tauri Command Wrappers
//!
//! Frontend bindings to backend commands, organized by domain.

mod session;
mod profile;
mod floor_plan;
mod events;

use serde::de::DeserializeOwned;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = ["window", "__TAURI__", "core"])]
    async fn invoke(cmd: &str, args: JsValue) -> Result<JsValue, JsValue>;
}

/// Backend errors reject with the command's error string
fn js_error(e: JsValue) -> String {
    e.as_string().unwrap_or_else(|| format!("{:?}", e))
}

async fn call<T: DeserializeOwned>(cmd: &str, args: JsValue) -> Result<T, String> {
    let result = invoke(cmd, args).await.map_err(js_error)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

async fn call_unit(cmd: &str, args: JsValue) -> Result<(), String> {
    invoke(cmd, args).await.map(|_| ()).map_err(js_error)
}

// Re-export all public items
pub use session::*;
pub use profile::*;
pub use floor_plan::*;
pub use events::*;

//! Backend Events

use js_sys::{Array, Function, Promise};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

use super::js_error;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["window", "__TAURI__", "event"], js_name = listen)]
    fn listen_event(event: &str, handler: &Function) -> Promise;
}

/// Wait for the next `event`, giving up after `timeout_ms` so an event
/// emitted before the listener was registered cannot stall the caller
pub async fn next_event(event: &str, timeout_ms: i32) -> Result<(), String> {
    let fired = Promise::new(&mut |resolve, _reject| {
        let _ = listen_event(event, &resolve);
    });
    let timed_out = Promise::new(&mut |resolve, reject| match web_sys::window() {
        Some(window) => {
            let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, timeout_ms);
        }
        None => {
            let _ = reject.call1(&JsValue::NULL, &JsValue::from_str("no window"));
        }
    });

    JsFuture::from(Promise::race(&Array::of2(&fired, &timed_out)))
        .await
        .map(|_| ())
        .map_err(js_error)
}

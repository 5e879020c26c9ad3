//! Tauri Command Wrappers
//!
//! Frontend bindings to backend commands, organized by domain.

mod organization;
mod board;
mod column;
mod card;
mod history;

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["window", "__TAURI__", "core"])]
    async fn invoke(cmd: &str, args: JsValue) -> JsValue;

    #[wasm_bindgen(catch, js_namespace = ["window", "__TAURI__", "core"], js_name = invoke)]
    async fn try_invoke(cmd: &str, args: JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_namespace = ["window", "__TAURI__", "event"], js_name = listen)]
    async fn tauri_listen(event: &str, handler: &js_sys::Function) -> JsValue;
}

/// Subscribe to a backend event (e.g. "db-initialized")
pub fn listen_event(event: &'static str, callback: impl Fn() + 'static) {
    use leptos::task::spawn_local;
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;

    let handler = Closure::<dyn FnMut(JsValue)>::new(move |_payload: JsValue| {
        callback();
    });
    spawn_local(async move {
        let _ = tauri_listen(event, handler.as_ref().unchecked_ref()).await;
        // Keep the handler alive for the lifetime of the app
        handler.forget();
    });
}

// Re-export all public items
pub use organization::*;
pub use board::*;
pub use column::*;
pub use card::*;
pub use history::*;

//! Analytics bridge (gtag). Like the chart library, a soft dependency of
//! the host page; a missing snippet is not an error.

use js_sys::{Function, Object, Reflect};
use wasm_bindgen::prelude::*;

/// Fires a gtag event carrying the selected domain.
pub fn track_event(event: &str, domain: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Ok(gtag) = Reflect::get(&window, &JsValue::from_str("gtag")) else {
        return;
    };
    if !gtag.is_function() {
        return;
    }
    let gtag: Function = gtag.unchecked_into();

    let params = Object::new();
    let _ = Reflect::set(
        &params,
        &JsValue::from_str("domain"),
        &JsValue::from_str(domain),
    );
    let _ = gtag.call3(
        &JsValue::NULL,
        &JsValue::from_str("event"),
        &JsValue::from_str(event),
        &params,
    );
}

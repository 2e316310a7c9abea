//! Local persistence for the saved analysis id.

use wasm_bindgen::JsValue;

/// Fixed localStorage key; each save overwrites the previous value.
pub const SAVED_ANALYSIS_KEY: &str = "savedAnalysis";

fn local_storage() -> Result<web_sys::Storage, JsValue> {
    web_sys::window()
        .ok_or_else(|| JsValue::from_str("no window"))?
        .local_storage()?
        .ok_or_else(|| JsValue::from_str("localStorage unavailable"))
}

/// Stores the analysis id under [`SAVED_ANALYSIS_KEY`].
pub fn save_analysis_id(analysis_id: &str) -> Result<(), String> {
    local_storage()
        .and_then(|storage| storage.set_item(SAVED_ANALYSIS_KEY, analysis_id))
        .map_err(|e| format!("save failed: {:?}", e))
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn save_overwrites_previous_id() {
        save_analysis_id("first").unwrap();
        save_analysis_id("second").unwrap();

        let stored = local_storage()
            .unwrap()
            .get_item(SAVED_ANALYSIS_KEY)
            .unwrap();
        assert_eq!(stored.as_deref(), Some("second"));
    }
}

//! Post-render actions bound to an analysis id: report download, share,
//! local save.

use js_sys::{Function, Object, Promise, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlAnchorElement, Url};

use crate::{api, storage};

const DOWNLOAD_ERROR: &str = "Failed to download report";

/// `resume_analysis_<id>.pdf`
pub fn report_file_name(analysis_id: &str) -> String {
    format!("resume_analysis_{}.pdf", analysis_id)
}

/// Canonical results URL: `{origin}/analysis/{id}`
pub fn share_url(origin: &str, analysis_id: &str) -> String {
    format!("{}/analysis/{}", origin, analysis_id)
}

/// Downloads the PDF report and hands it to the browser as a save-as.
pub async fn download_report(analysis_id: &str) -> Result<(), String> {
    let blob = api::fetch_report(analysis_id)
        .await
        .map_err(|_| DOWNLOAD_ERROR.to_string())?;

    let url = Url::create_object_url_with_blob(&blob).map_err(|_| DOWNLOAD_ERROR.to_string())?;

    let document = web_sys::window().unwrap().document().unwrap();
    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .map_err(|_| DOWNLOAD_ERROR.to_string())?
        .dyn_into()
        .map_err(|_| DOWNLOAD_ERROR.to_string())?;
    anchor.set_href(&url);
    anchor.set_download(&report_file_name(analysis_id));
    anchor.click();
    let _ = Url::revoke_object_url(&url);

    Ok(())
}

/// Opens the native share sheet when the platform has one, otherwise
/// copies the link to the clipboard and confirms via an alert.
pub async fn share_results(analysis_id: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let origin = window
        .location()
        .origin()
        .map_err(|_| "Failed to build share link".to_string())?;
    let url = share_url(&origin, analysis_id);

    let navigator = window.navigator();
    let share_fn = Reflect::get(navigator.as_ref(), &JsValue::from_str("share"))
        .ok()
        .filter(|v| v.is_function());

    if let Some(share_fn) = share_fn {
        let share_fn: Function = share_fn.unchecked_into();
        let data = Object::new();
        let _ = Reflect::set(
            &data,
            &JsValue::from_str("title"),
            &JsValue::from_str("Resume Analysis Results"),
        );
        let _ = Reflect::set(&data, &JsValue::from_str("url"), &JsValue::from_str(&url));

        let promise: Promise = share_fn
            .call1(navigator.as_ref(), &data)
            .map_err(|_| "Failed to share results".to_string())?
            .unchecked_into();
        // The user may dismiss the sheet; that is not an error.
        let _ = JsFuture::from(promise).await;
        return Ok(());
    }

    let clipboard = navigator.clipboard();
    JsFuture::from(clipboard.write_text(&url))
        .await
        .map_err(|_| "Failed to copy share link".to_string())?;
    let _ = window.alert_with_message("Share link copied to clipboard!");

    Ok(())
}

/// Persists the id locally, overwriting any previously saved analysis.
pub fn save_analysis(analysis_id: &str) -> Result<(), String> {
    storage::save_analysis_id(analysis_id).map_err(|_| "Failed to save analysis".to_string())?;

    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message("Analysis saved locally!");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_file_name() {
        assert_eq!(report_file_name("42"), "resume_analysis_42.pdf");
    }

    #[test]
    fn test_share_url_shape() {
        assert_eq!(
            share_url("https://resumes.example", "a1b2"),
            "https://resumes.example/analysis/a1b2"
        );
    }
}

//! Backend API client.
//!
//! Thin fetch wrappers over `web_sys::Request`; payloads cross the JS
//! boundary through `serde_wasm_bindgen`.

use serde::Deserialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, FormData, Request, RequestInit, RequestMode, Response};

use crate::types::{AnalysisResponse, DomainList};

const DOMAINS_URL: &str = "/api/v1/domains";
const ANALYZE_URL: &str = "/api/v1/analyze";
const DOWNLOAD_URL: &str = "/download";

/// Fallback shown when the backend gives no usable error message.
pub const GENERIC_ANALYZE_ERROR: &str = "Analysis failed";

/// Error body of a non-2xx analyze response.
#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

async fn fetch_with_request(request: &Request) -> Result<Response, JsValue> {
    let window = web_sys::window().unwrap();
    let resp_value = JsFuture::from(window.fetch_with_request(request)).await?;
    resp_value.dyn_into()
}

/// Loads the selectable target domains.
pub async fn fetch_domains() -> Result<Vec<String>, JsValue> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::SameOrigin);

    let request = Request::new_with_str_and_init(DOMAINS_URL, &opts)?;
    let resp = fetch_with_request(&request).await?;

    if !resp.ok() {
        return Err(JsValue::from_str(&format!(
            "domain fetch failed: {}",
            resp.status()
        )));
    }

    let json = JsFuture::from(resp.json()?).await?;
    let list: DomainList =
        serde_wasm_bindgen::from_value(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(list.domains)
}

/// Submits the multipart form for analysis.
///
/// Non-2xx responses surface the backend's `error` field, falling back to
/// [`GENERIC_ANALYZE_ERROR`]. Errors are already user-facing messages.
pub async fn analyze(form: &FormData) -> Result<AnalysisResponse, String> {
    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::SameOrigin);
    // No explicit Content-Type: the browser supplies the multipart boundary.
    opts.set_body(form.as_ref());

    let request = Request::new_with_str_and_init(ANALYZE_URL, &opts)
        .map_err(|_| GENERIC_ANALYZE_ERROR.to_string())?;
    let resp = fetch_with_request(&request)
        .await
        .map_err(|_| GENERIC_ANALYZE_ERROR.to_string())?;

    let json = match resp.json() {
        Ok(promise) => JsFuture::from(promise).await.ok(),
        Err(_) => None,
    };

    if !resp.ok() {
        let message = json
            .and_then(|value| serde_wasm_bindgen::from_value::<ErrorBody>(value).ok())
            .and_then(|body| body.error)
            .unwrap_or_else(|| GENERIC_ANALYZE_ERROR.to_string());
        return Err(message);
    }

    let json = json.ok_or_else(|| GENERIC_ANALYZE_ERROR.to_string())?;
    serde_wasm_bindgen::from_value(json).map_err(|_| GENERIC_ANALYZE_ERROR.to_string())
}

/// Fetches the PDF report for one analysis as a binary blob.
pub async fn fetch_report(analysis_id: &str) -> Result<Blob, JsValue> {
    let url = format!("{}/{}", DOWNLOAD_URL, analysis_id);

    let request = Request::new_with_str(&url)?;
    let resp = fetch_with_request(&request).await?;

    if !resp.ok() {
        return Err(JsValue::from_str(&format!(
            "download failed: {}",
            resp.status()
        )));
    }

    let blob = JsFuture::from(resp.blob()?).await?;
    blob.dyn_into()
}

#[cfg(test)]
mod tests {
    use super::*;

    // =============================================
    // Response deserialization
    // =============================================

    const FULL_RESPONSE: &str = r#"{
        "candidate_name": "Ada Lovelace",
        "analysis_id": "a1b2c3",
        "results": {
            "match_score": 72.5,
            "word_count": 420,
            "section_completeness": 83,
            "readability": { "readability_level": "Good" },
            "skills_found": ["Python", "SQL"],
            "missing_skills": ["Docker", "AWS", "Spark"],
            "sections_detected": { "summary": true, "experience": true, "projects": false },
            "feedback": ["Good match!", "Add more tooling skills."],
            "ats_score": 77,
            "salary_estimate": {
                "min_salary": 85000,
                "max_salary": 120000,
                "currency": "USD",
                "growth_rate": 22
            }
        }
    }"#;

    #[test]
    fn test_analysis_response_deserialize() {
        let response: AnalysisResponse = serde_json::from_str(FULL_RESPONSE).unwrap();
        assert_eq!(response.candidate_name, "Ada Lovelace");
        assert_eq!(response.analysis_id, "a1b2c3");
        assert_eq!(response.results.match_score, 72.5);
        assert_eq!(response.results.word_count, 420);
        assert_eq!(response.results.readability.readability_level, "Good");
        assert_eq!(response.results.skills_found.len(), 2);
        assert_eq!(response.results.missing_skills.len(), 3);
        assert_eq!(response.results.feedback.len(), 2);
    }

    #[test]
    fn test_analysis_id_accepts_numbers() {
        let json = r#"{
            "candidate_name": "X",
            "analysis_id": 42,
            "results": { "match_score": 0, "word_count": 0, "section_completeness": 0 }
        }"#;
        let response: AnalysisResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.analysis_id, "42");
    }

    #[test]
    fn test_optional_metrics_default_to_none() {
        let json = r#"{
            "candidate_name": "X",
            "analysis_id": "1",
            "results": { "match_score": 50, "word_count": 100, "section_completeness": 40 }
        }"#;
        let response: AnalysisResponse = serde_json::from_str(json).unwrap();
        assert!(response.results.ats_score.is_none());
        assert!(response.results.resume_strength.is_none());
        assert!(response.results.salary_estimate.is_none());
        assert!(response.results.skills_found.is_empty());
    }

    #[test]
    fn test_sections_keep_backend_order() {
        let response: AnalysisResponse = serde_json::from_str(FULL_RESPONSE).unwrap();
        let keys: Vec<&str> = response
            .results
            .sections_detected
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys, ["summary", "experience", "projects"]);
    }

    #[test]
    fn test_domain_list_ignores_extra_keys() {
        let json = r#"{
            "domains": ["Data Science", "Web Development"],
            "domain_details": { "Data Science": { "growth_rate": 22 } }
        }"#;
        let list: DomainList = serde_json::from_str(json).unwrap();
        assert_eq!(list.domains, ["Data Science", "Web Development"]);
    }

    #[test]
    fn test_error_body_deserialize() {
        let body: ErrorBody = serde_json::from_str(r#"{ "error": "No resume file provided" }"#).unwrap();
        assert_eq!(body.error.as_deref(), Some("No resume file provided"));

        let empty: ErrorBody = serde_json::from_str("{}").unwrap();
        assert!(empty.error.is_none());
    }
}

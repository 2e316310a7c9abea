//! Data model for the resume analysis API and client-side form state.

use std::fmt;

use serde::{Deserialize, Deserializer};

/// Upload MIME types the backend accepts.
pub const ALLOWED_MIME_TYPES: [&str; 3] = [
    "application/pdf",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    "text/plain",
];

/// Upload size ceiling (16 MiB).
pub const MAX_FILE_SIZE: u64 = 16 * 1024 * 1024;

/// One completed resume analysis as returned by the backend.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisResult {
    pub match_score: f64,
    pub word_count: u32,
    pub section_completeness: f64,
    #[serde(default)]
    pub readability: Readability,
    #[serde(default)]
    pub skills_found: Vec<String>,
    #[serde(default)]
    pub missing_skills: Vec<String>,
    /// Section name -> detected flag, in the order the backend sent them.
    #[serde(default)]
    pub sections_detected: serde_json::Map<String, serde_json::Value>,
    #[serde(default)]
    pub feedback: Vec<String>,

    // Optional metrics newer backends attach; absent values are tolerated.
    #[serde(default)]
    pub ats_score: Option<f64>,
    #[serde(default)]
    pub readability_score: Option<f64>,
    #[serde(default)]
    pub resume_strength: Option<ResumeStrength>,
    #[serde(default)]
    pub salary_estimate: Option<SalaryEstimate>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Readability {
    #[serde(default)]
    pub readability_level: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResumeStrength {
    pub score: f64,
    pub level: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SalaryEstimate {
    pub min_salary: u32,
    pub max_salary: u32,
    pub currency: String,
    #[serde(default)]
    pub growth_rate: f64,
}

/// Envelope of a successful `POST /api/v1/analyze`.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisResponse {
    pub candidate_name: String,
    /// Opaque id; some backends send it as a bare number.
    #[serde(deserialize_with = "string_or_number")]
    pub analysis_id: String,
    pub results: AnalysisResult,
}

/// Payload of `GET /api/v1/domains`; extra keys are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct DomainList {
    pub domains: Vec<String>,
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    struct IdVisitor;

    impl serde::de::Visitor<'_> for IdVisitor {
        type Value = String;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a string or numeric analysis id")
        }

        fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_u64<E: serde::de::Error>(self, v: u64) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_i64<E: serde::de::Error>(self, v: i64) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_f64<E: serde::de::Error>(self, v: f64) -> Result<String, E> {
            // JS numbers arrive as f64; keep integral ids free of ".0".
            if v.fract() == 0.0 {
                Ok(format!("{}", v as i64))
            } else {
                Ok(v.to_string())
            }
        }
    }

    deserializer.deserialize_any(IdVisitor)
}

/// A client-side file selection, validated but not yet uploaded.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadedFile {
    pub name: String,
    pub size: u64,
    pub mime: String,
}

/// Why a selected file was refused.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FileError {
    UnsupportedType,
    TooLarge,
}

impl FileError {
    pub fn message(&self) -> &'static str {
        match self {
            FileError::UnsupportedType => "Please select a PDF, DOCX, or TXT file.",
            FileError::TooLarge => "File size must be less than 16MB.",
        }
    }
}

impl UploadedFile {
    /// Checks type before size; either failure aborts the selection.
    pub fn validate(name: &str, size: u64, mime: &str) -> Result<Self, FileError> {
        if !ALLOWED_MIME_TYPES.contains(&mime) {
            return Err(FileError::UnsupportedType);
        }
        if size > MAX_FILE_SIZE {
            return Err(FileError::TooLarge);
        }
        Ok(Self {
            name: name.to_string(),
            size,
            mime: mime.to_string(),
        })
    }

    /// Info line shown under the drop zone after a valid selection.
    pub fn info_line(&self) -> String {
        format!("Selected: {} ({})", self.name, format_file_size(self.size))
    }
}

/// Submission lifecycle; `Submitting` keeps the form locked.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Submitting,
    Settled,
}

impl SubmitPhase {
    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmitPhase::Submitting)
    }
}

/// Color class suffix for a score tile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScoreColor {
    Success,
    Warning,
    Danger,
}

impl ScoreColor {
    pub fn for_score(score: f64) -> Self {
        if score >= 80.0 {
            ScoreColor::Success
        } else if score >= 60.0 {
            ScoreColor::Warning
        } else {
            ScoreColor::Danger
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ScoreColor::Success => "success",
            ScoreColor::Warning => "warning",
            ScoreColor::Danger => "danger",
        }
    }
}

/// Human-readable byte count ("1 MB", "1.5 KB").
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let exp = (((bytes as f64).ln() / 1024f64.ln()).floor() as usize).min(UNITS.len() - 1);
    let value = bytes as f64 / 1024f64.powi(exp as i32);
    let rounded = (value * 100.0).round() / 100.0;

    let mut text = format!("{:.2}", rounded);
    while text.ends_with('0') {
        text.pop();
    }
    if text.ends_with('.') {
        text.pop();
    }

    format!("{} {}", text, UNITS[exp])
}

/// Renders a percentage-style number the way the backend sent it
/// (integral values without a trailing ".0").
pub fn format_score(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // =============================================
    // File validation
    // =============================================

    #[test]
    fn test_validate_accepts_pdf() {
        let file = UploadedFile::validate("resume.pdf", 1024, "application/pdf").unwrap();
        assert_eq!(file.name, "resume.pdf");
        assert_eq!(file.size, 1024);
    }

    #[test]
    fn test_validate_accepts_docx() {
        let mime = "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
        assert!(UploadedFile::validate("resume.docx", 2048, mime).is_ok());
    }

    #[test]
    fn test_validate_accepts_plain_text() {
        assert!(UploadedFile::validate("resume.txt", 10, "text/plain").is_ok());
    }

    #[test]
    fn test_validate_rejects_unsupported_type() {
        let result = UploadedFile::validate("photo.png", 1024, "image/png");
        assert_eq!(result, Err(FileError::UnsupportedType));
    }

    #[test]
    fn test_validate_rejects_oversize() {
        let result = UploadedFile::validate("big.pdf", MAX_FILE_SIZE + 1, "application/pdf");
        assert_eq!(result, Err(FileError::TooLarge));
    }

    #[test]
    fn test_validate_accepts_exactly_max_size() {
        assert!(UploadedFile::validate("edge.pdf", MAX_FILE_SIZE, "application/pdf").is_ok());
    }

    #[test]
    fn test_validate_oversize_unsupported_still_rejected() {
        // Type is checked first, but the selection is refused either way.
        let result = UploadedFile::validate("big.zip", MAX_FILE_SIZE + 1, "application/zip");
        assert!(result.is_err());
    }

    #[test]
    fn test_info_line() {
        let file = UploadedFile::validate("resume.pdf", 1_048_576, "application/pdf").unwrap();
        assert_eq!(file.info_line(), "Selected: resume.pdf (1 MB)");
    }

    // =============================================
    // File size formatting
    // =============================================

    #[test]
    fn test_format_file_size_zero() {
        assert_eq!(format_file_size(0), "0 Bytes");
    }

    #[test]
    fn test_format_file_size_bytes() {
        assert_eq!(format_file_size(500), "500 Bytes");
    }

    #[test]
    fn test_format_file_size_one_megabyte() {
        assert_eq!(format_file_size(1_048_576), "1 MB");
    }

    #[test]
    fn test_format_file_size_fractional_kilobytes() {
        assert_eq!(format_file_size(1536), "1.5 KB");
    }

    #[test]
    fn test_format_file_size_rounds_to_two_decimals() {
        // 1234567 bytes = 1.177... MB
        assert_eq!(format_file_size(1_234_567), "1.18 MB");
    }

    #[test]
    fn test_format_file_size_gigabytes() {
        assert_eq!(format_file_size(2 * 1024 * 1024 * 1024), "2 GB");
    }

    // =============================================
    // Score coloring
    // =============================================

    #[test]
    fn test_score_color_success() {
        assert_eq!(ScoreColor::for_score(85.0), ScoreColor::Success);
    }

    #[test]
    fn test_score_color_success_boundary() {
        assert_eq!(ScoreColor::for_score(80.0), ScoreColor::Success);
    }

    #[test]
    fn test_score_color_warning() {
        assert_eq!(ScoreColor::for_score(65.0), ScoreColor::Warning);
    }

    #[test]
    fn test_score_color_warning_boundary() {
        assert_eq!(ScoreColor::for_score(60.0), ScoreColor::Warning);
    }

    #[test]
    fn test_score_color_danger() {
        assert_eq!(ScoreColor::for_score(40.0), ScoreColor::Danger);
    }

    #[test]
    fn test_score_color_as_str() {
        assert_eq!(ScoreColor::Success.as_str(), "success");
        assert_eq!(ScoreColor::Warning.as_str(), "warning");
        assert_eq!(ScoreColor::Danger.as_str(), "danger");
    }

    // =============================================
    // Score formatting
    // =============================================

    #[test]
    fn test_format_score_integral() {
        assert_eq!(format_score(85.0), "85");
    }

    #[test]
    fn test_format_score_fractional() {
        assert_eq!(format_score(85.5), "85.5");
    }

    // =============================================
    // Submission phases
    // =============================================

    #[test]
    fn test_submit_phase_default_is_idle() {
        assert_eq!(SubmitPhase::default(), SubmitPhase::Idle);
    }

    #[test]
    fn test_submit_phase_only_submitting_locks() {
        assert!(SubmitPhase::Submitting.is_submitting());
        assert!(!SubmitPhase::Idle.is_submitting());
        assert!(!SubmitPhase::Settled.is_submitting());
    }
}

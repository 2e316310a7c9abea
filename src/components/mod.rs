//! UI components.

pub mod error_banner;
pub mod header;
pub mod progress_bar;
pub mod results;
pub mod upload_form;

//! Reporters: output formats for outlier answers.
//!
//! Both formats are deterministic: the same answer always renders to the
//! same bytes.

pub mod json;
pub mod text;

use crate::outliers::OutliersAnswer;

/// Trait for report generation.
pub trait Reporter: Send + Sync {
    fn name(&self) -> &'static str;
    fn generate(&self, answer: &OutliersAnswer) -> Result<String, String>;
}

/// Create a reporter by format name.
pub fn create_reporter(format: &str) -> Option<Box<dyn Reporter>> {
    match format {
        "text" => Some(Box::new(text::TextReporter)),
        "json" => Some(Box::new(json::JsonReporter)),
        _ => None,
    }
}

/// List all available reporter format names.
pub fn available_formats() -> &'static [&'static str] {
    &["text", "json"]
}

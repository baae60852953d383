//! JSON reporter: structured output with the same fields as the text form.

use super::Reporter;
use crate::outliers::OutliersAnswer;

/// JSON reporter for machine-readable output.
pub struct JsonReporter;

impl Reporter for JsonReporter {
    fn name(&self) -> &'static str {
        "json"
    }

    fn generate(&self, answer: &OutliersAnswer) -> Result<String, String> {
        serde_json::to_string_pretty(answer).map_err(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_answer() {
        let out = JsonReporter.generate(&OutliersAnswer::default()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert!(value["namedStructureOutliers"].as_array().unwrap().is_empty());
        assert!(value["serverOutliers"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_reporter_registry() {
        for format in crate::report::available_formats() {
            let reporter = crate::report::create_reporter(format).unwrap();
            assert_eq!(reporter.name(), *format);
        }
        assert!(crate::report::create_reporter("sarif").is_none());
    }
}

use super::{FirOutput, Formatter};

pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format(&self, output: &FirOutput<'_>) -> String {
        serde_json::to_string(output).unwrap_or_else(|e| format!(r#"{{"error":"{}"}}"#, e))
    }
}

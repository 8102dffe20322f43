use crate::license_generation::domain::LibraryRecord;
use crate::ports::outbound::LicenseListFormatter;
use crate::shared::Result;
use anyhow::Context;

/// JsonFormatter adapter producing the license list JSON document
///
/// Output is a pretty-printed array with two-space indentation and
/// alphabetically ordered keys, without a trailing newline. Identical input
/// always yields identical bytes.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl LicenseListFormatter for JsonFormatter {
    fn format(&self, libraries: &[LibraryRecord]) -> Result<String> {
        serde_json::to_string_pretty(libraries).context("Failed to serialize license list to JSON")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_empty_list() {
        let output = JsonFormatter::new().format(&[]).unwrap();
        assert_eq!(output, "[]");
    }

    #[test]
    fn test_format_pretty_sorted_keys() {
        let libraries = vec![LibraryRecord::new(
            "Alpha",
            "https://example.com/alpha.git",
            "MIT",
        )];
        let output = JsonFormatter::new().format(&libraries).unwrap();

        let expected = "[\n  {\n    \"licenseBody\": \"MIT\",\n    \"name\": \"Alpha\",\n    \"url\": \"https://example.com/alpha.git\"\n  }\n]";
        assert_eq!(output, expected);
    }

    #[test]
    fn test_format_escapes_license_text() {
        let libraries = vec![LibraryRecord::new(
            "Quote",
            "u",
            "Copyright \"Quote\" Authors\n\tAll rights reserved.",
        )];
        let output = JsonFormatter::new().format(&libraries).unwrap();

        assert!(output.contains(r#""licenseBody": "Copyright \"Quote\" Authors\n\tAll rights reserved.""#));
        let decoded: Vec<LibraryRecord> = serde_json::from_str(&output).unwrap();
        assert_eq!(decoded, libraries);
    }

    #[test]
    fn test_format_is_deterministic() {
        let libraries = vec![
            LibraryRecord::new("a", "u1", "MIT"),
            LibraryRecord::new("b", "u2", "Apache-2.0"),
        ];
        let formatter = JsonFormatter::new();
        assert_eq!(
            formatter.format(&libraries).unwrap(),
            formatter.format(&libraries).unwrap()
        );
    }
}

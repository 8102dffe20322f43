use license_list::prelude::*;
use std::path::Path;

/// Mock ManifestReader for testing
pub struct MockManifestReader {
    pub content: String,
    pub should_fail: bool,
}

impl MockManifestReader {
    pub fn new(content: String) -> Self {
        Self {
            content,
            should_fail: false,
        }
    }

    /// Manifest listing `(name, location)` pairs in order
    pub fn with_dependencies(dependencies: &[(&str, &str)]) -> Self {
        let dependencies: Vec<serde_json::Value> = dependencies
            .iter()
            .map(|(name, location)| {
                serde_json::json!({
                    "packageRef": { "name": name, "location": location }
                })
            })
            .collect();
        let manifest = serde_json::json!({ "object": { "dependencies": dependencies } });
        Self::new(manifest.to_string())
    }

    pub fn with_failure() -> Self {
        Self {
            content: String::new(),
            should_fail: true,
        }
    }
}

impl ManifestReader for MockManifestReader {
    fn read_manifest(&self, _manifest_path: &Path) -> Result<String> {
        if self.should_fail {
            anyhow::bail!("Mock manifest read failure");
        }
        Ok(self.content.clone())
    }
}

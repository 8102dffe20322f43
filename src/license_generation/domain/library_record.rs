use serde::{Deserialize, Serialize};

/// LibraryRecord - one entry of the generated license list
///
/// Fields are declared in alphabetical order of their serialized keys
/// (`licenseBody`, `name`, `url`) so the JSON output is key-sorted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibraryRecord {
    #[serde(rename = "licenseBody")]
    license_body: String,
    name: String,
    url: String,
}

impl LibraryRecord {
    pub fn new(
        name: impl Into<String>,
        url: impl Into<String>,
        license_body: impl Into<String>,
    ) -> Self {
        Self {
            license_body: license_body.into(),
            name: name.into(),
            url: url.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Verbatim text of the dependency's license file
    pub fn license_body(&self) -> &str {
        &self.license_body
    }
}

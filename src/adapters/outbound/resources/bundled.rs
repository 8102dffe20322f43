use crate::ports::outbound::LicenseResource;
use crate::shared::Result;

/// BundledLicenses adapter for a license list compiled into the binary
///
/// Typically constructed from `include_str!` on the generated file.
pub struct BundledLicenses {
    content: Option<&'static str>,
}

impl BundledLicenses {
    pub fn new(content: &'static str) -> Self {
        Self {
            content: Some(content),
        }
    }

    /// A bundle that was not generated for this build
    pub fn absent() -> Self {
        Self { content: None }
    }
}

impl LicenseResource for BundledLicenses {
    fn describe(&self) -> String {
        "bundled license list".to_string()
    }

    fn load(&self) -> Result<Option<String>> {
        Ok(self.content.map(str::to_string))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_loads_content() {
        let resource = BundledLicenses::new("[]");
        assert_eq!(resource.load().unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_absent_bundle() {
        assert!(BundledLicenses::absent().load().unwrap().is_none());
    }
}

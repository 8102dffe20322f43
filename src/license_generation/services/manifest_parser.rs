use crate::license_generation::domain::DependencyReference;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct WorkspaceState {
    object: WorkspaceStateObject,
}

#[derive(Debug, Deserialize)]
struct WorkspaceStateObject {
    dependencies: Vec<ResolvedDependency>,
}

#[derive(Debug, Deserialize)]
struct ResolvedDependency {
    #[serde(rename = "packageRef")]
    package_ref: PackageRef,
}

#[derive(Debug, Deserialize)]
struct PackageRef {
    location: String,
    name: String,
}

/// ManifestParser service for decoding the dependency resolution manifest
///
/// The manifest is the package manager's workspace state document:
/// `{ "object": { "dependencies": [ { "packageRef": { "location", "name" } } ] } }`.
/// Any other fields are ignored.
pub struct ManifestParser;

impl ManifestParser {
    /// Parses manifest content into dependency references in manifest order
    ///
    /// # Errors
    /// Fails as a whole when the document is not JSON or when any entry lacks
    /// `packageRef.location` or `packageRef.name`; no partial list is returned.
    pub fn parse(content: &str) -> Result<Vec<DependencyReference>, serde_json::Error> {
        let state: WorkspaceState = serde_json::from_str(content)?;

        Ok(state
            .object
            .dependencies
            .into_iter()
            .map(|dep| DependencyReference::new(dep.package_ref.name, dep.package_ref.location))
            .collect())
    }
}

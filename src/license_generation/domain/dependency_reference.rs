/// DependencyReference value object: one resolved dependency as listed in the manifest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyReference {
    name: String,
    source_location: String,
}

impl DependencyReference {
    pub fn new(name: impl Into<String>, source_location: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source_location: source_location.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Repository URL or local path the dependency was resolved from
    pub fn source_location(&self) -> &str {
        &self.source_location
    }
}

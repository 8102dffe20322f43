use crate::license_generation::domain::LibraryRecord;
use crate::ports::outbound::LicenseResource;
use uuid::Uuid;

/// One library of a loaded license list
///
/// The identifier is assigned on load and is not part of the generated file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    id: Uuid,
    library: LibraryRecord,
}

impl CatalogEntry {
    pub fn new(library: LibraryRecord) -> Self {
        Self {
            id: Uuid::new_v4(),
            library,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn library(&self) -> &LibraryRecord {
        &self.library
    }

    pub fn name(&self) -> &str {
        self.library.name()
    }

    pub fn license_body(&self) -> &str {
        self.library.license_body()
    }

    /// The source location when it looks like an absolute URL (`scheme://...`)
    pub fn repository_url(&self) -> Option<&str> {
        let url = self.library.url();
        let (scheme, rest) = url.split_once("://")?;
        let valid_scheme = scheme
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic())
            && scheme
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
        (valid_scheme && !rest.is_empty()).then_some(url)
    }
}

/// Immutable, in-memory view of a generated license list for display at runtime
#[derive(Debug, Clone, Default)]
pub struct LibraryCatalog {
    entries: Vec<CatalogEntry>,
    source: Option<String>,
    diagnostics: Vec<String>,
}

impl LibraryCatalog {
    /// Loads the first resource that is present and decodes as a license list
    ///
    /// Resources are tried in order. Absent, unreadable or malformed resources
    /// are skipped and noted in [`LibraryCatalog::diagnostics`]. When none
    /// succeeds the catalog is empty.
    pub fn initialize(resources: &[&dyn LicenseResource]) -> Self {
        let mut diagnostics = Vec::new();

        for resource in resources {
            let content = match resource.load() {
                Ok(Some(content)) => content,
                Ok(None) => {
                    diagnostics.push(format!("{}: not found", resource.describe()));
                    continue;
                }
                Err(e) => {
                    diagnostics.push(format!("{}: {}", resource.describe(), e));
                    continue;
                }
            };

            match serde_json::from_str::<Vec<LibraryRecord>>(&content) {
                Ok(libraries) => {
                    return Self {
                        entries: libraries.into_iter().map(CatalogEntry::new).collect(),
                        source: Some(resource.describe()),
                        diagnostics,
                    };
                }
                Err(e) => diagnostics.push(format!("{}: invalid license list: {}", resource.describe(), e)),
            }
        }

        Self {
            entries: Vec::new(),
            source: None,
            diagnostics,
        }
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Description of the resource the entries were loaded from
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    pub fn diagnostics(&self) -> &[String] {
        &self.diagnostics
    }

    pub fn find(&self, id: Uuid) -> Option<&CatalogEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }
}

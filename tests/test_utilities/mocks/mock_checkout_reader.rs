use license_list::prelude::*;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Mock CheckoutReader serving checkouts from memory
#[derive(Default)]
pub struct MockCheckoutReader {
    entries: HashMap<PathBuf, Vec<CheckoutEntry>>,
    files: HashMap<PathBuf, String>,
}

impl MockCheckoutReader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a file to the checkout directory `dir`
    pub fn with_file(mut self, dir: impl Into<PathBuf>, file_name: &str, content: &str) -> Self {
        let dir = dir.into();
        self.files.insert(dir.join(file_name), content.to_string());
        self.entries
            .entry(dir)
            .or_default()
            .push(CheckoutEntry::file(file_name));
        self
    }

    /// Adds a subdirectory entry to the checkout directory `dir`
    pub fn with_subdirectory(mut self, dir: impl Into<PathBuf>, name: &str) -> Self {
        self.entries
            .entry(dir.into())
            .or_default()
            .push(CheckoutEntry::directory(name));
        self
    }
}

impl CheckoutReader for MockCheckoutReader {
    fn list_entries(&self, checkout_dir: &Path) -> Result<Vec<CheckoutEntry>> {
        match self.entries.get(checkout_dir) {
            Some(entries) => Ok(entries.clone()),
            None => anyhow::bail!("Mock checkout not found: {}", checkout_dir.display()),
        }
    }

    fn read_text(&self, file_path: &Path) -> Result<String> {
        match self.files.get(file_path) {
            Some(content) => Ok(content.clone()),
            None => anyhow::bail!("Mock file not readable: {}", file_path.display()),
        }
    }
}

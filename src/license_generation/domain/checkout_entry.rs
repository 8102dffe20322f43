/// CheckoutEntry - one immediate entry of a checkout directory listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutEntry {
    file_name: String,
    is_directory: bool,
}

impl CheckoutEntry {
    pub fn file(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            is_directory: false,
        }
    }

    pub fn directory(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            is_directory: true,
        }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn is_directory(&self) -> bool {
        self.is_directory
    }
}

use crate::shared::Result;

/// OutputPresenter port for presenting final output
///
/// This port abstracts the output destination where the formatted
/// license list is stored.
pub trait OutputPresenter {
    /// Presents the formatted license list to the output destination
    ///
    /// # Errors
    /// Returns an error if:
    /// - The destination directory cannot be created
    /// - Writing to the output destination fails
    /// - File permissions prevent writing
    fn present(&self, content: &str) -> Result<()>;
}

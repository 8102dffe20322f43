use crate::license_generation::domain::LibraryRecord;

/// LibraryOrdering service defining the order of the published license list
pub struct LibraryOrdering;

impl LibraryOrdering {
    /// Sorts records by name, case-insensitively
    ///
    /// The sort is stable: names equal after lowercasing keep their
    /// manifest encounter order.
    pub fn sort(records: &mut [LibraryRecord]) {
        records.sort_by_cached_key(|record| record.name().to_lowercase());
    }
}

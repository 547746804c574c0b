//! Category Entity

use kernel::id::CategoryId;

/// A question category.
///
/// Read-only from the API's perspective; rows are installed by the seed
/// migration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    /// Database-assigned identifier
    pub id: CategoryId,
    /// Display name (the `type` column)
    pub kind: String,
}

//! Category Filter Value Object
//!
//! Quiz candidate scope. On the wire, a missing/null `quiz_category` or a
//! category id of 0 both mean "consider all questions".

use kernel::id::CategoryId;

/// Scope of the quiz candidate set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryFilter {
    /// No category filter; consider every question
    All,
    /// Only questions of the given category
    Only(CategoryId),
}

impl CategoryFilter {
    /// Build from the wire representation. Id 0 is the "all categories"
    /// sentinel.
    pub fn from_id(id: Option<i64>) -> Self {
        match id {
            None | Some(0) => Self::All,
            Some(id) => Self::Only(CategoryId::new(id)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_means_all() {
        assert_eq!(CategoryFilter::from_id(None), CategoryFilter::All);
    }

    #[test]
    fn test_zero_sentinel_means_all() {
        assert_eq!(CategoryFilter::from_id(Some(0)), CategoryFilter::All);
    }

    #[test]
    fn test_nonzero_selects_category() {
        assert_eq!(
            CategoryFilter::from_id(Some(4)),
            CategoryFilter::Only(CategoryId::new(4))
        );
    }
}

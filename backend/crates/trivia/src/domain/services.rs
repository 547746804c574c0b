//! Domain Services
//!
//! Pure logic for pagination, category projection, and quiz selection.

use std::collections::{BTreeMap, HashSet};

use rand::Rng;
use rand::seq::IndexedRandom;

use crate::domain::entity::{category::Category, question::Question};
use kernel::id::QuestionId;

/// Fixed page size for question listings
pub const QUESTIONS_PER_PAGE: usize = 10;

/// Slice out one page of an ordered list.
///
/// Pages are 1-indexed. Out-of-range pages, including page 0, yield an
/// empty slice rather than an error.
pub fn paginate<T>(items: &[T], page: usize) -> &[T] {
    if page == 0 {
        return &[];
    }
    let start = (page - 1).saturating_mul(QUESTIONS_PER_PAGE);
    if start >= items.len() {
        return &[];
    }
    let end = (start + QUESTIONS_PER_PAGE).min(items.len());
    &items[start..end]
}

/// Flatten categories into an id-to-name mapping, one entry per record.
pub fn project_categories(categories: &[Category]) -> BTreeMap<i64, String> {
    categories
        .iter()
        .map(|c| (c.id.get(), c.kind.clone()))
        .collect()
}

/// Drop candidates the player has already seen.
pub fn eligible_questions(
    candidates: Vec<Question>,
    previous: &HashSet<QuestionId>,
) -> Vec<Question> {
    candidates
        .into_iter()
        .filter(|q| !previous.contains(&q.id))
        .collect()
}

/// Choose one question uniformly at random. `None` when the slate is empty.
pub fn choose_random<'a, R>(questions: &'a [Question], rng: &mut R) -> Option<&'a Question>
where
    R: Rng + ?Sized,
{
    questions.choose(rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use kernel::id::CategoryId;

    #[test]
    fn test_paginate_first_page() {
        let items: Vec<u32> = (0..25).collect();
        assert_eq!(paginate(&items, 1), &(0..10).collect::<Vec<_>>()[..]);
    }

    #[test]
    fn test_paginate_partial_last_page() {
        let items: Vec<u32> = (0..25).collect();
        assert_eq!(paginate(&items, 3), &[20, 21, 22, 23, 24]);
    }

    #[test]
    fn test_paginate_past_end_is_empty() {
        let items: Vec<u32> = (0..25).collect();
        assert!(paginate(&items, 4).is_empty());
        assert!(paginate(&items, 1000).is_empty());
    }

    #[test]
    fn test_paginate_page_zero_is_empty() {
        let items: Vec<u32> = (0..25).collect();
        assert!(paginate(&items, 0).is_empty());
    }

    #[test]
    fn test_paginate_empty_input() {
        let items: Vec<u32> = Vec::new();
        assert!(paginate(&items, 1).is_empty());
    }

    #[test]
    fn test_project_categories() {
        let categories = vec![
            Category {
                id: CategoryId::new(1),
                kind: "Science".to_string(),
            },
            Category {
                id: CategoryId::new(2),
                kind: "Art".to_string(),
            },
        ];
        let map = project_categories(&categories);
        assert_eq!(map.len(), 2);
        assert_eq!(map[&1], "Science");
        assert_eq!(map[&2], "Art");
    }

    #[test]
    fn test_project_categories_empty() {
        assert!(project_categories(&[]).is_empty());
    }
}

//! Questions By Category Use Case
//!
//! Lists every question of one category. The category's existence is
//! checked first, so an unknown category and a known-but-empty category
//! are distinct outcomes.

use std::sync::Arc;

use crate::domain::entity::question::Question;
use crate::domain::repository::{CategoryRepository, QuestionRepository};
use crate::error::{TriviaError, TriviaResult};
use kernel::id::CategoryId;

/// Questions by category output
#[derive(Debug)]
pub struct QuestionsByCategoryOutput {
    pub questions: Vec<Question>,
    pub total_questions: usize,
    /// Display name of the requested category
    pub current_category: String,
}

/// Questions by category use case
pub struct QuestionsByCategoryUseCase<Q, C>
where
    Q: QuestionRepository,
    C: CategoryRepository,
{
    questions: Arc<Q>,
    categories: Arc<C>,
}

impl<Q, C> QuestionsByCategoryUseCase<Q, C>
where
    Q: QuestionRepository,
    C: CategoryRepository,
{
    pub fn new(questions: Arc<Q>, categories: Arc<C>) -> Self {
        Self {
            questions,
            categories,
        }
    }

    /// Unknown category id is not-found. A known category with zero
    /// questions is a success with an empty list.
    pub async fn execute(&self, id: CategoryId) -> TriviaResult<QuestionsByCategoryOutput> {
        let category = self
            .categories
            .find_by_id(id)
            .await?
            .ok_or(TriviaError::CategoryNotFound)?;

        let questions = self.questions.list_by_category(id).await?;

        Ok(QuestionsByCategoryOutput {
            total_questions: questions.len(),
            questions,
            current_category: category.kind,
        })
    }
}

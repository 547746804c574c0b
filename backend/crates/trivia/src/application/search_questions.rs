//! Search Questions Use Case
//!
//! Case-insensitive substring search over question text.

use std::sync::Arc;

use crate::domain::entity::question::Question;
use crate::domain::repository::QuestionRepository;
use crate::error::TriviaResult;

/// Search questions output
pub struct SearchQuestionsOutput {
    pub questions: Vec<Question>,
    pub total_questions: usize,
}

/// Search questions use case
pub struct SearchQuestionsUseCase<Q>
where
    Q: QuestionRepository,
{
    questions: Arc<Q>,
}

impl<Q> SearchQuestionsUseCase<Q>
where
    Q: QuestionRepository,
{
    pub fn new(questions: Arc<Q>) -> Self {
        Self { questions }
    }

    /// Zero matches is a success with an empty list, distinguishing
    /// search from listing.
    pub async fn execute(&self, term: &str) -> TriviaResult<SearchQuestionsOutput> {
        let questions = self.questions.search(term).await?;

        Ok(SearchQuestionsOutput {
            total_questions: questions.len(),
            questions,
        })
    }
}

//! Play Quiz Use Case
//!
//! Serves one random question the player has not seen yet. Selection is
//! memoryless: the full seen-question history arrives with every call
//! and no server-side session state is kept.

use std::collections::HashSet;
use std::sync::Arc;

use crate::domain::entity::question::Question;
use crate::domain::repository::QuestionRepository;
use crate::domain::services::{choose_random, eligible_questions};
use crate::domain::value_object::category_filter::CategoryFilter;
use crate::error::{TriviaError, TriviaResult};
use kernel::id::QuestionId;

/// Play quiz input. `previous_questions` is optional here so that its
/// absence can be rejected with the contract's not-found response rather
/// than a deserialization error; an empty list is a valid, distinct input.
pub struct PlayQuizInput {
    pub previous_questions: Option<Vec<i64>>,
    pub category: CategoryFilter,
}

/// Play quiz use case
pub struct PlayQuizUseCase<Q>
where
    Q: QuestionRepository,
{
    questions: Arc<Q>,
}

impl<Q> PlayQuizUseCase<Q>
where
    Q: QuestionRepository,
{
    pub fn new(questions: Arc<Q>) -> Self {
        Self { questions }
    }

    /// `Ok(None)` means every eligible question has been seen — a normal
    /// outcome the handler renders as a non-error response.
    pub async fn execute(&self, input: PlayQuizInput) -> TriviaResult<Option<Question>> {
        let previous: HashSet<QuestionId> = input
            .previous_questions
            .ok_or(TriviaError::MissingPreviousQuestions)?
            .into_iter()
            .map(QuestionId::new)
            .collect();

        let candidates = match input.category {
            CategoryFilter::All => self.questions.list_all().await?,
            CategoryFilter::Only(id) => self.questions.list_by_category(id).await?,
        };

        let eligible = eligible_questions(candidates, &previous);
        let picked = choose_random(&eligible, &mut rand::rng()).cloned();

        Ok(picked)
    }
}

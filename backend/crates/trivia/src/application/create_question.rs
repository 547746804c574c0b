//! Create Question Use Case
//!
//! Validates and inserts a new question.

use std::sync::Arc;

use crate::domain::entity::question::{NewQuestion, Question};
use crate::domain::repository::QuestionRepository;
use crate::domain::value_object::{difficulty::Difficulty, question_text::QuestionText};
use crate::error::{TriviaError, TriviaResult};
use kernel::id::CategoryId;

/// Create question input. Fields are optional at this level so that an
/// incomplete body is rejected with a specific message rather than a
/// framework deserialization error.
pub struct CreateQuestionInput {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub category: Option<i64>,
    pub difficulty: Option<i32>,
}

/// Create question use case
pub struct CreateQuestionUseCase<Q>
where
    Q: QuestionRepository,
{
    questions: Arc<Q>,
}

impl<Q> CreateQuestionUseCase<Q>
where
    Q: QuestionRepository,
{
    pub fn new(questions: Arc<Q>) -> Self {
        Self { questions }
    }

    pub async fn execute(&self, input: CreateQuestionInput) -> TriviaResult<Question> {
        let question = QuestionText::new(
            input.question.ok_or(TriviaError::MissingQuestionText)?,
        )?;

        let answer = input
            .answer
            .map(|a| a.trim().to_string())
            .filter(|a| !a.is_empty())
            .ok_or(TriviaError::MissingAnswer)?;

        let category = CategoryId::new(input.category.ok_or(TriviaError::MissingCategory)?);

        let difficulty =
            Difficulty::new(input.difficulty.ok_or(TriviaError::MissingDifficulty)?)?;

        let new_question = NewQuestion {
            question,
            answer,
            category,
            difficulty,
        };

        let created = self.questions.insert(&new_question).await?;

        tracing::info!(
            question_id = %created.id,
            category = %created.category,
            "Question created"
        );

        Ok(created)
    }
}

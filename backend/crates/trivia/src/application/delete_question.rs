//! Delete Question Use Case
//!
//! Removes a question and reports the refreshed first page and total.

use std::sync::Arc;

use crate::domain::entity::question::Question;
use crate::domain::repository::QuestionRepository;
use crate::domain::services::paginate;
use crate::error::{TriviaError, TriviaResult};
use kernel::id::QuestionId;

/// Delete question output
#[derive(Debug)]
pub struct DeleteQuestionOutput {
    /// Id of the removed question
    pub deleted: QuestionId,
    /// First page of the remaining questions
    pub first_page: Vec<Question>,
    /// Total remaining after the delete
    pub total_questions: usize,
}

/// Delete question use case
pub struct DeleteQuestionUseCase<Q>
where
    Q: QuestionRepository,
{
    questions: Arc<Q>,
}

impl<Q> DeleteQuestionUseCase<Q>
where
    Q: QuestionRepository,
{
    pub fn new(questions: Arc<Q>) -> Self {
        Self { questions }
    }

    /// An unknown id is not-found; any storage fault in this flow is
    /// reported as unprocessable (422), never as a raw storage error.
    pub async fn execute(&self, id: QuestionId) -> TriviaResult<DeleteQuestionOutput> {
        self.questions
            .find_by_id(id)
            .await
            .map_err(as_unprocessable)?
            .ok_or(TriviaError::QuestionNotFound)?;

        self.questions.delete(id).await.map_err(as_unprocessable)?;

        let remaining = self.questions.list_all().await.map_err(as_unprocessable)?;
        let first_page = paginate(&remaining, 1).to_vec();

        tracing::info!(question_id = %id, "Question deleted");

        Ok(DeleteQuestionOutput {
            deleted: id,
            first_page,
            total_questions: remaining.len(),
        })
    }
}

fn as_unprocessable(err: TriviaError) -> TriviaError {
    match err {
        TriviaError::Database(e) => TriviaError::Unprocessable(e),
        other => other,
    }
}

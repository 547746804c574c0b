//! List Questions Use Case
//!
//! One 10-question page of the full question list, together with the
//! category mapping and the total question count.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::domain::entity::question::Question;
use crate::domain::repository::{CategoryRepository, QuestionRepository};
use crate::domain::services::{paginate, project_categories};
use crate::error::{TriviaError, TriviaResult};

/// List questions output
#[derive(Debug)]
pub struct ListQuestionsOutput {
    pub questions: Vec<Question>,
    pub categories: BTreeMap<i64, String>,
    pub total_questions: usize,
}

/// List questions use case
pub struct ListQuestionsUseCase<Q, C>
where
    Q: QuestionRepository,
    C: CategoryRepository,
{
    questions: Arc<Q>,
    categories: Arc<C>,
}

impl<Q, C> ListQuestionsUseCase<Q, C>
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

    /// `page` is 1-indexed. A page past the end of the list (or page 0)
    /// is reported as not-found.
    pub async fn execute(&self, page: usize) -> TriviaResult<ListQuestionsOutput> {
        let all = self.questions.list_all().await?;
        let categories = project_categories(&self.categories.list_all().await?);

        let page_items = paginate(&all, page);
        if page_items.is_empty() {
            return Err(TriviaError::PageNotFound(page));
        }

        Ok(ListQuestionsOutput {
            questions: page_items.to_vec(),
            categories,
            total_questions: all.len(),
        })
    }
}

//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entity::{
    category::Category,
    question::{NewQuestion, Question},
};
use crate::error::TriviaResult;
use kernel::id::{CategoryId, QuestionId};

/// Question repository trait
#[trait_variant::make(QuestionRepository: Send)]
pub trait LocalQuestionRepository {
    /// All questions in ascending id order
    async fn list_all(&self) -> TriviaResult<Vec<Question>>;

    /// Questions of one category in ascending id order
    async fn list_by_category(&self, category: CategoryId) -> TriviaResult<Vec<Question>>;

    /// Questions whose text contains the term as a case-insensitive
    /// substring, in ascending id order
    async fn search(&self, term: &str) -> TriviaResult<Vec<Question>>;

    /// Find a question by id
    async fn find_by_id(&self, id: QuestionId) -> TriviaResult<Option<Question>>;

    /// Insert a new question; the database assigns the id
    async fn insert(&self, question: &NewQuestion) -> TriviaResult<Question>;

    /// Delete a question
    async fn delete(&self, id: QuestionId) -> TriviaResult<()>;
}

/// Category repository trait
#[trait_variant::make(CategoryRepository: Send)]
pub trait LocalCategoryRepository {
    /// All categories in ascending id order
    async fn list_all(&self) -> TriviaResult<Vec<Category>>;

    /// Find a category by id
    async fn find_by_id(&self, id: CategoryId) -> TriviaResult<Option<Category>>;
}

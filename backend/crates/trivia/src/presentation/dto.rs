//! API DTOs (Data Transfer Objects)
//!
//! Wire names are snake_case throughout, except `searchTerm`, which the
//! trivia frontend sends camelCased.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::entity::question::Question;

// ============================================================================
// Questions
// ============================================================================

/// A question as it appears on the wire
#[derive(Debug, Clone, Serialize)]
pub struct QuestionDto {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i32,
}

impl From<&Question> for QuestionDto {
    fn from(question: &Question) -> Self {
        Self {
            id: question.id.get(),
            question: question.question.as_str().to_string(),
            answer: question.answer.clone(),
            category: question.category.get(),
            difficulty: question.difficulty.get(),
        }
    }
}

/// GET /questions query string
#[derive(Debug, Clone, Deserialize)]
pub struct PageQuery {
    /// 1-indexed page number; defaults to 1 when absent
    pub page: Option<usize>,
}

/// GET /questions response
#[derive(Debug, Serialize)]
pub struct QuestionListResponse {
    pub success: bool,
    pub questions: Vec<QuestionDto>,
    pub categories: BTreeMap<i64, String>,
    pub total_questions: usize,
    pub current_category: Option<String>,
}

/// POST /questions request — either a new question or a search
#[derive(Debug, Clone, Deserialize)]
pub struct QuestionPostRequest {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub difficulty: Option<i32>,
    pub category: Option<i64>,
    #[serde(rename = "searchTerm")]
    pub search_term: Option<String>,
}

/// POST /questions (create) response
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub success: bool,
}

/// Response for search and by-category listings
#[derive(Debug, Serialize)]
pub struct FilteredQuestionsResponse {
    pub success: bool,
    pub questions: Vec<QuestionDto>,
    pub total_questions: usize,
    pub current_category: Option<String>,
}

/// DELETE /questions/{id} response
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub success: bool,
    /// First page of the remaining questions
    pub question: Vec<QuestionDto>,
    /// Id of the deleted question
    pub delete: i64,
    pub total_questions: usize,
}

// ============================================================================
// Categories
// ============================================================================

/// GET /categories response
#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub success: bool,
    pub categories: BTreeMap<i64, String>,
}

// ============================================================================
// Quiz
// ============================================================================

/// POST /quizzes request
#[derive(Debug, Clone, Deserialize)]
pub struct QuizRequest {
    /// Ids already shown this session. Mandatory; an empty list is valid.
    pub previous_questions: Option<Vec<i64>>,
    /// Category scope; absent/null or id 0 means all categories
    pub quiz_category: Option<QuizCategoryDto>,
}

/// The category object inside a quiz request. The frontend also sends a
/// `type` field, which is ignored.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct QuizCategoryDto {
    pub id: i64,
}

/// POST /quizzes response
#[derive(Debug, Serialize)]
pub struct QuizResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<QuestionDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
}

//! Trivia Error Types
//!
//! This module provides trivia-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

use crate::domain::value_object::{
    difficulty::DifficultyError, question_text::QuestionTextError,
};

/// Trivia-specific result type alias
pub type TriviaResult<T> = Result<T, TriviaError>;

/// Trivia-specific error variants
#[derive(Debug, Error)]
pub enum TriviaError {
    /// Question id does not resolve to a record
    #[error("Question not found")]
    QuestionNotFound,

    /// Category id does not resolve to a record
    #[error("Category not found")]
    CategoryNotFound,

    /// The category table is empty
    #[error("No categories available")]
    NoCategories,

    /// The requested page is past the end of the question list
    #[error("Page {0} has no questions")]
    PageNotFound(usize),

    /// Create request without question text
    #[error("Question text is required")]
    MissingQuestionText,

    /// Create request without answer text
    #[error("Answer text is required")]
    MissingAnswer,

    /// Create request without a category id
    #[error("Category id is required")]
    MissingCategory,

    /// Create request without a difficulty
    #[error("Difficulty is required")]
    MissingDifficulty,

    /// Question text failed validation
    #[error("Invalid question text: {0}")]
    InvalidQuestionText(#[from] QuestionTextError),

    /// Difficulty failed validation
    #[error("Invalid difficulty: {0}")]
    InvalidDifficulty(#[from] DifficultyError),

    /// POST /questions body carried neither a question nor a search term
    #[error("Request body must contain either a question or a search term")]
    EmptyQuestionPost,

    /// Quiz request without the mandatory seen-question list
    #[error("previous_questions is required")]
    MissingPreviousQuestions,

    /// Storage fault during a mutation flow, reported as 422
    #[error("Could not process the request")]
    Unprocessable(#[source] sqlx::Error),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl TriviaError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            TriviaError::QuestionNotFound
            | TriviaError::CategoryNotFound
            | TriviaError::NoCategories
            | TriviaError::PageNotFound(_) => ErrorKind::NotFound,
            TriviaError::MissingQuestionText
            | TriviaError::MissingAnswer
            | TriviaError::MissingCategory
            | TriviaError::MissingDifficulty
            | TriviaError::InvalidQuestionText(_)
            | TriviaError::InvalidDifficulty(_)
            | TriviaError::EmptyQuestionPost => ErrorKind::BadRequest,
            // Pinned by the API contract: a quiz request without
            // previous_questions is a 404, not a 400.
            TriviaError::MissingPreviousQuestions => ErrorKind::NotFound,
            TriviaError::Unprocessable(_) => ErrorKind::UnprocessableEntity,
            TriviaError::Database(_) | TriviaError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError. Storage errors are classified by the kernel
    /// (constraint violations, pool exhaustion); everything else maps
    /// straight from `kind()`.
    pub fn into_app_error(self) -> AppError {
        match self {
            TriviaError::Database(err) => AppError::from(err),
            other => AppError::new(other.kind(), other.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            TriviaError::Database(e) => {
                tracing::error!(error = %e, "Trivia database error");
            }
            TriviaError::Unprocessable(e) => {
                tracing::error!(error = %e, "Trivia mutation failed");
            }
            TriviaError::Internal(msg) => {
                tracing::error!(message = %msg, "Trivia internal error");
            }
            _ => {
                tracing::debug!(error = %self, "Trivia request error");
            }
        }
    }
}

impl IntoResponse for TriviaError {
    fn into_response(self) -> Response {
        self.log();
        self.into_app_error().into_response()
    }
}

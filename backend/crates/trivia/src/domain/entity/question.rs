//! Question Entity

use kernel::id::{CategoryId, QuestionId};

use crate::domain::value_object::{difficulty::Difficulty, question_text::QuestionText};

/// A stored trivia question.
///
/// Created through the create-question operation and deleted through the
/// delete operation; never updated in place.
#[derive(Debug, Clone, PartialEq)]
pub struct Question {
    /// Database-assigned identifier
    pub id: QuestionId,
    /// The question text shown to the player
    pub question: QuestionText,
    /// The expected answer
    pub answer: String,
    /// Owning category
    pub category: CategoryId,
    /// Difficulty rating, 1 (easiest) to 5 (hardest)
    pub difficulty: Difficulty,
}

/// A question that has been validated but not yet inserted.
///
/// The id is assigned by the database on insert.
#[derive(Debug, Clone)]
pub struct NewQuestion {
    pub question: QuestionText,
    pub answer: String,
    pub category: CategoryId,
    pub difficulty: Difficulty,
}

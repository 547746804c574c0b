//! Question Text Value Object
//!
//! The text of a question as shown to the player.
//!
//! ## Invariants
//! - Non-empty after trimming
//! - At most `QUESTION_TEXT_MAX_LENGTH` characters

use std::fmt;

/// Maximum length for question text (in characters)
pub const QUESTION_TEXT_MAX_LENGTH: usize = 1000;

/// Error returned when question text validation fails
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionTextError {
    /// Text is empty after trimming
    Empty,

    /// Text exceeds QUESTION_TEXT_MAX_LENGTH
    TooLong { length: usize, max: usize },
}

impl fmt::Display for QuestionTextError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Question text cannot be empty"),
            Self::TooLong { length, max } => {
                write!(f, "Question text is too long ({length} chars, maximum {max})")
            }
        }
    }
}

impl std::error::Error for QuestionTextError {}

/// Validated, trimmed question text
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QuestionText(String);

impl QuestionText {
    /// Create from raw input. Trims surrounding whitespace and validates.
    pub fn new(input: impl AsRef<str>) -> Result<Self, QuestionTextError> {
        let trimmed = input.as_ref().trim().to_string();
        if trimmed.is_empty() {
            return Err(QuestionTextError::Empty);
        }
        let length = trimmed.chars().count();
        if length > QUESTION_TEXT_MAX_LENGTH {
            return Err(QuestionTextError::TooLong {
                length,
                max: QUESTION_TEXT_MAX_LENGTH,
            });
        }
        Ok(Self(trimmed))
    }

    /// Create from a database value (validated on insert).
    pub fn from_db(text: String) -> Self {
        Self(text)
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for QuestionText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for QuestionText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for QuestionText {
    type Error = QuestionTextError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for QuestionText {
    type Error = QuestionTextError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<QuestionText> for String {
    fn from(text: QuestionText) -> Self {
        text.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_whitespace() {
        let text = QuestionText::new("  What year did WW2 end?  ").unwrap();
        assert_eq!(text.as_str(), "What year did WW2 end?");
    }

    #[test]
    fn test_empty_fails() {
        assert!(matches!(
            QuestionText::new(""),
            Err(QuestionTextError::Empty)
        ));
    }

    #[test]
    fn test_whitespace_only_fails() {
        assert!(matches!(
            QuestionText::new("   "),
            Err(QuestionTextError::Empty)
        ));
    }

    #[test]
    fn test_maximum_length() {
        let input = "a".repeat(QUESTION_TEXT_MAX_LENGTH);
        assert!(QuestionText::new(&input).is_ok());
    }

    #[test]
    fn test_too_long() {
        let input = "a".repeat(QUESTION_TEXT_MAX_LENGTH + 1);
        assert!(matches!(
            QuestionText::new(&input),
            Err(QuestionTextError::TooLong { .. })
        ));
    }

    #[test]
    fn test_interior_whitespace_preserved() {
        let text = QuestionText::new("Who painted  the Mona Lisa?").unwrap();
        assert_eq!(text.as_str(), "Who painted  the Mona Lisa?");
    }

    #[test]
    fn test_display() {
        let text = QuestionText::new("Why?").unwrap();
        assert_eq!(text.to_string(), "Why?");
    }

    #[test]
    fn test_error_display() {
        let err = QuestionTextError::TooLong {
            length: 1001,
            max: 1000,
        };
        let msg = err.to_string();
        assert!(msg.contains("1001") && msg.contains("1000"));
    }
}

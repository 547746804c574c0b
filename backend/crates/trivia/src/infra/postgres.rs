//! PostgreSQL Repository Implementations

use sqlx::PgPool;

use crate::domain::entity::{
    category::Category,
    question::{NewQuestion, Question},
};
use crate::domain::repository::{CategoryRepository, QuestionRepository};
use crate::domain::value_object::{difficulty::Difficulty, question_text::QuestionText};
use crate::error::TriviaResult;
use kernel::id::{CategoryId, QuestionId};

/// PostgreSQL-backed trivia repository
#[derive(Clone)]
pub struct PgTriviaRepository {
    pool: PgPool,
}

impl PgTriviaRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct QuestionRow {
    id: i64,
    question: String,
    answer: String,
    category: i64,
    difficulty: i32,
}

impl QuestionRow {
    fn into_question(self) -> Question {
        Question {
            id: QuestionId::new(self.id),
            question: QuestionText::from_db(self.question),
            answer: self.answer,
            category: CategoryId::new(self.category),
            difficulty: Difficulty::from_db(self.difficulty),
        }
    }
}

#[derive(sqlx::FromRow)]
struct CategoryRow {
    id: i64,
    kind: String,
}

impl CategoryRow {
    fn into_category(self) -> Category {
        Category {
            id: CategoryId::new(self.id),
            kind: self.kind,
        }
    }
}

/// Escape LIKE metacharacters so the search term matches literally.
fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for ch in term.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

// ============================================================================
// Question Repository Implementation
// ============================================================================

impl QuestionRepository for PgTriviaRepository {
    async fn list_all(&self) -> TriviaResult<Vec<Question>> {
        let rows = sqlx::query_as::<_, QuestionRow>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(QuestionRow::into_question).collect())
    }

    async fn list_by_category(&self, category: CategoryId) -> TriviaResult<Vec<Question>> {
        let rows = sqlx::query_as::<_, QuestionRow>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE category = $1
            ORDER BY id
            "#,
        )
        .bind(category.get())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(QuestionRow::into_question).collect())
    }

    async fn search(&self, term: &str) -> TriviaResult<Vec<Question>> {
        let pattern = format!("%{}%", escape_like(term));

        let rows = sqlx::query_as::<_, QuestionRow>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE question ILIKE $1 ESCAPE '\'
            ORDER BY id
            "#,
        )
        .bind(pattern)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(QuestionRow::into_question).collect())
    }

    async fn find_by_id(&self, id: QuestionId) -> TriviaResult<Option<Question>> {
        let row = sqlx::query_as::<_, QuestionRow>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE id = $1
            "#,
        )
        .bind(id.get())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(QuestionRow::into_question))
    }

    async fn insert(&self, question: &NewQuestion) -> TriviaResult<Question> {
        let row = sqlx::query_as::<_, QuestionRow>(
            r#"
            INSERT INTO questions (question, answer, category, difficulty)
            VALUES ($1, $2, $3, $4)
            RETURNING id, question, answer, category, difficulty
            "#,
        )
        .bind(question.question.as_str())
        .bind(&question.answer)
        .bind(question.category.get())
        .bind(question.difficulty.get())
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into_question())
    }

    async fn delete(&self, id: QuestionId) -> TriviaResult<()> {
        sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id.get())
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

// ============================================================================
// Category Repository Implementation
// ============================================================================

impl CategoryRepository for PgTriviaRepository {
    async fn list_all(&self) -> TriviaResult<Vec<Category>> {
        let rows = sqlx::query_as::<_, CategoryRow>(
            r#"
            SELECT id, type AS kind
            FROM categories
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(CategoryRow::into_category).collect())
    }

    async fn find_by_id(&self, id: CategoryId) -> TriviaResult<Option<Category>> {
        let row = sqlx::query_as::<_, CategoryRow>(
            r#"
            SELECT id, type AS kind
            FROM categories
            WHERE id = $1
            "#,
        )
        .bind(id.get())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(CategoryRow::into_category))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_like_plain_term() {
        assert_eq!(escape_like("title"), "title");
    }

    #[test]
    fn test_escape_like_percent() {
        assert_eq!(escape_like("100%"), "100\\%");
    }

    #[test]
    fn test_escape_like_underscore_and_backslash() {
        assert_eq!(escape_like("a_b\\c"), "a\\_b\\\\c");
    }
}

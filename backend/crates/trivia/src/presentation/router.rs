//! Trivia Router

use axum::{
    Router,
    routing::{delete, get, post},
};
use std::sync::Arc;

use crate::domain::repository::{CategoryRepository, QuestionRepository};
use crate::infra::postgres::PgTriviaRepository;
use crate::presentation::handlers::{self, TriviaAppState};

/// Create the trivia router with PostgreSQL repository
pub fn trivia_router(repo: PgTriviaRepository) -> Router {
    let state = TriviaAppState {
        repo: Arc::new(repo),
    };

    Router::new()
        .route("/categories", get(handlers::list_categories::<PgTriviaRepository>))
        .route(
            "/categories/{category_id}/questions",
            get(handlers::questions_by_category::<PgTriviaRepository>),
        )
        .route(
            "/questions",
            get(handlers::list_questions::<PgTriviaRepository>)
                .post(handlers::create_or_search_questions::<PgTriviaRepository>),
        )
        .route(
            "/questions/{question_id}",
            delete(handlers::delete_question::<PgTriviaRepository>),
        )
        .route("/quizzes", post(handlers::play_quiz::<PgTriviaRepository>))
        .with_state(state)
}

/// Create a generic trivia router for any repository implementation
pub fn trivia_router_generic<R>(repo: R) -> Router
where
    R: QuestionRepository + CategoryRepository + Clone + Send + Sync + 'static,
{
    let state = TriviaAppState {
        repo: Arc::new(repo),
    };

    Router::new()
        .route("/categories", get(handlers::list_categories::<R>))
        .route(
            "/categories/{category_id}/questions",
            get(handlers::questions_by_category::<R>),
        )
        .route(
            "/questions",
            get(handlers::list_questions::<R>).post(handlers::create_or_search_questions::<R>),
        )
        .route(
            "/questions/{question_id}",
            delete(handlers::delete_question::<R>),
        )
        .route("/quizzes", post(handlers::play_quiz::<R>))
        .with_state(state)
}

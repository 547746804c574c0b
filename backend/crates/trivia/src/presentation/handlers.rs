//! HTTP Handlers

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use std::sync::Arc;

use crate::application::{
    CreateQuestionInput, CreateQuestionUseCase, DeleteQuestionUseCase, ListCategoriesUseCase,
    ListQuestionsUseCase, PlayQuizInput, PlayQuizUseCase, QuestionsByCategoryUseCase,
    SearchQuestionsUseCase,
};
use crate::domain::repository::{CategoryRepository, QuestionRepository};
use crate::domain::value_object::category_filter::CategoryFilter;
use crate::error::{TriviaError, TriviaResult};
use crate::presentation::dto::{
    CategoriesResponse, CreatedResponse, DeleteResponse, FilteredQuestionsResponse, PageQuery,
    QuestionDto, QuestionListResponse, QuestionPostRequest, QuizRequest, QuizResponse,
};
use kernel::id::{CategoryId, QuestionId};

/// Shared state for trivia handlers
#[derive(Clone)]
pub struct TriviaAppState<R>
where
    R: QuestionRepository + CategoryRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

// ============================================================================
// Categories
// ============================================================================

/// GET /categories
pub async fn list_categories<R>(
    State(state): State<TriviaAppState<R>>,
) -> TriviaResult<Json<CategoriesResponse>>
where
    R: QuestionRepository + CategoryRepository + Clone + Send + Sync + 'static,
{
    let use_case = ListCategoriesUseCase::new(state.repo.clone());

    let categories = use_case.execute().await?;

    Ok(Json(CategoriesResponse {
        success: true,
        categories,
    }))
}

/// GET /categories/{category_id}/questions
pub async fn questions_by_category<R>(
    State(state): State<TriviaAppState<R>>,
    Path(category_id): Path<i64>,
) -> TriviaResult<Json<FilteredQuestionsResponse>>
where
    R: QuestionRepository + CategoryRepository + Clone + Send + Sync + 'static,
{
    let use_case = QuestionsByCategoryUseCase::new(state.repo.clone(), state.repo.clone());

    let output = use_case.execute(CategoryId::new(category_id)).await?;

    Ok(Json(FilteredQuestionsResponse {
        success: true,
        questions: output.questions.iter().map(QuestionDto::from).collect(),
        total_questions: output.total_questions,
        current_category: Some(output.current_category),
    }))
}

// ============================================================================
// Questions
// ============================================================================

/// GET /questions
pub async fn list_questions<R>(
    State(state): State<TriviaAppState<R>>,
    Query(query): Query<PageQuery>,
) -> TriviaResult<Json<QuestionListResponse>>
where
    R: QuestionRepository + CategoryRepository + Clone + Send + Sync + 'static,
{
    let use_case = ListQuestionsUseCase::new(state.repo.clone(), state.repo.clone());

    let output = use_case.execute(query.page.unwrap_or(1)).await?;

    Ok(Json(QuestionListResponse {
        success: true,
        questions: output.questions.iter().map(QuestionDto::from).collect(),
        categories: output.categories,
        total_questions: output.total_questions,
        current_category: None,
    }))
}

/// POST /questions — create a question, or search when `searchTerm` is
/// present and non-empty
pub async fn create_or_search_questions<R>(
    State(state): State<TriviaAppState<R>>,
    Json(req): Json<QuestionPostRequest>,
) -> TriviaResult<impl IntoResponse>
where
    R: QuestionRepository + CategoryRepository + Clone + Send + Sync + 'static,
{
    if let Some(term) = req.search_term.filter(|t| !t.is_empty()) {
        let use_case = SearchQuestionsUseCase::new(state.repo.clone());

        let output = use_case.execute(&term).await?;

        return Ok(Json(FilteredQuestionsResponse {
            success: true,
            questions: output.questions.iter().map(QuestionDto::from).collect(),
            total_questions: output.total_questions,
            current_category: None,
        })
        .into_response());
    }

    // A body with no question fields at all is its own client error,
    // distinct from a partially filled create request.
    if req.question.is_none()
        && req.answer.is_none()
        && req.category.is_none()
        && req.difficulty.is_none()
    {
        return Err(TriviaError::EmptyQuestionPost);
    }

    let use_case = CreateQuestionUseCase::new(state.repo.clone());

    let input = CreateQuestionInput {
        question: req.question,
        answer: req.answer,
        category: req.category,
        difficulty: req.difficulty,
    };

    use_case.execute(input).await?;

    Ok(Json(CreatedResponse { success: true }).into_response())
}

/// DELETE /questions/{question_id}
pub async fn delete_question<R>(
    State(state): State<TriviaAppState<R>>,
    Path(question_id): Path<i64>,
) -> TriviaResult<Json<DeleteResponse>>
where
    R: QuestionRepository + CategoryRepository + Clone + Send + Sync + 'static,
{
    let use_case = DeleteQuestionUseCase::new(state.repo.clone());

    let output = use_case.execute(QuestionId::new(question_id)).await?;

    Ok(Json(DeleteResponse {
        success: true,
        question: output.first_page.iter().map(QuestionDto::from).collect(),
        delete: output.deleted.get(),
        total_questions: output.total_questions,
    }))
}

// ============================================================================
// Quiz
// ============================================================================

/// POST /quizzes
pub async fn play_quiz<R>(
    State(state): State<TriviaAppState<R>>,
    Json(req): Json<QuizRequest>,
) -> TriviaResult<Json<QuizResponse>>
where
    R: QuestionRepository + CategoryRepository + Clone + Send + Sync + 'static,
{
    let use_case = PlayQuizUseCase::new(state.repo.clone());

    let input = PlayQuizInput {
        previous_questions: req.previous_questions,
        category: CategoryFilter::from_id(req.quiz_category.map(|c| c.id)),
    };

    let picked = use_case.execute(input).await?;

    // An exhausted candidate set is a normal outcome, not an error.
    Ok(Json(match picked {
        Some(question) => QuizResponse {
            success: true,
            question: Some(QuestionDto::from(&question)),
            message: None,
        },
        None => QuizResponse {
            success: false,
            question: None,
            message: Some("No questions available"),
        },
    }))
}

// src/handlers/questions.rs

use std::ops::Range;

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    response::{IntoResponse, Response},
};
use serde_json::json;
use validator::Validate;

use crate::{
    config::QUESTIONS_PER_PAGE,
    error::AppError,
    handlers::resource_id,
    models::{
        category::category_map,
        question::{PageParams, QuestionPage, QuestionsPayload, SearchResults},
    },
    repository::RepositoryError,
    state::DynRepository,
};

/// Computes the slice of the id-ordered question list that makes up `page`.
///
/// Pages are 1-indexed. A page starting exactly at `total` is valid and empty;
/// one starting before the first question or past the end is `Unprocessable`.
fn page_window(page: i64, total: usize) -> Result<Range<usize>, AppError> {
    let start = page
        .checked_sub(1)
        .and_then(|p| p.checked_mul(QUESTIONS_PER_PAGE))
        .ok_or(AppError::Unprocessable)?;

    if start < 0 || start as u64 > total as u64 {
        return Err(AppError::Unprocessable);
    }

    let start = start as usize;
    let end = (start + QUESTIONS_PER_PAGE as usize).min(total);
    Ok(start..end)
}

/// Lists one page of questions together with the category mapping.
///
/// Every failure on this endpoint, including a bad or out-of-range page number, is a 404.
pub async fn list_questions(
    State(repo): State<DynRepository>,
    params: Result<Query<PageParams>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(params) = params.map_err(|_| AppError::NotFound)?;

    let questions = repo.list_questions().await.map_err(|e| {
        tracing::error!("Failed to list questions: {:?}", e);
        AppError::NotFound
    })?;

    let total_questions = questions.len();
    let window = page_window(params.page, total_questions).map_err(|_| AppError::NotFound)?;

    let categories = repo.list_categories().await.map_err(|e| {
        tracing::error!("Failed to list categories: {:?}", e);
        AppError::NotFound
    })?;

    let questions = questions
        .into_iter()
        .skip(window.start)
        .take(window.len())
        .collect();

    Ok(Json(QuestionPage {
        questions,
        total_questions,
        categories: category_map(categories),
        current_category: None,
    }))
}

/// Deletes a question by ID.
///
/// The question must exist; a missing id is reported as 422, never as success.
/// A segment that is not a non-negative integer is a 404, like any unknown route.
pub async fn delete_question(
    State(repo): State<DynRepository>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = resource_id(id)?;

    let lookup_failed = |e: RepositoryError| {
        tracing::error!("Failed to delete question {}: {:?}", id, e);
        AppError::Unprocessable
    };

    let _existing = repo
        .get_question(id)
        .await
        .map_err(lookup_failed)?
        .ok_or(AppError::Unprocessable)?;

    if !repo.delete_question(id).await.map_err(lookup_failed)? {
        // Removed by a concurrent request between the lookup and the delete.
        return Err(AppError::Unprocessable);
    }

    tracing::info!("Deleted question {}", id);

    Ok(Json(json!({
        "success": true,
        "id": id,
    })))
}

/// Creates a question, or searches questions when the body carries `searchTerm`.
///
/// Any malformed body, failed validation or storage error is a 500.
pub async fn create_or_search_questions(
    State(repo): State<DynRepository>,
    payload: Result<Json<QuestionsPayload>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(payload) = payload.map_err(|e| AppError::InternalServerError(e.body_text()))?;

    match payload {
        QuestionsPayload::Create(req) => {
            req.validate()
                .map_err(|e| AppError::InternalServerError(e.to_string()))?;

            let question = repo.create_question(req.into()).await?;
            tracing::info!("Created question {} in category {}", question.id, question.category);

            Ok(Json(json!({ "success": true })).into_response())
        }
        QuestionsPayload::Search(req) => {
            let questions = repo.search_questions(&req.search_term).await?;
            let total_questions = repo.count_questions().await?;

            Ok(Json(SearchResults {
                questions,
                total_questions,
                current_category: None,
            })
            .into_response())
        }
    }
}

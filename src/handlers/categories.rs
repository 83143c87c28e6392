// src/handlers/categories.rs

use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
    response::IntoResponse,
};
use serde_json::json;

use crate::{
    error::AppError,
    handlers::resource_id,
    models::{category::category_map, question::CategoryQuestions},
    state::DynRepository,
};

/// Lists all categories as an `{id: type}` mapping.
pub async fn list_categories(State(repo): State<DynRepository>) -> Result<impl IntoResponse, AppError> {
    let categories = repo.list_categories().await.map_err(|e| {
        tracing::error!("Failed to list categories: {:?}", e);
        AppError::InternalServerError(e.to_string())
    })?;

    Ok(Json(json!({
        "categories": category_map(categories),
    })))
}

/// Lists the questions of one category.
///
/// `total_questions` counts the whole store, not just this category.
/// An unknown category is a 500, like every other failure on this endpoint.
/// A segment that is not a non-negative integer is a 404, like any unknown route.
pub async fn list_category_questions(
    State(repo): State<DynRepository>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = resource_id(id)?;

    let total_questions = repo.count_questions().await?;
    let questions = repo.questions_by_category(id).await?;

    let category = repo
        .get_category(id)
        .await?
        .ok_or_else(|| AppError::InternalServerError(format!("Category {} does not exist", id)))?;

    Ok(Json(CategoryQuestions {
        questions,
        total_questions,
        current_category: category.category_type,
    }))
}

// src/handlers/quizzes.rs

use std::collections::HashSet;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    response::IntoResponse,
};
use rand::{Rng, seq::SliceRandom};

use crate::{
    error::AppError,
    models::{
        question::Question,
        quiz::{QuizRequest, QuizResponse, QuizScope},
    },
    state::DynRepository,
};

/// Picks a question uniformly at random among those not asked yet.
/// Returns `None` once every candidate has been asked.
fn pick_next_question<R: Rng + ?Sized>(
    candidates: Vec<Question>,
    previous_questions: &[i64],
    rng: &mut R,
) -> Option<Question> {
    let asked: HashSet<i64> = previous_questions.iter().copied().collect();

    let remaining: Vec<Question> = candidates
        .into_iter()
        .filter(|q| !asked.contains(&q.id))
        .collect();

    remaining.choose(rng).cloned()
}

/// Returns the next quiz question for the selected category, or `null` when the quiz is over.
pub async fn next_question(
    State(repo): State<DynRepository>,
    payload: Result<Json<QuizRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(req) = payload.map_err(|e| AppError::InternalServerError(e.body_text()))?;

    let scope = req.quiz_category.scope().ok_or_else(|| {
        AppError::InternalServerError(format!(
            "quiz category '{}' has no id",
            req.quiz_category.category_type
        ))
    })?;

    let candidates = match scope {
        QuizScope::Category(category_id) => repo.questions_by_category(category_id).await?,
        QuizScope::AllCategories => repo.list_questions().await?,
    };

    let question = pick_next_question(candidates, &req.previous_questions, &mut rand::thread_rng());

    Ok(Json(QuizResponse { question }))
}

// src/handlers/mod.rs

use axum::extract::{Path, rejection::PathRejection};

use crate::error::AppError;

pub mod categories;
pub mod questions;
pub mod quizzes;

/// Reads a numeric `{id}` path segment.
///
/// Ids are non-negative integers; any other segment does not name a resource
/// and is answered like an unknown route.
fn resource_id(id: Result<Path<i64>, PathRejection>) -> Result<i64, AppError> {
    match id {
        Ok(Path(id)) if id >= 0 => Ok(id),
        _ => Err(AppError::NotFound),
    }
}

// src/models/question.rs

use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;
use validator::Validate;

use crate::models::{category::CategoryMap, numeric::number_or_numeric_string};

/// Represents the 'questions' table in the database.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Question {
    pub id: i64,

    /// The prompt shown to the player.
    pub question: String,

    pub answer: String,

    /// Id of the category this question belongs to. Not enforced as a foreign key.
    pub category: i64,

    /// Rating from 1 (easy) to 5 (hard).
    pub difficulty: i32,
}

/// A question that has not been stored yet.
#[derive(Debug, Clone)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i32,
}

/// DTO for creating a new question.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateQuestionRequest {
    #[validate(length(min = 1))]
    pub question: String,
    #[validate(length(min = 1))]
    pub answer: String,
    #[serde(deserialize_with = "number_or_numeric_string")]
    pub category: i64,
    #[serde(deserialize_with = "number_or_numeric_string")]
    pub difficulty: i32,
}

impl From<CreateQuestionRequest> for NewQuestion {
    fn from(req: CreateQuestionRequest) -> Self {
        Self {
            question: req.question,
            answer: req.answer,
            category: req.category,
            difficulty: req.difficulty,
        }
    }
}

/// DTO for searching questions by keyword.
#[derive(Debug, Deserialize)]
pub struct SearchQuestionsRequest {
    #[serde(rename = "searchTerm")]
    pub search_term: String,
}

/// Body of `POST /questions`.
///
/// The presence of `searchTerm` selects the search branch, anything else is a creation.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum QuestionsPayload {
    Search(SearchQuestionsRequest),
    Create(CreateQuestionRequest),
}

/// Query parameters for `GET /questions`.
#[derive(Debug, Deserialize)]
pub struct PageParams {
    pub page: i64,
}

/// Response of `GET /questions`.
#[derive(Debug, Serialize)]
pub struct QuestionPage {
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub categories: CategoryMap,
    pub current_category: Option<String>,
}

/// Response of `GET /categories/{id}/questions`.
#[derive(Debug, Serialize)]
pub struct CategoryQuestions {
    pub questions: Vec<Question>,
    /// Size of the whole store, not of the filtered list.
    pub total_questions: usize,
    pub current_category: String,
}

/// Response of the search branch of `POST /questions`.
/// Uses the camelCase keys the front-end expects.
#[derive(Debug, Serialize)]
pub struct SearchResults {
    pub questions: Vec<Question>,
    #[serde(rename = "totalQuestions")]
    pub total_questions: usize,
    #[serde(rename = "currentCategory")]
    pub current_category: Option<String>,
}

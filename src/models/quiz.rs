// src/models/quiz.rs

use serde::{Deserialize, Serialize};

use crate::{
    config::ALL_CATEGORIES,
    models::{numeric::optional_number_or_numeric_string, question::Question},
};

/// DTO for requesting the next quiz question.
#[derive(Debug, Deserialize)]
pub struct QuizRequest {
    /// Ids of the questions already asked in this quiz.
    pub previous_questions: Vec<i64>,
    pub quiz_category: QuizCategory,
}

/// Category selected by the player.
#[derive(Debug, Deserialize)]
pub struct QuizCategory {
    /// Browsers send the id either as a number or as the string key of the categories object.
    /// Clients picking every category may leave it out.
    #[serde(default, deserialize_with = "optional_number_or_numeric_string")]
    pub id: Option<i64>,
    #[serde(rename = "type")]
    pub category_type: String,
}

/// Which questions a quiz draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizScope {
    AllCategories,
    Category(i64),
}

impl QuizCategory {
    /// `None` when a specific category was picked without an id.
    pub fn scope(&self) -> Option<QuizScope> {
        if self.category_type == ALL_CATEGORIES {
            Some(QuizScope::AllCategories)
        } else {
            self.id.map(QuizScope::Category)
        }
    }
}

/// Response of `POST /quizzes`. A `null` question means the quiz is over.
#[derive(Debug, Serialize)]
pub struct QuizResponse {
    pub question: Option<Question>,
}

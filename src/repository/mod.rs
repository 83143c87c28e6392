// src/repository/mod.rs

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{
    category::Category,
    question::{NewQuestion, Question},
};

pub mod memory;
pub mod postgres;

pub use memory::MemoryRepository;
pub use postgres::PgRepository;

/// Errors raised by the persistence layer.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Storage for questions and categories.
///
/// Every call reads the current state of the store; nothing is cached between requests.
/// Lists of questions are always ordered by ascending id.
#[async_trait]
pub trait TriviaRepository: Send + Sync {
    async fn list_categories(&self) -> RepositoryResult<Vec<Category>>;

    async fn get_category(&self, id: i64) -> RepositoryResult<Option<Category>>;

    async fn list_questions(&self) -> RepositoryResult<Vec<Question>>;

    async fn count_questions(&self) -> RepositoryResult<usize>;

    async fn questions_by_category(&self, category_id: i64) -> RepositoryResult<Vec<Question>>;

    /// Case-insensitive substring match against the question text only.
    async fn search_questions(&self, term: &str) -> RepositoryResult<Vec<Question>>;

    async fn get_question(&self, id: i64) -> RepositoryResult<Option<Question>>;

    async fn create_question(&self, new_question: NewQuestion) -> RepositoryResult<Question>;

    /// Returns `false` when no row had that id.
    async fn delete_question(&self, id: i64) -> RepositoryResult<bool>;
}

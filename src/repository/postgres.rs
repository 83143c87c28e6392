// src/repository/postgres.rs

use async_trait::async_trait;
use sqlx::PgPool;

use super::{RepositoryResult, TriviaRepository};
use crate::models::{
    category::Category,
    question::{NewQuestion, Question},
};

/// Repository backed by PostgreSQL.
///
/// `PgPool` is cheap to clone, so the repository can be shared freely between handlers.
#[derive(Clone)]
pub struct PgRepository {
    pool: PgPool,
}

impl PgRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Turns a user search term into an `ILIKE` pattern matching it literally anywhere in the text.
fn ilike_pattern(term: &str) -> String {
    let escaped = term
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{}%", escaped)
}

#[async_trait]
impl TriviaRepository for PgRepository {
    async fn list_categories(&self) -> RepositoryResult<Vec<Category>> {
        let categories = sqlx::query_as::<_, Category>(
            r#"
            SELECT id, type
            FROM categories
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(categories)
    }

    async fn get_category(&self, id: i64) -> RepositoryResult<Option<Category>> {
        let category = sqlx::query_as::<_, Category>("SELECT id, type FROM categories WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(category)
    }

    async fn list_questions(&self) -> RepositoryResult<Vec<Question>> {
        let questions = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(questions)
    }

    async fn count_questions(&self) -> RepositoryResult<usize> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM questions")
            .fetch_one(&self.pool)
            .await?;

        Ok(count as usize)
    }

    async fn questions_by_category(&self, category_id: i64) -> RepositoryResult<Vec<Question>> {
        let questions = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE category = $1
            ORDER BY id ASC
            "#,
        )
        .bind(category_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(questions)
    }

    async fn search_questions(&self, term: &str) -> RepositoryResult<Vec<Question>> {
        let questions = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE question ILIKE $1
            ORDER BY id ASC
            "#,
        )
        .bind(ilike_pattern(term))
        .fetch_all(&self.pool)
        .await?;

        Ok(questions)
    }

    async fn get_question(&self, id: i64) -> RepositoryResult<Option<Question>> {
        let question = sqlx::query_as::<_, Question>(
            "SELECT id, question, answer, category, difficulty FROM questions WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(question)
    }

    async fn create_question(&self, new_question: NewQuestion) -> RepositoryResult<Question> {
        let question = sqlx::query_as::<_, Question>(
            r#"
            INSERT INTO questions (question, answer, category, difficulty)
            VALUES ($1, $2, $3, $4)
            RETURNING id, question, answer, category, difficulty
            "#,
        )
        .bind(new_question.question)
        .bind(new_question.answer)
        .bind(new_question.category)
        .bind(new_question.difficulty)
        .fetch_one(&self.pool)
        .await?;

        Ok(question)
    }

    async fn delete_question(&self, id: i64) -> RepositoryResult<bool> {
        let result = sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

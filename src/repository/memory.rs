// src/repository/memory.rs

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{RepositoryResult, TriviaRepository};
use crate::models::{
    category::Category,
    question::{NewQuestion, Question},
};

#[derive(Debug, Default)]
struct Store {
    categories: BTreeMap<i64, Category>,
    questions: BTreeMap<i64, Question>,
    last_category_id: i64,
    last_question_id: i64,
}

/// In-process repository used by the integration tests and local demos.
///
/// Ids are assigned from monotonically increasing counters and never reused,
/// matching the behaviour of a `BIGSERIAL` column.
#[derive(Debug, Default)]
pub struct MemoryRepository {
    store: RwLock<Store>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository holding the given categories, with ids starting at 1.
    pub async fn with_categories<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let repo = Self::new();
        for label in labels {
            repo.insert_category(label).await;
        }
        repo
    }

    pub async fn insert_category(&self, label: impl Into<String>) -> Category {
        let mut store = self.store.write().await;
        store.last_category_id += 1;
        let category = Category {
            id: store.last_category_id,
            category_type: label.into(),
        };
        store.categories.insert(category.id, category.clone());
        category
    }
}

#[async_trait]
impl TriviaRepository for MemoryRepository {
    async fn list_categories(&self) -> RepositoryResult<Vec<Category>> {
        Ok(self.store.read().await.categories.values().cloned().collect())
    }

    async fn get_category(&self, id: i64) -> RepositoryResult<Option<Category>> {
        Ok(self.store.read().await.categories.get(&id).cloned())
    }

    async fn list_questions(&self) -> RepositoryResult<Vec<Question>> {
        Ok(self.store.read().await.questions.values().cloned().collect())
    }

    async fn count_questions(&self) -> RepositoryResult<usize> {
        Ok(self.store.read().await.questions.len())
    }

    async fn questions_by_category(&self, category_id: i64) -> RepositoryResult<Vec<Question>> {
        let store = self.store.read().await;
        Ok(store
            .questions
            .values()
            .filter(|q| q.category == category_id)
            .cloned()
            .collect())
    }

    async fn search_questions(&self, term: &str) -> RepositoryResult<Vec<Question>> {
        let needle = term.to_lowercase();
        let store = self.store.read().await;
        Ok(store
            .questions
            .values()
            .filter(|q| q.question.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }

    async fn get_question(&self, id: i64) -> RepositoryResult<Option<Question>> {
        Ok(self.store.read().await.questions.get(&id).cloned())
    }

    async fn create_question(&self, new_question: NewQuestion) -> RepositoryResult<Question> {
        let mut store = self.store.write().await;
        store.last_question_id += 1;
        let question = Question {
            id: store.last_question_id,
            question: new_question.question,
            answer: new_question.answer,
            category: new_question.category,
            difficulty: new_question.difficulty,
        };
        store.questions.insert(question.id, question.clone());
        Ok(question)
    }

    async fn delete_question(&self, id: i64) -> RepositoryResult<bool> {
        Ok(self.store.write().await.questions.remove(&id).is_some())
    }
}

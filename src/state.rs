use std::sync::Arc;

use crate::repository::TriviaRepository;
use axum::extract::FromRef;

/// Shared handle to whichever store backs the service.
pub type DynRepository = Arc<dyn TriviaRepository>;

#[derive(Clone)]
pub struct AppState {
    pub repo: DynRepository,
}

impl AppState {
    pub fn new(repo: DynRepository) -> Self {
        Self { repo }
    }
}

impl FromRef<AppState> for DynRepository {
    fn from_ref(state: &AppState) -> Self {
        state.repo.clone()
    }
}

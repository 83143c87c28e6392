// src/routes.rs

use axum::{
    Router,
    http::{HeaderValue, Method, header},
    routing::{delete, get, post},
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};

use crate::{
    error::AppError,
    handlers::{categories, questions, quizzes},
    state::AppState,
};

/// Assembles the main application router.
///
/// * Registers the category, question and quiz endpoints.
/// * Stamps permissive cross-origin headers on every response, errors included.
/// * Injects global state (the repository handle).
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]);

    // `cors` answers preflight requests; these headers go on every response, errors included.
    let cross_origin_headers = ServiceBuilder::new()
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static("Content-Type"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static("GET,POST,DELETE"),
        ));

    Router::new()
        .route("/categories", get(categories::list_categories))
        .route(
            "/categories/{id}/questions",
            get(categories::list_category_questions),
        )
        .route(
            "/questions",
            get(questions::list_questions).post(questions::create_or_search_questions),
        )
        .route("/questions/{id}", delete(questions::delete_question))
        .route("/quizzes", post(quizzes::next_question))
        .fallback(|| async { AppError::NotFound })
        // Global Middleware (the last layer added is the outermost)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(cross_origin_headers)
        .with_state(state)
}

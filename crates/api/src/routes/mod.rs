pub mod forms;
pub mod health;
pub mod validation;

use axum::Router;

/// All routes mounted under `/api/v1`.
pub fn api_routes() -> Router {
    Router::new()
        .nest("/forms", forms::router())
        .nest("/validation", validation::router())
}

//! Route definitions for the `/forms` resource.

use axum::routing::post;
use axum::Router;

use crate::handlers::forms;

/// Routes mounted at `/forms`.
///
/// ```text
/// POST   /signup    -> signup
/// POST   /login     -> login
/// POST   /account   -> account
/// ```
pub fn router() -> Router {
    Router::new()
        .route("/signup", post(forms::signup))
        .route("/login", post(forms::login))
        .route("/account", post(forms::account))
}

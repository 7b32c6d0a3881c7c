//! Route definitions for the `/validation` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::validation;

/// Routes mounted at `/validation`.
///
/// ```text
/// GET    /rule-types   -> list_rule_types
/// POST   /validate     -> validate     (dry-run)
/// ```
pub fn router() -> Router {
    Router::new()
        .route("/rule-types", get(validation::list_rule_types))
        .route("/validate", post(validation::validate))
}

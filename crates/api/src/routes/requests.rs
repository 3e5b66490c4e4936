//! Route definitions for intake requests.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::requests;
use crate::state::AppState;

/// Catalog routes mounted at the API root.
///
/// ```text
/// GET    /request-types   -> list_request_types
/// ```
pub fn catalog_router() -> Router<AppState> {
    Router::new().route("/request-types", get(requests::list_request_types))
}

/// Routes mounted at `/requests`.
///
/// ```text
/// POST   /validate            -> validate_draft
/// POST   /wizard/transition   -> wizard_transition
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/validate", post(requests::validate_draft))
        .route("/wizard/transition", post(requests::wizard_transition))
}

//! Route definitions for the `/discovery` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::discovery;
use crate::state::AppState;

/// Routes mounted at `/discovery`.
///
/// ```text
/// GET    /deadline-status        -> deadline_status   (?cutoff, ?today)
/// POST   /extensions/validate    -> validate_extension
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/deadline-status", get(discovery::deadline_status))
        .route("/extensions/validate", post(discovery::validate_extension))
}

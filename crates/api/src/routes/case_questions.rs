//! Route definitions for the `/case-questions` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::case_questions;
use crate::state::AppState;

/// Routes mounted at `/case-questions`.
///
/// ```text
/// POST   /evaluate       -> evaluate
/// POST   /overrides      -> record_override
/// GET    /days-between   -> days_between   (?from, ?to)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/evaluate", post(case_questions::evaluate))
        .route("/overrides", post(case_questions::record_override))
        .route("/days-between", get(case_questions::days_between))
}

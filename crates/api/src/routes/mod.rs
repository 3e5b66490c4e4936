pub mod case_questions;
pub mod discovery;
pub mod health;
pub mod requests;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /request-types                        request group/type catalog (GET)
///
/// /requests/validate                    evaluate a request draft (POST)
/// /requests/wizard/transition           move between wizard steps (POST)
///
/// /case-questions/evaluate              derived flags + standing overrides (POST)
/// /case-questions/overrides             record an ALJ override (POST)
/// /case-questions/days-between          ?from=&to= day count (GET)
///
/// /discovery/deadline-status            ?cutoff=&today= cutoff status (GET)
/// /discovery/extensions/validate        check an extension request (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Intake request catalog, validation and wizard navigation.
        .merge(requests::catalog_router())
        .nest("/requests", requests::router())
        // Staff case screen: abandon-wells case questions.
        .nest("/case-questions", case_questions::router())
        // Staff case screen: discovery schedule tracking.
        .nest("/discovery", discovery::router())
}

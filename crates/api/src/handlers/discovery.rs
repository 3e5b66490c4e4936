//! Handlers for the `/discovery` resource.

use axum::extract::State;
use axum::Json;
use chrono::Utc;
use intake_core::schedule::{self, DeadlineReport};
use intake_core::types::Date;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::{validate_request, AppResult};
use crate::extract::{AppJson, AppQuery};
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct DeadlineStatusParams {
    pub cutoff: Date,
    /// Defaults to the current UTC date.
    pub today: Option<Date>,
}

/// GET /api/v1/discovery/deadline-status?cutoff=YYYY-MM-DD[&today=YYYY-MM-DD]
pub async fn deadline_status(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<DeadlineStatusParams>,
) -> Json<DataResponse<DeadlineReport>> {
    let today = params.today.unwrap_or_else(|| Utc::now().date_naive());
    let report =
        schedule::deadline_status(params.cutoff, today, state.config.discovery_due_soon_days);
    Json(DataResponse { data: report })
}

/// A party's request to move the discovery cutoff.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ExtensionBody {
    pub current_cutoff: Date,
    pub requested_cutoff: Date,
    #[serde(default)]
    #[validate(length(max = 2000, message = "must be at most 2000 characters"))]
    pub reason: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtensionCheck {
    pub requested_cutoff: Date,
    pub days_added: i64,
}

/// POST /api/v1/discovery/extensions/validate
pub async fn validate_extension(
    AppJson(body): AppJson<ExtensionBody>,
) -> AppResult<Json<DataResponse<ExtensionCheck>>> {
    validate_request(&body)?;
    let days_added =
        schedule::validate_extension(body.current_cutoff, body.requested_cutoff, &body.reason)?;

    tracing::info!(
        current_cutoff = %body.current_cutoff,
        requested_cutoff = %body.requested_cutoff,
        days_added,
        "Discovery extension request accepted"
    );

    Ok(Json(DataResponse {
        data: ExtensionCheck {
            requested_cutoff: body.requested_cutoff,
            days_added,
        },
    }))
}

//! Handlers for the `/case-questions` resource.
//!
//! The service holds no case state: clients post the tab's answers together
//! with the overrides they currently hold and receive the derived flags.

use axum::Json;
use chrono::Utc;
use intake_core::calendar;
use intake_core::case_questions::{
    evaluate_case_questions, override_readiness, override_timeliness, timeliness_for,
    CaseQuestionInputs, CaseQuestionsOutcome, OverrideTarget, StandingOverrides,
};
use intake_core::types::{Date, YesNo};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::{validate_request, AppResult};
use crate::extract::{AppJson, AppQuery};
use crate::response::DataResponse;

/// Case question answers plus the overrides the client holds.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluateBody {
    #[serde(default)]
    pub inputs: CaseQuestionInputs,
    #[serde(default)]
    pub overrides: StandingOverrides,
}

/// POST /api/v1/case-questions/evaluate
pub async fn evaluate(
    AppJson(body): AppJson<EvaluateBody>,
) -> Json<DataResponse<CaseQuestionsOutcome>> {
    let outcome = evaluate_case_questions(&body.inputs, &body.overrides);
    tracing::debug!(
        days_between = ?outcome.days_between,
        lapsed = outcome.lapsed_overrides.len(),
        "Case questions evaluated"
    );
    Json(DataResponse { data: outcome })
}

/// An ALJ decision to replace one derived flag.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RecordOverrideBody {
    pub target: OverrideTarget,
    pub value: YesNo,
    #[validate(length(min = 1, max = 120, message = "must be between 1 and 120 characters"))]
    pub actor: String,
    #[serde(default)]
    pub inputs: CaseQuestionInputs,
    #[serde(default)]
    pub overrides: StandingOverrides,
}

/// The updated override set and the tab re-evaluated with it.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordedOverride {
    pub overrides: StandingOverrides,
    pub outcome: CaseQuestionsOutcome,
}

/// POST /api/v1/case-questions/overrides
///
/// Binds the override to the current inputs; it stays in force until one of
/// those inputs changes.
pub async fn record_override(
    AppJson(body): AppJson<RecordOverrideBody>,
) -> AppResult<Json<DataResponse<RecordedOverride>>> {
    validate_request(&body)?;

    let now = Utc::now();
    let mut overrides = body.overrides;
    match body.target {
        OverrideTarget::HearingRequestTimely => {
            overrides.hearing_request_timely =
                Some(override_timeliness(&body.inputs, body.value, &body.actor, now)?);
        }
        OverrideTarget::ReadyToProceed => {
            overrides.ready_to_proceed = Some(override_readiness(
                &body.inputs,
                overrides.hearing_request_timely.as_ref(),
                body.value,
                &body.actor,
                now,
            )?);
        }
    }

    let outcome = evaluate_case_questions(&body.inputs, &overrides);

    tracing::info!(
        flag = body.target.field(),
        value = body.value.as_str(),
        actor = %body.actor.trim(),
        lapsed = outcome.lapsed_overrides.len(),
        "ALJ override recorded"
    );

    Ok(Json(DataResponse {
        data: RecordedOverride { overrides, outcome },
    }))
}

#[derive(Debug, Deserialize)]
pub struct DaysBetweenParams {
    pub from: Date,
    pub to: Date,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DaysBetween {
    pub days: i64,
    /// Unanswered when `to` is before `from`.
    pub hearing_request_timely: Option<YesNo>,
}

/// GET /api/v1/case-questions/days-between?from=YYYY-MM-DD&to=YYYY-MM-DD
pub async fn days_between(
    AppQuery(params): AppQuery<DaysBetweenParams>,
) -> Json<DataResponse<DaysBetween>> {
    let days = calendar::days_between(params.from, params.to);
    Json(DataResponse {
        data: DaysBetween {
            days,
            hearing_request_timely: timeliness_for(days),
        },
    })
}

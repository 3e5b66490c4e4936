//! Handlers for the request catalog, draft validation and wizard navigation.

use axum::Json;
use intake_core::fields::{draft_from_fields, FieldBag};
use intake_core::request::RequestGroup;
use intake_core::validation::{evaluate_fields, ValidationResult};
use intake_core::wizard::{self, WizardStep};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::AppResult;
use crate::extract::AppJson;
use crate::response::DataResponse;

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

/// One request group with the request types offered under it.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestGroupEntry {
    pub group: RequestGroup,
    pub label: &'static str,
    pub request_types: &'static [&'static str],
}

/// GET /api/v1/request-types
pub async fn list_request_types() -> Json<DataResponse<Vec<RequestGroupEntry>>> {
    let data = RequestGroup::ALL
        .iter()
        .map(|&group| RequestGroupEntry {
            group,
            label: group.label(),
            request_types: group.request_types(),
        })
        .collect();
    Json(DataResponse { data })
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// A request draft as posted by the intake form.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftBody {
    #[serde(default)]
    pub request_group: String,
    #[serde(default)]
    pub request_type: String,
    #[serde(default)]
    pub fields: Map<String, Value>,
}

impl DraftBody {
    fn evaluate(&self) -> ValidationResult {
        evaluate_fields(&self.request_group, &self.request_type, &self.fields)
    }
}

/// POST /api/v1/requests/validate
///
/// Always 200: an incomplete draft is reported through `canContinue` and
/// `blockingReasons`, not as an error.
pub async fn validate_draft(
    AppJson(body): AppJson<DraftBody>,
) -> Json<DataResponse<ValidationResult>> {
    let result = body.evaluate();
    tracing::debug!(
        request_group = %body.request_group,
        request_type = %body.request_type,
        can_continue = result.can_continue,
        blocking = result.blocking_reasons.len(),
        advisories = result.advisories.len(),
        "Request draft evaluated"
    );
    Json(DataResponse { data: result })
}

// ---------------------------------------------------------------------------
// Wizard
// ---------------------------------------------------------------------------

/// A wizard move together with the draft being edited.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WizardTransitionBody {
    pub current_step: u8,
    pub next_step: u8,
    #[serde(flatten)]
    pub draft: DraftBody,
}

/// Where the wizard landed after an accepted move.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WizardTransition {
    pub step: u8,
    pub label: &'static str,
    pub can_advance: bool,
    pub can_submit: bool,
    pub validation: ValidationResult,
}

/// POST /api/v1/requests/wizard/transition
///
/// Rejects moves of more than one step and forward moves out of an
/// incomplete step with 400 `VALIDATION_ERROR`.
pub async fn wizard_transition(
    AppJson(body): AppJson<WizardTransitionBody>,
) -> AppResult<Json<DataResponse<WizardTransition>>> {
    // A draft that cannot be built counts as nothing selected yet.
    let draft = draft_from_fields(
        &body.draft.request_group,
        &body.draft.request_type,
        FieldBag::new(&body.draft.fields),
    )
    .ok();

    wizard::validate_move(body.current_step, body.next_step, draft.as_ref())?;
    let step = WizardStep::from_number(body.next_step)?;

    tracing::info!(
        from = body.current_step,
        to = body.next_step,
        request_group = %body.draft.request_group,
        "Wizard step transition"
    );

    Ok(Json(DataResponse {
        data: WizardTransition {
            step: body.next_step,
            label: step.label(),
            can_advance: wizard::can_advance_step(body.next_step, draft.as_ref()),
            can_submit: wizard::can_submit(body.next_step, draft.as_ref()).is_ok(),
            validation: body.draft.evaluate(),
        },
    }))
}

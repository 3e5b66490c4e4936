//! Request wizard steps and navigation rules.
//!
//! The intake wizard has three tabs: choose the request, fill in its
//! details, review and submit. Navigation moves one tab at a time and a tab
//! can only be left forwards once its data is complete.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::request::RequestDraft;
use crate::types::has_text;
use crate::validation;

// ---------------------------------------------------------------------------
// Wizard steps
// ---------------------------------------------------------------------------

/// The three steps of the request wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    RequestSelection,
    RequestDetails,
    Review,
}

/// Minimum step number (1-based).
pub const MIN_STEP: u8 = 1;

/// Maximum step number (1-based).
pub const MAX_STEP: u8 = 3;

impl WizardStep {
    /// Convert a 1-based step number to a `WizardStep`.
    pub fn from_number(n: u8) -> Result<Self, CoreError> {
        match n {
            1 => Ok(Self::RequestSelection),
            2 => Ok(Self::RequestDetails),
            3 => Ok(Self::Review),
            _ => Err(CoreError::Validation(format!(
                "Invalid step number {n}. Must be between {MIN_STEP} and {MAX_STEP}"
            ))),
        }
    }

    pub fn to_number(self) -> u8 {
        match self {
            Self::RequestSelection => 1,
            Self::RequestDetails => 2,
            Self::Review => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::RequestSelection => "Request Selection",
            Self::RequestDetails => "Request Details",
            Self::Review => "Review",
        }
    }
}

// ---------------------------------------------------------------------------
// Navigation
// ---------------------------------------------------------------------------

/// Validate a step transition.
///
/// The next step must be exactly one step forward or back.
pub fn validate_step_transition(current: u8, next: u8) -> Result<(), CoreError> {
    if !(MIN_STEP..=MAX_STEP).contains(&current) {
        return Err(CoreError::Validation(format!(
            "Current step {current} is out of range ({MIN_STEP}..{MAX_STEP})"
        )));
    }
    if !(MIN_STEP..=MAX_STEP).contains(&next) {
        return Err(CoreError::Validation(format!(
            "Next step {next} is out of range ({MIN_STEP}..{MAX_STEP})"
        )));
    }

    let diff = i16::from(next) - i16::from(current);
    if diff != 1 && diff != -1 {
        return Err(CoreError::Validation(format!(
            "Cannot transition from step {current} to step {next}. \
             Must advance or go back exactly one step."
        )));
    }

    Ok(())
}

/// Validate that a step's data is complete enough to leave it forwards.
pub fn validate_step(step: u8, draft: Option<&RequestDraft>) -> Result<(), CoreError> {
    match WizardStep::from_number(step)? {
        WizardStep::RequestSelection => {
            let selected = draft.is_some_and(|d| has_text(d.request_type()));
            if !selected {
                return Err(CoreError::Validation(
                    "Step 1 (Request Selection) requires a request group and type".to_string(),
                ));
            }
        }
        WizardStep::RequestDetails => {
            let result = validation::evaluate(draft);
            if !result.can_continue {
                return Err(CoreError::Validation(format!(
                    "Step 2 (Request Details) is incomplete: {}",
                    result.blocking_reasons.join("; ")
                )));
            }
        }
        WizardStep::Review => {
            // Final step; leaving it forwards is a submission.
        }
    }
    Ok(())
}

/// Validate a move from `current` to `next`.
///
/// Going back is always allowed within range; going forward requires the
/// current step to be complete.
pub fn validate_move(current: u8, next: u8, draft: Option<&RequestDraft>) -> Result<(), CoreError> {
    validate_step_transition(current, next)?;
    if next > current {
        validate_step(current, draft)?;
    }
    Ok(())
}

/// Check whether the current step can be advanced.
pub fn can_advance_step(step: u8, draft: Option<&RequestDraft>) -> bool {
    step < MAX_STEP && validate_step(step, draft).is_ok()
}

/// Check whether the request can be submitted from `current_step`.
pub fn can_submit(current_step: u8, draft: Option<&RequestDraft>) -> Result<(), CoreError> {
    if current_step != MAX_STEP {
        return Err(CoreError::Validation(format!(
            "Cannot submit: must be on step {MAX_STEP} (Review), currently on step {current_step}"
        )));
    }
    validate_step(WizardStep::RequestSelection.to_number(), draft)?;
    validate_step(WizardStep::RequestDetails.to_number(), draft)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

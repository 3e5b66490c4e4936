//! Abandon-wells case questions: derived eligibility flags and ALJ overrides.
//!
//! Two flags are derived from the answers on the case questions tab:
//!
//! - `hearingRequestTimely`, from the day count between the order date and
//!   the date the hearing request was received;
//! - `readyToProceed`, from six answers plus the timeliness flag.
//!
//! Either flag may carry an ALJ override. An override records the inputs it
//! was made against (its *basis*) and stands only while the current inputs
//! still equal that basis. Once any basis input changes, the flag reverts to
//! its computed value and the override must be re-confirmed.

use serde::{Deserialize, Serialize};

use crate::calendar::days_between;
use crate::error::CoreError;
use crate::fields::lenient;
use crate::types::{has_text, Date, Timestamp, YesNo};
use crate::validation::{Advisory, AdvisoryCode};

/// A hearing request received more than this many days after the order is
/// untimely.
pub const HEARING_REQUEST_WINDOW_DAYS: i64 = 30;

pub const FIELD_HEARING_REQUEST_TIMELY: &str = "hearingRequestTimely";
pub const FIELD_READY_TO_PROCEED: &str = "readyToProceed";

// ---------------------------------------------------------------------------
// Inputs
// ---------------------------------------------------------------------------

/// Everything entered on the case questions tab.
///
/// Blank or unrecognised answers and dates read as unanswered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseQuestionInputs {
    #[serde(default, deserialize_with = "lenient::date")]
    pub order_date: Option<Date>,
    #[serde(default, deserialize_with = "lenient::date")]
    pub hearing_request_date: Option<Date>,
    #[serde(default, deserialize_with = "lenient::answer")]
    pub case_proper_statute: Option<YesNo>,
    #[serde(default, deserialize_with = "lenient::answer")]
    pub case_proper_regulations: Option<YesNo>,
    #[serde(default, deserialize_with = "lenient::answer")]
    pub proper_notice_given: Option<YesNo>,
    #[serde(default, deserialize_with = "lenient::answer")]
    pub jurisdictional_standing: Option<YesNo>,
    #[serde(default, deserialize_with = "lenient::answer")]
    pub procedural_requirements: Option<YesNo>,
    #[serde(default, deserialize_with = "lenient::answer")]
    pub legal_barriers: Option<YesNo>,
}

impl CaseQuestionInputs {
    pub fn timeliness_basis(&self) -> TimelinessBasis {
        TimelinessBasis {
            order_date: self.order_date,
            hearing_request_date: self.hearing_request_date,
        }
    }

    /// The seven readiness answers, given the resolved timeliness answer.
    pub fn readiness_answers(&self, hearing_request_timely: Option<YesNo>) -> ReadinessAnswers {
        ReadinessAnswers {
            case_proper_statute: self.case_proper_statute,
            case_proper_regulations: self.case_proper_regulations,
            hearing_request_timely,
            proper_notice_given: self.proper_notice_given,
            jurisdictional_standing: self.jurisdictional_standing,
            procedural_requirements: self.procedural_requirements,
            legal_barriers: self.legal_barriers,
        }
    }

    /// Days from the order to the hearing request, once both are entered.
    pub fn days_elapsed(&self) -> Option<i64> {
        Some(days_between(self.order_date?, self.hearing_request_date?))
    }
}

/// Inputs the timeliness flag is derived from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelinessBasis {
    pub order_date: Option<Date>,
    pub hearing_request_date: Option<Date>,
}

/// Inputs the ready-to-proceed flag is derived from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadinessAnswers {
    pub case_proper_statute: Option<YesNo>,
    pub case_proper_regulations: Option<YesNo>,
    pub hearing_request_timely: Option<YesNo>,
    pub proper_notice_given: Option<YesNo>,
    pub jurisdictional_standing: Option<YesNo>,
    pub procedural_requirements: Option<YesNo>,
    pub legal_barriers: Option<YesNo>,
}

// ---------------------------------------------------------------------------
// Pure derivations
// ---------------------------------------------------------------------------

/// Timeliness from the days between the order and the hearing request.
///
/// The flag is auto-set in both directions: a count within the window sets
/// it to yes and anything longer sets it to no. A negative count means the
/// dates are out of order and leaves the flag unanswered.
pub fn timeliness_for(days: i64) -> Option<YesNo> {
    (days >= 0).then(|| YesNo::from(days <= HEARING_REQUEST_WINDOW_DAYS))
}

/// Whether the case is ready to proceed.
///
/// `None` until all seven questions are answered. Any unfavourable answer
/// (a `no` to the six eligibility questions, or a `yes` to legal barriers)
/// makes the case not ready.
pub fn ready_to_proceed(answers: &ReadinessAnswers) -> Option<YesNo> {
    let eligibility = [
        answers.case_proper_statute?,
        answers.case_proper_regulations?,
        answers.hearing_request_timely?,
        answers.proper_notice_given?,
        answers.jurisdictional_standing?,
        answers.procedural_requirements?,
    ];
    let legal_barriers = answers.legal_barriers?;

    let blocked = eligibility.contains(&YesNo::No) || legal_barriers.is_yes();
    Some(YesNo::from(!blocked))
}

// ---------------------------------------------------------------------------
// Overrides
// ---------------------------------------------------------------------------

/// Which derived flag an override applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverrideTarget {
    HearingRequestTimely,
    ReadyToProceed,
}

impl OverrideTarget {
    pub fn field(self) -> &'static str {
        match self {
            Self::HearingRequestTimely => FIELD_HEARING_REQUEST_TIMELY,
            Self::ReadyToProceed => FIELD_READY_TO_PROCEED,
        }
    }
}

/// A staff decision replacing a derived value, bound to the inputs it was
/// made against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AljOverride<B> {
    pub value: YesNo,
    pub actor: String,
    pub at: Timestamp,
    pub basis: B,
}

/// A derived flag as shown on the tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DerivedFlag<B> {
    Computed { value: YesNo },
    Overridden(AljOverride<B>),
}

impl<B> DerivedFlag<B> {
    pub fn value(&self) -> YesNo {
        match self {
            Self::Computed { value } => *value,
            Self::Overridden(o) => o.value,
        }
    }

    pub fn is_overridden(&self) -> bool {
        matches!(self, Self::Overridden(_))
    }
}

/// Resolve a flag from its computed value and any standing override.
///
/// The override wins only while its basis equals the current inputs.
pub fn resolve_flag<B: Clone + PartialEq>(
    computed: Option<YesNo>,
    standing: Option<&AljOverride<B>>,
    basis: &B,
) -> Option<DerivedFlag<B>> {
    match standing {
        Some(o) if &o.basis == basis => Some(DerivedFlag::Overridden(o.clone())),
        _ => computed.map(|value| DerivedFlag::Computed { value }),
    }
}

/// Overrides the client currently holds for this case.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StandingOverrides {
    #[serde(default)]
    pub hearing_request_timely: Option<AljOverride<TimelinessBasis>>,
    #[serde(default)]
    pub ready_to_proceed: Option<AljOverride<ReadinessAnswers>>,
}

fn require_actor(actor: &str) -> Result<String, CoreError> {
    if !has_text(actor) {
        return Err(CoreError::Validation(
            "An ALJ override must name the acting staff member".to_string(),
        ));
    }
    Ok(actor.trim().to_string())
}

/// Record an override of the timeliness flag against the current dates.
pub fn override_timeliness(
    inputs: &CaseQuestionInputs,
    value: YesNo,
    actor: &str,
    at: Timestamp,
) -> Result<AljOverride<TimelinessBasis>, CoreError> {
    Ok(AljOverride {
        value,
        actor: require_actor(actor)?,
        at,
        basis: inputs.timeliness_basis(),
    })
}

/// Record an override of the ready-to-proceed flag.
///
/// The basis includes the timeliness answer as resolved with the given
/// standing timeliness override.
pub fn override_readiness(
    inputs: &CaseQuestionInputs,
    standing_timeliness: Option<&AljOverride<TimelinessBasis>>,
    value: YesNo,
    actor: &str,
    at: Timestamp,
) -> Result<AljOverride<ReadinessAnswers>, CoreError> {
    let actor = require_actor(actor)?;
    let timely = resolve_timeliness(inputs, standing_timeliness);
    Ok(AljOverride {
        value,
        actor,
        at,
        basis: inputs.readiness_answers(timely.map(|f| f.value())),
    })
}

fn resolve_timeliness(
    inputs: &CaseQuestionInputs,
    standing: Option<&AljOverride<TimelinessBasis>>,
) -> Option<DerivedFlag<TimelinessBasis>> {
    let computed = inputs.days_elapsed().and_then(timeliness_for);
    resolve_flag(computed, standing, &inputs.timeliness_basis())
}

// ---------------------------------------------------------------------------
// Evaluation
// ---------------------------------------------------------------------------

/// Derived state of the case questions tab.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseQuestionsOutcome {
    pub days_between: Option<i64>,
    pub hearing_request_timely: Option<DerivedFlag<TimelinessBasis>>,
    pub ready_to_proceed: Option<DerivedFlag<ReadinessAnswers>>,
    /// Overrides that no longer match their inputs and must be re-confirmed.
    pub lapsed_overrides: Vec<OverrideTarget>,
    pub advisories: Vec<Advisory>,
}

/// Evaluate the case questions tab from its inputs and standing overrides.
pub fn evaluate_case_questions(
    inputs: &CaseQuestionInputs,
    standing: &StandingOverrides,
) -> CaseQuestionsOutcome {
    let mut advisories = Vec::new();
    let mut lapsed_overrides = Vec::new();

    let days = inputs.days_elapsed();
    let timely = resolve_timeliness(inputs, standing.hearing_request_timely.as_ref());

    let timely_overridden = timely.as_ref().is_some_and(DerivedFlag::is_overridden);
    if standing.hearing_request_timely.is_some() && !timely_overridden {
        lapsed_overrides.push(OverrideTarget::HearingRequestTimely);
    }

    match (&timely, days) {
        (Some(DerivedFlag::Computed { value: YesNo::No }), Some(d)) => advisories.push(Advisory {
            field: FIELD_HEARING_REQUEST_TIMELY,
            code: AdvisoryCode::HearingRequestUntimely,
            message: format!(
                "Auto-set to No because {d} days elapsed (more than {HEARING_REQUEST_WINDOW_DAYS})"
            ),
        }),
        (None, Some(d)) if d < 0 => advisories.push(Advisory {
            field: FIELD_HEARING_REQUEST_TIMELY,
            code: AdvisoryCode::HearingRequestBeforeOrder,
            message: format!("Hearing request is dated {} days before the order", -d),
        }),
        (Some(DerivedFlag::Overridden(o)), _) => advisories.push(override_advisory(
            FIELD_HEARING_REQUEST_TIMELY,
            &o.actor,
            o.at,
        )),
        _ => {}
    }

    let answers = inputs.readiness_answers(timely.as_ref().map(DerivedFlag::value));
    let ready = resolve_flag(
        ready_to_proceed(&answers),
        standing.ready_to_proceed.as_ref(),
        &answers,
    );

    let ready_overridden = ready.as_ref().is_some_and(DerivedFlag::is_overridden);
    if standing.ready_to_proceed.is_some() && !ready_overridden {
        lapsed_overrides.push(OverrideTarget::ReadyToProceed);
    }

    if let Some(DerivedFlag::Overridden(o)) = &ready {
        advisories.push(override_advisory(FIELD_READY_TO_PROCEED, &o.actor, o.at));
    }

    CaseQuestionsOutcome {
        days_between: days,
        hearing_request_timely: timely,
        ready_to_proceed: ready,
        lapsed_overrides,
        advisories,
    }
}

fn override_advisory(field: &'static str, actor: &str, at: Timestamp) -> Advisory {
    Advisory {
        field,
        code: AdvisoryCode::AljOverride,
        message: format!("ALJ override by {actor} on {}", at.format("%Y-%m-%d %H:%M UTC")),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

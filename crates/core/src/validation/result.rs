//! Validation result and advisory types.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::request::DiscoveryKind;
use crate::types::{has_text, Date, YesNo};

/// Outcome of evaluating one draft. Recomputed on every call, never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub can_continue: bool,
    pub blocking_reasons: Vec<String>,
    pub advisories: Vec<Advisory>,
    /// Whether each selected discovery method's sub-form is complete on its
    /// own. Empty for other request groups.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub sub_type_validity: BTreeMap<DiscoveryKind, bool>,
}

impl ValidationResult {
    pub fn has_advisory(&self, code: AdvisoryCode) -> bool {
        self.advisories.iter().any(|a| a.code == code)
    }
}

/// Inline banner shown next to a question. Advisories never block on their
/// own; a blocking condition is also listed in `blocking_reasons`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Advisory {
    pub field: &'static str,
    pub code: AdvisoryCode,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AdvisoryCode {
    /// Exhibit contains personal identifying information.
    RedactPii,
    /// Exhibit flagged for inappropriate content.
    InappropriateContent,
    /// Confidential exhibit without a protective order.
    ProtectiveOrderRequired,
    /// Physical item answered yes to a hazard question.
    HazardFlagged,
    /// Discovery cutoff precedes the start date.
    ScheduleOutOfOrder,
    /// Sub-form has no enforced fields yet.
    PlaceholderValidation,
    /// Hearing request auto-set to No from the day count.
    HearingRequestUntimely,
    /// Hearing request dated before the order it appeals.
    HearingRequestBeforeOrder,
    /// A derived flag currently carries an ALJ override.
    AljOverride,
}

/// Accumulates blocking reasons and advisories while a draft is checked.
#[derive(Debug, Default)]
pub(crate) struct Checklist {
    reasons: Vec<String>,
    advisories: Vec<Advisory>,
    sub_types: BTreeMap<DiscoveryKind, bool>,
}

impl Checklist {
    pub(crate) fn block(&mut self, reason: impl Into<String>) {
        self.reasons.push(reason.into());
    }

    pub(crate) fn advise(
        &mut self,
        field: &'static str,
        code: AdvisoryCode,
        message: impl Into<String>,
    ) {
        self.advisories.push(Advisory {
            field,
            code,
            message: message.into(),
        });
    }

    pub(crate) fn require_text(&mut self, field: &str, value: &str) {
        if !has_text(value) {
            self.block(format!("'{field}' is required"));
        }
    }

    pub(crate) fn require_answer(&mut self, field: &str, value: Option<YesNo>) -> Option<YesNo> {
        if value.is_none() {
            self.block(format!("'{field}' must be answered"));
        }
        value
    }

    pub(crate) fn require_date(&mut self, field: &str, value: Option<Date>) {
        if value.is_none() {
            self.block(format!("'{field}' is required"));
        }
    }

    /// Fold a nested checklist in, prefixing its reasons with `scope`.
    pub(crate) fn absorb(&mut self, scope: &str, other: Checklist) {
        self.reasons
            .extend(other.reasons.into_iter().map(|r| format!("{scope}: {r}")));
        self.advisories.extend(other.advisories);
    }

    /// Fold in one discovery method's checklist and record whether it passed.
    pub(crate) fn absorb_sub_type(&mut self, kind: DiscoveryKind, other: Checklist) {
        self.sub_types.insert(kind, other.is_clear());
        self.absorb(kind.as_str(), other);
    }

    pub(crate) fn is_clear(&self) -> bool {
        self.reasons.is_empty()
    }

    pub(crate) fn finish(self) -> ValidationResult {
        ValidationResult {
            can_continue: self.reasons.is_empty(),
            blocking_reasons: self.reasons,
            advisories: self.advisories,
            sub_type_validity: self.sub_types,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_checklist_can_continue() {
        let result = Checklist::default().finish();
        assert!(result.can_continue);
        assert!(result.blocking_reasons.is_empty());
    }

    #[test]
    fn advisories_alone_do_not_block() {
        let mut checks = Checklist::default();
        checks.advise("hasPII", AdvisoryCode::RedactPii, "redact");
        let result = checks.finish();
        assert!(result.can_continue);
        assert!(result.has_advisory(AdvisoryCode::RedactPii));
    }

    #[test]
    fn require_helpers_block_on_missing_values() {
        let mut checks = Checklist::default();
        checks.require_text("outcome", "  ");
        checks.require_answer("hasPII", None);
        checks.require_date("startDate", None);
        let result = checks.finish();
        assert!(!result.can_continue);
        assert_eq!(result.blocking_reasons.len(), 3);
    }

    #[test]
    fn absorb_prefixes_nested_reasons() {
        let mut inner = Checklist::default();
        inner.require_text("purpose", "");
        let mut outer = Checklist::default();
        outer.absorb("inspection", inner);
        let result = outer.finish();
        assert_eq!(result.blocking_reasons, vec!["inspection: 'purpose' is required"]);
    }

    #[test]
    fn advisory_code_serializes_snake_case() {
        let json = serde_json::to_value(AdvisoryCode::ProtectiveOrderRequired).unwrap();
        assert_eq!(json, "protective_order_required");
    }
}

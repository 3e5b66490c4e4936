//! Entry points of the validation engine.

use serde_json::{Map, Value};

use super::discovery::check_discovery;
use super::exhibit::check_exhibit;
use super::result::{Checklist, ValidationResult};
use crate::fields::{draft_from_fields, FieldBag, KEY_DESCRIPTION, KEY_OUTCOME};
use crate::request::RequestDraft;

/// Evaluate a draft. `None` means no request group has been selected yet.
pub fn evaluate(draft: Option<&RequestDraft>) -> ValidationResult {
    let mut checks = Checklist::default();

    match draft {
        None => checks.block("A request group and type must be selected"),
        Some(RequestDraft::Motion(motion)) => checks.require_text(KEY_OUTCOME, &motion.outcome),
        Some(RequestDraft::Exhibit(exhibit)) => check_exhibit(exhibit, &mut checks),
        Some(RequestDraft::Discovery(discovery)) => check_discovery(discovery, &mut checks),
        Some(
            RequestDraft::Certificate(described)
            | RequestDraft::Pleading(described)
            | RequestDraft::Notices(described),
        ) => checks.require_text(KEY_DESCRIPTION, &described.description),
    }

    checks.finish()
}

/// Whether the step holding this draft may advance.
pub fn can_continue(draft: Option<&RequestDraft>) -> bool {
    evaluate(draft).can_continue
}

/// Evaluate a posted field bag.
///
/// An unselected or unknown group/type is reported as a blocking reason
/// rather than an error.
pub fn evaluate_fields(
    request_group: &str,
    request_type: &str,
    fields: &Map<String, Value>,
) -> ValidationResult {
    match draft_from_fields(request_group, request_type, FieldBag::new(fields)) {
        Ok(draft) => evaluate(Some(&draft)),
        Err(e) => {
            let mut checks = Checklist::default();
            checks.block(e.to_string());
            checks.finish()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::{DescribedRequest, MotionRequest};
    use serde_json::json;

    fn fields(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => Map::new(),
        }
    }

    #[test]
    fn no_group_cannot_continue() {
        assert!(!can_continue(None));
    }

    #[test]
    fn motion_depends_only_on_trimmed_outcome() {
        for (outcome, expected) in [("", false), ("   ", false), ("Dismiss", true), (" x ", true)] {
            let draft = RequestDraft::Motion(MotionRequest {
                motion_type: "Motion to Dismiss".into(),
                outcome: outcome.into(),
            });
            assert_eq!(can_continue(Some(&draft)), expected, "outcome {outcome:?}");
        }
    }

    #[test]
    fn described_groups_require_description() {
        let empty = DescribedRequest::default();
        let filled = DescribedRequest {
            request_type: "Petition".into(),
            description: "Appeal of plugging order".into(),
        };
        for wrap in [
            RequestDraft::Certificate as fn(DescribedRequest) -> RequestDraft,
            RequestDraft::Pleading,
            RequestDraft::Notices,
        ] {
            assert!(!can_continue(Some(&wrap(empty.clone()))));
            assert!(can_continue(Some(&wrap(filled.clone()))));
        }
    }

    #[test]
    fn evaluate_fields_reports_missing_group() {
        let result = evaluate_fields("", "", &Map::new());
        assert!(!result.can_continue);
        assert!(result.blocking_reasons[0].contains("must be selected"));
    }

    #[test]
    fn evaluate_fields_reports_unknown_exhibit_type() {
        let result = evaluate_fields("exhibit", "Hologram", &Map::new());
        assert!(!result.can_continue);
        assert!(result.blocking_reasons[0].contains("Invalid exhibit type"));
    }

    #[test]
    fn evaluate_fields_treats_malformed_values_as_missing() {
        let result = evaluate_fields("motion", "Other Motion", &fields(json!({ "outcome": 7 })));
        assert!(!result.can_continue);
    }

    #[test]
    fn confidential_without_order_blocks_regardless_of_other_fields() {
        let result = evaluate_fields(
            "exhibit",
            "Photograph",
            &fields(json!({
                "hasInappropriateContent": "no",
                "hasPII": "no",
                "hasConfidentialInfo": "yes",
                "hasProtectiveOrder": "no",
                "protectiveOrderId": "PO-1",
            })),
        );
        assert!(!result.can_continue);
    }

    #[test]
    fn discovery_with_incomplete_interrogatories_cannot_continue() {
        let result = evaluate_fields(
            "discovery",
            "",
            &fields(json!({
                "discoverySchedule": "expedited",
                "selectedDiscoveryTypes": ["interrogatories"],
                "startDate": "2024-03-01",
                "cutoffDate": "2024-05-01",
                "summary": "Well records",
                "interrogatories": {
                    "people": [{ "name": "A", "phone": "1", "email": "a@x" }],
                    "receiveDate": "2024-03-02",
                },
            })),
        );
        assert!(!result.can_continue);
        assert!(result.blocking_reasons[0].contains("replyDueDate"));
    }

    #[test]
    fn stale_sub_form_data_does_not_count() {
        let result = evaluate_fields(
            "discovery",
            "",
            &fields(json!({
                "discoverySchedule": "standard",
                "selectedDiscoveryTypes": [],
                "startDate": "2024-03-01",
                "cutoffDate": "2024-05-01",
                "summary": "Well records",
                "inspection": { "inspectionSubject": "Pad", "purpose": "Survey" },
            })),
        );
        assert!(!result.can_continue);
    }
}

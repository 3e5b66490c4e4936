//! Field-bag reader.
//!
//! The portal posts a flat JSON object of `camelCaseName -> value` for the
//! step being edited. This module converts that snapshot into a typed
//! [`RequestDraft`]. Reading is lenient: a missing or malformed value is
//! read as empty/unanswered and is later reported by validation, never as
//! an error here. Only the group (and, for exhibits, the type) must parse.

use serde_json::{Map, Value};

use crate::error::CoreError;
use crate::request::{
    ContactPerson, ContentScreening, Deposition, DescribedRequest, DiscoveryKind,
    DiscoveryRequest, DiscoverySelections, DocumentProduction, ExhibitRequest, ExhibitType,
    HazardAnswers, Inspection, Interrogatories, MotionRequest, OversizedDocument, PhysicalItem,
    RequestDraft, RequestGroup,
};
use crate::types::{Date, YesNo};

// ---------------------------------------------------------------------------
// Field key names
// ---------------------------------------------------------------------------

pub const KEY_OUTCOME: &str = "outcome";
pub const KEY_DESCRIPTION: &str = "description";

pub const KEY_HAS_INAPPROPRIATE_CONTENT: &str = "hasInappropriateContent";
pub const KEY_HAS_PII: &str = "hasPII";
pub const KEY_HAS_CONFIDENTIAL_INFO: &str = "hasConfidentialInfo";
pub const KEY_HAS_PROTECTIVE_ORDER: &str = "hasProtectiveOrder";
pub const KEY_PROTECTIVE_ORDER_ID: &str = "protectiveOrderId";
pub const KEY_DOCUMENT_TITLE: &str = "documentTitle";

pub const KEY_ITEM_CATEGORY: &str = "itemCategory";
pub const KEY_ITEM_NAME: &str = "itemName";
pub const KEY_ITEM_DESCRIPTION: &str = "itemDescription";
pub const KEY_ESTIMATED_SIZE: &str = "estimatedSize";
pub const KEY_ESTIMATED_WEIGHT: &str = "estimatedWeight";
pub const KEY_IS_HAZARDOUS: &str = "isHazardous";
pub const KEY_IS_PERISHABLE: &str = "isPerishable";
pub const KEY_IS_FRAGILE: &str = "isFragile";
pub const KEY_CONTAINS_BIOLOGICAL_MATERIAL: &str = "containsBiologicalMaterial";
pub const KEY_SPECIAL_HANDLING: &str = "specialHandling";
pub const KEY_HANDLING_DESCRIPTION: &str = "handlingDescription";
pub const KEY_JUSTIFICATION: &str = "justification";
pub const KEY_PHOTO: &str = "photo";

pub const KEY_DISCOVERY_SCHEDULE: &str = "discoverySchedule";
pub const KEY_SELECTED_DISCOVERY_TYPES: &str = "selectedDiscoveryTypes";
pub const KEY_START_DATE: &str = "startDate";
pub const KEY_CUTOFF_DATE: &str = "cutoffDate";
pub const KEY_SUMMARY: &str = "summary";

pub const KEY_PEOPLE: &str = "people";
pub const KEY_RECEIVE_DATE: &str = "receiveDate";
pub const KEY_REPLY_DUE_DATE: &str = "replyDueDate";
pub const KEY_DEPONENT: &str = "deponent";
pub const KEY_NECESSITY: &str = "necessity";
pub const KEY_COMPLETION_DATE: &str = "completionDate";
pub const KEY_INSPECTION_SUBJECT: &str = "inspectionSubject";
pub const KEY_PURPOSE: &str = "purpose";

// ---------------------------------------------------------------------------
// Lenient accessors
// ---------------------------------------------------------------------------

/// Read-only view over a JSON object of form fields.
#[derive(Debug, Clone, Copy)]
pub struct FieldBag<'a> {
    fields: Option<&'a Map<String, Value>>,
}

impl<'a> FieldBag<'a> {
    pub fn new(fields: &'a Map<String, Value>) -> Self {
        Self {
            fields: Some(fields),
        }
    }

    /// A bag from any JSON value; non-objects read as empty.
    pub fn from_value(value: &'a Value) -> Self {
        Self {
            fields: value.as_object(),
        }
    }

    fn get(&self, key: &str) -> Option<&'a Value> {
        self.fields.and_then(|f| f.get(key))
    }

    /// String value, or empty when absent or not a string.
    pub fn text(&self, key: &str) -> String {
        self.get(key)
            .and_then(Value::as_str)
            .map(String::from)
            .unwrap_or_default()
    }

    /// Yes/no answer from `"yes"`/`"no"` strings or JSON booleans.
    pub fn answer(&self, key: &str) -> Option<YesNo> {
        answer_from_value(self.get(key)?)
    }

    /// Calendar date from `YYYY-MM-DD`, or the date part of an RFC 3339
    /// timestamp.
    pub fn date(&self, key: &str) -> Option<Date> {
        parse_date(self.get(key)?.as_str()?)
    }

    /// List of strings; non-string entries are skipped.
    pub fn list(&self, key: &str) -> Vec<String> {
        self.get(key)
            .and_then(Value::as_array)
            .map(|arr| {
                arr.iter()
                    .filter_map(|v| v.as_str().map(String::from))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Nested object, or an empty bag.
    pub fn object(&self, key: &str) -> FieldBag<'a> {
        FieldBag {
            fields: self.get(key).and_then(Value::as_object),
        }
    }

    /// Reference to an uploaded file: either a non-empty string, or an
    /// object carrying a non-empty `name`.
    pub fn upload(&self, key: &str) -> Option<String> {
        let reference = match self.get(key)? {
            Value::String(s) => s.clone(),
            Value::Object(obj) => obj.get("name").and_then(Value::as_str)?.to_string(),
            _ => return None,
        };
        crate::types::has_text(&reference).then_some(reference)
    }

    /// Contact entries from an array of `{ name, phone, email }` objects.
    pub fn people(&self, key: &str) -> Vec<ContactPerson> {
        self.get(key)
            .and_then(Value::as_array)
            .map(|arr| {
                arr.iter()
                    .map(|entry| {
                        let bag = FieldBag::from_value(entry);
                        ContactPerson {
                            name: bag.text("name"),
                            phone: bag.text("phone"),
                            email: bag.text("email"),
                        }
                    })
                    .collect()
            })
            .unwrap_or_default()
    }
}

fn answer_from_value(value: &Value) -> Option<YesNo> {
    match value {
        Value::String(s) => YesNo::parse(s),
        Value::Bool(b) => Some(YesNo::from(*b)),
        _ => None,
    }
}

fn parse_date(raw: &str) -> Option<Date> {
    let raw = raw.trim();
    if let Ok(date) = Date::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    chrono::DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|ts| ts.date_naive())
}

/// Serde adapters that read typed fields the way [`FieldBag`] does.
///
/// Blank strings, `null` and values of the wrong shape read as unanswered
/// instead of rejecting the whole body.
pub mod lenient {
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    use crate::types::{Date, YesNo};

    pub fn answer<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<YesNo>, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(super::answer_from_value(&value))
    }

    pub fn date<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Date>, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(value.as_str().and_then(super::parse_date))
    }
}

// ---------------------------------------------------------------------------
// Draft construction
// ---------------------------------------------------------------------------

/// Build a typed draft from the posted group, type and field bag.
///
/// Errors only when no valid group is selected or, for exhibits, no valid
/// exhibit type is selected.
pub fn draft_from_fields(
    request_group: &str,
    request_type: &str,
    fields: FieldBag<'_>,
) -> Result<RequestDraft, CoreError> {
    let group = RequestGroup::from_str_value(request_group)?;

    let draft = match group {
        RequestGroup::Motion => RequestDraft::Motion(MotionRequest {
            motion_type: request_type.trim().to_string(),
            outcome: fields.text(KEY_OUTCOME),
        }),
        RequestGroup::Exhibit => {
            let exhibit_type = ExhibitType::from_str_value(request_type)?;
            RequestDraft::Exhibit(exhibit_from_fields(exhibit_type, fields))
        }
        RequestGroup::Discovery => RequestDraft::Discovery(discovery_from_fields(fields)),
        RequestGroup::Certificate => RequestDraft::Certificate(described(request_type, fields)),
        RequestGroup::Pleading => RequestDraft::Pleading(described(request_type, fields)),
        RequestGroup::Notices => RequestDraft::Notices(described(request_type, fields)),
    };

    Ok(draft)
}

fn described(request_type: &str, fields: FieldBag<'_>) -> DescribedRequest {
    DescribedRequest {
        request_type: request_type.trim().to_string(),
        description: fields.text(KEY_DESCRIPTION),
    }
}

fn screening_from_fields(fields: FieldBag<'_>) -> ContentScreening {
    ContentScreening {
        has_inappropriate_content: fields.answer(KEY_HAS_INAPPROPRIATE_CONTENT),
        has_pii: fields.answer(KEY_HAS_PII),
        has_confidential_info: fields.answer(KEY_HAS_CONFIDENTIAL_INFO),
        has_protective_order: fields.answer(KEY_HAS_PROTECTIVE_ORDER),
        protective_order_id: fields.text(KEY_PROTECTIVE_ORDER_ID),
    }
}

fn exhibit_from_fields(exhibit_type: ExhibitType, fields: FieldBag<'_>) -> ExhibitRequest {
    match exhibit_type {
        ExhibitType::Document => ExhibitRequest::Document(screening_from_fields(fields)),
        ExhibitType::Photograph => ExhibitRequest::Photograph(screening_from_fields(fields)),
        ExhibitType::Recording => ExhibitRequest::Recording(screening_from_fields(fields)),
        ExhibitType::OversizedDocument => ExhibitRequest::OversizedDocument(OversizedDocument {
            document_title: fields.text(KEY_DOCUMENT_TITLE),
            screening: screening_from_fields(fields),
        }),
        ExhibitType::PhysicalItem => ExhibitRequest::PhysicalItem(PhysicalItem {
            item_category: fields.text(KEY_ITEM_CATEGORY),
            item_name: fields.text(KEY_ITEM_NAME),
            item_description: fields.text(KEY_ITEM_DESCRIPTION),
            estimated_size: fields.text(KEY_ESTIMATED_SIZE),
            estimated_weight: fields.text(KEY_ESTIMATED_WEIGHT),
            hazards: HazardAnswers {
                is_hazardous: fields.answer(KEY_IS_HAZARDOUS),
                is_perishable: fields.answer(KEY_IS_PERISHABLE),
                is_fragile: fields.answer(KEY_IS_FRAGILE),
                contains_biological_material: fields.answer(KEY_CONTAINS_BIOLOGICAL_MATERIAL),
                special_handling: fields.answer(KEY_SPECIAL_HANDLING),
            },
            handling_description: fields.text(KEY_HANDLING_DESCRIPTION),
            justification: fields.text(KEY_JUSTIFICATION),
            photo: fields.upload(KEY_PHOTO),
        }),
    }
}

/// Only sub-forms of selected methods are read; data left behind under a
/// deselected method's key is ignored.
fn discovery_from_fields(fields: FieldBag<'_>) -> DiscoveryRequest {
    let mut selections = DiscoverySelections::default();

    for key in fields.list(KEY_SELECTED_DISCOVERY_TYPES) {
        let Some(kind) = DiscoveryKind::from_str_value(&key) else {
            continue;
        };
        let sub = fields.object(kind.as_str());
        match kind {
            DiscoveryKind::Interrogatories => {
                selections.interrogatories = Some(Interrogatories {
                    people: sub.people(KEY_PEOPLE),
                    receive_date: sub.date(KEY_RECEIVE_DATE),
                    reply_due_date: sub.date(KEY_REPLY_DUE_DATE),
                });
            }
            DiscoveryKind::DocumentProduction => {
                selections.document_production = Some(DocumentProduction {});
            }
            DiscoveryKind::Deposition => {
                selections.deposition = Some(Deposition {
                    people: sub.people(KEY_PEOPLE),
                    deponent: sub.text(KEY_DEPONENT),
                    necessity: sub.text(KEY_NECESSITY),
                    completion_date: sub.date(KEY_COMPLETION_DATE),
                });
            }
            DiscoveryKind::Inspection => {
                selections.inspection = Some(Inspection {
                    inspection_subject: sub.text(KEY_INSPECTION_SUBJECT),
                    purpose: sub.text(KEY_PURPOSE),
                });
            }
        }
    }

    DiscoveryRequest {
        discovery_schedule: fields.text(KEY_DISCOVERY_SCHEDULE),
        start_date: fields.date(KEY_START_DATE),
        cutoff_date: fields.date(KEY_CUTOFF_DATE),
        summary: fields.text(KEY_SUMMARY),
        selections,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use serde_json::json;

    fn bag(value: &Value) -> FieldBag<'_> {
        FieldBag::from_value(value)
    }

    #[test]
    fn text_reads_strings_only() {
        let v = json!({ "a": "hello", "b": 42, "c": null });
        let b = bag(&v);
        assert_eq!(b.text("a"), "hello");
        assert_eq!(b.text("b"), "");
        assert_eq!(b.text("c"), "");
        assert_eq!(b.text("missing"), "");
    }

    #[test]
    fn answer_accepts_strings_and_booleans() {
        let v = json!({ "s": "Yes", "t": true, "f": false, "e": "", "n": 1 });
        let b = bag(&v);
        assert_eq!(b.answer("s"), Some(YesNo::Yes));
        assert_eq!(b.answer("t"), Some(YesNo::Yes));
        assert_eq!(b.answer("f"), Some(YesNo::No));
        assert_eq!(b.answer("e"), None);
        assert_eq!(b.answer("n"), None);
    }

    #[test]
    fn date_accepts_plain_dates_and_timestamps() {
        let v = json!({
            "d": "2024-01-31",
            "ts": "2024-02-05T10:30:00Z",
            "bad": "31/01/2024",
        });
        let b = bag(&v);
        assert_eq!(b.date("d"), Date::from_ymd_opt(2024, 1, 31));
        assert_eq!(b.date("ts"), Date::from_ymd_opt(2024, 2, 5));
        assert_eq!(b.date("bad"), None);
    }

    #[test]
    fn upload_accepts_string_or_named_object() {
        let v = json!({
            "a": "photo.jpg",
            "b": { "name": "item.png", "size": 100 },
            "c": "  ",
            "d": { "size": 100 },
        });
        let b = bag(&v);
        assert_eq!(b.upload("a").as_deref(), Some("photo.jpg"));
        assert_eq!(b.upload("b").as_deref(), Some("item.png"));
        assert_eq!(b.upload("c"), None);
        assert_eq!(b.upload("d"), None);
    }

    #[test]
    fn non_object_bag_reads_as_empty() {
        let v = json!("not an object");
        let b = bag(&v);
        assert_eq!(b.text(KEY_OUTCOME), "");
        assert!(b.list(KEY_SELECTED_DISCOVERY_TYPES).is_empty());
    }

    #[test]
    fn motion_draft_from_fields() {
        let v = json!({ "outcome": "Compel answers" });
        let draft = draft_from_fields("motion", "Motion to Compel", bag(&v)).unwrap();
        assert_matches!(draft, RequestDraft::Motion(m) if m.outcome == "Compel answers");
    }

    #[test]
    fn missing_group_is_an_error() {
        let v = json!({});
        assert!(draft_from_fields("", "", bag(&v)).is_err());
        assert!(draft_from_fields("appeal", "", bag(&v)).is_err());
    }

    #[test]
    fn exhibit_requires_known_type() {
        let v = json!({});
        assert!(draft_from_fields("exhibit", "", bag(&v)).is_err());
        assert!(draft_from_fields("exhibit", "Sculpture", bag(&v)).is_err());
    }

    #[test]
    fn oversized_document_reads_title_and_screening() {
        let v = json!({
            "documentTitle": "Site map",
            "hasPII": "no",
            "hasConfidentialInfo": "yes",
        });
        let draft = draft_from_fields("exhibit", "Oversized Document", bag(&v)).unwrap();
        assert_matches!(
            draft,
            RequestDraft::Exhibit(ExhibitRequest::OversizedDocument(doc))
                if doc.document_title == "Site map"
                    && doc.screening.has_pii == Some(YesNo::No)
                    && doc.screening.has_confidential_info == Some(YesNo::Yes)
                    && doc.screening.has_inappropriate_content.is_none()
        );
    }

    #[test]
    fn physical_item_reads_hazards_and_photo() {
        let v = json!({
            "itemName": "Valve",
            "isHazardous": "yes",
            "specialHandling": false,
            "photo": { "name": "valve.jpg" },
        });
        let draft = draft_from_fields("exhibit", "Physical Item", bag(&v)).unwrap();
        let RequestDraft::Exhibit(ExhibitRequest::PhysicalItem(item)) = draft else {
            panic!("expected physical item");
        };
        assert_eq!(item.item_name, "Valve");
        assert_eq!(item.hazards.is_hazardous, Some(YesNo::Yes));
        assert_eq!(item.hazards.special_handling, Some(YesNo::No));
        assert_eq!(item.hazards.is_fragile, None);
        assert_eq!(item.photo.as_deref(), Some("valve.jpg"));
    }

    #[test]
    fn discovery_reads_only_selected_sub_forms() {
        let v = json!({
            "discoverySchedule": "standard",
            "selectedDiscoveryTypes": ["interrogatories", "bogus"],
            "interrogatories": {
                "people": [{ "name": "A", "phone": "1", "email": "a@x" }],
                "receiveDate": "2024-01-01",
            },
            "inspection": { "inspectionSubject": "well pad", "purpose": "survey" },
        });
        let draft = draft_from_fields("discovery", "", bag(&v)).unwrap();
        let RequestDraft::Discovery(discovery) = draft else {
            panic!("expected discovery");
        };
        assert_eq!(discovery.discovery_schedule, "standard");
        assert_eq!(
            discovery.selections.selected(),
            vec![DiscoveryKind::Interrogatories]
        );
        let interrogatories = discovery.selections.interrogatories.unwrap();
        assert_eq!(interrogatories.people.len(), 1);
        assert!(interrogatories.reply_due_date.is_none());
        assert!(discovery.selections.inspection.is_none());
    }

    #[test]
    fn described_groups_read_description() {
        let v = json!({ "description": "Served by mail" });
        for group in ["certificate", "pleading", "notices"] {
            let draft = draft_from_fields(group, "Any", bag(&v)).unwrap();
            assert_eq!(draft.group().as_str(), group);
            assert_matches!(
                draft,
                RequestDraft::Certificate(d) | RequestDraft::Pleading(d) | RequestDraft::Notices(d)
                    if d.description == "Served by mail"
            );
        }
    }
}

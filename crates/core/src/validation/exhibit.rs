//! Exhibit question sets.

use super::result::{AdvisoryCode, Checklist};
use crate::fields::{
    KEY_DOCUMENT_TITLE, KEY_ESTIMATED_SIZE, KEY_ESTIMATED_WEIGHT, KEY_HANDLING_DESCRIPTION,
    KEY_HAS_CONFIDENTIAL_INFO, KEY_HAS_INAPPROPRIATE_CONTENT, KEY_HAS_PII,
    KEY_HAS_PROTECTIVE_ORDER, KEY_ITEM_CATEGORY, KEY_ITEM_DESCRIPTION, KEY_ITEM_NAME,
    KEY_JUSTIFICATION, KEY_PHOTO, KEY_PROTECTIVE_ORDER_ID, KEY_SPECIAL_HANDLING,
};
use crate::request::{ContentScreening, ExhibitRequest, PhysicalItem};
use crate::types::YesNo;

pub const PII_ADVISORY: &str =
    "This exhibit contains personal identifying information. REDACT the information and re-submit.";

pub const INAPPROPRIATE_CONTENT_ADVISORY: &str =
    "Exhibits with inappropriate content may be rejected or sealed on review.";

pub const PROTECTIVE_ORDER_ADVISORY: &str =
    "Confidential information cannot be submitted without a protective order. \
     File a Motion for Protective Order first.";

pub(crate) fn check_exhibit(exhibit: &ExhibitRequest, checks: &mut Checklist) {
    match exhibit {
        ExhibitRequest::Document(screening)
        | ExhibitRequest::Photograph(screening)
        | ExhibitRequest::Recording(screening) => check_screening(screening, checks),
        ExhibitRequest::OversizedDocument(doc) => {
            check_screening(&doc.screening, checks);
            checks.require_text(KEY_DOCUMENT_TITLE, &doc.document_title);
        }
        ExhibitRequest::PhysicalItem(item) => check_physical_item(item, checks),
    }
}

/// Screening questions for documents, photographs and recordings.
///
/// The protective order questions only apply once confidential content is
/// declared. A declared-confidential exhibit without an order cannot
/// proceed.
pub(crate) fn check_screening(screening: &ContentScreening, checks: &mut Checklist) {
    let inappropriate =
        checks.require_answer(KEY_HAS_INAPPROPRIATE_CONTENT, screening.has_inappropriate_content);
    let pii = checks.require_answer(KEY_HAS_PII, screening.has_pii);
    let confidential =
        checks.require_answer(KEY_HAS_CONFIDENTIAL_INFO, screening.has_confidential_info);

    if inappropriate == Some(YesNo::Yes) {
        checks.advise(
            KEY_HAS_INAPPROPRIATE_CONTENT,
            AdvisoryCode::InappropriateContent,
            INAPPROPRIATE_CONTENT_ADVISORY,
        );
    }

    if pii == Some(YesNo::Yes) {
        checks.advise(KEY_HAS_PII, AdvisoryCode::RedactPii, PII_ADVISORY);
    }

    if confidential != Some(YesNo::Yes) {
        return;
    }

    match checks.require_answer(KEY_HAS_PROTECTIVE_ORDER, screening.has_protective_order) {
        Some(YesNo::Yes) => {
            checks.require_text(KEY_PROTECTIVE_ORDER_ID, &screening.protective_order_id);
        }
        Some(YesNo::No) => {
            checks.block("A protective order is required to submit confidential information");
            checks.advise(
                KEY_HAS_PROTECTIVE_ORDER,
                AdvisoryCode::ProtectiveOrderRequired,
                PROTECTIVE_ORDER_ADVISORY,
            );
        }
        None => {}
    }
}

pub(crate) fn check_physical_item(item: &PhysicalItem, checks: &mut Checklist) {
    checks.require_text(KEY_ITEM_CATEGORY, &item.item_category);
    checks.require_text(KEY_ITEM_NAME, &item.item_name);
    checks.require_text(KEY_ITEM_DESCRIPTION, &item.item_description);
    checks.require_text(KEY_ESTIMATED_SIZE, &item.estimated_size);
    checks.require_text(KEY_ESTIMATED_WEIGHT, &item.estimated_weight);

    for (field, answer) in item.hazards.answers() {
        if checks.require_answer(field, answer) == Some(YesNo::Yes) && field != KEY_SPECIAL_HANDLING
        {
            checks.advise(
                field,
                AdvisoryCode::HazardFlagged,
                "Bureau staff will contact you to arrange safe delivery and storage of this item.",
            );
        }
    }

    if item.hazards.special_handling == Some(YesNo::Yes) {
        checks.require_text(KEY_HANDLING_DESCRIPTION, &item.handling_description);
    }

    checks.require_text(KEY_JUSTIFICATION, &item.justification);

    if item.photo.is_none() {
        checks.block(format!("'{KEY_PHOTO}' must be uploaded"));
    }
}

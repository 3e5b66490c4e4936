//! Discovery request and per-method sub-form checks.

use super::result::{AdvisoryCode, Checklist};
use crate::fields::{
    KEY_COMPLETION_DATE, KEY_CUTOFF_DATE, KEY_DEPONENT, KEY_DISCOVERY_SCHEDULE,
    KEY_INSPECTION_SUBJECT, KEY_NECESSITY, KEY_PEOPLE, KEY_PURPOSE, KEY_RECEIVE_DATE,
    KEY_REPLY_DUE_DATE, KEY_SELECTED_DISCOVERY_TYPES, KEY_START_DATE, KEY_SUMMARY,
};
use crate::request::{
    ContactPerson, Deposition, DiscoveryKind, DiscoveryRequest, Inspection, Interrogatories,
};
use crate::schedule;

pub(crate) fn check_discovery(request: &DiscoveryRequest, checks: &mut Checklist) {
    checks.require_text(KEY_DISCOVERY_SCHEDULE, &request.discovery_schedule);

    let selected = request.selections.selected();
    if selected.is_empty() {
        checks.block(format!(
            "'{KEY_SELECTED_DISCOVERY_TYPES}' must include at least one discovery type"
        ));
    }

    checks.require_date(KEY_START_DATE, request.start_date);
    checks.require_date(KEY_CUTOFF_DATE, request.cutoff_date);
    checks.require_text(KEY_SUMMARY, &request.summary);

    if let (Some(start), Some(cutoff)) = (request.start_date, request.cutoff_date) {
        if let Err(e) = schedule::validate_schedule(start, cutoff) {
            checks.advise(KEY_CUTOFF_DATE, AdvisoryCode::ScheduleOutOfOrder, e.to_string());
        }
    }

    for kind in selected {
        let mut sub = Checklist::default();
        check_sub_type(request, kind, &mut sub);
        checks.absorb_sub_type(kind, sub);
    }
}

fn check_sub_type(request: &DiscoveryRequest, kind: DiscoveryKind, checks: &mut Checklist) {
    let selections = &request.selections;
    match kind {
        DiscoveryKind::Interrogatories => {
            if let Some(form) = &selections.interrogatories {
                check_interrogatories(form, checks);
            }
        }
        DiscoveryKind::DocumentProduction => {
            checks.advise(
                kind.as_str(),
                AdvisoryCode::PlaceholderValidation,
                "Document production has no required fields yet; \
                 describe the documents in the summary.",
            );
        }
        DiscoveryKind::Deposition => {
            if let Some(form) = &selections.deposition {
                check_deposition(form, checks);
            }
        }
        DiscoveryKind::Inspection => {
            if let Some(form) = &selections.inspection {
                check_inspection(form, checks);
            }
        }
    }
}

fn require_contact(people: &[ContactPerson], checks: &mut Checklist) {
    if !people.iter().any(ContactPerson::is_complete) {
        checks.block(format!(
            "'{KEY_PEOPLE}' must include at least one person with name, phone and email"
        ));
    }
}

fn check_interrogatories(form: &Interrogatories, checks: &mut Checklist) {
    require_contact(&form.people, checks);
    checks.require_date(KEY_RECEIVE_DATE, form.receive_date);
    checks.require_date(KEY_REPLY_DUE_DATE, form.reply_due_date);
}

fn check_deposition(form: &Deposition, checks: &mut Checklist) {
    require_contact(&form.people, checks);
    checks.require_text(KEY_DEPONENT, &form.deponent);
    checks.require_text(KEY_NECESSITY, &form.necessity);
    checks.require_date(KEY_COMPLETION_DATE, form.completion_date);
}

fn check_inspection(form: &Inspection, checks: &mut Checklist) {
    checks.require_text(KEY_INSPECTION_SUBJECT, &form.inspection_subject);
    checks.require_text(KEY_PURPOSE, &form.purpose);
}

//! Hearings intake core.
//!
//! Pure domain logic for the intake portal and the staff case screen:
//! request drafts and their validation, case-question eligibility flags with
//! ALJ overrides, wizard navigation, and discovery schedule rules. No I/O.

pub mod calendar;
pub mod case_questions;
pub mod error;
pub mod fields;
pub mod request;
pub mod schedule;
pub mod types;
pub mod validation;
pub mod wizard;

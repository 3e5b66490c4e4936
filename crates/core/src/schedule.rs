//! Discovery schedule tracking for the staff case-management screen.
//!
//! Deadline status of a discovery cutoff, schedule ordering, and extension
//! request checks.

use serde::{Deserialize, Serialize};

use crate::calendar::days_between;
use crate::error::CoreError;
use crate::types::{has_text, Date};

/// Default window, in days, in which an upcoming cutoff counts as due soon.
pub const DEFAULT_DUE_SOON_DAYS: i64 = 7;

/// Where a discovery cutoff stands relative to today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeadlineStatus {
    Overdue,
    DueToday,
    DueSoon,
    OnTrack,
}

impl DeadlineStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Overdue => "overdue",
            Self::DueToday => "due_today",
            Self::DueSoon => "due_soon",
            Self::OnTrack => "on_track",
        }
    }
}

/// Deadline status plus the signed day count it was derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeadlineReport {
    pub status: DeadlineStatus,
    /// Days from today to the cutoff; negative once overdue.
    pub days_remaining: i64,
}

/// Classify a cutoff date. `due_soon_days` is inclusive.
pub fn deadline_status(cutoff: Date, today: Date, due_soon_days: i64) -> DeadlineReport {
    let days_remaining = days_between(today, cutoff);
    let status = match days_remaining {
        d if d < 0 => DeadlineStatus::Overdue,
        0 => DeadlineStatus::DueToday,
        d if d <= due_soon_days => DeadlineStatus::DueSoon,
        _ => DeadlineStatus::OnTrack,
    };
    DeadlineReport {
        status,
        days_remaining,
    }
}

/// A discovery period must not end before it starts.
pub fn validate_schedule(start: Date, cutoff: Date) -> Result<(), CoreError> {
    if cutoff < start {
        return Err(CoreError::Validation(format!(
            "Discovery cutoff {cutoff} is before the start date {start}"
        )));
    }
    Ok(())
}

/// Validate a request to extend a discovery cutoff.
///
/// The requested cutoff must be strictly later than the current one and a
/// reason must be given. Returns the number of days added.
pub fn validate_extension(
    current_cutoff: Date,
    requested_cutoff: Date,
    reason: &str,
) -> Result<i64, CoreError> {
    if !has_text(reason) {
        return Err(CoreError::Validation(
            "An extension request must state a reason".to_string(),
        ));
    }

    let added = days_between(current_cutoff, requested_cutoff);
    if added <= 0 {
        return Err(CoreError::Validation(format!(
            "Requested cutoff {requested_cutoff} must be after the current cutoff {current_cutoff}"
        )));
    }

    Ok(added)
}

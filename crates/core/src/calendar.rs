//! Day-count arithmetic shared by case questions and discovery schedules.

use crate::types::Date;

/// Whole days from `from` to `to`. Negative when `to` precedes `from`.
pub fn days_between(from: Date, to: Date) -> i64 {
    (to - from).num_days()
}

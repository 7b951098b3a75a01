//! Projection result model.
//!
//! One output row per evaluated inspection: how many full interval cycles
//! fit in the window, the anchored last-occurrence date, and the overdue
//! classification against the projection's reference date.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One projected inspection.
///
/// `next_due_date` and `days_overdue` are derived quantities, materialized
/// at projection time against the caller-supplied reference date so the
/// presentation layer reads them without recomputation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProjectionResult {
    /// Inspection label, copied from the source record.
    pub inspection_type: String,
    /// Classification level, copied from the source record.
    pub level: String,
    /// Day interval the projection used.
    pub interval_days: f64,
    /// Number of complete interval cycles within the window span.
    pub occurrence_count: u32,
    /// Last interval boundary at or before the window end, anchored to
    /// the window start.
    pub last_occurrence_date: NaiveDate,
    /// `last_occurrence_date` plus one interval.
    pub next_due_date: NaiveDate,
    /// Days past due at the reference date; zero when current.
    pub days_overdue: i64,
}

impl ProjectionResult {
    /// Whether the next occurrence was already due at the reference date.
    pub fn is_overdue(&self) -> bool {
        self.days_overdue > 0
    }

    /// Whether at least one full interval cycle fit in the window.
    ///
    /// Rows without a completed cycle stay in the projection table but are
    /// excluded from the due/overdue listing.
    pub fn has_occurrences(&self) -> bool {
        self.occurrence_count > 0
    }
}

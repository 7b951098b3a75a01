//! Due/overdue report over projection results.
//!
//! The "next inspections" listing: one entry per inspection that completed
//! at least one interval cycle in the window, classified as on-time or
//! overdue. Rows with zero occurrences stay in the projection table but do
//! not appear here.
//!
//! The report performs no arithmetic of its own beyond counting; the
//! overdue classification is already materialized on each
//! [`ProjectionResult`].

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::ProjectionResult;

/// On-time/overdue classification of one projected inspection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum DueStatus {
    /// Next due date is at or after the reference date.
    OnTime,
    /// Next due date passed; carries the delay in days.
    Overdue {
        /// Days elapsed since the due date.
        days: i64,
    },
}

/// One line of the due listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DueEntry {
    /// Inspection label.
    pub inspection_type: String,
    /// Classification level.
    pub level: String,
    /// When the inspection next falls due.
    pub next_due_date: NaiveDate,
    /// On-time or overdue.
    pub status: DueStatus,
}

impl DueEntry {
    /// Whether this entry is overdue.
    pub fn is_overdue(&self) -> bool {
        matches!(self.status, DueStatus::Overdue { .. })
    }

    /// Narrative line for the due listing, dates in dd/mm/yyyy.
    pub fn describe(&self) -> String {
        let due = self.next_due_date.format("%d/%m/%Y");
        match self.status {
            DueStatus::Overdue { days } => format!(
                "Overdue {days} days | {} (was due {due})",
                self.inspection_type
            ),
            DueStatus::OnTime => format!(
                "On schedule | {} (next due {due})",
                self.inspection_type
            ),
        }
    }
}

/// The due/overdue listing compiled from a projection run.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DueReport {
    /// Entries in projection order (ascending interval).
    pub entries: Vec<DueEntry>,
}

impl DueReport {
    /// Compiles the listing from projection results.
    ///
    /// Only rows with at least one completed interval cycle are listed;
    /// upcoming-but-never-due inspections are a table concern, not a due
    /// listing concern.
    pub fn compile(results: &[ProjectionResult]) -> Self {
        let entries = results
            .iter()
            .filter(|r| r.has_occurrences())
            .map(|r| DueEntry {
                inspection_type: r.inspection_type.clone(),
                level: r.level.clone(),
                next_due_date: r.next_due_date,
                status: if r.is_overdue() {
                    DueStatus::Overdue {
                        days: r.days_overdue,
                    }
                } else {
                    DueStatus::OnTime
                },
            })
            .collect();
        Self { entries }
    }

    /// Number of overdue entries.
    pub fn overdue_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_overdue()).count()
    }

    /// Number of on-time entries.
    pub fn on_time_count(&self) -> usize {
        self.entries.len() - self.overdue_count()
    }

    /// Whether every listed inspection is on time.
    pub fn is_all_current(&self) -> bool {
        self.overdue_count() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn result(
        inspection_type: &str,
        occurrence_count: u32,
        next_due_date: NaiveDate,
        days_overdue: i64,
    ) -> ProjectionResult {
        ProjectionResult {
            inspection_type: inspection_type.into(),
            level: "N2".into(),
            interval_days: 100.0,
            occurrence_count,
            last_occurrence_date: date(2024, 4, 10),
            next_due_date,
            days_overdue,
        }
    }

    #[test]
    fn test_compile_skips_zero_occurrence_rows() {
        let results = vec![
            result("Listed", 2, date(2024, 7, 19), 0),
            result("Never due", 0, date(2026, 1, 1), 0),
        ];

        let report = DueReport::compile(&results);
        assert_eq!(report.entries.len(), 1);
        assert_eq!(report.entries[0].inspection_type, "Listed");
    }

    #[test]
    fn test_status_split() {
        let results = vec![
            result("Late check", 1, date(2024, 7, 19), 166),
            result("Current check", 1, date(2025, 3, 1), 0),
        ];

        let report = DueReport::compile(&results);
        assert_eq!(report.overdue_count(), 1);
        assert_eq!(report.on_time_count(), 1);
        assert!(!report.is_all_current());
        assert_eq!(
            report.entries[0].status,
            DueStatus::Overdue { days: 166 }
        );
        assert_eq!(report.entries[1].status, DueStatus::OnTime);
    }

    #[test]
    fn test_describe_lines() {
        let report = DueReport::compile(&[
            result("Phase inspection", 1, date(2024, 7, 19), 166),
            result("Corrosion survey", 1, date(2025, 3, 1), 0),
        ]);

        assert_eq!(
            report.entries[0].describe(),
            "Overdue 166 days | Phase inspection (was due 19/07/2024)"
        );
        assert_eq!(
            report.entries[1].describe(),
            "On schedule | Corrosion survey (next due 01/03/2025)"
        );
    }

    #[test]
    fn test_empty_report() {
        let report = DueReport::compile(&[]);
        assert!(report.entries.is_empty());
        assert!(report.is_all_current());
        assert_eq!(report.overdue_count(), 0);
        assert_eq!(report.on_time_count(), 0);
    }
}

//! Inspection due-date projector.
//!
//! # Algorithm
//!
//! For each catalog record with a positive day interval:
//!
//! 1. `occurrence_count = floor(total_days / interval_days)` — complete
//!    interval cycles that fit in the window span.
//! 2. `last_occurrence_date = start_date + interval_days * occurrence_count`
//!    days — the last interval boundary at or before the window end,
//!    anchored to the window start.
//! 3. `next_due_date = last_occurrence_date + interval_days` days.
//! 4. `days_overdue = max(0, as_of - next_due_date)`.
//!
//! Records with a zero or negative interval produce no row. Results are
//! sorted ascending by interval, stable for ties.
//!
//! # Anchor Policy
//!
//! Two anchor policies exist for the last occurrence: scale by the number
//! of completed cycles (used here), or always sit one interval after the
//! window start. They diverge whenever more than one cycle fits; the scaled
//! anchor is canonical in this crate. See DESIGN.md.
//!
//! # Determinism
//!
//! The reference date is an explicit parameter, never the system clock.
//! Identical inputs always produce identical output.

use chrono::{Duration, NaiveDate};

use crate::models::{EvaluationWindow, InspectionRecord, InvalidWindow, ProjectionResult};

/// Projects every recurring inspection over the evaluation window.
///
/// `as_of` is the reference "today" used to classify each row as on-time
/// or overdue. An empty `records` slice yields an empty vector; only a
/// malformed window is an error, and no partial results are returned.
///
/// # Example
///
/// ```
/// use aeroinspect::models::{EvaluationWindow, InspectionRecord};
/// use aeroinspect::projector::project_inspections;
/// use chrono::NaiveDate;
///
/// let records = vec![
///     InspectionRecord::new("F-5", "Phase inspection").with_interval_days(100.0),
/// ];
/// let window = EvaluationWindow::new(
///     NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(),
/// );
/// let as_of = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
///
/// let results = project_inspections(&records, &window, as_of).unwrap();
/// assert_eq!(results[0].occurrence_count, 3);
/// ```
pub fn project_inspections(
    records: &[InspectionRecord],
    window: &EvaluationWindow,
    as_of: NaiveDate,
) -> Result<Vec<ProjectionResult>, InvalidWindow> {
    window.validate()?;
    let total_days = window.total_days();

    let mut results: Vec<ProjectionResult> = records
        .iter()
        .filter(|r| r.is_recurring())
        .map(|r| project_record(r, window.start_date, total_days, as_of))
        .collect();

    // Stable sort keeps catalog order for equal intervals
    results.sort_by(|a, b| a.interval_days.total_cmp(&b.interval_days));
    Ok(results)
}

/// Projects one recurring record. Caller guarantees `interval_days > 0`
/// and `total_days >= 0`.
fn project_record(
    record: &InspectionRecord,
    start_date: NaiveDate,
    total_days: i64,
    as_of: NaiveDate,
) -> ProjectionResult {
    let interval = record.interval_days;
    let occurrence_count = (total_days as f64 / interval).floor() as u32;

    let last_occurrence_date =
        start_date + Duration::days(whole_days(interval * f64::from(occurrence_count)));
    let next_due_date = last_occurrence_date + Duration::days(whole_days(interval));
    let days_overdue = (as_of - next_due_date).num_days().max(0);

    ProjectionResult {
        inspection_type: record.inspection_type.clone(),
        level: record.level.clone(),
        interval_days: interval,
        occurrence_count,
        last_occurrence_date,
        next_due_date,
        days_overdue,
    }
}

/// Truncates a fractional day count for date arithmetic.
///
/// Matches spreadsheet-era behavior: adding a fractional number of days to
/// a calendar date discards the partial day.
fn whole_days(days: f64) -> i64 {
    days.floor() as i64
}

/// Due-date projector with a configured reference date.
///
/// Thin wrapper over [`project_inspections`] for callers that evaluate
/// several projects against the same "today".
#[derive(Debug, Clone)]
pub struct Projector {
    as_of: NaiveDate,
}

impl Projector {
    /// Creates a projector classifying overdue status against `as_of`.
    pub fn new(as_of: NaiveDate) -> Self {
        Self { as_of }
    }

    /// The configured reference date.
    pub fn as_of(&self) -> NaiveDate {
        self.as_of
    }

    /// Projects the given records over the window.
    pub fn project(
        &self,
        records: &[InspectionRecord],
        window: &EvaluationWindow,
    ) -> Result<Vec<ProjectionResult>, InvalidWindow> {
        project_inspections(records, window, self.as_of)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn year_2024_window() -> EvaluationWindow {
        EvaluationWindow::new(date(2024, 1, 1), date(2024, 12, 31))
    }

    fn record(inspection_type: &str, interval_days: f64) -> InspectionRecord {
        InspectionRecord::new("F-5", inspection_type)
            .with_level("N2")
            .with_interval_days(interval_days)
    }

    #[test]
    fn test_full_year_hundred_day_interval() {
        // 365-day span, 100-day interval: three complete cycles
        let records = vec![record("Phase inspection", 100.0)];
        let results =
            project_inspections(&records, &year_2024_window(), date(2024, 6, 1)).unwrap();

        assert_eq!(results.len(), 1);
        let r = &results[0];
        assert_eq!(r.occurrence_count, 3);
        assert_eq!(r.last_occurrence_date, date(2024, 1, 1) + Duration::days(300));
        assert_eq!(r.last_occurrence_date, date(2024, 10, 27));
        assert_eq!(r.next_due_date, date(2025, 2, 4));
        assert!(!r.is_overdue());
        assert_eq!(r.days_overdue, 0);
    }

    #[test]
    fn test_zero_interval_excluded() {
        let records = vec![
            record("Recurring check", 30.0),
            record("One-off bulletin", 0.0),
            record("Bad row", -10.0),
        ];
        let results =
            project_inspections(&records, &year_2024_window(), date(2024, 6, 1)).unwrap();

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].inspection_type, "Recurring check");
    }

    #[test]
    fn test_overdue_classification() {
        // 105-day span, 100-day interval: one cycle, last = start + 100
        // (2024-04-10), next due 2024-07-19. 166 days before 2025-01-01.
        let window = EvaluationWindow::new(date(2024, 1, 1), date(2024, 4, 15));
        let records = vec![record("Phase inspection", 100.0)];

        let results = project_inspections(&records, &window, date(2025, 1, 1)).unwrap();
        let r = &results[0];
        assert_eq!(r.occurrence_count, 1);
        assert_eq!(r.last_occurrence_date, date(2024, 4, 10));
        assert_eq!(r.next_due_date, date(2024, 7, 19));
        assert!(r.is_overdue());
        assert_eq!(r.days_overdue, 166);
    }

    #[test]
    fn test_due_today_is_not_overdue() {
        // Overdue requires as_of strictly after the next due date
        let window = EvaluationWindow::new(date(2024, 1, 1), date(2024, 4, 15));
        let records = vec![record("Phase inspection", 100.0)];

        let results = project_inspections(&records, &window, date(2024, 7, 19)).unwrap();
        assert!(!results[0].is_overdue());
        assert_eq!(results[0].days_overdue, 0);

        let results = project_inspections(&records, &window, date(2024, 7, 20)).unwrap();
        assert!(results[0].is_overdue());
        assert_eq!(results[0].days_overdue, 1);
    }

    #[test]
    fn test_zero_span_window() {
        // start == end: every record projects zero occurrences
        let window = EvaluationWindow::new(date(2024, 6, 15), date(2024, 6, 15));
        let records = vec![record("Check A", 25.0), record("Check B", 300.0)];

        let results = project_inspections(&records, &window, date(2024, 6, 15)).unwrap();
        assert_eq!(results.len(), 2);
        for r in &results {
            assert_eq!(r.occurrence_count, 0);
            assert_eq!(r.last_occurrence_date, date(2024, 6, 15));
        }
        // Next due still projects one interval out
        assert_eq!(results[0].next_due_date, date(2024, 7, 10));
    }

    #[test]
    fn test_interval_longer_than_window_included() {
        // Zero occurrences, but the row stays in the projection table
        let records = vec![record("Depot overhaul", 1500.0)];
        let results =
            project_inspections(&records, &year_2024_window(), date(2024, 6, 1)).unwrap();

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].occurrence_count, 0);
        assert!(!results[0].has_occurrences());
    }

    #[test]
    fn test_sorted_by_interval_stable() {
        let records = vec![
            record("Longest", 300.0),
            record("Short A", 25.0),
            record("Middle", 100.0),
            record("Short B", 25.0),
        ];
        let results =
            project_inspections(&records, &year_2024_window(), date(2024, 6, 1)).unwrap();

        let order: Vec<&str> = results.iter().map(|r| r.inspection_type.as_str()).collect();
        // Ascending by interval; catalog order kept for the 25-day tie
        assert_eq!(order, vec!["Short A", "Short B", "Middle", "Longest"]);
    }

    #[test]
    fn test_fractional_interval_truncates_at_date_arithmetic() {
        // 365 / 45.5 = 8 complete cycles; 45.5 * 8 = 364 whole days
        let records = vec![record("Calendar check", 45.5)];
        let results =
            project_inspections(&records, &year_2024_window(), date(2024, 6, 1)).unwrap();

        let r = &results[0];
        assert_eq!(r.occurrence_count, 8);
        assert_eq!(r.last_occurrence_date, date(2024, 1, 1) + Duration::days(364));
        // Next due adds floor(45.5) = 45 days
        assert_eq!(r.next_due_date, r.last_occurrence_date + Duration::days(45));
    }

    #[test]
    fn test_invalid_window_no_partial_results() {
        let window = EvaluationWindow::new(date(2024, 12, 31), date(2024, 1, 1));
        let records = vec![record("Check A", 30.0)];

        let err = project_inspections(&records, &window, date(2024, 6, 1)).unwrap_err();
        assert!(matches!(err, InvalidWindow::EndBeforeStart { .. }));
    }

    #[test]
    fn test_inverted_usage_ranges_rejected() {
        let records = vec![record("Check A", 30.0)];

        let window = year_2024_window().with_flight_hours(900.0, 100.0);
        assert!(matches!(
            project_inspections(&records, &window, date(2024, 6, 1)),
            Err(InvalidWindow::InvertedFlightHours { .. })
        ));

        let window = year_2024_window().with_cycles(50, 5);
        assert!(matches!(
            project_inspections(&records, &window, date(2024, 6, 1)),
            Err(InvalidWindow::InvertedCycles { .. })
        ));
    }

    #[test]
    fn test_empty_records_is_empty_result() {
        let results = project_inspections(&[], &year_2024_window(), date(2024, 6, 1)).unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn test_deterministic() {
        let records = vec![record("Check A", 30.0), record("Check B", 90.0)];
        let window = year_2024_window();
        let as_of = date(2024, 6, 1);

        let first = project_inspections(&records, &window, as_of).unwrap();
        let second = project_inspections(&records, &window, as_of).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_projector_wrapper() {
        let projector = Projector::new(date(2025, 1, 1));
        assert_eq!(projector.as_of(), date(2025, 1, 1));

        let window = EvaluationWindow::new(date(2024, 1, 1), date(2024, 4, 15));
        let records = vec![record("Phase inspection", 100.0)];

        let results = projector.project(&records, &window).unwrap();
        assert_eq!(results[0].days_overdue, 166);
    }
}

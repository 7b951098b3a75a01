//! Evaluation window model.
//!
//! The query parameters for one projection run: the calendar period under
//! evaluation plus the flight-hour and cycle ranges recorded alongside it.
//! Only the calendar span drives the due-date arithmetic; the hour and cycle
//! ranges are carried for period reporting.
//!
//! # Validation
//! Inverted ranges are rejected up front via [`EvaluationWindow::validate`].
//! The projector refuses to compute over a negative span.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A rejected evaluation window.
///
/// Carries the offending bounds so callers can surface a precise message.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidWindow {
    /// End date precedes start date.
    #[error("end date {end} is before start date {start}")]
    EndBeforeStart { start: NaiveDate, end: NaiveDate },
    /// Final flight hours below initial flight hours.
    #[error("final flight hours {end} are below initial flight hours {start}")]
    InvertedFlightHours { start: f64, end: f64 },
    /// Final cycle count below initial cycle count.
    #[error("final cycles {end} are below initial cycles {start}")]
    InvertedCycles { start: u32, end: u32 },
}

/// The evaluation window for one projection run.
///
/// `start_date..=end_date` is the period under evaluation. Flight hours and
/// cycles describe aircraft usage over the same period; they are validated
/// for consistency but do not enter the day-based due-date arithmetic.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EvaluationWindow {
    /// First day of the evaluated period.
    pub start_date: NaiveDate,
    /// Last day of the evaluated period.
    pub end_date: NaiveDate,
    /// Flight hours logged at the start of the period.
    pub flight_hours_start: f64,
    /// Flight hours logged at the end of the period.
    pub flight_hours_end: f64,
    /// Airframe cycles at the start of the period.
    pub cycles_start: u32,
    /// Airframe cycles at the end of the period.
    pub cycles_end: u32,
}

impl EvaluationWindow {
    /// Creates a window over the given period with zeroed usage ranges.
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            start_date,
            end_date,
            flight_hours_start: 0.0,
            flight_hours_end: 0.0,
            cycles_start: 0,
            cycles_end: 0,
        }
    }

    /// Sets the flight-hour range.
    pub fn with_flight_hours(mut self, start: f64, end: f64) -> Self {
        self.flight_hours_start = start;
        self.flight_hours_end = end;
        self
    }

    /// Sets the cycle range.
    pub fn with_cycles(mut self, start: u32, end: u32) -> Self {
        self.cycles_start = start;
        self.cycles_end = end;
        self
    }

    /// Checks that no range is inverted.
    ///
    /// Returns the first violation found, in the order the ranges are
    /// entered: dates, flight hours, cycles.
    pub fn validate(&self) -> Result<(), InvalidWindow> {
        if self.end_date < self.start_date {
            return Err(InvalidWindow::EndBeforeStart {
                start: self.start_date,
                end: self.end_date,
            });
        }
        if self.flight_hours_end < self.flight_hours_start {
            return Err(InvalidWindow::InvertedFlightHours {
                start: self.flight_hours_start,
                end: self.flight_hours_end,
            });
        }
        if self.cycles_end < self.cycles_start {
            return Err(InvalidWindow::InvertedCycles {
                start: self.cycles_start,
                end: self.cycles_end,
            });
        }
        Ok(())
    }

    /// Span of the evaluated period in whole days.
    ///
    /// Negative when the window is inverted; validate first.
    pub fn total_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days()
    }

    /// Flight hours accumulated over the period.
    pub fn total_flight_hours(&self) -> f64 {
        self.flight_hours_end - self.flight_hours_start
    }

    /// Cycles accumulated over the period.
    pub fn total_cycles(&self) -> i64 {
        i64::from(self.cycles_end) - i64::from(self.cycles_start)
    }
}

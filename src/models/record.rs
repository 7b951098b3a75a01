//! Inspection record model.
//!
//! One row of the inspection-interval catalog: an inspection type that
//! applies to a project (aircraft type), with its recurrence interval.
//!
//! # Interval Semantics
//! Only `interval_days` drives the projection. `interval_hours` exists in
//! operator catalogs and is carried through for display, but hour-based
//! recurrence is not evaluated. An interval of zero means the row is not a
//! recurring inspection and produces no projection.

use serde::{Deserialize, Serialize};

/// One catalog row: an inspection type and its recurrence interval.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InspectionRecord {
    /// Project (aircraft type / fleet) this inspection belongs to.
    pub project: String,
    /// Descriptive inspection label.
    pub inspection_type: String,
    /// Classification level (may be empty).
    pub level: String,
    /// Recurrence interval in days. Zero = not evaluated.
    pub interval_days: f64,
    /// Recurrence interval in flight hours. Carried, not evaluated.
    pub interval_hours: f64,
}

impl InspectionRecord {
    /// Creates a record for the given project and inspection type.
    pub fn new(project: impl Into<String>, inspection_type: impl Into<String>) -> Self {
        Self {
            project: project.into(),
            inspection_type: inspection_type.into(),
            level: String::new(),
            interval_days: 0.0,
            interval_hours: 0.0,
        }
    }

    /// Sets the classification level.
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }

    /// Sets the day interval.
    pub fn with_interval_days(mut self, days: f64) -> Self {
        self.interval_days = days;
        self
    }

    /// Sets the flight-hour interval.
    pub fn with_interval_hours(mut self, hours: f64) -> Self {
        self.interval_hours = hours;
        self
    }

    /// Whether this record recurs on a day interval and is evaluated
    /// by the projector.
    pub fn is_recurring(&self) -> bool {
        self.interval_days > 0.0
    }

    /// Whether both required identity fields are present.
    ///
    /// Records failing this check are excluded from the catalog at load
    /// time; the projector never sees them.
    pub fn is_complete(&self) -> bool {
        !self.project.trim().is_empty() && !self.inspection_type.trim().is_empty()
    }
}

//! Inspection-interval projection for aircraft fleet maintenance planning.
//!
//! Consumes a catalog of interval-based inspections (one row per project and
//! inspection type, with a recurrence interval in days) and computes, for a
//! given evaluation period, how many times each inspection falls due and
//! whether its next occurrence is overdue relative to an explicit reference
//! date.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `InspectionRecord`, `EvaluationWindow`,
//!   `ProjectionResult`
//! - **`catalog`**: Catalog container, project filtering, CSV loading,
//!   built-in sample data
//! - **`projector`**: The due-date projection itself plus the due/overdue
//!   report
//! - **`validation`**: Catalog integrity checks (missing fields, negative
//!   intervals, duplicates)
//!
//! # Design
//!
//! The projector is a pure function: catalog snapshot in, projection rows
//! out. The reference "today" is a parameter rather than a clock read, and
//! all I/O failure handling lives at the catalog boundary, so the core is
//! deterministic and testable in isolation.
//!
//! # References
//!
//! - ATA MSG-3, "Operator/Manufacturer Scheduled Maintenance Development"
//! - Kinnison & Siddiqui (2012), "Aviation Maintenance Management"

pub mod catalog;
pub mod models;
pub mod projector;
pub mod validation;

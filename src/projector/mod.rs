//! Due-date projection and overdue reporting.
//!
//! The one computational component of the crate: given a project's catalog
//! records and an evaluation window, [`project_inspections`] counts complete
//! interval cycles and anchors the next due date for each inspection, and
//! [`DueReport`] compiles the resulting due/overdue listing.
//!
//! # Algorithm
//!
//! Pure interval projection from the window start date — no recorded
//! maintenance events, no clamping. The reference "today" is an explicit
//! parameter, so the whole pipeline is deterministic and directly testable.

mod engine;
mod report;

pub use engine::{project_inspections, Projector};
pub use report::{DueEntry, DueReport, DueStatus};

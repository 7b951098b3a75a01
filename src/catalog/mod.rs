//! Inspection catalog: container, project filtering, and loading.
//!
//! A catalog is the validated set of [`InspectionRecord`] rows for a fleet.
//! It is loaded once per session from an external source, filtered by
//! project, and treated as an immutable snapshot by the projector.
//!
//! # Load-Time Invariant
//! Rows missing `project` or `inspection_type` never enter a catalog; they
//! are dropped (with a warning) when the catalog is built, so downstream
//! code can assume every record is identified.
//!
//! # Failure Contract
//! The loader collapses every I/O and format failure into the single
//! [`CatalogError::Unavailable`] signal. Callers treat it as "no data" and
//! stop; they never see raw I/O errors.

mod loader;

pub use loader::load_catalog_csv;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::InspectionRecord;

/// Catalog source failure.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    /// The catalog could not be loaded (missing file, bad format, I/O).
    #[error("catalog source unavailable: {reason}")]
    Unavailable {
        /// What went wrong, for the user-facing message.
        reason: String,
    },
}

impl CatalogError {
    pub(crate) fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable {
            reason: reason.into(),
        }
    }
}

/// An immutable snapshot of inspection-interval rows.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Catalog {
    records: Vec<InspectionRecord>,
}

impl Catalog {
    /// Builds a catalog, dropping rows missing required identity fields.
    pub fn from_records(records: Vec<InspectionRecord>) -> Self {
        let records = records
            .into_iter()
            .filter(|r| {
                if r.is_complete() {
                    true
                } else {
                    log::warn!(
                        "dropping catalog row without project/inspection type: {:?}",
                        r
                    );
                    false
                }
            })
            .collect();
        Self { records }
    }

    /// All records, in catalog order.
    pub fn records(&self) -> &[InspectionRecord] {
        &self.records
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the catalog holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct project identifiers, sorted.
    pub fn projects(&self) -> Vec<String> {
        let mut projects: Vec<String> = self.records.iter().map(|r| r.project.clone()).collect();
        projects.sort();
        projects.dedup();
        projects
    }

    /// Records belonging to one project, catalog order preserved.
    pub fn for_project(&self, project: &str) -> Vec<InspectionRecord> {
        self.records
            .iter()
            .filter(|r| r.project == project)
            .cloned()
            .collect()
    }

    /// Built-in example fleet data for trying the crate without a file.
    ///
    /// Two projects (F-5 and F-16) with day intervals spanning the 25 to
    /// 1500 day range typical of letter-check programs.
    pub fn sample() -> Self {
        Self::from_records(vec![
            InspectionRecord::new("F-5", "Servicing inspection")
                .with_level("N1")
                .with_interval_days(25.0),
            InspectionRecord::new("F-5", "Phase inspection")
                .with_level("N2")
                .with_interval_days(100.0)
                .with_interval_hours(200.0),
            InspectionRecord::new("F-5", "Periodic inspection")
                .with_level("N2")
                .with_interval_days(300.0),
            InspectionRecord::new("F-5", "Depot overhaul")
                .with_level("N3")
                .with_interval_days(1500.0),
            InspectionRecord::new("F-16", "Preflight/postflight check")
                .with_level("N1")
                .with_interval_days(30.0),
            InspectionRecord::new("F-16", "Phased inspection")
                .with_level("N2")
                .with_interval_days(90.0)
                .with_interval_hours(300.0),
            InspectionRecord::new("F-16", "Corrosion survey")
                .with_level("N2")
                .with_interval_days(365.0),
            InspectionRecord::new("F-16", "Structural audit")
                .with_level("N3")
                .with_interval_days(730.0),
        ])
    }
}

//! CSV catalog loader.
//!
//! Normalizes a spreadsheet export into [`Catalog`] rows. Expected logical
//! columns: `project`, `inspection_type`, `level`, `interval_days`,
//! `interval_hours`. The original operator sheets carry Portuguese headers
//! (`Projeto`, `Tipo de inspeção`, ...); both spellings are accepted.
//!
//! # Coercion Rules
//! - Numeric cells that fail to parse default to zero (a zero interval is
//!   simply not evaluated downstream).
//! - Rows missing `project` or `inspection_type` are skipped with a warning.
//! - Unreadable files or rows collapse into [`CatalogError::Unavailable`].

use std::path::Path;

use serde::Deserialize;

use super::{Catalog, CatalogError};
use crate::models::InspectionRecord;

/// Raw CSV row before coercion. All fields optional so a sparse sheet
/// still deserializes; coercion decides what survives.
#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(alias = "Projeto")]
    project: Option<String>,
    #[serde(alias = "Tipo de inspeção")]
    inspection_type: Option<String>,
    #[serde(alias = "Nível")]
    level: Option<String>,
    #[serde(alias = "Intervalo em Dias")]
    interval_days: Option<String>,
    #[serde(alias = "Intervalo em Horas")]
    interval_hours: Option<String>,
}

/// Loads an inspection catalog from a CSV file.
///
/// Returns [`CatalogError::Unavailable`] when the file cannot be read or
/// its shape cannot be parsed at all; individual bad rows are skipped, so
/// a readable file with no usable rows yields an empty catalog (which the
/// caller renders as the "no data" state).
pub fn load_catalog_csv(path: impl AsRef<Path>) -> Result<Catalog, CatalogError> {
    let path = path.as_ref();
    let mut reader = csv::Reader::from_path(path)
        .map_err(|e| CatalogError::unavailable(format!("{}: {e}", path.display())))?;

    let mut records = Vec::new();
    for row in reader.deserialize::<RawRow>() {
        match row {
            Ok(raw) => {
                if let Some(record) = coerce_row(raw) {
                    records.push(record);
                }
            }
            Err(e) => {
                log::warn!("skipping unreadable catalog row: {e}");
            }
        }
    }

    Ok(Catalog::from_records(records))
}

/// Applies the coercion rules to one raw row.
///
/// Returns `None` when the required identity fields are missing.
fn coerce_row(raw: RawRow) -> Option<InspectionRecord> {
    let project = raw.project.unwrap_or_default();
    let inspection_type = raw.inspection_type.unwrap_or_default();

    let record = InspectionRecord::new(project, inspection_type)
        .with_level(raw.level.unwrap_or_default())
        .with_interval_days(coerce_numeric(raw.interval_days.as_deref()))
        .with_interval_hours(coerce_numeric(raw.interval_hours.as_deref()));

    if record.is_complete() {
        Some(record)
    } else {
        log::warn!("skipping catalog row without project/inspection type");
        None
    }
}

/// Parses a numeric cell, defaulting invalid or absent values to zero.
fn coerce_numeric(cell: Option<&str>) -> f64 {
    cell.and_then(|s| s.trim().parse::<f64>().ok())
        .unwrap_or(0.0)
}

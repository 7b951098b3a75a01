//! Catalog integrity checks.
//!
//! Structural validation of inspection records before projection. Detects:
//! - Missing project or inspection-type identity fields
//! - Negative day or hour intervals
//! - The same inspection listed twice for one project
//!
//! The catalog loader already drops rows without identity fields; this
//! module is for callers assembling records programmatically, and reports
//! every problem found rather than stopping at the first.

use std::collections::HashSet;

use crate::models::InspectionRecord;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A record has no project identifier.
    MissingProject,
    /// A record has no inspection-type label.
    MissingInspectionType,
    /// A day or hour interval is negative.
    NegativeInterval,
    /// The same (project, inspection type) pair appears more than once.
    DuplicateInspection,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a batch of catalog records.
///
/// Checks:
/// 1. Every record names a project
/// 2. Every record names an inspection type
/// 3. No interval is negative
/// 4. No (project, inspection type) pair is listed twice
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_catalog(records: &[InspectionRecord]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut seen: HashSet<(&str, &str)> = HashSet::new();

    for (row, record) in records.iter().enumerate() {
        if record.project.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::MissingProject,
                format!("Row {row} has no project identifier"),
            ));
        }
        if record.inspection_type.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::MissingInspectionType,
                format!("Row {row} has no inspection type"),
            ));
        }
        if record.interval_days < 0.0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeInterval,
                format!(
                    "Row {row} ('{}') has negative day interval {}",
                    record.inspection_type, record.interval_days
                ),
            ));
        }
        if record.interval_hours < 0.0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeInterval,
                format!(
                    "Row {row} ('{}') has negative hour interval {}",
                    record.inspection_type, record.interval_hours
                ),
            ));
        }

        if record.is_complete()
            && !seen.insert((record.project.as_str(), record.inspection_type.as_str()))
        {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateInspection,
                format!(
                    "Inspection '{}' listed twice for project '{}'",
                    record.inspection_type, record.project
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

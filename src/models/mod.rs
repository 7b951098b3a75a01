//! Inspection-planning domain models.
//!
//! Provides the core data types for interval-based inspection projection:
//! catalog rows, the evaluation window, and the projected output rows.
//!
//! # Domain Mapping
//!
//! | aeroinspect | Maintenance program |
//! |-------------|---------------------|
//! | InspectionRecord | One line of the approved inspection schedule |
//! | EvaluationWindow | Operating period under review |
//! | ProjectionResult | Forecast row: occurrences and next due date |

mod projection;
mod record;
mod window;

pub use projection::ProjectionResult;
pub use record::InspectionRecord;
pub use window::{EvaluationWindow, InvalidWindow};

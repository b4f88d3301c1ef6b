//! JSON rendering of comparison reports.
//!
//! ```json
//! {
//!   "score": 100.0,
//!   "intersection": {
//!     "activities": [{ "id": "A1", "highlights": [{ "start": 0, "end": 10 }] }],
//!     "roles": [],
//!     "rules": []
//!   }
//! }
//! ```

use super::InterchangeError;
use crate::report::ComparisonReport;

impl ComparisonReport {
    /// Serialize the report as compact JSON.
    pub fn to_json(&self) -> Result<String, InterchangeError> {
        serde_json::to_string(self).map_err(|e| InterchangeError::json(e.to_string()))
    }

    /// Serialize the report as a JSON value, for embedding in a larger response.
    pub fn to_json_value(&self) -> Result<serde_json::Value, InterchangeError> {
        serde_json::to_value(self).map_err(|e| InterchangeError::json(e.to_string()))
    }
}

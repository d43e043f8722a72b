use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An uploaded medical report plus its canned classification. Immutable
/// after creation. `file_url` is a placeholder reference; file contents are
/// never inspected.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MedicalReport {
    pub id: Uuid,
    pub user_id: Uuid,
    /// Free string from a known list, e.g. "Blood Test", "X-Ray".
    pub report_type: String,
    pub report_date: NaiveDate,
    pub file_name: String,
    pub file_url: String,
    pub findings: Vec<String>,
    pub risk_factors: Vec<String>,
    pub recommendations: Vec<String>,
    pub created_at: NaiveDateTime,
}

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A point-in-time vitals entry. Immutable once created; a user may submit
/// several records for the same date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub record_date: NaiveDate,
    /// bpm
    pub heart_rate: Option<i32>,
    /// mmHg
    pub systolic: Option<i32>,
    /// mmHg
    pub diastolic: Option<i32>,
    /// mg/dL
    pub blood_sugar: Option<f64>,
    /// °C
    pub temperature: Option<f64>,
    pub weight_kg: Option<f64>,
    /// %
    pub oxygen_saturation: Option<i32>,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
}

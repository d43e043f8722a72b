use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One day's lifestyle metrics. Unique per (user, log_date); re-submitting
/// the same date overwrites the earlier entry (upsert semantics).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyLog {
    pub id: Uuid,
    pub user_id: Uuid,
    pub log_date: NaiveDate,
    /// 0–24
    pub sleep_hours: Option<f64>,
    pub exercise_minutes: Option<i32>,
    /// 1 = low, 10 = high
    pub stress_level: Option<i32>,
    pub calories_intake: Option<i32>,
    pub water_intake_ml: Option<i32>,
    /// 1 = poor, 10 = excellent
    pub mood_level: Option<i32>,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
}

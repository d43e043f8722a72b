//! Repository layer — entity-scoped database operations.
//!
//! Free functions over `&Connection`, one sub-module per entity. All public
//! functions are re-exported here.

mod chat_message;
mod daily_log;
mod disease_impact;
mod health_record;
mod medical_report;
mod profile;
mod risk_assessment;

pub use chat_message::*;
pub use daily_log::*;
pub use disease_impact::*;
pub use health_record::*;
pub use medical_report::*;
pub use profile::*;
pub use risk_assessment::*;

/// Serialize a string list for a JSON text column.
pub(crate) fn vec_to_json(values: &[String]) -> String {
    serde_json::to_string(values).unwrap_or_else(|_| "[]".to_string())
}

/// Deserialize a JSON text column into a string list. Malformed content
/// yields an empty list rather than failing the row.
pub(crate) fn json_to_vec(raw: &str) -> Vec<String> {
    serde_json::from_str(raw).unwrap_or_default()
}

pub(crate) const DATE_FMT: &str = "%Y-%m-%d";
pub(crate) const DATETIME_FMT: &str = "%Y-%m-%d %H:%M:%S";

#[cfg(test)]
pub(crate) mod test_support {
    use chrono::NaiveDate;
    use rusqlite::Connection;
    use uuid::Uuid;

    use crate::models::Profile;

    /// Insert a minimal profile row and return its user id. Most entity
    /// tables have a foreign key on profiles(id).
    pub fn seed_profile(conn: &Connection) -> Uuid {
        let profile = Profile {
            id: Uuid::new_v4(),
            full_name: "Test User".into(),
            date_of_birth: NaiveDate::from_ymd_opt(1990, 1, 1),
            gender: None,
            height_cm: None,
            weight_kg: None,
            phone: None,
            emergency_contact_name: None,
            emergency_contact_phone: None,
            medical_conditions: vec![],
            allergies: vec![],
            medications: vec![],
            updated_at: chrono::Local::now().naive_local(),
        };
        super::upsert_profile(conn, &profile).unwrap();
        profile.id
    }
}

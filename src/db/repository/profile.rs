use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime};
use rusqlite::{params, Connection, OptionalExtension};
use uuid::Uuid;

use crate::db::DatabaseError;
use crate::models::enums::Gender;
use crate::models::Profile;

use super::{json_to_vec, vec_to_json, DATETIME_FMT, DATE_FMT};

/// Insert or replace the profile row for a user.
pub fn upsert_profile(conn: &Connection, profile: &Profile) -> Result<(), DatabaseError> {
    conn.execute(
        "INSERT INTO profiles (id, full_name, date_of_birth, gender, height_cm, weight_kg,
                               phone, emergency_contact_name, emergency_contact_phone,
                               medical_conditions, allergies, medications, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)
         ON CONFLICT(id) DO UPDATE SET
             full_name = excluded.full_name,
             date_of_birth = excluded.date_of_birth,
             gender = excluded.gender,
             height_cm = excluded.height_cm,
             weight_kg = excluded.weight_kg,
             phone = excluded.phone,
             emergency_contact_name = excluded.emergency_contact_name,
             emergency_contact_phone = excluded.emergency_contact_phone,
             medical_conditions = excluded.medical_conditions,
             allergies = excluded.allergies,
             medications = excluded.medications,
             updated_at = excluded.updated_at",
        params![
            profile.id.to_string(),
            profile.full_name,
            profile
                .date_of_birth
                .map(|d| d.format(DATE_FMT).to_string()),
            profile.gender.as_ref().map(|g| g.as_str()),
            profile.height_cm,
            profile.weight_kg,
            profile.phone,
            profile.emergency_contact_name,
            profile.emergency_contact_phone,
            vec_to_json(&profile.medical_conditions),
            vec_to_json(&profile.allergies),
            vec_to_json(&profile.medications),
            profile.updated_at.format(DATETIME_FMT).to_string(),
        ],
    )?;
    Ok(())
}

/// Fetch a user's profile, if one exists.
pub fn get_profile(conn: &Connection, user_id: &Uuid) -> Result<Option<Profile>, DatabaseError> {
    conn.query_row(
        "SELECT id, full_name, date_of_birth, gender, height_cm, weight_kg,
                phone, emergency_contact_name, emergency_contact_phone,
                medical_conditions, allergies, medications, updated_at
         FROM profiles
         WHERE id = ?1",
        params![user_id.to_string()],
        row_to_profile,
    )
    .optional()
    .map_err(DatabaseError::from)
}

fn row_to_profile(row: &rusqlite::Row) -> Result<Profile, rusqlite::Error> {
    let id_str: String = row.get(0)?;
    let dob_str: Option<String> = row.get(2)?;
    let gender_str: Option<String> = row.get(3)?;
    let conditions_str: String = row.get(9)?;
    let allergies_str: String = row.get(10)?;
    let medications_str: String = row.get(11)?;
    let updated_str: String = row.get(12)?;

    Ok(Profile {
        id: Uuid::parse_str(&id_str).map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
        })?,
        full_name: row.get(1)?,
        date_of_birth: dob_str.and_then(|s| NaiveDate::parse_from_str(&s, DATE_FMT).ok()),
        gender: gender_str.and_then(|s| Gender::from_str(&s).ok()),
        height_cm: row.get(4)?,
        weight_kg: row.get(5)?,
        phone: row.get(6)?,
        emergency_contact_name: row.get(7)?,
        emergency_contact_phone: row.get(8)?,
        medical_conditions: json_to_vec(&conditions_str),
        allergies: json_to_vec(&allergies_str),
        medications: json_to_vec(&medications_str),
        updated_at: NaiveDateTime::parse_from_str(&updated_str, DATETIME_FMT).unwrap_or_default(),
    })
}

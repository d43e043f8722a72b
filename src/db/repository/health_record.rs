use chrono::{NaiveDate, NaiveDateTime};
use rusqlite::{params, Connection, OptionalExtension};
use uuid::Uuid;

use crate::db::DatabaseError;
use crate::models::HealthRecord;

use super::{DATETIME_FMT, DATE_FMT};

/// Insert a vitals record. Records are immutable once written.
pub fn insert_health_record(conn: &Connection, record: &HealthRecord) -> Result<(), DatabaseError> {
    conn.execute(
        "INSERT INTO health_records (id, user_id, record_date, heart_rate, systolic, diastolic,
                                     blood_sugar, temperature, weight_kg, oxygen_saturation,
                                     notes, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)",
        params![
            record.id.to_string(),
            record.user_id.to_string(),
            record.record_date.format(DATE_FMT).to_string(),
            record.heart_rate,
            record.systolic,
            record.diastolic,
            record.blood_sugar,
            record.temperature,
            record.weight_kg,
            record.oxygen_saturation,
            record.notes,
            record.created_at.format(DATETIME_FMT).to_string(),
        ],
    )?;
    Ok(())
}

/// Most recent records for a user, newest first.
pub fn get_recent_health_records(
    conn: &Connection,
    user_id: &Uuid,
    limit: usize,
) -> Result<Vec<HealthRecord>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT id, user_id, record_date, heart_rate, systolic, diastolic, blood_sugar,
                temperature, weight_kg, oxygen_saturation, notes, created_at
         FROM health_records
         WHERE user_id = ?1
         ORDER BY record_date DESC, created_at DESC
         LIMIT ?2",
    )?;
    let rows = stmt.query_map(params![user_id.to_string(), limit], row_to_health_record)?;
    rows.collect::<Result<Vec<_>, _>>()
        .map_err(DatabaseError::from)
}

/// The single most recent record, if any.
pub fn get_latest_health_record(
    conn: &Connection,
    user_id: &Uuid,
) -> Result<Option<HealthRecord>, DatabaseError> {
    conn.query_row(
        "SELECT id, user_id, record_date, heart_rate, systolic, diastolic, blood_sugar,
                temperature, weight_kg, oxygen_saturation, notes, created_at
         FROM health_records
         WHERE user_id = ?1
         ORDER BY record_date DESC, created_at DESC
         LIMIT 1",
        params![user_id.to_string()],
        row_to_health_record,
    )
    .optional()
    .map_err(DatabaseError::from)
}

pub fn count_health_records(conn: &Connection, user_id: &Uuid) -> Result<i64, DatabaseError> {
    let count = conn.query_row(
        "SELECT COUNT(*) FROM health_records WHERE user_id = ?1",
        params![user_id.to_string()],
        |row| row.get(0),
    )?;
    Ok(count)
}

fn row_to_health_record(row: &rusqlite::Row) -> Result<HealthRecord, rusqlite::Error> {
    let id_str: String = row.get(0)?;
    let user_str: String = row.get(1)?;
    let date_str: String = row.get(2)?;
    let created_str: String = row.get(11)?;

    Ok(HealthRecord {
        id: Uuid::parse_str(&id_str).map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
        })?,
        user_id: Uuid::parse_str(&user_str).map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(1, rusqlite::types::Type::Text, Box::new(e))
        })?,
        record_date: NaiveDate::parse_from_str(&date_str, DATE_FMT).unwrap_or_default(),
        heart_rate: row.get(3)?,
        systolic: row.get(4)?,
        diastolic: row.get(5)?,
        blood_sugar: row.get(6)?,
        temperature: row.get(7)?,
        weight_kg: row.get(8)?,
        oxygen_saturation: row.get(9)?,
        notes: row.get(10)?,
        created_at: NaiveDateTime::parse_from_str(&created_str, DATETIME_FMT).unwrap_or_default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::test_support::seed_profile;
    use crate::db::sqlite::open_memory_database;

    fn make_record(user_id: Uuid, date: NaiveDate, systolic: Option<i32>) -> HealthRecord {
        HealthRecord {
            id: Uuid::new_v4(),
            user_id,
            record_date: date,
            heart_rate: Some(72),
            systolic,
            diastolic: systolic.map(|_| 80),
            blood_sugar: None,
            temperature: Some(36.6),
            weight_kg: None,
            oxygen_saturation: Some(98),
            notes: None,
            created_at: chrono::Local::now().naive_local(),
        }
    }

    #[test]
    fn insert_and_count() {
        let conn = open_memory_database().unwrap();
        let user = seed_profile(&conn);
        let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        insert_health_record(&conn, &make_record(user, date, Some(120))).unwrap();
        insert_health_record(&conn, &make_record(user, date, None)).unwrap();

        assert_eq!(count_health_records(&conn, &user).unwrap(), 2);
    }

    #[test]
    fn recent_returns_newest_first_with_limit() {
        let conn = open_memory_database().unwrap();
        let user = seed_profile(&conn);
        for day in 1..=12 {
            let date = NaiveDate::from_ymd_opt(2025, 6, day).unwrap();
            insert_health_record(&conn, &make_record(user, date, Some(118 + day as i32))).unwrap();
        }

        let recent = get_recent_health_records(&conn, &user, 10).unwrap();
        assert_eq!(recent.len(), 10);
        assert_eq!(
            recent[0].record_date,
            NaiveDate::from_ymd_opt(2025, 6, 12).unwrap()
        );
        assert_eq!(
            recent[9].record_date,
            NaiveDate::from_ymd_opt(2025, 6, 3).unwrap()
        );
    }

    #[test]
    fn latest_is_none_for_empty() {
        let conn = open_memory_database().unwrap();
        let user = seed_profile(&conn);
        assert!(get_latest_health_record(&conn, &user).unwrap().is_none());
    }

    #[test]
    fn records_scoped_per_user() {
        let conn = open_memory_database().unwrap();
        let user_a = seed_profile(&conn);
        let user_b = seed_profile(&conn);
        let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        insert_health_record(&conn, &make_record(user_a, date, Some(120))).unwrap();

        assert_eq!(count_health_records(&conn, &user_a).unwrap(), 1);
        assert_eq!(count_health_records(&conn, &user_b).unwrap(), 0);
    }
}

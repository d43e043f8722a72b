use chrono::{NaiveDate, NaiveDateTime};
use rusqlite::{params, Connection, OptionalExtension};
use uuid::Uuid;

use crate::db::DatabaseError;
use crate::models::DailyLog;

use super::{DATETIME_FMT, DATE_FMT};

/// Insert or overwrite the log for (user, log_date). One row per day.
pub fn upsert_daily_log(conn: &Connection, log: &DailyLog) -> Result<(), DatabaseError> {
    conn.execute(
        "INSERT INTO daily_health_logs (id, user_id, log_date, sleep_hours, exercise_minutes,
                                        stress_level, calories_intake, water_intake_ml,
                                        mood_level, notes, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)
         ON CONFLICT(user_id, log_date) DO UPDATE SET
             sleep_hours = excluded.sleep_hours,
             exercise_minutes = excluded.exercise_minutes,
             stress_level = excluded.stress_level,
             calories_intake = excluded.calories_intake,
             water_intake_ml = excluded.water_intake_ml,
             mood_level = excluded.mood_level,
             notes = excluded.notes",
        params![
            log.id.to_string(),
            log.user_id.to_string(),
            log.log_date.format(DATE_FMT).to_string(),
            log.sleep_hours,
            log.exercise_minutes,
            log.stress_level,
            log.calories_intake,
            log.water_intake_ml,
            log.mood_level,
            log.notes,
            log.created_at.format(DATETIME_FMT).to_string(),
        ],
    )?;
    Ok(())
}

/// Most recent daily logs, newest first.
pub fn get_recent_daily_logs(
    conn: &Connection,
    user_id: &Uuid,
    limit: usize,
) -> Result<Vec<DailyLog>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT id, user_id, log_date, sleep_hours, exercise_minutes, stress_level,
                calories_intake, water_intake_ml, mood_level, notes, created_at
         FROM daily_health_logs
         WHERE user_id = ?1
         ORDER BY log_date DESC
         LIMIT ?2",
    )?;
    let rows = stmt.query_map(params![user_id.to_string(), limit], row_to_daily_log)?;
    rows.collect::<Result<Vec<_>, _>>()
        .map_err(DatabaseError::from)
}

/// The log for a specific date, if present.
pub fn get_daily_log_for_date(
    conn: &Connection,
    user_id: &Uuid,
    date: NaiveDate,
) -> Result<Option<DailyLog>, DatabaseError> {
    conn.query_row(
        "SELECT id, user_id, log_date, sleep_hours, exercise_minutes, stress_level,
                calories_intake, water_intake_ml, mood_level, notes, created_at
         FROM daily_health_logs
         WHERE user_id = ?1 AND log_date = ?2",
        params![user_id.to_string(), date.format(DATE_FMT).to_string()],
        row_to_daily_log,
    )
    .optional()
    .map_err(DatabaseError::from)
}

pub fn count_daily_logs(conn: &Connection, user_id: &Uuid) -> Result<i64, DatabaseError> {
    let count = conn.query_row(
        "SELECT COUNT(*) FROM daily_health_logs WHERE user_id = ?1",
        params![user_id.to_string()],
        |row| row.get(0),
    )?;
    Ok(count)
}

fn row_to_daily_log(row: &rusqlite::Row) -> Result<DailyLog, rusqlite::Error> {
    let id_str: String = row.get(0)?;
    let user_str: String = row.get(1)?;
    let date_str: String = row.get(2)?;
    let created_str: String = row.get(10)?;

    Ok(DailyLog {
        id: Uuid::parse_str(&id_str).map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
        })?,
        user_id: Uuid::parse_str(&user_str).map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(1, rusqlite::types::Type::Text, Box::new(e))
        })?,
        log_date: NaiveDate::parse_from_str(&date_str, DATE_FMT).unwrap_or_default(),
        sleep_hours: row.get(3)?,
        exercise_minutes: row.get(4)?,
        stress_level: row.get(5)?,
        calories_intake: row.get(6)?,
        water_intake_ml: row.get(7)?,
        mood_level: row.get(8)?,
        notes: row.get(9)?,
        created_at: NaiveDateTime::parse_from_str(&created_str, DATETIME_FMT).unwrap_or_default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::test_support::seed_profile;
    use crate::db::sqlite::open_memory_database;

    fn make_log(user_id: Uuid, date: NaiveDate, sleep: Option<f64>) -> DailyLog {
        DailyLog {
            id: Uuid::new_v4(),
            user_id,
            log_date: date,
            sleep_hours: sleep,
            exercise_minutes: Some(30),
            stress_level: Some(4),
            calories_intake: None,
            water_intake_ml: Some(2000),
            mood_level: Some(7),
            notes: None,
            created_at: chrono::Local::now().naive_local(),
        }
    }

    #[test]
    fn one_row_per_user_per_date() {
        let conn = open_memory_database().unwrap();
        let user = seed_profile(&conn);
        let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();

        upsert_daily_log(&conn, &make_log(user, date, Some(6.5))).unwrap();
        upsert_daily_log(&conn, &make_log(user, date, Some(8.0))).unwrap();

        assert_eq!(count_daily_logs(&conn, &user).unwrap(), 1);
        let log = get_daily_log_for_date(&conn, &user, date).unwrap().unwrap();
        assert_eq!(log.sleep_hours, Some(8.0));
    }

    #[test]
    fn recent_ordered_by_date_desc() {
        let conn = open_memory_database().unwrap();
        let user = seed_profile(&conn);
        for day in [3u32, 1, 2] {
            let date = NaiveDate::from_ymd_opt(2025, 6, day).unwrap();
            upsert_daily_log(&conn, &make_log(user, date, Some(7.0))).unwrap();
        }

        let logs = get_recent_daily_logs(&conn, &user, 7).unwrap();
        assert_eq!(logs.len(), 3);
        assert_eq!(logs[0].log_date, NaiveDate::from_ymd_opt(2025, 6, 3).unwrap());
        assert_eq!(logs[2].log_date, NaiveDate::from_ymd_opt(2025, 6, 1).unwrap());
    }

    #[test]
    fn limit_caps_result() {
        let conn = open_memory_database().unwrap();
        let user = seed_profile(&conn);
        for day in 1..=10u32 {
            let date = NaiveDate::from_ymd_opt(2025, 6, day).unwrap();
            upsert_daily_log(&conn, &make_log(user, date, None)).unwrap();
        }
        let logs = get_recent_daily_logs(&conn, &user, 7).unwrap();
        assert_eq!(logs.len(), 7);
    }

    #[test]
    fn missing_date_is_none() {
        let conn = open_memory_database().unwrap();
        let user = seed_profile(&conn);
        let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        assert!(get_daily_log_for_date(&conn, &user, date).unwrap().is_none());
    }
}

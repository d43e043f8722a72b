use chrono::{NaiveDate, NaiveDateTime};
use rusqlite::{params, Connection};
use uuid::Uuid;

use crate::db::DatabaseError;
use crate::models::MedicalReport;

use super::{json_to_vec, vec_to_json, DATETIME_FMT, DATE_FMT};

/// Insert an uploaded report with its classification bundle.
pub fn insert_medical_report(
    conn: &Connection,
    report: &MedicalReport,
) -> Result<(), DatabaseError> {
    conn.execute(
        "INSERT INTO medical_reports (id, user_id, report_type, report_date, file_name,
                                      file_url, findings, risk_factors, recommendations,
                                      created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
        params![
            report.id.to_string(),
            report.user_id.to_string(),
            report.report_type,
            report.report_date.format(DATE_FMT).to_string(),
            report.file_name,
            report.file_url,
            vec_to_json(&report.findings),
            vec_to_json(&report.risk_factors),
            vec_to_json(&report.recommendations),
            report.created_at.format(DATETIME_FMT).to_string(),
        ],
    )?;
    Ok(())
}

/// All reports for a user, newest first.
pub fn list_medical_reports(
    conn: &Connection,
    user_id: &Uuid,
) -> Result<Vec<MedicalReport>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT id, user_id, report_type, report_date, file_name, file_url, findings,
                risk_factors, recommendations, created_at
         FROM medical_reports
         WHERE user_id = ?1
         ORDER BY report_date DESC, created_at DESC",
    )?;
    let rows = stmt.query_map(params![user_id.to_string()], row_to_medical_report)?;
    rows.collect::<Result<Vec<_>, _>>()
        .map_err(DatabaseError::from)
}

pub fn count_medical_reports(conn: &Connection, user_id: &Uuid) -> Result<i64, DatabaseError> {
    let count = conn.query_row(
        "SELECT COUNT(*) FROM medical_reports WHERE user_id = ?1",
        params![user_id.to_string()],
        |row| row.get(0),
    )?;
    Ok(count)
}

fn row_to_medical_report(row: &rusqlite::Row) -> Result<MedicalReport, rusqlite::Error> {
    let id_str: String = row.get(0)?;
    let user_str: String = row.get(1)?;
    let date_str: String = row.get(3)?;
    let findings_str: String = row.get(6)?;
    let risks_str: String = row.get(7)?;
    let recs_str: String = row.get(8)?;
    let created_str: String = row.get(9)?;

    Ok(MedicalReport {
        id: Uuid::parse_str(&id_str).map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
        })?,
        user_id: Uuid::parse_str(&user_str).map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(1, rusqlite::types::Type::Text, Box::new(e))
        })?,
        report_type: row.get(2)?,
        report_date: NaiveDate::parse_from_str(&date_str, DATE_FMT).unwrap_or_default(),
        file_name: row.get(4)?,
        file_url: row.get(5)?,
        findings: json_to_vec(&findings_str),
        risk_factors: json_to_vec(&risks_str),
        recommendations: json_to_vec(&recs_str),
        created_at: NaiveDateTime::parse_from_str(&created_str, DATETIME_FMT).unwrap_or_default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::test_support::seed_profile;
    use crate::db::sqlite::open_memory_database;

    fn make_report(user_id: Uuid, report_type: &str, date: NaiveDate) -> MedicalReport {
        MedicalReport {
            id: Uuid::new_v4(),
            user_id,
            report_type: report_type.into(),
            report_date: date,
            file_name: "cbc_june.pdf".into(),
            file_url: "placeholder-url/cbc_june.pdf".into(),
            findings: vec!["Hemoglobin levels within normal range".into()],
            risk_factors: vec![],
            recommendations: vec!["Consult with your doctor about glucose management".into()],
            created_at: chrono::Local::now().naive_local(),
        }
    }

    #[test]
    fn insert_and_list() {
        let conn = open_memory_database().unwrap();
        let user = seed_profile(&conn);
        let d1 = NaiveDate::from_ymd_opt(2025, 5, 10).unwrap();
        let d2 = NaiveDate::from_ymd_opt(2025, 6, 10).unwrap();
        insert_medical_report(&conn, &make_report(user, "Blood Test", d1)).unwrap();
        insert_medical_report(&conn, &make_report(user, "X-Ray", d2)).unwrap();

        let reports = list_medical_reports(&conn, &user).unwrap();
        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].report_type, "X-Ray");
        assert_eq!(count_medical_reports(&conn, &user).unwrap(), 2);
    }

    #[test]
    fn empty_lists_round_trip() {
        let conn = open_memory_database().unwrap();
        let user = seed_profile(&conn);
        let date = NaiveDate::from_ymd_opt(2025, 6, 10).unwrap();
        insert_medical_report(&conn, &make_report(user, "X-Ray", date)).unwrap();

        let report = &list_medical_reports(&conn, &user).unwrap()[0];
        assert!(report.risk_factors.is_empty());
    }
}

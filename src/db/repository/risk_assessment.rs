use chrono::{NaiveDate, NaiveDateTime};
use rusqlite::{params, Connection, OptionalExtension};
use uuid::Uuid;

use crate::db::DatabaseError;
use crate::models::{RiskAssessment, RiskFactorSnapshot};

use super::{json_to_vec, vec_to_json, DATETIME_FMT, DATE_FMT};

/// Insert a new assessment row. Prior assessments are never touched.
pub fn insert_risk_assessment(
    conn: &Connection,
    assessment: &RiskAssessment,
) -> Result<(), DatabaseError> {
    let snapshot = serde_json::to_string(&assessment.risk_factors)
        .map_err(|e| DatabaseError::ConstraintViolation(e.to_string()))?;

    conn.execute(
        "INSERT INTO risk_assessments (id, user_id, assessment_date, overall_risk_score,
                                       cardiovascular_risk, diabetes_risk, respiratory_risk,
                                       cancer_risk, risk_factors, recommendations, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
        params![
            assessment.id.to_string(),
            assessment.user_id.to_string(),
            assessment.assessment_date.format(DATE_FMT).to_string(),
            assessment.overall_risk_score,
            assessment.cardiovascular_risk,
            assessment.diabetes_risk,
            assessment.respiratory_risk,
            assessment.cancer_risk,
            snapshot,
            vec_to_json(&assessment.recommendations),
            assessment.created_at.format(DATETIME_FMT).to_string(),
        ],
    )?;
    Ok(())
}

/// Latest assessment by date; newest row wins for display.
pub fn get_latest_risk_assessment(
    conn: &Connection,
    user_id: &Uuid,
) -> Result<Option<RiskAssessment>, DatabaseError> {
    conn.query_row(
        "SELECT id, user_id, assessment_date, overall_risk_score, cardiovascular_risk,
                diabetes_risk, respiratory_risk, cancer_risk, risk_factors,
                recommendations, created_at
         FROM risk_assessments
         WHERE user_id = ?1
         ORDER BY assessment_date DESC, created_at DESC
         LIMIT 1",
        params![user_id.to_string()],
        row_to_risk_assessment,
    )
    .optional()
    .map_err(DatabaseError::from)
}

/// All assessments, newest first.
pub fn list_risk_assessments(
    conn: &Connection,
    user_id: &Uuid,
) -> Result<Vec<RiskAssessment>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT id, user_id, assessment_date, overall_risk_score, cardiovascular_risk,
                diabetes_risk, respiratory_risk, cancer_risk, risk_factors,
                recommendations, created_at
         FROM risk_assessments
         WHERE user_id = ?1
         ORDER BY assessment_date DESC, created_at DESC",
    )?;
    let rows = stmt.query_map(params![user_id.to_string()], row_to_risk_assessment)?;
    rows.collect::<Result<Vec<_>, _>>()
        .map_err(DatabaseError::from)
}

fn row_to_risk_assessment(row: &rusqlite::Row) -> Result<RiskAssessment, rusqlite::Error> {
    let id_str: String = row.get(0)?;
    let user_str: String = row.get(1)?;
    let date_str: String = row.get(2)?;
    let snapshot_str: String = row.get(8)?;
    let recs_str: String = row.get(9)?;
    let created_str: String = row.get(10)?;

    let risk_factors: RiskFactorSnapshot =
        serde_json::from_str(&snapshot_str).unwrap_or(RiskFactorSnapshot {
            age: None,
            bmi: None,
            conditions: vec![],
        });

    Ok(RiskAssessment {
        id: Uuid::parse_str(&id_str).map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
        })?,
        user_id: Uuid::parse_str(&user_str).map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(1, rusqlite::types::Type::Text, Box::new(e))
        })?,
        assessment_date: NaiveDate::parse_from_str(&date_str, DATE_FMT).unwrap_or_default(),
        overall_risk_score: row.get(3)?,
        cardiovascular_risk: row.get(4)?,
        diabetes_risk: row.get(5)?,
        respiratory_risk: row.get(6)?,
        cancer_risk: row.get(7)?,
        risk_factors,
        recommendations: json_to_vec(&recs_str),
        created_at: NaiveDateTime::parse_from_str(&created_str, DATETIME_FMT).unwrap_or_default(),
    })
}

use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime};
use rusqlite::{params, Connection};
use uuid::Uuid;

use crate::db::DatabaseError;
use crate::models::enums::RiskTrend;
use crate::models::{ContributingFactor, DiseaseImpactAnalysis};

use super::{json_to_vec, vec_to_json, DATETIME_FMT, DATE_FMT};

/// Insert one analysis row. Regeneration appends; prior rows are kept.
pub fn insert_disease_impact(
    conn: &Connection,
    analysis: &DiseaseImpactAnalysis,
) -> Result<(), DatabaseError> {
    let factors = serde_json::to_string(&analysis.contributing_factors)
        .map_err(|e| DatabaseError::ConstraintViolation(e.to_string()))?;

    conn.execute(
        "INSERT INTO disease_impact_analyses (id, user_id, disease_name, current_risk_level,
                                              risk_trend, contributing_factors,
                                              preventive_actions, precautions,
                                              lifestyle_remedies, analysis_date, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
        params![
            analysis.id.to_string(),
            analysis.user_id.to_string(),
            analysis.disease_name,
            analysis.current_risk_level,
            analysis.risk_trend.as_str(),
            factors,
            vec_to_json(&analysis.preventive_actions),
            vec_to_json(&analysis.precautions),
            vec_to_json(&analysis.lifestyle_remedies),
            analysis.analysis_date.format(DATE_FMT).to_string(),
            analysis.created_at.format(DATETIME_FMT).to_string(),
        ],
    )?;
    Ok(())
}

/// Recent analyses, newest first. Consumers read in descending analysis
/// date so the latest batch supersedes older ones for display.
pub fn list_recent_disease_impacts(
    conn: &Connection,
    user_id: &Uuid,
    limit: usize,
) -> Result<Vec<DiseaseImpactAnalysis>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT id, user_id, disease_name, current_risk_level, risk_trend,
                contributing_factors, preventive_actions, precautions,
                lifestyle_remedies, analysis_date, created_at
         FROM disease_impact_analyses
         WHERE user_id = ?1
         ORDER BY analysis_date DESC, created_at DESC, rowid
         LIMIT ?2",
    )?;
    let rows = stmt.query_map(params![user_id.to_string(), limit], row_to_disease_impact)?;
    rows.collect::<Result<Vec<_>, _>>()
        .map_err(DatabaseError::from)
}

pub fn count_disease_impacts(conn: &Connection, user_id: &Uuid) -> Result<i64, DatabaseError> {
    let count = conn.query_row(
        "SELECT COUNT(*) FROM disease_impact_analyses WHERE user_id = ?1",
        params![user_id.to_string()],
        |row| row.get(0),
    )?;
    Ok(count)
}

fn row_to_disease_impact(row: &rusqlite::Row) -> Result<DiseaseImpactAnalysis, rusqlite::Error> {
    let id_str: String = row.get(0)?;
    let user_str: String = row.get(1)?;
    let trend_str: String = row.get(4)?;
    let factors_str: String = row.get(5)?;
    let preventive_str: String = row.get(6)?;
    let precautions_str: String = row.get(7)?;
    let remedies_str: String = row.get(8)?;
    let date_str: String = row.get(9)?;
    let created_str: String = row.get(10)?;

    let contributing_factors: Vec<ContributingFactor> =
        serde_json::from_str(&factors_str).unwrap_or_default();

    Ok(DiseaseImpactAnalysis {
        id: Uuid::parse_str(&id_str).map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
        })?,
        user_id: Uuid::parse_str(&user_str).map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(1, rusqlite::types::Type::Text, Box::new(e))
        })?,
        disease_name: row.get(2)?,
        current_risk_level: row.get(3)?,
        risk_trend: RiskTrend::from_str(&trend_str).unwrap_or(RiskTrend::Stable),
        contributing_factors,
        preventive_actions: json_to_vec(&preventive_str),
        precautions: json_to_vec(&precautions_str),
        lifestyle_remedies: json_to_vec(&remedies_str),
        analysis_date: NaiveDate::parse_from_str(&date_str, DATE_FMT).unwrap_or_default(),
        created_at: NaiveDateTime::parse_from_str(&created_str, DATETIME_FMT).unwrap_or_default(),
    })
}

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Inputs captured at computation time, so an assessment stays explainable
/// after the profile changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskFactorSnapshot {
    pub age: Option<i32>,
    pub bmi: Option<f64>,
    pub conditions: Vec<String>,
}

/// A computed risk assessment. Append-only: regeneration inserts a new row
/// and the latest by assessment date is authoritative for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub id: Uuid,
    pub user_id: Uuid,
    pub assessment_date: NaiveDate,
    /// 0–100
    pub overall_risk_score: i32,
    pub cardiovascular_risk: i32,
    pub diabetes_risk: i32,
    pub respiratory_risk: i32,
    pub cancer_risk: i32,
    pub risk_factors: RiskFactorSnapshot,
    /// Display order matters; duplicates are not filtered.
    pub recommendations: Vec<String>,
    pub created_at: NaiveDateTime,
}

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::enums::{FactorKey, RiskTrend};

/// One named factor with its explanation, chosen from two fixed text
/// variants depending on whether the factor's threshold was breached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContributingFactor {
    pub key: FactorKey,
    pub detail: String,
}

/// Per-disease habit analysis. Three rows are generated per invocation,
/// one per tracked disease; old rows are kept and superseded by date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiseaseImpactAnalysis {
    pub id: Uuid,
    pub user_id: Uuid,
    pub disease_name: String,
    /// 0–100
    pub current_risk_level: i32,
    pub risk_trend: RiskTrend,
    /// Ordered; key set is fixed per disease.
    pub contributing_factors: Vec<ContributingFactor>,
    pub preventive_actions: Vec<String>,
    pub precautions: Vec<String>,
    pub lifestyle_remedies: Vec<String>,
    pub analysis_date: NaiveDate,
    pub created_at: NaiveDateTime,
}

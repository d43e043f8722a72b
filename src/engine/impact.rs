use chrono::NaiveDate;
use uuid::Uuid;

use crate::models::enums::{FactorKey, RiskTrend};
use crate::models::{ContributingFactor, DailyLog, DiseaseImpactAnalysis, Profile};

use super::advice;
use super::types::{Disease, HabitAverages};

/// Every disease starts at this risk level before habit adjustments.
pub const BASE_RISK_LEVEL: i32 = 30;

/// Compute the per-disease impact analyses from recent daily logs (at most
/// the last 7; callers should require at least 3 logged days before
/// invoking — the engine itself has no minimum-count guard).
///
/// Returns exactly one analysis per tracked disease, in `Disease::ALL`
/// order.
pub fn compute_disease_impact(
    profile: &Profile,
    logs: &[DailyLog],
    today: NaiveDate,
) -> Vec<DiseaseImpactAnalysis> {
    let averages = HabitAverages::from_logs(logs);

    Disease::ALL
        .iter()
        .map(|&disease| {
            let (risk, trend, factors) = match disease {
                Disease::Cardiovascular => cardiovascular_rules(&averages),
                Disease::Type2Diabetes => diabetes_rules(&averages, profile),
                Disease::Hypertension => hypertension_rules(&averages),
            };

            DiseaseImpactAnalysis {
                id: Uuid::new_v4(),
                user_id: profile.id,
                disease_name: disease.name().to_string(),
                current_risk_level: risk.min(100),
                risk_trend: trend,
                contributing_factors: factors,
                preventive_actions: advice::preventive_actions(disease),
                precautions: advice::precautions(disease),
                lifestyle_remedies: advice::lifestyle_remedies(disease),
                analysis_date: today,
                created_at: chrono::Local::now().naive_local(),
            }
        })
        .collect()
}

fn cardiovascular_rules(
    avg: &HabitAverages,
) -> (i32, RiskTrend, Vec<ContributingFactor>) {
    let mut risk = BASE_RISK_LEVEL;
    if avg.exercise_minutes < 30.0 {
        risk += 15;
    }
    if avg.stress_level > 6.0 {
        risk += 10;
    }
    if avg.sleep_hours < 7.0 {
        risk += 10;
    }

    let trend = if avg.exercise_minutes > 30.0 && avg.stress_level < 7.0 {
        RiskTrend::Improving
    } else if avg.exercise_minutes < 20.0 {
        RiskTrend::Worsening
    } else {
        RiskTrend::Stable
    };

    let factors = vec![
        factor(
            FactorKey::Exercise,
            avg.exercise_minutes < 30.0,
            "Low physical activity increases heart disease risk",
            "Good activity level",
        ),
        factor(
            FactorKey::Stress,
            avg.stress_level > 6.0,
            "High stress levels are damaging your cardiovascular health",
            "Stress managed well",
        ),
        factor(
            FactorKey::Sleep,
            avg.sleep_hours < 7.0,
            "Insufficient sleep increases inflammation and heart strain",
            "Healthy sleep duration",
        ),
    ];

    (risk, trend, factors)
}

fn diabetes_rules(
    avg: &HabitAverages,
    profile: &Profile,
) -> (i32, RiskTrend, Vec<ContributingFactor>) {
    let mut risk = BASE_RISK_LEVEL;
    if avg.exercise_minutes < 20.0 {
        risk += 20;
    }
    if avg.sleep_hours < 6.0 {
        risk += 15;
    }

    // Never classified as worsening; only habits good enough on both axes
    // count as improving.
    let trend = if avg.exercise_minutes > 30.0 && avg.sleep_hours > 7.0 {
        RiskTrend::Improving
    } else {
        RiskTrend::Stable
    };

    let family_history = profile
        .medical_conditions
        .iter()
        .any(|c| c == "Diabetes");

    let factors = vec![
        factor(
            FactorKey::Exercise,
            avg.exercise_minutes < 20.0,
            "Sedentary lifestyle increases insulin resistance",
            "Physical activity helps regulate blood sugar",
        ),
        factor(
            FactorKey::Sleep,
            avg.sleep_hours < 6.0,
            "Poor sleep disrupts glucose metabolism and increases diabetes risk",
            "Adequate sleep supports metabolic health",
        ),
        factor(
            FactorKey::FamilyHistory,
            family_history,
            "Family history significantly increases your risk",
            "No known family history",
        ),
    ];

    (risk, trend, factors)
}

fn hypertension_rules(
    avg: &HabitAverages,
) -> (i32, RiskTrend, Vec<ContributingFactor>) {
    let mut risk = BASE_RISK_LEVEL;
    if avg.stress_level > 7.0 {
        risk += 20;
    }
    if avg.exercise_minutes < 25.0 {
        risk += 15;
    }

    let trend = if avg.stress_level > 8.0 {
        RiskTrend::Worsening
    } else if avg.stress_level < 5.0 && avg.exercise_minutes > 30.0 {
        RiskTrend::Improving
    } else {
        RiskTrend::Stable
    };

    let factors = vec![
        factor(
            FactorKey::Stress,
            avg.stress_level > 7.0,
            "Your stress levels are significantly increasing your blood pressure and hypertension risk",
            "Stress levels are manageable",
        ),
        factor(
            FactorKey::Exercise,
            avg.exercise_minutes < 25.0,
            "Lack of regular activity contributes to high blood pressure",
            "Good activity level",
        ),
        ContributingFactor {
            key: FactorKey::Lifestyle,
            detail: "Daily habits play a crucial role in blood pressure management".to_string(),
        },
    ];

    (risk, trend, factors)
}

fn factor(key: FactorKey, breached: bool, bad: &str, good: &str) -> ContributingFactor {
    ContributingFactor {
        key,
        detail: if breached { bad } else { good }.to_string(),
    }
}

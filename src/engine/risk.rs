use chrono::NaiveDate;
use rand::Rng;
use uuid::Uuid;

use crate::models::{HealthRecord, Profile, RiskAssessment, RiskFactorSnapshot};

/// Every assessment starts here before factor adjustments.
pub const BASE_RISK_SCORE: i32 = 20;

/// Compute a risk assessment from a profile and its recent vitals records
/// (most recent first; callers pass at most 10).
///
/// Integer arithmetic on a 0–100 scale, clamped at 100. Category scores are
/// the overall score plus a bounded random offset, skewed lower for
/// respiratory and cancer. The RNG is injected so callers can seed it;
/// exact offsets are not part of the contract, only their ranges.
pub fn compute_risk_assessment<R: Rng>(
    profile: &Profile,
    records: &[HealthRecord],
    today: NaiveDate,
    rng: &mut R,
) -> RiskAssessment {
    let age = profile.age_on(today);
    let bmi = profile.bmi();

    let mut overall = BASE_RISK_SCORE;

    if let Some(age) = age {
        if age > 65 {
            overall += 20;
        } else if age > 50 {
            overall += 15;
        } else if age > 40 {
            overall += 10;
        }
    }

    if let Some(bmi) = bmi {
        if bmi > 30.0 {
            overall += 15;
        } else if bmi > 25.0 {
            overall += 10;
        }
    }

    overall += 5 * profile.medical_conditions.len() as i32;

    if let Some(avg_systolic) = average_systolic(records) {
        if avg_systolic > 140.0 {
            overall += 15;
        } else if avg_systolic > 130.0 {
            overall += 10;
        }
    }

    let overall = overall.min(100);

    let cardiovascular = (overall + rng.gen_range(-5..5)).clamp(0, 100);
    let diabetes = (overall + rng.gen_range(-10..5)).clamp(0, 100);
    let respiratory = (overall + rng.gen_range(-15..-5)).clamp(0, 100);
    let cancer = (overall + rng.gen_range(-20..-10)).clamp(0, 100);

    let recommendations = build_recommendations(overall, cardiovascular, diabetes, bmi);

    RiskAssessment {
        id: Uuid::new_v4(),
        user_id: profile.id,
        assessment_date: today,
        overall_risk_score: overall,
        cardiovascular_risk: cardiovascular,
        diabetes_risk: diabetes,
        respiratory_risk: respiratory,
        cancer_risk: cancer,
        risk_factors: RiskFactorSnapshot {
            age,
            bmi,
            conditions: profile.medical_conditions.clone(),
        },
        recommendations,
        created_at: chrono::Local::now().naive_local(),
    }
}

/// Mean systolic pressure across records that have one.
fn average_systolic(records: &[HealthRecord]) -> Option<f64> {
    let readings: Vec<i32> = records.iter().filter_map(|r| r.systolic).collect();
    if readings.is_empty() {
        return None;
    }
    Some(readings.iter().map(|&v| f64::from(v)).sum::<f64>() / readings.len() as f64)
}

/// Fixed conditional sequence; order is the display order. The last two
/// entries are always present, and duplicates are not filtered.
fn build_recommendations(
    overall: i32,
    cardiovascular: i32,
    diabetes: i32,
    bmi: Option<f64>,
) -> Vec<String> {
    let mut recommendations = Vec::new();

    if overall > 50 {
        recommendations
            .push("Schedule a comprehensive health check-up with your physician".to_string());
    }
    if cardiovascular > 60 {
        recommendations
            .push("Monitor your blood pressure regularly and consult a cardiologist".to_string());
    }
    if diabetes > 60 {
        recommendations
            .push("Consider a glucose tolerance test and dietary modifications".to_string());
    }
    if let Some(bmi) = bmi {
        if bmi > 25.0 {
            recommendations.push(
                "Maintain a healthy weight through balanced diet and regular exercise".to_string(),
            );
        }
    }

    recommendations.push("Stay hydrated and get at least 7-8 hours of sleep daily".to_string());
    recommendations
        .push("Consider stress management techniques such as meditation or yoga".to_string());

    recommendations
}

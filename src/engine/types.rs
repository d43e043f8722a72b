use serde::{Deserialize, Serialize};

use crate::models::DailyLog;

/// The three diseases tracked by the impact engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disease {
    Cardiovascular,
    Type2Diabetes,
    Hypertension,
}

impl Disease {
    pub const ALL: [Disease; 3] = [
        Disease::Cardiovascular,
        Disease::Type2Diabetes,
        Disease::Hypertension,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Disease::Cardiovascular => "Cardiovascular Disease",
            Disease::Type2Diabetes => "Type 2 Diabetes",
            Disease::Hypertension => "Hypertension",
        }
    }
}

/// Arithmetic means over a window of daily logs.
///
/// Missing fields count as 0, which biases averages downward when logs are
/// sparse. That bias is intentional — the thresholds in `impact` were tuned
/// against it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HabitAverages {
    pub sleep_hours: f64,
    pub exercise_minutes: f64,
    pub stress_level: f64,
}

impl HabitAverages {
    /// Compute averages over the given logs. An empty slice yields zeros.
    pub fn from_logs(logs: &[DailyLog]) -> Self {
        if logs.is_empty() {
            return Self {
                sleep_hours: 0.0,
                exercise_minutes: 0.0,
                stress_level: 0.0,
            };
        }

        let n = logs.len() as f64;
        let sleep: f64 = logs.iter().map(|l| l.sleep_hours.unwrap_or(0.0)).sum();
        let exercise: f64 = logs
            .iter()
            .map(|l| f64::from(l.exercise_minutes.unwrap_or(0)))
            .sum();
        let stress: f64 = logs
            .iter()
            .map(|l| f64::from(l.stress_level.unwrap_or(0)))
            .sum();

        Self {
            sleep_hours: sleep / n,
            exercise_minutes: exercise / n,
            stress_level: stress / n,
        }
    }
}

/// Canned classification bundle for an uploaded report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportAnalysis {
    pub findings: Vec<String>,
    pub risk_factors: Vec<String>,
    pub recommendations: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use uuid::Uuid;

    fn log(sleep: Option<f64>, exercise: Option<i32>, stress: Option<i32>) -> DailyLog {
        DailyLog {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            log_date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            sleep_hours: sleep,
            exercise_minutes: exercise,
            stress_level: stress,
            calories_intake: None,
            water_intake_ml: None,
            mood_level: None,
            notes: None,
            created_at: Default::default(),
        }
    }

    #[test]
    fn averages_over_full_logs() {
        let logs = vec![
            log(Some(6.0), Some(30), Some(4)),
            log(Some(8.0), Some(60), Some(6)),
        ];
        let avg = HabitAverages::from_logs(&logs);
        assert_eq!(avg.sleep_hours, 7.0);
        assert_eq!(avg.exercise_minutes, 45.0);
        assert_eq!(avg.stress_level, 5.0);
    }

    #[test]
    fn missing_fields_count_as_zero() {
        let logs = vec![log(Some(8.0), None, Some(6)), log(None, Some(40), None)];
        let avg = HabitAverages::from_logs(&logs);
        assert_eq!(avg.sleep_hours, 4.0);
        assert_eq!(avg.exercise_minutes, 20.0);
        assert_eq!(avg.stress_level, 3.0);
    }

    #[test]
    fn empty_logs_yield_zeros() {
        let avg = HabitAverages::from_logs(&[]);
        assert_eq!(avg.sleep_hours, 0.0);
        assert_eq!(avg.exercise_minutes, 0.0);
        assert_eq!(avg.stress_level, 0.0);
    }
}

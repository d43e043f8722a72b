//! User-action orchestration.
//!
//! One function per user-initiated action: fetch the user's records, run
//! the relevant engine, persist the results. Every write is additive and
//! scoped to a single user, so no locking is needed; the only ordering
//! requirement is that a chat response lands after its triggering message.

use chrono::NaiveDate;
use rand::Rng;
use rusqlite::Connection;
use thiserror::Error;
use uuid::Uuid;

use crate::db::repository::{
    count_daily_logs, count_health_records, count_medical_reports, get_daily_log_for_date,
    get_latest_health_record, get_latest_risk_assessment, get_profile, get_recent_daily_logs,
    get_recent_health_records, insert_chat_message, insert_disease_impact, insert_health_record,
    insert_medical_report, insert_risk_assessment, upsert_daily_log, upsert_profile,
};
use crate::db::DatabaseError;
use crate::engine;
use crate::models::enums::MessageRole;
use crate::models::{
    ChatMessage, DailyLog, DiseaseImpactAnalysis, HealthRecord, MedicalReport, Profile,
    RiskAssessment,
};

/// Risk scoring reads at most this many recent vitals records.
pub const RISK_RECORD_WINDOW: usize = 10;
/// Impact analysis reads at most this many recent daily logs.
pub const IMPACT_LOG_WINDOW: usize = 7;
/// Impact analysis needs at least this many logged days.
pub const IMPACT_MIN_LOGS: usize = 3;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Profile not found for user {0}")]
    ProfileNotFound(Uuid),

    #[error("Not enough daily logs: need {needed}, have {available}")]
    InsufficientData { needed: usize, available: usize },

    #[error("Invalid {field}: {reason}")]
    Validation { field: &'static str, reason: String },

    #[error(transparent)]
    Database(#[from] DatabaseError),
}

fn invalid(field: &'static str, reason: impl Into<String>) -> ServiceError {
    ServiceError::Validation {
        field,
        reason: reason.into(),
    }
}

fn require_profile(conn: &Connection, user_id: &Uuid) -> Result<Profile, ServiceError> {
    get_profile(conn, user_id)?.ok_or(ServiceError::ProfileNotFound(*user_id))
}

// ───────────────────────────────────────────────────────────────────────────
// Profile & data entry
// ───────────────────────────────────────────────────────────────────────────

/// Create or update a user's profile.
pub fn save_profile(conn: &Connection, profile: &Profile) -> Result<(), ServiceError> {
    for (field, value) in [
        ("height_cm", profile.height_cm),
        ("weight_kg", profile.weight_kg),
    ] {
        if let Some(v) = value {
            if !v.is_finite() || v <= 0.0 {
                return Err(invalid(field, format!("must be a positive number, got {v}")));
            }
        }
    }

    upsert_profile(conn, profile)?;
    tracing::info!(user_id = %profile.id, "Profile saved");
    Ok(())
}

/// Vitals as submitted by the record form; all measurements optional.
#[derive(Debug, Clone, Default)]
pub struct HealthRecordInput {
    pub record_date: NaiveDate,
    pub heart_rate: Option<i32>,
    pub systolic: Option<i32>,
    pub diastolic: Option<i32>,
    pub blood_sugar: Option<f64>,
    pub temperature: Option<f64>,
    pub weight_kg: Option<f64>,
    pub oxygen_saturation: Option<i32>,
    pub notes: Option<String>,
}

impl HealthRecordInput {
    fn validate(&self) -> Result<(), ServiceError> {
        for (field, value) in [
            ("heart_rate", self.heart_rate),
            ("systolic", self.systolic),
            ("diastolic", self.diastolic),
            ("oxygen_saturation", self.oxygen_saturation),
        ] {
            if let Some(v) = value {
                if v <= 0 {
                    return Err(invalid(field, format!("must be positive, got {v}")));
                }
            }
        }
        for (field, value) in [
            ("blood_sugar", self.blood_sugar),
            ("temperature", self.temperature),
            ("weight_kg", self.weight_kg),
        ] {
            if let Some(v) = value {
                if !v.is_finite() || v <= 0.0 {
                    return Err(invalid(field, format!("must be a positive number, got {v}")));
                }
            }
        }
        if let Some(sat) = self.oxygen_saturation {
            if sat > 100 {
                return Err(invalid("oxygen_saturation", format!("must be 0-100, got {sat}")));
            }
        }
        Ok(())
    }
}

/// Store one vitals record. Records are append-only; several per day are
/// allowed.
pub fn save_health_record(
    conn: &Connection,
    user_id: Uuid,
    input: HealthRecordInput,
) -> Result<HealthRecord, ServiceError> {
    input.validate()?;
    require_profile(conn, &user_id)?;

    let record = HealthRecord {
        id: Uuid::new_v4(),
        user_id,
        record_date: input.record_date,
        heart_rate: input.heart_rate,
        systolic: input.systolic,
        diastolic: input.diastolic,
        blood_sugar: input.blood_sugar,
        temperature: input.temperature,
        weight_kg: input.weight_kg,
        oxygen_saturation: input.oxygen_saturation,
        notes: input.notes,
        created_at: chrono::Local::now().naive_local(),
    };
    insert_health_record(conn, &record)?;
    Ok(record)
}

/// Daily habits as submitted by the log form.
#[derive(Debug, Clone, Default)]
pub struct DailyLogInput {
    pub log_date: NaiveDate,
    pub sleep_hours: Option<f64>,
    pub exercise_minutes: Option<i32>,
    pub stress_level: Option<i32>,
    pub calories_intake: Option<i32>,
    pub water_intake_ml: Option<i32>,
    pub mood_level: Option<i32>,
    pub notes: Option<String>,
}

impl DailyLogInput {
    fn validate(&self) -> Result<(), ServiceError> {
        if let Some(sleep) = self.sleep_hours {
            if !sleep.is_finite() || !(0.0..=24.0).contains(&sleep) {
                return Err(invalid("sleep_hours", format!("must be 0-24, got {sleep}")));
            }
        }
        for (field, value) in [
            ("stress_level", self.stress_level),
            ("mood_level", self.mood_level),
        ] {
            if let Some(v) = value {
                if !(1..=10).contains(&v) {
                    return Err(invalid(field, format!("must be 1-10, got {v}")));
                }
            }
        }
        for (field, value) in [
            ("exercise_minutes", self.exercise_minutes),
            ("calories_intake", self.calories_intake),
            ("water_intake_ml", self.water_intake_ml),
        ] {
            if let Some(v) = value {
                if v < 0 {
                    return Err(invalid(field, format!("must not be negative, got {v}")));
                }
            }
        }
        Ok(())
    }
}

/// Store the daily log for a date, overwriting an earlier entry for the
/// same day.
pub fn save_daily_log(
    conn: &Connection,
    user_id: Uuid,
    input: DailyLogInput,
) -> Result<DailyLog, ServiceError> {
    input.validate()?;
    require_profile(conn, &user_id)?;

    let log = DailyLog {
        id: Uuid::new_v4(),
        user_id,
        log_date: input.log_date,
        sleep_hours: input.sleep_hours,
        exercise_minutes: input.exercise_minutes,
        stress_level: input.stress_level,
        calories_intake: input.calories_intake,
        water_intake_ml: input.water_intake_ml,
        mood_level: input.mood_level,
        notes: input.notes,
        created_at: chrono::Local::now().naive_local(),
    };
    upsert_daily_log(conn, &log)?;
    // Re-read: on conflict the stored row keeps its original id.
    let stored = get_daily_log_for_date(conn, &user_id, log.log_date)?;
    Ok(stored.unwrap_or(log))
}

// ───────────────────────────────────────────────────────────────────────────
// Engine-backed actions
// ───────────────────────────────────────────────────────────────────────────

/// Generate and persist a new risk assessment from the profile and the
/// last 10 vitals records. Fails with `ProfileNotFound` before any write.
pub fn generate_risk_assessment<R: Rng>(
    conn: &Connection,
    user_id: Uuid,
    today: NaiveDate,
    rng: &mut R,
) -> Result<RiskAssessment, ServiceError> {
    let profile = require_profile(conn, &user_id)?;
    let records = get_recent_health_records(conn, &user_id, RISK_RECORD_WINDOW)?;

    let assessment = engine::risk::compute_risk_assessment(&profile, &records, today, rng);
    insert_risk_assessment(conn, &assessment)?;

    tracing::info!(
        user_id = %user_id,
        overall = assessment.overall_risk_score,
        records = records.len(),
        "Risk assessment generated"
    );
    Ok(assessment)
}

/// Generate and persist the three disease-impact analyses from the last 7
/// daily logs. Requires at least 3 logged days.
pub fn generate_disease_insights(
    conn: &Connection,
    user_id: Uuid,
    today: NaiveDate,
) -> Result<Vec<DiseaseImpactAnalysis>, ServiceError> {
    let profile = require_profile(conn, &user_id)?;
    let logs = get_recent_daily_logs(conn, &user_id, IMPACT_LOG_WINDOW)?;

    if logs.len() < IMPACT_MIN_LOGS {
        return Err(ServiceError::InsufficientData {
            needed: IMPACT_MIN_LOGS,
            available: logs.len(),
        });
    }

    let analyses = engine::impact::compute_disease_impact(&profile, &logs, today);
    for analysis in &analyses {
        insert_disease_impact(conn, analysis)?;
    }

    tracing::info!(user_id = %user_id, logs = logs.len(), "Disease insights generated");
    Ok(analyses)
}

/// A stored user message and the assistant's stored reply.
#[derive(Debug, Clone)]
pub struct ChatExchange {
    pub user_message: ChatMessage,
    pub assistant_message: ChatMessage,
}

/// Persist a user message and the generated response. Both rows commit in
/// one transaction: a failed insert aborts the whole exchange.
pub fn send_chat_message(
    conn: &Connection,
    user_id: Uuid,
    text: &str,
) -> Result<ChatExchange, ServiceError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(invalid("message", "must not be empty"));
    }

    let profile = require_profile(conn, &user_id)?;
    let response = engine::chat::respond(trimmed, &profile.full_name);
    let now = chrono::Local::now().naive_local();

    let user_message = ChatMessage {
        id: Uuid::new_v4(),
        user_id,
        role: MessageRole::User,
        content: trimmed.to_string(),
        created_at: now,
    };
    let assistant_message = ChatMessage {
        id: Uuid::new_v4(),
        user_id,
        role: MessageRole::Assistant,
        content: response,
        created_at: now,
    };

    let tx = conn
        .unchecked_transaction()
        .map_err(DatabaseError::from)?;
    insert_chat_message(&tx, &user_message)?;
    insert_chat_message(&tx, &assistant_message)?;
    tx.commit().map_err(DatabaseError::from)?;

    Ok(ChatExchange {
        user_message,
        assistant_message,
    })
}

/// An uploaded report's metadata; file contents are never read.
#[derive(Debug, Clone)]
pub struct ReportUpload {
    pub report_type: String,
    pub report_date: NaiveDate,
    pub file_name: String,
}

/// Classify an uploaded report and persist it.
pub fn analyze_report(
    conn: &Connection,
    user_id: Uuid,
    upload: ReportUpload,
) -> Result<MedicalReport, ServiceError> {
    if upload.report_type.trim().is_empty() {
        return Err(invalid("report_type", "must not be empty"));
    }
    if upload.file_name.trim().is_empty() {
        return Err(invalid("file_name", "must not be empty"));
    }
    require_profile(conn, &user_id)?;

    let analysis = engine::report::classify(&upload.report_type);
    let report = MedicalReport {
        id: Uuid::new_v4(),
        user_id,
        report_type: upload.report_type,
        report_date: upload.report_date,
        // Storage backend is out of scope; only the reference is kept.
        file_url: format!("placeholder-url/{}", upload.file_name),
        file_name: upload.file_name,
        findings: analysis.findings,
        risk_factors: analysis.risk_factors,
        recommendations: analysis.recommendations,
        created_at: chrono::Local::now().naive_local(),
    };
    insert_medical_report(conn, &report)?;

    tracing::info!(user_id = %user_id, report_type = %report.report_type, "Report analyzed");
    Ok(report)
}

// ───────────────────────────────────────────────────────────────────────────
// Dashboard
// ───────────────────────────────────────────────────────────────────────────

/// Overview numbers for the landing page.
#[derive(Debug, Clone)]
pub struct DashboardSummary {
    pub full_name: String,
    pub records_count: i64,
    pub reports_count: i64,
    pub logged_days: i64,
    pub latest_record: Option<HealthRecord>,
    pub latest_assessment: Option<RiskAssessment>,
}

pub fn dashboard_summary(
    conn: &Connection,
    user_id: Uuid,
) -> Result<DashboardSummary, ServiceError> {
    let profile = require_profile(conn, &user_id)?;
    Ok(DashboardSummary {
        full_name: profile.full_name,
        records_count: count_health_records(conn, &user_id)?,
        reports_count: count_medical_reports(conn, &user_id)?,
        logged_days: count_daily_logs(conn, &user_id)?,
        latest_record: get_latest_health_record(conn, &user_id)?,
        latest_assessment: get_latest_risk_assessment(conn, &user_id)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::{list_chat_messages, list_risk_assessments};
    use crate::db::sqlite::open_memory_database;
    use crate::models::enums::RiskTrend;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    fn seed_user(conn: &Connection) -> Uuid {
        let profile = Profile {
            id: Uuid::new_v4(),
            full_name: "Asha Rao".into(),
            date_of_birth: NaiveDate::from_ymd_opt(1972, 3, 9),
            gender: None,
            height_cm: Some(162.0),
            weight_kg: Some(58.5),
            phone: None,
            emergency_contact_name: None,
            emergency_contact_phone: None,
            medical_conditions: vec![],
            allergies: vec![],
            medications: vec![],
            updated_at: chrono::Local::now().naive_local(),
        };
        save_profile(conn, &profile).unwrap();
        profile.id
    }

    fn log_input(day: u32, exercise: i32) -> DailyLogInput {
        DailyLogInput {
            log_date: NaiveDate::from_ymd_opt(2025, 6, day).unwrap(),
            sleep_hours: Some(7.0),
            exercise_minutes: Some(exercise),
            stress_level: Some(4),
            ..Default::default()
        }
    }

    #[test]
    fn missing_profile_fails_without_writes() {
        let conn = open_memory_database().unwrap();
        let user = Uuid::new_v4();
        let mut rng = StdRng::seed_from_u64(1);

        let err = generate_risk_assessment(&conn, user, today(), &mut rng);
        assert!(matches!(err, Err(ServiceError::ProfileNotFound(_))));

        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM risk_assessments", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 0);
    }

    #[test]
    fn risk_assessment_persists_one_row_per_generation() {
        let conn = open_memory_database().unwrap();
        let user = seed_user(&conn);
        let mut rng = StdRng::seed_from_u64(1);

        let first = generate_risk_assessment(&conn, user, today(), &mut rng).unwrap();
        let second = generate_risk_assessment(&conn, user, today(), &mut rng).unwrap();
        assert_ne!(first.id, second.id);

        let all = list_risk_assessments(&conn, &user).unwrap();
        assert_eq!(all.len(), 2);
    }

    #[test]
    fn insights_require_three_logged_days() {
        let conn = open_memory_database().unwrap();
        let user = seed_user(&conn);
        save_daily_log(&conn, user, log_input(1, 30)).unwrap();
        save_daily_log(&conn, user, log_input(2, 30)).unwrap();

        let err = generate_disease_insights(&conn, user, today());
        assert!(matches!(
            err,
            Err(ServiceError::InsufficientData {
                needed: 3,
                available: 2
            })
        ));

        save_daily_log(&conn, user, log_input(3, 30)).unwrap();
        let analyses = generate_disease_insights(&conn, user, today()).unwrap();
        assert_eq!(analyses.len(), 3);
    }

    #[test]
    fn insights_append_three_rows_per_run() {
        let conn = open_memory_database().unwrap();
        let user = seed_user(&conn);
        for day in 1..=3 {
            save_daily_log(&conn, user, log_input(day, 0)).unwrap();
        }

        generate_disease_insights(&conn, user, today()).unwrap();
        generate_disease_insights(&conn, user, today()).unwrap();

        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM disease_impact_analyses", [], |row| {
                row.get(0)
            })
            .unwrap();
        assert_eq!(count, 6);
    }

    #[test]
    fn sedentary_logs_show_worsening_cardiovascular_trend() {
        let conn = open_memory_database().unwrap();
        let user = seed_user(&conn);
        for day in 1..=3 {
            let input = DailyLogInput {
                log_date: NaiveDate::from_ymd_opt(2025, 6, day).unwrap(),
                sleep_hours: Some(5.0),
                exercise_minutes: Some(0),
                stress_level: Some(9),
                ..Default::default()
            };
            save_daily_log(&conn, user, input).unwrap();
        }

        let analyses = generate_disease_insights(&conn, user, today()).unwrap();
        let cardio = analyses
            .iter()
            .find(|a| a.disease_name == "Cardiovascular Disease")
            .unwrap();
        assert_eq!(cardio.current_risk_level, 65);
        assert_eq!(cardio.risk_trend, RiskTrend::Worsening);
    }

    #[test]
    fn chat_exchange_persists_both_messages_in_order() {
        let conn = open_memory_database().unwrap();
        let user = seed_user(&conn);

        let exchange = send_chat_message(&conn, user, "What about my blood pressure?").unwrap();
        assert!(exchange
            .assistant_message
            .content
            .starts_with("Blood pressure is an important indicator"));

        let transcript = list_chat_messages(&conn, &user).unwrap();
        assert_eq!(transcript.len(), 2);
        assert_eq!(transcript[0].role, MessageRole::User);
        assert_eq!(transcript[0].content, "What about my blood pressure?");
        assert_eq!(transcript[1].role, MessageRole::Assistant);
    }

    #[test]
    fn chat_greeting_uses_profile_name() {
        let conn = open_memory_database().unwrap();
        let user = seed_user(&conn);
        let exchange = send_chat_message(&conn, user, "hello").unwrap();
        assert!(exchange.assistant_message.content.starts_with("Hello Asha Rao!"));
    }

    #[test]
    fn blank_chat_message_rejected() {
        let conn = open_memory_database().unwrap();
        let user = seed_user(&conn);
        let err = send_chat_message(&conn, user, "   ");
        assert!(matches!(err, Err(ServiceError::Validation { field: "message", .. })));
        assert!(list_chat_messages(&conn, &user).unwrap().is_empty());
    }

    #[test]
    fn report_upload_classifies_and_persists() {
        let conn = open_memory_database().unwrap();
        let user = seed_user(&conn);

        let report = analyze_report(
            &conn,
            user,
            ReportUpload {
                report_type: "Blood Test".into(),
                report_date: today(),
                file_name: "cbc_june.pdf".into(),
            },
        )
        .unwrap();

        assert_eq!(report.findings.len(), 3);
        assert_eq!(report.file_url, "placeholder-url/cbc_june.pdf");
        assert_eq!(count_medical_reports(&conn, &user).unwrap(), 1);
    }

    #[test]
    fn numeric_range_validation_runs_before_writes() {
        let conn = open_memory_database().unwrap();
        let user = seed_user(&conn);

        let bad = DailyLogInput {
            log_date: today(),
            stress_level: Some(11),
            ..Default::default()
        };
        let err = save_daily_log(&conn, user, bad);
        assert!(matches!(
            err,
            Err(ServiceError::Validation { field: "stress_level", .. })
        ));
        assert_eq!(count_daily_logs(&conn, &user).unwrap(), 0);

        let bad = HealthRecordInput {
            record_date: today(),
            oxygen_saturation: Some(120),
            ..Default::default()
        };
        let err = save_health_record(&conn, user, bad);
        assert!(matches!(err, Err(ServiceError::Validation { .. })));
    }

    #[test]
    fn profile_height_must_be_positive() {
        let conn = open_memory_database().unwrap();
        let profile = Profile {
            id: Uuid::new_v4(),
            full_name: "Bad Height".into(),
            date_of_birth: None,
            gender: None,
            height_cm: Some(-170.0),
            weight_kg: None,
            phone: None,
            emergency_contact_name: None,
            emergency_contact_phone: None,
            medical_conditions: vec![],
            allergies: vec![],
            medications: vec![],
            updated_at: chrono::Local::now().naive_local(),
        };
        let err = save_profile(&conn, &profile);
        assert!(matches!(
            err,
            Err(ServiceError::Validation { field: "height_cm", .. })
        ));
    }

    #[test]
    fn dashboard_summary_counts_entities() {
        let conn = open_memory_database().unwrap();
        let user = seed_user(&conn);

        save_health_record(
            &conn,
            user,
            HealthRecordInput {
                record_date: today(),
                systolic: Some(120),
                diastolic: Some(80),
                ..Default::default()
            },
        )
        .unwrap();
        save_daily_log(&conn, user, log_input(1, 30)).unwrap();
        analyze_report(
            &conn,
            user,
            ReportUpload {
                report_type: "X-Ray".into(),
                report_date: today(),
                file_name: "chest.png".into(),
            },
        )
        .unwrap();

        let summary = dashboard_summary(&conn, user).unwrap();
        assert_eq!(summary.full_name, "Asha Rao");
        assert_eq!(summary.records_count, 1);
        assert_eq!(summary.reports_count, 1);
        assert_eq!(summary.logged_days, 1);
        assert!(summary.latest_record.is_some());
        assert!(summary.latest_assessment.is_none());
    }
}

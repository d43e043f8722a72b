pub mod chat_message;
pub mod daily_log;
pub mod disease_impact;
pub mod enums;
pub mod health_record;
pub mod medical_report;
pub mod profile;
pub mod risk_assessment;

pub use chat_message::ChatMessage;
pub use daily_log::DailyLog;
pub use disease_impact::{ContributingFactor, DiseaseImpactAnalysis};
pub use health_record::HealthRecord;
pub use medical_report::MedicalReport;
pub use profile::Profile;
pub use risk_assessment::{RiskAssessment, RiskFactorSnapshot};

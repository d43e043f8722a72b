//! Scoring and insight engines.
//!
//! Pure computation over already-fetched records — no storage access. Each
//! engine takes plain data and returns the rows to persist; the service
//! layer (`crate::service`) does the fetching and writing around them.
//!
//! - `risk`: overall + per-category risk from profile and recent vitals
//! - `impact`: per-disease risk level, trend, and advice from daily habits
//! - `chat`: keyword-matched canned responses
//! - `report`: report-type → findings/risks/recommendations lookup

pub mod advice;
pub mod chat;
pub mod impact;
pub mod report;
pub mod risk;
pub mod types;

pub use types::{Disease, HabitAverages, ReportAnalysis};

//! Regional health-alert reference data.
//!
//! A static directory of advisories keyed by state name, bundled as JSON
//! under `resources/`. Lookup only — the engine never derives anything
//! from this data.

use std::collections::BTreeMap;
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::enums::AlertSeverity;

const BUNDLED_ALERTS: &str = include_str!("../resources/state_health_alerts.json");

/// One regional advisory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthAlert {
    pub id: String,
    pub title: String,
    pub description: String,
    pub severity: AlertSeverity,
    pub source: String,
    pub source_url: String,
    pub date: NaiveDate,
}

#[derive(Error, Debug)]
pub enum ReferenceError {
    #[error("Failed to load reference data from {0}: {1}")]
    Load(String, String),

    #[error("Failed to parse reference data {0}: {1}")]
    Parse(String, String),
}

/// Alert directory keyed by state name.
pub struct AlertDirectory {
    alerts: BTreeMap<String, Vec<HealthAlert>>,
}

impl AlertDirectory {
    /// Load the directory from a JSON file in the resources directory.
    pub fn load(resources_dir: &Path) -> Result<Self, ReferenceError> {
        let path = resources_dir.join("state_health_alerts.json");
        let json = std::fs::read_to_string(&path)
            .map_err(|e| ReferenceError::Load(path.display().to_string(), e.to_string()))?;
        Self::from_json(&json)
    }

    /// Parse the copy compiled into the binary.
    pub fn bundled() -> Result<Self, ReferenceError> {
        Self::from_json(BUNDLED_ALERTS)
    }

    fn from_json(json: &str) -> Result<Self, ReferenceError> {
        let alerts: BTreeMap<String, Vec<HealthAlert>> = serde_json::from_str(json)
            .map_err(|e| {
                ReferenceError::Parse("state_health_alerts.json".into(), e.to_string())
            })?;
        Ok(Self { alerts })
    }

    /// All known state names, sorted.
    pub fn states(&self) -> Vec<&str> {
        self.alerts.keys().map(String::as_str).collect()
    }

    /// Alerts for a state; unknown states have none.
    pub fn alerts_for(&self, state: &str) -> &[HealthAlert] {
        self.alerts.get(state).map(Vec::as_slice).unwrap_or(&[])
    }
}

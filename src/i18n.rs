//! UI string lookup.
//!
//! The selected language is an explicit value threaded by the caller, not
//! process-wide state. Unknown keys fall back to the key itself so missing
//! translations stay visible instead of blanking the UI.

use crate::db::DatabaseError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    En,
    Hi,
}

impl Language {
    pub fn as_str(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Hi => "hi",
        }
    }
}

impl std::str::FromStr for Language {
    type Err = DatabaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Language::En),
            "hi" => Ok(Language::Hi),
            _ => Err(DatabaseError::InvalidEnum {
                field: "Language".into(),
                value: s.into(),
            }),
        }
    }
}

// (key, English, Hindi)
const TRANSLATIONS: &[(&str, &str, &str)] = &[
    ("dashboard", "Dashboard", "डैशबोर्ड"),
    ("health_records", "Health Records", "स्वास्थ्य रिकॉर्ड"),
    ("reports", "Reports", "रिपोर्ट"),
    ("articles", "Health Articles", "स्वास्थ्य लेख"),
    ("health_progress", "Health Progress", "स्वास्थ्य प्रगति"),
    ("health_alerts", "Health Alerts", "स्वास्थ्य चेतावनी"),
    ("chatbot", "AI Assistant", "AI सहायक"),
    ("profile", "Profile", "प्रोफ़ाइल"),
    ("nav.sign_out", "Sign Out", "साइन आउट"),
    ("dashboard.welcome", "Welcome back", "वापस स्वागत है"),
    (
        "dashboard.overview",
        "Here's an overview of your health journey",
        "यहाँ आपकी स्वास्थ्य यात्रा का अवलोकन है",
    ),
    ("dashboard.health_records", "Health Records", "स्वास्थ्य रिकॉर्ड"),
    ("dashboard.medical_reports", "Medical Reports", "चिकित्सा रिपोर्ट"),
    ("dashboard.risk_score", "Risk Score", "जोखिम स्कोर"),
    ("dashboard.total_entries", "Total entries logged", "कुल प्रविष्टियाँ दर्ज"),
    ("dashboard.reports_analyzed", "Reports analyzed", "रिपोर्ट विश्लेषित"),
    ("dashboard.last_updated", "Last updated", "अंतिम अपडेट"),
    ("dashboard.no_assessment", "No assessment yet", "अभी तक कोई मूल्यांकन नहीं"),
    ("dashboard.quick_actions", "Quick Actions", "त्वरित क्रियाएं"),
    (
        "dashboard.common_tasks",
        "Common tasks to manage your health",
        "अपने स्वास्थ्य का प्रबंधन करने के लिए सामान्य कार्य",
    ),
    ("dashboard.log_health_data", "Log Health Data", "स्वास्थ्य डेटा लॉग करें"),
    (
        "dashboard.upload_report",
        "Upload Medical Report",
        "चिकित्सा रिपोर्ट अपलोड करें",
    ),
    ("dashboard.chat_ai", "Chat with AI Assistant", "AI सहायक से बात करें"),
    ("dashboard.latest_reading", "Latest Reading", "नवीनतम पाठन"),
    (
        "dashboard.recent_measurement",
        "Your most recent health measurement",
        "आपका सबसे हालिया स्वास्थ्य माप",
    ),
    (
        "dashboard.no_records",
        "No health records yet",
        "अभी तक कोई स्वास्थ्य रिकॉर्ड नहीं",
    ),
    ("dashboard.add_first_record", "Add your first record", "अपना पहला रिकॉर्ड जोड़ें"),
    ("language.english", "English", "English"),
    ("language.hindi", "हिंदी", "हिंदी"),
];

/// Look up a UI string. Unknown keys return the key unchanged.
pub fn translate<'a>(key: &'a str, lang: Language) -> &'a str {
    TRANSLATIONS
        .iter()
        .find(|(k, _, _)| *k == key)
        .map(|(_, en, hi)| match lang {
            Language::En => *en,
            Language::Hi => *hi,
        })
        .unwrap_or(key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn english_and_hindi_lookups() {
        assert_eq!(translate("dashboard.risk_score", Language::En), "Risk Score");
        assert_eq!(translate("dashboard.risk_score", Language::Hi), "जोखिम स्कोर");
    }

    #[test]
    fn unknown_key_falls_back_to_key() {
        assert_eq!(translate("dashboard.unknown", Language::En), "dashboard.unknown");
        assert_eq!(translate("dashboard.unknown", Language::Hi), "dashboard.unknown");
    }

    #[test]
    fn language_codes_round_trip() {
        assert_eq!(Language::from_str("en").unwrap(), Language::En);
        assert_eq!(Language::from_str("hi").unwrap(), Language::Hi);
        assert!(Language::from_str("fr").is_err());
    }
}

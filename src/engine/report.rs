//! Report classifier — a fixed lookup from report type to a canned
//! findings/risk/recommendation bundle. File contents are never inspected.

use super::types::ReportAnalysis;

/// Report types offered by the upload form. Classification still accepts
/// any string; unknown types get the default bundle.
pub const REPORT_TYPES: [&str; 9] = [
    "Blood Test",
    "X-Ray",
    "MRI Scan",
    "CT Scan",
    "Ultrasound",
    "ECG",
    "Pathology Report",
    "Prescription",
    "Other",
];

/// Classify a report by its type label. Pure lookup: identical input
/// yields identical output.
pub fn classify(report_type: &str) -> ReportAnalysis {
    let (findings, risk_factors, recommendations): (&[&str], &[&str], &[&str]) = match report_type
    {
        "Blood Test" => (
            &[
                "Hemoglobin levels within normal range",
                "Glucose levels slightly elevated",
                "Cholesterol levels borderline high",
            ],
            &[
                "Elevated glucose may indicate prediabetes",
                "High cholesterol increases cardiovascular risk",
            ],
            &[
                "Consult with your doctor about glucose management",
                "Consider dietary modifications to reduce cholesterol",
                "Increase physical activity to 150 minutes per week",
            ],
        ),
        "X-Ray" => (
            &[
                "Clear lung fields",
                "No evidence of fractures",
                "Normal cardiac silhouette",
            ],
            &[],
            &[
                "Continue regular health monitoring",
                "Maintain good respiratory hygiene",
            ],
        ),
        "ECG" => (
            &[
                "Normal sinus rhythm",
                "Heart rate: 72 bpm",
                "No ST segment changes",
            ],
            &[],
            &[
                "Heart function appears normal",
                "Continue healthy lifestyle habits",
                "Monitor blood pressure regularly",
            ],
        ),
        _ => (
            &[
                "Report uploaded successfully",
                "Manual review recommended",
            ],
            &["Consult with healthcare provider for detailed interpretation"],
            &[
                "Discuss findings with your doctor",
                "Keep records organized for future reference",
            ],
        ),
    };

    ReportAnalysis {
        findings: findings.iter().map(|s| s.to_string()).collect(),
        risk_factors: risk_factors.iter().map(|s| s.to_string()).collect(),
        recommendations: recommendations.iter().map(|s| s.to_string()).collect(),
    }
}

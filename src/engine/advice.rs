//! Fixed advice catalog for the impact engine.
//!
//! These lists are constant per disease — personalization is limited to the
//! risk level and trend computed in `impact`.

use super::types::Disease;

pub fn preventive_actions(disease: Disease) -> Vec<String> {
    let actions: &[&str] = match disease {
        Disease::Cardiovascular => &[
            "Aim for 150 minutes of moderate aerobic activity per week",
            "Reduce sodium intake to below 2,300mg per day",
            "Monitor blood pressure regularly",
            "Include omega-3 rich foods in your diet",
        ],
        Disease::Type2Diabetes => &[
            "Maintain blood sugar levels within target range (fasting: 80-130 mg/dL)",
            "Get HbA1c tested every 3-6 months",
            "Limit refined carbohydrates and sugary drinks",
            "Maintain healthy body weight",
        ],
        Disease::Hypertension => &[
            "Monitor blood pressure at home regularly (target: below 120/80 mmHg)",
            "Reduce sodium intake to 1,500mg or less per day",
            "Limit caffeine consumption",
            "Maintain healthy body weight",
        ],
    };
    actions.iter().map(|s| s.to_string()).collect()
}

pub fn precautions(disease: Disease) -> Vec<String> {
    let precautions: &[&str] = match disease {
        Disease::Cardiovascular => &[
            "Avoid smoking and limit alcohol consumption",
            "Manage cholesterol levels through diet",
            "Watch for warning signs: chest pain, shortness of breath",
            "Stay up to date with cardiac screenings if family history exists",
        ],
        Disease::Type2Diabetes => &[
            "Monitor for symptoms: increased thirst, frequent urination, fatigue",
            "Check feet daily for cuts or infections",
            "Avoid prolonged sitting - move every 30 minutes",
            "Be cautious with high glycemic index foods",
        ],
        Disease::Hypertension => &[
            "Avoid foods high in sodium: processed foods, canned soups, deli meats",
            "Limit alcohol to moderate levels",
            "Be aware of symptoms: severe headaches, vision problems, chest pain",
            "Don't skip medications if prescribed",
        ],
    };
    precautions.iter().map(|s| s.to_string()).collect()
}

pub fn lifestyle_remedies(disease: Disease) -> Vec<String> {
    let remedies: &[&str] = match disease {
        Disease::Cardiovascular => &[
            "Practice deep breathing exercises for 10 minutes daily to reduce stress",
            "Walk briskly for 30 minutes, 5 days per week",
            "Eat a Mediterranean-style diet rich in vegetables, fruits, whole grains, and olive oil",
            "Maintain a healthy weight (BMI between 18.5-24.9)",
        ],
        Disease::Type2Diabetes => &[
            "Follow a low-glycemic diet with complex carbohydrates, lean proteins, and fiber",
            "Exercise at least 150 minutes per week to improve insulin sensitivity",
            "Stay hydrated with 8-10 glasses of water daily",
            "Manage portion sizes and eat regular meals to stabilize blood sugar",
        ],
        Disease::Hypertension => &[
            "Practice stress-reduction techniques: meditation, yoga, progressive muscle relaxation",
            "Follow the DASH diet emphasizing fruits, vegetables, whole grains, and low-fat dairy",
            "Get 7-9 hours of quality sleep each night",
            "Engage in regular aerobic exercise: brisk walking, cycling, swimming",
        ],
    };
    remedies.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_disease_has_four_entries_per_category() {
        for disease in Disease::ALL {
            assert_eq!(preventive_actions(disease).len(), 4);
            assert_eq!(precautions(disease).len(), 4);
            assert_eq!(lifestyle_remedies(disease).len(), 4);
        }
    }
}

//! Rule-based chat responder.
//!
//! Single-turn and stateless: the input is lower-cased and checked for
//! topic keywords in a fixed priority order; the first match wins and maps
//! to one canned paragraph. Transcript persistence lives in the service
//! layer.

/// Topic checks run in this order; earlier topics shadow later ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatTopic {
    BloodPressure,
    Diabetes,
    Exercise,
    Diet,
    Sleep,
    Stress,
    Greeting,
    Thanks,
}

const TOPIC_KEYWORDS: [(ChatTopic, &[&str]); 8] = [
    (ChatTopic::BloodPressure, &["blood pressure", "hypertension"]),
    (ChatTopic::Diabetes, &["diabetes", "blood sugar"]),
    (ChatTopic::Exercise, &["exercise", "workout"]),
    (ChatTopic::Diet, &["diet", "nutrition", "food"]),
    (ChatTopic::Sleep, &["sleep", "insomnia"]),
    (ChatTopic::Stress, &["stress", "anxiety"]),
    (
        ChatTopic::Greeting,
        &["hello", "hi", "hey", "good morning", "good afternoon"],
    ),
    (ChatTopic::Thanks, &["thank", "thanks"]),
];

const BLOOD_PRESSURE_RESPONSE: &str = "Blood pressure is an important indicator of cardiovascular health. Normal blood pressure is typically around 120/80 mmHg. If your readings are consistently elevated (above 130/80), I recommend consulting with your doctor. In the meantime, maintaining a healthy diet low in sodium, regular exercise, stress management, and adequate sleep can help manage blood pressure levels.";

const DIABETES_RESPONSE: &str = "Blood sugar management is crucial for overall health. Normal fasting blood sugar levels are typically between 70-100 mg/dL. If you're concerned about diabetes risk, maintaining a healthy weight, eating a balanced diet rich in fiber and low in refined sugars, regular physical activity, and monitoring your blood glucose levels are important steps. Always consult with your healthcare provider for personalized advice.";

const EXERCISE_RESPONSE: &str = "Regular physical activity is one of the best things you can do for your health. The general recommendation is at least 150 minutes of moderate-intensity aerobic activity or 75 minutes of vigorous-intensity activity per week, plus muscle-strengthening activities on 2 or more days. Start slowly if you're new to exercise, and consider activities you enjoy to make it sustainable. Always consult with your doctor before starting a new exercise program, especially if you have existing health conditions.";

const DIET_RESPONSE: &str = "A balanced diet is fundamental to good health. Focus on whole foods including fruits, vegetables, whole grains, lean proteins, and healthy fats. Limit processed foods, added sugars, and excessive sodium. Stay well-hydrated by drinking plenty of water. Consider the Mediterranean diet as a heart-healthy eating pattern. Remember, everyone's nutritional needs are different, so consulting with a registered dietitian can provide personalized guidance.";

const SLEEP_RESPONSE: &str = "Quality sleep is essential for physical and mental health. Most adults need 7-9 hours of sleep per night. To improve sleep quality: maintain a consistent sleep schedule, create a relaxing bedtime routine, keep your bedroom cool and dark, limit screen time before bed, avoid caffeine late in the day, and manage stress. If you're experiencing persistent sleep problems, consult with your healthcare provider.";

const STRESS_RESPONSE: &str = "Managing stress is crucial for overall health and wellbeing. Effective stress management techniques include regular exercise, meditation or mindfulness practices, deep breathing exercises, adequate sleep, maintaining social connections, and engaging in hobbies you enjoy. If stress or anxiety is significantly impacting your daily life, please consider speaking with a mental health professional who can provide personalized support.";

const THANKS_RESPONSE: &str = "You're welcome! I'm here to help. Remember, while I can provide general health information, always consult with your healthcare provider for medical advice specific to your situation. Is there anything else you'd like to know?";

const DEFAULT_RESPONSE: &str = "Thank you for your question. While I can provide general health information, I recommend discussing specific concerns with your healthcare provider who can give you personalized medical advice based on your individual health history. Is there a general health topic I can help you with, such as nutrition, exercise, sleep, or stress management?";

/// First topic whose keyword set matches, if any.
pub fn match_topic(message: &str) -> Option<ChatTopic> {
    let lower = message.to_lowercase();
    TOPIC_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| lower.contains(k)))
        .map(|(topic, _)| *topic)
}

/// Canned response for a user message. Unmatched input gets a generic
/// deflection.
pub fn respond(message: &str, user_name: &str) -> String {
    match match_topic(message) {
        Some(ChatTopic::BloodPressure) => BLOOD_PRESSURE_RESPONSE.to_string(),
        Some(ChatTopic::Diabetes) => DIABETES_RESPONSE.to_string(),
        Some(ChatTopic::Exercise) => EXERCISE_RESPONSE.to_string(),
        Some(ChatTopic::Diet) => DIET_RESPONSE.to_string(),
        Some(ChatTopic::Sleep) => SLEEP_RESPONSE.to_string(),
        Some(ChatTopic::Stress) => STRESS_RESPONSE.to_string(),
        Some(ChatTopic::Greeting) => format!(
            "Hello {user_name}! I'm your AI health assistant. I'm here to provide general health information and guidance. How can I help you today? You can ask me about nutrition, exercise, managing common health conditions, or general wellness topics."
        ),
        Some(ChatTopic::Thanks) => THANKS_RESPONSE.to_string(),
        None => DEFAULT_RESPONSE.to_string(),
    }
}

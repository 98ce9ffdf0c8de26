//! # Request and Plan Types
//!
//! The questionnaire a visitor fills in, the plan shape the model is asked to
//! produce, and the lead captured before a report download.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// The fitness preferences selected in the plan builder form.
///
/// Every field is a free-form string. Missing fields and `null` become empty
/// strings, and scalar values such as `4` or `true` keep their JSON text.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct QuestionnaireInput {
    #[serde(default, deserialize_with = "lenient_string")]
    pub goal: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub experience: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub days_per_week: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub session_time: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub equipment: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub injuries: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub diet: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub schedule_pref: String,
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s,
        Some(other) => other.to_string(),
    })
}

/// One day of the weekly training split.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct WeeklySplitDay {
    pub day: String,
    pub focus: String,
    pub workout: String,
}

/// One step of the four-week progression.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WeekProgression {
    pub week: String,
    pub what_to_do: String,
}

/// The structured plan the model is asked to return.
///
/// Plans are passed to callers as raw JSON; this type is used when the
/// server validates the model output and when rendering a report.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedPlan {
    pub headline: String,
    pub summary: String,
    pub weekly_split: Vec<WeeklySplitDay>,
    pub workout_rules: Vec<String>,
    pub nutrition_basics: Vec<String>,
    pub recovery: Vec<String>,
    #[serde(rename = "progression4Weeks")]
    pub progression_4_weeks: Vec<WeekProgression>,
    pub safety_notes: Vec<String>,
    pub what_to_tell_trainer: Vec<String>,
}

/// Contact details submitted through the lead gate.
///
/// The lead endpoint echoes whatever it receives; this type only documents
/// the shape the site sends.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct LeadRecord {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub consent: bool,
    #[serde(default)]
    pub goal: String,
}

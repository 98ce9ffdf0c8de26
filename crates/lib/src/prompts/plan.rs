//! # Plan Generation Prompt
//!
//! The single-turn instruction sent to the model. It declares the coach role,
//! restricts the output to one JSON object of the plan shape, and lists the
//! questionnaire answers as labeled lines.
//!
//! Placeholders: `{goal}`, `{experience}`, `{days_per_week}`, `{session_time}`,
//! `{equipment}`, `{injuries}`, `{diet}`, `{schedule_pref}`

use crate::types::QuestionnaireInput;
use regex::{Captures, Regex};
use std::sync::LazyLock;

static PLACEHOLDER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\{(?P<name>goal|experience|days_per_week|session_time|equipment|injuries|diet|schedule_pref)\}",
    )
    .expect("placeholder pattern is valid")
});

/// The default plan generation prompt.
pub const PLAN_PROMPT_TEMPLATE: &str = r#"
You are a professional gym coach.

Return ONLY valid JSON.

{
  "headline": string,
  "summary": string,
  "weeklySplit": [{"day": string, "focus": string, "workout": string}],
  "workoutRules": string[],
  "nutritionBasics": string[],
  "recovery": string[],
  "progression4Weeks": [{"week": string, "whatToDo": string}],
  "safetyNotes": string[],
  "whatToTellTrainer": string[]
}

User inputs:
Goal: {goal}
Experience: {experience}
Days per week: {days_per_week}
Session time: {session_time}
Equipment: {equipment}
Injuries: {injuries}
Diet: {diet}
Schedule: {schedule_pref}
"#;

/// Builds the default prompt for a questionnaire.
pub fn build_plan_prompt(inputs: &QuestionnaireInput) -> String {
    render_plan_prompt(PLAN_PROMPT_TEMPLATE, inputs)
}

/// Fills the questionnaire placeholders of `template` in a single pass.
///
/// Any other braces in the template, such as the JSON shape, are left alone,
/// and placeholder-like text inside an answer is never expanded again.
pub fn render_plan_prompt(template: &str, inputs: &QuestionnaireInput) -> String {
    PLACEHOLDER_RE
        .replace_all(template, |caps: &Captures| match &caps["name"] {
            "goal" => inputs.goal.clone(),
            "experience" => inputs.experience.clone(),
            "days_per_week" => inputs.days_per_week.clone(),
            "session_time" => inputs.session_time.clone(),
            "equipment" => inputs.equipment.clone(),
            "injuries" => inputs.injuries.clone(),
            "diet" => inputs.diet.clone(),
            "schedule_pref" => inputs.schedule_pref.clone(),
            _ => caps[0].to_string(),
        })
        .into_owned()
}

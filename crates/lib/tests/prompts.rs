//! # Plan Prompt Tests
//!
//! These tests pin the wording of the plan generation prompt and check that
//! questionnaire answers are interpolated as labeled lines.

use fithub::prompts::{build_plan_prompt, render_plan_prompt, PLAN_PROMPT_TEMPLATE};
use fithub::QuestionnaireInput;

fn inputs() -> QuestionnaireInput {
    QuestionnaireInput {
        goal: "Fat loss".into(),
        experience: "Beginner".into(),
        days_per_week: "4".into(),
        session_time: "45 min".into(),
        equipment: "Full gym".into(),
        injuries: "None".into(),
        diet: "No preference".into(),
        schedule_pref: "Evening".into(),
    }
}

/// The role and the JSON-only instruction lead the prompt.
#[test]
fn test_prompt_declares_role_and_json_only_output() {
    let prompt = build_plan_prompt(&inputs());
    assert!(prompt.starts_with("\nYou are a professional gym coach.\n\nReturn ONLY valid JSON.\n"));
    assert!(prompt.contains("\"progression4Weeks\": [{\"week\": string, \"whatToDo\": string}],"));
    assert!(prompt.contains("\"whatToTellTrainer\": string[]\n}"));
}

/// Each answer appears on its own labeled line, in questionnaire order.
#[test]
fn test_prompt_interpolates_labeled_inputs() {
    let prompt = build_plan_prompt(&inputs());
    let expected = "User inputs:\n\
        Goal: Fat loss\n\
        Experience: Beginner\n\
        Days per week: 4\n\
        Session time: 45 min\n\
        Equipment: Full gym\n\
        Injuries: None\n\
        Diet: No preference\n\
        Schedule: Evening\n";
    assert!(prompt.ends_with(expected), "unexpected prompt tail: {prompt}");
}

/// The same questionnaire always yields the same prompt.
#[test]
fn test_prompt_is_deterministic() {
    assert_eq!(build_plan_prompt(&inputs()), build_plan_prompt(&inputs()));
}

/// A placeholder typed into an answer is not expanded again.
#[test]
fn test_placeholder_text_in_answers_is_kept_verbatim() {
    let mut inputs = inputs();
    inputs.goal = "{diet}".into();
    let prompt = build_plan_prompt(&inputs);
    assert!(prompt.contains("Goal: {diet}\n"));
    assert!(prompt.contains("Diet: No preference\n"));
}

/// A custom template only has its known placeholders replaced.
#[test]
fn test_custom_template_keeps_unknown_braces() {
    let template = "Coach for {goal} at {unknown} {\"shape\": true}";
    let prompt = render_plan_prompt(template, &inputs());
    assert_eq!(prompt, "Coach for Fat loss at {unknown} {\"shape\": true}");
}

/// The default template mentions every placeholder exactly once.
#[test]
fn test_default_template_has_every_placeholder() {
    for placeholder in [
        "{goal}",
        "{experience}",
        "{days_per_week}",
        "{session_time}",
        "{equipment}",
        "{injuries}",
        "{diet}",
        "{schedule_pref}",
    ] {
        assert_eq!(PLAN_PROMPT_TEMPLATE.matches(placeholder).count(), 1, "{placeholder}");
    }
}

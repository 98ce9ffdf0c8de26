//! # Printable Plan Report
//!
//! Renders a generated plan as a standalone HTML page that opens the browser
//! print dialog, so a member can save it as a PDF.

use crate::types::{GeneratedPlan, QuestionnaireInput};
use serde::Deserialize;
use std::fmt::Write;

/// Everything needed to render a report.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct ReportRequest {
    pub plan: GeneratedPlan,
    #[serde(default)]
    pub inputs: QuestionnaireInput,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
}

const REPORT_STYLE: &str = r#"    body { font-family: Arial, sans-serif; padding: 24px; color: #0f172a; }
    .top { display:flex; justify-content:space-between; align-items:center; gap:16px; }
    .brand { font-weight:800; letter-spacing:-0.02em; }
    .chip { display:inline-block; padding:6px 10px; border-radius:999px; background:#0b1220; color:#fff; font-size:12px; }
    h1 { margin:16px 0 6px; font-size:26px; }
    p { margin: 8px 0; line-height: 1.5; }
    .muted { color:#475569; font-size:12px; }
    .section { margin-top:18px; padding-top:14px; border-top:1px solid #e2e8f0; }
    table { width:100%; border-collapse:collapse; margin-top:10px; }
    td { border:1px solid #e2e8f0; padding:10px; vertical-align:top; }
    ul { margin: 8px 0 0 18px; }
    li { margin: 6px 0; }
    .grid { display:grid; grid-template-columns: 1fr 1fr; gap:14px; }
    @media print {
      .no-print { display:none; }
      body { padding: 0; }
    }
"#;

/// Escapes the characters that would otherwise be read as markup.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn list(items: &[String]) -> String {
    let mut out = String::from("<ul>");
    for item in items {
        let _ = write!(out, "<li>{}</li>", escape_html(item));
    }
    out.push_str("</ul>");
    out
}

/// Renders the full HTML report for `request` under the `brand` name.
pub fn render_report(brand: &str, request: &ReportRequest) -> String {
    let plan = &request.plan;
    let brand = escape_html(brand);
    let member = if request.name.is_empty() {
        "Member"
    } else {
        request.name.as_str()
    };

    let mut split_rows = String::new();
    for day in &plan.weekly_split {
        let _ = write!(
            split_rows,
            "\n        <tr>\n          <td><b>{}</b><br/><span class=\"muted\">{}</span></td>\n          <td>{}</td>\n        </tr>",
            escape_html(&day.day),
            escape_html(&day.focus),
            escape_html(&day.workout)
        );
    }

    let mut progression = String::new();
    for step in &plan.progression_4_weeks {
        let _ = write!(
            progression,
            "<li><b>{}:</b> {}</li>",
            escape_html(&step.week),
            escape_html(&step.what_to_do)
        );
    }

    let mut html = String::new();
    let _ = write!(
        html,
        r#"<!doctype html>
<html>
<head>
  <meta charset="utf-8"/>
  <title>{headline} - {brand}</title>
  <style>
{style}  </style>
</head>
<body>
  <div class="top">
    <div>
      <div class="brand">{brand}</div>
      <div class="muted">Personalized plan report</div>
    </div>
    <div class="chip">{goal} • {experience}</div>
  </div>

  <h1>{headline}</h1>
  <p>{summary}</p>
  <p class="muted">Generated for: {member} • Phone: {phone}</p>

  <div class="section">
    <h2>Weekly Split</h2>
    <table>
      <tr><td><b>Day</b></td><td><b>Workout</b></td></tr>{split_rows}
    </table>
  </div>

  <div class="section grid">
    <div>
      <h2>Workout Rules</h2>
      {workout_rules}
    </div>
    <div>
      <h2>Nutrition Basics</h2>
      {nutrition_basics}
    </div>
  </div>

  <div class="section grid">
    <div>
      <h2>Recovery</h2>
      {recovery}
    </div>
    <div>
      <h2>Safety Notes</h2>
      {safety_notes}
    </div>
  </div>

  <div class="section">
    <h2>4-Week Progression</h2>
    <ul>{progression}</ul>
  </div>

  <div class="section">
    <h2>What to tell your trainer</h2>
    {what_to_tell_trainer}
  </div>

  <div class="section no-print">
    <p class="muted">Use your browser print dialog → “Save as PDF”.</p>
    <button onclick="window.print()">Print / Save as PDF</button>
  </div>

  <script>
    setTimeout(() => window.print(), 400);
  </script>
</body>
</html>
"#,
        headline = escape_html(&plan.headline),
        brand = brand,
        style = REPORT_STYLE,
        goal = escape_html(&request.inputs.goal),
        experience = escape_html(&request.inputs.experience),
        summary = escape_html(&plan.summary),
        member = escape_html(member),
        phone = escape_html(&request.phone),
        split_rows = split_rows,
        workout_rules = list(&plan.workout_rules),
        nutrition_basics = list(&plan.nutrition_basics),
        recovery = list(&plan.recovery),
        safety_notes = list(&plan.safety_notes),
        progression = progression,
        what_to_tell_trainer = list(&plan.what_to_tell_trainer),
    );
    html
}

use async_trait::async_trait;
use fithub::errors::PlanError;
use fithub::providers::ai::AiProvider;
use serde_json::{json, Value};
use std::fmt::Debug;
use std::sync::{Arc, Mutex};

// --- Mock AI Provider ---

/// An `AiProvider` that returns a pre-programmed completion and records every prompt.
///
/// Clones share the same call log, so a clone handed to the code under test
/// can be inspected afterwards through the original.
#[derive(Clone, Debug)]
pub struct MockAiProvider {
    response: Arc<Mutex<Option<String>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockAiProvider {
    pub fn new() -> Self {
        Self {
            response: Arc::new(Mutex::new(None)),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Creates a provider that always answers with `response`.
    pub fn with_response(response: &str) -> Self {
        let provider = Self::new();
        provider.set_response(response);
        provider
    }

    /// Pre-programs the completion returned for every prompt.
    pub fn set_response(&self, response: &str) {
        *self.response.lock().unwrap() = Some(response.to_string());
    }

    /// Retrieves the recorded prompts for assertion.
    pub fn get_calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl Default for MockAiProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AiProvider for MockAiProvider {
    async fn generate(&self, prompt: &str) -> Result<String, PlanError> {
        self.calls.lock().unwrap().push(prompt.to_string());

        self.response.lock().unwrap().clone().ok_or_else(|| {
            PlanError::AiApi("MockAiProvider: No response programmed".to_string())
        })
    }
}

// --- Fixtures ---

/// The questionnaire the plan builder form starts with.
pub fn sample_inputs() -> Value {
    json!({
        "goal": "Fat loss",
        "experience": "Beginner",
        "daysPerWeek": "4",
        "sessionTime": "45 min",
        "equipment": "Full gym",
        "injuries": "None",
        "diet": "No preference",
        "schedulePref": "Evening"
    })
}

/// A complete plan object as the model is asked to return it.
pub fn sample_plan() -> Value {
    json!({
        "headline": "Lean in 4 Weeks",
        "summary": "Four evening sessions focused on full-body strength and conditioning.",
        "weeklySplit": [
            {"day": "Mon", "focus": "Lower body", "workout": "Squat 3x8, RDL 3x10"},
            {"day": "Wed", "focus": "Upper body", "workout": "Bench 3x8, Row 3x10"}
        ],
        "workoutRules": ["Warm up for 10 minutes"],
        "nutritionBasics": ["Protein with every meal"],
        "recovery": ["Sleep 7-8 hours"],
        "progression4Weeks": [
            {"week": "Week 1", "whatToDo": "Learn the movements"}
        ],
        "safetyNotes": ["Stop if you feel sharp pain"],
        "whatToTellTrainer": ["I am a beginner"]
    })
}

/// Wraps `text` in a Gemini `generateContent` response body.
pub fn gemini_response(text: &str) -> Value {
    json!({
        "candidates": [
            {"content": {"parts": [{"text": text}], "role": "model"}, "finishReason": "STOP"}
        ]
    })
}

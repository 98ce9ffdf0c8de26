//! # Prompt Template Modules
//!
//! This module organizes the prompt templates sent to the AI provider.

pub mod plan;

pub use plan::{build_plan_prompt, render_plan_prompt, PLAN_PROMPT_TEMPLATE};

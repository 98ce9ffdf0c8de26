//! # Fitness Hub Plan Generation
//!
//! This crate turns a fitness questionnaire into a structured workout plan using a
//! configurable AI provider, and provides the helpers the gym's website needs around
//! it: a printable report renderer and WhatsApp contact links.

pub mod constants;
pub mod errors;
pub mod extract;
pub mod generator;
pub mod prompts;
pub mod providers;
pub mod report;
pub mod types;
pub mod whatsapp;

pub use errors::PlanError;
pub use generator::{PlanGenerator, PlanGeneratorBuilder};
pub use types::{GeneratedPlan, LeadRecord, QuestionnaireInput, WeekProgression, WeeklySplitDay};

//! # Route Handlers
//!
//! Each handler is stateless and independent of the others.

pub mod contact;
pub mod general;
pub mod leads;
pub mod plan;
pub mod report;

pub use contact::contact_handler;
pub use general::{health_check, root};
pub use leads::leads_handler;
pub use plan::plan_handler;
pub use report::report_handler;

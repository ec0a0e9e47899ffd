//! psychaid-analysis
//!
//! Narrative selection and assessment composition. The rule table is always
//! available; a Bedrock model can be configured as an optional external
//! narrative source.

pub mod bedrock;
pub mod compose;
pub mod config;
pub mod error;
pub mod prompt;
pub mod provider;
pub mod rules;

pub use compose::compose;
pub use provider::{NarrativeProvider, NarrativeRequest, NarrativeSelector, RuleTable};

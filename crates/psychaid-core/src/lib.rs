//! psychaid-core
//!
//! Pure domain types and report naming conventions.
//! No I/O and no provider dependency. This is the shared vocabulary of the
//! PsychAid pipeline.

pub mod error;
pub mod models;
pub mod report_names;

//! psychaid-export
//!
//! Report rendering. PDF output is laid out on a tall canvas and sliced
//! into A4 pages; DOCX output goes through a Tera template.

pub mod canvas;
pub mod docx;
pub mod error;
pub mod layout;
pub mod pdf;
pub mod render;
pub mod report;
pub mod styles;

pub use report::{DISCLAIMER, RenderedReport, ReportFormat, render, render_async};

//! Application layer module
//!
//! Use cases that compose the infrastructure pieces into a grading run,
//! plus rendering of the resulting report.

pub mod grader;
pub mod input_resolver;
pub mod reporter;

pub use grader::Grader;
pub use input_resolver::{HtmlSource, InputResolver};
pub use reporter::{render_report, write_report};

//! Domain module - checks and grading reports
//!
//! Plain value types with no I/O. Loading, parsing and printing live in
//! `infrastructure` and `application`.

pub mod checks;
pub mod report;

pub use checks::{Check, ChecksSpec};
pub use report::CheckReport;

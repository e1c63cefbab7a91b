//! Infrastructure layer for file access, HTTP, HTML parsing, config and logging
//!
//! Everything here talks to the outside world or to a third-party engine.
//! The application layer composes these pieces into a grading run.

pub mod checks_loader;
pub mod config;
pub mod files;
pub mod html_evaluator;
pub mod http_client;
pub mod logging;

pub use checks_loader::load_checks;
pub use config::AppConfig;
pub use files::{ensure_file_exists, read_html_file};
pub use html_evaluator::{check_html_data, evaluate, HtmlDocument};
pub use http_client::{HttpClient, HttpClientConfig};
pub use logging::{init_logging_with_config, LoggingConfig};

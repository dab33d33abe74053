//! quizstore-report — Self-contained HTML result pages.

pub mod html;

pub use html::{generate_html, write_html_report};

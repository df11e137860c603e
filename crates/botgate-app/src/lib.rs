//! Use case orchestration for botgate.
//!
//! This crate provides the application layer: use cases that coordinate the domain, repo, and
//! settings layers. It is intentionally thin and delegates heavy lifting to the appropriate layers.
//!
//! The CLI crate depends on this; it only handles argument parsing and I/O.

#![forbid(unsafe_code)]

mod check;
mod explain;
mod inspect;
mod render;
mod report;
mod validate;

pub use check::{CheckInput, CheckOutput, resolve_secret, run_check, verdict_exit_code};
pub use explain::{ExplainOutput, format_explanation, format_not_found, run_explain};
pub use inspect::{format_inspect, run_inspect};
pub use render::{render_github, render_text, write_report};
pub use report::{build_report, parse_report_json, serialize_report};
pub use validate::{validate, validate_source, validate_with};

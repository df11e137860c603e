//! Stable DTOs and IDs used across the botgate workspace.
//!
//! This crate is intentionally boring:
//! - data types for the emitted validation report
//! - stable string IDs for rules and failure codes
//! - explain registry for remediation guidance

#![forbid(unsafe_code)]

pub mod explain;
pub mod ids;
pub mod receipt;

pub use explain::{lookup_explanation, ExamplePair, Explanation};
pub use receipt::{
    FailureKind, ReportData, ReportFailure, ToolMeta, ValidationReport, Verdict,
    SCHEMA_REPORT_V1,
};

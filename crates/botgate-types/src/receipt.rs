use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use time::OffsetDateTime;

/// Stable schema identifier for botgate reports.
pub const SCHEMA_REPORT_V1: &str = "botgate.report.v1";

/// A publish gate only has two outcomes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Pass,
    Fail,
}

/// Category of a failed validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// Invalid configuration that could not be normalized.
    ///
    /// Policy text is always normalized to safe defaults, so validation never
    /// produces this kind. It stays in the report schema for invokers that
    /// map their own configuration errors onto reports.
    Configuration,
    /// Missing folder, missing or duplicate manifest, unreadable files.
    Environment,
    /// The project does not satisfy an enabled rule.
    PolicyViolation,
    /// Anything the engine did not anticipate.
    Internal,
}

impl FailureKind {
    pub fn as_str(self) -> &'static str {
        match self {
            FailureKind::Configuration => "configuration",
            FailureKind::Environment => "environment",
            FailureKind::PolicyViolation => "policy_violation",
            FailureKind::Internal => "internal",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

/// The single failure reported by a run (rules short-circuit).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ReportFailure {
    pub rule_id: String,
    pub code: String,
    pub kind: FailureKind,
    pub message: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub help: Option<String>,

    /// Rule-specific structured payload (kept open-ended for forward compatibility).
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub data: JsonValue,
}

/// Botgate-specific summary payload for the report.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema, Default)]
pub struct ReportData {
    pub project_dir: String,

    /// Rules that ran, in order.
    pub rules_evaluated: Vec<String>,
    /// Rules that were disabled by policy or never reached.
    pub rules_skipped: Vec<String>,
}

/// Report envelope written by `botgate check --format json`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ValidationReport {
    /// Versioned schema identifier for the envelope shape.
    pub schema: String,
    pub tool: ToolMeta,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub started_at: OffsetDateTime,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub finished_at: OffsetDateTime,
    pub verdict: Verdict,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure: Option<ReportFailure>,
    pub data: ReportData,
}

use anyhow::Context;
use botgate_domain::ValidationResult;
use botgate_types::{
    ReportData, ReportFailure, SCHEMA_REPORT_V1, ToolMeta, ValidationReport, Verdict,
};
use camino::Utf8Path;
use time::OffsetDateTime;

/// Wrap a validation result in the `botgate.report.v1` envelope.
pub fn build_report(
    result: &ValidationResult,
    project_dir: &Utf8Path,
    started_at: OffsetDateTime,
    finished_at: OffsetDateTime,
) -> ValidationReport {
    let failure = result.failure.as_ref().map(|f| ReportFailure {
        rule_id: f.rule_id.to_string(),
        code: f.code.to_string(),
        kind: f.kind,
        message: f.message.clone(),
        help: f.help.map(str::to_string),
        data: f.data.clone(),
    });

    ValidationReport {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "botgate".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        started_at,
        finished_at,
        verdict: if result.passed {
            Verdict::Pass
        } else {
            Verdict::Fail
        },
        failure,
        data: ReportData {
            project_dir: project_dir.to_string(),
            rules_evaluated: result.evaluated.iter().map(|s| s.to_string()).collect(),
            rules_skipped: result.skipped().into_iter().map(str::to_string).collect(),
        },
    }
}

/// Pretty JSON with a trailing newline.
pub fn serialize_report(report: &ValidationReport) -> anyhow::Result<Vec<u8>> {
    let mut bytes = serde_json::to_vec_pretty(report).context("serialize report")?;
    bytes.push(b'\n');
    Ok(bytes)
}

pub fn parse_report_json(text: &str) -> anyhow::Result<ValidationReport> {
    let value: serde_json::Value = serde_json::from_str(text).context("parse report json")?;

    let schema = value
        .get("schema")
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string();
    if schema != SCHEMA_REPORT_V1 {
        anyhow::bail!("unknown report schema: {schema}");
    }

    serde_json::from_value(value).context("parse botgate report")
}

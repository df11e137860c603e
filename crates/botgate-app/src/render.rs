//! Render use cases: text, GitHub annotations, and the JSON report file.

use anyhow::Context;
use botgate_types::ValidationReport;
use camino::Utf8Path;

use crate::report::serialize_report;

/// The failure message verbatim, or an empty string on pass.
pub fn render_text(report: &ValidationReport) -> String {
    report
        .failure
        .as_ref()
        .map(|f| f.message.clone())
        .unwrap_or_default()
}

/// Render the failure as a GitHub Actions workflow command.
///
/// Format: `::error title=botgate::[{rule_id}:{code}] {message}`
pub fn render_github(report: &ValidationReport) -> Vec<String> {
    let Some(failure) = &report.failure else {
        return Vec::new();
    };

    let message = format!("[{}:{}] {}", failure.rule_id, failure.code, failure.message)
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A");

    vec![format!("::error title=botgate::{message}")]
}

pub fn write_report(path: &Utf8Path, report: &ValidationReport) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_str().is_empty()
    {
        std::fs::create_dir_all(parent).with_context(|| format!("create {parent}"))?;
    }
    let bytes = serialize_report(report)?;
    std::fs::write(path, bytes).with_context(|| format!("write report {path}"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use botgate_types::{
        FailureKind, ReportData, ReportFailure, SCHEMA_REPORT_V1, ToolMeta, Verdict,
    };
    use camino::Utf8PathBuf;
    use time::macros::datetime;

    fn report(failure: Option<ReportFailure>) -> ValidationReport {
        ValidationReport {
            schema: SCHEMA_REPORT_V1.to_string(),
            tool: ToolMeta {
                name: "botgate".to_string(),
                version: "0.1.0".to_string(),
            },
            started_at: datetime!(2024-01-01 00:00:00 UTC),
            finished_at: datetime!(2024-01-01 00:00:00 UTC),
            verdict: if failure.is_some() {
                Verdict::Fail
            } else {
                Verdict::Pass
            },
            failure,
            data: ReportData::default(),
        }
    }

    fn failure(message: &str) -> ReportFailure {
        ReportFailure {
            rule_id: "keys.nlu".to_string(),
            code: "nlu_key_missing".to_string(),
            kind: FailureKind::PolicyViolation,
            message: message.to_string(),
            help: None,
            data: serde_json::Value::Null,
        }
    }

    #[test]
    fn text_is_empty_on_pass() {
        assert_eq!(render_text(&report(None)), "");
        assert!(render_github(&report(None)).is_empty());
    }

    #[test]
    fn text_is_the_message_verbatim() {
        let r = report(Some(failure("The NLU service has no subscription key.")));
        assert_eq!(render_text(&r), "The NLU service has no subscription key.");
    }

    #[test]
    fn github_annotation_escapes_control_characters() {
        let r = report(Some(failure("100% broken\r\nsecond line")));
        assert_eq!(
            render_github(&r),
            vec!["::error title=botgate::[keys.nlu:nlu_key_missing] 100%25 broken%0D%0Asecond line"]
        );
    }

    #[test]
    fn write_report_creates_parent_directories() {
        let tmp = tempfile::TempDir::new().expect("temp dir");
        let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf8");
        let path = root.join("artifacts/botgate/report.json");

        write_report(&path, &report(None)).expect("write");
        let text = std::fs::read_to_string(&path).expect("read");
        assert!(text.contains("\"schema\": \"botgate.report.v1\""));
    }
}

//! The `check` use case: resolve config, validate the folder, produce a report.

use anyhow::Context;
use botgate_domain::ValidationResult;
use botgate_settings::{Overrides, ResolvedConfig};
use botgate_types::{ValidationReport, Verdict};
use camino::Utf8Path;
use time::OffsetDateTime;
use tracing::debug;

use crate::report::build_report;
use crate::validate::validate_with;

/// Input for the check use case.
#[derive(Clone, Debug)]
pub struct CheckInput<'a> {
    /// Project folder to validate.
    pub project_dir: &'a Utf8Path,
    /// Config file contents (empty string if not found).
    pub config_text: &'a str,
    /// CLI overrides.
    pub overrides: Overrides,
    /// Manifest secret given on the command line.
    pub secret: Option<String>,
}

/// Output from the check use case.
#[derive(Clone, Debug)]
pub struct CheckOutput {
    pub report: ValidationReport,
    pub result: ValidationResult,
    /// The resolved configuration used.
    pub resolved_config: ResolvedConfig,
}

/// Run the check use case.
///
/// Errors are reserved for the invoker's own inputs (unparseable config,
/// invalid globs). Anything the project folder gets wrong ends up in the
/// report instead.
pub fn run_check(input: CheckInput<'_>) -> anyhow::Result<CheckOutput> {
    let started_at = OffsetDateTime::now_utc();

    // Parse config (empty is allowed, defaults apply).
    let cfg = if input.config_text.trim().is_empty() {
        botgate_settings::BotgateConfigV1::default()
    } else {
        botgate_settings::parse_config_toml(input.config_text).context("parse config")?
    };

    let resolved =
        botgate_settings::resolve_config(cfg, input.overrides).context("resolve config")?;

    let secret = resolve_secret(input.secret, resolved.secret_env.as_deref());
    debug!(has_secret = secret.is_some(), "manifest secret resolved");

    let result = validate_with(input.project_dir, &resolved, secret.as_deref());
    let finished_at = OffsetDateTime::now_utc();

    let report = build_report(&result, input.project_dir, started_at, finished_at);

    Ok(CheckOutput {
        report,
        result,
        resolved_config: resolved,
    })
}

/// A non-blank explicit secret wins; otherwise read the variable named by `secret_env`.
pub fn resolve_secret(explicit: Option<String>, secret_env: Option<&str>) -> Option<String> {
    explicit
        .filter(|s| !s.trim().is_empty())
        .or_else(|| secret_from_env(secret_env))
}

fn secret_from_env(var: Option<&str>) -> Option<String> {
    let var = var?;
    std::env::var(var).ok().filter(|s| !s.trim().is_empty())
}

/// Map verdict to exit code: 0 = pass, 2 = fail.
pub fn verdict_exit_code(verdict: Verdict) -> i32 {
    match verdict {
        Verdict::Pass => 0,
        Verdict::Fail => 2,
    }
}

//! The `validate` use case: run the engine against a folder on disk.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use botgate_domain::{PolicyConfig, ProjectSource, RuleFailure, ValidationResult};
use botgate_repo::FolderSource;
use botgate_settings::ResolvedConfig;
use botgate_types::{FailureKind, ids};
use camino::Utf8Path;
use tracing::{debug, error};

/// Validate `folder` against `policy` with the default file globs and no secret.
pub fn validate(folder: &Utf8Path, policy: &PolicyConfig) -> ValidationResult {
    let config = ResolvedConfig {
        policy: policy.clone(),
        ..ResolvedConfig::default()
    };
    validate_with(folder, &config, None)
}

/// Validate `folder` with resolved globs and an optional manifest secret.
///
/// Never panics and never returns an error: a missing folder is an
/// `Environment` failure and an unexpected panic inside the engine is turned
/// into an `Internal` failure.
pub fn validate_with(
    folder: &Utf8Path,
    config: &ResolvedConfig,
    secret: Option<&str>,
) -> ValidationResult {
    if !folder.is_dir() {
        return ValidationResult::fail(
            RuleFailure::new(
                ids::RULE_TOOL_RUNTIME,
                ids::CODE_FOLDER_UNREADABLE,
                FailureKind::Environment,
                format!("The project folder '{folder}' does not exist or is not a directory."),
            ),
            Vec::new(),
        );
    }

    let source = FolderSource::new(folder.to_path_buf())
        .with_globs(&config.project_file_glob, &config.manifest_glob)
        .with_secret(secret.map(str::to_string));
    debug!(%folder, profile = %config.profile, "validating project folder");

    validate_source(&source, &config.policy)
}

/// Run the engine over any [`ProjectSource`], turning a panic into an
/// `Internal` failure.
pub fn validate_source<S: ProjectSource + ?Sized>(
    source: &S,
    policy: &PolicyConfig,
) -> ValidationResult {
    match panic::catch_unwind(AssertUnwindSafe(|| botgate_domain::evaluate(source, policy))) {
        Ok(result) => result,
        Err(payload) => {
            let detail = panic_detail(payload.as_ref());
            error!(%detail, "validation aborted");
            ValidationResult::fail(
                RuleFailure::new(
                    ids::RULE_TOOL_RUNTIME,
                    ids::CODE_INTERNAL_ERROR,
                    FailureKind::Internal,
                    format!("Validation aborted unexpectedly: {detail}"),
                ),
                Vec::new(),
            )
        }
    }
}

fn panic_detail(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

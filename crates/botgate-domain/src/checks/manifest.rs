use crate::model::ProjectManifest;
use crate::report::RuleFailure;
use crate::source::LoadError;
use botgate_types::{FailureKind, ids};
use serde_json::json;

/// Loader failures become environment failures of the manifest rule.
pub fn run(loaded: Result<ProjectManifest, LoadError>) -> Result<ProjectManifest, RuleFailure> {
    loaded.map_err(|err| {
        let message = err.to_string();
        match err {
            LoadError::NotFound { pattern, .. } => RuleFailure::new(
                ids::RULE_MANIFEST_REQUIRED,
                ids::CODE_MANIFEST_NOT_FOUND,
                FailureKind::Environment,
                message,
            )
            .with_help("Add the project's manifest file to the project folder.")
            .with_data(json!({ "pattern": pattern })),
            LoadError::Ambiguous {
                pattern,
                candidates,
                ..
            } => RuleFailure::new(
                ids::RULE_MANIFEST_REQUIRED,
                ids::CODE_MANIFEST_AMBIGUOUS,
                FailureKind::Environment,
                message,
            )
            .with_help("Keep exactly one manifest file in the project folder.")
            .with_data(json!({ "pattern": pattern, "candidates": candidates })),
            LoadError::Malformed { path, .. } => RuleFailure::new(
                ids::RULE_MANIFEST_REQUIRED,
                ids::CODE_MANIFEST_MALFORMED,
                FailureKind::Environment,
                message,
            )
            .with_help("Fix the manifest JSON, or supply the secret for an encrypted manifest.")
            .with_data(json!({ "path": path })),
            LoadError::FolderMissing { .. } | LoadError::Io { .. } => RuleFailure::new(
                ids::RULE_MANIFEST_REQUIRED,
                ids::CODE_FOLDER_UNREADABLE,
                FailureKind::Environment,
                message,
            ),
        }
    })
}

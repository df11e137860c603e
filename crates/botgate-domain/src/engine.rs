use crate::checks::{endpoints, keys, manifest, project_name};
use crate::policy::PolicyConfig;
use crate::report::{RuleFailure, ValidationResult};
use crate::source::ProjectSource;
use botgate_types::ids;
use tracing::debug;

/// Fixed evaluation order.
pub const RULE_ORDER: [&str; 6] = [
    ids::RULE_PROJECT_NAME_NO_SPACES,
    ids::RULE_MANIFEST_REQUIRED,
    ids::RULE_ENDPOINTS_REQUIRED,
    ids::RULE_ENDPOINTS_FORBIDDEN,
    ids::RULE_KEYS_NLU,
    ids::RULE_KEYS_QA,
];

/// Run every enabled rule against `source`, stopping at the first failure.
///
/// The manifest is loaded at most once, and only when `require_manifest_file`
/// is set. Without it the endpoint and key rules are skipped and the run passes
/// (unless the naming rule already failed).
pub fn evaluate<S: ProjectSource + ?Sized>(source: &S, policy: &PolicyConfig) -> ValidationResult {
    let mut evaluated = Vec::new();
    match run_rules(source, policy, &mut evaluated) {
        Ok(()) => ValidationResult::pass(evaluated),
        Err(failure) => {
            debug!(
                rule = failure.rule_id,
                code = failure.code,
                kind = failure.kind.as_str(),
                "rule failed"
            );
            ValidationResult::fail(failure, evaluated)
        }
    }
}

fn run_rules<S: ProjectSource + ?Sized>(
    source: &S,
    policy: &PolicyConfig,
    evaluated: &mut Vec<&'static str>,
) -> Result<(), RuleFailure> {
    if policy.forbid_spaces_in_project_name {
        evaluated.push(ids::RULE_PROJECT_NAME_NO_SPACES);
        project_name::run(source.project_file_name())?;
    }

    if !policy.require_manifest_file {
        debug!("manifest not required; skipping manifest rules");
        return Ok(());
    }

    evaluated.push(ids::RULE_MANIFEST_REQUIRED);
    let manifest = manifest::run(source.load_manifest())?;
    debug!(
        name = %manifest.name,
        services = manifest.services.len(),
        "manifest loaded"
    );

    if !policy.required_endpoints.is_empty() {
        evaluated.push(ids::RULE_ENDPOINTS_REQUIRED);
        endpoints::run_required(&manifest, &policy.required_endpoints)?;
    }

    if !policy.forbidden_endpoints.is_empty() {
        evaluated.push(ids::RULE_ENDPOINTS_FORBIDDEN);
        endpoints::run_forbidden(&manifest, &policy.forbidden_endpoints)?;
    }

    if policy.require_nlu_key {
        evaluated.push(ids::RULE_KEYS_NLU);
        keys::run_nlu(&manifest)?;
    }

    if policy.require_qa_key {
        evaluated.push(ids::RULE_KEYS_QA);
        keys::run_qa(&manifest)?;
    }

    Ok(())
}

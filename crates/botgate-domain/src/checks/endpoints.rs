use crate::checks::utils::{declared_names, find_services_by_type, matches_name_set, undeclared_names};
use crate::model::{ProjectManifest, ServiceType};
use crate::report::RuleFailure;
use botgate_types::{FailureKind, ids};
use serde_json::json;
use std::collections::BTreeSet;

pub fn run_required(manifest: &ProjectManifest, required: &BTreeSet<String>) -> Result<(), RuleFailure> {
    let endpoints = find_services_by_type(manifest, &ServiceType::Endpoint);
    if matches_name_set(&endpoints, required, true) {
        return Ok(());
    }

    Err(RuleFailure::new(
        ids::RULE_ENDPOINTS_REQUIRED,
        ids::CODE_REQUIRED_ENDPOINT_MISSING,
        FailureKind::PolicyViolation,
        "The manifest does not declare all required endpoints.",
    )
    .with_help("Declare every required endpoint as an `endpoint` service in the manifest.")
    .with_data(json!({ "missing": undeclared_names(&endpoints, required) })))
}

pub fn run_forbidden(manifest: &ProjectManifest, forbidden: &BTreeSet<String>) -> Result<(), RuleFailure> {
    let endpoints = find_services_by_type(manifest, &ServiceType::Endpoint);
    if matches_name_set(&endpoints, forbidden, false) {
        return Ok(());
    }

    Err(RuleFailure::new(
        ids::RULE_ENDPOINTS_FORBIDDEN,
        ids::CODE_FORBIDDEN_ENDPOINT_PRESENT,
        FailureKind::PolicyViolation,
        "The manifest declares a forbidden endpoint.",
    )
    .with_help("Remove forbidden endpoints from the manifest before publishing.")
    .with_data(json!({ "present": declared_names(&endpoints, forbidden) })))
}

use crate::checks::utils::{find_services_by_type, has_subscription_key};
use crate::model::{ProjectManifest, ServiceType};
use crate::report::RuleFailure;
use botgate_types::{FailureKind, ids};
use serde_json::json;

struct KeyRule {
    rule_id: &'static str,
    service_type: ServiceType,
    code_missing: &'static str,
    code_ambiguous: &'static str,
    code_key_missing: &'static str,
}

pub fn run_nlu(manifest: &ProjectManifest) -> Result<(), RuleFailure> {
    run(
        manifest,
        &KeyRule {
            rule_id: ids::RULE_KEYS_NLU,
            service_type: ServiceType::Nlu,
            code_missing: ids::CODE_NLU_SERVICE_MISSING,
            code_ambiguous: ids::CODE_NLU_SERVICE_AMBIGUOUS,
            code_key_missing: ids::CODE_NLU_KEY_MISSING,
        },
    )
}

pub fn run_qa(manifest: &ProjectManifest) -> Result<(), RuleFailure> {
    run(
        manifest,
        &KeyRule {
            rule_id: ids::RULE_KEYS_QA,
            service_type: ServiceType::Qa,
            code_missing: ids::CODE_QA_SERVICE_MISSING,
            code_ambiguous: ids::CODE_QA_SERVICE_AMBIGUOUS,
            code_key_missing: ids::CODE_QA_KEY_MISSING,
        },
    )
}

fn run(manifest: &ProjectManifest, rule: &KeyRule) -> Result<(), RuleFailure> {
    let label = rule.service_type.label();
    let services = find_services_by_type(manifest, &rule.service_type);

    let service = match services.as_slice() {
        [] => {
            return Err(RuleFailure::new(
                rule.rule_id,
                rule.code_missing,
                FailureKind::PolicyViolation,
                format!("The manifest does not declare a {label} service."),
            )
            .with_help("Declare the service in the manifest with its subscription key."));
        }
        [single] => *single,
        many => {
            let names: Vec<&str> = many.iter().map(|s| s.name.as_str()).collect();
            return Err(RuleFailure::new(
                rule.rule_id,
                rule.code_ambiguous,
                FailureKind::PolicyViolation,
                format!(
                    "The manifest declares {} {label} services; exactly one is required.",
                    many.len()
                ),
            )
            .with_help("Keep a single service of this type in the manifest.")
            .with_data(json!({ "services": names })));
        }
    };

    if !has_subscription_key(service) {
        return Err(RuleFailure::new(
            rule.rule_id,
            rule.code_key_missing,
            FailureKind::PolicyViolation,
            format!(
                "The {label} service '{}' does not have a subscription key.",
                service.name
            ),
        )
        .with_help("Fill in `subscriptionKey` for the service.")
        .with_data(json!({ "service": service.name, "type": rule.service_type.as_str() })));
    }

    Ok(())
}

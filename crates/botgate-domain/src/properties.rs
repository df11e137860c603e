//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - endpoint set membership (required and forbidden)
//! - skip semantics when the manifest is not required
//! - pass/message consistency of every result

use crate::engine::evaluate;
use crate::policy::PolicyConfig;
use crate::test_support::{StubManifest, StubSource, endpoint, manifest, nlu, qa};
use botgate_types::ids;
use proptest::prelude::*;
use std::collections::BTreeSet;

// ============================================================================
// Strategies
// ============================================================================

/// Endpoint names drawn from a small alphabet so sets overlap often.
fn arb_endpoint_names() -> impl Strategy<Value = BTreeSet<String>> {
    prop::collection::btree_set(
        prop::sample::select(vec!["development", "staging", "production", "test", "A", "B"])
            .prop_map(|s| s.to_string()),
        0..5,
    )
}

fn arb_key() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("   ".to_string()),
        "[a-f0-9]{8,32}",
    ]
}

fn arb_policy() -> impl Strategy<Value = PolicyConfig> {
    (
        any::<bool>(),
        any::<bool>(),
        arb_endpoint_names(),
        arb_endpoint_names(),
        any::<bool>(),
        any::<bool>(),
    )
        .prop_map(
            |(no_spaces, require_manifest, required, forbidden, nlu_key, qa_key)| PolicyConfig {
                forbid_spaces_in_project_name: no_spaces,
                require_manifest_file: require_manifest,
                required_endpoints: required,
                forbidden_endpoints: forbidden,
                require_nlu_key: nlu_key,
                require_qa_key: qa_key,
            },
        )
}

fn stub_with_endpoints(declared: &BTreeSet<String>) -> StubSource {
    let services = declared.iter().map(|n| endpoint(n)).collect();
    StubSource::new(Some("Bot.csproj"), StubManifest::Loaded(manifest(services)))
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn required_rule_passes_iff_subset(
        declared in arb_endpoint_names(),
        required in arb_endpoint_names(),
    ) {
        let policy = PolicyConfig {
            require_manifest_file: true,
            required_endpoints: required.clone(),
            ..PolicyConfig::default()
        };
        let result = evaluate(&stub_with_endpoints(&declared), &policy);
        prop_assert_eq!(result.passed, required.is_subset(&declared));
    }

    #[test]
    fn forbidden_rule_passes_iff_disjoint(
        declared in arb_endpoint_names(),
        forbidden in arb_endpoint_names(),
    ) {
        let policy = PolicyConfig {
            require_manifest_file: true,
            forbidden_endpoints: forbidden.clone(),
            ..PolicyConfig::default()
        };
        let result = evaluate(&stub_with_endpoints(&declared), &policy);
        prop_assert_eq!(result.passed, forbidden.is_disjoint(&declared));
    }

    #[test]
    fn manifest_never_loaded_when_not_required(mut policy in arb_policy()) {
        policy.require_manifest_file = false;
        let source = StubSource::new(Some("Bot.csproj"), StubManifest::NotFound);
        let result = evaluate(&source, &policy);

        prop_assert!(result.passed);
        prop_assert_eq!(source.loads(), 0);
    }

    #[test]
    fn message_is_empty_iff_passed(
        policy in arb_policy(),
        declared in arb_endpoint_names(),
        nlu_key in arb_key(),
        qa_key in arb_key(),
        spaced in any::<bool>(),
    ) {
        let mut services: Vec<_> = declared.iter().map(|n| endpoint(n)).collect();
        services.push(nlu(&nlu_key));
        services.push(qa(&qa_key));
        let project_file = if spaced { "My Bot.csproj" } else { "MyBot.csproj" };
        let source = StubSource::new(Some(project_file), StubManifest::Loaded(manifest(services)));

        let result = evaluate(&source, &policy);
        prop_assert_eq!(result.passed, result.message.is_empty());
        prop_assert_eq!(result.passed, result.failure.is_none());
        prop_assert!(source.loads() <= 1);

        if spaced && policy.forbid_spaces_in_project_name {
            prop_assert_eq!(result.rule_id(), Some(ids::RULE_PROJECT_NAME_NO_SPACES));
        }
    }
}

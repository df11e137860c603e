//! Fuzz target for policy construction from raw switch strings and config text.
//!
//! `policy_from_raw` is total: it must return a policy for every input.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_policy_inputs
//! ```

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct RawSwitches<'a> {
    forbid_spaces_in_project_name: Option<&'a str>,
    require_manifest_file: Option<&'a str>,
    require_endpoints: Option<&'a str>,
    forbid_endpoints: Option<&'a str>,
    require_nlu_key: Option<&'a str>,
    require_qa_key: Option<&'a str>,
    config_text: &'a str,
}

fuzz_target!(|input: RawSwitches<'_>| {
    let policy = botgate_settings::policy_from_raw(
        input.forbid_spaces_in_project_name,
        input.require_manifest_file,
        input.require_endpoints,
        input.forbid_endpoints,
        input.require_nlu_key,
        input.require_qa_key,
    );
    assert!(policy.required_endpoints.iter().all(|n| !n.trim().is_empty()));
    assert!(policy.forbidden_endpoints.iter().all(|n| !n.trim().is_empty()));

    let _ = botgate_settings::parse_config_toml(input.config_text);
});

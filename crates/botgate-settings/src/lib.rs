//! Policy construction, config parsing, and profile resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves configuration provided as strings.

#![forbid(unsafe_code)]

mod model;
mod parse;
mod presets;
mod resolve;

pub use model::{BotgateConfigV1, RawSwitch};
pub use parse::{parse_bool, parse_name_set, PolicyInputs};
pub use resolve::{Overrides, ResolvedConfig, DEFAULT_MANIFEST_GLOB, DEFAULT_PROJECT_FILE_GLOB};

use botgate_domain::PolicyConfig;

/// Parse `botgate.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<BotgateConfigV1> {
    let cfg: BotgateConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Build a policy from six raw switch values. Never fails.
///
/// Unparseable booleans become `false`; blank endpoint lists become "no constraint".
pub fn policy_from_raw(
    forbid_spaces_in_project_name: Option<&str>,
    require_manifest_file: Option<&str>,
    require_endpoints: Option<&str>,
    forbid_endpoints: Option<&str>,
    require_nlu_key: Option<&str>,
    require_qa_key: Option<&str>,
) -> PolicyConfig {
    PolicyInputs {
        forbid_spaces_in_project_name: forbid_spaces_in_project_name.map(str::to_string),
        require_manifest_file: require_manifest_file.map(str::to_string),
        require_endpoints: require_endpoints.map(str::to_string),
        forbid_endpoints: forbid_endpoints.map(str::to_string),
        require_nlu_key: require_nlu_key.map(str::to_string),
        require_qa_key: require_qa_key.map(str::to_string),
    }
    .to_policy()
}

/// Resolve the effective settings (profile + config file + overrides).
pub fn resolve_config(
    cfg: BotgateConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(cfg, overrides)
}

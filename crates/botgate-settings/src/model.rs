use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// `botgate.toml` schema v1.
///
/// Switch values go through the same lenient parsing as CLI flags, so a typo
/// disables a rule instead of aborting the run.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct BotgateConfigV1 {
    /// Optional schema string for tooling (`botgate.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Preset profile: `default` (all rules off) or `publish`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forbid_spaces_in_project_name: Option<RawSwitch>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub require_manifest_file: Option<RawSwitch>,

    /// Comma-separated endpoint names that must be declared.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub require_endpoints: Option<RawSwitch>,

    /// Comma-separated endpoint names that must not be declared.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forbid_endpoints: Option<RawSwitch>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub require_nlu_key: Option<RawSwitch>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub require_qa_key: Option<RawSwitch>,

    /// Glob for the project's identifying file (default `*.csproj`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_file_glob: Option<String>,

    /// Glob for the manifest file (default `*.bot`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manifest_glob: Option<String>,

    /// Name of the environment variable that holds the manifest secret.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret_env: Option<String>,
}

/// A switch value as written in the config file.
///
/// Booleans and arrays are accepted for convenience and folded into the raw
/// string form the CLI uses.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum RawSwitch {
    Flag(bool),
    Text(String),
    List(Vec<String>),
}

impl RawSwitch {
    pub fn into_raw(self) -> String {
        match self {
            RawSwitch::Flag(b) => b.to_string(),
            RawSwitch::Text(s) => s,
            RawSwitch::List(items) => items.join(","),
        }
    }
}

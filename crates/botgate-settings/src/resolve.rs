use crate::model::{BotgateConfigV1, RawSwitch};
use crate::{parse::PolicyInputs, presets};
use anyhow::Context;
use botgate_domain::PolicyConfig;
use globset::Glob;
use tracing::debug;

pub const DEFAULT_PROJECT_FILE_GLOB: &str = "*.csproj";
pub const DEFAULT_MANIFEST_GLOB: &str = "*.bot";

/// CLI-level overrides; every field wins over the config file when present.
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub profile: Option<String>,
    pub switches: PolicyInputs,
    pub project_file_glob: Option<String>,
    pub manifest_glob: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedConfig {
    pub profile: String,
    pub policy: PolicyConfig,
    pub project_file_glob: String,
    pub manifest_glob: String,
    pub secret_env: Option<String>,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            profile: "default".to_string(),
            policy: PolicyConfig::default(),
            project_file_glob: DEFAULT_PROJECT_FILE_GLOB.to_string(),
            manifest_glob: DEFAULT_MANIFEST_GLOB.to_string(),
            secret_env: None,
        }
    }
}

pub fn resolve_config(
    cfg: BotgateConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    let profile = overrides
        .profile
        .clone()
        .or(cfg.profile.clone())
        .unwrap_or_else(|| "default".to_string());

    let from_file = PolicyInputs {
        forbid_spaces_in_project_name: cfg.forbid_spaces_in_project_name.map(RawSwitch::into_raw),
        require_manifest_file: cfg.require_manifest_file.map(RawSwitch::into_raw),
        require_endpoints: cfg.require_endpoints.map(RawSwitch::into_raw),
        forbid_endpoints: cfg.forbid_endpoints.map(RawSwitch::into_raw),
        require_nlu_key: cfg.require_nlu_key.map(RawSwitch::into_raw),
        require_qa_key: cfg.require_qa_key.map(RawSwitch::into_raw),
    };

    let inputs = presets::preset(&profile)
        .layered(from_file)
        .layered(overrides.switches);
    let policy = inputs.to_policy();
    debug!(?policy, %profile, "resolved policy");

    let project_file_glob = overrides
        .project_file_glob
        .or(cfg.project_file_glob)
        .unwrap_or_else(|| DEFAULT_PROJECT_FILE_GLOB.to_string());
    validate_glob("project_file_glob", &project_file_glob)?;

    let manifest_glob = overrides
        .manifest_glob
        .or(cfg.manifest_glob)
        .unwrap_or_else(|| DEFAULT_MANIFEST_GLOB.to_string());
    validate_glob("manifest_glob", &manifest_glob)?;

    Ok(ResolvedConfig {
        profile,
        policy,
        project_file_glob,
        manifest_glob,
        secret_env: cfg.secret_env.filter(|s| !s.trim().is_empty()),
    })
}

fn validate_glob(key: &str, pattern: &str) -> anyhow::Result<()> {
    if pattern.contains('/') || pattern.contains('\\') {
        anyhow::bail!("{key} must match file names only, got: {pattern}");
    }
    Glob::new(pattern).with_context(|| format!("invalid {key}: {pattern}"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_config_toml;

    #[test]
    fn empty_config_disables_every_rule() {
        let resolved = resolve_config(BotgateConfigV1::default(), Overrides::default())
            .expect("resolve");
        assert_eq!(resolved, ResolvedConfig::default());
        assert!(resolved.policy.is_noop());
    }

    #[test]
    fn publish_profile_enables_structural_rules() {
        let cfg = parse_config_toml("profile = \"publish\"\n").expect("parse");
        let resolved = resolve_config(cfg, Overrides::default()).expect("resolve");
        assert!(resolved.policy.forbid_spaces_in_project_name);
        assert!(resolved.policy.require_manifest_file);
        assert!(!resolved.policy.require_nlu_key);
    }

    #[test]
    fn unknown_profile_falls_back_to_default() {
        let overrides = Overrides {
            profile: Some("paranoid".to_string()),
            ..Overrides::default()
        };
        let resolved = resolve_config(BotgateConfigV1::default(), overrides).expect("resolve");
        assert!(resolved.policy.is_noop());
    }

    #[test]
    fn file_values_override_profile_and_cli_overrides_file() {
        let cfg = parse_config_toml(
            r#"
profile = "publish"
forbid_spaces_in_project_name = "false"
require_endpoints = "production"
require_nlu_key = "TRUE"
"#,
        )
        .expect("parse");
        let overrides = Overrides {
            switches: PolicyInputs {
                require_endpoints: Some("production, staging".to_string()),
                ..PolicyInputs::default()
            },
            ..Overrides::default()
        };

        let resolved = resolve_config(cfg, overrides).expect("resolve");
        assert!(!resolved.policy.forbid_spaces_in_project_name);
        assert!(resolved.policy.require_manifest_file);
        assert!(resolved.policy.require_nlu_key);
        assert_eq!(resolved.policy.required_endpoints.len(), 2);
    }

    #[test]
    fn unparseable_switch_in_file_is_false() {
        let cfg = parse_config_toml("require_manifest_file = \"yes please\"\n").expect("parse");
        let resolved = resolve_config(cfg, Overrides::default()).expect("resolve");
        assert!(!resolved.policy.require_manifest_file);
    }

    #[test]
    fn globs_and_secret_env_come_from_file() {
        let cfg = parse_config_toml(
            r#"
project_file_glob = "*.fsproj"
manifest_glob = "*.bot.json"
secret_env = "BOT_SECRET"
"#,
        )
        .expect("parse");
        let resolved = resolve_config(cfg, Overrides::default()).expect("resolve");
        assert_eq!(resolved.project_file_glob, "*.fsproj");
        assert_eq!(resolved.manifest_glob, "*.bot.json");
        assert_eq!(resolved.secret_env.as_deref(), Some("BOT_SECRET"));
    }

    #[test]
    fn invalid_glob_is_an_error() {
        let overrides = Overrides {
            manifest_glob: Some("[".to_string()),
            ..Overrides::default()
        };
        let err = resolve_config(BotgateConfigV1::default(), overrides).unwrap_err();
        assert!(err.to_string().contains("invalid manifest_glob"));
    }

    #[test]
    fn glob_with_directory_is_rejected() {
        let overrides = Overrides {
            project_file_glob: Some("src/*.csproj".to_string()),
            ..Overrides::default()
        };
        let err = resolve_config(BotgateConfigV1::default(), overrides).unwrap_err();
        assert!(err.to_string().contains("file names only"));
    }

    #[test]
    fn native_toml_booleans_and_arrays_are_accepted() {
        let cfg = parse_config_toml(
            r#"
require_manifest_file = true
require_qa_key = false
forbid_endpoints = ["development", "local"]
"#,
        )
        .expect("parse");
        let resolved = resolve_config(cfg, Overrides::default()).expect("resolve");
        assert!(resolved.policy.require_manifest_file);
        assert!(!resolved.policy.require_qa_key);
        assert!(resolved.policy.forbidden_endpoints.contains("local"));
    }

    #[test]
    fn numeric_switch_is_a_parse_error() {
        assert!(parse_config_toml("require_manifest_file = 1\n").is_err());
    }
}

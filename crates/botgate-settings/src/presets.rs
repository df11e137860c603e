use crate::parse::PolicyInputs;

/// Preset profiles are opinionated defaults.
///
/// Keep these small and readable. Anything project-specific belongs in botgate.toml.
pub fn preset(profile: &str) -> PolicyInputs {
    match profile {
        "publish" => publish_profile(),
        // default
        _ => PolicyInputs::default(),
    }
}

/// Structural checks every published bot should satisfy. Endpoint names and
/// service keys depend on the project, so they stay off.
fn publish_profile() -> PolicyInputs {
    PolicyInputs {
        forbid_spaces_in_project_name: Some("true".to_string()),
        require_manifest_file: Some("true".to_string()),
        ..PolicyInputs::default()
    }
}

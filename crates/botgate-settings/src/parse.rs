use botgate_domain::PolicyConfig;
use std::collections::BTreeSet;

/// Raw, unvalidated switch values as they arrive from CLI flags, task
/// properties, or the config file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PolicyInputs {
    pub forbid_spaces_in_project_name: Option<String>,
    pub require_manifest_file: Option<String>,
    pub require_endpoints: Option<String>,
    pub forbid_endpoints: Option<String>,
    pub require_nlu_key: Option<String>,
    pub require_qa_key: Option<String>,
}

impl PolicyInputs {
    /// Per-switch merge: values present in `over` win.
    pub fn layered(self, over: PolicyInputs) -> PolicyInputs {
        PolicyInputs {
            forbid_spaces_in_project_name: over
                .forbid_spaces_in_project_name
                .or(self.forbid_spaces_in_project_name),
            require_manifest_file: over.require_manifest_file.or(self.require_manifest_file),
            require_endpoints: over.require_endpoints.or(self.require_endpoints),
            forbid_endpoints: over.forbid_endpoints.or(self.forbid_endpoints),
            require_nlu_key: over.require_nlu_key.or(self.require_nlu_key),
            require_qa_key: over.require_qa_key.or(self.require_qa_key),
        }
    }

    pub fn to_policy(&self) -> PolicyConfig {
        PolicyConfig {
            forbid_spaces_in_project_name: parse_bool(self.forbid_spaces_in_project_name.as_deref()),
            require_manifest_file: parse_bool(self.require_manifest_file.as_deref()),
            required_endpoints: parse_name_set(self.require_endpoints.as_deref()),
            // Independent of `require_endpoints`.
            forbidden_endpoints: parse_name_set(self.forbid_endpoints.as_deref()),
            require_nlu_key: parse_bool(self.require_nlu_key.as_deref()),
            require_qa_key: parse_bool(self.require_qa_key.as_deref()),
        }
    }
}

/// `true`/`false` in any letter case, surrounding whitespace ignored.
/// Everything else, including `None`, is `false`.
pub fn parse_bool(raw: Option<&str>) -> bool {
    raw.map(|v| v.trim().eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

/// Comma-separated names; segments are trimmed and empty ones dropped.
/// Blank input yields an empty set, which disables the rule.
pub fn parse_name_set(raw: Option<&str>) -> BTreeSet<String> {
    let Some(raw) = raw else {
        return BTreeSet::new();
    };
    raw.trim()
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

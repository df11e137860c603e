use std::collections::BTreeSet;

/// Validation switches for a single run.
///
/// Built by `botgate-settings` from raw strings; every field defaults to
/// "disabled". An empty endpoint set means the corresponding rule is skipped.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PolicyConfig {
    pub forbid_spaces_in_project_name: bool,
    pub require_manifest_file: bool,
    pub required_endpoints: BTreeSet<String>,
    pub forbidden_endpoints: BTreeSet<String>,
    pub require_nlu_key: bool,
    pub require_qa_key: bool,
}

impl PolicyConfig {
    /// True when no rule would run.
    pub fn is_noop(&self) -> bool {
        !self.forbid_spaces_in_project_name && !self.require_manifest_file
    }
}

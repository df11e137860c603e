//! Stable identifiers for rules and failure codes.
//!
//! `rule_id` is a dotted namespace. `code` is a short snake_case discriminator.

// Rules, in evaluation order.
pub const RULE_PROJECT_NAME_NO_SPACES: &str = "project.name_no_spaces";
pub const RULE_MANIFEST_REQUIRED: &str = "manifest.required";
pub const RULE_ENDPOINTS_REQUIRED: &str = "endpoints.required";
pub const RULE_ENDPOINTS_FORBIDDEN: &str = "endpoints.forbidden";
pub const RULE_KEYS_NLU: &str = "keys.nlu";
pub const RULE_KEYS_QA: &str = "keys.qa";

// Codes: project.name_no_spaces
pub const CODE_PROJECT_FILE_MISSING: &str = "project_file_missing";
pub const CODE_PROJECT_NAME_HAS_SPACES: &str = "project_name_has_spaces";

// Codes: manifest.required
pub const CODE_MANIFEST_NOT_FOUND: &str = "manifest_not_found";
pub const CODE_MANIFEST_AMBIGUOUS: &str = "manifest_ambiguous";
pub const CODE_MANIFEST_MALFORMED: &str = "manifest_malformed";

// Codes: endpoints.required / endpoints.forbidden
pub const CODE_REQUIRED_ENDPOINT_MISSING: &str = "required_endpoint_missing";
pub const CODE_FORBIDDEN_ENDPOINT_PRESENT: &str = "forbidden_endpoint_present";

// Codes: keys.nlu
pub const CODE_NLU_SERVICE_MISSING: &str = "nlu_service_missing";
pub const CODE_NLU_SERVICE_AMBIGUOUS: &str = "nlu_service_ambiguous";
pub const CODE_NLU_KEY_MISSING: &str = "nlu_key_missing";

// Codes: keys.qa
pub const CODE_QA_SERVICE_MISSING: &str = "qa_service_missing";
pub const CODE_QA_SERVICE_AMBIGUOUS: &str = "qa_service_ambiguous";
pub const CODE_QA_KEY_MISSING: &str = "qa_key_missing";

// Tool-level
pub const RULE_TOOL_RUNTIME: &str = "tool.runtime";
pub const CODE_FOLDER_UNREADABLE: &str = "folder_unreadable";
pub const CODE_INTERNAL_ERROR: &str = "internal_error";

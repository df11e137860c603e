//! Explain registry for rules and codes.
//!
//! Maps rule IDs and codes to human-readable explanations with remediation guidance.

use crate::ids;

/// Explanation entry for a rule or code.
#[derive(Debug, Clone)]
pub struct Explanation {
    /// Short description of the rule/code.
    pub title: &'static str,
    /// What the rule does and why it exists.
    pub description: &'static str,
    /// How to fix violations.
    pub remediation: &'static str,
    /// Before/after examples.
    pub examples: ExamplePair,
}

/// Before and after examples.
#[derive(Debug, Clone)]
pub struct ExamplePair {
    /// Fence language used when rendering the examples.
    pub syntax: &'static str,
    /// Content that would trigger a failure.
    pub before: &'static str,
    /// Content that passes the rule.
    pub after: &'static str,
}

/// Look up an explanation by rule_id or code.
///
/// Returns `None` if the identifier is not recognized.
pub fn lookup_explanation(identifier: &str) -> Option<Explanation> {
    match identifier {
        // Rule IDs
        ids::RULE_PROJECT_NAME_NO_SPACES => Some(explain_project_name()),
        ids::RULE_MANIFEST_REQUIRED => Some(explain_manifest_required()),
        ids::RULE_ENDPOINTS_REQUIRED => Some(explain_endpoints_required()),
        ids::RULE_ENDPOINTS_FORBIDDEN => Some(explain_endpoints_forbidden()),
        ids::RULE_KEYS_NLU => Some(explain_nlu_key()),
        ids::RULE_KEYS_QA => Some(explain_qa_key()),
        ids::RULE_TOOL_RUNTIME => Some(explain_tool_runtime()),

        // Codes
        ids::CODE_PROJECT_FILE_MISSING => Some(explain_project_file_missing()),
        ids::CODE_PROJECT_NAME_HAS_SPACES => Some(explain_project_name()),
        ids::CODE_MANIFEST_NOT_FOUND => Some(explain_manifest_required()),
        ids::CODE_MANIFEST_AMBIGUOUS => Some(explain_manifest_ambiguous()),
        ids::CODE_MANIFEST_MALFORMED => Some(explain_manifest_malformed()),
        ids::CODE_REQUIRED_ENDPOINT_MISSING => Some(explain_endpoints_required()),
        ids::CODE_FORBIDDEN_ENDPOINT_PRESENT => Some(explain_endpoints_forbidden()),
        ids::CODE_NLU_SERVICE_MISSING
        | ids::CODE_NLU_SERVICE_AMBIGUOUS
        | ids::CODE_NLU_KEY_MISSING => Some(explain_nlu_key()),
        ids::CODE_QA_SERVICE_MISSING | ids::CODE_QA_SERVICE_AMBIGUOUS | ids::CODE_QA_KEY_MISSING => {
            Some(explain_qa_key())
        }
        ids::CODE_FOLDER_UNREADABLE => Some(explain_folder_unreadable()),
        ids::CODE_INTERNAL_ERROR => Some(explain_internal_error()),

        _ => None,
    }
}

/// List all known rule IDs: policy rules in evaluation order, then `tool.runtime`.
pub fn all_rule_ids() -> &'static [&'static str] {
    &[
        ids::RULE_PROJECT_NAME_NO_SPACES,
        ids::RULE_MANIFEST_REQUIRED,
        ids::RULE_ENDPOINTS_REQUIRED,
        ids::RULE_ENDPOINTS_FORBIDDEN,
        ids::RULE_KEYS_NLU,
        ids::RULE_KEYS_QA,
        ids::RULE_TOOL_RUNTIME,
    ]
}

/// List all known codes.
pub fn all_codes() -> &'static [&'static str] {
    &[
        ids::CODE_PROJECT_FILE_MISSING,
        ids::CODE_PROJECT_NAME_HAS_SPACES,
        ids::CODE_MANIFEST_NOT_FOUND,
        ids::CODE_MANIFEST_AMBIGUOUS,
        ids::CODE_MANIFEST_MALFORMED,
        ids::CODE_REQUIRED_ENDPOINT_MISSING,
        ids::CODE_FORBIDDEN_ENDPOINT_PRESENT,
        ids::CODE_NLU_SERVICE_MISSING,
        ids::CODE_NLU_SERVICE_AMBIGUOUS,
        ids::CODE_NLU_KEY_MISSING,
        ids::CODE_QA_SERVICE_MISSING,
        ids::CODE_QA_SERVICE_AMBIGUOUS,
        ids::CODE_QA_KEY_MISSING,
        ids::CODE_FOLDER_UNREADABLE,
        ids::CODE_INTERNAL_ERROR,
    ]
}

fn explain_project_name() -> Explanation {
    Explanation {
        title: "Project File Name Without Spaces",
        description: "\
Fails when the project's identifying file (by default the top-level `*.csproj`)
has whitespace in its file name.

Publishing pipelines derive deployment and package names from the project file
name. Whitespace in that name breaks unquoted shell steps and produces resource
names the hosting service rejects.",
        remediation: "\
Rename the project file so its name contains no whitespace, and update any
solution files that reference it.",
        examples: ExamplePair {
            syntax: "text",
            before: "my bot/\n  My Echo Bot.csproj\n  my-echo-bot.bot",
            after: "my bot/\n  MyEchoBot.csproj\n  my-echo-bot.bot",
        },
    }
}

fn explain_project_file_missing() -> Explanation {
    Explanation {
        title: "Project File Missing",
        description: "\
The naming rule is enabled but no identifying project file exists at the top
level of the project folder. Only the folder itself is searched, not its
subdirectories.",
        remediation: "\
Point `--project-dir` at the folder that contains the project file, or change
`project_file_glob` in botgate.toml to match your project layout.",
        examples: ExamplePair {
            syntax: "toml",
            before: "# botgate.toml\nproject_file_glob = \"*.csproj\"",
            after: "# botgate.toml\nproject_file_glob = \"*.fsproj\"",
        },
    }
}

fn explain_manifest_required() -> Explanation {
    Explanation {
        title: "Manifest File Required",
        description: "\
Requires exactly one bot manifest (by default `*.bot`) at the top level of the
project folder. When this rule is disabled, the manifest is never loaded and
the endpoint and key rules are skipped.",
        remediation: "\
Add the project's `.bot` file to the project folder. If the manifest lives
elsewhere, change `manifest_glob` in botgate.toml.",
        examples: ExamplePair {
            syntax: "json",
            before: "(no .bot file in the project folder)",
            after: r#"{
  "name": "echo-bot",
  "description": "",
  "services": []
}"#,
        },
    }
}

fn explain_manifest_ambiguous() -> Explanation {
    Explanation {
        title: "Multiple Manifest Files",
        description: "\
More than one file in the project folder matches the manifest glob, so the
gate cannot tell which one will be published.",
        remediation: "\
Keep a single `.bot` file in the project folder. Move per-environment variants
into a subdirectory or give them a different extension.",
        examples: ExamplePair {
            syntax: "text",
            before: "echo-bot.bot\necho-bot.dev.bot",
            after: "echo-bot.bot\nenv/echo-bot.dev.bot.json",
        },
    }
}

fn explain_manifest_malformed() -> Explanation {
    Explanation {
        title: "Malformed Manifest",
        description: "\
The manifest could not be read as a bot configuration: the JSON is invalid, a
required field has the wrong type, or the file is encrypted (non-empty
`padlock`) and the secret is missing or does not decrypt it.",
        remediation: "\
Fix the JSON syntax, or pass the manifest secret with `--secret` (or the
environment variable named by `secret_env` in botgate.toml). The secret is the
base64 key the manifest was encrypted with.",
        examples: ExamplePair {
            syntax: "json",
            before: r#"{ "name": "echo-bot", "services": [ }"#,
            after: r#"{ "name": "echo-bot", "services": [] }"#,
        },
    }
}

fn explain_endpoints_required() -> Explanation {
    Explanation {
        title: "Required Endpoints",
        description: "\
Every endpoint name listed in the required set must match the `name` of an
`endpoint` service in the manifest. Matching is exact and case-sensitive.",
        remediation: "\
Declare the missing endpoint in the manifest, or remove it from
`require_endpoints`.",
        examples: ExamplePair {
            syntax: "json",
            before: r#"{ "services": [
  { "type": "endpoint", "name": "development", "endpoint": "http://localhost:3978/api/messages" }
] }"#,
            after: r#"{ "services": [
  { "type": "endpoint", "name": "development", "endpoint": "http://localhost:3978/api/messages" },
  { "type": "endpoint", "name": "production", "endpoint": "https://echo-bot.azurewebsites.net/api/messages" }
] }"#,
        },
    }
}

fn explain_endpoints_forbidden() -> Explanation {
    Explanation {
        title: "Forbidden Endpoints",
        description: "\
No endpoint service in the manifest may use a name from the forbidden set.
Typically used to keep local development endpoints out of published bots.",
        remediation: "\
Remove the forbidden endpoint from the manifest before publishing.",
        examples: ExamplePair {
            syntax: "json",
            before: r#"{ "services": [
  { "type": "endpoint", "name": "development", "endpoint": "http://localhost:3978/api/messages" },
  { "type": "endpoint", "name": "production", "endpoint": "https://echo-bot.azurewebsites.net/api/messages" }
] }"#,
            after: r#"{ "services": [
  { "type": "endpoint", "name": "production", "endpoint": "https://echo-bot.azurewebsites.net/api/messages" }
] }"#,
        },
    }
}

fn explain_nlu_key() -> Explanation {
    Explanation {
        title: "NLU Subscription Key",
        description: "\
Requires exactly one NLU (`luis`) service in the manifest, with a non-blank
`subscriptionKey`.",
        remediation: "\
Declare a single LUIS service and fill in its subscription key.",
        examples: ExamplePair {
            syntax: "json",
            before: r#"{ "type": "luis", "name": "intents", "subscriptionKey": "" }"#,
            after: r#"{ "type": "luis", "name": "intents", "subscriptionKey": "5f1c0d..." }"#,
        },
    }
}

fn explain_qa_key() -> Explanation {
    Explanation {
        title: "QA Subscription Key",
        description: "\
Requires exactly one QA (`qna`) service in the manifest, with a non-blank
`subscriptionKey`.",
        remediation: "\
Declare a single QnA Maker service and fill in its subscription key.",
        examples: ExamplePair {
            syntax: "json",
            before: r#"{ "type": "qna", "name": "faq" }"#,
            after: r#"{ "type": "qna", "name": "faq", "subscriptionKey": "8a27e4..." }"#,
        },
    }
}

fn explain_tool_runtime() -> Explanation {
    Explanation {
        title: "Tool Runtime Failure",
        description: "\
Failures that are not about a single policy rule: the project folder could not
be read, or validation stopped unexpectedly. No rule results are recorded.",
        remediation: "\
See the specific code (`folder_unreadable` or `internal_error`) for guidance.",
        examples: ExamplePair {
            syntax: "text",
            before: "botgate --project-dir bots/missing check",
            after: "botgate --project-dir bots/echo check",
        },
    }
}

fn explain_folder_unreadable() -> Explanation {
    Explanation {
        title: "Project Folder Unreadable",
        description: "\
The folder passed as `--project-dir` does not exist or is not a directory, so
no rule could run.",
        remediation: "\
Point `--project-dir` at an existing project folder. Relative paths are
resolved against the current working directory.",
        examples: ExamplePair {
            syntax: "text",
            before: "botgate --project-dir ./EchoBot.csproj check",
            after: "botgate --project-dir . check",
        },
    }
}

fn explain_internal_error() -> Explanation {
    Explanation {
        title: "Internal Error",
        description: "\
Validation stopped on a condition botgate did not anticipate. The message
carries the underlying detail; the project itself may be fine.",
        remediation: "\
Re-run with `-vv` to capture debug logs and report the message together with
the manifest shape (without secrets) that triggered it.",
        examples: ExamplePair {
            syntax: "text",
            before: "botgate check",
            after: "botgate -vv check",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_rule_and_code_has_an_explanation() {
        for id in all_rule_ids().iter().chain(all_codes()) {
            assert!(lookup_explanation(id).is_some(), "missing explanation for {id}");
        }
    }

    #[test]
    fn every_identifier_in_ids_is_listed() {
        let listed: Vec<&str> = all_rule_ids().iter().chain(all_codes()).copied().collect();
        let declared: Vec<&str> = include_str!("ids.rs")
            .lines()
            .filter(|line| line.starts_with("pub const "))
            .filter_map(|line| line.split('"').nth(1))
            .collect();

        assert!(!declared.is_empty());
        for id in declared {
            assert!(listed.contains(&id), "{id} is declared in ids.rs but not listed");
        }
    }

    #[test]
    fn runtime_codes_are_explained() {
        let exp = lookup_explanation(ids::CODE_FOLDER_UNREADABLE).expect("folder_unreadable");
        assert_eq!(exp.title, "Project Folder Unreadable");
        assert!(lookup_explanation(ids::RULE_TOOL_RUNTIME).is_some());
        assert!(lookup_explanation(ids::CODE_INTERNAL_ERROR).is_some());
    }

    #[test]
    fn unknown_identifier_is_none() {
        assert!(lookup_explanation("deps.no_wildcards").is_none());
    }
}

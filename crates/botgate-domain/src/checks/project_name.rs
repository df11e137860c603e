use crate::report::RuleFailure;
use crate::source::LoadError;
use botgate_types::{FailureKind, ids};
use serde_json::json;

pub fn run(project_file: Result<Option<String>, LoadError>) -> Result<(), RuleFailure> {
    let file_name = match project_file {
        Ok(Some(name)) => name,
        Ok(None) => {
            return Err(RuleFailure::new(
                ids::RULE_PROJECT_NAME_NO_SPACES,
                ids::CODE_PROJECT_FILE_MISSING,
                FailureKind::Environment,
                "No identifying project file found in the project folder.",
            )
            .with_help("Run the gate against the folder that contains the project file."));
        }
        Err(err) => {
            return Err(RuleFailure::new(
                ids::RULE_PROJECT_NAME_NO_SPACES,
                ids::CODE_FOLDER_UNREADABLE,
                FailureKind::Environment,
                err.to_string(),
            ));
        }
    };

    if file_name.chars().any(char::is_whitespace) {
        return Err(RuleFailure::new(
            ids::RULE_PROJECT_NAME_NO_SPACES,
            ids::CODE_PROJECT_NAME_HAS_SPACES,
            FailureKind::PolicyViolation,
            format!("The project file name '{file_name}' must not contain whitespace."),
        )
        .with_help("Rename the project file so its name contains no whitespace.")
        .with_data(json!({ "project_file": file_name })));
    }

    Ok(())
}

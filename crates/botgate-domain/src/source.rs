use crate::model::ProjectManifest;
use thiserror::Error;

/// Errors raised while reading a project folder or its manifest.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("project folder does not exist: {folder}")]
    FolderMissing { folder: String },

    #[error("no file matching '{pattern}' found in {folder}")]
    NotFound { folder: String, pattern: String },

    #[error("multiple files matching '{pattern}' found in {folder}: {}", candidates.join(", "))]
    Ambiguous {
        folder: String,
        pattern: String,
        candidates: Vec<String>,
    },

    #[error("manifest {path} is malformed: {reason}")]
    Malformed { path: String, reason: String },

    #[error("failed to read {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Read-only view of a project folder, as seen by the engine.
///
/// The engine never touches the filesystem itself; `botgate-repo` provides the
/// on-disk implementation.
pub trait ProjectSource {
    /// File name (not path) of the project's identifying file, if one exists.
    fn project_file_name(&self) -> Result<Option<String>, LoadError>;

    /// Load and parse the project manifest.
    fn load_manifest(&self) -> Result<ProjectManifest, LoadError>;
}

//! Repository adapters: list project folders, read and parse bot manifests.
//!
//! This crate is allowed to do filesystem IO. It never writes, and it never
//! looks below the top level of the project folder.

#![forbid(unsafe_code)]

mod listing;
mod parse;
mod secret;

use botgate_domain::{LoadError, ProjectManifest, ProjectSource};
use camino::{Utf8Path, Utf8PathBuf};
use tracing::{debug, trace};

pub use listing::list_top_level;
pub use secret::{SecretError, SecretKey};

/// Fuzz-friendly API for testing parsing robustness without filesystem access.
/// These functions are designed to never panic on any input.
pub mod fuzz {
    /// Parse arbitrary text as a bot manifest.
    ///
    /// Returns `Ok(())` on text that parses as a manifest, `Err(...)` otherwise.
    /// **Never panics** on any input.
    pub fn parse_manifest(text: &str) -> Result<(), serde_json::Error> {
        let _ = super::parse::parse_manifest(text)?;
        Ok(())
    }
}

/// Load the single manifest matching `pattern` at the top level of `folder`.
///
/// Fails with [`LoadError::NotFound`] when nothing matches,
/// [`LoadError::Ambiguous`] when more than one file matches, and
/// [`LoadError::Malformed`] when the content is not a manifest, or is
/// encrypted and `secret` is missing or does not unlock the `padlock`.
///
/// Subscription keys of an encrypted manifest are returned decrypted.
pub fn load_manifest(
    folder: &Utf8Path,
    pattern: &str,
    secret: Option<&str>,
) -> Result<ProjectManifest, LoadError> {
    let candidates = list_top_level(folder, pattern)?;
    let path = match candidates.as_slice() {
        [] => {
            return Err(LoadError::NotFound {
                folder: folder.to_string(),
                pattern: pattern.to_string(),
            });
        }
        [single] => single,
        many => {
            return Err(LoadError::Ambiguous {
                folder: folder.to_string(),
                pattern: pattern.to_string(),
                candidates: many
                    .iter()
                    .filter_map(|p| p.file_name().map(str::to_string))
                    .collect(),
            });
        }
    };

    debug!(%path, "loading manifest");
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_string(),
        source,
    })?;

    let mut manifest = parse::parse_manifest(&text).map_err(|err| LoadError::Malformed {
        path: path.to_string(),
        reason: err.to_string(),
    })?;

    if manifest.is_encrypted() {
        unlock(&mut manifest, secret).map_err(|reason| LoadError::Malformed {
            path: path.to_string(),
            reason,
        })?;
    }

    trace!(services = manifest.services.len(), "manifest parsed");
    Ok(manifest)
}

fn unlock(manifest: &mut ProjectManifest, secret: Option<&str>) -> Result<(), String> {
    let secret = secret
        .filter(|s| !s.trim().is_empty())
        .ok_or_else(|| "manifest is encrypted; a secret is required".to_string())?;
    let key = SecretKey::parse(secret).map_err(|err| err.to_string())?;

    let padlock = manifest.padlock.as_deref().unwrap_or_default().trim();
    key.decrypt(padlock)
        .map_err(|_| "secret does not unlock the manifest padlock".to_string())?;

    for service in &mut manifest.services {
        if let Some(value) = service.subscription_key.as_mut()
            && !value.is_empty()
        {
            *value = key.decrypt(value).map_err(|err| {
                format!("subscription key of service '{}': {err}", service.name)
            })?;
        }
    }
    debug!("manifest unlocked");
    Ok(())
}

/// A project folder on disk, as seen by the engine.
#[derive(Clone, Debug)]
pub struct FolderSource {
    root: Utf8PathBuf,
    project_file_glob: String,
    manifest_glob: String,
    secret: Option<String>,
}

impl FolderSource {
    pub fn new(root: impl Into<Utf8PathBuf>) -> Self {
        Self {
            root: root.into(),
            project_file_glob: "*.csproj".to_string(),
            manifest_glob: "*.bot".to_string(),
            secret: None,
        }
    }

    pub fn with_globs(mut self, project_file_glob: &str, manifest_glob: &str) -> Self {
        self.project_file_glob = project_file_glob.to_string();
        self.manifest_glob = manifest_glob.to_string();
        self
    }

    pub fn with_secret(mut self, secret: Option<String>) -> Self {
        self.secret = secret;
        self
    }

    pub fn root(&self) -> &Utf8Path {
        &self.root
    }
}

impl ProjectSource for FolderSource {
    fn project_file_name(&self) -> Result<Option<String>, LoadError> {
        let files = list_top_level(&self.root, &self.project_file_glob)?;
        Ok(files
            .first()
            .and_then(|p| p.file_name())
            .map(str::to_string))
    }

    fn load_manifest(&self) -> Result<ProjectManifest, LoadError> {
        load_manifest(&self.root, &self.manifest_glob, self.secret.as_deref())
    }
}

//! The `inspect` use case: load the manifest and summarize it.

use std::collections::BTreeMap;

use botgate_domain::{LoadError, ProjectManifest};
use camino::Utf8Path;

pub fn run_inspect(
    folder: &Utf8Path,
    manifest_glob: &str,
    secret: Option<&str>,
) -> Result<ProjectManifest, LoadError> {
    botgate_repo::load_manifest(folder, manifest_glob, secret)
}

/// `name - description`, then one `  {type}: {count}` line per service type.
pub fn format_inspect(manifest: &ProjectManifest) -> String {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for service in &manifest.services {
        *counts.entry(service.service_type.as_str()).or_default() += 1;
    }

    let mut out = format!("{} - {}\n", manifest.name, manifest.description);
    for (kind, count) in counts {
        out.push_str(&format!("  {kind}: {count}\n"));
    }
    out
}

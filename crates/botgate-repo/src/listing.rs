use botgate_domain::LoadError;
use camino::{Utf8Path, Utf8PathBuf};
use globset::{GlobBuilder, GlobMatcher};
use std::path::PathBuf;
use walkdir::WalkDir;

/// List files directly inside `folder` whose file name matches `pattern`.
///
/// Behavior:
/// - top level only, subdirectories are never searched
/// - matching is case-insensitive (project tooling treats `*.bot` and `*.BOT` alike)
/// - non-UTF-8 file names are skipped
/// - results are sorted by file name
pub fn list_top_level(folder: &Utf8Path, pattern: &str) -> Result<Vec<Utf8PathBuf>, LoadError> {
    if !folder.is_dir() {
        return Err(LoadError::FolderMissing {
            folder: folder.to_string(),
        });
    }

    let matcher = compile(pattern).map_err(|err| LoadError::Malformed {
        path: folder.to_string(),
        reason: format!("invalid file pattern '{pattern}': {err}"),
    })?;

    let mut out = Vec::new();
    for entry in WalkDir::new(folder)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
    {
        let entry = entry.map_err(|err| LoadError::Io {
            path: folder.to_string(),
            source: std::io::Error::other(err),
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        let Some(path) = pathbuf_to_utf8(entry.path().to_path_buf()) else {
            continue;
        };
        let matched = path.file_name().map(|n| matcher.is_match(n)).unwrap_or(false);
        if matched {
            out.push(path);
        }
    }

    // Stable order.
    out.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(out)
}

fn compile(pattern: &str) -> Result<GlobMatcher, globset::Error> {
    Ok(GlobBuilder::new(pattern)
        .case_insensitive(true)
        .literal_separator(true)
        .build()?
        .compile_matcher())
}

fn pathbuf_to_utf8(path: PathBuf) -> Option<Utf8PathBuf> {
    Utf8PathBuf::from_path_buf(path).ok()
}

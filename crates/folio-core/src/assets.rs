//! Logo asset discovery.
//!
//! Lists a directory the way a build-time glob such as `logos/*.svg` would and
//! hands back [`AssetRef`]s for [`build_catalog`](crate::catalog::build_catalog).
//! Discovery is the only part of catalog building that touches the filesystem.

use crate::catalog::AssetRef;
use crate::normalize::file_name;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum DiscoverError {
    #[error("cannot read logo directory {}", .path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot read entry in logo directory {}", .path.display())]
    Entry {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Lists regular files in `dir` whose extension matches `extension`
/// (ASCII case-insensitive, without the dot), sorted by path.
///
/// Each file's reference is `<url_prefix>/<file name>`. Subdirectories are not
/// descended into.
pub fn discover(
    dir: &Path,
    extension: &str,
    url_prefix: &str,
) -> Result<Vec<AssetRef>, DiscoverError> {
    let entries = fs::read_dir(dir).map_err(|source| DiscoverError::ReadDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let wanted = extension.trim_start_matches('.');
    let mut paths = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| DiscoverError::Entry {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let matches = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case(wanted));
        if matches {
            paths.push(path);
        }
    }
    paths.sort();

    let prefix = url_prefix.trim_end_matches('/');
    let assets: Vec<AssetRef> = paths
        .iter()
        .map(|path| {
            let path = path.to_string_lossy();
            let url = format!("{}/{}", prefix, file_name(&path));
            AssetRef::new(path.into_owned(), url)
        })
        .collect();

    tracing::debug!(
        "discovered {} .{} assets in {}",
        assets.len(),
        wanted,
        dir.display()
    );
    Ok(assets)
}

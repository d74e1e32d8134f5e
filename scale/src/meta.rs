//! Path resolution and classification.

use std::path::{Path, PathBuf};

use tokio::fs;

use crate::acl::EntryKind;
use crate::error::{Error, Result};

/// Resolved absolute path plus the object type behind it.
#[derive(Debug, Clone)]
pub struct PathInfo {
    pub path: PathBuf,
    pub kind: EntryKind,
}

/// Absolutize and stat a path. A path that cannot be stat'd is the typed
/// [`Error::PathNotFound`], never a swallowed generic failure.
pub async fn classify(path: impl AsRef<Path>) -> Result<PathInfo> {
    let fqpn = absolutize(path.as_ref())?;

    let meta = match fs::metadata(&fqpn).await {
        Ok(meta) => meta,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(Error::PathNotFound { path: fqpn });
        }
        Err(e) => return Err(e.into()),
    };

    let kind = if meta.is_dir() {
        EntryKind::Directory
    } else if meta.is_file() {
        EntryKind::File
    } else {
        EntryKind::Unknown
    };

    Ok(PathInfo { path: fqpn, kind })
}

/// Absolute form of `path` against the current directory, without resolving
/// symlinks.
pub fn absolutize(path: &Path) -> Result<PathBuf> {
    Ok(std::path::absolute(path)?)
}

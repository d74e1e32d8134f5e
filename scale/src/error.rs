use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Path not found: {path}")]
    PathNotFound { path: PathBuf },

    #[error("{program} exited with code {code}: {stderr}")]
    CommandFailed {
        program: String,
        code: i32,
        stderr: String,
    },

    #[error("{path}: not managed by this filesystem")]
    NotManaged { path: PathBuf },

    #[error("Unrecognized ACL line: {line:?}")]
    MalformedAcl { line: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

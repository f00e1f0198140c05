use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// First failure of an install or uninstall invocation. Nothing here is
/// retried; the invoking package manager decides whether to rerun the whole
/// operation.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("could not find url matching this platform and architecture")]
    UnresolvedUrl,

    #[error(transparent)]
    Platform(#[from] binhaul_platform::Error),

    #[error(transparent)]
    Fetch(#[from] binhaul_fetch::Error),

    #[error(transparent)]
    Archive(#[from] binhaul_archive::Error),

    #[error("unpack stage aborted: {0}")]
    UnpackAborted(#[from] tokio::task::JoinError),

    #[error("downloaded artifact does not contain the configured binary: {0}")]
    MissingBinary(String),

    #[error("could not determine the binary installation directory")]
    InstallDirNotFound,

    #[error("failed to create directory {path}: {source}")]
    CreateDir { path: PathBuf, source: std::io::Error },

    #[error("failed to place binary at {path}: {source}")]
    Place { path: PathBuf, source: std::io::Error },
}

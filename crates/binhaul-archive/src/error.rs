use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to unpack archive: {0}")]
    Unpack(#[source] io::Error),

    #[error("invalid zip archive: {0}")]
    Zip(#[source] zip::result::ZipError),

    #[error("archive entry escapes extraction directory: {0}")]
    EntryEscapes(PathBuf),

    #[error("failed to spool archive to disk: {0}")]
    Spool(#[source] io::Error),

    #[error("failed to write entry '{path}': {source}")]
    WriteEntry { path: PathBuf, source: io::Error },
}

pub type Result<T> = std::result::Result<T, Error>;

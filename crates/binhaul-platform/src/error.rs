use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("installation is not supported for this architecture: {0}")]
    UnsupportedArch(String),

    #[error("installation is not supported for this platform: {0}")]
    UnsupportedOs(String),

    #[error("command failed: {cmd}, source: {source}")]
    CommandFailed { cmd: String, source: std::io::Error },
}

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("error downloading from {url}: {source}")]
    Request { url: String, source: reqwest::Error },

    #[error("error downloading binary, HTTP status code: {status}")]
    Status { status: u16 },

    #[error("failed to write {path}: {source}")]
    Write { path: PathBuf, source: std::io::Error },
}

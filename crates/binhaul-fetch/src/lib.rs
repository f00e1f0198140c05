//! Streaming HTTP transfer.
//!
//! One GET per install: [`fetch`] gates on HTTP 200 and hands back a
//! [`Download`], which either streams straight into a destination file or
//! bridges into a blocking reader for the unpack stages.

pub use download::{fetch, Download};
pub use error::{Error, Result};
pub use stream::ChunkReader;

mod download;
mod error;
mod stream;
mod tracker;

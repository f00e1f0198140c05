//! Transfer formats and archive unpacking.
//!
//! - `format` - suffix-based transfer format selection
//! - `extract` - tar.gz and zip unpack stages targeting a staging directory

pub use error::{Error, Result};
pub use format::TransferFormat;

mod error;
pub mod extract;
pub mod format;

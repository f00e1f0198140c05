//! Transfer format selection.

/// How a downloaded artifact becomes files on disk.
///
/// Selected from the resolved URL suffix alone. Adding a format means adding
/// a variant here plus one arm in the transfer dispatch; callers stay
/// untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransferFormat {
    /// Plain executable, written into the staging directory as-is.
    Binary,
    /// Gzip-compressed tarball, unpacked into the staging directory.
    TarGz,
    /// Zip archive, unpacked into the staging directory.
    Zip,
}

impl TransferFormat {
    /// Select the format for a resolved download URL.
    pub fn from_url(url: &str) -> Self {
        let lower = url.to_ascii_lowercase();
        if lower.ends_with(".tar.gz") {
            Self::TarGz
        } else if lower.ends_with(".zip") {
            Self::Zip
        } else {
            Self::Binary
        }
    }
}

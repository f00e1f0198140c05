//! Unpack stages for compressed artifacts.
//!
//! Both stages consume a blocking reader and write into a staging directory.
//! Backpressure is the reader's concern: these functions pull bytes only as
//! fast as the disk accepts them.

use std::fs::{self, File};
use std::io::{self, Read, Seek, SeekFrom};
use std::path::Path;

use crate::error::{Error, Result};

/// Unpack a gzip-compressed tarball into `dest`.
///
/// Returns only once the tar stage has seen end-of-archive; the end of the
/// compressed stream alone is not completion. A fault in decompression or in
/// entry unpacking surfaces as that stage's underlying error.
pub fn untar_gz<R: Read>(reader: R, dest: &Path) -> Result<()> {
    let gunzip = flate2::read::GzDecoder::new(reader);
    let mut archive = tar::Archive::new(gunzip);
    archive.set_preserve_permissions(true);
    archive.unpack(dest).map_err(Error::Unpack)
}

/// Unpack a zip archive into `dest`.
///
/// Zip needs random access to the central directory, so the stream is first
/// spooled into an unnamed temporary file. Entries are then written out with
/// their recorded unix modes; entries resolving outside `dest` are rejected.
pub fn unzip<R: Read>(mut reader: R, dest: &Path) -> Result<()> {
    let mut spool = tempfile::tempfile().map_err(Error::Spool)?;
    io::copy(&mut reader, &mut spool).map_err(Error::Spool)?;
    spool.seek(SeekFrom::Start(0)).map_err(Error::Spool)?;

    let mut archive = zip::ZipArchive::new(spool).map_err(Error::Zip)?;

    for index in 0..archive.len() {
        let mut entry = archive.by_index(index).map_err(Error::Zip)?;
        let Some(relative) = entry.enclosed_name() else {
            return Err(Error::EntryEscapes(entry.mangled_name()));
        };
        let target = dest.join(relative);

        if entry.is_dir() {
            fs::create_dir_all(&target).map_err(|source| Error::WriteEntry {
                path: target.clone(),
                source,
            })?;
            continue;
        }

        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).map_err(|source| Error::WriteEntry {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let mut out = File::create(&target).map_err(|source| Error::WriteEntry {
            path: target.clone(),
            source,
        })?;
        io::copy(&mut entry, &mut out).map_err(|source| Error::WriteEntry {
            path: target.clone(),
            source,
        })?;

        #[cfg(unix)]
        if let Some(mode) = entry.unix_mode() {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&target, fs::Permissions::from_mode(mode)).map_err(|source| {
                Error::WriteEntry {
                    path: target.clone(),
                    source,
                }
            })?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn untar_gz_rejects_garbage_input() {
        let temp = tempfile::tempdir().unwrap();
        let result = untar_gz(&b"not a gzip stream"[..], temp.path());
        assert!(matches!(result, Err(Error::Unpack(_))));
    }

    #[test]
    fn unzip_rejects_garbage_input() {
        let temp = tempfile::tempdir().unwrap();
        let result = unzip(&b"not a zip archive"[..], temp.path());
        assert!(matches!(result, Err(Error::Zip(_))));
    }
}

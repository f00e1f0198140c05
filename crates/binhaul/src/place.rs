//! Post-transfer verification and placement.

use std::path::Path;

use binhaul_platform::Host;
use tracing::info;

use crate::error::{Error, Result};
use crate::install_dir;

/// Confirm the transfer produced the configured binary, then move it into
/// the installation directory and mark it executable. The staging directory
/// is ephemeral: a failure part-way leaves no state worth repairing, since
/// rerunning the whole install is always safe.
pub async fn verify_and_place(bin_name: &str, staging_dir: &Path, host: &Host) -> Result<()> {
    let staged = staging_dir.join(bin_name);
    if !staged.exists() {
        return Err(Error::MissingBinary(bin_name.to_string()));
    }

    let install_dir = install_dir::resolve(host).await?;
    place(&staged, &install_dir.join(bin_name)).await
}

async fn place(staged: &Path, target: &Path) -> Result<()> {
    tokio::fs::rename(staged, target)
        .await
        .map_err(|source| Error::Place {
            path: target.to_path_buf(),
            source,
        })?;

    make_executable(target).await?;

    info!("placed binary at {}", target.display());
    Ok(())
}

#[cfg(unix)]
async fn make_executable(path: &Path) -> Result<()> {
    use std::fs::Permissions;
    use std::os::unix::fs::PermissionsExt;

    tokio::fs::set_permissions(path, Permissions::from_mode(0o755))
        .await
        .map_err(|source| Error::Place {
            path: path.to_path_buf(),
            source,
        })
}

#[cfg(not(unix))]
async fn make_executable(_path: &Path) -> Result<()> {
    Ok(())
}

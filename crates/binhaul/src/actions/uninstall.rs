//! The uninstall pipeline.

use std::path::Path;

use binhaul_platform::Host;
use tracing::{debug, info};

use crate::error::Result;
use crate::install_dir;
use crate::manifest::Manifest;

/// Remove the installed binary. Manifest and path-resolution failures
/// abort; the removal itself never does.
pub async fn uninstall(host: &Host, manifest_dir: &Path) -> Result<()> {
    let manifest = Manifest::load(manifest_dir)?;
    let bin_name = format!("{}{}", manifest.binary.name, host.os.exe_suffix());

    let install_dir = install_dir::resolve(host).await?;
    remove_installed(&install_dir.join(&bin_name)).await;

    Ok(())
}

/// Idempotent delete: the file being absent already, or unremovable, both
/// leave the uninstall successful, so repeated uninstalls converge.
async fn remove_installed(target: &Path) {
    match tokio::fs::remove_file(target).await {
        Ok(()) => info!("removed {}", target.display()),
        Err(err) => debug!("ignoring removal failure for {}: {err}", target.display()),
    }
}

//! The install pipeline.

use std::path::Path;

use binhaul_archive::{extract, TransferFormat};
use binhaul_platform::Host;
use tokio::task;
use tracing::debug;

use crate::error::{Error, Result};
use crate::manifest::Manifest;
use crate::place;
use crate::resolve::Descriptor;

/// Resolve the configured artifact for `host`, stream it into the staging
/// directory through the format's unpack stage, and place the verified
/// binary on the bin path. The first failure wins; nothing is retried.
pub async fn install(host: &Host, manifest_dir: &Path) -> Result<()> {
    let manifest = Manifest::load(manifest_dir)?;
    let descriptor = Descriptor::resolve(&manifest, host)?;

    let staging_dir = manifest_dir.join(&descriptor.staging_dir);
    tokio::fs::create_dir_all(&staging_dir)
        .await
        .map_err(|source| Error::CreateDir {
            path: staging_dir.clone(),
            source,
        })?;

    let download = binhaul_fetch::fetch(&descriptor.url).await?;

    let format = TransferFormat::from_url(&descriptor.url);
    debug!("transfer format: {format:?}");

    match format {
        TransferFormat::Binary => {
            download.save_to(&staging_dir.join(&descriptor.bin_name)).await?;
        }
        TransferFormat::TarGz => {
            let reader = download.into_reader();
            let dest = staging_dir.clone();
            task::spawn_blocking(move || extract::untar_gz(reader, &dest)).await??;
        }
        TransferFormat::Zip => {
            let reader = download.into_reader();
            let dest = staging_dir.clone();
            task::spawn_blocking(move || extract::unzip(reader, &dest)).await??;
        }
    }

    place::verify_and_place(&descriptor.bin_name, &staging_dir, host).await
}

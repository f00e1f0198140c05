//! Artifact resolution: vendor identifiers, URL selection and template
//! interpolation.

use std::path::PathBuf;

use binhaul_platform::Host;

use crate::error::{Error, Result};
use crate::manifest::{Manifest, OsUrl, UrlSpec};

const DEFAULT_KEY: &str = "default";

/// Fully resolved artifact: final binary name, staging directory, and a
/// download URL with every placeholder substituted. Built once per
/// invocation, before any network traffic, and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Descriptor {
    pub bin_name: String,
    pub staging_dir: PathBuf,
    pub url: String,
    pub version: String,
}

impl Descriptor {
    pub fn resolve(manifest: &Manifest, host: &Host) -> Result<Self> {
        let arch = host.arch.vendor_id()?;
        let os = host.os.vendor_id()?;

        let url = select_url(&manifest.binary.url, os, arch)?;

        // One leading 'v' strips; 'vv1' keeps the second.
        let version = manifest
            .version
            .strip_prefix('v')
            .unwrap_or(&manifest.version);

        let suffix = host.os.exe_suffix();
        let bin_name = format!("{}{}", manifest.binary.name, suffix);

        let url = url
            .replace("{{arch}}", arch)
            .replace("{{platform}}", os)
            .replace("{{version}}", version)
            .replace("{{bin_name}}", &bin_name)
            .replace("{{win_ext}}", suffix);

        Ok(Self {
            bin_name,
            staging_dir: manifest.binary.path.clone(),
            url,
            version: version.to_string(),
        })
    }
}

/// Two-level URL selection: OS identifier first, then architecture, each
/// level falling back to the `default` entry. A level with neither the
/// host's key nor `default` is a configuration error.
fn select_url<'a>(spec: &'a UrlSpec, os: &str, arch: &str) -> Result<&'a str> {
    let by_os = match spec {
        UrlSpec::Literal(url) => return Ok(url),
        UrlSpec::ByOs(map) => map,
    };

    let entry = by_os
        .get(os)
        .or_else(|| by_os.get(DEFAULT_KEY))
        .ok_or(Error::UnresolvedUrl)?;

    let by_arch = match entry {
        OsUrl::Literal(url) => return Ok(url),
        OsUrl::ByArch(map) => map,
    };

    by_arch
        .get(arch)
        .or_else(|| by_arch.get(DEFAULT_KEY))
        .map(String::as_str)
        .ok_or(Error::UnresolvedUrl)
}

//! Package manifest loading.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};

pub const MANIFEST_FILE: &str = "package.json";

/// Declarative description of the artifact to install: package version plus
/// the binary block naming the executable, its staging directory and the
/// download URL.
#[derive(Debug, Clone, Deserialize)]
pub struct Manifest {
    pub version: String,
    pub binary: BinarySpec,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BinarySpec {
    pub name: String,
    pub path: PathBuf,
    pub url: UrlSpec,
}

/// Download URL: a literal, or keyed by OS identifier with a `default`
/// fallback, each OS entry either a literal or keyed by architecture with
/// its own `default`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum UrlSpec {
    Literal(String),
    ByOs(BTreeMap<String, OsUrl>),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum OsUrl {
    Literal(String),
    ByArch(BTreeMap<String, String>),
}

impl Manifest {
    /// Load and validate `package.json` from `dir`. Every failure mode
    /// (missing file, malformed JSON, absent or empty fields) is one
    /// invalid-configuration condition.
    pub fn load(dir: &Path) -> Result<Self> {
        let path = dir.join(MANIFEST_FILE);
        let raw = std::fs::read_to_string(&path)
            .map_err(|err| Error::Config(format!("unable to read {}: {err}", path.display())))?;

        let manifest: Manifest = serde_json::from_str(&raw)
            .map_err(|err| Error::Config(format!("invalid {MANIFEST_FILE}: {err}")))?;

        manifest.validate()?;
        Ok(manifest)
    }

    fn validate(&self) -> Result<()> {
        if self.version.is_empty() {
            return Err(Error::Config("'version' property must be specified".into()));
        }
        if self.binary.name.is_empty() {
            return Err(Error::Config("'name' property is necessary".into()));
        }
        if self.binary.path.as_os_str().is_empty() {
            return Err(Error::Config("'path' property is necessary".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(raw: &str) -> Result<Manifest> {
        let manifest: Manifest = serde_json::from_str(raw)
            .map_err(|err| Error::Config(format!("invalid {MANIFEST_FILE}: {err}")))?;
        manifest.validate()?;
        Ok(manifest)
    }

    #[test]
    fn literal_url_parses() {
        let manifest = parse(
            r#"{"version": "1.0.0", "binary": {"name": "tool", "path": "./bin", "url": "http://x/tool"}}"#,
        )
        .unwrap();
        assert!(matches!(manifest.binary.url, UrlSpec::Literal(ref url) if url == "http://x/tool"));
    }

    #[test]
    fn nested_url_spec_parses() {
        let manifest = parse(
            r#"{
                "version": "1.0.0",
                "binary": {
                    "name": "tool",
                    "path": "./bin",
                    "url": {
                        "default": "d",
                        "windows": "w",
                        "darwin": {"default": "m", "386": "m32"}
                    }
                }
            }"#,
        )
        .unwrap();

        let UrlSpec::ByOs(by_os) = manifest.binary.url else {
            panic!("expected an OS-keyed url spec");
        };
        assert!(matches!(by_os.get("windows"), Some(OsUrl::Literal(_))));
        assert!(matches!(by_os.get("darwin"), Some(OsUrl::ByArch(_))));
    }

    #[test]
    fn missing_version_is_invalid_configuration() {
        let result = parse(r#"{"binary": {"name": "t", "path": "p", "url": "u"}}"#);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn empty_version_is_invalid_configuration() {
        let result =
            parse(r#"{"version": "", "binary": {"name": "t", "path": "p", "url": "u"}}"#);
        assert!(matches!(result, Err(Error::Config(ref msg)) if msg.contains("version")));
    }

    #[test]
    fn missing_binary_block_is_invalid_configuration() {
        let result = parse(r#"{"version": "1.0.0"}"#);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn empty_name_is_invalid_configuration() {
        let result =
            parse(r#"{"version": "1.0.0", "binary": {"name": "", "path": "p", "url": "u"}}"#);
        assert!(matches!(result, Err(Error::Config(ref msg)) if msg.contains("name")));
    }

    #[test]
    fn load_reports_missing_manifest_as_invalid_configuration() {
        let temp = tempfile::tempdir().unwrap();
        let result = Manifest::load(temp.path());
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn load_reads_manifest_from_directory() {
        let temp = tempfile::tempdir().unwrap();
        std::fs::write(
            temp.path().join(MANIFEST_FILE),
            r#"{"version": "v1.2.3", "binary": {"name": "tool", "path": "./stage", "url": "http://x/tool"}}"#,
        )
        .unwrap();

        let manifest = Manifest::load(temp.path()).unwrap();
        assert_eq!(manifest.version, "v1.2.3");
        assert_eq!(manifest.binary.name, "tool");
    }
}

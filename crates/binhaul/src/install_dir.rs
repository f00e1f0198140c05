//! Installation directory resolution.

use std::path::PathBuf;

use binhaul_platform::command::Command;
use binhaul_platform::Host;
use tracing::debug;

use crate::error::{Error, Result};

/// Environment value naming the package manager's installation prefix.
/// Set by the manager when it runs lifecycle scripts.
const PREFIX_VAR: &str = "npm_config_prefix";

/// Resolve the directory executables must land in.
///
/// Primary strategy: ask the package manager (`npm bin`). Fallback: the
/// `bin` directory under the manager's installation prefix. The chosen
/// directory is created before being returned. Resolved per call, since the
/// manager configuration can change between invocations.
pub async fn resolve(host: &Host) -> Result<PathBuf> {
    let dir = decide(query_bin_dir().await, host.env_var(PREFIX_VAR))?;

    tokio::fs::create_dir_all(&dir)
        .await
        .map_err(|source| Error::CreateDir {
            path: dir.clone(),
            source,
        })?;

    Ok(dir)
}

/// Run `npm bin` and return trimmed stdout. Spawn failure, non-zero exit,
/// stderr output and empty stdout all make the query unusable.
async fn query_bin_dir() -> Option<String> {
    let output = match Command::new("npm").arg("bin").capture().await {
        Ok(output) => output,
        Err(err) => {
            debug!("bin directory query failed: {err}");
            return None;
        }
    };

    if !output.status.success() || !output.stderr.is_empty() {
        debug!("bin directory query unusable, falling back to prefix");
        return None;
    }

    let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
    (!stdout.is_empty()).then_some(stdout)
}

fn decide(query: Option<String>, prefix: Option<String>) -> Result<PathBuf> {
    if let Some(dir) = query {
        return Ok(PathBuf::from(dir));
    }

    match prefix {
        Some(prefix) => Ok(PathBuf::from(prefix).join("bin")),
        None => Err(Error::InstallDirNotFound),
    }
}

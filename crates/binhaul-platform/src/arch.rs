//! Architecture detection and vendor naming.

use crate::error::{Error, Result};

/// CPU architecture types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arch {
    X86,
    X86_64,
    Arm,
    Arm64,
    Unknown,
}

/// Detect the architecture the process is running on.
///
/// Runtime detection rather than compile-target: an emulated process must
/// download the binary for the machine it actually runs on.
pub fn detect() -> Arch {
    let cpu_arch = sysinfo::System::cpu_arch();

    match cpu_arch.as_str() {
        "i386" | "i686" => Arch::X86,
        "x86_64" => Arch::X86_64,
        "arm" | "armv7l" => Arch::Arm,
        "aarch64" | "arm64" => Arch::Arm64,
        _ => Arch::Unknown,
    }
}

impl Arch {
    /// Identifier the artifact vendor uses for this architecture in release
    /// URLs. Architectures without a published artifact are terminal.
    pub fn vendor_id(self) -> Result<&'static str> {
        match self {
            Arch::X86 => Ok("386"),
            Arch::X86_64 => Ok("amd64"),
            Arch::Arm => Ok("arm"),
            other => Err(Error::UnsupportedArch(format!("{other:?}"))),
        }
    }
}

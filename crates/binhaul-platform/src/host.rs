//! Host environment threaded through the resolvers.

use std::env;

use once_cell::sync::Lazy;

use crate::arch::{self, Arch};
use crate::os::{self, Os};

static DETECTED: Lazy<Host> = Lazy::new(|| Host {
    arch: arch::detect(),
    os: os::detect(),
});

/// Architecture and operating system of the machine an install targets,
/// passed explicitly so resolution logic never reads ambient process state
/// and stays constructible with arbitrary values in tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Host {
    pub arch: Arch,
    pub os: Os,
}

impl Host {
    pub fn new(arch: Arch, os: Os) -> Self {
        Self { arch, os }
    }

    /// Host the process is running on.
    pub fn detect() -> Self {
        *DETECTED
    }

    /// Environment lookup with empty values treated as unset.
    pub fn env_var(&self, key: &str) -> Option<String> {
        env::var(key)
            .ok()
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
    }
}

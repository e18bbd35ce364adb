//! Asset target mapping and download URL construction.
//!
//! Nightly binaries are published under a fixed naming convention:
//! `<product>-<ARCH>-<OS>[.exe]` attached to the `nightly` release.

mod site;

pub use site::{DEFAULT_DISPLAY_NAME, DEFAULT_HOST, DEFAULT_PRODUCT, NIGHTLY_TAG, ReleaseSite};

use std::fmt;

use crate::platform::{Arch, Os, PlatformGuess};

/// Operating system token used in asset file names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OsToken {
    Windows,
    Linux,
    MacOs,
}

impl OsToken {
    pub fn as_str(&self) -> &'static str {
        match self {
            OsToken::Windows => "Windows",
            OsToken::Linux => "Linux",
            OsToken::MacOs => "macOS",
        }
    }
}

impl fmt::Display for OsToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Architecture token used in asset file names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArchToken {
    X64,
    Arm64,
}

impl ArchToken {
    pub fn as_str(&self) -> &'static str {
        match self {
            ArchToken::X64 => "X64",
            ArchToken::Arm64 => "ARM64",
        }
    }
}

impl fmt::Display for ArchToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Arch> for ArchToken {
    fn from(arch: Arch) -> Self {
        match arch {
            Arch::X64 => ArchToken::X64,
            Arch::Arm64 => ArchToken::Arm64,
        }
    }
}

/// The asset to offer for download.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssetTarget {
    pub os: OsToken,
    pub arch: ArchToken,
}

impl AssetTarget {
    /// Target assumed when the operating system cannot be detected.
    pub const DEFAULT_FALLBACK: AssetTarget = AssetTarget {
        os: OsToken::Linux,
        arch: ArchToken::Arm64,
    };

    /// Map a guess to tokens. An unknown OS resolves to `fallback` as a whole,
    /// so the pair shown to the visitor always matches the file offered.
    pub fn from_guess(guess: &PlatformGuess, fallback: AssetTarget) -> Self {
        let os = match guess.os {
            Os::Windows => OsToken::Windows,
            Os::MacOs => OsToken::MacOs,
            Os::Linux => OsToken::Linux,
            Os::Unknown => return fallback,
        };
        AssetTarget {
            os,
            arch: guess.arch.into(),
        }
    }

    /// Executable suffix, only Windows binaries carry one.
    pub fn extension(&self) -> &'static str {
        match self.os {
            OsToken::Windows => ".exe",
            OsToken::Linux | OsToken::MacOs => "",
        }
    }

    pub fn file_name(&self, product: &str) -> String {
        format!("{}-{}-{}{}", product, self.arch, self.os, self.extension())
    }
}

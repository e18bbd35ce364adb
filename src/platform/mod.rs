//! Platform detection module
//!
//! This module classifies the visitor's operating system and CPU architecture
//! from the identification strings a browser exposes (user agent, platform,
//! and optional structured user-agent data).

mod detection;
mod environment;

pub use detection::{EnvironmentDetector, PlatformDetector, detect, detect_arch, detect_os};
pub use environment::{Environment, UaData};

#[cfg(test)]
pub use detection::MockPlatformDetector;

use std::fmt;

/// Operating system classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Os {
    Windows,
    MacOs,
    Linux,
    Unknown,
}

impl fmt::Display for Os {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Os::Windows => write!(f, "Windows"),
            Os::MacOs => write!(f, "macOS"),
            Os::Linux => write!(f, "Linux"),
            Os::Unknown => write!(f, "Unknown"),
        }
    }
}

/// CPU architecture classification. There is no unknown variant: detection
/// always settles on a concrete architecture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Arch {
    X64,
    Arm64,
}

impl fmt::Display for Arch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arch::X64 => write!(f, "X64"),
            Arch::Arm64 => write!(f, "ARM64"),
        }
    }
}

impl std::str::FromStr for Arch {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "x64" | "x86_64" | "amd64" => Ok(Arch::X64),
            "arm64" | "aarch64" => Ok(Arch::Arm64),
            _ => anyhow::bail!("Unknown architecture: {}. Expected X64 or ARM64.", s),
        }
    }
}

/// Best guess of the visitor's platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlatformGuess {
    pub os: Os,
    pub arch: Arch,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_os_display() {
        assert_eq!(Os::Windows.to_string(), "Windows");
        assert_eq!(Os::MacOs.to_string(), "macOS");
        assert_eq!(Os::Linux.to_string(), "Linux");
        assert_eq!(Os::Unknown.to_string(), "Unknown");
    }

    #[test]
    fn test_arch_display() {
        assert_eq!(Arch::X64.to_string(), "X64");
        assert_eq!(Arch::Arm64.to_string(), "ARM64");
    }

    #[test]
    fn test_arch_parse() {
        assert_eq!("ARM64".parse::<Arch>().unwrap(), Arch::Arm64);
        assert_eq!("aarch64".parse::<Arch>().unwrap(), Arch::Arm64);
        assert_eq!("x64".parse::<Arch>().unwrap(), Arch::X64);
        assert_eq!("x86_64".parse::<Arch>().unwrap(), Arch::X64);
        assert!("riscv64".parse::<Arch>().is_err());
    }
}

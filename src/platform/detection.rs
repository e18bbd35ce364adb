use log::debug;

use super::{Arch, Environment, Os, PlatformGuess};

const MAC_PLATFORM_MARKERS: &[&str] = &["macintosh", "macintel", "macppc", "mac68k", "mac os x", "macos"];
const ARM_MARKERS: &[&str] = &["arm", "aarch64", "arm64"];
const X64_MARKERS: &[&str] = &["x86_64", "x86-64", "win64", "wow64", "amd64", "x64"];

/// Trait for platform detection (useful for testing)
#[cfg_attr(test, mockall::automock)]
pub trait PlatformDetector: Send + Sync {
    fn detect(&self) -> PlatformGuess;
}

/// Detector over a fixed set of identification strings.
pub struct EnvironmentDetector {
    env: Environment,
}

impl EnvironmentDetector {
    pub fn new(env: Environment) -> Self {
        Self { env }
    }
}

impl PlatformDetector for EnvironmentDetector {
    fn detect(&self) -> PlatformGuess {
        detect(&self.env)
    }
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    let haystack = haystack.to_lowercase();
    needles.iter().any(|n| haystack.contains(n))
}

/// Classify the operating system. Windows, macOS and Linux markers are
/// checked in that order and the first match wins.
pub fn detect_os(env: &Environment) -> Os {
    let ua = env.user_agent.as_str();
    let platform = env.platform.as_str();

    if contains_any(ua, &["windows"]) || contains_any(platform, &["win"]) {
        Os::Windows
    } else if contains_any(platform, MAC_PLATFORM_MARKERS) || contains_any(ua, &["mac"]) {
        Os::MacOs
    } else if contains_any(platform, &["linux"]) || contains_any(ua, &["linux"]) {
        Os::Linux
    } else {
        Os::Unknown
    }
}

/// Classify the CPU architecture, preferring structured user-agent data over
/// the user agent string. Falls back to X64.
pub fn detect_arch(env: &Environment) -> Arch {
    let structured = env
        .ua_data
        .as_ref()
        .and_then(|data| data.architecture.as_deref())
        .filter(|arch| !arch.is_empty());

    if let Some(arch) = structured {
        debug!("Using structured architecture data: {}", arch);
        return if contains_any(arch, &["arm"]) {
            Arch::Arm64
        } else {
            Arch::X64
        };
    }

    if contains_any(&env.user_agent, ARM_MARKERS) {
        Arch::Arm64
    } else if contains_any(&env.user_agent, X64_MARKERS) {
        Arch::X64
    } else {
        debug!("No architecture marker in user agent, assuming X64");
        Arch::X64
    }
}

#[tracing::instrument(skip(env))]
pub fn detect(env: &Environment) -> PlatformGuess {
    let guess = PlatformGuess {
        os: detect_os(env),
        arch: detect_arch(env),
    };
    debug!("Detected platform {} / {}", guess.os, guess.arch);
    guess
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOWS_UA: &str =
        "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko)";
    const MAC_ARM_UA: &str = "Mozilla/5.0 (Macintosh; ARM Mac OS X 14_0) AppleWebKit/605.1.15";
    const MAC_UA: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15";
    const LINUX_UA: &str = "Mozilla/5.0 (X11; Linux x86_64; rv:120.0) Gecko/20100101 Firefox/120.0";
    const LINUX_ARM_UA: &str = "Mozilla/5.0 (X11; Linux aarch64; rv:120.0) Gecko/20100101";

    #[test]
    fn test_detect_windows() {
        let env = Environment::new(WINDOWS_UA, "Win32");
        assert_eq!(
            detect(&env),
            PlatformGuess {
                os: Os::Windows,
                arch: Arch::X64
            }
        );
    }

    #[test]
    fn test_detect_windows_from_platform_only() {
        let env = Environment::new("SomeBrowser/1.0", "Win32");
        assert_eq!(detect_os(&env), Os::Windows);
    }

    #[test]
    fn test_detect_mac_from_platform() {
        let env = Environment::new("SomeBrowser/1.0", "MacIntel");
        assert_eq!(detect_os(&env), Os::MacOs);
    }

    #[test]
    fn test_detect_mac_from_user_agent() {
        let env = Environment::new(MAC_UA, "");
        assert_eq!(detect_os(&env), Os::MacOs);
        assert_eq!(detect_arch(&env), Arch::X64);
    }

    #[test]
    fn test_detect_mac_arm() {
        let env = Environment::new(MAC_ARM_UA, "MacIntel");
        assert_eq!(
            detect(&env),
            PlatformGuess {
                os: Os::MacOs,
                arch: Arch::Arm64
            }
        );
    }

    #[test]
    fn test_detect_linux() {
        let env = Environment::new(LINUX_UA, "Linux x86_64");
        assert_eq!(
            detect(&env),
            PlatformGuess {
                os: Os::Linux,
                arch: Arch::X64
            }
        );
    }

    #[test]
    fn test_detect_linux_arm() {
        let env = Environment::new(LINUX_ARM_UA, "Linux aarch64");
        assert_eq!(detect_arch(&env), Arch::Arm64);
    }

    #[test]
    fn test_windows_checked_before_mac() {
        // A user agent mentioning both must classify as Windows
        let env = Environment::new("Windows; Macintosh", "");
        assert_eq!(detect_os(&env), Os::Windows);
    }

    #[test]
    fn test_mac_checked_before_linux() {
        let env = Environment::new("Linux", "MacIntel");
        assert_eq!(detect_os(&env), Os::MacOs);
    }

    #[test]
    fn test_detect_unknown_os() {
        let env = Environment::new("curl/8.0", "");
        assert_eq!(detect_os(&env), Os::Unknown);
    }

    #[test]
    fn test_arch_defaults_to_x64() {
        let env = Environment::new("curl/8.0", "");
        assert_eq!(detect_arch(&env), Arch::X64);
    }

    #[test]
    fn test_structured_data_takes_precedence() {
        // The user agent claims x64 but structured data says arm
        let env = Environment::new(WINDOWS_UA, "Win32").with_architecture("arm");
        assert_eq!(detect_arch(&env), Arch::Arm64);

        let env = Environment::new(LINUX_ARM_UA, "Linux").with_architecture("x86");
        assert_eq!(detect_arch(&env), Arch::X64);
    }

    #[test]
    fn test_empty_structured_data_falls_through() {
        let env = Environment::new(LINUX_ARM_UA, "Linux").with_architecture("");
        assert_eq!(detect_arch(&env), Arch::Arm64);
    }

    #[test]
    fn test_environment_detector() {
        let detector = EnvironmentDetector::new(Environment::new(WINDOWS_UA, "Win32"));
        assert_eq!(detector.detect().os, Os::Windows);
    }

    #[test]
    fn test_host_environment_is_classified() {
        let guess = detect(&Environment::from_host());

        #[cfg(target_os = "linux")]
        assert_eq!(guess.os, Os::Linux);

        #[cfg(target_os = "windows")]
        assert_eq!(guess.os, Os::Windows);

        #[cfg(target_os = "macos")]
        assert_eq!(guess.os, Os::MacOs);

        #[cfg(target_arch = "aarch64")]
        assert_eq!(guess.arch, Arch::Arm64);

        #[cfg(target_arch = "x86_64")]
        assert_eq!(guess.arch, Arch::X64);
    }
}

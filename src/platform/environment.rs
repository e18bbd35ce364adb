/// Structured user-agent data (the `navigator.userAgentData` equivalent).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UaData {
    pub architecture: Option<String>,
}

/// Identification strings provided by the visitor's browser.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Environment {
    pub user_agent: String,
    pub platform: String,
    pub ua_data: Option<UaData>,
}

impl Environment {
    pub fn new(user_agent: impl Into<String>, platform: impl Into<String>) -> Self {
        Self {
            user_agent: user_agent.into(),
            platform: platform.into(),
            ua_data: None,
        }
    }

    pub fn with_architecture(mut self, architecture: impl Into<String>) -> Self {
        self.ua_data = Some(UaData {
            architecture: Some(architecture.into()),
        });
        self
    }

    /// Synthesize the strings a browser on this host would report.
    pub fn from_host() -> Self {
        Self {
            user_agent: format!("Mozilla/5.0 ({}; {})", Self::host_os(), Self::host_arch()),
            platform: Self::host_platform().to_string(),
            ua_data: None,
        }
    }

    fn host_os() -> &'static str {
        #[cfg(target_os = "macos")]
        {
            "Macintosh; Mac OS X"
        }
        #[cfg(target_os = "linux")]
        {
            "X11; Linux"
        }
        #[cfg(target_os = "windows")]
        {
            "Windows NT 10.0"
        }
        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        {
            std::env::consts::OS
        }
    }

    fn host_arch() -> &'static str {
        #[cfg(target_arch = "x86_64")]
        {
            "x86_64"
        }
        #[cfg(target_arch = "aarch64")]
        {
            "aarch64"
        }
        #[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
        {
            std::env::consts::ARCH
        }
    }

    fn host_platform() -> &'static str {
        #[cfg(target_os = "macos")]
        {
            "MacIntel"
        }
        #[cfg(target_os = "linux")]
        {
            "Linux"
        }
        #[cfg(target_os = "windows")]
        {
            "Win32"
        }
        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        {
            ""
        }
    }
}

//! Environment variables and the system clock.

use chrono::{DateTime, Utc};
use std::env;

use super::RealRuntime;

impl RealRuntime {
    #[tracing::instrument(skip(self))]
    pub(crate) fn env_var_impl(&self, key: &str) -> Result<String, env::VarError> {
        env::var(key)
    }

    pub(crate) fn now_impl(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[cfg(test)]
mod tests {
    use crate::runtime::{RealRuntime, Runtime};
    use chrono::Utc;

    #[test]
    fn test_real_runtime_env_and_clock() {
        let runtime = RealRuntime;

        // PATH should exist on all systems
        assert!(runtime.env_var("PATH").is_ok());
        assert!(runtime.env_var("QUICKDL_SURELY_UNSET_VARIABLE").is_err());

        let before = Utc::now();
        let now = runtime.now();
        assert!(now >= before);
    }
}

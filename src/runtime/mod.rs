//! Runtime abstraction for system operations.
//!
//! This module provides a trait-based abstraction over the process
//! environment and the clock, enabling dependency injection and testability.
//!
//! # Structure
//!
//! - `env` - Environment variables and the current time

mod env;

use chrono::{DateTime, Utc};
use std::env as std_env;

#[cfg_attr(test, mockall::automock)]
pub trait Runtime: Send + Sync {
    // Environment
    fn env_var(&self, key: &str) -> Result<String, std_env::VarError>;

    // Clock
    fn now(&self) -> DateTime<Utc>;
}

pub struct RealRuntime;

impl Runtime for RealRuntime {
    fn env_var(&self, key: &str) -> Result<String, std_env::VarError> {
        self.env_var_impl(key)
    }

    fn now(&self) -> DateTime<Utc> {
        self.now_impl()
    }
}

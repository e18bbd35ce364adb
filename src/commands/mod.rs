use crate::platform::Environment;

pub mod config;
mod link;
mod page;
mod services;

pub use link::link;
pub use page::page;

/// Browser identification supplied on the command line. Strings that are
/// not given are synthesized from the host running the command.
#[derive(Debug, Clone, Default)]
pub struct ClientOptions {
    pub user_agent: Option<String>,
    pub platform: Option<String>,
    pub ua_arch: Option<String>,
}

impl ClientOptions {
    pub fn environment(self) -> Environment {
        let host = Environment::from_host();
        let mut env = Environment::new(
            self.user_agent.unwrap_or(host.user_agent),
            self.platform.unwrap_or(host.platform),
        );
        if let Some(arch) = self.ua_arch {
            env = env.with_architecture(arch);
        }
        env
    }
}

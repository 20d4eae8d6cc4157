#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::policy::StaticPolicy;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};

pub const DEFAULT_DENY_REASON: &str = "access revoked by operator";
pub const MAX_REPEAT: usize = 100;

/// Settings after the config file and command-line overrides are merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxySettings {
    pub allow: bool,
    pub reason: String,
    pub repeat: usize,
}

impl Default for ProxySettings {
    fn default() -> Self {
        Self {
            allow: true,
            reason: DEFAULT_DENY_REASON.to_string(),
            repeat: 1,
        }
    }
}

impl ProxySettings {
    pub fn policy(&self) -> StaticPolicy {
        StaticPolicy::new(self.allow, self.reason.clone())
    }
}

impl From<&toml_config::TomlConfig> for ProxySettings {
    fn from(config: &toml_config::TomlConfig) -> Self {
        let defaults = Self::default();
        Self {
            allow: config.access.allow,
            reason: config.access.reason.clone().unwrap_or(defaults.reason),
            repeat: config.repeat().unwrap_or(defaults.repeat),
        }
    }
}

impl Validate for ProxySettings {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("reason", &self.reason)?;
        validation::validate_range("repeat", self.repeat, 1, MAX_REPEAT)
    }
}

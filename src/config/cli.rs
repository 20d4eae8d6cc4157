use super::toml_config::TomlConfig;
use super::ProxySettings;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "access-proxy")]
#[command(about = "Demonstrates an access-controlled proxy in front of a subject")]
pub struct CliConfig {
    /// Path to an optional TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(long, help = "Allow every request, even if the config file denies")]
    pub allow: bool,

    #[arg(long, conflicts_with = "allow", help = "Deny every request")]
    pub deny: bool,

    #[arg(long, help = "Reason recorded when access is denied")]
    pub reason: Option<String>,

    #[arg(long, help = "Number of requests to send through the proxy")]
    pub repeat: Option<usize>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

impl CliConfig {
    /// 合併設定檔與命令列參數，命令列優先
    pub fn resolve(&self) -> Result<ProxySettings> {
        let mut settings = match &self.config {
            Some(path) => {
                let file = TomlConfig::from_file(path)?;
                file.validate()?;
                ProxySettings::from(&file)
            }
            None => ProxySettings::default(),
        };

        if self.allow {
            settings.allow = true;
        }
        if self.deny {
            settings.allow = false;
        }
        if let Some(reason) = &self.reason {
            settings.reason = reason.clone();
        }
        if let Some(repeat) = self.repeat {
            settings.repeat = repeat;
        }

        settings.validate()?;
        Ok(settings)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            validation::validate_path("config", path)?;
        }
        if let Some(reason) = &self.reason {
            validation::validate_non_empty_string("reason", reason)?;
        }
        if let Some(repeat) = self.repeat {
            validation::validate_range("repeat", repeat, 1, super::MAX_REPEAT)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = CliConfig::parse_from(["access-proxy"]);
        assert!(config.validate().is_ok());
        assert_eq!(config.log_format, LogFormat::Compact);
        assert_eq!(config.resolve().unwrap(), ProxySettings::default());
    }

    #[test]
    fn test_deny_flag_and_overrides() {
        let config = CliConfig::parse_from([
            "access-proxy",
            "--deny",
            "--reason",
            "locked",
            "--repeat",
            "2",
            "--log-format",
            "json",
        ]);
        let settings = config.resolve().unwrap();

        assert!(!settings.allow);
        assert_eq!(settings.reason, "locked");
        assert_eq!(settings.repeat, 2);
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn test_cli_overrides_config_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[access]\nallow = true\nreason = \"from file\"\n\n[client]\nrepeat = 4\n")
            .unwrap();
        let path = temp_file.path().to_str().unwrap().to_string();

        let config = CliConfig::parse_from(["access-proxy", "--config", path.as_str(), "--repeat", "1"]);
        let settings = config.resolve().unwrap();

        assert!(settings.allow);
        assert_eq!(settings.reason, "from file");
        assert_eq!(settings.repeat, 1);
    }

    #[test]
    fn test_allow_flag_overrides_denying_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"[access]\nallow = false\n").unwrap();
        let path = temp_file.path().to_str().unwrap().to_string();

        let from_file = CliConfig::parse_from(["access-proxy", "--config", path.as_str()]);
        assert!(!from_file.resolve().unwrap().allow);

        let overridden =
            CliConfig::parse_from(["access-proxy", "--config", path.as_str(), "--allow"]);
        assert!(overridden.resolve().unwrap().allow);
    }

    #[test]
    fn test_allow_and_deny_conflict() {
        let result = CliConfig::try_parse_from(["access-proxy", "--allow", "--deny"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_repeat_rejected() {
        let config = CliConfig::parse_from(["access-proxy", "--repeat", "0"]);
        assert!(config.validate().is_err());
        assert!(config.resolve().is_err());
    }

    #[test]
    fn test_missing_config_file() {
        let config = CliConfig::parse_from(["access-proxy", "--config", "/nonexistent/proxy.toml"]);
        assert!(config.resolve().is_err());
    }
}

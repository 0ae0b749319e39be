//! Command line configuration for the `fhirscope` binary.
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `FHIRSCOPE_PRETTY` | false | Pretty-print the JSON output |
//! | `FHIRSCOPE_LOG_LEVEL` | warn | Log level |
//!
//! `RUST_LOG`, when set, takes precedence over the log level.

use clap::{ArgAction, Parser};

const LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

/// Configuration for a single `fhirscope` invocation.
#[derive(Debug, Clone, Parser)]
#[command(name = "fhirscope")]
#[command(version, disable_version_flag = true)]
#[command(about = "Parse a SMART-on-FHIR scope and print it as JSON")]
#[command(after_help = "e.g. fhirscope patient/Observation.rs")]
pub struct CliConfig {
    /// Scope to parse, e.g. `patient/Observation.rs?param=true`.
    pub scope: String,

    /// Pretty-print the JSON output.
    #[arg(long, env = "FHIRSCOPE_PRETTY")]
    pub pretty: bool,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long, env = "FHIRSCOPE_LOG_LEVEL", default_value = "warn")]
    pub log_level: String,

    /// Print version.
    #[arg(short = 'v', short_alias = 'V', long, action = ArgAction::Version)]
    version: Option<bool>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            scope: String::new(),
            pretty: false,
            log_level: "warn".to_string(),
            version: None,
        }
    }
}

impl CliConfig {
    /// Creates a configuration for `scope` with every option at its default.
    pub fn for_scope(scope: impl Into<String>) -> Self {
        Self {
            scope: scope.into(),
            ..Default::default()
        }
    }

    /// Validates the configuration and returns errors if any.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.scope.is_empty() {
            errors.push("Scope cannot be empty".to_string());
        }

        if !LOG_LEVELS.contains(&self.log_level.to_ascii_lowercase().as_str()) {
            errors.push(format!(
                "Unknown log level '{}', expected one of: {}",
                self.log_level,
                LOG_LEVELS.join(", ")
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_default_config() {
        let config = CliConfig::default();
        assert!(config.scope.is_empty());
        assert!(!config.pretty);
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_parse_scope_argument() {
        let config = CliConfig::try_parse_from(["fhirscope", "patient/*.*"]).unwrap();
        assert_eq!(config.scope, "patient/*.*");
        assert!(!config.pretty);
    }

    #[test]
    fn test_parse_options() {
        let config = CliConfig::try_parse_from([
            "fhirscope",
            "--pretty",
            "--log-level",
            "debug",
            "user/Observation.read",
        ])
        .unwrap();
        assert_eq!(config.scope, "user/Observation.read");
        assert!(config.pretty);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_missing_scope_is_an_error() {
        let err = CliConfig::try_parse_from(["fhirscope"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_extra_positional_is_an_error() {
        let result = CliConfig::try_parse_from(["fhirscope", "patient/*.r", "user/*.r"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_version_flags() {
        for flag in ["-v", "-V", "--version"] {
            let err = CliConfig::try_parse_from(["fhirscope", flag]).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::DisplayVersion, "flag {flag}");
            assert_eq!(err.exit_code(), 0);
        }
    }

    #[test]
    fn test_help_flags() {
        for flag in ["-h", "--help"] {
            let err = CliConfig::try_parse_from(["fhirscope", flag]).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::DisplayHelp, "flag {flag}");
            assert_eq!(err.exit_code(), 0);
        }
    }

    #[test]
    fn test_validate_valid() {
        assert!(CliConfig::for_scope("patient/*.r").validate().is_ok());

        let config = CliConfig {
            log_level: "DEBUG".to_string(),
            ..CliConfig::for_scope("patient/*.r")
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_empty_scope() {
        let result = CliConfig::default().validate();
        assert!(result.unwrap_err().iter().any(|e| e.contains("Scope")));
    }

    #[test]
    fn test_validate_invalid_log_level() {
        let config = CliConfig {
            log_level: "verbose".to_string(),
            ..CliConfig::for_scope("patient/*.r")
        };
        let errors = config.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("verbose"));
    }
}

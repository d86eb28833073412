//! Configuration loading traits and types.
//!
//! This module provides a standardized way to load TOML configuration files
//! across all soundstream tools.
//!
//! # Usage
//!
//! ```rust,no_run
//! use soundstream_common::config::{ConfigLoader, SegmentConfig, SharedConfig, ConfigError};
//! use serde::Deserialize;
//! use std::path::Path;
//!
//! #[derive(Debug, Deserialize)]
//! struct MyToolConfig {
//!     shared: SharedConfig,
//!     #[serde(default)]
//!     segment: SegmentConfig,
//! }
//!
//! fn main() -> Result<(), ConfigError> {
//!     let config = MyToolConfig::load(Path::new("shmctl.toml"))?;
//!     println!("Segment: {}", config.segment.name);
//!     Ok(())
//! }
//! ```

use crate::consts::{DEFAULT_SHM_MODE, DEFAULT_SHM_NAME, MAX_PERMISSION_BITS};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Error type for configuration loading operations.
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    /// Configuration file not found at specified path.
    #[error("Configuration file not found")]
    FileNotFound,

    /// TOML parsing failed.
    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    /// Semantic validation failed.
    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

/// Log level for application logging.
///
/// Uses lowercase serde values for TOML compatibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Most verbose, detailed tracing information.
    Trace,
    /// Debug information useful during development.
    Debug,
    /// General information about application operation.
    #[default]
    Info,
    /// Warning messages for potentially problematic situations.
    Warn,
    /// Error messages for serious problems.
    Error,
}

impl LogLevel {
    /// Lowercase name, usable as an `EnvFilter` directive.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

/// Common configuration fields shared across all soundstream tools.
///
/// # TOML Example
///
/// ```toml
/// [shared]
/// log_level = "debug"
/// service_name = "soundstream-helper"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SharedConfig {
    /// Logging verbosity level.
    #[serde(default)]
    pub log_level: LogLevel,

    /// Application instance identifier.
    pub service_name: String,
}

impl SharedConfig {
    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValidationError` if `service_name` is empty.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.service_name.is_empty() {
            return Err(ConfigError::ValidationError(
                "service_name cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Which segment a tool operates on and the bits it is created with.
///
/// # TOML Example
///
/// ```toml
/// [segment]
/// name = "/soundstream2_audio"
/// mode = 0o666
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentConfig {
    /// Name in the shared-memory namespace.
    #[serde(default = "default_segment_name")]
    pub name: String,

    /// Permission bits used on creation.
    #[serde(default = "default_segment_mode")]
    pub mode: u32,
}

fn default_segment_name() -> String {
    DEFAULT_SHM_NAME.to_string()
}

fn default_segment_mode() -> u32 {
    DEFAULT_SHM_MODE
}

impl Default for SegmentConfig {
    fn default() -> Self {
        Self {
            name: default_segment_name(),
            mode: default_segment_mode(),
        }
    }
}

impl SegmentConfig {
    /// Validate the configuration.
    ///
    /// Only checks what a config file can get wrong on its own; naming rules
    /// of the host namespace are left to the host.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValidationError` if:
    /// - `name` is empty or contains a NUL byte
    /// - `mode` has bits above `0o7777`
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.name.is_empty() {
            return Err(ConfigError::ValidationError(
                "segment name cannot be empty".to_string(),
            ));
        }
        if self.name.contains('\0') {
            return Err(ConfigError::ValidationError(
                "segment name cannot contain NUL".to_string(),
            ));
        }
        if self.mode > MAX_PERMISSION_BITS {
            return Err(ConfigError::ValidationError(format!(
                "segment mode {:#o} exceeds {:#o}",
                self.mode, MAX_PERMISSION_BITS
            )));
        }
        Ok(())
    }
}

/// Trait for loading configuration from TOML files.
///
/// Blanket-implemented for every `serde::de::DeserializeOwned` type.
///
/// # Contract
///
/// - Returns `ConfigError::FileNotFound` if the file does not exist
/// - Returns `ConfigError::ParseError` if TOML syntax is invalid
pub trait ConfigLoader: Sized + serde::de::DeserializeOwned {
    /// Load configuration from a TOML file.
    fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ConfigError::FileNotFound
            } else {
                ConfigError::ParseError(e.to_string())
            }
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }
}

impl<T: serde::de::DeserializeOwned> ConfigLoader for T {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_log_level_default() {
        assert_eq!(LogLevel::default(), LogLevel::Info);
    }

    #[test]
    fn test_log_level_as_str_matches_serde() {
        #[derive(Serialize)]
        struct TestWrapper {
            level: LogLevel,
        }

        for level in [
            LogLevel::Trace,
            LogLevel::Debug,
            LogLevel::Info,
            LogLevel::Warn,
            LogLevel::Error,
        ] {
            let out = toml::to_string(&TestWrapper { level }).unwrap();
            assert!(out.contains(level.as_str()), "{out}");
        }
    }

    #[test]
    fn test_log_level_deserialization() {
        #[derive(Debug, Deserialize, PartialEq)]
        struct TestWrapper {
            level: LogLevel,
        }

        assert_eq!(
            toml::from_str::<TestWrapper>("level = \"warn\"")
                .unwrap()
                .level,
            LogLevel::Warn
        );
        assert!(toml::from_str::<TestWrapper>("level = \"loud\"").is_err());
    }

    #[test]
    fn test_shared_config_validation_empty_service_name() {
        let config = SharedConfig {
            log_level: LogLevel::Info,
            service_name: "".to_string(),
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn test_segment_config_defaults() {
        let config = SegmentConfig::default();
        assert_eq!(config.name, DEFAULT_SHM_NAME);
        assert_eq!(config.mode, 0o666);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_segment_config_rejects_wide_mode() {
        let config = SegmentConfig {
            mode: 0o10000,
            ..SegmentConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn test_segment_config_rejects_nul_name() {
        let config = SegmentConfig {
            name: "/bad\0name".to_string(),
            ..SegmentConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_loader_file_not_found() {
        let result = SegmentConfig::load(Path::new("/nonexistent/path/shmctl.toml"));
        assert!(matches!(result, Err(ConfigError::FileNotFound)));
    }

    #[test]
    fn test_config_loader_parse_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "invalid toml {{{{").unwrap();

        let result = SegmentConfig::load(file.path());
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_config_loader_octal_mode() {
        #[derive(Debug, Deserialize)]
        struct TestConfig {
            shared: SharedConfig,
            #[serde(default)]
            segment: SegmentConfig,
        }

        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[shared]
log_level = "debug"
service_name = "soundstream-helper"

[segment]
name = "/soundstream_test"
mode = 0o600
"#
        )
        .unwrap();
        file.flush().unwrap();

        let config = TestConfig::load(file.path()).unwrap();
        assert_eq!(config.shared.log_level, LogLevel::Debug);
        assert_eq!(config.segment.name, "/soundstream_test");
        assert_eq!(config.segment.mode, 0o600);
    }

    #[test]
    fn test_missing_segment_table_uses_defaults() {
        #[derive(Debug, Deserialize)]
        struct TestConfig {
            #[allow(dead_code)]
            shared: SharedConfig,
            #[serde(default)]
            segment: SegmentConfig,
        }

        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[shared]
service_name = "soundstream-helper"
"#
        )
        .unwrap();
        file.flush().unwrap();

        let config = TestConfig::load(file.path()).unwrap();
        assert_eq!(config.segment, SegmentConfig::default());
    }
}

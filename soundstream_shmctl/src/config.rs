//! shmctl configuration file
//!
//! ```toml
//! [shared]
//! log_level = "info"
//! service_name = "soundstream-helper"
//!
//! [segment]
//! name = "/soundstream2_audio"
//! mode = 0o666
//! ```

use crate::error::CtlError;
use serde::Deserialize;
use soundstream_common::prelude::*;
use std::path::Path;

/// Top-level `shmctl.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct ShmctlConfig {
    /// Logging and instance name.
    pub shared: SharedConfig,
    /// Segment defaults.
    #[serde(default)]
    pub segment: SegmentConfig,
}

impl Default for ShmctlConfig {
    fn default() -> Self {
        Self {
            shared: SharedConfig {
                log_level: LogLevel::default(),
                service_name: "shmctl".to_string(),
            },
            segment: SegmentConfig::default(),
        }
    }
}

impl ShmctlConfig {
    /// Load and validate `path`, or the default location when `path` is `None`.
    ///
    /// A missing file at the default location yields the built-in defaults; a
    /// missing file that was asked for explicitly is an error.
    pub fn resolve(path: Option<&Path>) -> Result<Self, CtlError> {
        let config = match path {
            Some(path) => Self::load(path)?,
            None => match Self::load(Path::new(DEFAULT_CONFIG_PATH)) {
                Ok(config) => config,
                Err(ConfigError::FileNotFound) => Self::default(),
                Err(e) => return Err(e.into()),
            },
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate both tables.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.shared.validate()?;
        self.segment.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_is_valid() {
        let config = ShmctlConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.segment.name, "/soundstream2_audio");
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let result = ShmctlConfig::resolve(Some(Path::new("/nonexistent/shmctl.toml")));
        assert!(matches!(
            result,
            Err(CtlError::Config(ConfigError::FileNotFound))
        ));
    }

    #[test]
    fn test_invalid_file_is_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[shared]
service_name = ""
"#
        )
        .unwrap();
        file.flush().unwrap();

        assert!(matches!(
            ShmctlConfig::resolve(Some(file.path())),
            Err(CtlError::Config(ConfigError::ValidationError(_)))
        ));
    }

    #[test]
    fn test_file_values_are_used() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[shared]
log_level = "trace"
service_name = "soundstream-viewer"

[segment]
name = "/soundstream_viewer_test"
mode = 0o640
"#
        )
        .unwrap();
        file.flush().unwrap();

        let config = ShmctlConfig::resolve(Some(file.path())).unwrap();
        assert_eq!(config.shared.log_level, LogLevel::Trace);
        assert_eq!(config.segment.name, "/soundstream_viewer_test");
        assert_eq!(config.segment.mode, 0o640);
    }
}

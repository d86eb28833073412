//! Segment names in the POSIX shared-memory namespace

use crate::error::{ShmError, ShmResult};
use std::ffi::{CStr, CString};
use std::fmt;
use std::str::FromStr;

/// Name of a shared-memory object.
///
/// The host decides what a valid name is (Linux and macOS both want a single
/// leading slash and no further slashes). The only check made here is the one
/// the C boundary needs: no interior NUL byte.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SegmentName {
    text: String,
    c_name: CString,
}

impl SegmentName {
    /// Build a name, rejecting interior NUL bytes.
    pub fn new(name: impl Into<String>) -> ShmResult<Self> {
        let text = name.into();
        let c_name = CString::new(text.as_bytes()).map_err(|_| ShmError::NameInvalid {
            name: text.clone(),
            errno: None,
        })?;
        Ok(Self { text, c_name })
    }

    /// Name as text
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Name as handed to the host
    pub fn as_c_str(&self) -> &CStr {
        &self.c_name
    }
}

impl FromStr for SegmentName {
    type Err = ShmError;

    fn from_str(s: &str) -> ShmResult<Self> {
        Self::new(s)
    }
}

impl TryFrom<&str> for SegmentName {
    type Error = ShmError;

    fn try_from(value: &str) -> ShmResult<Self> {
        Self::new(value)
    }
}

impl TryFrom<String> for SegmentName {
    type Error = ShmError;

    fn try_from(value: String) -> ShmResult<Self> {
        Self::new(value)
    }
}

impl AsRef<str> for SegmentName {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for SegmentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_keeps_text() {
        let name = SegmentName::new("/soundstream2_audio").unwrap();
        assert_eq!(name.as_str(), "/soundstream2_audio");
        assert_eq!(name.as_c_str().to_bytes(), b"/soundstream2_audio");
        assert_eq!(name.to_string(), "/soundstream2_audio");
    }

    #[test]
    fn test_interior_nul_rejected() {
        let err = SegmentName::new("/sound\0stream").unwrap_err();
        assert!(matches!(err, ShmError::NameInvalid { errno: None, .. }));
    }

    #[test]
    fn test_host_rules_not_enforced_locally() {
        // Left for the host to accept or reject.
        assert!(SegmentName::new("").is_ok());
        assert!(SegmentName::new("no_slash").is_ok());
        assert!(SegmentName::new("/a/b").is_ok());
    }

    #[test]
    fn test_parse() {
        let name: SegmentName = "/parsed".parse().unwrap();
        assert_eq!(name, SegmentName::try_from("/parsed").unwrap());
    }
}

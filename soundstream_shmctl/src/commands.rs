//! The three shmctl operations
//!
//! Each call maps onto exactly one bridge operation, except `reset`, which is
//! an unlink followed by a create-or-open.

use crate::args::{OpenArgs, ResetArgs};
use crate::error::CtlError;
use soundstream_common::config::SegmentConfig;
use soundstream_shm::{
    OpenFlags, PermissionMode, SegmentName, ShmError, segment_open, segment_unlink,
};
use std::os::fd::AsRawFd;
use tracing::{debug, info};

/// Parse an octal mode: `0o640`, `0640` or `640`. A single leading `-` is
/// allowed so that negative values can be handed to the wrapping conversion.
pub fn parse_mode(text: &str) -> Result<i64, CtlError> {
    let syntax = || CtlError::ModeSyntax(text.to_string());
    let (negative, digits) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };
    let digits = digits
        .strip_prefix("0o")
        .or_else(|| digits.strip_prefix("0O"))
        .unwrap_or(digits);
    if digits.is_empty() || !digits.bytes().all(|b| matches!(b, b'0'..=b'7')) {
        return Err(syntax());
    }
    let value = i64::from_str_radix(digits, 8).map_err(|_| syntax())?;
    if negative {
        value.checked_neg().ok_or_else(syntax)
    } else {
        Ok(value)
    }
}

/// Pick the mode from the command line, falling back to the config file.
pub fn resolve_mode(
    cli: Option<&str>,
    wrap: bool,
    config: &SegmentConfig,
) -> Result<PermissionMode, CtlError> {
    let value = match cli {
        Some(text) => parse_mode(text)?,
        None => i64::from(config.mode),
    };
    if wrap {
        Ok(PermissionMode::wrapping_from_i64(value))
    } else {
        Ok(PermissionMode::try_from(value)?)
    }
}

/// Segment name from the command line, falling back to the config file.
pub fn resolve_name(cli: Option<&str>, config: &SegmentConfig) -> Result<SegmentName, CtlError> {
    Ok(SegmentName::new(cli.unwrap_or(&config.name))?)
}

/// `O_*` bits requested by `shmctl open`.
pub fn open_flags(args: &OpenArgs) -> OpenFlags {
    let mut flags = if args.read_only {
        OpenFlags::read_only()
    } else {
        OpenFlags::READ_WRITE
    };
    flags.set(OpenFlags::CREATE, args.create);
    flags.set(OpenFlags::EXCLUSIVE, args.exclusive);
    flags.set(OpenFlags::TRUNCATE, args.truncate);
    flags
}

/// `shmctl open`
pub fn run_open(args: &OpenArgs, config: &SegmentConfig) -> Result<(), CtlError> {
    let name = resolve_name(args.target.name.as_deref(), config)?;
    let mode = resolve_mode(args.mode.as_deref(), args.wrap_mode, config)?;
    let flags = open_flags(args);

    let handle = segment_open(&name, flags, mode)?;
    if flags.creates() {
        info!(%name, ?flags, %mode, fd = handle.as_raw_fd(), "Segment open");
    } else {
        info!(%name, ?flags, fd = handle.as_raw_fd(), "Segment open");
    }
    handle.close()?;
    Ok(())
}

/// `shmctl unlink`
pub fn run_unlink(name: Option<&str>, config: &SegmentConfig) -> Result<(), CtlError> {
    let name = resolve_name(name, config)?;
    segment_unlink(&name)?;
    info!(%name, "Segment unlinked");
    Ok(())
}

/// `shmctl reset`
pub fn run_reset(args: &ResetArgs, config: &SegmentConfig) -> Result<(), CtlError> {
    let name = resolve_name(args.target.name.as_deref(), config)?;
    let mode = resolve_mode(args.mode.as_deref(), false, config)?;

    match segment_unlink(&name) {
        Ok(()) => debug!(%name, "Removed leftover segment"),
        Err(ShmError::NotFound { .. }) => debug!(%name, "No leftover segment"),
        Err(e) => return Err(e.into()),
    }

    let handle = segment_open(&name, OpenFlags::create_or_open(), mode)?;
    info!(%name, %mode, "Segment created");
    handle.close()?;
    Ok(())
}

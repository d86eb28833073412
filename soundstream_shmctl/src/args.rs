//! Command-line arguments

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// shmctl - create, open and unlink POSIX shared-memory segments
#[derive(Parser, Debug)]
#[command(name = "shmctl")]
#[command(author = "RTS007")]
#[command(version)]
#[command(about = "Create, open and unlink POSIX shared-memory segments")]
#[command(long_about = None)]
pub struct Args {
    /// Path to shmctl.toml. Defaults to /etc/soundstream/shmctl.toml when present.
    #[arg(short, long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output logs in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Operation to perform
    #[command(subcommand)]
    pub command: Command,
}

/// Operations exposed by shmctl.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create and/or open a segment, then release the descriptor
    Open(OpenArgs),
    /// Remove a segment's name from the namespace
    Unlink(NameArgs),
    /// Unlink any leftover segment, then create-or-open it read/write
    Reset(ResetArgs),
}

/// Segment selection shared by all operations.
#[derive(clap::Args, Debug, Default)]
pub struct NameArgs {
    /// Segment name, e.g. /soundstream2_audio (overrides the config file)
    #[arg(short, long)]
    pub name: Option<String>,
}

/// Arguments of `shmctl open`.
#[derive(clap::Args, Debug, Default)]
pub struct OpenArgs {
    #[command(flatten)]
    pub target: NameArgs,

    /// Create the segment if it does not exist (O_CREAT)
    #[arg(long)]
    pub create: bool,

    /// Fail if the segment already exists (O_EXCL)
    #[arg(long, requires = "create")]
    pub exclusive: bool,

    /// Truncate to zero length on open (O_TRUNC)
    #[arg(long)]
    pub truncate: bool,

    /// Open read-only instead of read/write
    #[arg(long, conflicts_with = "truncate")]
    pub read_only: bool,

    /// Permission bits used on creation, octal (overrides the config file)
    #[arg(short, long, allow_hyphen_values = true)]
    pub mode: Option<String>,

    /// Narrow an oversized --mode silently instead of rejecting it
    #[arg(long)]
    pub wrap_mode: bool,
}

/// Arguments of `shmctl reset`.
#[derive(clap::Args, Debug, Default)]
pub struct ResetArgs {
    #[command(flatten)]
    pub target: NameArgs,

    /// Permission bits used on creation, octal (overrides the config file)
    #[arg(short, long, allow_hyphen_values = true)]
    pub mode: Option<String>,
}

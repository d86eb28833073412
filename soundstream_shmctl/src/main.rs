//! # shmctl
//!
//! Create, open and unlink POSIX shared-memory segments from the shell.
//!
//! ```bash
//! shmctl reset                      # helper start-up sequence
//! shmctl open --create --mode 0o600 # create-or-open
//! shmctl unlink -n /soundstream2_audio
//! shmctl --json -v open --create --exclusive
//! ```

#![deny(warnings)]

use clap::Parser;
use soundstream_common::config::LogLevel;
use soundstream_shmctl::commands::{run_open, run_reset, run_unlink};
use soundstream_shmctl::{Args, Command, CtlError, ShmctlConfig};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() {
    let args = Args::parse();

    // Config first so its log level applies; a bad config is reported once
    // tracing is up.
    let config = ShmctlConfig::resolve(args.config.as_deref());
    let log_level = config
        .as_ref()
        .map(|c| c.shared.log_level)
        .unwrap_or_default();
    setup_tracing(&args, log_level);

    if let Err(e) = config.and_then(|config| run(&args, &config)) {
        match e.errno() {
            Some(errno) => error!(errno = %errno, "shmctl failed: {}", e),
            None => error!("shmctl failed: {}", e),
        }
        std::process::exit(1);
    }
}

fn run(args: &Args, config: &ShmctlConfig) -> Result<(), CtlError> {
    info!(
        service = %config.shared.service_name,
        "shmctl v{} starting",
        env!("CARGO_PKG_VERSION")
    );

    match &args.command {
        Command::Open(open) => run_open(open, &config.segment),
        Command::Unlink(target) => run_unlink(target.name.as_deref(), &config.segment),
        Command::Reset(reset) => run_reset(reset, &config.segment),
    }
}

fn setup_tracing(args: &Args, configured: LogLevel) {
    let level = if args.verbose {
        LogLevel::Debug
    } else {
        configured
    };

    // RUST_LOG wins over the config file and -v.
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_str()));

    if args.json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

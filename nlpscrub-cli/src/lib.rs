//! nlpscrub CLI library
//!
//! This library provides the command-line interface for the nlpscrub tweet
//! cleaning pipeline.

pub mod cleaner;
pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;

pub use cleaner::FileCleaner;
pub use error::{CliError, CliResult};

/// Initialize logging based on verbosity level
///
/// `quiet` leaves logging uninitialized, so nothing below error is printed
/// and errors are reported by the caller.
pub fn init_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    // A second init (e.g. from tests) keeps the first logger
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .try_init();
}

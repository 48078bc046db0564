//! # linkshare-cli
//!
//! Command definitions, output formatting, and logging setup for the
//! `linkshare` binary.

pub mod commands;
pub mod logging;
pub mod output;

pub use commands::Cli;

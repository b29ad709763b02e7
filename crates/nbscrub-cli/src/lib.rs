//! Command-line driver for nbscrub.
//!
//! Parses arguments, loads configuration, sets up logging and runs the
//! batch over every notebook in the configured directory.
//!
//! # Key Abstractions
//!
//! - [`CliArgs`]: Top-level arguments
//! - [`NbscrubConfig`]: File/env/default configuration
//! - [`NbscrubCli`]: The application that runs the batch

pub mod app;
pub mod cli;
pub mod config;

pub use app::{BatchReport, NbscrubCli};
pub use cli::CliArgs;
pub use config::NbscrubConfig;

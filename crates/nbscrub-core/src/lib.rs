//! nbscrub core — notebook discovery, scrubbing, and error types.
//!
//! This crate holds everything needed to normalise Jupyter notebooks for
//! version control. It has no CLI or configuration concerns; those live in
//! `nbscrub-cli`.
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`notebook`]: In-memory scrub transform and the per-file clean operation
//! - [`util`]: Notebook file discovery

pub mod error;
pub mod notebook;
pub mod util;

// Re-export key types at crate root for convenience
pub use error::{Error, Result};
pub use notebook::{CleanSummary, Scrubber, scrub_document};
pub use util::files::{NotebookFile, find_notebooks};

/// Default notebook file extension (without dot).
pub const NOTEBOOK_EXTENSION: &str = "ipynb";

/// Default number of spaces per nesting level in rewritten notebooks.
pub const DEFAULT_INDENT: usize = 1;

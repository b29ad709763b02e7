//! Utility modules.
//!
//! # Modules
//!
//! - [`files`]: Notebook file discovery

pub mod files;

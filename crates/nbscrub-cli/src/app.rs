//! The nbscrub batch driver.
//!
//! Discovers notebooks, cleans them one at a time in discovery order and
//! reports each result on standard output. A failure on one notebook is
//! reported and the batch moves on; it never changes the outcome of the run.

use crate::cli::CliArgs;
use crate::config::NbscrubConfig;
use nbscrub_core::{Error, Result, Scrubber, find_notebooks};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

// ============================================================================
// BatchReport
// ============================================================================

/// What happened to each notebook in a batch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    /// Notebooks that were rewritten.
    pub cleaned: Vec<PathBuf>,
    /// Notebooks that could not be cleaned, with the error text.
    pub failed: Vec<(PathBuf, String)>,
}

impl BatchReport {
    /// Number of notebooks that were found.
    pub fn total(&self) -> usize {
        self.cleaned.len() + self.failed.len()
    }
}

// ============================================================================
// NbscrubCli
// ============================================================================

/// The nbscrub application.
pub struct NbscrubCli {
    config: NbscrubConfig,
    scrubber: Scrubber,
}

impl NbscrubCli {
    /// Create from CLI args, loading config from file/env.
    pub fn from_args(args: &CliArgs) -> Result<Self> {
        let config = NbscrubConfig::load(args.config.as_deref())?;
        Ok(Self::new(config))
    }

    /// Create a new application from a loaded config.
    pub fn new(config: NbscrubConfig) -> Self {
        let scrubber = Scrubber::new(config.output.indent);
        Self { config, scrubber }
    }

    /// Get a reference to the configuration.
    pub fn config(&self) -> &NbscrubConfig {
        &self.config
    }

    /// Initialise tracing-based logging on stderr.
    ///
    /// Uses `RUST_LOG` env var if set, otherwise defaults based on verbosity flags.
    pub fn init_logging(verbose: bool, quiet: bool) {
        let filter = if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else if quiet {
            EnvFilter::new("error")
        } else if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("warn")
        };

        // Ignore error if a subscriber is already set (e.g. in tests).
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .try_init();
    }

    /// Clean every notebook, writing progress to standard output.
    pub fn run(&self) -> Result<BatchReport> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.run_batch(&mut out)
    }

    /// Clean every notebook, writing progress to `out`.
    ///
    /// Only discovery problems and failures to write progress are returned
    /// as errors. Per-notebook failures end up in the report.
    pub fn run_batch<W: Write>(&self, out: &mut W) -> Result<BatchReport> {
        let dir = self.config.notebook_dir()?;
        let notebooks = find_notebooks(&dir, &self.config.notebooks.extension)?;
        let mut report = BatchReport::default();

        if notebooks.is_empty() {
            match &self.config.notebooks.directory {
                Some(configured) => emit(
                    out,
                    format_args!("No Jupyter notebooks found in {configured}."),
                )?,
                None => emit(
                    out,
                    format_args!("No Jupyter notebooks found in the current directory."),
                )?,
            }
            tracing::info!(directory = %dir.display(), "no notebooks found");
            return Ok(report);
        }

        emit(out, format_args!("Found {} notebook(s):", notebooks.len()))?;
        for nb in &notebooks {
            emit(out, format_args!("  - {}", nb.relative_path.display()))?;
        }
        emit(out, format_args!("\nCleaning notebooks..."))?;

        for nb in &notebooks {
            let shown = nb.relative_path.display();
            emit(out, format_args!("Processing: {shown}"))?;
            match self.scrubber.clean(&nb.path) {
                Ok(summary) => {
                    tracing::debug!(path = %nb.path.display(), cells = summary.cells, "cleaned");
                    emit(out, format_args!("✓ Cleaned: {shown}"))?;
                    report.cleaned.push(nb.path.clone());
                }
                Err(e) => {
                    tracing::warn!(path = %nb.path.display(), error = %e, "failed to clean notebook");
                    emit(out, format_args!("✗ Error processing {shown}: {e}"))?;
                    report.failed.push((nb.path.clone(), e.to_string()));
                }
            }
        }

        emit(out, format_args!("\nAll notebooks have been cleaned!"))?;
        tracing::info!(
            cleaned = report.cleaned.len(),
            failed = report.failed.len(),
            "batch complete"
        );
        Ok(report)
    }
}

fn emit<W: Write>(out: &mut W, line: std::fmt::Arguments<'_>) -> Result<()> {
    writeln!(out, "{line}").map_err(Error::Output)
}

// ============================================================================
// Tests
// ============================================================================

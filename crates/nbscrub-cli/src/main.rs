//! `nbscrub` — clear metadata and execution counts from the Jupyter
//! notebooks in a directory so they diff cleanly.

use anyhow::Context;
use clap::Parser;
use nbscrub_cli::{CliArgs, NbscrubCli};

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    NbscrubCli::init_logging(args.verbose, args.quiet);

    let cli = NbscrubCli::from_args(&args).context("failed to load configuration")?;
    cli.run().context("failed to run notebook batch")?;
    Ok(())
}

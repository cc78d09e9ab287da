//! `cincy` — resolve crime-report slot values from the command line.
//!
//! Prints JSON on stdout. Diagnostics go to stderr through `tracing`.

mod cli;

use clap::Parser;

fn main() -> anyhow::Result<()> {
    cli::Cli::parse().run()
}

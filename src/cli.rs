//! CLI argument definitions and the top-level run entry point.
//!
//! Arguments are defined with clap's derive macros; [`run`] wires the
//! environment inspector, the package index, and the renderer together.

use crate::error::Result;
use crate::index::{PackageIndex, PipIndex};
use crate::{inspect, report};
use clap::Parser;

/// Radstack - RADICAL stack version reporting.
#[derive(Debug, Parser)]
#[command(name = "radstack")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Query the package index for the latest release of each package
    #[arg(short, long)]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

/// Collect the stack report and print it.
///
/// Inspector failures propagate to the caller; index query failures are
/// tolerated by the renderer and degrade to an empty latest-release label.
pub fn run(cli: &Cli) -> Result<()> {
    let stack = inspect::collect()?;

    let index = PipIndex;
    let rendered = report::render(
        &stack,
        cli.verbose.then_some(&index as &dyn PackageIndex),
    );
    print!("{rendered}");

    Ok(())
}

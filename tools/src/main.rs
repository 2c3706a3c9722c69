use anyhow::Result;
use clap::Parser;
use std::io;
use tracing_subscriber::EnvFilter;

use ob8_tools::dump::{dump, DumpArgs};
use ob8_tools::inspect::{inspect, InspectArgs};

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
enum Cli {
    Dump(DumpArgs),
    Inspect(InspectArgs),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    match Cli::parse_from(wild::args()) {
        Cli::Dump(args) => dump(args),
        Cli::Inspect(args) => inspect(&args),
    }
}

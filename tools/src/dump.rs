//! The `dump` subcommand

use crate::{
    render::{HtmlRenderer, JsonRenderer, Renderer, TextRenderer},
    utils::{check_for_overwrite, load_banks},
};
use anyhow::{Context, Result};
use clap::Args;
use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::PathBuf,
};
use tracing::info;

/// Arguments for the `dump` subcommand
#[derive(Args)]
#[clap(
    author,
    version,
    about = "Print the program settings stored in OB-8 sysex files",
    long_about = "Dump decodes every program in the given OB-8 sysex files and prints its settings, laid out like the front panel.\n\nFolders are searched for .syx files. Files that are not OB-8 dumps are reported and skipped.\n\nDump is also capable of writing an HTML document or JSON instead of plain text."
)]
pub struct DumpArgs {
    /// The sysex files (or folders containing them) to dump
    #[clap(required = true)]
    paths: Vec<PathBuf>,

    /// Should folders be walked recursively
    #[clap(short, long)]
    recursive: bool,

    /// The file the output should be written to, instead of standard output
    #[clap(short, long)]
    output: Option<PathBuf>,

    /// Write an HTML document
    #[clap(long, conflicts_with = "json")]
    html: bool,

    /// Write JSON
    #[clap(long)]
    json: bool,
}

/// Print the program settings stored in OB-8 sysex files
pub fn dump(args: DumpArgs) -> Result<()> {
    let mut renderer: Box<dyn Renderer> = if args.html {
        Box::new(HtmlRenderer)
    } else if args.json {
        Box::new(JsonRenderer::default())
    } else {
        Box::new(TextRenderer)
    };

    let mut out: Box<dyn Write> = match &args.output {
        Some(path) => {
            if !check_for_overwrite(path)? {
                return Ok(());
            }

            let file = File::create(path)
                .context(format!("Could not create file at {}", path.display()))?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(io::stdout().lock()),
    };

    renderer
        .begin(&mut *out)
        .context("Could not write the output")?;

    let mut count = 0;
    for (path, bank) in load_banks(&args.paths, args.recursive) {
        renderer
            .bank(&mut *out, &path, &bank)
            .context(format!("Could not write the programs of {}", path.display()))?;

        count += 1;
    }

    renderer
        .end(&mut *out)
        .context("Could not write the output")?;
    out.flush().context("Could not write the output")?;

    info!("Dumped {count} file(s)");

    if let Some(path) = args.output {
        println!("Wrote {}", path.display());
    }

    Ok(())
}

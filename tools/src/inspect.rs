//! The `inspect` subcommand

use crate::utils::load_banks;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use ob8::{Bank, Program};
use std::path::{Path, PathBuf};

/// Arguments for the `inspect` subcommand
#[derive(Args)]
#[clap(author, version, about = "List the programs in OB-8 sysex files", long_about = None)]
pub struct InspectArgs {
    /// The sysex files (or folders containing them) to inspect
    #[clap(required = true)]
    paths: Vec<PathBuf>,

    /// Should folders be walked recursively
    #[clap(short, long)]
    recursive: bool,
}

/// List the programs in OB-8 sysex files
pub fn inspect(args: &InspectArgs) -> Result<()> {
    let mut first = true;

    for (path, bank) in load_banks(&args.paths, args.recursive) {
        if first {
            first = false;
        } else {
            println!();
        }

        print(&path, &bank);
    }

    Ok(())
}

fn print(path: &Path, bank: &Bank) {
    println!(
        "{:<32}{} programs",
        path.file_name()
            .unwrap_or(path.as_os_str())
            .to_string_lossy()
            .bold(),
        bank.len()
    );

    for program in bank {
        println!(
            "{:>3} | {:<6} | vol {:>2} | vcf {:>2}/{:>2} | {}",
            program.position().to_string().dimmed(),
            program.to_string().green(),
            u8::from(program.parameters.volume),
            u8::from(program.parameters.vcf_frequency),
            u8::from(program.parameters.vcf_resonance),
            summary(program)
        );
    }
}

/// A short description of the most audible switches of a program
fn summary(program: &Program) -> String {
    let p = &program.parameters;
    let mut words = Vec::new();

    let wave = |triangle: bool, square: bool| match (triangle, square) {
        (true, true) => "tri+sqr",
        (true, false) => "tri",
        (false, true) => "sqr",
        (false, false) => "off",
    };

    words.push(format!(
        "osc {}/{}",
        wave(p.osc1_wave.triangle(), p.osc1_wave.square()),
        wave(p.osc2_wave.triangle(), p.osc2_wave.square())
    ));

    if p.unison {
        words.push("unison".to_owned());
    }
    if p.sync {
        words.push("sync".to_owned());
    }
    if p.four_pole {
        words.push("4-pole".to_owned());
    }
    if p.noise {
        words.push("noise".to_owned());
    }

    words.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summaries() {
        let bank = crate::render::fixture();

        assert_eq!(summary(&bank.programs()[0]), "osc tri/tri+sqr 4-pole");
        assert_eq!(summary(&bank.programs()[1]), "osc off/off unison");
        assert_eq!(
            summary(&bank.programs()[2]),
            "osc tri+sqr/tri+sqr unison sync 4-pole noise"
        );
    }
}

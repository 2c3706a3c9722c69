//! # OB-8 Tools
//!
//! The [Oberheim OB-8](https://en.wikipedia.org/wiki/Oberheim_OB-8) is a polyphonic analog synthesizer from 1983. Its programs can be backed up over MIDI as system exclusive dumps, which are commonly shared as `.syx` files.
//!
//! Those dumps are opaque binary blobs though. This crate provides a command-line utility that prints what's inside of them: every knob position and switch of every program.
//!
//! ## Dump
//!
//! ```console
//! ob8-tools-dump 0.1.0
//! Print the program settings stored in OB-8 sysex files
//!
//! USAGE:
//!     ob8-tools dump [OPTIONS] <PATHS>...
//!
//! ARGS:
//!     <PATHS>...    The sysex files (or folders containing them) to dump
//!
//! OPTIONS:
//!     -h, --help               Print help information
//!         --html               Write an HTML document
//!         --json               Write JSON
//!     -o, --output <OUTPUT>    The file the output should be written to, instead of standard output
//!     -r, --recursive          Should folders be walked recursively
//!     -V, --version            Print version information
//! ```
//!
//! ### Example
//!
//! ```console
//! $ ob8-tools dump factory.syx
//! factory.syx
//! === Program A-1  (1) ===
//! Master:
//!   Program_Volume:50  Bend:12
//! Control:
//!   Portamento:1
//!   Unison:
//!   Osc2_Detune:0
//! ...
//! ```
//!
//! ## Inspect
//!
//! ```console
//! ob8-tools-inspect 0.1.0
//! List the programs in OB-8 sysex files
//!
//! USAGE:
//!     ob8-tools inspect [OPTIONS] <PATHS>...
//!
//! ARGS:
//!     <PATHS>...    The sysex files (or folders containing them) to inspect
//!
//! OPTIONS:
//!     -h, --help         Print help information
//!     -r, --recursive    Should folders be walked recursively
//!     -V, --version      Print version information
//! ```
//!
//! ### Example
//!
//! ```console
//! $ ob8-tools inspect factory.syx
//! factory.syx                     3 programs
//!   1 | A-1    | vol 50 | vcf 45/20 | osc tri/tri+sqr 4-pole
//!  24 | AB-8   | vol  0 | vcf 20/ 0 | osc off/off unison
//! 120 | ABCD-8 | vol 63 | vcf 63/63 | osc tri+sqr/tri+sqr unison sync 4-pole noise
//! ```
//!
//! Set `RUST_LOG=info` to see which files were decoded, files that get skipped are always reported.

pub mod dump;
pub mod inspect;
pub mod render;
pub(crate) mod utils;

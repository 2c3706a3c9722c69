//! Decoding of [Oberheim OB-8](https://en.wikipedia.org/wiki/Oberheim_OB-8) program bank dumps
//!
//! The OB-8 transfers its programs over MIDI as system exclusive messages of 60 bytes each. Every
//! data byte in such a message is split in two nibbles, and the 27 logical bytes of a program are
//! densely packed with knob positions and switch states. This crate turns a `.syx` dump into a
//! [`Bank`] of [`Program`]s whose [`Parameters`] carry one named, typed field per panel control.
//!
//! This crate only reads dumps. Writing them back, or talking to the hardware, is not supported.

pub mod bank;
pub mod nibble;
pub mod program;

pub use bank::{Bank, FormatError};
pub use program::{Group, Kind, LfoWave, OscWave, Param, Parameters, Program, Section, Value};
pub use ux::{u2, u3, u6};

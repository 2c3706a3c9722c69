//! OB-8 program bank dumps (`.syx` files)

use crate::program::Program;
use std::{
    fs::File,
    io::{self, Read},
    path::Path,
    slice,
};
use thiserror::Error;

/// A fully decoded OB-8 program dump
///
/// When the OB-8 dumps its memory over MIDI, every program is sent as a separate sysex message
/// of [`Program::LEN`] bytes. A `.syx` file is those messages concatenated, so a [`Bank`] holds
/// as many programs as there were messages, in the order they appeared.
///
/// ```no_run
/// # use ob8::Bank;
/// # use std::fs::File;
/// // Load a bank from a path on disk
/// let bank = Bank::from_path("factory.syx")?;
///
/// // Load a bank from an arbitrary reader
/// let bank = Bank::from_reader(File::open("factory.syx")?)?;
///
/// for program in &bank {
///     println!("{program}: volume {}", u8::from(program.parameters.volume));
/// }
/// # Ok::<(), anyhow::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Bank {
    programs: Vec<Program>,
}

impl Bank {
    /// The bytes every OB-8 dump starts with
    pub const MAGIC: [u8; 4] = [0xF0, 0x10, 0x01, 0x01];

    /// Decode a bank from the bytes of a dump
    ///
    /// The dump is only decoded if it consists of whole program blocks and starts with
    /// [`Bank::MAGIC`]. There is no partial decoding.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, FormatError> {
        if bytes.len() % Program::LEN != 0 {
            return Err(FormatError::IncorrectSize { len: bytes.len() });
        }

        if bytes.get(..Self::MAGIC.len()) != Some(Self::MAGIC.as_slice()) {
            return Err(FormatError::IncorrectMagic);
        }

        let programs = bytes
            .chunks_exact(Program::LEN)
            .filter_map(|block| block.try_into().ok())
            .map(Program::from_block)
            .collect();

        Ok(Self { programs })
    }

    /// Deserialize a bank from an arbitrary I/O reader
    ///
    /// The reader is read until its end.
    pub fn from_reader<R>(mut reader: R) -> Result<Self, FromReaderError>
    where
        R: Read,
    {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;

        Ok(Self::from_bytes(&bytes)?)
    }

    /// Deserialize a bank from a path on disk (.syx)
    pub fn from_path<P>(path: P) -> Result<Self, FromPathError>
    where
        P: AsRef<Path>,
    {
        let file = File::open(path)?;
        let bank = Self::from_reader(file)?;

        Ok(bank)
    }

    /// The programs, in dump order
    pub fn programs(&self) -> &[Program] {
        &self.programs
    }

    /// The number of programs in the bank
    pub fn len(&self) -> usize {
        self.programs.len()
    }

    /// Does the bank contain any programs at all?
    pub fn is_empty(&self) -> bool {
        self.programs.is_empty()
    }

    /// The program at a position in the dump
    pub fn get(&self, position: usize) -> Option<&Program> {
        self.programs.get(position)
    }

    /// Find the first program stored with a specific program index
    pub fn find(&self, index: u8) -> Option<&Program> {
        self.programs.iter().find(|program| program.index == index)
    }

    /// Iterate over the programs, in dump order
    pub fn iter(&self) -> slice::Iter<'_, Program> {
        self.programs.iter()
    }
}

impl<'a> TryFrom<&'a [u8]> for Bank {
    type Error = FormatError;

    #[inline]
    fn try_from(bytes: &'a [u8]) -> Result<Self, Self::Error> {
        Self::from_bytes(bytes)
    }
}

impl<'a> IntoIterator for &'a Bank {
    type Item = &'a Program;
    type IntoIter = slice::Iter<'a, Program>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for Bank {
    type Item = Program;
    type IntoIter = std::vec::IntoIter<Program>;

    fn into_iter(self) -> Self::IntoIter {
        self.programs.into_iter()
    }
}

/// The bytes passed to [`Bank::from_bytes()`] are not an OB-8 dump
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormatError {
    /// A dump consists of whole program blocks only
    #[error("This does not appear to be an OB-8 sysex file: {len} bytes is not a multiple of 60")]
    IncorrectSize { len: usize },

    /// The dump doesn't start with [`Bank::MAGIC`]
    #[error("This does not appear to be an OB-8 sysex file: the header is incorrect")]
    IncorrectMagic,
}

/// Errors that might be returned from [`Bank::from_reader()`]
#[derive(Debug, Error)]
pub enum FromReaderError {
    /// Reading the bytes failed
    #[error("Something failed with I/O")]
    Read(#[from] io::Error),

    /// The bytes were read, but aren't an OB-8 dump
    #[error("Decoding the bank failed")]
    Format(#[from] FormatError),
}

/// Errors that might be returned from [`Bank::from_path()`]
#[derive(Debug, Error)]
pub enum FromPathError {
    /// Opening the file itself failed
    #[error("Opening the file failed")]
    FileOpen(#[from] io::Error),

    /// Deserialization failed
    #[error("Reading the bank from file failed")]
    Read(#[from] FromReaderError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::program::{Param, Value};
    use std::io::Cursor;
    use ux::u6;

    const FIXTURE: &[u8] = include_bytes!("../test/three_programs.syx");

    fn empty_block(index: u8) -> Vec<u8> {
        let mut block = vec![0; Program::LEN];
        block[..4].copy_from_slice(&Bank::MAGIC);
        block[4] = index;
        block[59] = 0xF7;
        block
    }

    #[test]
    fn fixture() {
        let bank = Bank::from_reader(Cursor::new(FIXTURE)).expect("could not decode bank");
        assert_eq!(bank.len(), 3);

        let first = &bank.programs()[0];
        assert_eq!(first.index, 0);
        assert_eq!(first.to_string(), "A-1");
        assert_eq!(first.parameters.volume, u6::new(50));
        assert_eq!(first.parameters.bend_amount, u6::new(12));
        assert_eq!(first.parameters.vcf_frequency, u6::new(45));
        assert_eq!(first.parameters.vcf_resonance, u6::new(20));
        assert_eq!(first.parameters.lfo_wave.value(), 0b011);
        assert!(first.parameters.osc1_on);
        assert!(first.parameters.four_pole);
        assert!(!first.parameters.noise);

        let second = &bank.programs()[1];
        assert_eq!(second.index, 23);
        assert_eq!(second.to_string(), "AB-8");
        assert_eq!(second.parameters.osc2_pulse_width, u6::new(37));
        assert!(second.parameters.unison);
        assert!(second.parameters.osc2_half);
        assert!(!second.parameters.osc2_on);
        assert_eq!(second.parameters.trig_lfo_wave.value(), 0b100);

        let third = &bank.programs()[2];
        assert_eq!(third.index, 119);
        assert_eq!(third.to_string(), "ABCD-8");
        for (param, value) in third.parameters.iter() {
            match value {
                Value::Knob(value) => assert_eq!(value, u6::MAX, "{}", param.name()),
                Value::Selector(_) => {}
                Value::Flag(on) => assert!(on, "{}", param.name()),
            }
        }
    }

    #[test]
    fn one_empty_program() {
        let bank = Bank::from_bytes(&empty_block(0x10)).unwrap();
        assert_eq!(bank.len(), 1);

        let program = &bank.programs()[0];
        assert_eq!(program.index, 16);
        assert_eq!(program.group().to_string(), "AB");
        assert_eq!(program.number(), 1);
        assert_eq!(program.parameters.iter().count(), Param::ALL.len());
        assert!(program.parameters.iter().all(|(_, value)| value.as_u8() == 0));
    }

    #[test]
    fn index_is_the_stored_byte() {
        let mut bytes = empty_block(42);
        bytes.extend(empty_block(3));

        let bank = Bank::try_from(bytes.as_slice()).unwrap();
        assert_eq!(bank.iter().map(|program| program.index).collect::<Vec<_>>(), [42, 3]);
        assert_eq!(bank.find(3), bank.get(1));
        assert_eq!(bank.find(4), None);
    }

    #[test]
    fn deterministic() {
        assert_eq!(Bank::from_bytes(FIXTURE), Bank::from_bytes(FIXTURE));
    }

    #[test]
    fn incorrect_size() {
        assert_eq!(
            Bank::from_bytes(&FIXTURE[..59]),
            Err(FormatError::IncorrectSize { len: 59 })
        );

        assert_eq!(
            Bank::from_bytes(&FIXTURE[..61]),
            Err(FormatError::IncorrectSize { len: 61 })
        );
    }

    #[test]
    fn incorrect_magic() {
        let mut bytes = FIXTURE.to_vec();
        bytes[1] = 0x42;
        assert_eq!(Bank::from_bytes(&bytes), Err(FormatError::IncorrectMagic));
    }

    #[test]
    fn empty() {
        assert_eq!(Bank::from_bytes(&[]), Err(FormatError::IncorrectMagic));
    }

    #[test]
    fn reader_errors() {
        assert!(matches!(
            Bank::from_reader(Cursor::new(&FIXTURE[..30])),
            Err(FromReaderError::Format(FormatError::IncorrectSize { len: 30 }))
        ));

        assert!(matches!(
            Bank::from_path("this/path/does/not/exist.syx"),
            Err(FromPathError::FileOpen(_))
        ));
    }
}

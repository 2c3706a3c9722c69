//! A single OB-8 program and its settings

pub mod layout;

mod param;
mod parameters;

pub use param::{Kind, Param, Section, Value};
pub use parameters::{LfoWave, OscWave, Parameters};

use crate::nibble::combine_pairs;
use layout::DATA_LEN;
use std::fmt;

/// One decoded OB-8 program (a patch)
///
/// In a dump every program takes up a block of [`Program::LEN`] bytes: a sysex header, the
/// program index and 27 nibble-split data bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    /// The program slot as stored in the dump
    ///
    /// This is the raw byte found in the block, and need not match the position of the
    /// program within the dump.
    pub index: u8,

    /// The decoded settings
    pub parameters: Parameters,
}

impl Program {
    /// The number of bytes a program takes up in a dump
    pub const LEN: usize = 60;

    /// Where the program index is stored in a block
    const INDEX_OFFSET: usize = 4;

    /// Where the nibble-split program data starts in a block
    const DATA_OFFSET: usize = 5;

    /// Decode a program from its block in a dump
    pub fn from_block(block: &[u8; Self::LEN]) -> Self {
        let mut data = [0; DATA_LEN];
        for (dest, byte) in data
            .iter_mut()
            .zip(combine_pairs(&block[Self::DATA_OFFSET..]))
        {
            *dest = byte;
        }

        Self {
            index: block[Self::INDEX_OFFSET],
            parameters: Parameters::from_data(&data),
        }
    }

    /// The group(s) the program is filed under on the panel
    pub fn group(&self) -> Group {
        Group::from_index(self.index)
    }

    /// The program number (1 - 8) within its group
    pub fn number(&self) -> u8 {
        self.index % 8 + 1
    }

    /// The 1-based program count, as shown next to the group and number in listings
    pub fn position(&self) -> u16 {
        self.index as u16 + 1
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}-{}", self.group(), self.number())
    }
}

/// The group buttons a program is selected with
///
/// The OB-8 has four group buttons (A through D) and stores 15 groups of 8 programs, each
/// group being a combination of those buttons. The group for a program index is `index / 8 + 1`
/// interpreted as a bit mask, bit 0 being A.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Group(u8);

impl Group {
    /// The group button letters, in bit order
    pub const LETTERS: [char; 4] = ['A', 'B', 'C', 'D'];

    /// Derive the group from a program index
    ///
    /// Only the four group bits are kept, so indices of 120 and up (which the OB-8 itself
    /// doesn't have) end up in an empty group.
    pub const fn from_index(index: u8) -> Self {
        Self((index / 8 + 1) & 0xF)
    }

    /// The group buttons as a bit mask, bit 0 being A
    pub const fn mask(&self) -> u8 {
        self.0
    }

    /// Is no group button part of this group?
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Is a specific group button (`'A'` through `'D'`) part of this group?
    pub fn contains(&self, letter: char) -> bool {
        Self::LETTERS
            .iter()
            .position(|candidate| *candidate == letter)
            .is_some_and(|bit| self.0 & (1 << bit) != 0)
    }

    /// The letters of the group buttons in this group, in alphabetical order
    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        Self::LETTERS
            .iter()
            .enumerate()
            .filter(move |(bit, _)| self.0 & (1 << bit) != 0)
            .map(|(_, letter)| *letter)
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.letters().try_for_each(|letter| write!(f, "{letter}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ux::u6;

    fn block(index: u8, data: &[u8; DATA_LEN]) -> [u8; Program::LEN] {
        let mut block = [0; Program::LEN];
        block[..4].copy_from_slice(&[0xF0, 0x10, 0x01, 0x01]);
        block[4] = index;
        for (position, byte) in data.iter().enumerate() {
            block[5 + position * 2] = byte & 0xF;
            block[6 + position * 2] = byte >> 4;
        }
        block[59] = 0xF7;
        block
    }

    #[test]
    fn groups() {
        assert_eq!(Group::from_index(0).to_string(), "A");
        assert_eq!(Group::from_index(7).to_string(), "A");
        assert_eq!(Group::from_index(8).to_string(), "B");
        assert_eq!(Group::from_index(16).to_string(), "AB");
        assert_eq!(Group::from_index(23).to_string(), "AB");
        assert_eq!(Group::from_index(56).to_string(), "D");
        assert_eq!(Group::from_index(119).to_string(), "ABCD");
        assert!(Group::from_index(120).is_empty());
        assert_eq!(Group::from_index(255).to_string(), "");
    }

    #[test]
    fn group_letters() {
        let group = Group::from_index(40);
        assert_eq!(group.mask(), 0b0110);
        assert!(!group.contains('A'));
        assert!(group.contains('B'));
        assert!(group.contains('C'));
        assert!(!group.contains('D'));
        assert!(!group.contains('E'));
        assert_eq!(group.letters().collect::<String>(), "BC");
    }

    #[test]
    fn numbers() {
        let program = |index| Program {
            index,
            parameters: Parameters::default(),
        };

        assert_eq!(program(0).number(), 1);
        assert_eq!(program(7).number(), 8);
        assert_eq!(program(8).number(), 1);
        assert_eq!(program(23).number(), 8);
        assert_eq!(program(23).position(), 24);
        assert_eq!(program(255).position(), 256);
        assert_eq!(program(23).to_string(), "AB-8");
    }

    #[test]
    fn from_block() {
        let mut data = [0; DATA_LEN];
        data[2] = (33 << 2) | 0b11;
        data[12] = 0x3;
        data[13] = 0x1;
        data[14] = 0x2;

        let program = Program::from_block(&block(16, &data));
        assert_eq!(program.index, 16);
        assert_eq!(program.to_string(), "AB-1");
        assert_eq!(program.parameters.vcf_decay, u6::new(33));
        assert!(program.parameters.filter_fm);
        assert!(program.parameters.osc2_fm);
        assert_eq!(program.parameters.volume, u6::new(54));
    }

    #[test]
    fn from_empty_block() {
        let program = Program::from_block(&block(16, &[0; DATA_LEN]));
        assert_eq!(program.index, 16);
        assert_eq!(program.group().to_string(), "AB");
        assert_eq!(program.number(), 1);

        for (param, value) in program.parameters.iter() {
            match value {
                Value::Flag(on) => assert!(!on, "{}", param.name()),
                value => assert_eq!(value.as_u8(), 0, "{}", param.name()),
            }
        }
    }
}

//! The bit layout of packed OB-8 program data
//!
//! After nibble recombination, a program consists of 27 data bytes. The top six bits of almost
//! every byte hold a knob position (0 - 63), while the bottom two bits hold either two switches
//! or a slice of a wider value that is spread out over several bytes (the LFO wave selectors,
//! program volume and the osc 2 pulse width).
//!
//! [`LAYOUT`] describes, per byte, which bits go where. Decoding a program is nothing more than
//! applying every [`Extract`] in the table and OR'ing the results into their parameters.

use super::Param::{self, *};

/// The number of (nibble-combined) data bytes in a program
pub const DATA_LEN: usize = 27;

/// A selection of bits within a packed data byte
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bits {
    /// Bits 2 through 7, shifted down
    High,

    /// Bits 0 and 1
    Low,

    /// Bit 1, shifted down
    Bit1,

    /// Bit 0
    Bit0,
}

impl Bits {
    /// Read the selected bits from a byte, right-aligned
    pub const fn read(self, byte: u8) -> u8 {
        match self {
            Bits::High => byte >> 2,
            Bits::Low => byte & 0x3,
            Bits::Bit1 => (byte >> 1) & 0x1,
            Bits::Bit0 => byte & 0x1,
        }
    }
}

/// A single rule moving bits from a data byte into a parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Extract {
    /// The destination parameter
    pub param: Param,

    /// The bits read from the source byte
    pub bits: Bits,

    /// How far the read bits are shifted up within the destination
    pub shift: u8,
}

impl Extract {
    /// The contribution of this rule to its parameter, for a given data byte
    pub const fn apply(&self, byte: u8) -> u8 {
        self.bits.read(byte) << self.shift
    }
}

const fn knob(param: Param) -> Extract {
    Extract {
        param,
        bits: Bits::High,
        shift: 0,
    }
}

const fn bit(param: Param, bits: Bits) -> Extract {
    Extract {
        param,
        bits,
        shift: 0,
    }
}

const fn part(param: Param, bits: Bits, shift: u8) -> Extract {
    Extract { param, bits, shift }
}

/// Per data byte, the rules that decode it
#[rustfmt::skip]
pub const LAYOUT: [&[Extract]; DATA_LEN] = [
    /*  0 */ &[knob(VcfRelease), part(LfoWave, Bits::Low, 1)],
    /*  1 */ &[knob(VcaRelease), part(LfoWave, Bits::Bit1, 0), bit(Unison, Bits::Bit0)],
    /*  2 */ &[knob(VcfDecay), bit(FilterFm, Bits::Bit1), bit(Osc2Fm, Bits::Bit0)],
    /*  3 */ &[knob(VcaDecay), bit(Osc2Wave, Bits::Low)],
    /*  4 */ &[knob(VcfAttack), bit(Osc1Wave, Bits::Low)],
    /*  5 */ &[knob(VcaAttack), bit(Osc2Pwm, Bits::Bit1), bit(Osc1Pwm, Bits::Bit0)],
    /*  6 */ &[knob(VcfSustain), bit(Noise, Bits::Bit1), bit(FourPole, Bits::Bit0)],
    /*  7 */ &[knob(VcaSustain), bit(Osc2On, Bits::Bit1), bit(Osc2Half, Bits::Bit0)],
    /*  8 */ &[knob(VcfModulation), bit(Osc1On, Bits::Bit1), bit(KbdTrack, Bits::Bit0)],
    /*  9 */ &[knob(VcfResonance), bit(Osc1PwmInvert, Bits::Bit1), bit(Osc1FmInvert, Bits::Bit0)],
    /* 10 */ &[knob(PulseWidth), bit(VcaModulation, Bits::Bit1), bit(FilterEnvelope, Bits::Bit0)],
    /* 11 */ &[knob(LfoRate), bit(Sync, Bits::Bit1), bit(Osc1Fm, Bits::Bit0)],
    /* 12 */ &[knob(FmAmount), part(Volume, Bits::Low, 4)],
    /* 13 */ &[knob(PwmAmount), part(Volume, Bits::Low, 2)],
    /* 14 */ &[knob(Portamento), part(Volume, Bits::Low, 0)],
    /* 15 */ &[knob(Osc2Detune), part(Osc2PulseWidth, Bits::Low, 4)],
    /* 16 */ &[knob(VcfFrequency), part(Osc2PulseWidth, Bits::Low, 2)],
    /* 17 */ &[knob(Osc2Frequency), part(Osc2PulseWidth, Bits::Low, 0)],
    /* 18 */ &[knob(Osc1Frequency), bit(Spare, Bits::Bit1), bit(Legato, Bits::Bit0)],
    /* 19 */ &[knob(LfoTrigPoint), part(TrigLfoWave, Bits::Low, 1)],
    /* 20 */ &[knob(PedalSustain), part(TrigLfoWave, Bits::Bit1, 0), bit(PortamentoBend, Bits::Bit0)],
    /* 21 */ &[knob(FmAttack), bit(LfoTrack, Bits::Bit1), bit(FmDelayInvert, Bits::Bit0)],
    /* 22 */ &[knob(PwmAttack), bit(PortamentoQuantize, Bits::Bit1), bit(PortamentoMatch, Bits::Bit0)],
    /* 23 */ &[knob(FmDelay), bit(LfoPhase180, Bits::Bit1), bit(LfoPhase90, Bits::Bit0)],
    /* 24 */ &[knob(PwmDelay), bit(PwmDelayInvert, Bits::Bit1), bit(PwmQuantize, Bits::Bit0)],
    /* 25 */ &[knob(VoiceDetune), bit(ExponentialPortamento, Bits::Bit1), bit(ConstantPortamento, Bits::Bit0)],
    /* 26 */ &[knob(BendAmount), bit(LfoEnvelopeMod, Bits::Bit1), bit(FmQuantize, Bits::Bit0)],
];

/// Run every rule in [`LAYOUT`] over the data bytes, collecting raw values per [`Param`]
///
/// The result is indexed by `Param as usize`. Derived parameters are left at zero.
pub fn unpack(data: &[u8; DATA_LEN]) -> [u8; Param::ALL.len()] {
    data.iter()
        .zip(LAYOUT)
        .flat_map(|(byte, rules)| rules.iter().map(move |rule| (rule, *byte)))
        .fold([0; Param::ALL.len()], |mut raw, (rule, byte)| {
            raw[rule.param as usize] |= rule.apply(byte);
            raw
        })
}

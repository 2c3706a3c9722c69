//! The closed set of parameter keys a [`Program`](super::Program) carries

use std::fmt;
use ux::u6;

macro_rules! params {
    ($($variant:ident => $name:literal, $label:literal, $kind:ident, $section:ident, $page:literal;)*) => {
        /// Every parameter key of an OB-8 program
        ///
        /// This covers both the fields that are decoded straight from the packed program data
        /// and the switch states derived from the wave selectors. The declaration order follows
        /// the front panel, page 1 before page 2.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Param {
            $($variant,)*
        }

        impl Param {
            /// All parameter keys, in panel order
            pub const ALL: &'static [Param] = &[$(Param::$variant,)*];

            /// The name used for the parameter in the OB-8 documentation, e.g. `vcfRel`
            pub const fn name(self) -> &'static str {
                match self {
                    $(Param::$variant => $name,)*
                }
            }

            /// A human readable label, as printed on (or near) the panel
            pub const fn label(self) -> &'static str {
                match self {
                    $(Param::$variant => $label,)*
                }
            }

            /// What kind of values this parameter holds
            pub const fn kind(self) -> Kind {
                match self {
                    $(Param::$variant => Kind::$kind,)*
                }
            }

            /// The panel section the parameter belongs to
            pub const fn section(self) -> Section {
                match self {
                    $(Param::$variant => Section::$section,)*
                }
            }

            /// The panel page (1 or 2) the parameter is edited on
            pub const fn page(self) -> u8 {
                match self {
                    $(Param::$variant => $page,)*
                }
            }
        }
    };
}

params! {
    Volume => "volume", "Program Volume", Knob, Master, 1;
    BendAmount => "bendAmount", "Bend Amount", Knob, Master, 1;

    Portamento => "portAmt", "Portamento", Knob, Control, 1;
    Unison => "unison", "Unison", Flag, Control, 1;
    Osc2Detune => "osc2Detune", "Osc 2 Detune", Knob, Control, 1;

    LfoRate => "lfoFreq", "LFO Rate", Knob, Modulation, 1;
    FmAmount => "fmAmnt", "Mod Depth 1", Knob, Modulation, 1;
    PwmAmount => "pwmAmnt", "Mod Depth 2", Knob, Modulation, 1;
    LfoWave => "lfoWave", "LFO Wave", Selector, Modulation, 1;
    LfoWaveTriangle => "lfoWaveTri", "LFO Triangle", Flag, Modulation, 1;
    LfoWaveSquare => "lfoWaveSqr", "LFO Square", Flag, Modulation, 1;
    LfoWaveSampleHold => "lfoWaveSnH", "LFO S/H", Flag, Modulation, 1;
    Osc1Fm => "osc1FM", "Osc 1 Freq Mod", Flag, Modulation, 1;
    Osc2Fm => "osc2FM", "Osc 2 Freq Mod", Flag, Modulation, 1;
    FilterFm => "filterFM", "Filter Freq Mod", Flag, Modulation, 1;
    Osc1Pwm => "osc1PWM", "Osc 1 PWM", Flag, Modulation, 1;
    Osc2Pwm => "osc2PWM", "Osc 2 PWM", Flag, Modulation, 1;
    VcaModulation => "vcaMod", "Volume Mod", Flag, Modulation, 1;

    Osc1Frequency => "vco1Freq", "Osc 1 Frequency", Knob, Oscillators, 1;
    PulseWidth => "oscPWM", "Pulse Width", Knob, Oscillators, 1;
    Osc2Frequency => "vco2Freq", "Osc 2 Frequency", Knob, Oscillators, 1;
    Osc1Wave => "osc1Wave", "Osc 1 Wave", Selector, Oscillators, 1;
    Osc1WaveTriangle => "osc1WaveTri", "Osc 1 Triangle", Flag, Oscillators, 1;
    Osc1WaveSquare => "osc1WaveSqr", "Osc 1 Square", Flag, Oscillators, 1;
    Sync => "sync", "Sync", Flag, Oscillators, 1;
    FilterEnvelope => "fEnv", "Filter Env", Flag, Oscillators, 1;
    Osc2Wave => "osc2Wave", "Osc 2 Wave", Selector, Oscillators, 1;
    Osc2WaveTriangle => "osc2WaveTri", "Osc 2 Triangle", Flag, Oscillators, 1;
    Osc2WaveSquare => "osc2WaveSqr", "Osc 2 Square", Flag, Oscillators, 1;

    VcfFrequency => "vcfFreq", "Frequency", Knob, Filter, 1;
    VcfResonance => "vcfRes", "Resonance", Knob, Filter, 1;
    VcfModulation => "vcfMod", "Modulation", Knob, Filter, 1;
    Osc1On => "osc1On", "Osc 1", Flag, Filter, 1;
    Osc2Half => "osc2Half", "Osc 2 Half", Flag, Filter, 1;
    Osc2On => "osc2On", "Osc 2 Full", Flag, Filter, 1;
    Noise => "noise", "Noise", Flag, Filter, 1;
    FourPole => "fourPole", "4 Pole", Flag, Filter, 1;
    KbdTrack => "kbdTrack", "Kbd Track", Flag, Filter, 1;

    VcfAttack => "vcfAtk", "VCF Attack", Knob, Envelopes, 1;
    VcfDecay => "vcfDcy", "VCF Decay", Knob, Envelopes, 1;
    VcfSustain => "vcfSus", "VCF Sustain", Knob, Envelopes, 1;
    VcfRelease => "vcfRel", "VCF Release", Knob, Envelopes, 1;
    VcaAttack => "vcaAtk", "VCA Attack", Knob, Envelopes, 1;
    VcaDecay => "vcaDcy", "VCA Decay", Knob, Envelopes, 1;
    VcaSustain => "vcaSus", "VCA Sustain", Knob, Envelopes, 1;
    VcaRelease => "vcaRel", "VCA Release", Knob, Envelopes, 1;

    PortamentoBend => "portBend", "Portamento Bend", Flag, Control, 2;
    VoiceDetune => "voiceDetune", "Voice Detune", Knob, Control, 2;
    Spare => "spare", "Spare", Flag, Control, 2;

    TrigLfoWave => "trigLfoWave", "Trig Wave", Selector, Modulation, 2;
    TrigLfoWaveTriangle => "trigLfoWaveTri", "Trig Triangle", Flag, Modulation, 2;
    TrigLfoWaveSquare => "trigLfoWaveSqr", "Trig Square", Flag, Modulation, 2;
    TrigLfoWaveSampleHold => "trigLfoWaveSnH", "Trig S/H", Flag, Modulation, 2;
    FmQuantize => "fmQuant", "Quantize 1", Flag, Modulation, 2;
    PwmQuantize => "pwmQuant", "Quantize 2", Flag, Modulation, 2;
    FmDelayInvert => "fmDlyInvert", "Invert 1", Flag, Modulation, 2;
    PwmDelayInvert => "pwmDlyInvert", "Invert 2", Flag, Modulation, 2;
    LfoTrack => "lfoTrack", "LFO Track", Flag, Modulation, 2;
    LfoEnvelopeMod => "lfoRateDelay", "LFO Env Mod", Flag, Modulation, 2;

    LfoPhase90 => "lfoPhase90", "LFO Phase 90", Flag, Oscillators, 2;
    LfoPhase180 => "lfoPhase180", "LFO Phase 180", Flag, Oscillators, 2;
    Osc1FmInvert => "vco1180", "Osc 1 Freq Invert", Flag, Oscillators, 2;
    Osc1PwmInvert => "pw1180", "Osc 1 PWM Invert", Flag, Oscillators, 2;
    PortamentoMatch => "portMatch", "Portamento Match", Flag, Oscillators, 2;
    PortamentoQuantize => "portQuant", "Portamento Quantize", Flag, Oscillators, 2;
    Osc2PulseWidth => "vco2PW", "Osc 2 Pulse Width", Knob, Oscillators, 2;

    Legato => "legato", "Legato", Flag, Filter, 2;
    ConstantPortamento => "constPort", "Equal Time", Flag, Filter, 2;
    ExponentialPortamento => "expoPort", "Exponential", Flag, Filter, 2;

    FmDelay => "fmVibDelay", "Delay Mod 1", Knob, Envelopes, 2;
    FmAttack => "fmVibRaise", "Attack Mod 1", Knob, Envelopes, 2;
    LfoTrigPoint => "lfoTrigPoint", "LFO Trig Point", Knob, Envelopes, 2;
    PwmDelay => "pwmVibDelay", "Delay Mod 2", Knob, Envelopes, 2;
    PwmAttack => "pwmVibRaise", "Attack Mod 2", Knob, Envelopes, 2;
    PedalSustain => "pedalSustn", "Pedal Release", Knob, Envelopes, 2;
}

impl Param {
    /// Is this a switch state derived from a wave selector, rather than decoded directly?
    pub const fn is_derived(self) -> bool {
        matches!(
            self,
            Param::LfoWaveTriangle
                | Param::LfoWaveSquare
                | Param::LfoWaveSampleHold
                | Param::TrigLfoWaveTriangle
                | Param::TrigLfoWaveSquare
                | Param::TrigLfoWaveSampleHold
                | Param::Osc1WaveTriangle
                | Param::Osc1WaveSquare
                | Param::Osc2WaveTriangle
                | Param::Osc2WaveSquare
        )
    }

    /// Look up a parameter by its documented name (see [`Param::name()`])
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|param| param.name() == name)
    }
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// The kind of value a [`Param`] holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// A 6-bit continuous control (0 - 63), such as a knob or slider
    Knob,

    /// A wave selector, stored as a 2- or 3-bit value
    Selector,

    /// An on/off switch
    Flag,
}

/// The sections of the OB-8 front panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Section {
    Master,
    Control,
    Modulation,
    Oscillators,
    Filter,
    Envelopes,
}

impl Section {
    /// All sections, left to right on the panel
    pub const ALL: [Section; 6] = [
        Section::Master,
        Section::Control,
        Section::Modulation,
        Section::Oscillators,
        Section::Filter,
        Section::Envelopes,
    ];

    /// The parameters in this section on a given page, in panel order
    pub fn params(self, page: u8) -> impl Iterator<Item = Param> {
        Param::ALL
            .iter()
            .copied()
            .filter(move |param| param.section() == self && param.page() == page)
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Section::Master => "Master",
            Section::Control => "Control",
            Section::Modulation => "Modulation",
            Section::Oscillators => "Oscillators",
            Section::Filter => "Filter",
            Section::Envelopes => "Envelopes",
        };

        write!(f, "{name}")
    }
}

/// The value of a single [`Param`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Value {
    Knob(u6),
    Selector(u8),
    Flag(bool),
}

impl Value {
    /// The kind of parameter this value belongs to
    pub const fn kind(&self) -> Kind {
        match self {
            Value::Knob(_) => Kind::Knob,
            Value::Selector(_) => Kind::Selector,
            Value::Flag(_) => Kind::Flag,
        }
    }

    /// The raw integer value, with flags as 0 or 1
    pub fn as_u8(&self) -> u8 {
        match *self {
            Value::Knob(value) => u8::from(value),
            Value::Selector(value) => value,
            Value::Flag(value) => value as u8,
        }
    }

    /// Is this a flag that is switched on?
    pub const fn is_on(&self) -> bool {
        matches!(self, Value::Flag(true))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Flag(true) => write!(f, "on"),
            Value::Flag(false) => write!(f, "off"),
            value => write!(f, "{}", value.as_u8()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn keys_are_unique() {
        let names: HashSet<_> = Param::ALL.iter().map(|param| param.name()).collect();
        let labels: HashSet<_> = Param::ALL.iter().map(|param| param.label()).collect();

        assert_eq!(Param::ALL.len(), 75);
        assert_eq!(names.len(), Param::ALL.len());
        assert_eq!(labels.len(), Param::ALL.len());
    }

    #[test]
    fn all_is_in_declaration_order() {
        for (position, param) in Param::ALL.iter().enumerate() {
            assert_eq!(*param as usize, position);
        }
    }

    #[test]
    fn from_name() {
        assert_eq!(Param::from_name("vcfRel"), Some(Param::VcfRelease));
        assert_eq!(Param::from_name("lfoWaveSnH"), Some(Param::LfoWaveSampleHold));
        assert_eq!(Param::from_name("nope"), None);
    }

    #[test]
    fn derived_params_are_flags() {
        let derived: Vec<_> = Param::ALL.iter().filter(|param| param.is_derived()).collect();

        assert_eq!(derived.len(), 10);
        assert!(derived.iter().all(|param| param.kind() == Kind::Flag));
    }

    #[test]
    fn sections_cover_every_param() {
        let count: usize = [1, 2]
            .into_iter()
            .flat_map(|page| Section::ALL.into_iter().map(move |section| (section, page)))
            .map(|(section, page)| section.params(page).count())
            .sum();

        assert_eq!(count, Param::ALL.len());
        assert_eq!(Section::Master.params(1).collect::<Vec<_>>(), [
            Param::Volume,
            Param::BendAmount
        ]);
        assert_eq!(Section::Master.params(2).count(), 0);
    }

    #[test]
    fn value_display() {
        assert_eq!(Value::Knob(u6::new(42)).to_string(), "42");
        assert_eq!(Value::Selector(5).to_string(), "5");
        assert_eq!(Value::Flag(true).to_string(), "on");
        assert_eq!(Value::Flag(false).to_string(), "off");
        assert_eq!(Value::Flag(true).as_u8(), 1);
        assert!(!Value::Knob(u6::new(1)).is_on());
    }
}

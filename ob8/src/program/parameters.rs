use super::{
    Param, Value,
    layout::{DATA_LEN, unpack},
};
use ux::{u2, u3, u6};

/// The LFO wave selection, a 3-bit combination of switches
///
/// The OB-8 has no single wave knob, but three switches that can be combined: triangle,
/// square and sample-and-hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LfoWave(u3);

impl LfoWave {
    /// Wrap a raw 3-bit selector value
    pub const fn new(value: u3) -> Self {
        Self(value)
    }

    /// The raw selector value
    pub fn value(&self) -> u8 {
        u8::from(self.0)
    }

    pub fn triangle(&self) -> bool {
        self.value() & 0x1 != 0
    }

    pub fn square(&self) -> bool {
        self.value() & 0x2 != 0
    }

    pub fn sample_and_hold(&self) -> bool {
        self.value() & 0x4 != 0
    }
}

/// An oscillator wave selection, a 2-bit combination of the triangle and square switches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OscWave(u2);

impl OscWave {
    /// Wrap a raw 2-bit selector value
    pub const fn new(value: u2) -> Self {
        Self(value)
    }

    /// The raw selector value
    pub fn value(&self) -> u8 {
        u8::from(self.0)
    }

    pub fn triangle(&self) -> bool {
        self.value() & 0x1 != 0
    }

    pub fn square(&self) -> bool {
        self.value() & 0x2 != 0
    }
}

/// The full set of decoded settings for one program
///
/// Every field is present for every program; there is no such thing as an unset parameter.
/// Fields are named after what they control, see [`Param`] for the names the OB-8
/// documentation uses and [`Parameters::get()`] for access by key.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Parameters {
    pub volume: u6,
    pub bend_amount: u6,

    pub portamento: u6,
    pub unison: bool,
    pub osc2_detune: u6,
    pub voice_detune: u6,
    pub portamento_bend: bool,

    /// Byte 18, bit 1. Decoded but without a known function.
    pub spare: bool,

    pub lfo_rate: u6,
    pub fm_amount: u6,
    pub pwm_amount: u6,
    pub lfo_wave: LfoWave,
    pub trig_lfo_wave: LfoWave,
    pub osc1_fm: bool,
    pub osc2_fm: bool,
    pub filter_fm: bool,
    pub osc1_pwm: bool,
    pub osc2_pwm: bool,
    pub vca_modulation: bool,
    pub fm_quantize: bool,
    pub pwm_quantize: bool,
    pub fm_delay_invert: bool,
    pub pwm_delay_invert: bool,
    pub lfo_track: bool,
    pub lfo_envelope_mod: bool,

    pub osc1_frequency: u6,
    pub osc2_frequency: u6,
    pub pulse_width: u6,
    pub osc2_pulse_width: u6,
    pub osc1_wave: OscWave,
    pub osc2_wave: OscWave,
    pub sync: bool,
    pub filter_envelope: bool,
    pub lfo_phase_90: bool,
    pub lfo_phase_180: bool,
    pub osc1_fm_invert: bool,
    pub osc1_pwm_invert: bool,
    pub portamento_match: bool,
    pub portamento_quantize: bool,

    pub vcf_frequency: u6,
    pub vcf_resonance: u6,
    pub vcf_modulation: u6,
    pub osc1_on: bool,
    pub osc2_half: bool,
    pub osc2_on: bool,
    pub noise: bool,
    pub four_pole: bool,
    pub kbd_track: bool,
    pub legato: bool,
    pub constant_portamento: bool,
    pub exponential_portamento: bool,

    pub vcf_attack: u6,
    pub vcf_decay: u6,
    pub vcf_sustain: u6,
    pub vcf_release: u6,
    pub vca_attack: u6,
    pub vca_decay: u6,
    pub vca_sustain: u6,
    pub vca_release: u6,
    pub fm_delay: u6,
    pub fm_attack: u6,
    pub pwm_delay: u6,
    pub pwm_attack: u6,
    pub lfo_trig_point: u6,
    pub pedal_sustain: u6,
}

impl Parameters {
    /// Decode the 27 (nibble-combined) data bytes of a program
    pub fn from_data(data: &[u8; DATA_LEN]) -> Self {
        let raw = unpack(data);
        let knob = |param: Param| u6::new(raw[param as usize] & 0x3F);
        let flag = |param: Param| raw[param as usize] != 0;
        let lfo_wave = |param: Param| LfoWave::new(u3::new(raw[param as usize] & 0x7));
        let osc_wave = |param: Param| OscWave::new(u2::new(raw[param as usize] & 0x3));

        Self {
            volume: knob(Param::Volume),
            bend_amount: knob(Param::BendAmount),

            portamento: knob(Param::Portamento),
            unison: flag(Param::Unison),
            osc2_detune: knob(Param::Osc2Detune),
            voice_detune: knob(Param::VoiceDetune),
            portamento_bend: flag(Param::PortamentoBend),
            spare: flag(Param::Spare),

            lfo_rate: knob(Param::LfoRate),
            fm_amount: knob(Param::FmAmount),
            pwm_amount: knob(Param::PwmAmount),
            lfo_wave: lfo_wave(Param::LfoWave),
            trig_lfo_wave: lfo_wave(Param::TrigLfoWave),
            osc1_fm: flag(Param::Osc1Fm),
            osc2_fm: flag(Param::Osc2Fm),
            filter_fm: flag(Param::FilterFm),
            osc1_pwm: flag(Param::Osc1Pwm),
            osc2_pwm: flag(Param::Osc2Pwm),
            vca_modulation: flag(Param::VcaModulation),
            fm_quantize: flag(Param::FmQuantize),
            pwm_quantize: flag(Param::PwmQuantize),
            fm_delay_invert: flag(Param::FmDelayInvert),
            pwm_delay_invert: flag(Param::PwmDelayInvert),
            lfo_track: flag(Param::LfoTrack),
            lfo_envelope_mod: flag(Param::LfoEnvelopeMod),

            osc1_frequency: knob(Param::Osc1Frequency),
            osc2_frequency: knob(Param::Osc2Frequency),
            pulse_width: knob(Param::PulseWidth),
            osc2_pulse_width: knob(Param::Osc2PulseWidth),
            osc1_wave: osc_wave(Param::Osc1Wave),
            osc2_wave: osc_wave(Param::Osc2Wave),
            sync: flag(Param::Sync),
            filter_envelope: flag(Param::FilterEnvelope),
            lfo_phase_90: flag(Param::LfoPhase90),
            lfo_phase_180: flag(Param::LfoPhase180),
            osc1_fm_invert: flag(Param::Osc1FmInvert),
            osc1_pwm_invert: flag(Param::Osc1PwmInvert),
            portamento_match: flag(Param::PortamentoMatch),
            portamento_quantize: flag(Param::PortamentoQuantize),

            vcf_frequency: knob(Param::VcfFrequency),
            vcf_resonance: knob(Param::VcfResonance),
            vcf_modulation: knob(Param::VcfModulation),
            osc1_on: flag(Param::Osc1On),
            osc2_half: flag(Param::Osc2Half),
            osc2_on: flag(Param::Osc2On),
            noise: flag(Param::Noise),
            four_pole: flag(Param::FourPole),
            kbd_track: flag(Param::KbdTrack),
            legato: flag(Param::Legato),
            constant_portamento: flag(Param::ConstantPortamento),
            exponential_portamento: flag(Param::ExponentialPortamento),

            vcf_attack: knob(Param::VcfAttack),
            vcf_decay: knob(Param::VcfDecay),
            vcf_sustain: knob(Param::VcfSustain),
            vcf_release: knob(Param::VcfRelease),
            vca_attack: knob(Param::VcaAttack),
            vca_decay: knob(Param::VcaDecay),
            vca_sustain: knob(Param::VcaSustain),
            vca_release: knob(Param::VcaRelease),
            fm_delay: knob(Param::FmDelay),
            fm_attack: knob(Param::FmAttack),
            pwm_delay: knob(Param::PwmDelay),
            pwm_attack: knob(Param::PwmAttack),
            lfo_trig_point: knob(Param::LfoTrigPoint),
            pedal_sustain: knob(Param::PedalSustain),
        }
    }

    /// Look up the value of any parameter, decoded or derived
    pub fn get(&self, param: Param) -> Value {
        use Value::{Flag, Knob, Selector};

        match param {
            Param::Volume => Knob(self.volume),
            Param::BendAmount => Knob(self.bend_amount),

            Param::Portamento => Knob(self.portamento),
            Param::Unison => Flag(self.unison),
            Param::Osc2Detune => Knob(self.osc2_detune),

            Param::LfoRate => Knob(self.lfo_rate),
            Param::FmAmount => Knob(self.fm_amount),
            Param::PwmAmount => Knob(self.pwm_amount),
            Param::LfoWave => Selector(self.lfo_wave.value()),
            Param::LfoWaveTriangle => Flag(self.lfo_wave.triangle()),
            Param::LfoWaveSquare => Flag(self.lfo_wave.square()),
            Param::LfoWaveSampleHold => Flag(self.lfo_wave.sample_and_hold()),
            Param::Osc1Fm => Flag(self.osc1_fm),
            Param::Osc2Fm => Flag(self.osc2_fm),
            Param::FilterFm => Flag(self.filter_fm),
            Param::Osc1Pwm => Flag(self.osc1_pwm),
            Param::Osc2Pwm => Flag(self.osc2_pwm),
            Param::VcaModulation => Flag(self.vca_modulation),

            Param::Osc1Frequency => Knob(self.osc1_frequency),
            Param::PulseWidth => Knob(self.pulse_width),
            Param::Osc2Frequency => Knob(self.osc2_frequency),
            Param::Osc1Wave => Selector(self.osc1_wave.value()),
            Param::Osc1WaveTriangle => Flag(self.osc1_wave.triangle()),
            Param::Osc1WaveSquare => Flag(self.osc1_wave.square()),
            Param::Sync => Flag(self.sync),
            Param::FilterEnvelope => Flag(self.filter_envelope),
            Param::Osc2Wave => Selector(self.osc2_wave.value()),
            Param::Osc2WaveTriangle => Flag(self.osc2_wave.triangle()),
            Param::Osc2WaveSquare => Flag(self.osc2_wave.square()),

            Param::VcfFrequency => Knob(self.vcf_frequency),
            Param::VcfResonance => Knob(self.vcf_resonance),
            Param::VcfModulation => Knob(self.vcf_modulation),
            Param::Osc1On => Flag(self.osc1_on),
            Param::Osc2Half => Flag(self.osc2_half),
            Param::Osc2On => Flag(self.osc2_on),
            Param::Noise => Flag(self.noise),
            Param::FourPole => Flag(self.four_pole),
            Param::KbdTrack => Flag(self.kbd_track),

            Param::VcfAttack => Knob(self.vcf_attack),
            Param::VcfDecay => Knob(self.vcf_decay),
            Param::VcfSustain => Knob(self.vcf_sustain),
            Param::VcfRelease => Knob(self.vcf_release),
            Param::VcaAttack => Knob(self.vca_attack),
            Param::VcaDecay => Knob(self.vca_decay),
            Param::VcaSustain => Knob(self.vca_sustain),
            Param::VcaRelease => Knob(self.vca_release),

            Param::PortamentoBend => Flag(self.portamento_bend),
            Param::VoiceDetune => Knob(self.voice_detune),
            Param::Spare => Flag(self.spare),

            Param::TrigLfoWave => Selector(self.trig_lfo_wave.value()),
            Param::TrigLfoWaveTriangle => Flag(self.trig_lfo_wave.triangle()),
            Param::TrigLfoWaveSquare => Flag(self.trig_lfo_wave.square()),
            Param::TrigLfoWaveSampleHold => Flag(self.trig_lfo_wave.sample_and_hold()),
            Param::FmQuantize => Flag(self.fm_quantize),
            Param::PwmQuantize => Flag(self.pwm_quantize),
            Param::FmDelayInvert => Flag(self.fm_delay_invert),
            Param::PwmDelayInvert => Flag(self.pwm_delay_invert),
            Param::LfoTrack => Flag(self.lfo_track),
            Param::LfoEnvelopeMod => Flag(self.lfo_envelope_mod),

            Param::LfoPhase90 => Flag(self.lfo_phase_90),
            Param::LfoPhase180 => Flag(self.lfo_phase_180),
            Param::Osc1FmInvert => Flag(self.osc1_fm_invert),
            Param::Osc1PwmInvert => Flag(self.osc1_pwm_invert),
            Param::PortamentoMatch => Flag(self.portamento_match),
            Param::PortamentoQuantize => Flag(self.portamento_quantize),
            Param::Osc2PulseWidth => Knob(self.osc2_pulse_width),

            Param::Legato => Flag(self.legato),
            Param::ConstantPortamento => Flag(self.constant_portamento),
            Param::ExponentialPortamento => Flag(self.exponential_portamento),

            Param::FmDelay => Knob(self.fm_delay),
            Param::FmAttack => Knob(self.fm_attack),
            Param::LfoTrigPoint => Knob(self.lfo_trig_point),
            Param::PwmDelay => Knob(self.pwm_delay),
            Param::PwmAttack => Knob(self.pwm_attack),
            Param::PedalSustain => Knob(self.pedal_sustain),
        }
    }

    /// Iterate over every parameter and its value, in panel order
    pub fn iter(&self) -> impl Iterator<Item = (Param, Value)> + '_ {
        Param::ALL.iter().map(|param| (*param, self.get(*param)))
    }
}

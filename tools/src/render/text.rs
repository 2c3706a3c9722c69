//! The plain text report

use super::Renderer;
use ob8::{u6, Bank, Program};
use std::{io, path::Path};

/// Renders banks as a plain text report, laid out like the OB-8 front panel
///
/// Knobs are printed as their raw value (0 - 63), switches as `*` when on.
#[derive(Debug, Default)]
pub struct TextRenderer;

impl Renderer for TextRenderer {
    fn bank(&mut self, out: &mut dyn io::Write, path: &Path, bank: &Bank) -> io::Result<()> {
        writeln!(out, "{}", path.display())?;

        for program in bank {
            write_program(out, program)?;
            writeln!(out)?;
        }

        Ok(())
    }
}

fn on(flag: bool) -> char {
    if flag {
        '*'
    } else {
        ' '
    }
}

fn knob(value: u6) -> u8 {
    u8::from(value)
}

/// Write the report for a single program
pub fn write_program(out: &mut dyn io::Write, program: &Program) -> io::Result<()> {
    let p = &program.parameters;

    writeln!(out, "=== Program {}  ({}) ===", program, program.position())?;

    writeln!(out, "Master:")?;
    writeln!(
        out,
        "  Program_Volume:{}  Bend:{}",
        knob(p.volume),
        knob(p.bend_amount)
    )?;

    writeln!(out, "Control:")?;
    writeln!(out, "  Portamento:{}", knob(p.portamento))?;
    writeln!(out, "  Unison:{}", on(p.unison))?;
    writeln!(out, "  Osc2_Detune:{}", knob(p.osc2_detune))?;

    writeln!(out, "Modulation:")?;
    writeln!(
        out,
        "  LFO_Rate:{:<2}  Mod_Depth_1:{:<2}  Mod_Depth_2:{:<2}  LFO_Wave:{}",
        knob(p.lfo_rate),
        knob(p.fm_amount),
        knob(p.pwm_amount),
        p.lfo_wave.value()
    )?;
    writeln!(
        out,
        "  Wave_Tri:{}    Osc1_Frq:{}    Osc1_PWM:{}",
        on(p.lfo_wave.triangle()),
        on(p.osc1_fm),
        on(p.osc1_pwm)
    )?;
    writeln!(
        out,
        "  Wave_Sqr:{}    Osc2_Frq:{}    Osc2_PWM:{}",
        on(p.lfo_wave.square()),
        on(p.osc2_fm),
        on(p.osc2_pwm)
    )?;
    writeln!(
        out,
        "  Wave_S/H:{}  Filter_Frq:{}  Volume_Mod:{}",
        on(p.lfo_wave.sample_and_hold()),
        on(p.filter_fm),
        on(p.vca_modulation)
    )?;

    writeln!(out, "Oscillators:")?;
    writeln!(
        out,
        "  Osc1_Frq:{:<2}  Pulse_Width:{:<2}  Osc2_Frq:{:<2}  Osc1_Wave:{}  Osc2_Wave:{}",
        knob(p.osc1_frequency),
        knob(p.pulse_width),
        knob(p.osc2_frequency),
        p.osc1_wave.value(),
        p.osc2_wave.value()
    )?;
    writeln!(
        out,
        "  Osc1_Wave_Tri:{}  Osc1_Wave_Sqr:{}  Sync:{}  F-Env:{}  Osc2_Wave_Tri:{}  Osc2_Wave_Sqr:{}",
        on(p.osc1_wave.triangle()),
        on(p.osc1_wave.square()),
        on(p.sync),
        on(p.filter_envelope),
        on(p.osc2_wave.triangle()),
        on(p.osc2_wave.square())
    )?;

    writeln!(out, "Filter:")?;
    writeln!(
        out,
        "  Frequency:{:<2}  Resonance:{:<2}  Modulation:{:<2}",
        knob(p.vcf_frequency),
        knob(p.vcf_resonance),
        knob(p.vcf_modulation)
    )?;
    writeln!(
        out,
        "  Osc1_On:{}  Osc2_Half:{}  Osc2_Full:{}  Noise:{}  4_Pole:{}  Kbd_Track:{}",
        on(p.osc1_on),
        on(p.osc2_half),
        on(p.osc2_on),
        on(p.noise),
        on(p.four_pole),
        on(p.kbd_track)
    )?;

    writeln!(out, "Envelopes:")?;
    writeln!(
        out,
        "  VCF A:{:<2}  D:{:<2}  S:{:<2}  R:{:<2}",
        knob(p.vcf_attack),
        knob(p.vcf_decay),
        knob(p.vcf_sustain),
        knob(p.vcf_release)
    )?;
    writeln!(
        out,
        "  VCA A:{:<2}  D:{:<2}  S:{:<2}  R:{:<2}",
        knob(p.vca_attack),
        knob(p.vca_decay),
        knob(p.vca_sustain),
        knob(p.vca_release)
    )?;

    writeln!(out, "-- Page 2 --")?;

    writeln!(out, "Control:")?;
    writeln!(out, "  Portamento_Bend:{}", on(p.portamento_bend))?;
    writeln!(out, "  Voice_Detune:{}", knob(p.voice_detune))?;
    writeln!(out, "  Spare:{}", on(p.spare))?;

    writeln!(out, "Modulation:")?;
    writeln!(out, "  Trig_Wave:{}", p.trig_lfo_wave.value())?;
    writeln!(
        out,
        "  Trig_Wave_Tri:{}  Quantize_1:{}  Quantize_2:{}",
        on(p.trig_lfo_wave.triangle()),
        on(p.fm_quantize),
        on(p.pwm_quantize)
    )?;
    writeln!(
        out,
        "  Trig_Wave_Sqr:{}    Invert_1:{}    Invert_2:{}",
        on(p.trig_lfo_wave.square()),
        on(p.fm_delay_invert),
        on(p.pwm_delay_invert)
    )?;
    writeln!(
        out,
        "  Trig_Wave_S/H:{}   LFO_Track:{}  LFO_Env_Mod:{}",
        on(p.trig_lfo_wave.sample_and_hold()),
        on(p.lfo_track),
        on(p.lfo_envelope_mod)
    )?;

    writeln!(out, "Oscillators:")?;
    writeln!(
        out,
        "  LFO_Phase: 90:{}  180:{}",
        on(p.lfo_phase_90),
        on(p.lfo_phase_180)
    )?;
    writeln!(
        out,
        "  Osc1_LFO_Mod_Invert: Freq:{}  PWM:{}",
        on(p.osc1_fm_invert),
        on(p.osc1_pwm_invert)
    )?;
    writeln!(
        out,
        "  Portamento: Match:{}  Quantize:{}",
        on(p.portamento_match),
        on(p.portamento_quantize)
    )?;
    writeln!(out, "  Osc2_Pulse_Width:{}", knob(p.osc2_pulse_width))?;

    writeln!(out, "Filter:")?;
    writeln!(
        out,
        "  Portamento: Legato:{}  Equal_Time:{}  Exponential:{}",
        on(p.legato),
        on(p.constant_portamento),
        on(p.exponential_portamento)
    )?;

    writeln!(out, "Envelopes:")?;
    writeln!(
        out,
        "  Delay_Mod_1:{:<2}  Attack_Mod_1:{:<2}  LFO_Trig_Point:{:<2}",
        knob(p.fm_delay),
        knob(p.fm_attack),
        knob(p.lfo_trig_point)
    )?;
    writeln!(
        out,
        "  Delay_Mod_2:{:<2}  Attack_Mod_2:{:<2}  Pedal_Release:{:<2}",
        knob(p.pwm_delay),
        knob(p.pwm_attack),
        knob(p.pedal_sustain)
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{fixture, render_to_string};

    #[test]
    fn headers() {
        let bank = fixture();
        let text = render_to_string(TextRenderer, &[("factory.syx", &bank)]);

        assert!(text.starts_with("factory.syx\n=== Program A-1  (1) ===\n"));
        assert!(text.contains("=== Program AB-8  (24) ===\n"));
        assert!(text.contains("=== Program ABCD-8  (120) ===\n"));
        assert_eq!(text.matches("-- Page 2 --").count(), 3);
    }

    #[test]
    fn values() {
        let bank = fixture();
        let mut out = Vec::new();
        write_program(&mut out, &bank.programs()[0]).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("  Program_Volume:50  Bend:12\n"));
        assert!(text.contains("  Frequency:45  Resonance:20  Modulation:12\n"));
        assert!(text.contains("  Wave_Tri:*    Osc1_Frq:     Osc1_PWM:*\n"));
        assert!(text.contains("  Wave_S/H:   Filter_Frq:   Volume_Mod:*\n"));
    }

    #[test]
    fn osc2_half_and_full_are_separate() {
        let bank = fixture();
        let mut out = Vec::new();
        write_program(&mut out, &bank.programs()[1]).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("Osc2_Half:*  Osc2_Full: "));
    }
}

//! Machine readable output

use super::Renderer;
use ob8::{Bank, Parameters, Program, Value};
use serde::{Serialize, Serializer};
use std::{io, path::Path};

/// Renders banks as a JSON array, with one object per file
///
/// Parameters are keyed by their documented name (e.g. `vcfRel`). Switches become booleans, all
/// other values integers.
#[derive(Debug, Default)]
pub struct JsonRenderer {
    banks: Vec<serde_json::Value>,
}

impl Renderer for JsonRenderer {
    fn bank(&mut self, _out: &mut dyn io::Write, path: &Path, bank: &Bank) -> io::Result<()> {
        let report = BankReport {
            file: path.display().to_string(),
            programs: bank.iter().map(ProgramReport::from).collect(),
        };

        self.banks.push(serde_json::to_value(report)?);
        Ok(())
    }

    fn end(&mut self, out: &mut dyn io::Write) -> io::Result<()> {
        serde_json::to_writer_pretty(&mut *out, &self.banks)?;
        writeln!(out)
    }
}

#[derive(Serialize)]
struct BankReport<'a> {
    file: String,
    programs: Vec<ProgramReport<'a>>,
}

#[derive(Serialize)]
struct ProgramReport<'a> {
    index: u8,
    group: String,
    number: u8,

    #[serde(serialize_with = "parameters_serialize")]
    parameters: &'a Parameters,
}

impl<'a> From<&'a Program> for ProgramReport<'a> {
    fn from(program: &'a Program) -> Self {
        Self {
            index: program.index,
            group: program.group().to_string(),
            number: program.number(),
            parameters: &program.parameters,
        }
    }
}

fn parameters_serialize<S>(parameters: &&Parameters, s: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    s.collect_map(parameters.iter().map(|(param, value)| {
        let value = match value {
            Value::Flag(on) => serde_json::Value::Bool(on),
            value => serde_json::Value::from(value.as_u8()),
        };

        (param.name(), value)
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{fixture, render_to_string};
    use ob8::Param;

    #[test]
    fn document() {
        let bank = fixture();
        let json = render_to_string(JsonRenderer::default(), &[("factory.syx", &bank)]);
        let json: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(json[0]["file"], "factory.syx");
        assert_eq!(json[0]["programs"].as_array().unwrap().len(), 3);

        let program = &json[0]["programs"][1];
        assert_eq!(program["index"], 23);
        assert_eq!(program["group"], "AB");
        assert_eq!(program["number"], 8);
        assert_eq!(program["parameters"]["vco2PW"], 37);
        assert_eq!(program["parameters"]["unison"], true);
        assert_eq!(program["parameters"]["osc2On"], false);
        assert_eq!(program["parameters"]["trigLfoWaveSnH"], true);
        assert_eq!(
            program["parameters"].as_object().unwrap().len(),
            Param::ALL.len()
        );
    }

    #[test]
    fn no_banks() {
        let json = render_to_string(JsonRenderer::default(), &[]);
        assert_eq!(json, "[]\n");
    }
}

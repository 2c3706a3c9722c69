//! A self-contained HTML document

use super::Renderer;
use ob8::{Bank, Kind, Param, Program, Section, Value};
use std::{io, path::Path};

const STYLE: &str = r#"
body { background: #1b1b1b; color: #e8e2d0; font-family: "Helvetica Neue", Arial, sans-serif; margin: 2em; }
h1 { border-bottom: 2px solid #c8102e; padding-bottom: .25em; }
article { background: #262626; border-radius: 6px; margin: 1.5em 0; padding: 1em; }
article h2 { margin-top: 0; }
article h2 small { color: #999; font-weight: normal; }
.page { display: flex; flex-wrap: wrap; gap: 1em; margin-bottom: 1em; }
.page h3 { flex-basis: 100%; margin: .25em 0; font-size: .9em; color: #c8102e; text-transform: uppercase; }
table { border-collapse: collapse; min-width: 14em; }
caption { text-align: left; font-weight: bold; padding-bottom: .25em; }
th { text-align: left; font-weight: normal; padding: 2px 1em 2px 0; }
td { text-align: right; font-variant-numeric: tabular-nums; }
td.knob { position: relative; min-width: 5em; }
td.knob .bar { position: absolute; left: 0; top: 40%; height: 20%; background: #c8102e; opacity: .5; }
td.flag.on { color: #ff3b3b; }
td.flag.off { color: #555; }
"#;

/// Renders banks as a single HTML document
///
/// Every program gets its own article, with a table per panel section. Knobs show their raw value
/// along with a bar, switches are shown as lit or unlit indicators.
#[derive(Debug, Default)]
pub struct HtmlRenderer;

impl Renderer for HtmlRenderer {
    fn begin(&mut self, out: &mut dyn io::Write) -> io::Result<()> {
        writeln!(out, "<!DOCTYPE html>")?;
        writeln!(out, "<html lang=\"en\">")?;
        writeln!(out, "<head>")?;
        writeln!(out, "<meta charset=\"utf-8\">")?;
        writeln!(out, "<title>OB-8 programs</title>")?;
        writeln!(out, "<style>{STYLE}</style>")?;
        writeln!(out, "</head>")?;
        writeln!(out, "<body>")
    }

    fn bank(&mut self, out: &mut dyn io::Write, path: &Path, bank: &Bank) -> io::Result<()> {
        writeln!(out, "<section class=\"bank\">")?;
        writeln!(out, "<h1>{}</h1>", escape(&path.display().to_string()))?;

        for program in bank {
            write_program(out, program)?;
        }

        writeln!(out, "</section>")
    }

    fn end(&mut self, out: &mut dyn io::Write) -> io::Result<()> {
        writeln!(out, "</body>")?;
        writeln!(out, "</html>")
    }
}

fn write_program(out: &mut dyn io::Write, program: &Program) -> io::Result<()> {
    writeln!(out, "<article class=\"program\">")?;
    writeln!(
        out,
        "<h2>{} <small>({})</small></h2>",
        escape(&program.to_string()),
        program.position()
    )?;

    for page in [1, 2] {
        writeln!(out, "<div class=\"page\">")?;
        writeln!(out, "<h3>Page {page}</h3>")?;

        for section in Section::ALL {
            write_section(out, program, section, page)?;
        }

        writeln!(out, "</div>")?;
    }

    writeln!(out, "</article>")
}

fn write_section(
    out: &mut dyn io::Write,
    program: &Program,
    section: Section,
    page: u8,
) -> io::Result<()> {
    let params: Vec<Param> = section.params(page).collect();
    if params.is_empty() {
        return Ok(());
    }

    writeln!(out, "<table class=\"section\">")?;
    writeln!(out, "<caption>{section}</caption>")?;

    for param in params {
        write!(
            out,
            "<tr data-param=\"{}\"><th>{}</th>",
            param.name(),
            escape(param.label())
        )?;

        match program.parameters.get(param) {
            Value::Flag(on) => {
                let (class, glyph) = if on { ("on", "&#9679;") } else { ("off", "&#9675;") };
                write!(out, "<td class=\"flag {class}\" title=\"{class}\">{glyph}</td>")?;
            }
            value if param.kind() == Kind::Knob => {
                let percent = u32::from(value.as_u8()) * 100 / 63;
                write!(
                    out,
                    "<td class=\"knob\"><span class=\"bar\" style=\"width: {percent}%\"></span>{value}</td>"
                )?;
            }
            value => write!(out, "<td class=\"selector\">{value}</td>")?,
        }

        writeln!(out, "</tr>")?;
    }

    writeln!(out, "</table>")
}

/// Escape text for use in HTML content or attribute values
fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }

    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{fixture, render_to_string};

    #[test]
    fn document() {
        let bank = fixture();
        let html = render_to_string(HtmlRenderer, &[("a.syx", &bank), ("b.syx", &bank)]);

        assert!(html.starts_with("<!DOCTYPE html>\n"));
        assert!(html.trim_end().ends_with("</html>"));
        assert_eq!(html.matches("<section class=\"bank\">").count(), 2);
        assert_eq!(html.matches("<article class=\"program\">").count(), 6);
        assert!(html.contains("<h2>AB-8 <small>(24)</small></h2>"));
    }

    #[test]
    fn every_param_is_rendered() {
        let bank = fixture();
        let html = render_to_string(HtmlRenderer, &[("a.syx", &bank)]);

        for param in Param::ALL {
            let row = format!("<tr data-param=\"{}\"><th>{}</th>", param.name(), escape(param.label()));
            assert_eq!(html.matches(&row).count(), 3, "{}", param.name());
        }
    }

    #[test]
    fn values() {
        let bank = fixture();
        let mut out = Vec::new();
        write_program(&mut out, &bank.programs()[0]).unwrap();
        let html = String::from_utf8(out).unwrap();

        assert!(html.contains(
            "<tr data-param=\"volume\"><th>Program Volume</th><td class=\"knob\"><span class=\"bar\" style=\"width: 79%\"></span>50</td></tr>"
        ));
        assert!(html.contains(
            "<tr data-param=\"fourPole\"><th>4 Pole</th><td class=\"flag on\" title=\"on\">&#9679;</td></tr>"
        ));
        assert!(html.contains(
            "<tr data-param=\"noise\"><th>Noise</th><td class=\"flag off\" title=\"off\">&#9675;</td></tr>"
        ));
        assert!(html.contains(
            "<tr data-param=\"lfoWave\"><th>LFO Wave</th><td class=\"selector\">3</td></tr>"
        ));
    }

    #[test]
    fn escaping() {
        assert_eq!(escape("LFO S/H"), "LFO S/H");
        assert_eq!(escape("<a & 'b'>"), "&lt;a &amp; &#39;b&#39;&gt;");
    }
}

//! Output formats for decoded banks

mod html;
mod json;
mod text;

pub use html::HtmlRenderer;
pub use json::JsonRenderer;
pub use text::TextRenderer;

use ob8::Bank;
use std::{io, path::Path};

/// Something that turns a sequence of decoded banks into a document
///
/// A render always calls [`Renderer::begin()`] once, then [`Renderer::bank()`] for every
/// bank that decoded successfully, then [`Renderer::end()`].
pub trait Renderer {
    /// Write anything that precedes the first bank
    fn begin(&mut self, _out: &mut dyn io::Write) -> io::Result<()> {
        Ok(())
    }

    /// Render the programs in a bank, decoded from the file at `path`
    fn bank(&mut self, out: &mut dyn io::Write, path: &Path, bank: &Bank) -> io::Result<()>;

    /// Write anything that follows the last bank
    fn end(&mut self, _out: &mut dyn io::Write) -> io::Result<()> {
        Ok(())
    }
}

/// Render a set of banks into a buffer
#[cfg(test)]
pub(crate) fn render_to_string<R>(mut renderer: R, banks: &[(&str, &Bank)]) -> String
where
    R: Renderer,
{
    let mut out = Vec::new();
    renderer.begin(&mut out).unwrap();
    for (path, bank) in banks {
        renderer.bank(&mut out, Path::new(path), bank).unwrap();
    }
    renderer.end(&mut out).unwrap();

    String::from_utf8(out).unwrap()
}

#[cfg(test)]
pub(crate) fn fixture() -> Bank {
    Bank::from_bytes(include_bytes!("../../../ob8/test/three_programs.syx")).unwrap()
}

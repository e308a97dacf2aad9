pub mod markdown;

pub use markdown::MarkdownWriter;

use crate::label::Toolchain;
use anyhow::Result;
use std::io::Write;

/// Write the full report to `writer`, rendered for `toolchain`.
pub fn write_report<W: Write>(writer: W, toolchain: Toolchain) -> Result<()> {
    MarkdownWriter::new(writer, toolchain).write_report()
}

/// Render the full report to a string. Output is deterministic for a given
/// toolchain.
pub fn render_report(toolchain: Toolchain) -> Result<String> {
    let mut buf = Vec::new();
    MarkdownWriter::new(&mut buf, toolchain).write_report()?;
    Ok(String::from_utf8(buf)?)
}

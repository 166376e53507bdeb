//! Console rendering of the comparison report

use std::io::Write;

use anyhow::Result;
use termcolor::{Color, ColorSpec, WriteColor};

use super::Report;

/// Render the three report sections to a (possibly colored) writer.
pub fn render_console<W: WriteColor>(report: &Report, writer: &mut W) -> Result<()> {
    write_section_header(writer, "--- Differences on matching keys ---")?;
    for row in &report.differences {
        writeln!(writer, "{} | {}", row.key, row.differences)?;
    }

    write_section_header(writer, "--- Present in base only ---")?;
    for key in &report.only_in_base {
        writeln!(writer, "{}", key)?;
    }

    write_section_header(writer, "--- Present in compare only ---")?;
    for key in &report.only_in_compare {
        writeln!(writer, "{}", key)?;
    }

    Ok(())
}

fn write_section_header<W: WriteColor>(writer: &mut W, title: &str) -> Result<()> {
    writeln!(writer)?;
    writer.set_color(ColorSpec::new().set_bold(true).set_fg(Some(Color::Cyan)))?;
    writeln!(writer, "{}", title)?;
    writer.reset()?;
    Ok(())
}

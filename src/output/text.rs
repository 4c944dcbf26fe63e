//! Text output formatter for human-readable display

use crate::output::{CategoryReport, Highlighter, Severity};
use std::io::Write;

/// Indentation of lines within a category section
const LINE_INDENT: &str = "    ";

/// Text formatter for the dependency report
pub struct TextFormatter {
    highlighter: Box<dyn Highlighter>,
}

impl TextFormatter {
    /// Create a new text formatter with the given highlighter
    pub fn new(highlighter: Box<dyn Highlighter>) -> Self {
        Self { highlighter }
    }

    /// Write the line announcing the report
    pub fn format_intro(
        &self,
        repository_name: &str,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        let intro = format!("Generating dependency report for {}...", repository_name);
        writeln!(writer, "{}", self.highlighter.highlight(&intro, Severity::Info))
    }

    /// Write one category section
    pub fn format_category(
        &self,
        report: &CategoryReport,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        writeln!(
            writer,
            "{}",
            self.highlighter.highlight(&report.header(), Severity::Info)
        )?;

        for line in &report.lines {
            writeln!(
                writer,
                "{}{}",
                LINE_INDENT,
                self.highlighter.highlight(&line.to_string(), line.severity())
            )?;
        }

        Ok(())
    }
}

//! Template writer

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::CsvResult;
use crate::options::{CsvWriteOptions, LineTerminator};

/// Header-only template file writer
pub struct TemplateWriter;

impl TemplateWriter {
    /// Write a template to a file path
    pub fn write_file<P: AsRef<Path>>(
        path: P,
        headers: &[&str],
        options: &CsvWriteOptions,
    ) -> CsvResult<()> {
        let file = File::create(path)?;
        Self::write(file, headers, options)
    }

    /// Write a template to a writer
    pub fn write<W: Write>(writer: W, headers: &[&str], options: &CsvWriteOptions) -> CsvResult<()> {
        let terminator = match options.line_terminator {
            LineTerminator::LF => csv::Terminator::Any(b'\n'),
            LineTerminator::CRLF => csv::Terminator::CRLF,
            LineTerminator::CR => csv::Terminator::Any(b'\r'),
        };

        let mut csv_writer = csv::WriterBuilder::new()
            .delimiter(options.delimiter)
            .quote(options.quote)
            .terminator(terminator)
            .from_writer(writer);

        csv_writer.write_record(headers)?;
        csv_writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_exactly_one_header_row() {
        let mut buf = Vec::new();
        TemplateWriter::write(
            &mut buf,
            &["Invoice_Number", "Customer", "Amount"],
            &CsvWriteOptions::default(),
        )
        .unwrap();

        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text, "Invoice_Number,Customer,Amount\r\n");
    }

    #[test]
    fn test_fields_needing_quotes_are_quoted() {
        let mut buf = Vec::new();
        TemplateWriter::write(
            &mut buf,
            &["Plain", "With, Comma"],
            &CsvWriteOptions {
                line_terminator: LineTerminator::LF,
                ..Default::default()
            },
        )
        .unwrap();

        assert_eq!(String::from_utf8(buf).unwrap(), "Plain,\"With, Comma\"\n");
    }

    #[test]
    fn test_write_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("template.csv");
        TemplateWriter::write_file(&path, &["A", "B"], &CsvWriteOptions::default()).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text, "A,B\r\n");
        assert_eq!(text.lines().count(), 1);
    }
}

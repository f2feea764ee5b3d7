//! Table serialization.
//!
//! One writer per supported format, dispatched through the
//! [`TableWriter`] trait. Writers receive the enriched records in
//! their final order and emit the five public columns only.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

use crate::record::GlyphRecord;
use crate::FontsheetError;

/// CSV writer
pub mod csv;
/// HTML document writer
pub mod html;
/// JSON records writer
pub mod json;
/// Markdown pipe-table writer
pub mod markdown;
/// Excel workbook writer
pub mod xlsx;

/// Column headers shared by every writer, in output order.
pub const HEADERS: [&str; 5] = ["Character", "Unicode", "UnicodeName", "Block", "GlyphName"];

/// The supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableFormat {
    Csv,
    Xlsx,
    Json,
    Html,
    Markdown,
}

impl TableFormat {
    /// Resolves a format from a file extension (or format name).
    pub fn from_extension(extension: &str) -> Option<TableFormat> {
        match extension.to_ascii_lowercase().as_str() {
            "csv" => Some(TableFormat::Csv),
            "xlsx" => Some(TableFormat::Xlsx),
            "json" => Some(TableFormat::Json),
            "html" | "htm" => Some(TableFormat::Html),
            "md" | "markdown" => Some(TableFormat::Markdown),
            _ => None,
        }
    }

    /// Resolves a format from an output path's extension.
    pub fn for_path(path: &Path) -> Option<TableFormat> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(TableFormat::from_extension)
    }

    /// The canonical file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            TableFormat::Csv => "csv",
            TableFormat::Xlsx => "xlsx",
            TableFormat::Json => "json",
            TableFormat::Html => "html",
            TableFormat::Markdown => "md",
        }
    }

    fn writer(&self) -> Box<dyn TableWriter> {
        match self {
            TableFormat::Csv => Box::new(csv::CsvWriter),
            TableFormat::Xlsx => Box::new(xlsx::XlsxWriter),
            TableFormat::Json => Box::new(json::JsonWriter),
            TableFormat::Html => Box::new(html::HtmlWriter),
            TableFormat::Markdown => Box::new(markdown::MarkdownWriter),
        }
    }
}

impl FromStr for TableFormat {
    type Err = FontsheetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TableFormat::from_extension(s).ok_or_else(|| FontsheetError::UnknownFormat {
            name: s.to_string(),
        })
    }
}

/// Serializes a record sequence to one output format.
pub trait TableWriter {
    fn write(
        &self,
        records: &[GlyphRecord],
        output: &mut dyn Write,
    ) -> Result<(), FontsheetError>;
}

/// Writes `records` to `path` in the given format.
pub fn write_table(
    records: &[GlyphRecord],
    format: TableFormat,
    path: &Path,
) -> Result<(), FontsheetError> {
    let mut output = BufWriter::new(File::create(path)?);
    write_table_to(records, format, &mut output)?;
    output.flush()?;
    Ok(())
}

/// Writes `records` to an arbitrary sink in the given format.
pub fn write_table_to(
    records: &[GlyphRecord],
    format: TableFormat,
    output: &mut dyn Write,
) -> Result<(), FontsheetError> {
    format.writer().write(records, output)
}

#[cfg(test)]
pub(crate) fn sample_records() -> Vec<GlyphRecord> {
    vec![
        GlyphRecord {
            display_char: "A".to_string(),
            code_point: 0x41,
            unicode_name: "LATIN CAPITAL LETTER A".to_string(),
            block_name: "Basic Latin".to_string(),
            glyph_name: "A".to_string(),
            glyph_id: 36,
            category: "Lu",
        },
        GlyphRecord {
            display_char: "中".to_string(),
            code_point: 0x4E2D,
            unicode_name: "CJK UNIFIED IDEOGRAPH-4E2D".to_string(),
            block_name: "CJK Unified Ideographs".to_string(),
            glyph_name: "glyph_512".to_string(),
            glyph_id: 512,
            category: "Lo",
        },
    ]
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("csv", Some(TableFormat::Csv))]
    #[case("XLSX", Some(TableFormat::Xlsx))]
    #[case("json", Some(TableFormat::Json))]
    #[case("html", Some(TableFormat::Html))]
    #[case("htm", Some(TableFormat::Html))]
    #[case("md", Some(TableFormat::Markdown))]
    #[case("markdown", Some(TableFormat::Markdown))]
    #[case("pdf", None)]
    fn extension_resolution(#[case] extension: &str, #[case] expected: Option<TableFormat>) {
        assert_eq!(TableFormat::from_extension(extension), expected);
    }

    #[test]
    fn path_resolution_uses_the_extension() {
        assert_eq!(
            TableFormat::for_path(Path::new("/tmp/out.csv")),
            Some(TableFormat::Csv)
        );
        assert_eq!(TableFormat::for_path(Path::new("/tmp/out")), None);
    }

    #[test]
    fn unknown_format_names_error() {
        let result = TableFormat::from_str("parquet");
        assert!(matches!(
            result,
            Err(FontsheetError::UnknownFormat { name }) if name == "parquet"
        ));
    }
}

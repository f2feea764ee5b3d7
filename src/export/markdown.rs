//! Markdown pipe-table writer.

use std::io::Write;

use crate::export::{TableWriter, HEADERS};
use crate::record::{format_code_point, GlyphRecord};
use crate::FontsheetError;

pub struct MarkdownWriter;

impl TableWriter for MarkdownWriter {
    fn write(
        &self,
        records: &[GlyphRecord],
        output: &mut dyn Write,
    ) -> Result<(), FontsheetError> {
        write_row(output, HEADERS.iter().copied())?;
        write_row(output, HEADERS.iter().map(|_| "---"))?;
        for record in records {
            let cells = [
                escape(&record.display_char),
                format_code_point(record.code_point),
                escape(&record.unicode_name),
                escape(&record.block_name),
                escape(&record.glyph_name),
            ];
            write_row(output, cells.iter().map(String::as_str))?;
        }
        Ok(())
    }
}

fn write_row<'a>(
    output: &mut dyn Write,
    cells: impl Iterator<Item = &'a str>,
) -> Result<(), FontsheetError> {
    write!(output, "|")?;
    for cell in cells {
        write!(output, " {cell} |")?;
    }
    writeln!(output)?;
    Ok(())
}

// Pipes would break the table structure; newlines cannot appear inside
// a cell at all.
fn escape(text: &str) -> String {
    text.replace('|', "\\|").replace(['\r', '\n'], " ")
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::export::sample_records;
    use pretty_assertions::assert_eq;

    #[test]
    fn table_has_header_separator_and_rows() {
        let mut buffer = Vec::new();
        MarkdownWriter.write(&sample_records(), &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "| Character | Unicode | UnicodeName | Block | GlyphName |",
                "| --- | --- | --- | --- | --- |",
                "| A | U+0041 | LATIN CAPITAL LETTER A | Basic Latin | A |",
                "| 中 | U+4E2D | CJK UNIFIED IDEOGRAPH-4E2D | CJK Unified Ideographs | glyph_512 |",
            ]
        );
    }

    #[test]
    fn pipes_in_cells_are_escaped() {
        let mut record = sample_records().remove(0);
        record.glyph_name = "bar|baz".to_string();
        let mut buffer = Vec::new();
        MarkdownWriter.write(&[record], &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert!(text.contains("bar\\|baz"));
    }
}

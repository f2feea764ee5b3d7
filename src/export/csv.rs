//! CSV writer.
//!
//! Output is prefixed with a UTF-8 byte order mark so spreadsheet
//! applications detect the encoding instead of falling back to a
//! legacy code page.

use std::io::Write;

use crate::export::{TableWriter, HEADERS};
use crate::record::GlyphRecord;
use crate::FontsheetError;

const UTF8_BOM: &[u8] = b"\xef\xbb\xbf";

pub struct CsvWriter;

impl TableWriter for CsvWriter {
    fn write(
        &self,
        records: &[GlyphRecord],
        output: &mut dyn Write,
    ) -> Result<(), FontsheetError> {
        output.write_all(UTF8_BOM)?;
        let mut writer = csv::Writer::from_writer(output);
        if records.is_empty() {
            // serde-driven headers are only emitted alongside a row.
            writer.write_record(HEADERS)?;
        }
        for record in records {
            writer.serialize(record)?;
        }
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::export::sample_records;
    use pretty_assertions::assert_eq;

    #[test]
    fn output_has_bom_header_and_rows() {
        let mut buffer = Vec::new();
        CsvWriter.write(&sample_records(), &mut buffer).unwrap();
        assert_eq!(&buffer[..3], UTF8_BOM);
        let text = String::from_utf8(buffer[3..].to_vec()).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("Character,Unicode,UnicodeName,Block,GlyphName")
        );
        assert_eq!(
            lines.next(),
            Some("A,U+0041,LATIN CAPITAL LETTER A,Basic Latin,A")
        );
        assert_eq!(
            lines.next(),
            Some("中,U+4E2D,CJK UNIFIED IDEOGRAPH-4E2D,CJK Unified Ideographs,glyph_512")
        );
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn empty_input_still_writes_the_header() {
        let mut buffer = Vec::new();
        CsvWriter.write(&[], &mut buffer).unwrap();
        let text = String::from_utf8(buffer[3..].to_vec()).unwrap();
        assert_eq!(text.trim_end(), "Character,Unicode,UnicodeName,Block,GlyphName");
    }
}

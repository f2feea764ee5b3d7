//! Excel workbook writer.

use std::io::Write;

use rust_xlsxwriter::{Format, Workbook};

use crate::export::{TableWriter, HEADERS};
use crate::record::{format_code_point, GlyphRecord};
use crate::FontsheetError;

pub struct XlsxWriter;

impl TableWriter for XlsxWriter {
    fn write(
        &self,
        records: &[GlyphRecord],
        output: &mut dyn Write,
    ) -> Result<(), FontsheetError> {
        let mut workbook = Workbook::new();
        let bold = Format::new().set_bold();
        let worksheet = workbook.add_worksheet();
        for (column, header) in HEADERS.iter().enumerate() {
            worksheet.write_string_with_format(0, column as u16, *header, &bold)?;
        }
        for (row, record) in records.iter().enumerate() {
            let row = row as u32 + 1;
            worksheet.write_string(row, 0, record.display_char.as_str())?;
            worksheet.write_string(row, 1, format_code_point(record.code_point))?;
            worksheet.write_string(row, 2, record.unicode_name.as_str())?;
            worksheet.write_string(row, 3, record.block_name.as_str())?;
            worksheet.write_string(row, 4, record.glyph_name.as_str())?;
        }
        let buffer = workbook.save_to_buffer()?;
        output.write_all(&buffer)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::export::sample_records;

    #[test]
    fn output_is_a_zip_container() {
        let mut buffer = Vec::new();
        XlsxWriter.write(&sample_records(), &mut buffer).unwrap();
        // XLSX files are ZIP archives.
        assert_eq!(&buffer[..2], b"PK");
    }

    #[test]
    fn empty_input_still_produces_a_workbook() {
        let mut buffer = Vec::new();
        XlsxWriter.write(&[], &mut buffer).unwrap();
        assert_eq!(&buffer[..2], b"PK");
    }
}

//! JSON writer: an array of records, one object per row, pretty
//! printed.

use std::io::Write;

use crate::export::TableWriter;
use crate::record::GlyphRecord;
use crate::FontsheetError;

pub struct JsonWriter;

impl TableWriter for JsonWriter {
    fn write(
        &self,
        records: &[GlyphRecord],
        output: &mut dyn Write,
    ) -> Result<(), FontsheetError> {
        serde_json::to_writer_pretty(output, records)?;
        Ok(())
    }
}

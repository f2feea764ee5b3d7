//! HTML document writer.
//!
//! Emits a complete, self-contained document: inline table styling, a
//! generation timestamp, and one row per record.

use std::io::Write;

use chrono::Local;

use crate::export::{TableWriter, HEADERS};
use crate::record::{format_code_point, GlyphRecord};
use crate::FontsheetError;

const STYLE: &str = r#"        table { border-collapse: collapse; width: 100%; }
        th, td { border: 1px solid #ddd; padding: 8px; text-align: left; }
        th { background-color: #f2f2f2; }
        tr:nth-child(even) { background-color: #f9f9f9; }
        .char-cell { font-family: monospace; font-size: 24px; text-align: center; }"#;

pub struct HtmlWriter;

impl TableWriter for HtmlWriter {
    fn write(
        &self,
        records: &[GlyphRecord],
        output: &mut dyn Write,
    ) -> Result<(), FontsheetError> {
        writeln!(output, "<!DOCTYPE html>")?;
        writeln!(output, "<html>")?;
        writeln!(output, "<head>")?;
        writeln!(output, "    <meta charset=\"UTF-8\">")?;
        writeln!(output, "    <title>Font Glyphs Table</title>")?;
        writeln!(output, "    <style>\n{STYLE}\n    </style>")?;
        writeln!(output, "</head>")?;
        writeln!(output, "<body>")?;
        writeln!(output, "    <h1>Font Glyphs Table</h1>")?;
        writeln!(
            output,
            "    <p>Generated: {}</p>",
            Local::now().format("%Y-%m-%d %H:%M:%S")
        )?;
        writeln!(output, "    <table class=\"font-glyphs-table\">")?;
        writeln!(output, "        <thead>")?;
        writeln!(output, "            <tr>")?;
        for header in HEADERS {
            writeln!(output, "                <th>{}</th>", escape(header))?;
        }
        writeln!(output, "            </tr>")?;
        writeln!(output, "        </thead>")?;
        writeln!(output, "        <tbody>")?;
        for record in records {
            writeln!(output, "            <tr>")?;
            writeln!(
                output,
                "                <td class=\"char-cell\">{}</td>",
                escape(&record.display_char)
            )?;
            writeln!(
                output,
                "                <td>{}</td>",
                escape(&format_code_point(record.code_point))
            )?;
            writeln!(output, "                <td>{}</td>", escape(&record.unicode_name))?;
            writeln!(output, "                <td>{}</td>", escape(&record.block_name))?;
            writeln!(output, "                <td>{}</td>", escape(&record.glyph_name))?;
            writeln!(output, "            </tr>")?;
        }
        writeln!(output, "        </tbody>")?;
        writeln!(output, "    </table>")?;
        writeln!(output, "</body>")?;
        writeln!(output, "</html>")?;
        Ok(())
    }
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::export::sample_records;
    use pretty_assertions::assert_eq;

    #[test]
    fn document_contains_styled_table_and_rows() {
        let mut buffer = Vec::new();
        HtmlWriter.write(&sample_records(), &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert!(text.starts_with("<!DOCTYPE html>"));
        assert!(text.contains("<table class=\"font-glyphs-table\">"));
        assert!(text.contains("<td class=\"char-cell\">A</td>"));
        assert!(text.contains("<td>U+4E2D</td>"));
        assert!(text.contains("<p>Generated: "));
        assert!(text.ends_with("</html>\n"));
    }

    #[test]
    fn cell_text_is_escaped() {
        assert_eq!(escape("a<b>&\"c\""), "a&lt;b&gt;&amp;&quot;c&quot;");
        let mut record = sample_records().remove(0);
        record.glyph_name = "less<than".to_string();
        let mut buffer = Vec::new();
        HtmlWriter.write(&[record], &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert!(text.contains("less&lt;than"));
        assert!(!text.contains("less<than"));
    }
}

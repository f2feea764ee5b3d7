#![deny(clippy::unwrap_used, clippy::expect_used)]

//! Extracts a font's Unicode character repertoire and exports it as a
//! table.
//!
//! The pipeline has three stages: [`load`] reads a TTF/OTF file and
//! produces its code-point → glyph-id [`CharacterMap`]; [`enrich`]
//! pairs each mapped code point with its Unicode metadata (display
//! form, general category, formal name, block, glyph name); the
//! [`export`] writers serialize the result as CSV, XLSX, JSON, HTML
//! or Markdown.

mod blocks;
mod charmap;
mod enrich;
mod error;
pub mod export;
mod record;

pub use crate::{
    blocks::{BlockClassifier, BlockRange, UNASSIGNED_BLOCK},
    charmap::{character_map_from_bytes, load, CharacterMap},
    enrich::{enrich, enrich_cancellable, EnrichOptions, GlyphNameResolver, ProgressObserver},
    error::FontsheetError,
    export::{write_table, write_table_to, TableFormat, TableWriter},
    record::{format_code_point, GlyphRecord, PLACEHOLDER_GLYPH, UNNAMED_CHARACTER},
};

use std::path::PathBuf;

/// Loads a font file and enriches its full character map against the
/// bundled block table.
pub fn tabulate(
    font_path: impl Into<PathBuf>,
    options: &EnrichOptions,
) -> Result<Vec<GlyphRecord>, FontsheetError> {
    let character_map = charmap::load(font_path)?;
    let resolver = character_map.resolver();
    let records = enrich(
        character_map.mappings(),
        options,
        BlockClassifier::bundled(),
        Some(&resolver),
        None,
    )?;
    log::info!(
        "Tabulated {} of {} mapped code points",
        records.len(),
        character_map.len()
    );
    Ok(records)
}

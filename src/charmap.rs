//! The font-parsing collaborator.
//!
//! Extracts a font's best Unicode character map (code point to glyph
//! id) together with the glyph names the font carries in its `post`
//! or `CFF` table. Everything downstream of this module works on the
//! owned [`CharacterMap`]; the parsed face is not kept alive.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};

use ttf_parser::{Face, GlyphId};

use crate::FontsheetError;

const SUPPORTED_EXTENSIONS: &[&str] = &["ttf", "otf", "ttc", "otc"];
const WOFF_EXTENSIONS: &[&str] = &["woff", "woff2"];

/// The character repertoire a font exposes through its Unicode cmap
/// subtables, with glyph names resolved at extraction time.
#[derive(Debug, Clone, Default)]
pub struct CharacterMap {
    mappings: BTreeMap<u32, u16>,
    glyph_names: HashMap<u16, String>,
    glyph_count: u16,
}

impl CharacterMap {
    /// Code point → glyph id, ascending by code point.
    pub fn mappings(&self) -> &BTreeMap<u32, u16> {
        &self.mappings
    }

    /// Number of mapped code points.
    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }

    /// Number of glyphs in the font, mapped or not.
    pub fn glyph_count(&self) -> u16 {
        self.glyph_count
    }

    /// The font's name for a glyph, if it carries one.
    pub fn glyph_name(&self, glyph_id: u16) -> Option<&str> {
        self.glyph_names.get(&glyph_id).map(String::as_str)
    }

    /// A resolver closure suitable for [`crate::enrich`].
    pub fn resolver(&self) -> impl Fn(u16) -> Option<String> + '_ {
        move |glyph_id| self.glyph_names.get(&glyph_id).cloned()
    }
}

/// Reads a font file and extracts its character map.
///
/// WOFF containers are recognized and rejected: the underlying parser
/// reads raw TTF/OTF data only.
pub fn load(path: impl Into<PathBuf>) -> Result<CharacterMap, FontsheetError> {
    let path = path.into();
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());
    match extension.as_deref() {
        Some(ext) if WOFF_EXTENSIONS.contains(&ext) => {
            return Err(FontsheetError::UnsupportedContainer { path })
        }
        Some(ext) if SUPPORTED_EXTENSIONS.contains(&ext) => {}
        _ => return Err(FontsheetError::UnknownFileType { path }),
    }
    let data = fs::read(&path)?;
    character_map_from_bytes(&data, &path)
}

/// Extracts the character map from already-loaded font data.
///
/// All Unicode cmap subtables are walked in table order; the first
/// mapping seen for a code point wins, so the preferred subtable is
/// simply the one the font lists first.
pub fn character_map_from_bytes(
    data: &[u8],
    path: &Path,
) -> Result<CharacterMap, FontsheetError> {
    let face = Face::parse(data, 0)?;
    let cmap = face
        .tables()
        .cmap
        .ok_or_else(|| FontsheetError::NoCmapTable {
            path: path.to_path_buf(),
        })?;

    let mut mappings = BTreeMap::new();
    for subtable in cmap.subtables {
        if !subtable.is_unicode() {
            continue;
        }
        subtable.codepoints(|code_point| {
            if let Some(GlyphId(glyph_id)) = subtable.glyph_index(code_point) {
                mappings.entry(code_point).or_insert(glyph_id);
            }
        });
    }
    if mappings.is_empty() {
        return Err(FontsheetError::EmptyCharacterMap);
    }

    let mut glyph_names = HashMap::new();
    for &glyph_id in mappings.values() {
        if let Some(name) = face.glyph_name(GlyphId(glyph_id)) {
            glyph_names.insert(glyph_id, name.to_string());
        }
    }

    log::debug!(
        "Extracted {} mapped code points, {} named glyphs",
        mappings.len(),
        glyph_names.len()
    );

    Ok(CharacterMap {
        mappings,
        glyph_names,
        glyph_count: face.number_of_glyphs(),
    })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn woff_containers_are_rejected_by_extension() {
        let result = load("NotoSans.woff2");
        assert!(matches!(
            result,
            Err(FontsheetError::UnsupportedContainer { .. })
        ));
    }

    #[test]
    fn unknown_extensions_are_rejected() {
        for name in ["font.png", "font", "font.TXT"] {
            let result = load(name);
            assert!(matches!(
                result,
                Err(FontsheetError::UnknownFileType { .. })
            ));
        }
    }

    #[test]
    fn garbage_data_is_a_parse_error() {
        let result = character_map_from_bytes(b"not a font", Path::new("garbage.ttf"));
        assert!(matches!(result, Err(FontsheetError::FaceParsing(_))));
    }

    #[test]
    fn resolver_reads_the_name_table() {
        let map = CharacterMap {
            mappings: [(0x41u32, 1u16)].into_iter().collect(),
            glyph_names: [(1u16, "A".to_string())].into_iter().collect(),
            glyph_count: 2,
        };
        assert_eq!(map.glyph_name(1), Some("A"));
        let resolver = map.resolver();
        assert_eq!(resolver(1), Some("A".to_string()));
        assert_eq!(resolver(2), None);
    }
}

//! The code-point enrichment pipeline.
//!
//! [`enrich`] turns a font's code-point → glyph-id mapping into a
//! sorted sequence of [`GlyphRecord`]s ready for export. Processing is
//! per-item fault isolated: a code point that cannot be handled (an
//! unpaired surrogate, a value beyond U+10FFFF) is skipped and the
//! pass continues, so a font with a few malformed cmap entries still
//! yields a complete table for the well-formed ones. Only call-level
//! preconditions are reported as errors.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::blocks::BlockClassifier;
use crate::record::{
    category_of, is_other_category, unicode_name_of, GlyphRecord, PLACEHOLDER_GLYPH,
};
use crate::FontsheetError;

/// Policy knobs for a single enrichment pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnrichOptions {
    /// Keep code points whose general category is Cc, Cf, Co, Cs or Cn.
    pub include_control_chars: bool,
    /// Show the literal character for control categories instead of
    /// the placeholder glyph. Only consulted for records that survive
    /// filtering.
    pub show_preview: bool,
}

impl Default for EnrichOptions {
    fn default() -> Self {
        EnrichOptions {
            include_control_chars: false,
            show_preview: true,
        }
    }
}

/// Called after each processed input entry with (processed, total).
pub type ProgressObserver<'a> = dyn FnMut(usize, usize) + 'a;

/// Resolves a glyph id to the font's name for it, if any.
pub type GlyphNameResolver<'a> = dyn Fn(u16) -> Option<String> + 'a;

/// Enriches every code point in `glyph_map` with Unicode metadata.
///
/// The returned records are strictly ascending by code point, one per
/// surviving input entry. Fails only on an empty input map; per-item
/// problems never abort the pass.
pub fn enrich(
    glyph_map: &BTreeMap<u32, u16>,
    options: &EnrichOptions,
    classifier: &BlockClassifier,
    glyph_name_resolver: Option<&GlyphNameResolver<'_>>,
    observer: Option<&mut ProgressObserver<'_>>,
) -> Result<Vec<GlyphRecord>, FontsheetError> {
    enrich_cancellable(
        glyph_map,
        options,
        classifier,
        glyph_name_resolver,
        observer,
        None,
    )
}

/// [`enrich`], checking `cancel` between items. A set flag aborts the
/// pass with [`FontsheetError::Cancelled`]; no partial table is
/// returned.
pub fn enrich_cancellable(
    glyph_map: &BTreeMap<u32, u16>,
    options: &EnrichOptions,
    classifier: &BlockClassifier,
    glyph_name_resolver: Option<&GlyphNameResolver<'_>>,
    mut observer: Option<&mut ProgressObserver<'_>>,
    cancel: Option<&AtomicBool>,
) -> Result<Vec<GlyphRecord>, FontsheetError> {
    if glyph_map.is_empty() {
        return Err(FontsheetError::EmptyCharacterMap);
    }
    let total = glyph_map.len();
    let mut records = Vec::with_capacity(total);
    // BTreeMap iteration is ascending by key, so the output inherits
    // the strictly-increasing code point order.
    for (processed, (&code_point, &glyph_id)) in glyph_map.iter().enumerate() {
        if let Some(cancel) = cancel {
            if cancel.load(Ordering::Relaxed) {
                return Err(FontsheetError::Cancelled);
            }
        }
        if let Some(record) =
            enrich_one(code_point, glyph_id, options, classifier, glyph_name_resolver)
        {
            records.push(record);
        }
        if let Some(observer) = observer.as_deref_mut() {
            observer(processed + 1, total);
        }
    }
    log::debug!(
        "Enriched {} of {} mapped code points",
        records.len(),
        total
    );
    Ok(records)
}

/// Processes a single code point; `None` means "skip", whether from
/// filtering policy or from a value no character corresponds to.
fn enrich_one(
    code_point: u32,
    glyph_id: u16,
    options: &EnrichOptions,
    classifier: &BlockClassifier,
    glyph_name_resolver: Option<&GlyphNameResolver<'_>>,
) -> Option<GlyphRecord> {
    // Surrogates and values beyond U+10FFFF have no char form; the
    // entry is dropped, not the pass.
    let c = char::from_u32(code_point)?;
    let category = category_of(c);
    if !options.include_control_chars && is_other_category(category) {
        return None;
    }
    let display_char = if !options.show_preview && is_other_category(category) {
        PLACEHOLDER_GLYPH.to_string()
    } else {
        c.to_string()
    };
    let glyph_name = glyph_name_resolver
        .and_then(|resolve| resolve(glyph_id))
        .unwrap_or_else(|| format!("glyph_{glyph_id}"));
    Some(GlyphRecord {
        display_char,
        code_point,
        unicode_name: unicode_name_of(c),
        block_name: classifier.lookup(code_point).to_string(),
        glyph_name,
        glyph_id,
        category,
    })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use pretty_assertions::assert_eq;

    fn glyph_map(entries: &[(u32, u16)]) -> BTreeMap<u32, u16> {
        entries.iter().copied().collect()
    }

    fn run(map: &BTreeMap<u32, u16>, options: &EnrichOptions) -> Vec<GlyphRecord> {
        enrich(map, options, BlockClassifier::bundled(), None, None).unwrap()
    }

    #[test]
    fn empty_map_is_a_call_level_error() {
        let result = enrich(
            &BTreeMap::new(),
            &EnrichOptions::default(),
            BlockClassifier::bundled(),
            None,
            None,
        );
        assert!(matches!(result, Err(FontsheetError::EmptyCharacterMap)));
    }

    #[test]
    fn control_characters_are_filtered_by_default() {
        let records = run(&glyph_map(&[(0x0009, 1), (0x0041, 2)]), &EnrichOptions::default());
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].code_point, 0x0041);
    }

    #[test]
    fn control_characters_can_be_included() {
        let options = EnrichOptions {
            include_control_chars: true,
            show_preview: true,
        };
        let records = run(&glyph_map(&[(0x0009, 1)]), &options);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].category, "Cc");
        assert_eq!(records[0].display_char, "\t");
    }

    #[test]
    fn suppressed_previews_use_the_placeholder() {
        let options = EnrichOptions {
            include_control_chars: true,
            show_preview: false,
        };
        let records = run(&glyph_map(&[(0x0009, 1), (0x0041, 2)]), &options);
        assert_eq!(records[0].display_char, PLACEHOLDER_GLYPH);
        // Non-control characters keep their literal form.
        assert_eq!(records[1].display_char, "A");
    }

    #[test]
    fn output_is_strictly_ascending_by_code_point() {
        let records = run(
            &glyph_map(&[(0x4E2D, 9), (0x0041, 1), (0x1F600, 4), (0x0062, 2)]),
            &EnrichOptions::default(),
        );
        let code_points: Vec<u32> = records.iter().map(|r| r.code_point).collect();
        assert_eq!(code_points, vec![0x0041, 0x0062, 0x4E2D, 0x1F600]);
    }

    #[test]
    fn invalid_scalar_values_are_skipped_not_fatal() {
        // 0xD800 is an unpaired surrogate: no char corresponds to it.
        let records = run(
            &glyph_map(&[(0x0041, 1), (0xD800, 2), (0x0042, 3)]),
            &EnrichOptions::default(),
        );
        assert_eq!(records.len(), 2);
        let code_points: Vec<u32> = records.iter().map(|r| r.code_point).collect();
        assert_eq!(code_points, vec![0x0041, 0x0042]);
    }

    #[test]
    fn latin_and_cjk_scenario() {
        let records = run(
            &glyph_map(&[(0x0041, 1), (0x4E2D, 2)]),
            &EnrichOptions::default(),
        );
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].code_point, 0x0041);
        assert_eq!(records[0].unicode_name, "LATIN CAPITAL LETTER A");
        assert_eq!(records[0].block_name, "Basic Latin");
        assert_eq!(records[1].code_point, 0x4E2D);
        assert_eq!(records[1].block_name, "CJK Unified Ideographs");
    }

    #[test]
    fn glyph_names_fall_back_to_synthetic_labels() {
        let resolver = |glyph_id: u16| (glyph_id == 1).then(|| "A".to_string());
        let records = enrich(
            &glyph_map(&[(0x0041, 1), (0x0042, 7)]),
            &EnrichOptions::default(),
            BlockClassifier::bundled(),
            Some(&resolver),
            None,
        )
        .unwrap();
        assert_eq!(records[0].glyph_name, "A");
        assert_eq!(records[1].glyph_name, "glyph_7");
    }

    #[test]
    fn observer_sees_every_input_entry() {
        let mut calls = Vec::new();
        let mut observer = |processed: usize, total: usize| calls.push((processed, total));
        enrich(
            &glyph_map(&[(0x0009, 1), (0x0041, 2), (0xD800, 3)]),
            &EnrichOptions::default(),
            BlockClassifier::bundled(),
            None,
            Some(&mut observer),
        )
        .unwrap();
        // Filtered and skipped entries still count as processed.
        assert_eq!(calls, vec![(1, 3), (2, 3), (3, 3)]);
    }

    #[test]
    fn pre_set_cancel_flag_aborts_the_pass() {
        let cancel = AtomicBool::new(true);
        let result = enrich_cancellable(
            &glyph_map(&[(0x0041, 1)]),
            &EnrichOptions::default(),
            BlockClassifier::bundled(),
            None,
            None,
            Some(&cancel),
        );
        assert!(matches!(result, Err(FontsheetError::Cancelled)));
    }
}

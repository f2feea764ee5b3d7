//! Unicode block classification.
//!
//! A [`BlockClassifier`] owns an ordered table of `[start, end] → name`
//! ranges and answers "which Unicode block contains this code point?".
//! Lookups run in logarithmic time over the table; code points outside
//! every range (including values beyond U+10FFFF) resolve to
//! [`UNASSIGNED_BLOCK`] rather than failing.

use std::sync::LazyLock;

mod data;

/// Name returned for code points no range covers.
pub const UNASSIGNED_BLOCK: &str = "Unassigned";

/// A named, inclusive range of Unicode code points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockRange {
    pub start: u32,
    pub end: u32,
    pub name: String,
}

impl BlockRange {
    pub fn new(start: u32, end: u32, name: impl Into<String>) -> Self {
        debug_assert!(start <= end, "block range start must not exceed end");
        BlockRange {
            start,
            end,
            name: name.into(),
        }
    }
}

/// Ordered, gap- and overlap-tolerant block lookup table.
///
/// Where ranges overlap, the range appearing first in ascending start
/// order wins, which matches a linear first-match scan over the sorted
/// table.
#[derive(Debug, Clone)]
pub struct BlockClassifier {
    ranges: Vec<BlockRange>,
    // running maximum of `end` over ranges[0..=i], used to bound the
    // backwards walk over overlapping candidates
    max_end: Vec<u32>,
}

static BUNDLED: LazyLock<BlockClassifier> = LazyLock::new(|| {
    BlockClassifier::new(
        data::UNICODE_BLOCKS
            .iter()
            .map(|&(start, end, name)| BlockRange::new(start, end, name))
            .collect(),
    )
});

impl BlockClassifier {
    /// Builds a classifier from the given ranges. The table is sorted
    /// ascending by start; the sort is stable, so equal starts keep
    /// their insertion order and first-match semantics are preserved.
    pub fn new(mut ranges: Vec<BlockRange>) -> Self {
        ranges.sort_by_key(|r| r.start);
        let mut max_end = Vec::with_capacity(ranges.len());
        let mut running = 0;
        for range in &ranges {
            running = running.max(range.end);
            max_end.push(running);
        }
        BlockClassifier { ranges, max_end }
    }

    /// The classifier over the bundled Unicode block table, built once
    /// per process.
    pub fn bundled() -> &'static BlockClassifier {
        &BUNDLED
    }

    /// Returns the name of the first range containing `code_point`, or
    /// [`UNASSIGNED_BLOCK`] if none does. Never panics, for any `u32`.
    pub fn lookup(&self, code_point: u32) -> &str {
        // Candidates are exactly the ranges with start <= code_point.
        let upper = self.ranges.partition_point(|r| r.start <= code_point);
        let mut found: Option<usize> = None;
        for i in (0..upper).rev() {
            if self.max_end[i] < code_point {
                // No range at or below i reaches code_point.
                break;
            }
            if self.ranges[i].end >= code_point {
                found = Some(i);
            }
        }
        found
            .map(|i| self.ranges[i].name.as_str())
            .unwrap_or(UNASSIGNED_BLOCK)
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn test_classifier() -> BlockClassifier {
        BlockClassifier::new(vec![BlockRange::new(0x0041, 0x005A, "Test")])
    }

    #[rstest]
    #[case(0x0041, "Test")]
    #[case(0x005A, "Test")]
    #[case(0x0040, UNASSIGNED_BLOCK)]
    #[case(0x005B, UNASSIGNED_BLOCK)]
    fn boundary_exactness(#[case] code_point: u32, #[case] expected: &str) {
        assert_eq!(test_classifier().lookup(code_point), expected);
    }

    #[test]
    fn first_match_wins_on_overlap() {
        let classifier = BlockClassifier::new(vec![
            BlockRange::new(0x0000, 0x00FF, "First"),
            BlockRange::new(0x0000, 0x00FF, "Second"),
            BlockRange::new(0x0080, 0x00FF, "Third"),
        ]);
        assert_eq!(classifier.lookup(0x0010), "First");
        assert_eq!(classifier.lookup(0x0090), "First");
    }

    #[test]
    fn wide_early_range_beats_narrow_later_one() {
        let classifier = BlockClassifier::new(vec![
            BlockRange::new(0x0000, 0x10FFFF, "Everything"),
            BlockRange::new(0x4E00, 0x9FFF, "CJK"),
        ]);
        assert_eq!(classifier.lookup(0x4E2D), "Everything");
    }

    #[test]
    fn out_of_range_code_points_are_unassigned() {
        let bundled = BlockClassifier::bundled();
        assert_eq!(bundled.lookup(0x110000), UNASSIGNED_BLOCK);
        assert_eq!(bundled.lookup(u32::MAX), UNASSIGNED_BLOCK);
    }

    #[rstest]
    #[case(0x0041, "Basic Latin")]
    #[case(0x4E2D, "CJK Unified Ideographs")]
    #[case(0x0985, "Bengali")]
    #[case(0xE050, "Private Use Area")]
    #[case(0x1F600, "Emoticons")]
    #[case(0xF5000, "Supplementary Private Use Area-A")]
    #[case(0x10FFFF, "Supplementary Private Use Area-B")]
    // A gap in the bundled table, between Kangxi Radicals and
    // Ideographic Description Characters.
    #[case(0x2FE5, UNASSIGNED_BLOCK)]
    fn bundled_table_lookups(#[case] code_point: u32, #[case] expected: &str) {
        assert_eq!(BlockClassifier::bundled().lookup(code_point), expected);
    }

    #[test]
    fn lookup_is_deterministic() {
        let bundled = BlockClassifier::bundled();
        for code_point in [0u32, 0x41, 0xD800, 0x10FFFF, 0x110000] {
            assert_eq!(bundled.lookup(code_point), bundled.lookup(code_point));
        }
    }

    #[test]
    fn every_plane_sample_yields_a_name() {
        let bundled = BlockClassifier::bundled();
        for code_point in (0..=0x10FFFF).step_by(0x100) {
            assert!(!bundled.lookup(code_point).is_empty());
        }
    }
}

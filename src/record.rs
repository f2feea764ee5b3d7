//! The output row type and the Unicode character metadata behind it.

use serde::{Serialize, Serializer};
use unicode_general_category::{get_general_category, GeneralCategory};

/// Name used when the Unicode character database has no entry.
pub const UNNAMED_CHARACTER: &str = "Unnamed Character";

/// Substitute shown in place of a suppressed control-character preview.
pub const PLACEHOLDER_GLYPH: &str = "□";

/// One row of the exported table, immutable once built.
///
/// Serialization emits exactly the five public columns, in column
/// order: `Character`, `Unicode` (the `U+XXXX` form of `code_point`),
/// `UnicodeName`, `Block`, `GlyphName`. The `code_point` and
/// `category` fields are internal, used for sorting and filtering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GlyphRecord {
    #[serde(rename = "Character")]
    pub display_char: String,
    #[serde(rename = "Unicode", serialize_with = "code_point_ser")]
    pub code_point: u32,
    #[serde(rename = "UnicodeName")]
    pub unicode_name: String,
    #[serde(rename = "Block")]
    pub block_name: String,
    #[serde(rename = "GlyphName")]
    pub glyph_name: String,
    #[serde(skip)]
    pub glyph_id: u16,
    #[serde(skip)]
    pub category: &'static str,
}

fn code_point_ser<S: Serializer>(code_point: &u32, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format_code_point(*code_point))
}

/// Formats a code point as `U+XXXX`: uppercase hex, at least four
/// digits.
pub fn format_code_point(code_point: u32) -> String {
    format!("U+{code_point:04X}")
}

/// The two-letter general category code for a character.
pub fn category_of(c: char) -> &'static str {
    category_code(get_general_category(c))
}

/// True for the "Other" categories Cc, Cf, Co, Cs and Cn.
pub fn is_other_category(category: &str) -> bool {
    category.starts_with('C')
}

/// Maps a general category to its standard two-letter abbreviation.
pub fn category_code(category: GeneralCategory) -> &'static str {
    match category {
        GeneralCategory::UppercaseLetter => "Lu",
        GeneralCategory::LowercaseLetter => "Ll",
        GeneralCategory::TitlecaseLetter => "Lt",
        GeneralCategory::ModifierLetter => "Lm",
        GeneralCategory::OtherLetter => "Lo",
        GeneralCategory::NonspacingMark => "Mn",
        GeneralCategory::SpacingMark => "Mc",
        GeneralCategory::EnclosingMark => "Me",
        GeneralCategory::DecimalNumber => "Nd",
        GeneralCategory::LetterNumber => "Nl",
        GeneralCategory::OtherNumber => "No",
        GeneralCategory::ConnectorPunctuation => "Pc",
        GeneralCategory::DashPunctuation => "Pd",
        GeneralCategory::OpenPunctuation => "Ps",
        GeneralCategory::ClosePunctuation => "Pe",
        GeneralCategory::InitialPunctuation => "Pi",
        GeneralCategory::FinalPunctuation => "Pf",
        GeneralCategory::OtherPunctuation => "Po",
        GeneralCategory::MathSymbol => "Sm",
        GeneralCategory::CurrencySymbol => "Sc",
        GeneralCategory::ModifierSymbol => "Sk",
        GeneralCategory::OtherSymbol => "So",
        GeneralCategory::SpaceSeparator => "Zs",
        GeneralCategory::LineSeparator => "Zl",
        GeneralCategory::ParagraphSeparator => "Zp",
        GeneralCategory::Control => "Cc",
        GeneralCategory::Format => "Cf",
        GeneralCategory::Surrogate => "Cs",
        GeneralCategory::PrivateUse => "Co",
        GeneralCategory::Unassigned => "Cn",
    }
}

/// The character's formal Unicode name, or [`UNNAMED_CHARACTER`] when
/// the database has no entry.
pub fn unicode_name_of(c: char) -> String {
    unicode_names2::name(c)
        .map(|name| name.to_string())
        .unwrap_or_else(|| UNNAMED_CHARACTER.to_string())
}

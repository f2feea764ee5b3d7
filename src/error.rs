use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FontsheetError {
    #[error("Unknown file type for file {path:?}")]
    UnknownFileType { path: PathBuf },

    #[error("{path:?} is a WOFF container; decompress it to TTF/OTF first")]
    UnsupportedContainer { path: PathBuf },

    #[error("Error parsing font: {0}")]
    FaceParsing(#[from] ttf_parser::FaceParsingError),

    #[error("Font file {path:?} does not contain a cmap table")]
    NoCmapTable { path: PathBuf },

    #[error("Cannot extract character mapping from font file")]
    EmptyCharacterMap,

    #[error("Enrichment was cancelled")]
    Cancelled,

    #[error("Unsupported table format: {name}")]
    UnknownFormat { name: String },

    #[error("IO Error: {0}")]
    IO(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Excel error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

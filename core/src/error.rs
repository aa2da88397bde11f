// core/src/error.rs
//
// Typed failures for every analysis stage. Positions are character offsets
// into the normalized input (see `utils::normalize`).

use thiserror::Error;

/// The input could not be split into phonetic units.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenizeError {
    /// A tie bar with no base symbol after it (`t͡` at the end of a word).
    #[error("tie bar in {text:?} at position {position} is not followed by a base symbol")]
    DanglingTieBar { text: String, position: usize },

    /// A code point that is neither an IPA letter, a mark, nor a separator.
    #[error("unsupported code point {ch:?} at position {position}")]
    UnsupportedCodePoint { ch: char, position: usize },

    /// A diacritic, length mark or tie bar with no base symbol to attach to.
    #[error("mark {mark:?} at position {position} has no base symbol to attach to")]
    OrphanMark { mark: char, position: usize },

    /// Two stress marks at the start of the same syllable.
    #[error("repeated stress mark {mark:?} at position {position}")]
    RepeatedStress { mark: char, position: usize },

    #[error(transparent)]
    Classification(#[from] ClassificationError),
}

/// A base symbol is missing from the inventory tables.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("symbol {symbol:?} in unit {unit:?} at position {position} is not in the IPA inventory")]
pub struct ClassificationError {
    /// The offending base symbol.
    pub symbol: String,
    /// The whole unit the symbol was found in.
    pub unit: String,
    pub position: usize,
}

impl ClassificationError {
    /// Shift the position by `offset`, used when the unit was classified in
    /// isolation and its place in the word is known only to the caller.
    pub fn offset_by(mut self, offset: usize) -> Self {
        self.position += offset;
        self
    }
}

/// A syllable without a vowel or syllabic consonant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("syllable {index} ({syllable:?}) at position {position} has no vowel or syllabic consonant")]
pub struct NoNucleusError {
    /// Text of the syllable.
    pub syllable: String,
    /// Zero-based syllable index within the word.
    pub index: usize,
    pub position: usize,
}

/// Any failure of `segment_word`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SegmentationError {
    #[error(transparent)]
    Tokenize(#[from] TokenizeError),

    #[error(transparent)]
    NoNucleus(#[from] NoNucleusError),

    /// Two adjacent boundaries, or a boundary at either end of the word.
    #[error("syllable {index} at position {position} is empty")]
    EmptySyllable { index: usize, position: usize },

    #[error("input contains no phonetic symbols")]
    EmptyInput,
}

impl From<ClassificationError> for SegmentationError {
    fn from(err: ClassificationError) -> Self {
        SegmentationError::Tokenize(err.into())
    }
}

/// The symbol inventory TOML is malformed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InventoryError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("table {0} is empty")]
    Empty(&'static str),
    #[error("entry {entry:?} in table {table} is not a single code point")]
    NotSingleSymbol { table: &'static str, entry: String },
    #[error("symbol {symbol:?} is listed in both {first} and {second}")]
    Conflict {
        symbol: char,
        first: &'static str,
        second: &'static str,
    },
}

/// Loading or validating a `Config` failed.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("TOML serialization error: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("inventory {}: {source}", .path.display())]
    Inventory {
        path: std::path::PathBuf,
        #[source]
        source: InventoryError,
    },
    #[error("break marker {0:?} is not a syllable separator in the inventory")]
    UnknownBreakMarker(char),
}

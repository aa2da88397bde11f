//! Phonetic units and their categories.
//!
//! A `PhoneticUnit` is one grapheme cluster of a transcription: a base
//! symbol with whatever diacritics, length marks and modifier letters are
//! attached to it, or two tie-barred symbols forming an affricate.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Phonological category of a unit. Closed set; assigned once by the
/// classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Vowel,
    Glide,
    SyllabicConsonant,
    Consonant,
}

impl Category {
    /// True for units that can start a syllable nucleus.
    pub fn is_peak(self) -> bool {
        match self {
            Category::Vowel | Category::SyllabicConsonant => true,
            Category::Glide | Category::Consonant => false,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Vowel => "vowel",
            Category::Glide => "glide",
            Category::SyllabicConsonant => "syllabic consonant",
            Category::Consonant => "consonant",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Syllable stress as written with `ˈ` / `ˌ`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stress {
    Primary,
    Secondary,
}

impl Stress {
    pub const PRIMARY_MARK: char = '\u{2C8}';
    pub const SECONDARY_MARK: char = '\u{2CC}';

    pub fn from_mark(ch: char) -> Option<Self> {
        match ch {
            Self::PRIMARY_MARK => Some(Stress::Primary),
            Self::SECONDARY_MARK => Some(Stress::Secondary),
            _ => None,
        }
    }

    pub fn mark(self) -> char {
        match self {
            Stress::Primary => Self::PRIMARY_MARK,
            Stress::Secondary => Self::SECONDARY_MARK,
        }
    }
}

/// One atomic phonetic symbol as it appears in the word.
///
/// Units are immutable: the tokenizer builds them and everything downstream
/// only reads them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneticUnit {
    text: String,
    base: char,
    category: Category,
    affricate: bool,
    position: usize,
}

impl PhoneticUnit {
    pub(crate) fn new(
        text: String,
        base: char,
        category: Category,
        affricate: bool,
        position: usize,
    ) -> Self {
        Self {
            text,
            base,
            category,
            affricate,
            position,
        }
    }

    /// Raw text of the cluster, used verbatim for reconstruction.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The (first) base symbol of the cluster.
    pub fn base(&self) -> char {
        self.base
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// True if the unit was merged from two tie-barred symbols.
    pub fn is_affricate(&self) -> bool {
        self.affricate
    }

    /// Character offset of the unit in the normalized input.
    pub fn position(&self) -> usize {
        self.position
    }
}

impl fmt::Display for PhoneticUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Concatenate the raw text of a run of units.
pub fn join_units(units: &[PhoneticUnit]) -> String {
    units.iter().map(PhoneticUnit::text).collect()
}

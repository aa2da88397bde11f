//! libipa-core
//!
//! IPA transcription analysis: grapheme tokenization, phoneme classification,
//! onset/nucleus/coda segmentation and the IPA Pig Latin transform built on
//! top of it.
//!
//! Public API:
//! - `tokenize` - split a transcription into `PhoneticUnit`s and syllable boundaries
//! - `segment_word` - tokenize and segment every syllable into a `WordResult`
//! - `pig_latin` - Pig Latin form of a `WordResult`
//! - `Analyzer` - the same operations over a custom `Config` / `Inventory`
//! - `Inventory` - static symbol tables (vowels, glides, consonants, marks)
//!
//! ```
//! let word = libipa_core::segment_word("kəm.pjuːtər").unwrap();
//! assert_eq!(word.syllables()[1].nucleus_text(), "uː");
//! assert_eq!(libipa_core::pig_latin(&word), "əm.pjuːtər.kei");
//! ```
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub mod error;
pub use error::{
    ClassificationError, ConfigError, InventoryError, NoNucleusError, SegmentationError,
    TokenizeError,
};

pub mod inventory;
pub use inventory::{Inventory, SymbolClass};

pub mod unit;
pub use unit::{Category, PhoneticUnit, Stress};

pub mod classifier;
pub use classifier::Classifier;

pub mod tokenizer;
pub use tokenizer::{Boundary, Delimiters, TokenStream, Tokenizer};

pub mod segmenter;
pub use segmenter::{segment_syllable, OncSegmentation, Syllable, WordResult};

pub mod pig_latin;

pub mod analyzer;
pub use analyzer::Analyzer;

static DEFAULT_ANALYZER: Lazy<Analyzer> = Lazy::new(Analyzer::default);

/// Tokenize with the embedded inventory and default config.
pub fn tokenize(text: &str) -> Result<TokenStream, TokenizeError> {
    DEFAULT_ANALYZER.tokenize(text)
}

/// Segment a word with the embedded inventory and default config.
pub fn segment_word(text: &str) -> Result<WordResult, SegmentationError> {
    DEFAULT_ANALYZER.segment_word(text)
}

/// Pig Latin form of `word` with the default suffix (`ei`) and marker (`.`).
pub fn pig_latin(word: &WordResult) -> String {
    pig_latin::pig_latin(word)
}

/// Analysis configuration.
///
/// Every field has a default, so a TOML file only needs the keys it changes.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Morpheme appended by the Pig Latin transform.
    pub pig_latin_suffix: String,

    /// Break marker inserted before the appended Pig Latin syllable.
    /// Must be one of the inventory's syllable separators.
    pub break_marker: char,

    /// Strip enclosing `/.../` or `[...]` before tokenizing and re-wrap the
    /// output the same way.
    pub strip_delimiters: bool,

    /// Custom inventory TOML replacing the embedded one.
    pub inventory_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pig_latin_suffix: pig_latin::DEFAULT_SUFFIX.to_string(),
            break_marker: pig_latin::DEFAULT_BREAK_MARKER,
            strip_delimiters: true,
            inventory_path: None,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<std::path::Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Save configuration to a TOML file.
    pub fn save_toml<P: AsRef<std::path::Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load configuration from TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Serialize configuration to TOML string.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

/// Utility helpers.
pub mod utils {
    /// Normalize input strings (NFD) and trim whitespace.
    ///
    /// Decomposed form keeps every diacritic as its own code point, so a
    /// precomposed `ã` and `a` + combining tilde tokenize identically.
    pub fn normalize(s: &str) -> String {
        use unicode_normalization::UnicodeNormalization;
        s.trim().nfd().collect::<String>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_decomposes_and_trims() {
        assert_eq!(utils::normalize("  p\u{E3} "), "pa\u{303}");
        assert_eq!(utils::normalize("kəm"), "kəm");
    }

    #[test]
    fn config_toml_round_trip() {
        let config = Config {
            pig_latin_suffix: "ay".into(),
            ..Config::default()
        };
        let text = config.to_toml_string().unwrap();
        assert_eq!(Config::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn partial_config_uses_defaults() {
        let config = Config::from_toml_str("strip_delimiters = false\n").unwrap();
        assert!(!config.strip_delimiters);
        assert_eq!(config.pig_latin_suffix, "ei");
        assert_eq!(config.break_marker, '.');
        assert_eq!(config.inventory_path, None);
    }

    #[test]
    fn free_functions_use_the_default_analyzer() {
        let stream = tokenize("t\u{361}ʃ").unwrap();
        assert_eq!(stream.len(), 1);
        assert_eq!(stream.units()[0].category(), Category::Consonant);

        let word = segment_word("/ap/").unwrap();
        assert_eq!(pig_latin(&word), "/ap.ei/");
    }
}

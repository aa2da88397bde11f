// core/src/analyzer.rs
//
// Analyzer composing tokenizer, classifier, segmenter and Pig Latin
// generator over one inventory and config.
//
// An analyzer holds only immutable data, so one instance can serve any
// number of callers; every call builds and returns fresh results.

use std::sync::Arc;

use crate::error::{ConfigError, SegmentationError, TokenizeError};
use crate::inventory::Inventory;
use crate::pig_latin::pig_latin_with;
use crate::segmenter::{segment_stream, WordResult};
use crate::tokenizer::{TokenStream, Tokenizer};
use crate::Config;

#[derive(Debug, Clone)]
pub struct Analyzer {
    inventory: Arc<Inventory>,
    config: Config,
}

impl Analyzer {
    /// Build an analyzer from a config, loading `config.inventory_path` when
    /// set and the embedded inventory otherwise.
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        let inventory = match &config.inventory_path {
            Some(path) => {
                let inventory = Inventory::load_toml(path).map_err(|source| {
                    tracing::warn!(path = %path.display(), error = %source, "failed to load inventory");
                    ConfigError::Inventory {
                        path: path.clone(),
                        source,
                    }
                })?;
                Arc::new(inventory)
            }
            None => Inventory::builtin(),
        };
        Self::with_inventory(config, inventory)
    }

    /// Build an analyzer over an already loaded inventory. The config's
    /// `inventory_path` is ignored.
    pub fn with_inventory(config: Config, inventory: Arc<Inventory>) -> Result<Self, ConfigError> {
        if !inventory.is_break(config.break_marker) {
            return Err(ConfigError::UnknownBreakMarker(config.break_marker));
        }
        Ok(Self { inventory, config })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    fn tokenizer(&self) -> Tokenizer<'_> {
        Tokenizer::new(&self.inventory).strip_delimiters(self.config.strip_delimiters)
    }

    /// Split a transcription into classified units and syllable boundaries.
    pub fn tokenize(&self, text: &str) -> Result<TokenStream, TokenizeError> {
        self.tokenizer().tokenize(text)
    }

    /// Tokenize, classify and segment every syllable of `text`.
    pub fn segment_word(&self, text: &str) -> Result<WordResult, SegmentationError> {
        let _span = tracing::debug_span!("segment_word", input = text).entered();
        let stream = self.tokenize(text)?;
        let units = stream.len();
        let word = segment_stream(stream)?;
        tracing::debug!(units, syllables = word.len(), "segmented word");
        Ok(word)
    }

    /// Pig Latin form of an analyzed word, using the configured suffix and
    /// break marker.
    pub fn pig_latin(&self, word: &WordResult) -> String {
        pig_latin_with(word, &self.config.pig_latin_suffix, self.config.break_marker)
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self {
            inventory: Inventory::builtin(),
            config: Config::default(),
        }
    }
}

// core/src/inventory.rs
//
// Static IPA symbol inventory: which base symbols are vowels, glides or
// consonants, and which marks attach to them.
//
// The tables are configuration data. The default set is embedded from
// `data/inventory.toml` and parsed once per process; a custom inventory can
// be loaded from a file and handed to an `Analyzer`.

use ahash::{AHashMap, AHashSet};
use once_cell::sync::Lazy;
use serde::Deserialize;
use std::sync::Arc;
use unicode_normalization::UnicodeNormalization;

use crate::error::InventoryError;

/// Embedded default inventory.
pub const DEFAULT_INVENTORY_TOML: &str = include_str!("../data/inventory.toml");

// The embedded data is fixed at compile time; `default_inventory_parses`
// below checks it, so this initializer cannot fail at runtime.
static DEFAULT_INVENTORY: Lazy<Arc<Inventory>> = Lazy::new(|| {
    let inventory = Inventory::from_toml_str(DEFAULT_INVENTORY_TOML)
        .expect("embedded IPA inventory must be valid");
    Arc::new(inventory)
});

/// Table class of a base symbol. Syllabic consonants are never listed
/// directly; they are derived from a consonant plus a syllabicity mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolClass {
    Vowel,
    Glide,
    Consonant,
}

impl SymbolClass {
    fn table(self) -> &'static str {
        match self {
            SymbolClass::Vowel => "symbols.vowels",
            SymbolClass::Glide => "symbols.glides",
            SymbolClass::Consonant => "symbols.consonants",
        }
    }
}

#[derive(Deserialize)]
struct InventoryFile {
    symbols: SymbolTables,
    marks: MarkTables,
}

#[derive(Deserialize)]
struct SymbolTables {
    vowels: Vec<String>,
    glides: Vec<String>,
    consonants: Vec<String>,
}

#[derive(Deserialize)]
struct MarkTables {
    length: Vec<String>,
    tie_bars: Vec<String>,
    syllabic: Vec<String>,
    #[serde(default)]
    modifiers: Vec<String>,
    breaks: Vec<String>,
}

/// Parsed symbol inventory. Immutable after construction.
#[derive(Debug, Clone)]
pub struct Inventory {
    symbols: AHashMap<char, SymbolClass>,
    length: AHashSet<char>,
    tie_bars: AHashSet<char>,
    syllabic: AHashSet<char>,
    modifiers: AHashSet<char>,
    breaks: AHashSet<char>,
}

impl Inventory {
    /// Shared handle to the embedded default inventory.
    pub fn builtin() -> Arc<Inventory> {
        Arc::clone(&DEFAULT_INVENTORY)
    }

    /// Parse and validate an inventory from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, InventoryError> {
        let file: InventoryFile =
            toml::from_str(content).map_err(|e| InventoryError::Parse(e.to_string()))?;

        let mut symbols = AHashMap::new();
        for (class, entries) in [
            (SymbolClass::Vowel, &file.symbols.vowels),
            (SymbolClass::Glide, &file.symbols.glides),
            (SymbolClass::Consonant, &file.symbols.consonants),
        ] {
            if entries.is_empty() {
                return Err(InventoryError::Empty(class.table()));
            }
            for entry in entries {
                let symbol = single_symbol(class.table(), entry)?;
                if let Some(previous) = symbols.insert(symbol, class) {
                    return Err(InventoryError::Conflict {
                        symbol,
                        first: previous.table(),
                        second: class.table(),
                    });
                }
            }
        }

        let marks = &file.marks;
        Ok(Self {
            symbols,
            length: mark_set("marks.length", &marks.length, true)?,
            tie_bars: mark_set("marks.tie_bars", &marks.tie_bars, true)?,
            syllabic: mark_set("marks.syllabic", &marks.syllabic, true)?,
            modifiers: mark_set("marks.modifiers", &marks.modifiers, false)?,
            breaks: mark_set("marks.breaks", &marks.breaks, true)?,
        })
    }

    /// Load an inventory from a TOML file.
    pub fn load_toml<P: AsRef<std::path::Path>>(path: P) -> Result<Self, InventoryError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| InventoryError::Io(e.to_string()))?;
        Self::from_toml_str(&content)
    }

    /// Table class of a base symbol, `None` if the symbol is not covered.
    pub fn symbol_class(&self, symbol: char) -> Option<SymbolClass> {
        self.symbols.get(&symbol).copied()
    }

    pub fn is_length_mark(&self, ch: char) -> bool {
        self.length.contains(&ch)
    }

    pub fn is_tie_bar(&self, ch: char) -> bool {
        self.tie_bars.contains(&ch)
    }

    pub fn is_syllabic_mark(&self, ch: char) -> bool {
        self.syllabic.contains(&ch)
    }

    pub fn is_modifier(&self, ch: char) -> bool {
        self.modifiers.contains(&ch)
    }

    pub fn is_break(&self, ch: char) -> bool {
        self.breaks.contains(&ch)
    }

    /// Marks that attach to the preceding base symbol: length marks,
    /// modifier letters and combining diacritics other than tie bars.
    pub fn is_attached_mark(&self, ch: char) -> bool {
        self.is_length_mark(ch)
            || self.is_modifier(ch)
            || (unicode_normalization::char::is_combining_mark(ch) && !self.is_tie_bar(ch))
    }

    /// Any mark that cannot stand on its own.
    pub fn is_mark(&self, ch: char) -> bool {
        self.is_attached_mark(ch) || self.is_tie_bar(ch)
    }

    /// Number of base symbols covered by the tables.
    pub fn symbol_count(&self) -> usize {
        self.symbols.len()
    }
}

fn single_symbol(table: &'static str, entry: &str) -> Result<char, InventoryError> {
    let mut chars = entry.nfd();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Ok(ch),
        _ => Err(InventoryError::NotSingleSymbol {
            table,
            entry: entry.to_string(),
        }),
    }
}

fn mark_set(
    table: &'static str,
    entries: &[String],
    required: bool,
) -> Result<AHashSet<char>, InventoryError> {
    if required && entries.is_empty() {
        return Err(InventoryError::Empty(table));
    }
    entries
        .iter()
        .map(|entry| single_symbol(table, entry))
        .collect()
}

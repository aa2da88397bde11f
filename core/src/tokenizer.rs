// core/src/tokenizer.rs
//
// Grapheme tokenizer for IPA transcriptions.
//
// - Input is normalized (NFD, trimmed) before scanning, so the same printed
//   word always yields the same unit sequence.
// - A base symbol starts a unit; following diacritics, length marks and
//   modifier letters are appended to it.
// - A tie bar joins the base before it and the base after it (with the
//   marks of both) into one affricate unit.
// - Syllable-break markers and stress marks are not units. They are
//   recorded as boundaries between syllables.
// - Enclosing `/.../` or `[...]` delimiters are stripped and remembered.

use serde::{Deserialize, Serialize};

use crate::classifier::Classifier;
use crate::error::TokenizeError;
use crate::inventory::Inventory;
use crate::unit::{PhoneticUnit, Stress};
use crate::utils;

/// Enclosing transcription brackets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Delimiters {
    /// Phonemic `/.../`
    Slashes,
    /// Phonetic `[...]`
    Brackets,
}

impl Delimiters {
    pub fn open(self) -> char {
        match self {
            Delimiters::Slashes => '/',
            Delimiters::Brackets => '[',
        }
    }

    pub fn close(self) -> char {
        match self {
            Delimiters::Slashes => '/',
            Delimiters::Brackets => ']',
        }
    }

    fn detect(chars: &[char]) -> Option<Self> {
        if chars.len() < 2 {
            return None;
        }
        match (chars[0], chars[chars.len() - 1]) {
            ('/', '/') => Some(Delimiters::Slashes),
            ('[', ']') => Some(Delimiters::Brackets),
            _ => None,
        }
    }
}

/// A syllable boundary in the unit stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Boundary {
    /// Index of the first unit of the following syllable.
    pub index: usize,
    /// The break marker written in the input, `None` when the boundary was
    /// introduced by a stress mark alone.
    pub marker: Option<char>,
    /// Character offset of the marker in the normalized input.
    pub position: usize,
}

/// Output of the tokenizer: the unit sequence plus syllable bookkeeping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenStream {
    units: Vec<PhoneticUnit>,
    boundaries: Vec<Boundary>,
    /// One entry per syllable (`boundaries.len() + 1`).
    stresses: Vec<Option<Stress>>,
    delimiters: Option<Delimiters>,
}

impl TokenStream {
    fn new(delimiters: Option<Delimiters>) -> Self {
        Self {
            units: Vec::new(),
            boundaries: Vec::new(),
            stresses: vec![None],
            delimiters,
        }
    }

    pub fn units(&self) -> &[PhoneticUnit] {
        &self.units
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PhoneticUnit> {
        self.units.iter()
    }

    pub fn boundaries(&self) -> &[Boundary] {
        &self.boundaries
    }

    pub fn delimiters(&self) -> Option<Delimiters> {
        self.delimiters
    }

    /// Stress of each syllable, in order.
    pub fn stresses(&self) -> &[Option<Stress>] {
        &self.stresses
    }

    pub fn syllable_count(&self) -> usize {
        self.boundaries.len() + 1
    }

    /// Raw text of every unit, in order.
    pub fn unit_texts(&self) -> Vec<&str> {
        self.units.iter().map(PhoneticUnit::text).collect()
    }

    /// The unit runs between boundaries. May contain empty slices when two
    /// boundaries are adjacent.
    pub fn syllables(&self) -> Vec<&[PhoneticUnit]> {
        let mut out = Vec::with_capacity(self.syllable_count());
        let mut start = 0;
        for boundary in &self.boundaries {
            out.push(&self.units[start..boundary.index]);
            start = boundary.index;
        }
        out.push(&self.units[start..]);
        out
    }

    /// Split into owned per-syllable unit vectors paired with their stress.
    pub(crate) fn into_parts(self) -> TokenParts {
        let mut syllables: Vec<Vec<PhoneticUnit>> = Vec::with_capacity(self.syllable_count());
        let mut units = self.units.into_iter();
        let mut start = 0;
        for boundary in &self.boundaries {
            syllables.push(units.by_ref().take(boundary.index - start).collect());
            start = boundary.index;
        }
        syllables.push(units.collect());
        TokenParts {
            syllables,
            stresses: self.stresses,
            boundaries: self.boundaries,
            delimiters: self.delimiters,
        }
    }

    fn open_syllable(&mut self, marker: Option<char>, position: usize) {
        self.boundaries.push(Boundary {
            index: self.units.len(),
            marker,
            position,
        });
        self.stresses.push(None);
    }

    fn current_syllable_is_empty(&self) -> bool {
        let start = self.boundaries.last().map_or(0, |b| b.index);
        self.units.len() == start
    }

    fn current_stress(&mut self) -> &mut Option<Stress> {
        // `stresses` always holds one entry per open syllable
        let last = self.stresses.len() - 1;
        &mut self.stresses[last]
    }
}

impl<'a> IntoIterator for &'a TokenStream {
    type Item = &'a PhoneticUnit;
    type IntoIter = std::slice::Iter<'a, PhoneticUnit>;

    fn into_iter(self) -> Self::IntoIter {
        self.units.iter()
    }
}

/// Owned pieces of a `TokenStream`, consumed by the segmenter.
pub(crate) struct TokenParts {
    pub syllables: Vec<Vec<PhoneticUnit>>,
    pub stresses: Vec<Option<Stress>>,
    pub boundaries: Vec<Boundary>,
    pub delimiters: Option<Delimiters>,
}

/// Tokenizer bound to an inventory.
#[derive(Debug, Clone, Copy)]
pub struct Tokenizer<'a> {
    inventory: &'a Inventory,
    strip_delimiters: bool,
}

impl<'a> Tokenizer<'a> {
    pub fn new(inventory: &'a Inventory) -> Self {
        Self {
            inventory,
            strip_delimiters: true,
        }
    }

    /// Keep `/` and `[` `]` as ordinary input (they are then rejected as
    /// unsupported code points).
    pub fn strip_delimiters(mut self, strip: bool) -> Self {
        self.strip_delimiters = strip;
        self
    }

    /// Split `text` into phonetic units.
    pub fn tokenize(&self, text: &str) -> Result<TokenStream, TokenizeError> {
        let normalized = utils::normalize(text);
        let chars: Vec<char> = normalized.chars().collect();

        let delimiters = if self.strip_delimiters {
            Delimiters::detect(&chars)
        } else {
            None
        };
        let (start, end) = match delimiters {
            Some(_) => (1, chars.len() - 1),
            None => (0, chars.len()),
        };

        let mut scanner = Scanner {
            inventory: self.inventory,
            classifier: Classifier::new(self.inventory),
            chars: &chars,
            pos: start,
            end,
        };
        let mut stream = TokenStream::new(delimiters);

        while scanner.pos < scanner.end {
            let position = scanner.pos;
            let ch = chars[position];

            if self.inventory.is_break(ch) {
                stream.open_syllable(Some(ch), position);
                scanner.pos += 1;
            } else if let Some(stress) = Stress::from_mark(ch) {
                if !stream.current_syllable_is_empty() {
                    stream.open_syllable(None, position);
                }
                let slot = stream.current_stress();
                if slot.is_some() {
                    return Err(TokenizeError::RepeatedStress { mark: ch, position });
                }
                *slot = Some(stress);
                scanner.pos += 1;
            } else if self.inventory.is_mark(ch) {
                return Err(TokenizeError::OrphanMark { mark: ch, position });
            } else if scanner.is_base(ch) {
                let unit = scanner.unit()?;
                stream.units.push(unit);
            } else {
                return Err(TokenizeError::UnsupportedCodePoint { ch, position });
            }
        }

        Ok(stream)
    }
}

struct Scanner<'s> {
    inventory: &'s Inventory,
    classifier: Classifier<'s>,
    chars: &'s [char],
    pos: usize,
    end: usize,
}

impl<'s> Scanner<'s> {
    fn is_base(&self, ch: char) -> bool {
        ch.is_alphabetic() && !self.inventory.is_mark(ch) && Stress::from_mark(ch).is_none()
    }

    fn peek(&self) -> Option<char> {
        if self.pos < self.end {
            Some(self.chars[self.pos])
        } else {
            None
        }
    }

    /// Consume one unit starting at a base symbol.
    fn unit(&mut self) -> Result<PhoneticUnit, TokenizeError> {
        let position = self.pos;
        let base = self.chars[position];
        let mut text = String::new();
        let mut affricate = false;

        text.push(base);
        self.pos += 1;
        self.attached_marks(&mut text);

        while let Some(tie) = self.peek().filter(|&c| self.inventory.is_tie_bar(c)) {
            text.push(tie);
            self.pos += 1;
            match self.peek() {
                Some(next) if self.is_base(next) => {
                    text.push(next);
                    self.pos += 1;
                    self.attached_marks(&mut text);
                    affricate = true;
                }
                _ => {
                    return Err(TokenizeError::DanglingTieBar {
                        text,
                        position: self.pos - 1,
                    })
                }
            }
        }

        let category = self
            .classifier
            .classify(&text)
            .map_err(|e| e.offset_by(position))?;

        Ok(PhoneticUnit::new(text, base, category, affricate, position))
    }

    fn attached_marks(&mut self, text: &mut String) {
        while let Some(mark) = self.peek().filter(|&c| self.inventory.is_attached_mark(c)) {
            text.push(mark);
            self.pos += 1;
        }
    }
}

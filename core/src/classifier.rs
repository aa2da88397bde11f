// core/src/classifier.rs
//
// Phoneme classifier: maps one raw unit to its `Category`.
//
// Classification is a table lookup on the base symbol. Marks never change
// the category, with one exception: a syllabicity mark (n̩, l̩) promotes a
// consonant to a syllabic consonant.
// Tie-barred affricates are always consonants.

use crate::error::ClassificationError;
use crate::inventory::{Inventory, SymbolClass};
use crate::unit::Category;

/// Table-driven classifier over an `Inventory`.
#[derive(Debug, Clone, Copy)]
pub struct Classifier<'a> {
    inventory: &'a Inventory,
}

impl<'a> Classifier<'a> {
    pub fn new(inventory: &'a Inventory) -> Self {
        Self { inventory }
    }

    /// Classify a single unit, e.g. `"uː"`, `"n̩"` or `"t͡ʃ"`.
    ///
    /// Every base symbol of the unit must be covered by the inventory; the
    /// error position is the character offset of the offending symbol
    /// within `unit`.
    pub fn classify(&self, unit: &str) -> Result<Category, ClassificationError> {
        let inv = self.inventory;
        let mut classes: Vec<SymbolClass> = Vec::with_capacity(2);
        let mut syllabic = false;

        for (offset, ch) in unit.chars().enumerate() {
            if inv.is_mark(ch) {
                syllabic |= inv.is_syllabic_mark(ch);
                continue;
            }
            match inv.symbol_class(ch) {
                Some(class) => classes.push(class),
                None => {
                    return Err(ClassificationError {
                        symbol: ch.to_string(),
                        unit: unit.to_string(),
                        position: offset,
                    })
                }
            }
        }

        match classes.as_slice() {
            [] => Err(ClassificationError {
                symbol: unit.to_string(),
                unit: unit.to_string(),
                position: 0,
            }),
            [class] => Ok(match class {
                SymbolClass::Vowel => Category::Vowel,
                SymbolClass::Glide => Category::Glide,
                SymbolClass::Consonant if syllabic => Category::SyllabicConsonant,
                SymbolClass::Consonant => Category::Consonant,
            }),
            // affricate
            _ => Ok(Category::Consonant),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(unit: &str) -> Result<Category, ClassificationError> {
        let inv = Inventory::builtin();
        Classifier::new(&inv).classify(unit)
    }

    #[test]
    fn plain_symbols() {
        assert_eq!(classify("a").unwrap(), Category::Vowel);
        assert_eq!(classify("ə").unwrap(), Category::Vowel);
        assert_eq!(classify("j").unwrap(), Category::Glide);
        assert_eq!(classify("w").unwrap(), Category::Glide);
        assert_eq!(classify("k").unwrap(), Category::Consonant);
        assert_eq!(classify("ʔ").unwrap(), Category::Consonant);
    }

    #[test]
    fn marks_do_not_change_category() {
        assert_eq!(classify("uː").unwrap(), Category::Vowel);
        // nasalized vowel
        assert_eq!(classify("a\u{303}").unwrap(), Category::Vowel);
        assert_eq!(classify("tʰ").unwrap(), Category::Consonant);
        assert_eq!(classify("kʷ").unwrap(), Category::Consonant);
    }

    #[test]
    fn syllabicity_marks() {
        assert_eq!(classify("n\u{329}").unwrap(), Category::SyllabicConsonant);
        assert_eq!(classify("l\u{30D}").unwrap(), Category::SyllabicConsonant);
        // only consonants are promoted
        assert_eq!(classify("a\u{329}").unwrap(), Category::Vowel);
        // a non-syllabic vowel is still a vowel
        assert_eq!(classify("ɪ\u{32F}").unwrap(), Category::Vowel);
    }

    #[test]
    fn affricates_are_consonants() {
        assert_eq!(classify("t\u{361}ʃ").unwrap(), Category::Consonant);
        assert_eq!(classify("d\u{35C}ʒ").unwrap(), Category::Consonant);
        // even when a half carries a syllabicity mark
        assert_eq!(classify("t\u{361}s\u{329}").unwrap(), Category::Consonant);
    }

    #[test]
    fn unknown_symbol_fails_loud() {
        let err = classify("Q").unwrap_err();
        assert_eq!(err.symbol, "Q");
        assert_eq!(err.position, 0);

        let err = classify("t\u{361}Q").unwrap_err();
        assert_eq!(err.symbol, "Q");
        assert_eq!(err.unit, "t\u{361}Q");
        assert_eq!(err.position, 2);
    }

    #[test]
    fn unit_without_base_is_an_error() {
        assert!(classify("ː").is_err());
        assert!(classify("").is_err());
    }
}

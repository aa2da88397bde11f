// core/src/segmenter.rs
//
// Onset / Nucleus / Coda segmentation of tokenized syllables.
//
// Rules, applied left to right with no backtracking:
//  1. Everything before the first vowel or syllabic consonant is onset,
//     including glides (a pre-vocalic glide is an onset consonant).
//  2. The nucleus starts at that peak and extends over following vowels
//     (aɪ, n̩a). Glides, consonants and syllabic consonants stop it, so a
//     glide after the nucleus is always coda (haj, aja).
//  3. Everything after the nucleus is coda.

use serde::Serialize;

use crate::error::{NoNucleusError, SegmentationError};
use crate::tokenizer::{Boundary, Delimiters, TokenStream};
use crate::unit::{join_units, Category, PhoneticUnit, Stress};

/// One syllable's units plus its written stress.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Syllable {
    units: Vec<PhoneticUnit>,
    stress: Option<Stress>,
}

impl Syllable {
    pub fn new(units: Vec<PhoneticUnit>, stress: Option<Stress>) -> Self {
        Self { units, stress }
    }

    pub fn units(&self) -> &[PhoneticUnit] {
        &self.units
    }

    pub fn stress(&self) -> Option<Stress> {
        self.stress
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Units only, without the stress mark.
    pub fn text(&self) -> String {
        join_units(&self.units)
    }
}

/// A syllable split into onset, nucleus and coda.
///
/// The three spans are stored as split points over the syllable's units, so
/// `onset ++ nucleus ++ coda` is the syllable by construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OncSegmentation {
    syllable: Syllable,
    nucleus_start: usize,
    coda_start: usize,
}

impl OncSegmentation {
    pub fn onset(&self) -> &[PhoneticUnit] {
        &self.syllable.units[..self.nucleus_start]
    }

    pub fn nucleus(&self) -> &[PhoneticUnit] {
        &self.syllable.units[self.nucleus_start..self.coda_start]
    }

    pub fn coda(&self) -> &[PhoneticUnit] {
        &self.syllable.units[self.coda_start..]
    }

    /// Nucleus followed by coda (the rhyme).
    pub fn rhyme(&self) -> &[PhoneticUnit] {
        &self.syllable.units[self.nucleus_start..]
    }

    pub fn units(&self) -> &[PhoneticUnit] {
        &self.syllable.units
    }

    pub fn syllable(&self) -> &Syllable {
        &self.syllable
    }

    pub fn stress(&self) -> Option<Stress> {
        self.syllable.stress
    }

    pub fn onset_text(&self) -> String {
        join_units(self.onset())
    }

    pub fn nucleus_text(&self) -> String {
        join_units(self.nucleus())
    }

    pub fn coda_text(&self) -> String {
        join_units(self.coda())
    }

    /// The syllable as written, stress mark included.
    pub fn text(&self) -> String {
        let mut out = String::new();
        self.write_to(&mut out);
        out
    }

    pub(crate) fn write_to(&self, out: &mut String) {
        if let Some(stress) = self.syllable.stress {
            out.push(stress.mark());
        }
        out.push_str(&self.syllable.text());
    }
}

/// Segmentation of a whole word: one `OncSegmentation` per syllable plus
/// the boundaries that separated them in the input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordResult {
    syllables: Vec<OncSegmentation>,
    boundaries: Vec<Boundary>,
    delimiters: Option<Delimiters>,
}

impl WordResult {
    pub fn syllables(&self) -> &[OncSegmentation] {
        &self.syllables
    }

    /// Boundaries between syllables; `boundaries()[i]` precedes
    /// `syllables()[i + 1]`.
    pub fn boundaries(&self) -> &[Boundary] {
        &self.boundaries
    }

    pub fn delimiters(&self) -> Option<Delimiters> {
        self.delimiters
    }

    pub fn first(&self) -> Option<&OncSegmentation> {
        self.syllables.first()
    }

    pub fn len(&self) -> usize {
        self.syllables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.syllables.is_empty()
    }

    /// Rebuild the (normalized) source word, delimiters included.
    pub fn reconstruct(&self) -> String {
        let mut out = String::new();
        if let Some(d) = self.delimiters {
            out.push(d.open());
        }
        self.write_syllables(&mut out, 0);
        if let Some(d) = self.delimiters {
            out.push(d.close());
        }
        out
    }

    /// Write syllables from `from` onwards, each preceded by the boundary
    /// marker that introduced it in the input.
    pub(crate) fn write_syllables(&self, out: &mut String, from: usize) {
        for (i, syllable) in self.syllables.iter().enumerate().skip(from) {
            if i > 0 {
                if let Some(marker) = self.boundaries[i - 1].marker {
                    out.push(marker);
                }
            }
            syllable.write_to(out);
        }
    }
}

/// Segment one syllable. `index` and `position` only feed error reports.
pub fn segment_syllable(
    syllable: Syllable,
    index: usize,
    position: usize,
) -> Result<OncSegmentation, SegmentationError> {
    if syllable.is_empty() {
        return Err(SegmentationError::EmptySyllable { index, position });
    }

    let units = syllable.units();
    let nucleus_start = units
        .iter()
        .position(|u| u.category().is_peak())
        .ok_or_else(|| NoNucleusError {
            syllable: syllable.text(),
            index,
            position,
        })?;

    let mut coda_start = nucleus_start + 1;
    while coda_start < units.len() && extends_nucleus(units[coda_start].category()) {
        coda_start += 1;
    }

    let seg = OncSegmentation {
        syllable,
        nucleus_start,
        coda_start,
    };
    tracing::trace!(
        index,
        onset = %seg.onset_text(),
        nucleus = %seg.nucleus_text(),
        coda = %seg.coda_text(),
        "segmented syllable"
    );
    Ok(seg)
}

/// Whether a unit of category `next` continues the nucleus.
fn extends_nucleus(next: Category) -> bool {
    match next {
        Category::Vowel => true,
        Category::Glide | Category::Consonant | Category::SyllabicConsonant => false,
    }
}

/// Segment every syllable of a tokenized word.
pub fn segment_stream(stream: TokenStream) -> Result<WordResult, SegmentationError> {
    if stream.is_empty() && stream.boundaries().is_empty() {
        return Err(SegmentationError::EmptyInput);
    }

    let parts = stream.into_parts();
    let mut syllables = Vec::with_capacity(parts.syllables.len());
    for (index, (units, stress)) in parts
        .syllables
        .into_iter()
        .zip(parts.stresses)
        .enumerate()
    {
        let position = match units.first() {
            Some(unit) => unit.position(),
            None if index == 0 => parts.boundaries.first().map_or(0, |b| b.position),
            None => parts.boundaries[index - 1].position,
        };
        syllables.push(segment_syllable(
            Syllable::new(units, stress),
            index,
            position,
        )?);
    }

    Ok(WordResult {
        syllables,
        boundaries: parts.boundaries,
        delimiters: parts.delimiters,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::Inventory;
    use crate::tokenizer::Tokenizer;

    fn segment(text: &str) -> Result<WordResult, SegmentationError> {
        let inv = Inventory::builtin();
        let stream = Tokenizer::new(&inv).tokenize(text)?;
        segment_stream(stream)
    }

    fn texts(units: &[PhoneticUnit]) -> Vec<&str> {
        units.iter().map(PhoneticUnit::text).collect()
    }

    fn spans(seg: &OncSegmentation) -> (Vec<&str>, Vec<&str>, Vec<&str>) {
        (texts(seg.onset()), texts(seg.nucleus()), texts(seg.coda()))
    }

    #[test]
    fn greedy_nucleus_stops_at_consonant() {
        let word = segment("kəmpjuːtər").unwrap();
        assert_eq!(word.len(), 1);
        let (onset, nucleus, coda) = spans(&word.syllables()[0]);
        assert_eq!(onset, vec!["k"]);
        assert_eq!(nucleus, vec!["ə"]);
        assert_eq!(coda, vec!["m", "p", "j", "uː", "t", "ə", "r"]);
    }

    #[test]
    fn pre_vocalic_glide_is_onset() {
        let word = segment("kəm.pjuːtər").unwrap();
        assert_eq!(word.len(), 2);
        let (onset, nucleus, coda) = spans(&word.syllables()[1]);
        assert_eq!(onset, vec!["p", "j"]);
        assert_eq!(nucleus, vec!["uː"]);
        assert_eq!(coda, vec!["t", "ə", "r"]);
    }

    #[test]
    fn single_vowel_syllable() {
        let word = segment("a").unwrap();
        let seg = &word.syllables()[0];
        assert!(seg.onset().is_empty());
        assert_eq!(seg.nucleus_text(), "a");
        assert!(seg.coda().is_empty());
    }

    #[test]
    fn diphthongs_fold_into_one_nucleus() {
        let word = segment("straɪk").unwrap();
        let (onset, nucleus, coda) = spans(&word.syllables()[0]);
        assert_eq!(onset, vec!["s", "t", "r"]);
        assert_eq!(nucleus, vec!["a", "ɪ"]);
        assert_eq!(coda, vec!["k"]);
    }

    #[test]
    fn glides_after_the_nucleus_are_coda() {
        let word = segment("haj").unwrap();
        let (onset, nucleus, coda) = spans(&word.syllables()[0]);
        assert_eq!(onset, vec!["h"]);
        assert_eq!(nucleus, vec!["a"]);
        assert_eq!(coda, vec!["j"]);

        let word = segment("hajt").unwrap();
        let (_, nucleus, coda) = spans(&word.syllables()[0]);
        assert_eq!(nucleus, vec!["a"]);
        assert_eq!(coda, vec!["j", "t"]);

        // consonant wins: the glide does not bridge two vowels
        let word = segment("aja").unwrap();
        let (_, nucleus, coda) = spans(&word.syllables()[0]);
        assert_eq!(nucleus, vec!["a"]);
        assert_eq!(coda, vec!["j", "a"]);

        let word = segment("ajn\u{329}").unwrap();
        let (_, nucleus, coda) = spans(&word.syllables()[0]);
        assert_eq!(nucleus, vec!["a"]);
        assert_eq!(coda, vec!["j", "n\u{329}"]);
    }

    #[test]
    fn non_syllabic_vowel_joins_the_nucleus() {
        let marked = segment("ha\u{26A}\u{32F}t").unwrap();
        let (_, nucleus, coda) = spans(&marked.syllables()[0]);
        assert_eq!(nucleus, vec!["a", "\u{26A}\u{32F}"]);
        assert_eq!(coda, vec!["t"]);

        let plain = segment("ha\u{26A}t").unwrap();
        assert_eq!(plain.syllables()[0].nucleus_text(), "a\u{26A}");
    }

    #[test]
    fn syllabic_consonant_nucleus() {
        let word = segment("bʌ.tn\u{329}").unwrap();
        let (onset, nucleus, coda) = spans(&word.syllables()[1]);
        assert_eq!(onset, vec!["t"]);
        assert_eq!(nucleus, vec!["n\u{329}"]);
        assert!(coda.is_empty());

        // a syllabic consonant stops a vowel nucleus
        let word = segment("an\u{329}").unwrap();
        let (_, nucleus, coda) = spans(&word.syllables()[0]);
        assert_eq!(nucleus, vec!["a"]);
        assert_eq!(coda, vec!["n\u{329}"]);
    }

    #[test]
    fn syllabic_consonant_nucleus_extends_over_vowels() {
        let word = segment("n\u{329}a").unwrap();
        let (onset, nucleus, coda) = spans(&word.syllables()[0]);
        assert!(onset.is_empty());
        assert_eq!(nucleus, vec!["n\u{329}", "a"]);
        assert!(coda.is_empty());

        let word = segment("tn\u{329}ap").unwrap();
        let (onset, nucleus, coda) = spans(&word.syllables()[0]);
        assert_eq!(onset, vec!["t"]);
        assert_eq!(nucleus, vec!["n\u{329}", "a"]);
        assert_eq!(coda, vec!["p"]);
    }

    #[test]
    fn affricate_onset() {
        let word = segment("t\u{361}ʃɪp").unwrap();
        let (onset, nucleus, coda) = spans(&word.syllables()[0]);
        assert_eq!(onset, vec!["t\u{361}ʃ"]);
        assert_eq!(nucleus, vec!["ɪ"]);
        assert_eq!(coda, vec!["p"]);
    }

    #[test]
    fn spans_reconstruct_every_syllable() {
        for text in ["kəm.pjuːtər", "ˈstraɪk", "a.ja.wi", "bʌ.tn\u{329}", "t\u{361}ʃɛ.ri"] {
            let word = segment(text).unwrap();
            for seg in word.syllables() {
                let mut joined: Vec<PhoneticUnit> = Vec::new();
                joined.extend_from_slice(seg.onset());
                joined.extend_from_slice(seg.nucleus());
                joined.extend_from_slice(seg.coda());
                assert_eq!(joined.as_slice(), seg.units(), "{text}");
                assert!(!seg.nucleus().is_empty());
            }
            assert_eq!(word.reconstruct(), text);
        }
    }

    #[test]
    fn no_nucleus() {
        let err = segment("pt").unwrap_err();
        assert_eq!(
            err,
            SegmentationError::NoNucleus(NoNucleusError {
                syllable: "pt".into(),
                index: 0,
                position: 0,
            })
        );

        // a glide alone is not a peak
        let err = segment("ba.j").unwrap_err();
        assert!(matches!(
            err,
            SegmentationError::NoNucleus(NoNucleusError { index: 1, position: 3, .. })
        ));
    }

    #[test]
    fn empty_syllables_are_rejected() {
        assert_eq!(
            segment("a..b").unwrap_err(),
            SegmentationError::EmptySyllable { index: 1, position: 1 }
        );
        assert_eq!(
            segment(".ap").unwrap_err(),
            SegmentationError::EmptySyllable { index: 0, position: 0 }
        );
        assert_eq!(
            segment("ap.").unwrap_err(),
            SegmentationError::EmptySyllable { index: 1, position: 2 }
        );
        assert_eq!(segment("").unwrap_err(), SegmentationError::EmptyInput);
        assert_eq!(segment("//").unwrap_err(), SegmentationError::EmptyInput);
    }

    #[test]
    fn stress_is_kept_per_syllable() {
        let word = segment("kəmˈpjuːtər").unwrap();
        assert_eq!(word.syllables()[0].stress(), None);
        assert_eq!(word.syllables()[1].stress(), Some(Stress::Primary));
        assert_eq!(word.syllables()[1].text(), "ˈpjuːtər");
        assert_eq!(word.reconstruct(), "kəmˈpjuːtər");
    }

    #[test]
    fn single_syllable_segmentation_directly() {
        let inv = Inventory::builtin();
        let stream = Tokenizer::new(&inv).tokenize("wɪn").unwrap();
        let seg = segment_syllable(Syllable::new(stream.units().to_vec(), None), 0, 0).unwrap();
        assert_eq!(seg.onset_text(), "w");
        assert_eq!(seg.nucleus_text(), "ɪ");
        assert_eq!(seg.coda_text(), "n");
        assert_eq!(seg.rhyme().len(), 2);
    }
}

// core/src/pig_latin.rs
//
// IPA Pig Latin, pivoting on the onset of the first syllable:
// - vowel-initial word: `ap`   -> `ap.ei`
// - otherwise the onset moves behind a new break: `træp` -> `æp.trei`
//
// Everything else (later syllables, their markers, stress, delimiters) is
// written back unchanged.

use crate::segmenter::WordResult;

/// Morpheme appended to every word.
pub const DEFAULT_SUFFIX: &str = "ei";

/// Break marker inserted before the appended syllable.
pub const DEFAULT_BREAK_MARKER: char = '.';

/// Pig Latin with the default suffix and break marker.
pub fn pig_latin(word: &WordResult) -> String {
    pig_latin_with(word, DEFAULT_SUFFIX, DEFAULT_BREAK_MARKER)
}

/// Pig Latin with an explicit suffix and inserted break marker.
pub fn pig_latin_with(word: &WordResult, suffix: &str, break_marker: char) -> String {
    let mut out = String::new();
    if let Some(d) = word.delimiters() {
        out.push(d.open());
    }

    let moved = match word.first() {
        Some(first) => {
            if let Some(stress) = first.stress() {
                out.push(stress.mark());
            }
            for unit in first.rhyme() {
                out.push_str(unit.text());
            }
            word.write_syllables(&mut out, 1);
            first.onset_text()
        }
        None => String::new(),
    };

    out.push(break_marker);
    out.push_str(&moved);
    out.push_str(suffix);

    if let Some(d) = word.delimiters() {
        out.push(d.close());
    }
    out
}

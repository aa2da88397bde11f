// piglatin/src/report.rs
//
// Reports are built only from a successful analysis; a word that fails to
// tokenize or segment produces an error and no report at all.

use std::fmt;

use libipa_core::{
    Analyzer, Category, OncSegmentation, SegmentationError, Stress, TokenStream, TokenizeError,
};
use serde::Serialize;
use unicode_width::UnicodeWidthStr;

/// One syllable of a `WordReport`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SyllableReport {
    pub text: String,
    pub onset: String,
    pub nucleus: String,
    pub coda: String,
    pub stress: Option<Stress>,
}

impl From<&OncSegmentation> for SyllableReport {
    fn from(seg: &OncSegmentation) -> Self {
        Self {
            text: seg.text(),
            onset: seg.onset_text(),
            nucleus: seg.nucleus_text(),
            coda: seg.coda_text(),
            stress: seg.stress(),
        }
    }
}

/// Full analysis of one word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordReport {
    pub input: String,
    pub syllables: Vec<SyllableReport>,
    pub reconstructed: String,
    pub pig_latin: String,
}

impl WordReport {
    pub fn analyze(analyzer: &Analyzer, input: &str) -> Result<Self, SegmentationError> {
        let word = analyzer.segment_word(input)?;
        Ok(Self {
            input: input.to_string(),
            syllables: word.syllables().iter().map(SyllableReport::from).collect(),
            reconstructed: word.reconstruct(),
            pig_latin: analyzer.pig_latin(&word),
        })
    }

    /// Plain-text table: one row per syllable with aligned columns.
    pub fn render_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for WordReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let header = ["#", "onset", "nucleus", "coda"];
        let rows: Vec<[String; 4]> = self
            .syllables
            .iter()
            .enumerate()
            .map(|(i, s)| {
                let number = match s.stress {
                    Some(stress) => format!("{}{}", stress.mark(), i + 1),
                    None => (i + 1).to_string(),
                };
                [number, s.onset.clone(), s.nucleus.clone(), s.coda.clone()]
            })
            .collect();

        let mut widths = header.map(|h| h.width());
        for row in &rows {
            for (w, cell) in widths.iter_mut().zip(row) {
                *w = (*w).max(cell.width());
            }
        }

        writeln!(f, "{}", self.input)?;
        write_row(f, &header[..], &widths)?;
        for row in &rows {
            write_row(f, &row[..], &widths)?;
        }
        writeln!(f, "  reconstructed: {}", self.reconstructed)?;
        writeln!(f, "  pig latin:     {}", self.pig_latin)
    }
}

fn write_row<S: AsRef<str>>(
    f: &mut fmt::Formatter<'_>,
    cells: &[S],
    widths: &[usize],
) -> fmt::Result {
    let mut line = String::from(" ");
    for (cell, &width) in cells.iter().zip(widths) {
        let cell = cell.as_ref();
        line.push(' ');
        line.push_str(cell);
        line.extend(std::iter::repeat(' ').take(width - cell.width()));
    }
    writeln!(f, "{}", line.trim_end())
}

/// One phonetic unit of a `TokenReport`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnitReport {
    pub text: String,
    pub category: Category,
    pub affricate: bool,
    pub position: usize,
}

/// Tokenizer output for one word, grouped by syllable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenReport {
    pub input: String,
    pub syllables: Vec<Vec<UnitReport>>,
}

impl TokenReport {
    pub fn analyze(analyzer: &Analyzer, input: &str) -> Result<Self, TokenizeError> {
        let stream = analyzer.tokenize(input)?;
        Ok(Self::from_stream(input, &stream))
    }

    fn from_stream(input: &str, stream: &TokenStream) -> Self {
        let syllables = stream
            .syllables()
            .into_iter()
            .map(|units| {
                units
                    .iter()
                    .map(|u| UnitReport {
                        text: u.text().to_string(),
                        category: u.category(),
                        affricate: u.is_affricate(),
                        position: u.position(),
                    })
                    .collect()
            })
            .collect();
        Self {
            input: input.to_string(),
            syllables,
        }
    }

    /// `unit:category` pairs, syllables separated by ` | `.
    pub fn render_text(&self) -> String {
        let syllables: Vec<String> = self
            .syllables
            .iter()
            .map(|units| {
                units
                    .iter()
                    .map(|u| format!("{}:{}", u.text, u.category))
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect();
        format!("{}\t{}", self.input, syllables.join(" | "))
    }
}

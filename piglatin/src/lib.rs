//! ipa-piglatin crate root
//!
//! Presentation layer over `libipa-core`: serializable per-word reports
//! (syllables split into onset/nucleus/coda, reconstruction, Pig Latin) and
//! their plain-text rendering. The `ipa-piglatin` binary is a thin clap
//! front end over this.
//!
//! Public API exported here:
//! - `WordReport`, `SyllableReport` from `report`
//! - `TokenReport`, `UnitReport` from `report`

pub mod report;

pub use libipa_core::{Analyzer, Config};
pub use report::{SyllableReport, TokenReport, UnitReport, WordReport};

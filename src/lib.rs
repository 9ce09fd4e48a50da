//! # rhyme-detector
//!
//! A library for finding rhymes in verse and lyrics.
//!
//! Given a verse whose characters are labelled with phonetic rhyme groups,
//! `rhyme-detector` reports every rhyming relationship it can find and resolves
//! overlapping candidates into a single, non-overlapping assignment.
//!
//! ## Features
//!
//! - **End rhyme**: Spans that close their lines, up to a few lines apart
//! - **Inter-line rhyme**: Non-terminal spans at similar positions on nearby lines
//! - **Internal rhyme**: Spans close together on the same line
//! - **Multi-character spans**: Longer matching label sequences rank higher
//! - **Conflict resolution**: Greedy, priority-ordered, deterministic
//! - **Renderer support**: Stable identifiers, per-sequence colors, cell lookup
//!
//! ## Example
//!
//! ```rust,no_run
//! use rhyme_detector::parsing::table::PhoneticTable;
//! use rhyme_detector::{AnalysisOptions, RhymeEngine};
//! use std::path::Path;
//!
//! // Build the phonetic mapping once
//! let table = PhoneticTable::load_from_file(Path::new("rhymes.tsv")).unwrap();
//! let verse = table.to_verse("床前明月光\n疑是地上霜\n");
//!
//! // Find rhymes
//! let engine = RhymeEngine::new(AnalysisOptions::default());
//! let result = engine.analyze(&verse).unwrap();
//!
//! for r in &result.results {
//!     println!("{} {} {}", r.id, r.rhyme_type, r.sequence.join(" "));
//! }
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Verse, character and result types
//! - [`matching`]: Span extraction, match generation, selection and scoring
//! - [`parsing`]: Verse JSON and phonetic table readers
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod core;
pub mod matching;
pub mod parsing;
pub mod utils;

// Re-export commonly used types for convenience
pub use core::result::{AnalysisResult, AnalysisSummary, Position, RhymeResult, RhymeTypeCounts};
pub use core::types::RhymeType;
pub use core::verse::{CharInfo, Line, Verse, UNKNOWN_GROUP};
pub use matching::engine::{AnalysisError, AnalysisOptions, RhymeEngine};
pub use parsing::table::PhoneticTable;

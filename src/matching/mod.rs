//! Rhyme matching engine and scoring.
//!
//! This module provides the core matching functionality:
//!
//! - [`RhymeEngine`]: Main entry point for analysing a verse
//! - [`AnalysisOptions`]: Which rhyme types to detect and their tolerances
//!
//! ## Matching Algorithm
//!
//! Analysis is a single pass through four stages:
//!
//! 1. **Span extraction**: Every contiguous run of labelled characters in every line
//! 2. **Match generation**: Spans with identical label sequences are paired and classified
//! 3. **Greedy selection**: Matches are committed by priority, never sharing a character
//! 4. **Assembly**: Committed matches get identifiers, colors and a summary
//!
//! ## Rhyme Types
//!
//! | Type | Applies when | Interval | Base |
//! |------|--------------|----------|------|
//! | End rhyme | either span ends its line | lines apart | 1000 |
//! | Inter-line rhyme | neither ends its line, different lines | position offset | 500 |
//! | Internal rhyme | same line | character gap | 100 |
//!
//! A pair's priority is `base - interval + length * 10`.
//!
//! ## Example
//!
//! ```rust
//! use rhyme_detector::{AnalysisOptions, CharInfo, Line, RhymeEngine, Verse};
//!
//! let line = |c: &str, g: &str| Line::new(c, vec![CharInfo::new(c, "", g, g)]);
//! let verse = Verse::new(vec![line("光", "ang"), line("霜", "ang")]);
//!
//! let engine = RhymeEngine::new(AnalysisOptions::default());
//! let result = engine.analyze(&verse).unwrap();
//!
//! assert_eq!(result.summary.rhyme_types.end_rhyme, 1);
//! ```

pub mod assembler;
pub mod engine;
pub mod extractor;
pub mod generator;
pub mod scoring;
pub mod selector;

pub use engine::{AnalysisError, AnalysisOptions, RhymeEngine};

//! Core data types for rhyme detection.
//!
//! This module provides the fundamental types used throughout the library:
//!
//! - [`CharInfo`], [`Line`], [`Verse`]: The labelled input text
//! - [`RhymeType`]: Classification of a rhyming relationship
//! - [`RhymeResult`], [`AnalysisSummary`], [`AnalysisResult`]: Analysis output
//!
//! ## Rhyme Groups
//!
//! Every character carries two rhyme-group labels produced by a phonetic
//! mapping step:
//!
//! | Label | Granularity | Used for matching |
//! |-------|-------------|-------------------|
//! | `normalGroup` | coarse (e.g. `ang`) | Yes |
//! | `strictGroup` | fine (e.g. `uang`) | No, carried through |
//!
//! A `normalGroup` of `unknown` (or empty) marks a character that can never
//! be part of a rhyme.
//!
//! [`CharInfo`]: verse::CharInfo
//! [`Line`]: verse::Line
//! [`Verse`]: verse::Verse
//! [`RhymeType`]: types::RhymeType
//! [`RhymeResult`]: result::RhymeResult
//! [`AnalysisSummary`]: result::AnalysisSummary
//! [`AnalysisResult`]: result::AnalysisResult

pub mod result;
pub mod types;
pub mod verse;

//! Readers that produce a [`Verse`](crate::core::verse::Verse).
//!
//! This module provides:
//!
//! - **Verse JSON**: A pre-labelled verse, checked for shape before use
//! - **Phonetic tables**: TSV character tables used to label raw text
//!
//! ## Example
//!
//! ```rust,no_run
//! use rhyme_detector::parsing::table::PhoneticTable;
//! use rhyme_detector::parsing::verse::parse_verse_text;
//! use std::path::Path;
//!
//! // Label raw text through a phonetic table
//! let table = PhoneticTable::load_from_file(Path::new("rhymes.tsv")).unwrap();
//! let verse = table.to_verse("床前明月光\n疑是地上霜\n");
//!
//! // Or read an already labelled verse
//! let verse = parse_verse_text(r#"[{"text": "", "chars": []}]"#).unwrap();
//! ```
//!
//! ## Verse JSON
//!
//! | Field | Where | Type |
//! |-------|-------|------|
//! | `text` | line | string |
//! | `chars` | line | array of characters |
//! | `character` | character | string |
//! | `transcription` | character | string |
//! | `normalGroup` | character | string |
//! | `strictGroup` | character | string |
//!
//! ## Phonetic Table Columns
//!
//! | Column | Description |
//! |--------|-------------|
//! | 1 | A single character |
//! | 2 | Transcription |
//! | 3 | Coarse rhyme group |
//! | 4 | Fine rhyme group |

pub mod table;
pub mod verse;

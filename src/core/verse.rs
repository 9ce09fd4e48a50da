use serde::{Deserialize, Serialize};

/// Rhyme-group label given to characters with no identifiable rhyme class
pub const UNKNOWN_GROUP: &str = "unknown";

/// One character of a line together with its phonetic labels
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharInfo {
    /// The character as written
    pub character: String,

    /// Phonetic transcription (e.g. pinyin with tone)
    pub transcription: String,

    /// Coarse rhyme-group label; may be [`UNKNOWN_GROUP`] or empty
    pub normal_group: String,

    /// Fine-grained rhyme-group label
    pub strict_group: String,
}

impl CharInfo {
    pub fn new(
        character: impl Into<String>,
        transcription: impl Into<String>,
        normal_group: impl Into<String>,
        strict_group: impl Into<String>,
    ) -> Self {
        Self {
            character: character.into(),
            transcription: transcription.into(),
            normal_group: normal_group.into(),
            strict_group: strict_group.into(),
        }
    }

    /// A character the phonetic mapping could not classify
    pub fn unknown(character: impl Into<String>) -> Self {
        Self::new(character, "", UNKNOWN_GROUP, UNKNOWN_GROUP)
    }

    /// True if the coarse label names a real rhyme group
    #[must_use]
    pub fn has_rhyme_group(&self) -> bool {
        !self.normal_group.is_empty() && self.normal_group != UNKNOWN_GROUP
    }
}

/// A line of verse: its raw text and one [`CharInfo`] per character
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    pub text: String,
    pub chars: Vec<CharInfo>,
}

impl Line {
    pub fn new(text: impl Into<String>, chars: Vec<CharInfo>) -> Self {
        Self {
            text: text.into(),
            chars,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}

/// The complete input of one analysis: an ordered list of lines
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Verse {
    pub lines: Vec<Line>,
}

impl Verse {
    #[must_use]
    pub fn new(lines: Vec<Line>) -> Self {
        Self { lines }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of characters in line `index`, or 0 if there is no such line
    #[must_use]
    pub fn line_len(&self, index: usize) -> usize {
        self.lines.get(index).map_or(0, Line::len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_rhyme_group() {
        assert!(CharInfo::new("光", "guang1", "ang", "uang").has_rhyme_group());
        assert!(!CharInfo::unknown("，").has_rhyme_group());
        assert!(!CharInfo::new("x", "", "", "").has_rhyme_group());
    }

    #[test]
    fn test_verse_serializes_as_array_of_lines() {
        let verse = Verse::new(vec![Line::new(
            "光",
            vec![CharInfo::new("光", "guang1", "ang", "uang")],
        )]);

        let json = serde_json::to_value(&verse).unwrap();
        assert!(json.is_array());
        assert_eq!(json[0]["text"], "光");
        assert_eq!(json[0]["chars"][0]["normalGroup"], "ang");
        assert_eq!(json[0]["chars"][0]["strictGroup"], "uang");
    }

    #[test]
    fn test_line_len() {
        let verse = Verse::new(vec![Line::new("ab", vec![
            CharInfo::unknown("a"),
            CharInfo::unknown("b"),
        ])]);
        assert_eq!(verse.line_len(0), 2);
        assert_eq!(verse.line_len(7), 0);
    }
}

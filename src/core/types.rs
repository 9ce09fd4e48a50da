use serde::{Deserialize, Serialize};

/// Kind of rhyming relationship between two spans
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RhymeType {
    /// At least one of the spans ends its line
    EndRhyme,
    /// Non-terminal spans on different lines at similar positions
    InterLineRhyme,
    /// Both spans on the same line
    InternalRhyme,
}

impl RhymeType {
    /// Base score a match of this type starts from before interval and length adjustments
    #[must_use]
    pub fn base_priority(self) -> i64 {
        match self {
            Self::EndRhyme => 1000,
            Self::InterLineRhyme => 500,
            Self::InternalRhyme => 100,
        }
    }

    /// Wire name, matching the serde representation
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::EndRhyme => "endRhyme",
            Self::InterLineRhyme => "interLineRhyme",
            Self::InternalRhyme => "internalRhyme",
        }
    }
}

impl std::fmt::Display for RhymeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EndRhyme => write!(f, "End rhyme"),
            Self::InterLineRhyme => write!(f, "Inter-line rhyme"),
            Self::InternalRhyme => write!(f, "Internal rhyme"),
        }
    }
}

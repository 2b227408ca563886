//! Mood and check-in model for the daily safety check.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Self-reported mood offered by the safety check screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    Good,
    Okay,
    Bad,
}

/// Wire value for [`Mood::Good`].
pub const MOOD_GOOD: &str = "good";
/// Wire value for [`Mood::Okay`].
pub const MOOD_OKAY: &str = "okay";
/// Wire value for [`Mood::Bad`].
pub const MOOD_BAD: &str = "bad";

impl Mood {
    /// All moods in display order.
    pub const ALL: [Mood; 3] = [Mood::Good, Mood::Okay, Mood::Bad];

    /// Stable string id used across FFI.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Good => MOOD_GOOD,
            Self::Okay => MOOD_OKAY,
            Self::Bad => MOOD_BAD,
        }
    }

    /// User-facing option label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Good => "좋아요",
            Self::Okay => "보통이에요",
            Self::Bad => "안 좋아요",
        }
    }
}

/// Parses a mood from its wire value.
pub fn parse_mood(value: &str) -> Result<Mood, MoodParseError> {
    let normalized = value.trim();
    if normalized.is_empty() {
        return Err(MoodParseError::EmptyMood);
    }

    match normalized {
        MOOD_GOOD => Ok(Mood::Good),
        MOOD_OKAY => Ok(Mood::Okay),
        MOOD_BAD => Ok(Mood::Bad),
        other => Err(MoodParseError::UnknownMood(other.to_string())),
    }
}

/// Mood parse errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoodParseError {
    EmptyMood,
    UnknownMood(String),
}

impl Display for MoodParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyMood => write!(f, "mood value must not be empty"),
            Self::UnknownMood(value) => write!(f, "mood is unsupported: {value}"),
        }
    }
}

impl Error for MoodParseError {}

/// One confirmed safety check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckIn {
    pub mood: Mood,
    /// Unix epoch milliseconds supplied by the caller.
    pub confirmed_at_ms: i64,
}

#[cfg(test)]
mod tests {
    use super::{parse_mood, Mood, MoodParseError};

    #[test]
    fn parses_every_mood_wire_value() {
        for mood in Mood::ALL {
            assert_eq!(parse_mood(mood.as_str()).expect("mood parse"), mood);
        }
    }

    #[test]
    fn rejects_blank_and_unknown_values() {
        assert_eq!(parse_mood("  "), Err(MoodParseError::EmptyMood));
        assert_eq!(
            parse_mood("great"),
            Err(MoodParseError::UnknownMood("great".to_string()))
        );
    }
}

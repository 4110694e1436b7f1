//! Core types for the vocabulary trainer.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Consecutive correct answers required before a hard word counts as learned.
pub const MASTERY_STREAK_THRESHOLD: u32 = 3;

/// A tracked language in the word list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    Dutch,
    English,
    Russian,
}

impl Language {
    pub const ALL: [Language; 3] = [Self::Dutch, Self::English, Self::Russian];

    /// Column name in the word-list and hard-word tables.
    pub fn column(self) -> &'static str {
        match self {
            Self::Dutch => "dutch",
            Self::English => "english",
            Self::Russian => "russian",
        }
    }

    /// Capitalized label for prompts.
    pub fn label(self) -> &'static str {
        match self {
            Self::Dutch => "Dutch",
            Self::English => "English",
            Self::Russian => "Russian",
        }
    }
}

/// A single vocabulary entry.
///
/// Identity for lookup and deduplication is the three language fields;
/// `section` and `unit` are organizational only, so the same word listed
/// in two units is one entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    pub section: String,
    pub unit: String,
    pub dutch: String,
    pub english: String,
    pub russian: String,
}

impl Word {
    /// Text of this word in the given language.
    pub fn text(&self, lang: Language) -> &str {
        match lang {
            Language::Dutch => &self.dutch,
            Language::English => &self.english,
            Language::Russian => &self.russian,
        }
    }

    /// Word identity: all language fields equal, section/unit ignored.
    pub fn same_identity(&self, other: &Word) -> bool {
        Language::ALL
            .iter()
            .all(|&lang| self.text(lang) == other.text(lang))
    }
}

/// A word the user has missed at least once, plus its mastery state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HardWordRecord {
    pub word: Word,
    /// Date of the first recorded miss.
    pub date_added: NaiveDate,
    /// Consecutive correct answers since the last miss.
    pub correct_streak: u32,
    /// Total misses ever recorded.
    pub incorrect_count: u32,
    /// False once learned; such rows are kept as history but skipped
    /// by practice sessions.
    pub is_active: bool,
}

impl HardWordRecord {
    /// Fresh record for a word missed for the first time.
    pub fn new(word: Word, date_added: NaiveDate) -> Self {
        Self {
            word,
            date_added,
            correct_streak: 0,
            incorrect_count: 1,
            is_active: true,
        }
    }
}

//! Core vocabulary-trainer library used by the CLI.
//!
//! Provides:
//! - Master word-list loading (CSV/TSV with column validation)
//! - Fuzzy answer matching (sequence-ratio threshold)
//! - Hard-word store with per-word mastery tracking
//! - Shared types (Word, HardWordRecord, Language)

pub mod error;
pub mod matching;
pub mod store;
pub mod types;
pub mod wordlist;

pub use error::{LoadError, StoreError};
pub use matching::{
    is_acceptable, is_perfect_match, similarity_ratio, DEFAULT_SIMILARITY_THRESHOLD,
};
pub use store::{CsvHardWordStore, HardWordStore};
pub use types::{HardWordRecord, Language, Word, MASTERY_STREAK_THRESHOLD};
pub use wordlist::load_words;

//! Hard-word store: persisted mastery tracking for missed words.
//!
//! Backed by a flat CSV table. Every mutation is a full read-modify-write
//! of the table: load all rows, update the matching one, write the whole
//! file back. The tool is single-user and single-process, so no locking
//! is attempted; concurrent instances are last-writer-wins.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};

use crate::error::StoreError;
use crate::types::{HardWordRecord, Word};

type Result<T> = std::result::Result<T, StoreError>;

/// Mastery tracking over previously-missed words.
///
/// All lookups use Word identity (the language fields); if duplicate
/// identity rows ever exist in storage, the first one in storage order
/// is the one operated on.
pub trait HardWordStore {
    /// Record a miss. Updates the existing record (count up, streak
    /// reset, reactivated) or inserts a fresh one dated today.
    fn record_miss(&self, word: &Word) -> Result<()>;

    /// Record a correct answer during practice and return the new
    /// streak. Unknown words are a no-op returning 0.
    fn record_correct(&self, word: &Word) -> Result<u32>;

    /// Retire a word from practice. The row is kept as history, only
    /// deactivated. Whether the streak justifies this is the caller's
    /// check, against [`crate::types::MASTERY_STREAK_THRESHOLD`].
    fn mark_learned(&self, word: &Word) -> Result<()>;

    /// All records, in storage order. A missing backing file is an
    /// empty store, not an error.
    fn load_records(&self) -> Result<Vec<HardWordRecord>>;

    /// Records still eligible for practice.
    fn active_records(&self) -> Result<Vec<HardWordRecord>> {
        Ok(self
            .load_records()?
            .into_iter()
            .filter(|record| record.is_active)
            .collect())
    }
}

const WORD_COLUMNS: [&str; 5] = ["section", "unit", "dutch", "english", "russian"];
const DATE_FORMAT: &str = "%Y-%m-%d";

/// CSV-file-backed [`HardWordStore`].
pub struct CsvHardWordStore {
    path: PathBuf,
}

impl CsvHardWordStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_records(&self, records: &[HardWordRecord]) -> Result<()> {
        let mut writer = csv::Writer::from_path(&self.path)?;
        writer.write_record(
            WORD_COLUMNS
                .iter()
                .copied()
                .chain(["date_added", "correct_streak", "incorrect_count", "is_active"]),
        )?;
        for record in records {
            let date_added = record.date_added.format(DATE_FORMAT).to_string();
            let correct_streak = record.correct_streak.to_string();
            let incorrect_count = record.incorrect_count.to_string();
            writer.write_record([
                record.word.section.as_str(),
                record.word.unit.as_str(),
                record.word.dutch.as_str(),
                record.word.english.as_str(),
                record.word.russian.as_str(),
                date_added.as_str(),
                correct_streak.as_str(),
                incorrect_count.as_str(),
                if record.is_active { "True" } else { "False" },
            ])?;
        }
        writer.flush().map_err(StoreError::Io)
    }

    fn update_first_match<F>(&self, word: &Word, apply: F) -> Result<Option<u32>>
    where
        F: FnOnce(&mut HardWordRecord) -> u32,
    {
        let mut records = self.load_records()?;
        let Some(record) = records
            .iter_mut()
            .find(|record| record.word.same_identity(word))
        else {
            return Ok(None);
        };
        let value = apply(record);
        self.write_records(&records)?;
        Ok(Some(value))
    }
}

impl HardWordStore for CsvHardWordStore {
    fn record_miss(&self, word: &Word) -> Result<()> {
        let mut records = self.load_records()?;
        match records
            .iter_mut()
            .find(|record| record.word.same_identity(word))
        {
            Some(record) => {
                record.incorrect_count += 1;
                record.correct_streak = 0;
                // A learned word missed again goes back into rotation.
                record.is_active = true;
            }
            None => {
                records.push(HardWordRecord::new(
                    word.clone(),
                    Local::now().date_naive(),
                ));
            }
        }
        self.write_records(&records)
    }

    fn record_correct(&self, word: &Word) -> Result<u32> {
        let streak = self.update_first_match(word, |record| {
            record.correct_streak += 1;
            record.correct_streak
        })?;
        Ok(streak.unwrap_or(0))
    }

    fn mark_learned(&self, word: &Word) -> Result<()> {
        self.update_first_match(word, |record| {
            record.is_active = false;
            0
        })?;
        Ok(())
    }

    fn load_records(&self) -> Result<Vec<HardWordRecord>> {
        let file = match std::fs::File::open(&self.path) {
            Ok(file) => file,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(StoreError::Io(err)),
        };

        let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(file);
        let headers = reader.headers()?.clone();
        let column = |name: &'static str| headers.iter().position(|h| h.trim() == name);

        // Without the word columns there is nothing to salvage.
        for name in WORD_COLUMNS {
            if column(name).is_none() {
                return Err(StoreError::MissingColumn(name));
            }
        }
        let word_at = WORD_COLUMNS.map(|name| column(name).unwrap());

        // Mastery columns may be absent in tables written before streak
        // tracking existed; those load with defaults.
        let date_at = column("date_added");
        let streak_at = column("correct_streak");
        let incorrect_at = column("incorrect_count");
        let active_at = column("is_active");
        let today = Local::now().date_naive();

        let mut records = Vec::new();
        for (index, row) in reader.records().enumerate() {
            let row = row?;
            // Header is row 1.
            let row_number = index + 2;
            let cell = |at: Option<usize>| at.and_then(|at| row.get(at)).unwrap_or("");

            let word = Word {
                section: cell(Some(word_at[0])).to_string(),
                unit: cell(Some(word_at[1])).to_string(),
                dutch: cell(Some(word_at[2])).to_string(),
                english: cell(Some(word_at[3])).to_string(),
                russian: cell(Some(word_at[4])).to_string(),
            };

            records.push(HardWordRecord {
                word,
                date_added: parse_date(cell(date_at), today, row_number)?,
                correct_streak: parse_count(cell(streak_at), "correct_streak", row_number)?,
                incorrect_count: parse_count(cell(incorrect_at), "incorrect_count", row_number)?,
                is_active: parse_active(cell(active_at), row_number)?,
            });
        }
        Ok(records)
    }
}

fn parse_count(value: &str, column: &'static str, row: usize) -> Result<u32> {
    if value.is_empty() {
        return Ok(0);
    }
    value.trim().parse().map_err(|_| StoreError::InvalidField {
        column,
        value: value.to_string(),
        row,
    })
}

fn parse_active(value: &str, row: usize) -> Result<bool> {
    match value {
        "" | "True" => Ok(true),
        "False" => Ok(false),
        other => Err(StoreError::InvalidField {
            column: "is_active",
            value: other.to_string(),
            row,
        }),
    }
}

fn parse_date(value: &str, fallback: NaiveDate, row: usize) -> Result<NaiveDate> {
    if value.is_empty() {
        return Ok(fallback);
    }
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|_| StoreError::InvalidField {
        column: "date_added",
        value: value.to_string(),
        row,
    })
}

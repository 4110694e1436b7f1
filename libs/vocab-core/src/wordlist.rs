//! Master word-list loader.
//!
//! The word list is a delimited table with a header row; `.csv` and
//! `.tsv` are supported, selected by extension. The column contract is
//! the same for both: `section`, `unit`, plus one column per tracked
//! language. Blank cells come back as empty strings, never as a
//! missing-value marker.

use std::fs::File;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::LoadError;
use crate::types::{Language, Word};

/// Columns every word list must provide.
pub const REQUIRED_COLUMNS: [&str; 5] = ["section", "unit", "dutch", "english", "russian"];

/// Load all words from `path`.
///
/// Missing file, unsupported extension and missing required columns are
/// reported as distinct [`LoadError`]s; callers abort the session on any
/// of them rather than proceeding with partial data.
pub fn load_words(path: &Path) -> Result<Vec<Word>, LoadError> {
    let delimiter =
        delimiter_for(path).ok_or_else(|| LoadError::UnsupportedFormat(path.to_path_buf()))?;

    let file = File::open(path).map_err(|err| match err.kind() {
        ErrorKind::NotFound => LoadError::NotFound(path.to_path_buf()),
        _ => LoadError::Io(err),
    })?;

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .from_reader(file);

    let headers = reader.headers()?.clone();
    let column = |name: &str| headers.iter().position(|h| h.trim() == name);

    let missing: Vec<&str> = REQUIRED_COLUMNS
        .iter()
        .copied()
        .filter(|&name| column(name).is_none())
        .collect();
    if !missing.is_empty() {
        return Err(LoadError::MissingColumns(missing.join(", ")));
    }

    // Presence checked above.
    let section_at = column("section").unwrap();
    let unit_at = column("unit").unwrap();
    let lang_at = |lang: Language| column(lang.column()).unwrap();
    let (dutch_at, english_at, russian_at) = (
        lang_at(Language::Dutch),
        lang_at(Language::English),
        lang_at(Language::Russian),
    );

    let mut words = Vec::new();
    for record in reader.records() {
        let record = record?;
        // Short rows pad out with empty cells.
        let cell = |at: usize| record.get(at).unwrap_or("").to_string();
        words.push(Word {
            section: cell(section_at),
            unit: cell(unit_at),
            dutch: cell(dutch_at),
            english: cell(english_at),
            russian: cell(russian_at),
        });
    }
    Ok(words)
}

fn delimiter_for(path: &Path) -> Option<u8> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("csv") => Some(b','),
        Some("tsv") => Some(b'\t'),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    fn write_file(dir: &tempfile::TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut file = File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn loads_csv_word_list() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            &dir,
            "words.csv",
            "section,unit,dutch,english,russian\n1,2,kat,cat,кошка\n1,3,hond,dog,собака\n",
        );

        let words = load_words(&path).unwrap();
        assert_eq!(words.len(), 2);
        assert_eq!(words[0].dutch, "kat");
        assert_eq!(words[1].russian, "собака");
        assert_eq!(words[1].unit, "3");
    }

    #[test]
    fn loads_tsv_word_list() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            &dir,
            "words.tsv",
            "section\tunit\tdutch\tenglish\trussian\n1\t2\tkat\tcat\tкошка\n",
        );

        let words = load_words(&path).unwrap();
        assert_eq!(words.len(), 1);
        assert_eq!(words[0].english, "cat");
    }

    #[test]
    fn tolerates_extra_columns_and_header_whitespace() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            &dir,
            "words.csv",
            "notes, section,unit,dutch,english,russian\nx,1,2,kat,cat,кошка\n",
        );

        let words = load_words(&path).unwrap();
        assert_eq!(words[0].section, "1");
    }

    #[test]
    fn blank_and_missing_cells_become_empty_strings() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            &dir,
            "words.csv",
            "section,unit,dutch,english,russian\n1,2,kat,,\n1,2\n",
        );

        let words = load_words(&path).unwrap();
        assert_eq!(words[0].english, "");
        assert_eq!(words[1].dutch, "");
        assert_eq!(words[1].unit, "2");
    }

    #[test]
    fn missing_columns_are_reported_by_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "words.csv", "section,dutch,english\n1,kat,cat\n");

        match load_words(&path) {
            Err(LoadError::MissingColumns(names)) => {
                assert_eq!(names, "unit, russian");
            }
            other => panic!("expected MissingColumns, got {other:?}"),
        }
    }

    #[test]
    fn unsupported_extension_is_rejected() {
        let path = Path::new("words.xlsx");
        assert!(matches!(
            load_words(path),
            Err(LoadError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn missing_file_is_a_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.csv");
        assert!(matches!(load_words(&path), Err(LoadError::NotFound(_))));
    }
}

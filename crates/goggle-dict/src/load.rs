//! Word list ingestion.
//!
//! One word per line. Lines are trimmed and lowercased; blank lines and
//! entries shorter than [`MIN_WORD_LEN`] are dropped here so that the
//! resulting [`Dictionary`] only ever holds candidate answers.

use crate::dictionary::{Dictionary, MIN_WORD_LEN};
use crate::error::DictionaryError;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Read a word list from any buffered reader.
///
/// ```
/// use goggle_dict::load;
///
/// let text = "Cat\nan\n\ncas\n";
/// let dict = load::from_reader(text.as_bytes()).unwrap();
/// assert_eq!(dict.words(), &["cas".to_string(), "cat".to_string()]);
/// ```
pub fn from_reader<R: BufRead>(reader: R) -> Result<Dictionary, DictionaryError> {
    let mut words = Vec::new();
    for line in reader.lines() {
        let line = line.map_err(|e| DictionaryError::Io {
            reason: e.to_string(),
        })?;
        let word = line.trim().to_lowercase();
        if word.chars().count() >= MIN_WORD_LEN {
            words.push(word);
        }
    }
    Dictionary::new(words)
}

/// Read a word list from a file.
pub fn from_path(path: impl AsRef<Path>) -> Result<Dictionary, DictionaryError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| DictionaryError::Io {
        reason: format!("{}: {e}", path.display()),
    })?;
    from_reader(BufReader::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn reader_filters_and_normalises() {
        let text = "  ZEBRA \nox\na\n\ncat\nCAT\n";
        let d = from_reader(text.as_bytes()).unwrap();
        assert_eq!(d.words(), &["cat", "zebra"]);
    }

    #[test]
    fn reader_empty_input() {
        let d = from_reader("".as_bytes()).unwrap();
        assert!(d.is_empty());
    }

    #[test]
    fn path_round_trip() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "dog").unwrap();
        writeln!(file, "ant").unwrap();
        writeln!(file, "be").unwrap();
        let d = from_path(file.path()).unwrap();
        assert_eq!(d.words(), &["ant", "dog"]);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.txt");
        let err = from_path(&missing).unwrap_err();
        match err {
            DictionaryError::Io { reason } => assert!(reason.contains("nope.txt")),
            other => panic!("expected Io error, got {other:?}"),
        }
    }
}

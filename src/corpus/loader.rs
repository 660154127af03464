//! One-shot JSON corpus loading.
//!
//! Loading is the only I/O the library performs. It reads the whole resource,
//! deserializes it into [`RawCorpus`] (either shape), and hands the result to
//! the index builder. There are no retries here; a caller may re-invoke load.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::corpus::entry::RawCorpus;
use crate::error::{RemezError, Result};

/// Load a raw corpus from a JSON file.
pub fn load_raw_corpus<P: AsRef<Path>>(path: P) -> Result<RawCorpus> {
    let file = File::open(path.as_ref())?;
    read_raw_corpus(BufReader::new(file))
}

/// Read a raw corpus from any reader producing JSON text.
pub fn read_raw_corpus<R: Read>(reader: R) -> Result<RawCorpus> {
    let corpus: RawCorpus = serde_json::from_reader(reader)?;
    if corpus.is_empty() {
        return Err(RemezError::corpus("corpus contains no entries"));
    }
    Ok(corpus)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Write;

    use tempfile::NamedTempFile;

    #[test]
    fn test_load_verse_corpus_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"r": "Genesis 1:1", "b": "Genesis", "t": "בראשית ברא אלהים"}}]"#
        )
        .unwrap();

        let corpus = load_raw_corpus(file.path()).unwrap();
        assert!(matches!(corpus, RawCorpus::Verses(_)));
        assert_eq!(corpus.len(), 1);
    }

    #[test]
    fn test_load_bucketed_corpus() {
        let json = r#"{"611": [{"phrase": "תורה", "ref": "Deuteronomy 33:4"}]}"#;
        let corpus = read_raw_corpus(json.as_bytes()).unwrap();
        assert!(matches!(corpus, RawCorpus::Bucketed(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = load_raw_corpus("/no/such/corpus.json");
        assert!(matches!(result, Err(RemezError::Io(_))));
    }

    #[test]
    fn test_malformed_json_is_json_error() {
        let result = read_raw_corpus("not json".as_bytes());
        assert!(matches!(result, Err(RemezError::Json(_))));
    }

    #[test]
    fn test_empty_corpus_is_rejected() {
        let result = read_raw_corpus("[]".as_bytes());
        assert!(matches!(result, Err(RemezError::Corpus(_))));
    }
}

//! Lazy, one-shot corpus state.
//!
//! [`CorpusStore`] holds the built [`ValueIndex`] behind a read/write lock.
//! The index is built into a local value and swapped in atomically, so a
//! failed load never leaves partial state. Queries against an unloaded or
//! failed store see no index and yield empty results — they never block and
//! never error.

use std::path::Path;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::corpus::loader;
use crate::error::{RemezError, Result};
use crate::index::ValueIndex;

/// Load state of the corpus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    /// Nothing has been loaded yet.
    Empty,
    /// The index is built and queryable.
    Ready,
    /// The last load failed; the message describes why.
    Failed(String),
}

/// Shared holder of the corpus index.
#[derive(Debug, Default)]
pub struct CorpusStore {
    inner: RwLock<StoreInner>,
}

#[derive(Debug, Default)]
struct StoreInner {
    index: Option<Arc<ValueIndex>>,
    failure: Option<String>,
}

impl CorpusStore {
    /// Create an empty store.
    pub fn new() -> Self {
        CorpusStore::default()
    }

    /// Load and index a corpus file, replacing any previous index.
    ///
    /// On failure the previous index (if any) is dropped and the store moves
    /// to [`LoadState::Failed`]; the error is also returned to the caller.
    pub fn load_from_path<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let built = loader::load_raw_corpus(path).map(|raw| ValueIndex::build(&raw));
        let mut inner = self.inner.write();
        match built {
            Ok(index) => {
                inner.index = Some(Arc::new(index));
                inner.failure = None;
                Ok(())
            }
            Err(e) => {
                inner.index = None;
                inner.failure = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Install an already-built index (in-memory corpora, tests).
    pub fn install(&self, index: ValueIndex) {
        let mut inner = self.inner.write();
        inner.index = Some(Arc::new(index));
        inner.failure = None;
    }

    /// The current load state.
    pub fn state(&self) -> LoadState {
        let inner = self.inner.read();
        if inner.index.is_some() {
            LoadState::Ready
        } else if let Some(message) = &inner.failure {
            LoadState::Failed(message.clone())
        } else {
            LoadState::Empty
        }
    }

    /// The current index, if ready. `None` means "not yet available" — the
    /// caller treats it as an empty corpus, not an error.
    pub fn index(&self) -> Option<Arc<ValueIndex>> {
        self.inner.read().index.clone()
    }

    /// The current index, or an `Unavailable` error carrying the load state.
    pub fn require_index(&self) -> Result<Arc<ValueIndex>> {
        match self.index() {
            Some(index) => Ok(index),
            None => match self.state() {
                LoadState::Failed(message) => Err(RemezError::unavailable(message)),
                _ => Err(RemezError::unavailable("corpus not loaded")),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Write;

    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_store() {
        let store = CorpusStore::new();
        assert_eq!(store.state(), LoadState::Empty);
        assert!(store.index().is_none());
        assert!(matches!(
            store.require_index(),
            Err(RemezError::Unavailable(_))
        ));
    }

    #[test]
    fn test_load_from_path() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"r": "Genesis 1:1", "b": "Genesis", "t": "תורה"}}]"#
        )
        .unwrap();

        let store = CorpusStore::new();
        store.load_from_path(file.path()).unwrap();

        assert_eq!(store.state(), LoadState::Ready);
        let index = store.index().unwrap();
        assert_eq!(index.lookup(611).len(), 1);
    }

    #[test]
    fn test_failed_load_reports_state() {
        let store = CorpusStore::new();
        assert!(store.load_from_path("/no/such/corpus.json").is_err());
        assert!(matches!(store.state(), LoadState::Failed(_)));
        assert!(store.index().is_none());
    }

    #[test]
    fn test_reload_replaces_index() {
        let store = CorpusStore::new();
        store.install(ValueIndex::default());
        assert_eq!(store.state(), LoadState::Ready);

        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"r": "Genesis 1:1", "b": "Genesis", "t": "אחד"}}]"#
        )
        .unwrap();
        store.load_from_path(file.path()).unwrap();
        assert_eq!(store.index().unwrap().lookup(13).len(), 1);
    }
}

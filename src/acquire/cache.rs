// File: src/acquire/cache.rs
use crate::acquire::fetch::Fetch;
use crate::error::Result;
use crate::persistence::write_atomic;
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// A directory of downloaded and derived files.
///
/// A file that exists is trusted as-is: asking for it again never goes back
/// to the network. There is no expiry and no locking; one process owns the
/// directory for the length of a session.
#[derive(Debug, Clone)]
pub struct DataCache {
    dir: PathBuf,
}

impl DataCache {
    /// Opens the cache, creating the directory if needed.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.join(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.path(name).is_file()
    }

    /// Returns the cached bytes for `name`, downloading them from `url` only
    /// when the file is not there yet.
    pub fn fetch_cached(&self, name: &str, url: &str, fetcher: &dyn Fetch) -> Result<Vec<u8>> {
        let path = self.path(name);
        if path.is_file() {
            debug!("Cache hit for {}", path.display());
            return Ok(fs::read(&path)?);
        }

        let bytes = fetcher.fetch(url)?;
        write_atomic(&path, &bytes)?;
        debug!("Cached {} bytes at {}", bytes.len(), path.display());
        Ok(bytes)
    }

    pub fn read_text(&self, name: &str) -> Result<String> {
        Ok(fs::read_to_string(self.path(name))?)
    }

    pub fn write_text(&self, name: &str, text: &str) -> Result<()> {
        write_atomic(&self.path(name), text.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::cell::Cell;

    struct CountingFetcher {
        calls: Cell<usize>,
    }

    impl Fetch for CountingFetcher {
        fn fetch(&self, _url: &str) -> Result<Vec<u8>> {
            self.calls.set(self.calls.get() + 1);
            Ok(b"listen silent".to_vec())
        }
    }

    struct FailingFetcher;

    impl Fetch for FailingFetcher {
        fn fetch(&self, _url: &str) -> Result<Vec<u8>> {
            Err(Error::MemberNotFound("nothing".to_string()))
        }
    }

    #[test]
    fn second_fetch_is_served_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let cache = DataCache::open(dir.path().join("data")).unwrap();
        let fetcher = CountingFetcher { calls: Cell::new(0) };

        let first = cache.fetch_cached("words.txt", "https://example.org/w", &fetcher).unwrap();
        let second = cache.fetch_cached("words.txt", "https://example.org/w", &fetcher).unwrap();

        assert_eq!(first, second);
        assert_eq!(fetcher.calls.get(), 1);
        assert!(cache.contains("words.txt"));
    }

    #[test]
    fn failed_fetch_leaves_nothing_behind() {
        let dir = tempfile::tempdir().unwrap();
        let cache = DataCache::open(dir.path()).unwrap();

        assert!(cache.fetch_cached("words.txt", "https://example.org/w", &FailingFetcher).is_err());
        assert!(!cache.contains("words.txt"));
    }

    #[test]
    fn text_round_trips_through_the_cache() {
        let dir = tempfile::tempdir().unwrap();
        let cache = DataCache::open(dir.path()).unwrap();
        cache.write_text("notes.txt", "to be or not to be").unwrap();
        assert_eq!(cache.read_text("notes.txt").unwrap(), "to be or not to be");
    }
}

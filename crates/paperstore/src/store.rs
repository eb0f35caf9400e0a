use std::path::{Path, PathBuf};
use std::sync::RwLock;

use discourse::PaperRecord;

use crate::Result;

pub trait PaperStore: Send + Sync {
    /// All records in processing order. A missing or unreadable backing
    /// file degrades to an empty list, never an error.
    fn load_all(&self) -> Vec<PaperRecord>;

    /// Append a batch after the existing records. Returns the new total.
    fn append(&self, records: &[PaperRecord]) -> Result<usize>;

    fn clear(&self) -> Result<()>;
}

/// File-backed store over a pretty-printed JSON list, accumulated across
/// runs the way the original results file was.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write(&self, records: &[PaperRecord]) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() {
                std::fs::create_dir_all(dir)?;
            }
        }
        let raw = serde_json::to_string_pretty(records)?;
        std::fs::write(&self.path, raw)?;
        Ok(())
    }
}

impl PaperStore for JsonFileStore {
    fn load_all(&self) -> Vec<PaperRecord> {
        let Ok(raw) = std::fs::read_to_string(&self.path) else {
            return Vec::new();
        };
        // Invalid JSON starts fresh rather than poisoning every request.
        serde_json::from_str(&raw).unwrap_or_default()
    }

    fn append(&self, records: &[PaperRecord]) -> Result<usize> {
        let mut all = self.load_all();
        all.extend_from_slice(records);
        self.write(&all)?;
        Ok(all.len())
    }

    fn clear(&self) -> Result<()> {
        self.write(&[])
    }
}

/// In-memory store (for testing and demos)
#[derive(Default)]
pub struct InMemoryStore {
    records: RwLock<Vec<PaperRecord>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PaperStore for InMemoryStore {
    fn load_all(&self) -> Vec<PaperRecord> {
        self.records.read().unwrap().clone()
    }

    fn append(&self, records: &[PaperRecord]) -> Result<usize> {
        let mut all = self.records.write().unwrap();
        all.extend_from_slice(records);
        Ok(all.len())
    }

    fn clear(&self) -> Result<()> {
        self.records.write().unwrap().clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(filename: &str) -> PaperRecord {
        PaperRecord::new(filename, "q").with_claim("c").with_evidence("e")
    }

    #[test]
    fn missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("results.json"));
        assert!(store.load_all().is_empty());
    }

    #[test]
    fn corrupt_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.json");
        std::fs::write(&path, "{ this is not json").unwrap();

        let store = JsonFileStore::new(&path);
        assert!(store.load_all().is_empty());
    }

    #[test]
    fn append_accumulates_across_store_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.json");

        let first = JsonFileStore::new(&path);
        assert_eq!(first.append(&[record("a.pdf")]).unwrap(), 1);

        // A later run opens its own handle and keeps appending.
        let second = JsonFileStore::new(&path);
        assert_eq!(second.append(&[record("b.pdf"), record("c.pdf")]).unwrap(), 3);

        let all = second.load_all();
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].filename, "a.pdf");
        assert_eq!(all[2].filename, "c.pdf");
    }

    #[test]
    fn clear_resets_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("results.json"));
        store.append(&[record("a.pdf")]).unwrap();
        store.clear().unwrap();
        assert!(store.load_all().is_empty());
        // The file itself stays, holding an empty list.
        assert!(store.path().exists());
    }

    #[test]
    fn in_memory_store_behaves_like_the_file_store() {
        let store = InMemoryStore::new();
        assert!(store.load_all().is_empty());
        assert_eq!(store.append(&[record("a.pdf")]).unwrap(), 1);
        assert_eq!(store.append(&[record("b.pdf")]).unwrap(), 2);
        store.clear().unwrap();
        assert!(store.load_all().is_empty());
    }
}

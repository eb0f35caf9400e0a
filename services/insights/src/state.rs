use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

use extraction::InsightExtractor;
use paperstore::JsonFileStore;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    /// The store is lock-guarded so an upload batch rewrites the results
    /// file without a concurrent reader seeing a half-written list.
    pub store: RwLock<JsonFileStore>,
    pub extractor: Arc<Mutex<dyn InsightExtractor>>,
    pub upload_dir: PathBuf,
}

impl AppState {
    pub fn new(
        results_file: PathBuf,
        extractor: Arc<Mutex<dyn InsightExtractor>>,
        upload_dir: PathBuf,
    ) -> Self {
        Self {
            store: RwLock::new(JsonFileStore::new(results_file)),
            extractor,
            upload_dir,
        }
    }
}

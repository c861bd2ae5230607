use std::path::{Path, PathBuf};

use anyhow::Context;
use folio_config::FolioConfig;
use folio_content::{ContentQuery, query_entries};
use folio_core::Entry;

/// Project root and resolved config, shared by every command handler.
#[derive(Debug, Clone)]
pub struct AppContext {
    pub project_root: PathBuf,
    pub config: FolioConfig,
}

impl AppContext {
    pub fn new(project_root: PathBuf, config: FolioConfig) -> Self {
        Self {
            project_root,
            config,
        }
    }

    /// Run the build-time content query for the configured collection.
    pub fn load_entries(&self) -> anyhow::Result<Vec<Entry>> {
        let query = ContentQuery::from_config(&self.project_root, &self.config.content);
        query_entries(&query)
            .with_context(|| format!("failed to load '{}' entries", query.collection))
    }

    /// Resolve a configured or user-supplied path against the project root.
    pub fn resolve(&self, path: &str) -> PathBuf {
        let path = Path::new(path);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.project_root.join(path)
        }
    }
}

// Application state module
// Immutable per-process state shared by every connection

use std::collections::HashMap;
use std::path::PathBuf;

use super::types::Config;

/// A download route after its file path has been resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadTarget {
    pub file: PathBuf,
    pub filename: Option<String>,
}

/// Application state
pub struct AppState {
    pub config: Config,
    /// Request path -> file to send
    pub downloads: HashMap<String, DownloadTarget>,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        let root = &config.downloads.root;
        let downloads = config
            .downloads
            .routes
            .iter()
            .map(|route| {
                (
                    route.path.clone(),
                    DownloadTarget {
                        file: route.resolve_file(root),
                        filename: route.filename.clone(),
                    },
                )
            })
            .collect();

        Self {
            config: config.clone(),
            downloads,
        }
    }

    /// Routes sorted by request path, for startup logging
    pub fn sorted_downloads(&self) -> Vec<(&str, &DownloadTarget)> {
        let mut routes: Vec<_> = self
            .downloads
            .iter()
            .map(|(path, target)| (path.as_str(), target))
            .collect();
        routes.sort_unstable_by_key(|(path, _)| *path);
        routes
    }
}

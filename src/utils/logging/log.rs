//! Load step logging
//!
//! A `LoadStep` brackets the reading of one file or directory: it logs when
//! the step begins and, once finished, how many records were applied and how
//! long it took.

use std::path::{Path, PathBuf};
use std::time::Instant;

/// A timed loading step over one path
#[derive(Debug)]
pub struct LoadStep {
    what: &'static str,
    path: PathBuf,
    started: Instant,
}

impl LoadStep {
    /// Log the start of loading `what` from `path`
    #[must_use]
    pub fn begin(what: &'static str, path: &Path) -> Self {
        log::info!("Loading {what} from {}", path.display());
        Self {
            what,
            path: path.to_path_buf(),
            started: Instant::now(),
        }
    }

    /// Log the number of records applied and the time taken
    pub fn finish(self, records: usize) {
        log::info!(
            "Applied {records} {} from {} in {:?}",
            self.what,
            self.path.display(),
            self.started.elapsed()
        );
    }
}

/// Log that an optional input at `path` was skipped
pub fn log_skipped_input(reason: &str, path: &Path) {
    log::warn!("Skipping {}: {reason}", path.display());
}

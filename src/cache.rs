//! Memoized batch results keyed by directory and a listing signature.

use crate::scan::{self, filesystem};
use crate::types::config::AuditSettings;
use crate::types::record::ResultSet;
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::UNIX_EPOCH;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheStatus {
    Hit,
    Miss,
}

#[derive(Debug)]
struct CachedBatch {
    signature: String,
    results: ResultSet,
}

#[derive(Debug, Default)]
pub struct BatchCache {
    entries: HashMap<PathBuf, CachedBatch>,
}

impl BatchCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the batch for `dir`, recomputing only when its signature changed.
    pub fn load(&mut self, dir: &Path, settings: &AuditSettings) -> (&ResultSet, CacheStatus) {
        let signature = directory_signature(dir, settings);
        let key = dir.to_path_buf();
        let status = match self.entries.get(&key) {
            Some(cached) if cached.signature == signature => CacheStatus::Hit,
            _ => CacheStatus::Miss,
        };
        debug!(dir = %dir.display(), ?status, "batch cache lookup");

        if status == CacheStatus::Miss {
            let results = scan::run_batch(dir, settings);
            self.entries
                .insert(key.clone(), CachedBatch { signature, results });
        }
        (&self.entries[&key].results, status)
    }
}

/// SHA-256 over the settings and every listed document's name, size and mtime.
pub fn directory_signature(dir: &Path, settings: &AuditSettings) -> String {
    let mut hasher = Sha256::new();
    hasher.update(format!(
        "max_pages={};mode={}\n",
        settings.max_pages,
        settings.mode.as_str()
    ));
    for (file, name) in &settings.company_names {
        hasher.update(format!("name:{file}={name}\n"));
    }

    hasher.update(format!("dir_exists={}\n", dir.is_dir()));
    for path in filesystem::list_documents(dir) {
        let metadata = std::fs::metadata(&path).ok();
        let size = metadata.as_ref().map(|meta| meta.len());
        let modified = metadata
            .as_ref()
            .and_then(|meta| meta.modified().ok())
            .and_then(|time| time.duration_since(UNIX_EPOCH).ok())
            .map(|elapsed| elapsed.as_nanos());
        hasher.update(format!(
            "doc:{}|{:?}|{:?}\n",
            filesystem::file_name(&path),
            size,
            modified
        ));
    }

    format!("{:x}", hasher.finalize())
}

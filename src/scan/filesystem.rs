use super::loader::DocumentKind;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Supported documents directly inside `dir`, sorted by file name.
pub fn list_documents(dir: &Path) -> Vec<PathBuf> {
    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| DocumentKind::from_path(entry.path()).is_some())
        .map(|entry| entry.path().to_path_buf())
        .collect()
}

pub fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

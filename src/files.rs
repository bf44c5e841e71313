//! Source discovery and build-path helpers.

use crate::ui;
use anyhow::{Context, Result, bail};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Recursively collect the files under `dir` carrying `extension`.
///
/// Results are sorted so build command lines stay stable across runs.
pub fn list_files(dir: impl AsRef<Path>, extension: &str) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        bail!("source directory {} does not exist", dir.display());
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(dir) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                ui::warn(&format!("skipping unreadable entry: {e}"));
                continue;
            }
        };
        let path = entry.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == extension) {
            files.push(path.to_owned());
        }
    }

    files.sort();
    Ok(files)
}

/// Create `dir` (and any missing parents); an existing directory is fine.
pub fn mkdir_if_not_exists(dir: impl AsRef<Path>) -> Result<()> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir).with_context(|| format!("failed to create {}", dir.display()))
}

/// Map each source file to its object path: `obj_dir/<stem>.o`.
pub fn object_files(sources: &[PathBuf], obj_dir: impl AsRef<Path>) -> Vec<PathBuf> {
    let obj_dir = obj_dir.as_ref();
    sources
        .iter()
        .map(|src| {
            let stem = src.file_stem().unwrap_or(src.as_os_str());
            let mut obj = obj_dir.join(stem);
            obj.set_extension("o");
            obj
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_files_recurses_and_filters_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("nested/deeper")).unwrap();
        fs::write(dir.path().join("main.c"), "").unwrap();
        fs::write(dir.path().join("notes.txt"), "").unwrap();
        fs::write(dir.path().join("nested/util.c"), "").unwrap();
        fs::write(dir.path().join("nested/deeper/core.c"), "").unwrap();

        let files = list_files(dir.path(), "c").unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.strip_prefix(dir.path()).unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, ["main.c", "nested/deeper/core.c", "nested/util.c"]);
    }

    #[test]
    fn list_files_rejects_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        assert!(list_files(dir.path().join("nope"), "c").is_err());
    }

    #[test]
    fn object_files_map_stems_into_the_object_dir() {
        let sources = vec![PathBuf::from("src/main.c"), PathBuf::from("src/sub/util.c")];
        let objects = object_files(&sources, "build/obj");
        assert_eq!(
            objects,
            [PathBuf::from("build/obj/main.o"), PathBuf::from("build/obj/util.o")]
        );
    }

    #[test]
    fn mkdir_if_not_exists_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("a/b/c");
        mkdir_if_not_exists(&target).unwrap();
        mkdir_if_not_exists(&target).unwrap();
        assert!(target.is_dir());
    }
}

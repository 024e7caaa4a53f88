use std::collections::BTreeMap;
use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::domain::error::ScanError;
use crate::domain::report::{DuplicateGroup, FileFingerprint};
use crate::engine::fingerprint::{self, FingerprintMode};

/// Fingerprints every regular file below `root`, ordered by relative path.
///
/// Symlinks to files are followed; symlinks to directories are skipped so a
/// cyclic tree cannot loop. A path below `root` that is not valid UTF-8 fails
/// the scan, since its reported form would not name a unique file.
pub fn fingerprint_tree(
    root: &Path,
    mode: FingerprintMode,
) -> Result<Vec<FileFingerprint>, ScanError> {
    if !root.is_dir() {
        return Err(ScanError::NotADirectory {
            path: root.display().to_string(),
        });
    }

    let mut files = Vec::new();
    let mut pending = vec![root.to_path_buf()];
    while let Some(dir) = pending.pop() {
        let entries = fs::read_dir(&dir).map_err(|source| ScanError::ReadDir {
            path: dir.display().to_string(),
            source,
        })?;
        for entry in entries {
            let entry = entry.map_err(|source| ScanError::ReadEntry {
                path: dir.display().to_string(),
                source,
            })?;
            let path = entry.path();
            let file_type = entry.file_type().map_err(|source| ScanError::ReadEntry {
                path: path.display().to_string(),
                source,
            })?;

            if file_type.is_dir() {
                pending.push(path);
            } else if file_type.is_file() || (file_type.is_symlink() && path.is_file()) {
                files.push(fingerprint_one(root, &path, mode)?);
            }
        }
    }

    files.sort_by(|left, right| left.path.cmp(&right.path));
    Ok(files)
}

/// Groups files with an identical fingerprint. Only groups of two or more are
/// returned, ordered by fingerprint.
pub fn group_duplicates(files: &[FileFingerprint]) -> Vec<DuplicateGroup> {
    let mut by_fingerprint: BTreeMap<i64, Vec<String>> = BTreeMap::new();
    for file in files {
        by_fingerprint
            .entry(file.fingerprint)
            .or_default()
            .push(file.path.clone());
    }

    by_fingerprint
        .into_iter()
        .filter(|(_, paths)| paths.len() > 1)
        .map(|(fingerprint, mut paths)| {
            paths.sort();
            DuplicateGroup { fingerprint, paths }
        })
        .collect()
}

pub fn find_matches(files: &[FileFingerprint], fingerprint: i64) -> Vec<FileFingerprint> {
    files
        .iter()
        .filter(|file| file.fingerprint == fingerprint)
        .cloned()
        .collect()
}

fn fingerprint_one(
    root: &Path,
    path: &Path,
    mode: FingerprintMode,
) -> Result<FileFingerprint, ScanError> {
    let relative_path = path.strip_prefix(root).unwrap_or(path);
    if relative_path.to_str().is_none() {
        return Err(ScanError::NonUtf8Path {
            path: relative_path.to_string_lossy().into_owned(),
        });
    }
    let relative = stable_relative_path(path, root);
    let data = fingerprint::read_file(path).map_err(|source| ScanError::Fingerprint {
        path: relative.clone(),
        source,
    })?;
    Ok(FileFingerprint {
        path: relative,
        fingerprint: fingerprint::fingerprint_with_mode(&data, mode),
        size: data.len() as u64,
    })
}

/// `path` relative to `root` with `/` separators and no `.` components.
fn stable_relative_path(path: &Path, root: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    let normalized = strip_curdir_components(relative);
    let literal = normalized.to_string_lossy().replace('\\', "/");
    if literal.is_empty() {
        ".".to_string()
    } else {
        literal
    }
}

fn strip_curdir_components(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        if component == Component::CurDir {
            continue;
        }
        out.push(component);
    }
    out
}

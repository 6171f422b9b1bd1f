//! Filesystem-backed host services.

use indexmap::IndexMap;
use regex::Regex;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use super::Host;

/// Number of bytes read from the start of a file when looking for a version header.
pub const VERSION_HEADER_BYTES: u64 = 8192;

static VERSION_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?mi)^[ \t/*#@]*@version[ \t]*(.*)$").unwrap());

/// Extract the `@version` header from file contents.
///
/// Returns `None` when no header is present or its value is blank.
pub fn extract_version(contents: &str) -> Option<String> {
    let contents = contents.replace('\r', "\n");
    let caps = VERSION_HEADER.captures(&contents)?;
    let value = caps.get(1)?.as_str().trim();
    let value = value.strip_suffix("*/").unwrap_or(value).trim();

    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// [`Host`] implementation that reads the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsHost;

impl FsHost {
    /// Create a filesystem host.
    pub fn new() -> Self {
        Self
    }

    fn read_header(path: &Path) -> std::io::Result<String> {
        let mut buf = Vec::new();
        fs::File::open(path)?
            .take(VERSION_HEADER_BYTES)
            .read_to_end(&mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    fn scan_recursive(dir: &Path, prefix: &str, found: &mut IndexMap<String, PathBuf>) {
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::debug!("Skipping unreadable template directory {:?}: {}", dir, e);
                return;
            }
        };

        let mut paths: Vec<PathBuf> = entries.filter_map(|e| e.ok()).map(|e| e.path()).collect();
        paths.sort();

        for path in paths {
            let Some(name) = path.file_name().map(|n| n.to_string_lossy().into_owned()) else {
                continue;
            };
            let relative = format!("{}{}", prefix, name);

            if path.is_dir() {
                Self::scan_recursive(&path, &format!("{}/", relative), found);
            } else if path.is_file() {
                found.insert(relative, path);
            }
        }
    }
}

impl Host for FsHost {
    fn file_version(&self, path: &Path) -> Option<String> {
        match Self::read_header(path) {
            Ok(contents) => extract_version(&contents),
            Err(e) => {
                tracing::trace!("No version for {:?}: {}", path, e);
                None
            }
        }
    }

    fn first_existing(&self, candidates: &[PathBuf]) -> Option<PathBuf> {
        candidates.iter().find(|p| p.is_file()).cloned()
    }

    fn scan_template_files(&self, root: &Path) -> IndexMap<String, PathBuf> {
        let mut found = IndexMap::new();
        Self::scan_recursive(root, "", &mut found);
        found
    }
}

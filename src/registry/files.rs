//! Template file definitions.
//!
//! Contributors register groups of template files. Every group shares the
//! base directory of the path token with the same id, and all groups are
//! flattened into one map keyed by template filename.

use indexmap::IndexMap;
use serde::Serialize;
use std::path::PathBuf;

use crate::registry::tokens::TokenRegistry;

/// One entry of a registered file group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileEntry {
    /// A bare filename; the file is not locked.
    Unlocked(String),

    /// A filename with an explicit lock state.
    Explicit(String, bool),
}

impl FileEntry {
    /// Shorthand for a locked entry.
    pub fn locked(name: impl Into<String>) -> Self {
        Self::Explicit(name.into(), true)
    }

    /// Shorthand for a bare, unlocked entry.
    pub fn unlocked(name: impl Into<String>) -> Self {
        Self::Unlocked(name.into())
    }

    /// Template filename of this entry.
    pub fn name(&self) -> &str {
        match self {
            FileEntry::Unlocked(name) | FileEntry::Explicit(name, _) => name,
        }
    }

    /// Whether presentation-layer overrides are disallowed.
    pub fn lock(&self) -> bool {
        match self {
            FileEntry::Unlocked(_) => false,
            FileEntry::Explicit(_, lock) => *lock,
        }
    }
}

/// A registered template file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileDefinition {
    /// Id of the owning group.
    pub id: String,
    /// Absolute path of the file (base + filename).
    pub path: PathBuf,
    /// True when overrides by the presentation layer are disallowed.
    pub lock: bool,
    /// Base directory of the group, with a trailing slash unless empty.
    pub base: String,
}

impl FileDefinition {
    /// Path of the file relative to its group base.
    ///
    /// Falls back to the full path when the base does not prefix it.
    pub fn relative_path(&self) -> String {
        let path = self.path.to_string_lossy();
        if !self.base.is_empty() {
            if let Some(rel) = path.strip_prefix(self.base.as_str()) {
                return rel.to_string();
            }
        }
        path.into_owned()
    }
}

/// Append a trailing slash to a non-empty directory string.
pub fn trailing_slash(dir: &str) -> String {
    if dir.is_empty() {
        return String::new();
    }
    format!("{}/", dir.trim_end_matches(['/', '\\']))
}

/// Registry of template files keyed by filename.
#[derive(Debug, Clone, Default)]
pub struct FileRegistry {
    files: IndexMap<String, FileDefinition>,
}

impl FileRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a group of files under `group_id`.
    ///
    /// The group base comes from the token registered with the same id. A group
    /// without a token gets an empty base, so its paths are bare filenames. A
    /// file already registered by an earlier group is replaced.
    pub fn register(&mut self, tokens: &TokenRegistry, group_id: &str, entries: &[FileEntry]) {
        let base = match tokens.basedir(group_id) {
            Some(dir) => trailing_slash(dir),
            None => {
                tracing::warn!(
                    "Template group '{}' has no path token; using bare filenames",
                    group_id
                );
                String::new()
            }
        };

        for entry in entries {
            let name = entry.name();
            let definition = FileDefinition {
                id: group_id.to_string(),
                path: PathBuf::from(format!("{}{}", base, name)),
                lock: entry.lock(),
                base: base.clone(),
            };

            if let Some(previous) = self.files.insert(name.to_string(), definition) {
                tracing::debug!(
                    "Template '{}' from group '{}' replaced by group '{}'",
                    name,
                    previous.id,
                    group_id
                );
            }
        }
    }

    /// Get a file definition by filename.
    pub fn get(&self, name: &str) -> Option<&FileDefinition> {
        self.files.get(name)
    }

    /// Iterate over all definitions in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &FileDefinition)> {
        self.files.iter()
    }

    /// Number of registered files.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Check if no files are registered.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::tokens::TokenDefinition;

    fn tokens(pairs: &[(&str, &str)]) -> TokenRegistry {
        let mut registry = TokenRegistry::new();
        for (id, dir) in pairs {
            registry.register(id, &TokenDefinition::dir(*dir));
        }
        registry
    }

    #[test]
    fn trailing_slash_normalizes() {
        assert_eq!(trailing_slash("/a/b"), "/a/b/");
        assert_eq!(trailing_slash("/a/b/"), "/a/b/");
        assert_eq!(trailing_slash("/a/b//"), "/a/b/");
        assert_eq!(trailing_slash(""), "");
    }

    #[test]
    fn entry_lock_defaults_to_unlocked() {
        assert!(!FileEntry::unlocked("cart.php").lock());
        assert!(FileEntry::locked("cart.php").lock());
        assert!(!FileEntry::Explicit("cart.php".into(), false).lock());
    }

    #[test]
    fn register_builds_paths_from_group_base() {
        let tokens = tokens(&[("core", "/plugin/templates")]);
        let mut files = FileRegistry::new();
        files.register(
            &tokens,
            "core",
            &[
                FileEntry::Explicit("cart.php".into(), false),
                FileEntry::locked("checkout.php"),
            ],
        );

        let cart = files.get("cart.php").unwrap();
        assert_eq!(cart.id, "core");
        assert_eq!(cart.path, PathBuf::from("/plugin/templates/cart.php"));
        assert_eq!(cart.base, "/plugin/templates/");
        assert!(!cart.lock);
        assert!(files.get("checkout.php").unwrap().lock);
    }

    #[test]
    fn missing_group_base_yields_bare_filenames() {
        let mut files = FileRegistry::new();
        files.register(&TokenRegistry::new(), "ghost", &[FileEntry::unlocked("cart.php")]);

        let cart = files.get("cart.php").unwrap();
        assert_eq!(cart.path, PathBuf::from("cart.php"));
        assert_eq!(cart.base, "");
        assert_eq!(cart.relative_path(), "cart.php");
    }

    #[test]
    fn later_group_replaces_earlier_file_in_place() {
        let tokens = tokens(&[("one", "/one"), ("two", "/two")]);
        let mut files = FileRegistry::new();
        files.register(
            &tokens,
            "one",
            &[FileEntry::unlocked("a.php"), FileEntry::unlocked("b.php")],
        );
        files.register(&tokens, "two", &[FileEntry::locked("a.php")]);

        let a = files.get("a.php").unwrap();
        assert_eq!(a.id, "two");
        assert_eq!(a.path, PathBuf::from("/two/a.php"));
        assert!(a.lock);

        let order: Vec<&str> = files.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(order, vec!["a.php", "b.php"]);
    }

    #[test]
    fn relative_path_strips_base() {
        let tokens = tokens(&[("core", "/plugin/templates/")]);
        let mut files = FileRegistry::new();
        files.register(&tokens, "core", &[FileEntry::unlocked("cart/mini-cart.php")]);

        assert_eq!(
            files.get("cart/mini-cart.php").unwrap().relative_path(),
            "cart/mini-cart.php"
        );
    }
}

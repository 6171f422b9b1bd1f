//! Lookup maps derived from the file registry.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::registry::files::FileRegistry;

/// Filename to path and filename to lock projections of a [`FileRegistry`].
#[derive(Debug, Clone, Default)]
pub struct DerivedIndex {
    templates: HashMap<String, PathBuf>,
    locked: HashMap<String, bool>,
}

impl DerivedIndex {
    /// Project a file registry.
    pub fn build(files: &FileRegistry) -> Self {
        let mut templates = HashMap::with_capacity(files.len());
        let mut locked = HashMap::with_capacity(files.len());

        for (name, def) in files.iter() {
            templates.insert(name.clone(), def.path.clone());
            locked.insert(name.clone(), def.lock);
        }

        Self { templates, locked }
    }

    /// Registered path for a template name.
    pub fn path(&self, name: &str) -> Option<&Path> {
        self.templates.get(name).map(PathBuf::as_path)
    }

    /// Lock flag for a template name.
    pub fn is_locked(&self, name: &str) -> Option<bool> {
        self.locked.get(name).copied()
    }

    /// Check if a template name is known.
    pub fn contains(&self, name: &str) -> bool {
        self.templates.contains_key(name)
    }

    /// Number of indexed templates.
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Check if the index is empty.
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::files::FileEntry;
    use crate::registry::tokens::{TokenDefinition, TokenRegistry};

    #[test]
    fn index_projects_path_and_lock() {
        let mut tokens = TokenRegistry::new();
        tokens.register("core", &TokenDefinition::dir("/plugin/templates/"));
        let mut files = FileRegistry::new();
        files.register(
            &tokens,
            "core",
            &[
                FileEntry::unlocked("cart.php"),
                FileEntry::locked("checkout.php"),
            ],
        );

        let index = DerivedIndex::build(&files);
        assert_eq!(index.len(), 2);
        assert_eq!(
            index.path("checkout.php"),
            Some(Path::new("/plugin/templates/checkout.php"))
        );
        assert_eq!(index.is_locked("checkout.php"), Some(true));
        assert_eq!(index.is_locked("cart.php"), Some(false));
        assert!(!index.contains("missing.php"));
        assert_eq!(index.is_locked("missing.php"), None);
    }

    #[test]
    fn empty_registry_gives_empty_index() {
        assert!(DerivedIndex::build(&FileRegistry::new()).is_empty());
    }
}

//! Template registries.
//!
//! This module holds the data collected from contributors:
//! - Path tokens (`id` to directory) in [`tokens`]
//! - Template file definitions grouped by token id in [`files`]
//! - Lookup maps derived from the file definitions in [`index`]
//!
//! # Build Order
//!
//! Tokens are collected first because each file group takes its base
//! directory from the token with the same id. The derived index is computed
//! right after the file definitions.
//!
//! # Example
//!
//! ```
//! use template_customizer::registry::{FileEntry, Registries, TokenDefinition};
//!
//! let registries = Registries::build(
//!     vec![("core".to_string(), TokenDefinition::dir("/plugin/templates"))],
//!     vec![(
//!         "core".to_string(),
//!         vec![FileEntry::unlocked("cart.php"), FileEntry::locked("checkout.php")],
//!     )],
//! );
//!
//! assert_eq!(registries.index.is_locked("checkout.php"), Some(true));
//! ```

pub mod files;
pub mod index;
pub mod tokens;

// Re-exports
pub use files::{trailing_slash, FileDefinition, FileEntry, FileRegistry};
pub use index::DerivedIndex;
pub use tokens::{derive_key, PathToken, TokenDefinition, TokenRegistry};

/// All registries, built together and read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct Registries {
    /// Path tokens by id.
    pub tokens: TokenRegistry,
    /// Template files by filename.
    pub files: FileRegistry,
    /// Path and lock lookups by filename.
    pub index: DerivedIndex,
}

impl Registries {
    /// Build the registries from collected token and file group registrations.
    pub fn build<T, F>(token_defs: T, file_groups: F) -> Self
    where
        T: IntoIterator<Item = (String, TokenDefinition)>,
        F: IntoIterator<Item = (String, Vec<FileEntry>)>,
    {
        let mut tokens = TokenRegistry::new();
        for (id, def) in token_defs {
            tokens.register(&id, &def);
        }

        let mut files = FileRegistry::new();
        for (group_id, entries) in file_groups {
            files.register(&tokens, &group_id, &entries);
        }

        let index = DerivedIndex::build(&files);
        tracing::debug!(
            "Built template registries: {} tokens, {} files",
            tokens.len(),
            files.len()
        );

        Self {
            tokens,
            files,
            index,
        }
    }
}

//! Collaborators supplied by the host platform.
//!
//! The engine never touches hook dispatch or the host's own loading
//! primitives directly. It consumes them through two traits:
//! - [`Contributor`] supplies path tokens and template file groups
//! - [`Host`] answers filesystem questions (versions, probing, scanning)
//!
//! [`FsHost`] is a plain filesystem implementation of [`Host`].

pub mod fs;
pub mod presentation;

pub use fs::{extract_version, FsHost, VERSION_HEADER_BYTES};
pub use presentation::Presentation;

use indexmap::IndexMap;
use std::path::{Path, PathBuf};

use crate::registry::{FileEntry, TokenDefinition};

/// Source of token and template file registrations.
///
/// Contributors are consulted once, when the registries are first built.
pub trait Contributor: Send + Sync {
    /// Raw path token registrations, by token id.
    fn path_tokens(&self) -> Vec<(String, TokenDefinition)>;

    /// Raw template file groups, by group id.
    fn template_files(&self) -> Vec<(String, Vec<FileEntry>)>;
}

/// Filesystem services provided by the host platform.
pub trait Host: Send + Sync {
    /// Version header of a file, or `None` when unreadable or absent.
    fn file_version(&self, path: &Path) -> Option<String>;

    /// First candidate path that exists.
    fn first_existing(&self, candidates: &[PathBuf]) -> Option<PathBuf>;

    /// The host component's own template files under `root`, keyed by relative path.
    fn scan_template_files(&self, root: &Path) -> IndexMap<String, PathBuf>;
}

/// A contributor backed by in-memory registrations.
#[derive(Debug, Clone, Default)]
pub struct StaticContributor {
    tokens: Vec<(String, TokenDefinition)>,
    groups: Vec<(String, Vec<FileEntry>)>,
}

impl StaticContributor {
    /// Create an empty contributor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a path token.
    pub fn token(mut self, id: impl Into<String>, definition: TokenDefinition) -> Self {
        self.tokens.push((id.into(), definition));
        self
    }

    /// Add a template file group.
    pub fn group(mut self, id: impl Into<String>, entries: Vec<FileEntry>) -> Self {
        self.groups.push((id.into(), entries));
        self
    }
}

impl Contributor for StaticContributor {
    fn path_tokens(&self) -> Vec<(String, TokenDefinition)> {
        self.tokens.clone()
    }

    fn template_files(&self) -> Vec<(String, Vec<FileEntry>)> {
        self.groups.clone()
    }
}

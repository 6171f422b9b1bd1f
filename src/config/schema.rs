//! Manifest schema definitions.
//!
//! A manifest declares path tokens and template file groups, and optionally
//! the engine settings and the active presentation layer:
//!
//! ```yaml
//! settings:
//!   namespace: woocommerce
//!   host_template_root: /srv/plugins/woocommerce/templates
//! presentation:
//!   name: storefront
//!   root: /srv/themes/storefront
//! tokens:
//!   my-plugin: /srv/plugins/my-plugin/templates
//!   extras: { key: EXTRAS_DIR, dir: /srv/extras }
//! templates:
//!   my-plugin:
//!     - cart/cart.php
//!     - checkout/form-checkout.php: true
//!   extras:
//!     emails/receipt.php: false
//! ```

use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::host::{Contributor, Presentation};
use crate::registry::{FileEntry, TokenDefinition};

/// Namespace used when a manifest does not set one.
pub const DEFAULT_NAMESPACE: &str = "woocommerce";

/// Top-level manifest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, deny_unknown_fields)]
pub struct Manifest {
    /// Engine settings
    pub settings: Option<Settings>,

    /// Active presentation layer
    pub presentation: Option<Presentation>,

    /// Path tokens by id
    pub tokens: IndexMap<String, TokenDefinition>,

    /// Template file groups by token id
    pub templates: IndexMap<String, FileGroup>,
}

/// Engine settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Subdirectory of the presentation layer holding overrides; also the
    /// namespace segment of reported override paths.
    pub namespace: String,

    /// Directory holding the host component's own default templates.
    pub host_template_root: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            namespace: DEFAULT_NAMESPACE.to_string(),
            host_template_root: PathBuf::new(),
        }
    }
}

/// A template file group: a list of entries or a filename to lock mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum FileGroup {
    /// `- name` or `- name: lock` items.
    List(Vec<FileGroupItem>),

    /// `name: lock` pairs.
    Map(IndexMap<String, bool>),
}

/// One list item of a [`FileGroup`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum FileGroupItem {
    /// A bare, unlocked filename.
    Name(String),

    /// Filenames with explicit lock states.
    Flagged(IndexMap<String, bool>),
}

impl FileGroup {
    /// Resolve the group into typed entries, preserving declaration order.
    pub fn entries(&self) -> Vec<FileEntry> {
        match self {
            FileGroup::List(items) => items
                .iter()
                .flat_map(|item| match item {
                    FileGroupItem::Name(name) => vec![FileEntry::Unlocked(name.clone())],
                    FileGroupItem::Flagged(map) => flagged(map),
                })
                .collect(),
            FileGroup::Map(map) => flagged(map),
        }
    }
}

fn flagged(map: &IndexMap<String, bool>) -> Vec<FileEntry> {
    map.iter()
        .map(|(name, lock)| FileEntry::Explicit(name.clone(), *lock))
        .collect()
}

impl Contributor for Manifest {
    fn path_tokens(&self) -> Vec<(String, TokenDefinition)> {
        self.tokens
            .iter()
            .map(|(id, def)| (id.clone(), def.clone()))
            .collect()
    }

    fn template_files(&self) -> Vec<(String, Vec<FileEntry>)> {
        self.templates
            .iter()
            .map(|(id, group)| (id.clone(), group.entries()))
            .collect()
    }
}

/// JSON Schema describing the manifest format.
pub fn manifest_schema() -> serde_json::Value {
    schemars::schema_for!(Manifest).to_value()
}

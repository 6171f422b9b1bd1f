//! The active presentation layer (theme).

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// The active presentation layer whose files may shadow unlocked templates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Presentation {
    /// Identifying name, used to attribute environment-side versions.
    pub name: String,

    /// Root directory of the presentation layer.
    pub root: PathBuf,

    /// Root directory of a parent layer, probed after this one.
    #[serde(default)]
    pub parent_root: Option<PathBuf>,
}

impl Presentation {
    /// Presentation layer rooted at `root`, named after the root's last component.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let name = root
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self {
            name,
            root,
            parent_root: None,
        }
    }

    /// Override the identifying name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set a parent layer.
    pub fn with_parent(mut self, parent_root: impl Into<PathBuf>) -> Self {
        self.parent_root = Some(parent_root.into());
        self
    }

    /// Directory holding this layer's overrides for the given namespace.
    pub fn override_dir(&self, namespace: &str) -> PathBuf {
        self.root.join(namespace)
    }

    /// Override candidates for a template, in probe order.
    ///
    /// Override directory before layer root, this layer before its parent.
    pub fn candidates(&self, namespace: &str, template: &str) -> Vec<PathBuf> {
        let mut roots: Vec<&Path> = vec![&self.root];
        if let Some(parent) = &self.parent_root {
            roots.push(parent);
        }

        roots
            .into_iter()
            .flat_map(|root| [root.join(namespace).join(template), root.join(template)])
            .collect()
    }
}

//! Path token registration.
//!
//! A token is a symbolic name resolving to a directory. Contributors register
//! tokens by id; each id yields a `(key, dir)` pair where the key is either
//! given explicitly or derived from the id (`my-plugin` becomes `MY_PLUGIN`).

use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Raw token definition as supplied by a contributor.
///
/// In a manifest this is either a bare directory string or a mapping with
/// optional `key` and `dir` fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum TokenDefinition {
    /// A bare directory; the key is derived from the token id.
    Dir(String),

    /// A structured definition with an optional explicit key.
    Structured {
        #[serde(default)]
        key: Option<String>,
        #[serde(default)]
        dir: Option<String>,
    },
}

impl TokenDefinition {
    /// Shorthand for a bare directory definition.
    pub fn dir(dir: impl Into<String>) -> Self {
        Self::Dir(dir.into())
    }

    /// Shorthand for a structured definition with an explicit key.
    pub fn keyed(key: impl Into<String>, dir: impl Into<String>) -> Self {
        Self::Structured {
            key: Some(key.into()),
            dir: Some(dir.into()),
        }
    }
}

/// A normalized path token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathToken {
    /// Uppercase symbolic identifier.
    pub key: String,
    /// Directory the token resolves to.
    pub dir: String,
}

impl PathToken {
    /// Normalize a raw definition registered under `id`.
    pub fn parse(id: &str, definition: &TokenDefinition) -> Self {
        match definition {
            TokenDefinition::Dir(dir) => Self {
                key: derive_key(id),
                dir: dir.clone(),
            },
            TokenDefinition::Structured { key, dir } => Self {
                key: key.clone().unwrap_or_else(|| derive_key(id)),
                dir: dir.clone().unwrap_or_default(),
            },
        }
    }
}

/// Derive a token key from its id: uppercase, hyphens become underscores.
pub fn derive_key(id: &str) -> String {
    id.replace('-', "_").to_uppercase()
}

/// Registry of path tokens, keyed by token id.
#[derive(Debug, Clone, Default)]
pub struct TokenRegistry {
    tokens: IndexMap<String, PathToken>,
}

impl TokenRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a token. A later registration for the same id replaces the earlier one.
    pub fn register(&mut self, id: &str, definition: &TokenDefinition) {
        let token = PathToken::parse(id, definition);
        tracing::debug!("Registered path token {} => {:?}", token.key, token.dir);
        self.tokens.insert(id.to_string(), token);
    }

    /// Get the token registered under an id.
    pub fn get(&self, id: &str) -> Option<&PathToken> {
        self.tokens.get(id)
    }

    /// Base directory for a token id, if registered.
    pub fn basedir(&self, id: &str) -> Option<&str> {
        self.tokens.get(id).map(|t| t.dir.as_str())
    }

    /// Map of token id to directory.
    pub fn basedirs(&self) -> IndexMap<String, String> {
        self.tokens
            .iter()
            .map(|(id, t)| (id.clone(), t.dir.clone()))
            .collect()
    }

    /// Map of token key to directory.
    ///
    /// When two ids derive the same key, the later registration wins.
    pub fn tokens(&self) -> IndexMap<String, String> {
        self.tokens
            .values()
            .map(|t| (t.key.clone(), t.dir.clone()))
            .collect()
    }

    /// Merge our tokens into the host's token map.
    ///
    /// Host order is preserved; our tokens overwrite host tokens of the same key
    /// and new keys are appended.
    pub fn merge_into(&self, mut host: IndexMap<String, String>) -> IndexMap<String, String> {
        for (key, dir) in self.tokens() {
            host.insert(key, dir);
        }
        host
    }

    /// Number of registered token ids.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Check if no tokens are registered.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

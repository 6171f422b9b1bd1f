//! Render-time template resolution.
//!
//! Resolution order for a registered, unlocked template (first match wins):
//! 1. `<presentation>/<namespace>/<template>`
//! 2. `<presentation>/<template>`
//! 3. Parent layer, same two locations
//! 4. The registered path
//!
//! Locked templates always resolve to the registered path. Templates the
//! registry does not know are passed through untouched.

use std::path::{Path, PathBuf};

use crate::host::{Host, Presentation};
use crate::registry::DerivedIndex;

/// Where a resolved template came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Not registered; the host's own path was kept.
    PassThrough,
    /// Shadowed by a presentation-layer file.
    Override,
    /// The registered path.
    Registered,
}

/// Resolves template names against the derived index and the presentation layer.
pub struct TemplateLocator<'a> {
    index: &'a DerivedIndex,
    host: &'a dyn Host,
    presentation: &'a Presentation,
    namespace: &'a str,
}

impl<'a> TemplateLocator<'a> {
    /// Create a locator.
    pub fn new(
        index: &'a DerivedIndex,
        host: &'a dyn Host,
        presentation: &'a Presentation,
        namespace: &'a str,
    ) -> Self {
        Self {
            index,
            host,
            presentation,
            namespace,
        }
    }

    /// Resolve a template name, returning `fallback` for unknown templates.
    pub fn resolve(&self, name: &str, fallback: &Path) -> PathBuf {
        self.resolve_with_source(name, fallback).0
    }

    /// Resolve a template name and report where the result came from.
    pub fn resolve_with_source(&self, name: &str, fallback: &Path) -> (PathBuf, Resolution) {
        let Some(registered) = self.index.path(name) else {
            return (fallback.to_path_buf(), Resolution::PassThrough);
        };

        if self.index.is_locked(name) == Some(true) {
            tracing::trace!("Template '{}' is locked", name);
            return (registered.to_path_buf(), Resolution::Registered);
        }

        let candidates = self.presentation.candidates(self.namespace, name);
        if let Some(found) = self.host.first_existing(&candidates) {
            tracing::debug!("Template '{}' overridden by {:?}", name, found);
            return (found, Resolution::Override);
        }

        (registered.to_path_buf(), Resolution::Registered)
    }
}

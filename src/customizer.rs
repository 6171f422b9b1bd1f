//! The customizer: one initialization gate around all registries.
//!
//! A [`Customizer`] owns the contributors, the host services, the active
//! presentation layer and the settings. Registries are built from the
//! contributors the first time anything needs them and are read-only after
//! that. The three host-facing transforms live here:
//! - [`Customizer::path_tokens`] for the host's path token list
//! - [`Customizer::locate`] for template resolution
//! - [`Customizer::modify_status`] for the diagnostics payload
//!
//! # Example
//!
//! ```
//! use template_customizer::config::Settings;
//! use template_customizer::host::{FsHost, Presentation, StaticContributor};
//! use template_customizer::registry::{FileEntry, TokenDefinition};
//! use template_customizer::Customizer;
//! use std::path::{Path, PathBuf};
//!
//! let customizer = Customizer::new(FsHost, Presentation::new("/nonexistent/theme"), Settings::default())
//!     .with_contributor(
//!         StaticContributor::new()
//!             .token("core", TokenDefinition::dir("/plugin/templates"))
//!             .group("core", vec![FileEntry::locked("checkout.php")]),
//!     );
//!
//! assert_eq!(
//!     customizer.locate("checkout.php", Path::new("/host/checkout.php")),
//!     PathBuf::from("/plugin/templates/checkout.php")
//! );
//! ```

use indexmap::IndexMap;
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use crate::config::{Manifest, Settings};
use crate::error::{CustomizerError, Result};
use crate::host::{Contributor, Host, Presentation};
use crate::locator::TemplateLocator;
use crate::registry::Registries;
use crate::report::{OverrideReporter, VersionResolver};

/// Owns the registries and applies them to host requests.
pub struct Customizer {
    host: Box<dyn Host>,
    presentation: Presentation,
    settings: Settings,
    contributors: Vec<Box<dyn Contributor>>,
    registries: OnceLock<Registries>,
}

impl std::fmt::Debug for Customizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Customizer")
            .field("presentation", &self.presentation)
            .field("settings", &self.settings)
            .field("contributors", &self.contributors.len())
            .field("initialized", &self.is_initialized())
            .finish()
    }
}

impl Customizer {
    /// Create a customizer with no contributors.
    pub fn new(host: impl Host + 'static, presentation: Presentation, settings: Settings) -> Self {
        Self {
            host: Box::new(host),
            presentation,
            settings,
            contributors: Vec::new(),
            registries: OnceLock::new(),
        }
    }

    /// Create a customizer from manifests, each one a contributor.
    ///
    /// Settings and presentation layer come from the last manifest that
    /// declares them.
    ///
    /// # Errors
    ///
    /// Returns `InvalidManifest` if no manifest declares a presentation layer.
    pub fn from_manifests(host: impl Host + 'static, manifests: Vec<Manifest>) -> Result<Self> {
        let presentation = manifests
            .iter()
            .rev()
            .find_map(|m| m.presentation.clone())
            .ok_or_else(|| CustomizerError::InvalidManifest {
                message: "no manifest declares a presentation layer".to_string(),
            })?;
        let settings = manifests
            .iter()
            .rev()
            .find_map(|m| m.settings.clone())
            .unwrap_or_default();

        let mut customizer = Self::new(host, presentation, settings);
        for manifest in manifests {
            customizer.add_contributor(manifest);
        }
        Ok(customizer)
    }

    /// Add a contributor, builder style.
    pub fn with_contributor(mut self, contributor: impl Contributor + 'static) -> Self {
        self.add_contributor(contributor);
        self
    }

    /// Add a contributor.
    ///
    /// Contributors added after the registries were built are not consulted.
    pub fn add_contributor(&mut self, contributor: impl Contributor + 'static) -> &mut Self {
        if self.is_initialized() {
            tracing::warn!("Contributor added after registries were built; it will be ignored");
        }
        self.contributors.push(Box::new(contributor));
        self
    }

    /// Whether the registries have been built.
    pub fn is_initialized(&self) -> bool {
        self.registries.get().is_some()
    }

    /// The registries, built on first access.
    pub fn registries(&self) -> &Registries {
        self.registries.get_or_init(|| {
            tracing::debug!(
                "Collecting templates from {} contributor(s)",
                self.contributors.len()
            );
            let tokens = self.contributors.iter().flat_map(|c| c.path_tokens());
            let groups = self.contributors.iter().flat_map(|c| c.template_files());
            Registries::build(tokens, groups)
        })
    }

    /// The active presentation layer.
    pub fn presentation(&self) -> &Presentation {
        &self.presentation
    }

    /// The engine settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Add our path tokens to the host's token list.
    pub fn path_tokens(&self, existing: IndexMap<String, String>) -> IndexMap<String, String> {
        self.registries().tokens.merge_into(existing)
    }

    /// Resolve a template name, returning `fallback` for templates we do not register.
    pub fn locate(&self, name: &str, fallback: &Path) -> PathBuf {
        self.locator().resolve(name, fallback)
    }

    /// A locator over the registries.
    pub fn locator(&self) -> TemplateLocator<'_> {
        TemplateLocator::new(
            &self.registries().index,
            self.host.as_ref(),
            &self.presentation,
            &self.settings.namespace,
        )
    }

    /// A reporter over the registries.
    pub fn reporter(&self) -> OverrideReporter<'_> {
        OverrideReporter::new(
            &self.registries().files,
            self.host.as_ref(),
            VersionResolver::new(
                self.host.as_ref(),
                &self.presentation,
                &self.settings.namespace,
            ),
            &self.settings.host_template_root,
            &self.settings.namespace,
        )
    }

    /// Rebuild the override list of a host status payload in place.
    pub fn modify_status(&self, status: &mut Value) {
        self.reporter().apply_to_status(status);
    }
}

//! Manifest discovery and loading.
//!
//! Manifests are YAML files. A project keeps its manifest at
//! `templates.yml` and may add machine-local overrides in
//! `templates.local.yml`; both contribute, the local file last.

use crate::config::schema::Manifest;
use crate::error::{CustomizerError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// File name of a project manifest.
pub const MANIFEST_FILE: &str = "templates.yml";

/// File name of a local manifest override.
pub const LOCAL_MANIFEST_FILE: &str = "templates.local.yml";

/// Manifest paths for a directory, in contribution order.
#[derive(Debug, Clone)]
pub struct ManifestPaths {
    /// Project manifest: templates.yml
    pub project: Option<PathBuf>,

    /// Local overrides: templates.local.yml
    pub local: Option<PathBuf>,
}

impl ManifestPaths {
    /// Discover manifests in `dir`.
    pub fn discover(dir: &Path) -> Self {
        Self {
            project: existing(dir.join(MANIFEST_FILE)),
            local: existing(dir.join(LOCAL_MANIFEST_FILE)),
        }
    }

    /// Returns all existing manifest paths in contribution order.
    pub fn all_existing(&self) -> Vec<&PathBuf> {
        self.project.iter().chain(self.local.iter()).collect()
    }
}

fn existing(path: PathBuf) -> Option<PathBuf> {
    if path.is_file() {
        Some(path)
    } else {
        None
    }
}

/// Load a single manifest file.
///
/// # Errors
///
/// Returns `ManifestNotFound` if the file doesn't exist.
/// Returns `ManifestParseError` if the YAML is invalid.
/// Returns `InvalidManifest` if the manifest fails validation.
pub fn load_manifest(path: &Path) -> Result<Manifest> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            CustomizerError::ManifestNotFound {
                path: path.to_path_buf(),
            }
        } else {
            CustomizerError::Io(e)
        }
    })?;

    parse_manifest(&content, path)
}

/// Parse YAML content into a validated manifest.
///
/// # Arguments
///
/// * `content` - The YAML content to parse
/// * `source_path` - Path for error reporting
pub fn parse_manifest(content: &str, source_path: &Path) -> Result<Manifest> {
    // An empty file is an empty manifest.
    if content.trim().is_empty() {
        return Ok(Manifest::default());
    }

    let manifest: Manifest =
        serde_yaml::from_str(content).map_err(|e| CustomizerError::ManifestParseError {
            path: source_path.to_path_buf(),
            message: e.to_string(),
        })?;

    validate(&manifest)?;
    Ok(manifest)
}

/// Load every manifest discovered in `dir`.
///
/// # Errors
///
/// Returns `ManifestNotFound` if `dir` has no `templates.yml`.
pub fn load_manifests(dir: &Path) -> Result<Vec<Manifest>> {
    let paths = ManifestPaths::discover(dir);

    if paths.project.is_none() {
        return Err(CustomizerError::ManifestNotFound {
            path: dir.join(MANIFEST_FILE),
        });
    }

    paths
        .all_existing()
        .into_iter()
        .map(|path| load_manifest(path))
        .collect()
}

/// Check a parsed manifest for values the registries cannot use.
pub fn validate(manifest: &Manifest) -> Result<()> {
    if manifest.tokens.keys().any(|id| id.trim().is_empty()) {
        return Err(invalid("token ids must not be blank"));
    }

    for (group, files) in &manifest.templates {
        if files.entries().iter().any(|e| e.name().trim().is_empty()) {
            return Err(invalid(format!("group '{}' has a blank filename", group)));
        }
        if !manifest.tokens.contains_key(group) {
            tracing::warn!("Template group '{}' has no matching token in manifest", group);
        }
    }

    if let Some(settings) = &manifest.settings {
        if settings.namespace.trim().is_empty() {
            return Err(invalid("settings.namespace must not be blank"));
        }
    }

    if let Some(presentation) = &manifest.presentation {
        if presentation.name.trim().is_empty() {
            return Err(invalid("presentation.name must not be blank"));
        }
    }

    Ok(())
}

fn invalid(message: impl Into<String>) -> CustomizerError {
    CustomizerError::InvalidManifest {
        message: message.into(),
    }
}

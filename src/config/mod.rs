//! Manifest configuration.
//!
//! - Schema definitions in [`schema`]
//! - File discovery, loading and validation in [`loader`]
//!
//! # Example
//!
//! ```
//! use template_customizer::config::parse_manifest;
//! use std::path::Path;
//!
//! let manifest = parse_manifest(
//!     "tokens:\n  core: /plugin/templates\ntemplates:\n  core:\n    - cart.php\n",
//!     Path::new("templates.yml"),
//! )
//! .unwrap();
//! assert_eq!(manifest.templates.len(), 1);
//! ```

pub mod loader;
pub mod schema;

// Schema re-exports
pub use schema::{
    manifest_schema, FileGroup, FileGroupItem, Manifest, Settings, DEFAULT_NAMESPACE,
};

// Loader re-exports
pub use loader::{
    load_manifest, load_manifests, parse_manifest, validate, ManifestPaths, LOCAL_MANIFEST_FILE,
    MANIFEST_FILE,
};

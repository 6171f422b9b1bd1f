//! Template customizer - register, lock, and audit component templates.
//!
//! A presentation-layer extension uses this crate to take over template files
//! of a third-party component without touching the component's code. Each
//! registered file carries a lock flag: unlocked files may still be shadowed
//! by the active theme, locked files always resolve to the registered copy.
//! At diagnostics time the host's list of overridden templates is rebuilt so
//! locked files the host also ships are not reported as theme overrides.
//!
//! # Modules
//!
//! - [`config`] - Manifest loading, parsing, and validation
//! - [`customizer`] - Initialization gate and host-facing transforms
//! - [`error`] - Error types and result aliases
//! - [`host`] - Host platform collaborators and filesystem implementation
//! - [`locator`] - Render-time template resolution
//! - [`logging`] - Tracing subscriber setup
//! - [`registry`] - Path token and template file registries
//! - [`report`] - Override list reconciliation and version attribution
//!
//! # Example
//!
//! ```
//! use template_customizer::registry::{FileEntry, Registries, TokenDefinition};
//!
//! let registries = Registries::build(
//!     vec![("my-plugin".to_string(), TokenDefinition::dir("templates/"))],
//!     vec![("my-plugin".to_string(), vec![FileEntry::unlocked("cart.php")])],
//! );
//!
//! assert_eq!(registries.tokens.tokens()["MY_PLUGIN"], "templates/");
//! ```

pub mod config;
pub mod customizer;
pub mod error;
pub mod host;
pub mod locator;
pub mod logging;
pub mod registry;
pub mod report;

pub use customizer::Customizer;
pub use error::{CustomizerError, Result};

//! Override diagnostics.
//!
//! - [`record`] - entries of the host's override list
//! - [`version`] - version pairing and attribution per file
//! - [`reporter`] - rebuilding the override list and status payload

pub mod record;
pub mod reporter;
pub mod version;

pub use record::{compare_versions, OverrideRecord};
pub use reporter::OverrideReporter;
pub use version::{ResolvedVersion, VersionResolver};

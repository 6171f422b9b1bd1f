//! Version attribution for reported overrides.
//!
//! Locked files are compared against the host's default template root and
//! attributed to their group. Unlocked files are compared against the
//! presentation layer's override directory and attributed to the layer.

use std::path::Path;

use crate::host::{Host, Presentation};
use crate::registry::FileDefinition;

/// Versions and attribution for one reported file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedVersion {
    /// Version of the customized side.
    pub version: Option<String>,
    /// Version of the reference side.
    pub core_version: Option<String>,
    /// Prefix the report attributes the file to.
    pub attribution: String,
}

impl ResolvedVersion {
    /// Assign a compared pair, each side falling back to the other when unknown.
    fn from_pair(first: Option<String>, second: Option<String>, attribution: String) -> Self {
        Self {
            core_version: second.clone().or_else(|| first.clone()),
            version: first.or(second),
            attribution,
        }
    }
}

/// Reads and pairs file versions through the host.
pub struct VersionResolver<'a> {
    host: &'a dyn Host,
    presentation: &'a Presentation,
    namespace: &'a str,
}

impl<'a> VersionResolver<'a> {
    /// Create a resolver.
    pub fn new(host: &'a dyn Host, presentation: &'a Presentation, namespace: &'a str) -> Self {
        Self {
            host,
            presentation,
            namespace,
        }
    }

    /// Resolve versions for `filename`.
    ///
    /// With a `reference_root`, the registered file is compared against
    /// `reference_root/filename` and attributed to the file's group. Without
    /// one, the presentation layer's copy is compared against the registered
    /// file and attributed to the presentation layer.
    pub fn resolve(
        &self,
        filename: &str,
        def: &FileDefinition,
        reference_root: Option<&Path>,
    ) -> ResolvedVersion {
        let own = self.host.file_version(&def.path);

        match reference_root {
            Some(root) => {
                let reference = self.host.file_version(&root.join(filename));
                ResolvedVersion::from_pair(own, reference, def.id.clone())
            }
            None => {
                let env_path = self.presentation.override_dir(self.namespace).join(filename);
                let environment = self.host.file_version(&env_path);
                ResolvedVersion::from_pair(environment, own, self.presentation.name.clone())
            }
        }
    }
}

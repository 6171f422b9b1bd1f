//! Rebuilds the host's override list.
//!
//! The host reports every template the presentation layer shadows. Locked
//! files we ship on purpose in place of host defaults show up there as false
//! positives, so those entries are dropped and replaced with fresh version
//! comparisons for all of our registered files.

use indexmap::IndexMap;
use serde_json::Value;
use std::path::{Path, PathBuf};

use super::record::OverrideRecord;
use super::version::VersionResolver;
use crate::host::Host;
use crate::registry::{FileDefinition, FileRegistry};

/// Rebuilds override lists and status payloads.
pub struct OverrideReporter<'a> {
    files: &'a FileRegistry,
    host: &'a dyn Host,
    versions: VersionResolver<'a>,
    host_template_root: &'a Path,
    namespace: &'a str,
}

impl<'a> OverrideReporter<'a> {
    /// Create a reporter.
    pub fn new(
        files: &'a FileRegistry,
        host: &'a dyn Host,
        versions: VersionResolver<'a>,
        host_template_root: &'a Path,
        namespace: &'a str,
    ) -> Self {
        Self {
            files,
            host,
            versions,
            host_template_root,
            namespace,
        }
    }

    /// Rebuild an override list.
    ///
    /// Host entries for locked files the host also ships are dropped. Then one
    /// record per unlocked file and one per locked file are appended, in that
    /// order.
    pub fn reconcile(
        &self,
        host_overrides: Vec<OverrideRecord>,
        host_files: &IndexMap<String, PathBuf>,
    ) -> Vec<OverrideRecord> {
        let (locked, unlocked): (Vec<_>, Vec<_>) =
            self.files.iter().partition(|(_, def)| def.lock);

        let common: Vec<&str> = locked
            .iter()
            .map(|(name, _)| name.as_str())
            .filter(|name| host_files.contains_key(*name))
            .collect();

        let before = host_overrides.len();
        let mut overrides: Vec<OverrideRecord> = host_overrides
            .into_iter()
            .filter(|record| {
                !common
                    .iter()
                    .any(|name| record.refers_to(self.namespace, name))
            })
            .collect();
        tracing::debug!(
            "Suppressed {} host override(s) for {} common locked template(s)",
            before - overrides.len(),
            common.len()
        );

        overrides.extend(
            unlocked
                .iter()
                .map(|(name, def)| self.record(name, def, None)),
        );
        overrides.extend(
            locked
                .iter()
                .map(|(name, def)| self.record(name, def, Some(self.host_template_root))),
        );

        overrides
    }

    /// Replace `theme.overrides` in a host status payload.
    ///
    /// Also recomputes `theme.has_outdated_templates`. A payload without a
    /// `theme` object is left untouched.
    pub fn apply_to_status(&self, status: &mut Value) {
        let Some(theme) = status.get_mut("theme").and_then(Value::as_object_mut) else {
            tracing::warn!("Status payload has no theme section; overrides left untouched");
            return;
        };

        let host_overrides: Vec<OverrideRecord> = match theme.get("overrides") {
            Some(Value::Array(entries)) => entries
                .iter()
                .filter_map(|entry| match serde_json::from_value(entry.clone()) {
                    Ok(record) => Some(record),
                    Err(e) => {
                        tracing::warn!("Dropping unreadable override entry {}: {}", entry, e);
                        None
                    }
                })
                .collect(),
            _ => Vec::new(),
        };

        let host_files = self.host.scan_template_files(self.host_template_root);
        let overrides = self.reconcile(host_overrides, &host_files);
        let outdated = overrides.iter().any(OverrideRecord::is_outdated);

        let overrides = overrides
            .iter()
            .filter_map(|record| serde_json::to_value(record).ok())
            .collect();
        theme.insert("overrides".to_string(), Value::Array(overrides));
        theme.insert("has_outdated_templates".to_string(), Value::Bool(outdated));
    }

    fn record(&self, name: &str, def: &FileDefinition, reference: Option<&Path>) -> OverrideRecord {
        let resolved = self.versions.resolve(name, def, reference);
        let file = format!(
            "{}/{}/{}",
            resolved.attribution,
            self.namespace,
            def.relative_path()
        );
        OverrideRecord::new(file, resolved.version, resolved.core_version)
    }
}

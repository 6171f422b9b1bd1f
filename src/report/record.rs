//! Override records as they appear in the host's status report.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;

/// One entry of the status report's override list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverrideRecord {
    /// Path fragment, `<attribution>/<namespace>/<relative path>`.
    pub file: String,

    /// Version of the customized side.
    #[serde(default, with = "blank_as_none")]
    pub version: Option<String>,

    /// Version of the reference side.
    #[serde(default, with = "blank_as_none")]
    pub core_version: Option<String>,

    /// Fields the host attached that we do not interpret.
    #[serde(flatten)]
    pub extra: IndexMap<String, serde_json::Value>,
}

impl OverrideRecord {
    /// Create a record from a file fragment and a version pair.
    pub fn new(
        file: impl Into<String>,
        version: Option<String>,
        core_version: Option<String>,
    ) -> Self {
        Self {
            file: file.into(),
            version,
            core_version,
            extra: IndexMap::new(),
        }
    }

    /// Whether the reference side is newer than the customized side.
    ///
    /// Unknown versions are never outdated.
    pub fn is_outdated(&self) -> bool {
        match (&self.version, &self.core_version) {
            (Some(version), Some(core)) => compare_versions(core, version) == Ordering::Greater,
            _ => false,
        }
    }

    /// Whether this record refers to the template `name` under `namespace`.
    ///
    /// The part after `<attribution>/<namespace>/` must equal `name`, case-sensitively:
    /// `theme/woocommerce/cart/cart.php` matches `cart/cart.php` only, and
    /// `theme/woocommerce/emails/cart.php` does not match `cart.php`.
    pub fn refers_to(&self, namespace: &str, name: &str) -> bool {
        if name.is_empty() {
            return false;
        }
        self.file == name
            || self
                .file
                .strip_suffix(name)
                .and_then(|head| head.strip_suffix('/'))
                .and_then(|head| head.strip_suffix(namespace))
                .is_some_and(|head| head.ends_with('/'))
    }
}

/// Compare dotted numeric versions; missing or non-numeric parts count as zero.
pub fn compare_versions(a: &str, b: &str) -> Ordering {
    let parse = |v: &str| -> Vec<u64> {
        v.trim_start_matches('v')
            .split('.')
            .map(|s| {
                s.chars()
                    .take_while(|c| c.is_ascii_digit())
                    .collect::<String>()
                    .parse()
                    .unwrap_or(0)
            })
            .collect()
    };

    let (a, b) = (parse(a), parse(b));
    let len = a.len().max(b.len());
    for i in 0..len {
        let l = a.get(i).copied().unwrap_or(0);
        let r = b.get(i).copied().unwrap_or(0);
        match l.cmp(&r) {
            Ordering::Equal => continue,
            other => return other,
        }
    }
    Ordering::Equal
}

/// Serialize unknown versions as blank strings, the host's representation.
mod blank_as_none {
    use super::*;

    pub fn serialize<S: Serializer>(value: &Option<String>, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(value.as_deref().unwrap_or(""))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
        let value: Option<String> = Option::deserialize(d)?;
        Ok(value.filter(|v| !v.trim().is_empty()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn refers_to_compares_path_below_namespace() {
        let record = OverrideRecord::new("storefront/woocommerce/cart/cart.php", None, None);
        assert!(record.refers_to("woocommerce", "cart/cart.php"));
        assert!(!record.refers_to("woocommerce", "cart.php"));
        assert!(!record.refers_to("woocommerce", "t/cart.php"));
        assert!(!record.refers_to("shop", "cart/cart.php"));
        assert!(!record.refers_to("woocommerce", ""));

        let mini = OverrideRecord::new("storefront/woocommerce/mini-cart.php", None, None);
        assert!(!mini.refers_to("woocommerce", "cart.php"));

        let nested = OverrideRecord::new("storefront/woocommerce/emails/cart.php", None, None);
        assert!(!nested.refers_to("woocommerce", "cart.php"));
        assert!(nested.refers_to("woocommerce", "emails/cart.php"));
    }

    #[test]
    fn refers_to_is_case_sensitive() {
        let record = OverrideRecord::new("theme/woocommerce/Cart.php", None, None);
        assert!(!record.refers_to("woocommerce", "cart.php"));
        assert!(!record.refers_to("WooCommerce", "Cart.php"));
        let bare = OverrideRecord::new("cart.php", None, None);
        assert!(bare.refers_to("woocommerce", "cart.php"));
    }

    #[test]
    fn outdated_needs_both_versions() {
        let older = OverrideRecord::new("f", Some("3.6.0".into()), Some("7.0.1".into()));
        assert!(older.is_outdated());

        let same = OverrideRecord::new("f", Some("7.0".into()), Some("7.0.0".into()));
        assert!(!same.is_outdated());

        let newer = OverrideRecord::new("f", Some("8.0.0".into()), Some("7.0.1".into()));
        assert!(!newer.is_outdated());

        let unknown = OverrideRecord::new("f", None, Some("7.0.1".into()));
        assert!(!unknown.is_outdated());
    }

    #[test]
    fn compare_versions_is_numeric() {
        assert_eq!(compare_versions("10.0.0", "9.9.9"), Ordering::Greater);
        assert_eq!(compare_versions("v1.2", "1.2.0"), Ordering::Equal);
        assert_eq!(compare_versions("1.2.3-beta", "1.2.4"), Ordering::Less);
    }

    #[test]
    fn blank_versions_deserialize_as_none() {
        let record: OverrideRecord = serde_json::from_value(json!({
            "file": "theme/woocommerce/cart.php",
            "version": "",
            "core_version": "7.0.1",
            "outdated": true
        }))
        .unwrap();

        assert_eq!(record.version, None);
        assert_eq!(record.core_version.as_deref(), Some("7.0.1"));
        assert_eq!(record.extra["outdated"], json!(true));
    }

    #[test]
    fn none_serializes_as_blank_and_keeps_extra_fields() {
        let mut record = OverrideRecord::new("x/woocommerce/cart.php", None, Some("1.0".into()));
        record.extra.insert("outdated".into(), json!(false));

        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            json!({
                "file": "x/woocommerce/cart.php",
                "version": "",
                "core_version": "1.0",
                "outdated": false
            })
        );
    }
}

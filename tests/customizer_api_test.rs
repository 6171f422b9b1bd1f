//! Integration tests for the customizer public API.

use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};
use template_customizer::config::{load_manifests, Settings, MANIFEST_FILE};
use template_customizer::host::{FsHost, Presentation, StaticContributor};
use template_customizer::registry::{FileEntry, TokenDefinition};
use template_customizer::report::OverrideRecord;
use template_customizer::Customizer;
use tempfile::TempDir;

fn core_customizer(theme: &Path, host_root: &Path) -> Customizer {
    Customizer::new(
        FsHost,
        Presentation::new(theme).with_name("storefront"),
        Settings {
            namespace: "woocommerce".into(),
            host_template_root: host_root.to_path_buf(),
        },
    )
    .with_contributor(
        StaticContributor::new()
            .token("core", TokenDefinition::dir("/plugin/templates/"))
            .group(
                "core",
                vec![
                    FileEntry::Explicit("cart.php".into(), false),
                    FileEntry::Explicit("checkout.php".into(), true),
                ],
            ),
    )
}

#[test]
fn unlocked_template_is_shadowed_by_theme() {
    let theme = TempDir::new().unwrap();
    let host = TempDir::new().unwrap();
    fs::write(theme.path().join("cart.php"), "").unwrap();

    let customizer = core_customizer(theme.path(), host.path());
    assert_eq!(
        customizer.locate("cart.php", Path::new("/host/cart.php")),
        theme.path().join("cart.php")
    );
}

#[test]
fn locked_template_ignores_theme() {
    let theme = TempDir::new().unwrap();
    let host = TempDir::new().unwrap();
    fs::create_dir_all(theme.path().join("woocommerce")).unwrap();
    fs::write(theme.path().join("checkout.php"), "").unwrap();
    fs::write(theme.path().join("woocommerce").join("checkout.php"), "").unwrap();

    let customizer = core_customizer(theme.path(), host.path());
    assert_eq!(
        customizer.locate("checkout.php", Path::new("/host/checkout.php")),
        PathBuf::from("/plugin/templates/checkout.php")
    );
}

#[test]
fn unknown_template_passes_through() {
    let theme = TempDir::new().unwrap();
    let host = TempDir::new().unwrap();
    fs::write(theme.path().join("archive.php"), "").unwrap();

    let customizer = core_customizer(theme.path(), host.path());
    assert_eq!(
        customizer.locate("archive.php", Path::new("/host/archive.php")),
        PathBuf::from("/host/archive.php")
    );
}

#[test]
fn status_report_drops_common_locked_and_appends_comparisons() {
    let theme = TempDir::new().unwrap();
    let host = TempDir::new().unwrap();
    fs::write(
        host.path().join("checkout.php"),
        "<?php\n/**\n * @version 8.1.0\n */\n",
    )
    .unwrap();
    fs::write(host.path().join("mini-checkout.php"), "<?php\n").unwrap();

    let customizer = core_customizer(theme.path(), host.path());
    let mut status = json!({
        "theme": {
            "overrides": [
                { "file": "storefront/woocommerce/checkout.php", "version": "1.0.0", "core_version": "8.1.0" },
                { "file": "storefront/woocommerce/mini-checkout.php", "version": "1.0.0", "core_version": "8.1.0" }
            ]
        }
    });
    customizer.modify_status(&mut status);

    let overrides: Vec<OverrideRecord> =
        serde_json::from_value(status["theme"]["overrides"].clone()).unwrap();
    let files: Vec<&str> = overrides.iter().map(|r| r.file.as_str()).collect();
    assert_eq!(
        files,
        vec![
            "storefront/woocommerce/mini-checkout.php",
            "storefront/woocommerce/cart.php",
            "core/woocommerce/checkout.php",
        ]
    );

    // The registered plugin file does not exist, so only the host side is known.
    let checkout = &overrides[2];
    assert_eq!(checkout.version.as_deref(), Some("8.1.0"));
    assert_eq!(checkout.core_version.as_deref(), Some("8.1.0"));

    let cart = &overrides[1];
    assert_eq!(cart.version, None);
    assert_eq!(cart.core_version, None);

    assert_eq!(status["theme"]["has_outdated_templates"], json!(true));
}

#[test]
fn repeated_status_requests_do_not_accumulate() {
    let theme = TempDir::new().unwrap();
    let host = TempDir::new().unwrap();
    fs::write(host.path().join("checkout.php"), "").unwrap();

    let customizer = core_customizer(theme.path(), host.path());
    let original = json!({ "theme": { "overrides": [] } });

    let mut first = original.clone();
    customizer.modify_status(&mut first);
    let mut second = original.clone();
    customizer.modify_status(&mut second);

    assert_eq!(first, second);
    assert_eq!(first["theme"]["overrides"].as_array().unwrap().len(), 2);
}

#[test]
fn manifests_drive_the_customizer() {
    let project = TempDir::new().unwrap();
    let theme = TempDir::new().unwrap();
    let plugin = TempDir::new().unwrap();
    fs::create_dir_all(theme.path().join("shop")).unwrap();
    fs::write(theme.path().join("shop").join("cart.php"), "").unwrap();

    fs::write(
        project.path().join(MANIFEST_FILE),
        format!(
            r#"
settings:
  namespace: shop
presentation:
  name: child
  root: {theme}
tokens:
  my-plugin: {plugin}
templates:
  my-plugin:
    cart.php: false
    checkout.php: true
"#,
            theme = theme.path().display(),
            plugin = plugin.path().display(),
        ),
    )
    .unwrap();

    let manifests = load_manifests(project.path()).unwrap();
    let customizer = Customizer::from_manifests(FsHost, manifests).unwrap();

    assert_eq!(
        customizer.locate("cart.php", Path::new("/fallback")),
        theme.path().join("shop").join("cart.php")
    );
    assert_eq!(
        customizer.locate("checkout.php", Path::new("/fallback")),
        PathBuf::from(format!("{}/checkout.php", plugin.path().display()))
    );

    let tokens = customizer.path_tokens(Default::default());
    assert_eq!(
        tokens["MY_PLUGIN"],
        plugin.path().display().to_string()
    );
}

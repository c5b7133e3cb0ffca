//! Pruebas del adaptador `FlatFileBundler`.

use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use pipefn_pack::{BundleOptions, FlatFileBundler, PackError, SourceBundler};

static SEQ: AtomicUsize = AtomicUsize::new(0);

fn scratch_file(name: &str, contents: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("pipefn-bundler-{}-{}",
                                                std::process::id(),
                                                SEQ.fetch_add(1, Ordering::SeqCst)));
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn self_contained_entry_bundles_verbatim() {
    let entry = scratch_file("index.js", "export default (req, rsp) => {};\n");

    let out = FlatFileBundler.bundle(&entry, &BundleOptions::default()).unwrap();
    assert_eq!(out.source, "export default (req, rsp) => {};\n");
    assert!(out.source_map.is_none());
}

#[test]
fn unresolved_import_aborts_with_bundle_error() {
    let entry = scratch_file("index.js",
                             "import YAML from 'yaml';\nexport default (req, rsp) => {};\n");

    let err = FlatFileBundler.bundle(&entry, &BundleOptions::default()).unwrap_err();
    match err {
        PackError::Bundle { module, .. } => assert_eq!(module, "yaml"),
        other => panic!("expected Bundle error, got {other}"),
    }
}

#[test]
fn unresolved_require_aborts_with_bundle_error() {
    let entry = scratch_file("index.js", "const b64 = require(\"base64\");\n");

    let err = FlatFileBundler.bundle(&entry, &BundleOptions::default()).unwrap_err();
    match err {
        PackError::Bundle { module, .. } => assert_eq!(module, "base64"),
        other => panic!("expected Bundle error, got {other}"),
    }
}

#[test]
fn missing_entry_reports_its_path() {
    let path = PathBuf::from("/nonexistent/pipefn/index.js");

    let err = FlatFileBundler.bundle(&path, &BundleOptions::default()).unwrap_err();
    match err {
        PackError::Bundle { module, .. } => assert_eq!(module, path.display().to_string()),
        other => panic!("expected Bundle error, got {other}"),
    }
}

#[test]
fn commented_imports_are_ignored() {
    let entry = scratch_file("index.js", "// import YAML from 'yaml';\nexport default () => {};\n");

    assert!(FlatFileBundler.bundle(&entry, &BundleOptions::default()).is_ok());
}

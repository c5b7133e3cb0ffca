//! Integración: el pipeline Bundle → Downgrade → Embed → Serialize es puro.
//! Builds repetidos de la misma fuente producen salida byte-idéntica.

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use pipefn_pack::{EmbedSpec, FlatFileBundler, Packager, PassthroughDowngrader, PipelineManifest, TypeRef};

fn scratch_dir(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("pipefn-it-{}-{}", std::process::id(), tag));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn spec() -> EmbedSpec {
    EmbedSpec { manifest_name: "function-inline".to_string(),
                step_name: "run-the-template".to_string(),
                function_name: "function-inline".to_string(),
                composite_type_ref: TypeRef { api_version: "example.org/v1".to_string(),
                                              kind: "XR".to_string() },
                annotations: BTreeMap::from([("key".to_string(), "value".to_string())]),
                values: BTreeMap::from([("env".to_string(), "test".to_string())]) }
}

#[test]
fn repeated_builds_are_byte_identical() {
    let dir = scratch_dir("determinism");
    let entry = dir.join("index.js");
    fs::write(&entry, "export default (req, rsp) => { rsp.updateCompositeStatus({ok: true}); };\n").unwrap();

    let packager = Packager::new(FlatFileBundler, PassthroughDowngrader);

    let out_a = dir.join("a.yaml");
    let out_b = dir.join("b.yaml");
    let digest_a = packager.build_to(&entry, &spec(), &out_a).unwrap();
    let digest_b = packager.build_to(&entry, &spec(), &out_b).unwrap();

    assert_eq!(digest_a, digest_b);
    assert_eq!(fs::read_to_string(&out_a).unwrap(), fs::read_to_string(&out_b).unwrap());
}

#[test]
fn written_manifest_decodes_to_the_packaged_document() {
    let dir = scratch_dir("roundtrip");
    let entry = dir.join("index.js");
    fs::write(&entry, "export default (req, rsp) => {};\n").unwrap();

    let packager = Packager::new(FlatFileBundler, PassthroughDowngrader);
    let in_memory = packager.package(&entry, &spec()).unwrap();

    let out = dir.join("composition.yaml");
    packager.build_to(&entry, &spec(), &out).unwrap();

    let decoded: PipelineManifest = serde_yaml::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(decoded, in_memory);
    assert_eq!(decoded.step("run-the-template").unwrap().input.spec.values["env"], "test");
}

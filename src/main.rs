//! Demo end-to-end: empaqueta una función inline y la invoca contra un
//! composite observado, imprimiendo el manifest y el estado deseado.

use std::collections::BTreeMap;

use serde_json::{json, Value};

use pipefn_core::constants::ANNOTATION_READY_KEY;
use pipefn_core::{invoke, CoreError, FunctionRequest, Input, ObservedState, RequestMeta, ResponseBuilder};
use pipefn_pack::{embed, serialize, manifest_digest, EmbedSpec, PortableSource, TypeRef};

const DEMO_SOURCE: &str = r#"export default (req, rsp) => {
  ["us-east-1", "us-east-2"].forEach((region) => {
    rsp.setDesiredComposedResource(`bucket-${region}`, bucketFor(region, req));
  });
  rsp.setConnectionDetails({ foo: "bar" });
  rsp.updateCompositeStatus({ something: "in the way", she: { moves: true } });
  rsp.updateCompositeStatus({ x: "y" });
};"#;

/// Misma lógica que la fuente embebida, expresada como handler nativo para
/// poder ejecutarla bajo el contrato sin un runtime de JS.
fn buckets_per_region(req: &FunctionRequest, rsp: &mut ResponseBuilder) -> Result<(), CoreError> {
    let input = Input::from_value(&req.input)?;
    input.spec.source.inline_source()?;

    let composite = &req.observed.composite;
    let composite_region = composite.spec.get("region").cloned().unwrap_or(Value::Null);

    for region in ["us-east-1", "us-east-2"] {
        let mut annotations = serde_json::Map::new();
        annotations.insert(ANNOTATION_READY_KEY.to_string(), json!("True"));
        for (k, v) in &input.metadata.annotations {
            annotations.insert(k.clone(), json!(v));
        }

        let mut labels = serde_json::Map::new();
        for (k, v) in &composite.metadata.labels {
            labels.insert(k.clone(), json!(v));
        }
        labels.insert("foo".to_string(), json!("bar"));

        rsp.set_desired_composed_resource(&format!("bucket-{region}"),
                                          json!({
                                              "apiVersion": "example.org/v1alpha1",
                                              "kind": "Bucket",
                                              "metadata": { "annotations": annotations, "labels": labels },
                                              "spec": {
                                                  "name": format!("test-{region}"),
                                                  "region": region,
                                                  "compositeRegion": composite_region,
                                              }
                                          }))?;
    }

    rsp.set_connection_details(BTreeMap::from([("foo".to_string(), "bar".to_string())]));
    rsp.update_composite_status(json!({ "something": "in the way", "she": { "moves": true } }));
    rsp.update_composite_status(json!({ "x": "y" }));
    Ok(())
}

fn run_package_validation() -> Value {
    let portable = PortableSource { source: DEMO_SOURCE.to_string(),
                                    source_map: None };
    let spec = EmbedSpec { manifest_name: "function-inline".to_string(),
                           step_name: "run-the-template".to_string(),
                           function_name: "function-inline".to_string(),
                           composite_type_ref: TypeRef { api_version: "example.org/v1".to_string(),
                                                         kind: "XR".to_string() },
                           annotations: BTreeMap::from([("key".to_string(), "value".to_string())]),
                           values: BTreeMap::new() };

    let manifest = embed(&portable, &spec).expect("embed demo source");
    let text = serialize(&manifest).expect("serialize manifest");
    println!("--- manifest ({} bytes, digest {}) ---", text.len(), manifest_digest(&text));
    println!("{text}");

    serde_json::to_value(&manifest.spec.pipeline[0].input).expect("input as json")
}

fn run_invoke_validation(input: Value) {
    let composite = pipefn_core::CompositeResource::from_value(json!({
        "apiVersion": "example.org/v1",
        "kind": "XR",
        "metadata": { "name": "demo", "labels": { "team": "platform" } },
        "spec": { "region": "us-east-1" }
    })).expect("composite");

    let req = FunctionRequest { meta: RequestMeta { tag: "demo".to_string() },
                                input,
                                observed: ObservedState { composite,
                                                          composed_resources: None } };

    let rsp = invoke(&buckets_per_region, &req).expect("invoke demo function");
    println!("--- desired state ---");
    println!("{}", serde_json::to_string_pretty(&rsp).expect("response as json"));
}

fn main() {
    env_logger::init();
    let input = run_package_validation();
    run_invoke_validation(input);
}

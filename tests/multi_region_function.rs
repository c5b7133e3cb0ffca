//! Integración: una función que produce un composed resource por región
//! contra un composite observado, ejercitando el contrato completo.

use std::collections::BTreeMap;

use serde_json::{json, Value};

use pipefn_core::constants::ANNOTATION_READY_KEY;
use pipefn_core::{invoke, CompositeResource, CoreError, FunctionRequest, ObservedState, Ready, ResponseBuilder};

const REGIONS: [&str; 2] = ["us-east-1", "us-east-2"];

fn buckets_per_region(req: &FunctionRequest, rsp: &mut ResponseBuilder) -> Result<(), CoreError> {
    let composite_region = req.observed.composite.spec.get("region").cloned().unwrap_or(Value::Null);

    for region in REGIONS {
        rsp.set_desired_composed_resource(&format!("bucket-{region}"),
                                          json!({
                                              "apiVersion": "example.org/v1alpha1",
                                              "kind": "Bucket",
                                              "metadata": {
                                                  "annotations": { (ANNOTATION_READY_KEY): "True" }
                                              },
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

fn request_without_region() -> FunctionRequest {
    let composite = CompositeResource::from_value(json!({
        "apiVersion": "example.org/v1",
        "kind": "XR",
        "metadata": { "name": "demo" },
        "spec": {}
    })).unwrap();

    FunctionRequest { input: json!({}),
                      observed: ObservedState { composite,
                                                composed_resources: None },
                      ..Default::default() }
}

#[test]
fn one_resource_per_region_with_its_own_region_set() {
    let rsp = invoke(&buckets_per_region, &request_without_region()).unwrap();

    // exactamente dos claves, una por región
    assert_eq!(rsp.desired.len(), 2);
    for region in REGIONS {
        let res = &rsp.desired[&format!("bucket-{region}")];
        assert_eq!(res.resource["spec"]["region"], json!(region));
        // spec.region ausente en el composite ⇒ null en el recurso
        assert_eq!(res.resource["spec"]["compositeRegion"], Value::Null);
    }
}

#[test]
fn ready_annotation_becomes_the_ready_marker() {
    let rsp = invoke(&buckets_per_region, &request_without_region()).unwrap();

    for region in REGIONS {
        let res = &rsp.desired[&format!("bucket-{region}")];
        assert_eq!(res.ready, Ready::True);
        // la annotation reservada no se persiste en el body deseado
        assert_eq!(res.resource["metadata"]["annotations"], json!({}));
    }
}

#[test]
fn status_and_connection_details_fold_as_specified() {
    let rsp = invoke(&buckets_per_region, &request_without_region()).unwrap();

    assert_eq!(rsp.status,
               Some(json!({ "something": "in the way", "she": { "moves": true }, "x": "y" })));
    assert_eq!(rsp.connection_details,
               Some(BTreeMap::from([("foo".to_string(), "bar".to_string())])));
}

#[test]
fn two_passes_over_identical_observed_state_converge() {
    let req = request_without_region();

    let first = invoke(&buckets_per_region, &req).unwrap();
    let second = invoke(&buckets_per_region, &req).unwrap();

    assert_eq!(first, second);
    assert!(pipefn_core::stale_keys(&first.desired, &second.desired).is_empty());
}

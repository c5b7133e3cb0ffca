//! pipefn-core: contrato de runtime de funciones de composición
//!
//! Define las formas request/response que un cuerpo de función embebido debe
//! honrar y que el engine de orquestación implementa al invocarlo:
//! - `FunctionRequest`: input del step + estado observado (inmutable).
//! - `ResponseBuilder`: acumulador con exactamente tres operaciones
//!   (`set_desired_composed_resource`, `set_connection_details`,
//!   `update_composite_status`).
//! - `invoke`: ejecución all-or-nothing de una invocación.
//!
//! El engine que agenda pases y persiste estado del cluster queda fuera de
//! este crate; aquí sólo vive el contrato a nivel de datos.

pub mod constants;
pub mod errors;
pub mod model;
pub mod response;
pub mod runtime;

pub use errors::CoreError;
pub use model::{stale_keys, ComposedResource, ComposedResourceSet, CompositeResource, FunctionRequest, Input,
                InputSource, InputSpec, ObservedState, Ready, RequestMeta, ResourceMetadata};
pub use response::{deep_merge, ConnectionDetails, FunctionResponse, ResponseBuilder};
pub use runtime::{invoke, FunctionHandler};

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn ready_annotation_is_extracted_from_body() {
        let body = json!({
            "apiVersion": "example.org/v1alpha1",
            "kind": "Bucket",
            "metadata": { "annotations": { (constants::ANNOTATION_READY_KEY): "True", "keep": "me" } }
        });

        let res = ComposedResource::from_body("b", body).expect("valid body");
        assert_eq!(res.ready, Ready::True);
        // la annotation reservada no queda en el recurso deseado
        assert_eq!(res.resource["metadata"]["annotations"], json!({"keep": "me"}));
    }

    #[test]
    fn unknown_ready_value_collapses_to_unspecified() {
        let body = json!({
            "apiVersion": "example.org/v1alpha1",
            "kind": "Bucket",
            "metadata": { "annotations": { (constants::ANNOTATION_READY_KEY): "Maybe" } }
        });

        let res = ComposedResource::from_body("b", body).expect("valid body");
        assert_eq!(res.ready, Ready::Unspecified);
    }

    #[test]
    fn body_without_api_version_is_rejected() {
        let err = ComposedResource::from_body("b", json!({"kind": "Bucket"})).unwrap_err();
        assert_eq!(err,
                   CoreError::InvalidResource { key: "b".into(),
                                                reason: "apiVersion must be set".into() });
    }

    #[test]
    fn non_object_body_is_rejected() {
        let err = ComposedResource::from_body("b", json!(null)).unwrap_err();
        assert!(matches!(err, CoreError::InvalidResource { .. }));
    }

    #[test]
    fn empty_inline_source_is_fatal() {
        let source = InputSource { transpile: false,
                                   inline: "   \n".to_string() };
        assert_eq!(source.inline_source().unwrap_err(), CoreError::EmptySource);
    }
}

//! Request entregado a la función en cada invocación.
//!
//! El request se construye fresco por pase de reconciliación y es inmutable
//! para la función (el handler recibe `&FunctionRequest`). Toda mutación de
//! estado deseado pasa por el `ResponseBuilder`, nunca por el request.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::model::composed::ComposedResourceSet;
use crate::model::composite::CompositeResource;

/// Metadatos del request (tag de correlación asignado por el engine).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RequestMeta {
    #[serde(default)]
    pub tag: String,
}

/// Estado observado en el último pase.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObservedState {
    pub composite: CompositeResource,
    /// Composed resources creados en pases previos, para funciones que
    /// necesitan releer su propio estado deseado anterior.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub composed_resources: Option<ComposedResourceSet>,
}

/// Request completo: configuración del step + estado observado.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FunctionRequest {
    #[serde(default)]
    pub meta: RequestMeta,
    /// Payload de configuración tomado verbatim del `Input` del step.
    #[serde(default)]
    pub input: Value,
    pub observed: ObservedState,
}

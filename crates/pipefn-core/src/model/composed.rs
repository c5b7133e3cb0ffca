//! Composed resources deseados.
//!
//! Un `ComposedResource` es el body JSON de un recurso dependiente más su
//! marker de readiness. El conjunto deseado (`ComposedResourceSet`) mapea
//! una clave estable elegida por la función a cada recurso: la misma clave
//! denota siempre la misma identidad lógica entre invocaciones, que es lo
//! que habilita la reconciliación convergente.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::constants::ANNOTATION_READY_KEY;
use crate::errors::CoreError;

/// Marker de readiness de un composed resource.
///
/// Valores fuera de `True`/`False` en la annotation reservada colapsan a
/// `Unspecified` (el engine decide readiness por su cuenta).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Ready {
    #[default]
    Unspecified,
    True,
    False,
}

impl Ready {
    fn from_annotation(value: &str) -> Ready {
        match value {
            "True" => Ready::True,
            "False" => Ready::False,
            _ => Ready::Unspecified,
        }
    }
}

/// Recurso deseado producido por la función.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComposedResource {
    pub resource: Value,
    #[serde(default)]
    pub ready: Ready,
}

/// Conjunto deseado, clave estable → recurso. `IndexMap` conserva el orden
/// de inserción, así la serialización del response es determinista.
pub type ComposedResourceSet = IndexMap<String, ComposedResource>;

impl ComposedResource {
    /// Valida un body y lo convierte en recurso deseado.
    ///
    /// El body debe ser un objeto JSON con `apiVersion` y `kind` no vacíos.
    /// Si trae la annotation reservada de readiness, se extrae del body y se
    /// traduce al marker `Ready`.
    pub fn from_body(key: &str, body: Value) -> Result<Self, CoreError> {
        let mut body = match body {
            Value::Object(map) => map,
            _ => return Err(invalid(key, "expected a non-null object")),
        };

        if !has_nonempty_str(&body, "apiVersion") {
            return Err(invalid(key, "apiVersion must be set"));
        }
        if !has_nonempty_str(&body, "kind") {
            return Err(invalid(key, "kind must be set"));
        }

        let mut ready = Ready::Unspecified;
        if let Some(Value::Object(meta)) = body.get_mut("metadata") {
            if let Some(Value::Object(annotations)) = meta.get_mut("annotations") {
                if let Some(Value::String(v)) = annotations.remove(ANNOTATION_READY_KEY) {
                    ready = Ready::from_annotation(&v);
                }
            }
        }

        Ok(ComposedResource { resource: Value::Object(body),
                              ready })
    }
}

fn has_nonempty_str(map: &serde_json::Map<String, Value>, field: &str) -> bool {
    matches!(map.get(field), Some(Value::String(s)) if !s.is_empty())
}

fn invalid(key: &str, reason: &str) -> CoreError {
    CoreError::InvalidResource { key: key.to_string(),
                                 reason: reason.to_string() }
}

/// Claves presentes en el conjunto previo pero ausentes del nuevo conjunto
/// deseado: candidatas a borrado. La política exacta (borrar, retener,
/// marcar huérfano) es del engine, no de este contrato.
pub fn stale_keys(previous: &ComposedResourceSet, desired: &ComposedResourceSet) -> Vec<String> {
    previous.keys()
            .filter(|k| !desired.contains_key(*k))
            .cloned()
            .collect()
}

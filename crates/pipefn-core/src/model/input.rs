//! Documento `Input` de un pipeline step.
//!
//! No es un custom resource que se instale en ningún lado: es un objeto
//! KRM-like que viaja embebido en el manifest y llega verbatim a la función
//! en `request.input`. El empaquetador lo construye; el engine lo decodifica
//! antes de invocar.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::constants::{INPUT_API_VERSION, INPUT_KIND};
use crate::errors::CoreError;
use crate::model::composite::ResourceMetadata;

/// Input de un pipeline step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Input {
    pub api_version: String,
    pub kind: String,
    #[serde(default, skip_serializing_if = "ResourceMetadata::is_empty")]
    pub metadata: ResourceMetadata,
    pub spec: InputSpec,
}

/// Parámetros del input: la fuente de la función y variables opcionales que
/// el engine pasa al contexto del request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputSpec {
    pub source: InputSource,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub values: BTreeMap<String, String>,
}

/// Fuente inline de la función.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputSource {
    /// Si es `true`, el runtime debe downgradear la fuente él mismo antes de
    /// ejecutarla. El empaquetador siempre emite `false`: la fuente embebida
    /// ya está en su dialecto final.
    #[serde(default)]
    pub transpile: bool,
    /// Cuerpo de la función embebido como string.
    pub inline: String,
}

impl Input {
    /// Construye un input con la fuente dada y los identificadores estables
    /// del contrato.
    pub fn new(source: InputSource, metadata: ResourceMetadata, values: BTreeMap<String, String>) -> Self {
        Self { api_version: INPUT_API_VERSION.to_string(),
               kind: INPUT_KIND.to_string(),
               metadata,
               spec: InputSpec { source, values } }
    }

    /// Decodifica el input desde el payload genérico de un request.
    pub fn from_value(value: &Value) -> Result<Self, CoreError> {
        serde_json::from_value(value.clone()).map_err(|e| CoreError::InvalidInput(e.to_string()))
    }
}

impl InputSource {
    /// Fuente inline lista para ejecutar. Falla si el campo está vacío
    /// (espacios incluidos): un step sin fuente es un error fatal del pase,
    /// detectado antes de correr la función.
    pub fn inline_source(&self) -> Result<&str, CoreError> {
        let source = self.inline.trim();
        if source.is_empty() {
            return Err(CoreError::EmptySource);
        }
        Ok(source)
    }
}

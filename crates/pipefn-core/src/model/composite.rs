//! Composite resource observado.
//!
//! El composite es el objeto raíz hacia el que converge cada pase de
//! reconciliación. Es propiedad del engine de orquestación: la función lo
//! recibe en el request y sólo puede leerlo. Los deltas de status que la
//! función produce se aplican después, fuera de este tipo.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Metadata estilo KRM (name, labels, annotations). Las claves de cada
/// mapping son únicas; `BTreeMap` mantiene además un orden de serialización
/// determinista.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResourceMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub annotations: BTreeMap<String, String>,
}

impl ResourceMetadata {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.labels.is_empty() && self.annotations.is_empty()
    }
}

/// Composite resource tal como lo registró el engine en el último pase.
///
/// `spec` y `status` son JSON genérico: el contrato no interpreta su
/// semántica de dominio.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompositeResource {
    #[serde(default)]
    pub api_version: String,
    #[serde(default)]
    pub kind: String,
    #[serde(default, skip_serializing_if = "ResourceMetadata::is_empty")]
    pub metadata: ResourceMetadata,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub spec: Value,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub status: Value,
}

impl CompositeResource {
    /// Decodifica un composite desde JSON genérico (por ejemplo, el estado
    /// observado que entrega el engine).
    pub fn from_value(value: Value) -> Result<Self, crate::errors::CoreError> {
        serde_json::from_value(value).map_err(|e| crate::errors::CoreError::InvalidInput(e.to_string()))
    }
}

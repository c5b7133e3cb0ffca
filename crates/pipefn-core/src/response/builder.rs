//! `ResponseBuilder`: valor acumulador del response de una invocación.
//!
//! El builder expone exactamente las tres operaciones del contrato. Se crea
//! fresco por invocación y se consume al final (`finish`): no hay estado
//! compartido entre invocaciones. Una invocación que falla descarta el
//! builder completo, así ninguna mutación parcial llega al engine.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::merge::deep_merge;
use crate::errors::CoreError;
use crate::model::composed::{ComposedResource, ComposedResourceSet};

/// Connection details: clave → valor sensible. Reemplazo total por llamada.
pub type ConnectionDetails = BTreeMap<String, String>;

/// Response final de una invocación, ya plegado.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionResponse {
    pub desired: ComposedResourceSet,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connection_details: Option<ConnectionDetails>,
    /// Delta de status acumulado (deep merge en orden de llamada).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Value>,
}

/// Acumulador mutable del response dentro de una invocación.
#[derive(Debug, Default)]
pub struct ResponseBuilder {
    desired: ComposedResourceSet,
    connection_details: Option<ConnectionDetails>,
    status: Option<Value>,
}

impl ResponseBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Upsert de un composed resource por clave. Llamarla dos veces con la
    /// misma clave dentro de una invocación: gana el body de la segunda
    /// llamada (last-write-wins por clave, sin merge).
    pub fn set_desired_composed_resource(&mut self, key: &str, body: Value) -> Result<(), CoreError> {
        let resource = ComposedResource::from_body(key, body)?;
        self.desired.insert(key.to_string(), resource);
        Ok(())
    }

    /// Reemplaza el mapa de connection details de esta invocación. Múltiples
    /// llamadas no se fusionan: sólo se retiene la última.
    pub fn set_connection_details(&mut self, details: ConnectionDetails) {
        self.connection_details = Some(details);
    }

    /// Deep-merge de `partial` sobre el status acumulado. Seguro de llamar
    /// repetidamente para construir el status incrementalmente; el orden de
    /// merge es el orden de llamada.
    pub fn update_composite_status(&mut self, partial: Value) {
        match self.status.as_mut() {
            Some(acc) => deep_merge(acc, &partial),
            None => {
                let mut acc = Value::Object(serde_json::Map::new());
                deep_merge(&mut acc, &partial);
                self.status = Some(acc);
            }
        }
    }

    /// Pliega el acumulador en el response final.
    pub fn finish(self) -> FunctionResponse {
        FunctionResponse { desired: self.desired,
                           connection_details: self.connection_details,
                           status: self.status }
    }
}

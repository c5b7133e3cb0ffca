//! Modelo serde del pipeline manifest.
//!
//! El manifest es el documento estructurado que envuelve los pipeline steps;
//! cada step referencia una función por nombre y lleva su `Input` con la
//! fuente embebida. Invariantes:
//! - el orden de los steps es significativo y se preserva al serializar;
//! - los nombres de step son únicos dentro del manifest (validado al
//!   agregar).

use serde::{Deserialize, Serialize};

use pipefn_core::model::Input;

use crate::errors::PackError;

/// `apiVersion` del manifest.
pub const MANIFEST_API_VERSION: &str = "pipelines.pipefn.io/v1";

/// `kind` del manifest.
pub const MANIFEST_KIND: &str = "Composition";

/// Modo de ejecución: el único soportado por este contrato.
pub const MODE_PIPELINE: &str = "Pipeline";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManifestMeta {
    pub name: String,
}

/// Referencia al tipo de composite que este pipeline reconcilia.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeRef {
    pub api_version: String,
    pub kind: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionRef {
    pub name: String,
}

/// Un step nombrado del pipeline, respaldado por una función.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineStep {
    pub step: String,
    pub function_ref: FunctionRef,
    pub input: Input,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestSpec {
    pub composite_type_ref: TypeRef,
    pub mode: String,
    pub pipeline: Vec<PipelineStep>,
}

/// Documento completo del manifest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineManifest {
    pub api_version: String,
    pub kind: String,
    pub metadata: ManifestMeta,
    pub spec: ManifestSpec,
}

impl PipelineManifest {
    /// Manifest vacío (sin steps) para el composite dado.
    pub fn new(name: &str, composite_type_ref: TypeRef) -> Self {
        Self { api_version: MANIFEST_API_VERSION.to_string(),
               kind: MANIFEST_KIND.to_string(),
               metadata: ManifestMeta { name: name.to_string() },
               spec: ManifestSpec { composite_type_ref,
                                    mode: MODE_PIPELINE.to_string(),
                                    pipeline: Vec::new() } }
    }

    /// Agrega un step al final del pipeline. Falla si el nombre está vacío o
    /// duplica el de un step existente.
    pub fn push_step(&mut self, step: PipelineStep) -> Result<(), PackError> {
        let name = step.step.trim();
        if name.is_empty() {
            return Err(PackError::Embed("step name must not be empty".to_string()));
        }
        if self.spec.pipeline.iter().any(|s| s.step == step.step) {
            return Err(PackError::Embed(format!("duplicate step name \"{}\"", step.step)));
        }
        self.spec.pipeline.push(step);
        Ok(())
    }

    /// Busca un step por nombre.
    pub fn step(&self, name: &str) -> Option<&PipelineStep> {
        self.spec.pipeline.iter().find(|s| s.step == name)
    }
}

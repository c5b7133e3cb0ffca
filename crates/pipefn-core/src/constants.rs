//! Constantes del contrato de runtime.
//!
//! Este módulo agrupa los identificadores estables que forman parte del
//! contrato observable entre el empaquetador, el engine de orquestación y
//! el cuerpo de la función. Cambiarlos rompe manifests ya publicados.

/// `apiVersion` del documento `Input` embebido en cada pipeline step.
pub const INPUT_API_VERSION: &str = "fn.pipefn.io/v1beta1";

/// `kind` del documento `Input`.
pub const INPUT_KIND: &str = "Input";

/// Annotation reservada sobre un composed resource para marcar readiness.
/// Se extrae del body y se traduce al marker `Ready`; no se persiste en el
/// recurso deseado.
pub const ANNOTATION_READY_KEY: &str = "fn.pipefn.io/ready";

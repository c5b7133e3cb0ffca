//! pipefn-pack: empaquetado de funciones en pipeline manifests
//!
//! Este crate provee:
//! - Seams hacia los colaboradores externos: `SourceBundler` (aplana el
//!   grafo de módulos) y `SyntaxDowngrader` (reescribe al dialecto target),
//!   con adaptadores mínimos (`FlatFileBundler`, `PassthroughDowngrader`).
//! - El modelo serde del `PipelineManifest` y el `Input` embebido.
//! - El `Packager`: pipeline one-shot bundle → downgrade → embed →
//!   serialize, con commit atómico del artefacto.
//!
//! Reimplementar un bundler o un transpiler queda explícitamente fuera de
//! alcance: aquí sólo viven sus contratos de entrada/salida.

pub mod bundler;
pub mod downgrade;
pub mod errors;
pub mod manifest;
pub mod packager;

pub use bundler::{BundleOptions, BundledSource, FlatFileBundler, SourceBundler, SourceMapMode};
pub use downgrade::{DowngradeOptions, PassthroughDowngrader, PortableSource, SyntaxDowngrader};
pub use errors::PackError;
pub use manifest::{FunctionRef, ManifestMeta, ManifestSpec, PipelineManifest, PipelineStep, TypeRef};
pub use packager::{embed, manifest_digest, serialize, write_atomic, EmbedSpec, Packager};

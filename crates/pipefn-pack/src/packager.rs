//! Packager: pipeline one-shot Bundle → Downgrade → Embed → Serialize.
//!
//! Corre una vez por build, offline, sin estado mutable compartido entre
//! builds. La serialización es pura y determinista: el mismo manifest
//! produce siempre la misma salida byte a byte, así builds repetidos de una
//! fuente sin cambios no generan diffs espurios. El digest blake3 del texto
//! serializado hace esa propiedad verificable.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use pipefn_core::model::{Input, InputSource, ResourceMetadata};

use crate::bundler::{BundleOptions, SourceBundler};
use crate::downgrade::{DowngradeOptions, PortableSource, SyntaxDowngrader};
use crate::errors::PackError;
use crate::manifest::{FunctionRef, PipelineManifest, PipelineStep, TypeRef};

/// Qué embeber y bajo qué nombres.
#[derive(Debug, Clone)]
pub struct EmbedSpec {
    /// Nombre del manifest resultante.
    pub manifest_name: String,
    /// Nombre (único) del pipeline step.
    pub step_name: String,
    /// Nombre de la función referenciada por el step.
    pub function_name: String,
    /// Tipo de composite que el pipeline reconcilia.
    pub composite_type_ref: TypeRef,
    /// Metadata opaca de passthrough sobre el input del step.
    pub annotations: BTreeMap<String, String>,
    /// Variables para el contexto del request.
    pub values: BTreeMap<String, String>,
}

/// Empaquetador: compone los dos seams externos y produce el manifest.
pub struct Packager<B, D> {
    bundler: B,
    downgrader: D,
    bundle_opts: BundleOptions,
    downgrade_opts: DowngradeOptions,
}

impl<B, D> Packager<B, D>
    where B: SourceBundler,
          D: SyntaxDowngrader
{
    pub fn new(bundler: B, downgrader: D) -> Self {
        Self { bundler,
               downgrader,
               bundle_opts: BundleOptions::default(),
               downgrade_opts: DowngradeOptions::default() }
    }

    pub fn with_options(bundler: B, downgrader: D, bundle_opts: BundleOptions, downgrade_opts: DowngradeOptions) -> Self {
        Self { bundler,
               downgrader,
               bundle_opts,
               downgrade_opts }
    }

    /// Pipeline completo en memoria: bundle → downgrade → embed.
    /// Cualquier fallo de etapa aborta; no hay resultados parciales.
    pub fn package(&self, entry: &Path, spec: &EmbedSpec) -> Result<PipelineManifest, PackError> {
        let bundled = self.bundler.bundle(entry, &self.bundle_opts)?;
        let portable = self.downgrader.downgrade(&bundled, &self.downgrade_opts)?;
        embed(&portable, spec)
    }

    /// Build completo hacia un archivo: package → serialize → commit
    /// atómico. Devuelve el digest del texto escrito.
    pub fn build_to(&self, entry: &Path, spec: &EmbedSpec, out: &Path) -> Result<String, PackError> {
        let manifest = self.package(entry, spec)?;
        let text = serialize(&manifest)?;
        let digest = manifest_digest(&text);
        log::info!("packaged {} -> {} (digest {})", entry.display(), out.display(), digest);
        write_atomic(out, &text)?;
        Ok(digest)
    }
}

/// Construye el manifest con exactamente un step que embebe `portable` como
/// fuente inline. `transpile` queda en `false`: la fuente ya está en su
/// dialecto final y el runtime no debe re-downgradearla.
pub fn embed(portable: &PortableSource, spec: &EmbedSpec) -> Result<PipelineManifest, PackError> {
    let metadata = ResourceMetadata { name: None,
                                      labels: BTreeMap::new(),
                                      annotations: spec.annotations.clone() };
    let input = Input::new(InputSource { transpile: false,
                                         inline: portable.source.clone() },
                           metadata,
                           spec.values.clone());

    let mut manifest = PipelineManifest::new(&spec.manifest_name, spec.composite_type_ref.clone());
    manifest.push_step(PipelineStep { step: spec.step_name.clone(),
                                      function_ref: FunctionRef { name: spec.function_name.clone() },
                                      input })?;
    Ok(manifest)
}

/// Serialización textual del manifest. Pura y total: los contenedores del
/// modelo tienen orden determinista, así que la salida es byte-idéntica
/// entre corridas para el mismo manifest.
pub fn serialize(manifest: &PipelineManifest) -> Result<String, PackError> {
    Ok(serde_yaml::to_string(manifest)?)
}

/// Digest blake3 (hex) del manifest serializado.
pub fn manifest_digest(text: &str) -> String {
    blake3::hash(text.as_bytes()).to_hex().to_string()
}

/// Commit all-or-nothing: escribe a un archivo temporal en el mismo
/// directorio y renombra sobre el destino. Un build fallido nunca pisa un
/// artefacto válido previo.
pub fn write_atomic(path: &Path, text: &str) -> Result<(), PackError> {
    let file_name = path.file_name()
                        .ok_or_else(|| PackError::Embed(format!("invalid output path {}", path.display())))?;
    let tmp = path.with_file_name(format!("{}.tmp", file_name.to_string_lossy()));

    fs::write(&tmp, text)?;
    if let Err(e) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(e.into());
    }
    Ok(())
}

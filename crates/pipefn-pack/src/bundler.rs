//! Seam hacia el Source Bundler externo.
//!
//! El bundler resuelve un grafo de módulos desde un entry y lo aplana en una
//! unidad autocontenida. El contrato del seam es mínimo: la salida no debe
//! contener referencias a módulos externos a la clausura del bundle. El
//! algoritmo de resolución es una caja negra fuera de este crate.

use std::fs;
use std::path::Path;

use crate::errors::PackError;

/// Modo de emisión del source map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceMapMode {
    /// Source map embebido en la fuente (comentario final).
    Inline,
    /// Source map como documento separado.
    External,
    None,
}

/// Opciones de bundling (tag de plataforma, hint de formato, source maps).
#[derive(Debug, Clone)]
pub struct BundleOptions {
    pub platform: String,
    pub format: String,
    pub source_map: SourceMapMode,
    pub source_root: Option<String>,
}

impl Default for BundleOptions {
    fn default() -> Self {
        Self { platform: "neutral".to_string(),
               format: "esm".to_string(),
               source_map: SourceMapMode::Inline,
               source_root: None }
    }
}

/// Unidad autocontenida producida por el bundler.
#[derive(Debug, Clone, PartialEq)]
pub struct BundledSource {
    pub source: String,
    /// Source map separado, si `SourceMapMode::External`. En modo inline el
    /// map viaja dentro de `source`.
    pub source_map: Option<String>,
}

/// Contrato del Source Bundler.
pub trait SourceBundler {
    /// Aplana el grafo de módulos con raíz en `entry`. Falla con
    /// `PackError::Bundle` si el grafo no se puede resolver por completo
    /// (módulo faltante, ciclo no aplanable, error de sintaxis).
    fn bundle(&self, entry: &Path, opts: &BundleOptions) -> Result<BundledSource, PackError>;
}

/// Adaptador mínimo: carga un entry ya autocontenido en un solo archivo.
///
/// No hace resolución de módulos: cualquier `import ... from` o
/// `require(...)` residual cuenta como referencia externa sin resolver y
/// aborta el build con el specifier ofensor.
#[derive(Debug, Clone, Default)]
pub struct FlatFileBundler;

impl SourceBundler for FlatFileBundler {
    fn bundle(&self, entry: &Path, opts: &BundleOptions) -> Result<BundledSource, PackError> {
        log::debug!("bundling entry {} (platform={}, format={})",
                    entry.display(),
                    opts.platform,
                    opts.format);

        let source = fs::read_to_string(entry).map_err(|e| PackError::Bundle { module: entry.display().to_string(),
                                                                               reason: e.to_string() })?;

        if let Some(specifier) = first_module_reference(&source) {
            return Err(PackError::Bundle { module: specifier,
                                           reason: "unresolved module reference in entry".to_string() });
        }

        Ok(BundledSource { source, source_map: None })
    }
}

/// Primer specifier de módulo referenciado estáticamente, si existe.
fn first_module_reference(source: &str) -> Option<String> {
    for line in source.lines() {
        let line = line.trim_start();
        if line.starts_with("//") {
            continue;
        }
        if line.starts_with("import ") || line.starts_with("import\"") || line.starts_with("import'") {
            if let Some(spec) = quoted_specifier(line) {
                return Some(spec);
            }
        }
        if let Some(idx) = line.find("require(") {
            if let Some(spec) = quoted_specifier(&line[idx..]) {
                return Some(spec);
            }
        }
    }
    None
}

fn quoted_specifier(fragment: &str) -> Option<String> {
    for quote in ['"', '\''] {
        let mut parts = fragment.splitn(3, quote);
        parts.next()?;
        if let Some(spec) = parts.next() {
            if parts.next().is_some() && !spec.is_empty() {
                return Some(spec.to_string());
            }
        }
    }
    None
}

//! Seam hacia el Syntax Downgrader externo.
//!
//! El downgrader reescribe la unidad bundleada a un dialecto ampliamente
//! portable preservando el comportamiento en runtime y el mapeo de
//! posiciones a la fuente original (para que stack traces y diagnósticos
//! downstream sigan siendo atribuibles). El algoritmo es una caja negra.

use crate::bundler::BundledSource;
use crate::errors::PackError;

/// Opciones de downgrade. `retain_lines` y `compact` afectan sólo la
/// legibilidad del artefacto, no su semántica.
#[derive(Debug, Clone)]
pub struct DowngradeOptions {
    /// Identificador del dialecto target.
    pub target: String,
    /// Plugins de transformación a aplicar, en orden.
    pub plugins: Vec<String>,
    pub retain_lines: bool,
    pub compact: bool,
}

impl Default for DowngradeOptions {
    fn default() -> Self {
        Self { target: "es6".to_string(),
               plugins: vec!["transform-modules-commonjs".to_string()],
               retain_lines: true,
               compact: false }
    }
}

/// Fuente ya portada al dialecto target, con su source map preservado.
#[derive(Debug, Clone, PartialEq)]
pub struct PortableSource {
    pub source: String,
    pub source_map: Option<String>,
}

/// Contrato del Syntax Downgrader.
pub trait SyntaxDowngrader {
    /// Reescribe `bundled` al dialecto de `opts`. Falla con
    /// `PackError::Downgrade` si la entrada no parsea o contiene constructos
    /// sin equivalente en el target.
    fn downgrade(&self, bundled: &BundledSource, opts: &DowngradeOptions) -> Result<PortableSource, PackError>;
}

/// Adaptador identidad para fuentes que ya están en el dialecto target.
///
/// Pasa la fuente y su source map sin tocar. Útil cuando el bundler ya
/// emitió en el dialecto final o la fuente fue downgradeada offline.
#[derive(Debug, Clone, Default)]
pub struct PassthroughDowngrader;

impl SyntaxDowngrader for PassthroughDowngrader {
    fn downgrade(&self, bundled: &BundledSource, opts: &DowngradeOptions) -> Result<PortableSource, PackError> {
        log::debug!("downgrade target={} plugins={:?} (passthrough)", opts.target, opts.plugins);

        if bundled.source.trim().is_empty() {
            return Err(PackError::Downgrade { location: "<inline>:1".to_string(),
                                              reason: "empty source".to_string() });
        }

        Ok(PortableSource { source: bundled.source.clone(),
                            source_map: bundled.source_map.clone() })
    }
}

//! Errores del pipeline de empaquetado.
//!
//! Cualquier fallo de etapa aborta el build completo: nunca se escribe un
//! manifest parcial a almacenamiento durable.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PackError {
    /// El grafo de módulos no se pudo resolver o aplanar. Reporta el path
    /// del módulo ofensor.
    #[error("cannot bundle module \"{module}\": {reason}")]
    Bundle { module: String, reason: String },

    /// La fuente no se pudo reescribir al dialecto target. Reporta la
    /// ubicación en la fuente original vía el source map preservado.
    #[error("cannot downgrade source at {location}: {reason}")]
    Downgrade { location: String, reason: String },

    /// Step name inválido o input no representable. Se detecta antes de
    /// cualquier I/O.
    #[error("cannot embed source: {0}")]
    Embed(String),

    #[error("cannot serialize manifest: {0}")]
    Serialization(#[from] serde_yaml::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

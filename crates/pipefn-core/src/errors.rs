//! Errores del contrato de runtime (simples por ahora).

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub enum CoreError {
    #[error("invalid function input: empty source")] EmptySource,
    #[error("invalid function input: {0}")] InvalidInput(String),
    #[error("invalid resource \"{key}\": {reason}")] InvalidResource { key: String, reason: String },
    #[error("function error: {0}")] Handler(String),
    #[error("internal: {0}")] Internal(String),
}

use pipespec_core::{ChannelError, SpecError};
use thiserror::Error;

/// Errores de la aplicación (binario y armado del pipeline de demo).
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Error de configuración: {0}")]
    Config(String),
    #[error("Output '{name}' no declarado por {component}")]
    MissingOutput { component: String, name: String },
    #[error("Error de spec: {0}")]
    Spec(#[from] SpecError),
    #[error("Error de channel: {0}")]
    Channel(#[from] ChannelError),
    #[error("Error de serialización: {0}")]
    Serialization(#[from] serde_json::Error),
}

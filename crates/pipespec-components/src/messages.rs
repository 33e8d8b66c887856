//! Mensajes estructurados aceptados como parámetros de ejecución.
//!
//! Cada mensaje implementa `StructuredMessage`; el validador lo guarda como
//! JSON canónico dentro de las execution properties.

use pipespec_core::StructuredMessage;
use serde::{Deserialize, Serialize};

/// Split de entrada: nombre y patrón glob relativo al directorio de datos.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Split {
    pub name: String,
    pub pattern: String,
}

/// Configuración de entrada de la ingesta.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Input {
    pub splits: Vec<Split>,
}

impl Input {
    /// Un único split que toma todos los archivos del directorio.
    pub fn single_split(pattern: impl Into<String>) -> Self {
        Self { splits: vec![Split { name: "single_split".to_string(),
                                    pattern: pattern.into() }] }
    }

    pub fn from_splits<I, N, P>(splits: I) -> Self
        where I: IntoIterator<Item = (N, P)>,
              N: Into<String>,
              P: Into<String>
    {
        Self { splits: splits.into_iter()
                             .map(|(name, pattern)| Split { name: name.into(),
                                                            pattern: pattern.into() })
                             .collect() }
    }
}

impl Default for Input {
    fn default() -> Self {
        Self::single_split("*")
    }
}

impl StructuredMessage for Input {
    const TYPE_NAME: &'static str = "Input";
}

/// Split de salida con su número de hash buckets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitConfig {
    pub name: String,
    pub hash_buckets: u32,
}

/// Configuración de salida: cómo repartir los ejemplos entre splits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Output {
    pub splits: Vec<SplitConfig>,
}

impl Default for Output {
    /// train:eval = 2:1
    fn default() -> Self {
        Self { splits: vec![SplitConfig { name: "train".to_string(),
                                          hash_buckets: 2 },
                            SplitConfig { name: "eval".to_string(),
                                          hash_buckets: 1 },] }
    }
}

impl StructuredMessage for Output {
    const TYPE_NAME: &'static str = "Output";
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainArgs {
    pub num_steps: u32,
}

impl StructuredMessage for TrainArgs {
    const TYPE_NAME: &'static str = "TrainArgs";
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvalArgs {
    pub num_steps: u32,
}

impl StructuredMessage for EvalArgs {
    const TYPE_NAME: &'static str = "EvalArgs";
}

//! Artifact: referencia a datos producidos/consumidos por un componente.
//!
//! El validador no interpreta el contenido; sólo conoce el `type_name`
//! lógico (que debe coincidir con el del `Channel` que lo transporta), la
//! URI y opcionalmente el split al que pertenece.
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artifact {
    pub type_name: String,
    pub uri: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub split: Option<String>,
}

impl Artifact {
    pub fn new(type_name: impl Into<String>, uri: impl Into<String>) -> Self {
        Self { type_name: type_name.into(),
               uri: uri.into(),
               split: None }
    }

    pub fn with_split(mut self, split: impl Into<String>) -> Self {
        self.split = Some(split.into());
        self
    }
}

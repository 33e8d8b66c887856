//! Channel: handle tipado que conecta la salida de un componente con la
//! entrada de otro.
//!
//! Para el validador un channel es opaco salvo por su `type_name`. Se
//! comparte mediante `Arc`, de modo que una instancia resuelta devuelve el
//! mismo objeto que suministró el caller (identidad verificable con
//! `Arc::ptr_eq`).
use std::fmt;

use serde::{Deserialize, Serialize};

use super::Artifact;
use crate::errors::ChannelError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Channel {
    type_name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    artifacts: Vec<Artifact>,
}

impl Channel {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self { type_name: type_name.into(),
               artifacts: vec![] }
    }

    /// Crea un channel con artifacts ya conocidos; todos deben ser del tipo
    /// del channel.
    pub fn with_artifacts(type_name: impl Into<String>, artifacts: Vec<Artifact>) -> Result<Self, ChannelError> {
        let type_name = type_name.into();
        if let Some(bad) = artifacts.iter().find(|a| a.type_name != type_name) {
            return Err(ChannelError::ArtifactType { expected: type_name,
                                                    found: bad.type_name.clone() });
        }
        Ok(Self { type_name, artifacts })
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn artifacts(&self) -> &[Artifact] {
        &self.artifacts
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Channel(type_name: {}, artifacts: {})", self.type_name, self.artifacts.len())
    }
}

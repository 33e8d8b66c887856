//! Declaraciones de campos de un descriptor.
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::{ParamType, StructuredMessage};

/// Sección de un descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Parameters,
    Inputs,
    Outputs,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::Parameters, Section::Inputs, Section::Outputs];

    /// Clave usada en las declaraciones JSON.
    pub fn json_key(self) -> &'static str {
        match self {
            Section::Parameters => "parameters",
            Section::Inputs => "inputs",
            Section::Outputs => "outputs",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Section::Parameters => f.write_str("PARAMETERS"),
            Section::Inputs => f.write_str("INPUTS"),
            Section::Outputs => f.write_str("OUTPUTS"),
        }
    }
}

/// Parámetro de ejecución: tipo esperado y opcionalidad (requerido por
/// defecto).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterSpec {
    #[serde(rename = "type")]
    pub ty: ParamType,
    #[serde(default)]
    pub optional: bool,
}

impl ParameterSpec {
    pub fn new(ty: ParamType) -> Self {
        Self { ty, optional: false }
    }

    pub fn int() -> Self {
        Self::new(ParamType::Int)
    }

    pub fn float() -> Self {
        Self::new(ParamType::Float)
    }

    pub fn bool() -> Self {
        Self::new(ParamType::Bool)
    }

    pub fn string() -> Self {
        Self::new(ParamType::String)
    }

    pub fn structured<M: StructuredMessage>() -> Self {
        Self::new(ParamType::structured::<M>())
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }
}

/// Slot de input/output: type-name lógico que deben tener los channels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelSpec {
    pub type_name: String,
    #[serde(default)]
    pub optional: bool,
}

impl ChannelSpec {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self { type_name: type_name.into(),
               optional: false }
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }
}

/// Entrada de una sección tal como se declara. Que una sección pueda
/// contener cualquiera de los dos tipos permite rechazar declaraciones mal
/// formadas al definir el descriptor y no en tiempo de uso.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldSpec {
    Parameter(ParameterSpec),
    Channel(ChannelSpec),
}

impl From<ParameterSpec> for FieldSpec {
    fn from(p: ParameterSpec) -> Self {
        FieldSpec::Parameter(p)
    }
}

impl From<ChannelSpec> for FieldSpec {
    fn from(c: ChannelSpec) -> Self {
        FieldSpec::Channel(c)
    }
}

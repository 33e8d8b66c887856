//! Argumentos de instanciación.
//!
//! `SpecArgs` reemplaza a los keyword arguments: un mapa nombre → valor que
//! se valida campo a campo contra el descriptor en una única pasada.
use std::sync::Arc;

use indexmap::IndexMap;

use crate::errors::SpecError;
use crate::model::{Channel, ParamValue, StructuredMessage};

/// Valor suministrado para un nombre: parámetro o channel.
#[derive(Debug, Clone, PartialEq)]
pub enum ArgValue {
    Param(ParamValue),
    Channel(Arc<Channel>),
}

impl ArgValue {
    pub fn describe(&self) -> String {
        match self {
            ArgValue::Param(p) => p.describe(),
            ArgValue::Channel(c) => c.to_string(),
        }
    }
}

impl From<ParamValue> for ArgValue {
    fn from(v: ParamValue) -> Self {
        ArgValue::Param(v)
    }
}

impl From<Arc<Channel>> for ArgValue {
    fn from(c: Arc<Channel>) -> Self {
        ArgValue::Channel(c)
    }
}

impl From<Channel> for ArgValue {
    fn from(c: Channel) -> Self {
        ArgValue::Channel(Arc::new(c))
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpecArgs {
    values: IndexMap<String, ArgValue>,
}

impl SpecArgs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn param(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.values.insert(name.into(), ArgValue::Param(value.into()));
        self
    }

    /// Suministra un mensaje estructurado; falla si no se puede exportar.
    pub fn message<M: StructuredMessage>(self, name: impl Into<String>, message: &M) -> Result<Self, SpecError> {
        let name = name.into();
        let value = ParamValue::message(message).map_err(|e| SpecError::Serialization { name: name.clone(),
                                                                                         reason: e.to_string() })?;
        Ok(self.param(name, value))
    }

    pub fn channel(mut self, name: impl Into<String>, channel: impl Into<Arc<Channel>>) -> Self {
        self.values.insert(name.into(), ArgValue::Channel(channel.into()));
        self
    }

    /// Variante sin tipo: acepta cualquier `ArgValue`.
    pub fn arg(mut self, name: impl Into<String>, value: impl Into<ArgValue>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<ArgValue>) -> Option<ArgValue> {
        self.values.insert(name.into(), value.into())
    }

    pub fn get(&self, name: &str) -> Option<&ArgValue> {
        self.values.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub(crate) fn into_values(self) -> IndexMap<String, ArgValue> {
        self.values
    }
}

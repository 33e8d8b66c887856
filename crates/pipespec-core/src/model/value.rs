//! Valores de parámetros: tipos declarados, valores suministrados y valores
//! resueltos.
//!
//! - `ParamType`: tipo declarado por un `ParameterSpec`. Los primitivos son
//!   `int`, `float`, `bool` y `string`; cualquier otro nombre denota un
//!   mensaje estructurado.
//! - `ParamValue`: valor suministrado por el autor del pipeline.
//! - `PropertyValue`: valor ya resuelto dentro de las execution properties.
//!   Los mensajes estructurados se guardan como su JSON canónico (string).

use std::fmt;

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;

use super::RuntimeParameter;
use crate::hashing::to_canonical_json;

/// Tipo declarado de un parámetro.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ParamType {
    Int,
    Float,
    Bool,
    String,
    /// Mensaje estructurado identificado por su `TYPE_NAME`.
    Structured(String),
}

impl ParamType {
    /// Tipo estructurado asociado a un `StructuredMessage`.
    pub fn structured<M: StructuredMessage>() -> Self {
        ParamType::Structured(M::TYPE_NAME.to_string())
    }

    /// Nombres reservados para los tipos primitivos; un mensaje estructurado
    /// no puede usarlos como `TYPE_NAME`.
    pub fn is_primitive_label(name: &str) -> bool {
        matches!(name, "int" | "float" | "bool" | "string")
    }

    pub fn is_primitive(&self) -> bool {
        !matches!(self, ParamType::Structured(_))
    }

    /// Indica si `value` es aceptable para este tipo. Un runtime parameter
    /// se acepta cuando su `ptype` coincide con el tipo declarado.
    pub fn accepts(&self, value: &ParamValue) -> bool {
        match (self, value) {
            (ParamType::Int, ParamValue::Int(_)) => true,
            (ParamType::Float, ParamValue::Float(_)) => true,
            (ParamType::Bool, ParamValue::Bool(_)) => true,
            (ParamType::String, ParamValue::String(_)) => true,
            (ParamType::Structured(expected), ParamValue::Structured(s)) => s.type_name() == expected,
            (declared, ParamValue::Runtime(rp)) => rp.ptype() == declared,
            _ => false,
        }
    }
}

impl fmt::Display for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamType::Int => f.write_str("int"),
            ParamType::Float => f.write_str("float"),
            ParamType::Bool => f.write_str("bool"),
            ParamType::String => f.write_str("string"),
            ParamType::Structured(name) => f.write_str(name),
        }
    }
}

impl From<String> for ParamType {
    fn from(s: String) -> Self {
        match s.as_str() {
            "int" => ParamType::Int,
            "float" => ParamType::Float,
            "bool" => ParamType::Bool,
            "string" => ParamType::String,
            _ => ParamType::Structured(s),
        }
    }
}

impl From<ParamType> for String {
    fn from(t: ParamType) -> Self {
        t.to_string()
    }
}

/// Capacidad explícita de "valor estructurado serializable".
///
/// El validador no introspecciona objetos arbitrarios: exporta los campos a
/// través de serde y los guarda en forma canónica.
pub trait StructuredMessage: Serialize + DeserializeOwned {
    /// Nombre lógico del mensaje (debe coincidir con `ParamType::Structured`).
    const TYPE_NAME: &'static str;
}

/// Mensaje estructurado ya exportado a un mapa campo → valor.
#[derive(Debug, Clone, PartialEq)]
pub struct StructuredValue {
    type_name: String,
    fields: Value,
}

impl StructuredValue {
    pub fn new(type_name: impl Into<String>, fields: Value) -> Self {
        Self { type_name: type_name.into(),
               fields }
    }

    pub fn from_message<M: StructuredMessage>(message: &M) -> Result<Self, serde_json::Error> {
        Ok(Self::new(M::TYPE_NAME, serde_json::to_value(message)?))
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn fields(&self) -> &Value {
        &self.fields
    }

    /// Forma canónica (JSON con claves ordenadas) que se guarda como
    /// execution property.
    pub fn to_canonical_string(&self) -> String {
        to_canonical_json(&self.fields)
    }

    pub fn decode<M: StructuredMessage>(&self) -> Result<M, serde_json::Error> {
        serde_json::from_value(self.fields.clone())
    }
}

/// Valor suministrado para un parámetro.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Int(i64),
    Float(f64),
    Bool(bool),
    String(String),
    Structured(StructuredValue),
    Runtime(RuntimeParameter),
}

impl ParamValue {
    /// Exporta un mensaje estructurado.
    pub fn message<M: StructuredMessage>(message: &M) -> Result<Self, serde_json::Error> {
        StructuredValue::from_message(message).map(ParamValue::Structured)
    }

    /// Nombre del tipo del valor, en el mismo vocabulario que `ParamType`.
    pub fn type_label(&self) -> String {
        match self {
            ParamValue::Int(_) => "int".to_string(),
            ParamValue::Float(_) => "float".to_string(),
            ParamValue::Bool(_) => "bool".to_string(),
            ParamValue::String(_) => "string".to_string(),
            ParamValue::Structured(s) => s.type_name().to_string(),
            ParamValue::Runtime(rp) => format!("runtime parameter of type {}", rp.ptype()),
        }
    }

    /// Descripción "valor (tipo)" usada en los mensajes de error.
    pub fn describe(&self) -> String {
        match self {
            ParamValue::Int(v) => format!("{v} (int)"),
            ParamValue::Float(v) => format!("{v} (float)"),
            ParamValue::Bool(v) => format!("{v} (bool)"),
            ParamValue::String(v) => format!("{} (string)", Value::String(v.clone())),
            ParamValue::Structured(s) => format!("{} ({})", s.to_canonical_string(), s.type_name()),
            ParamValue::Runtime(rp) => format!("'{}' ({})", rp.name(), self.type_label()),
        }
    }
}

impl From<i64> for ParamValue {
    fn from(v: i64) -> Self {
        ParamValue::Int(v)
    }
}

impl From<i32> for ParamValue {
    fn from(v: i32) -> Self {
        ParamValue::Int(v.into())
    }
}

impl From<u32> for ParamValue {
    fn from(v: u32) -> Self {
        ParamValue::Int(v.into())
    }
}

impl From<f64> for ParamValue {
    fn from(v: f64) -> Self {
        ParamValue::Float(v)
    }
}

impl From<bool> for ParamValue {
    fn from(v: bool) -> Self {
        ParamValue::Bool(v)
    }
}

impl From<&str> for ParamValue {
    fn from(v: &str) -> Self {
        ParamValue::String(v.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(v: String) -> Self {
        ParamValue::String(v)
    }
}

impl From<StructuredValue> for ParamValue {
    fn from(v: StructuredValue) -> Self {
        ParamValue::Structured(v)
    }
}

impl From<RuntimeParameter> for ParamValue {
    fn from(v: RuntimeParameter) -> Self {
        ParamValue::Runtime(v)
    }
}

/// Valor resuelto de una execution property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Int(i64),
    Float(f64),
    Bool(bool),
    String(String),
}

impl PropertyValue {
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            PropertyValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            PropertyValue::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            PropertyValue::Bool(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropertyValue::String(v) => Some(v),
            _ => None,
        }
    }

    pub fn to_json_value(&self) -> Value {
        match self {
            PropertyValue::Int(v) => Value::from(*v),
            PropertyValue::Float(v) => Value::from(*v),
            PropertyValue::Bool(v) => Value::Bool(*v),
            PropertyValue::String(v) => Value::String(v.clone()),
        }
    }

    /// Convierte de vuelta a `ParamValue` (siempre primitivo).
    pub fn to_param_value(&self) -> ParamValue {
        match self {
            PropertyValue::Int(v) => ParamValue::Int(*v),
            PropertyValue::Float(v) => ParamValue::Float(*v),
            PropertyValue::Bool(v) => ParamValue::Bool(*v),
            PropertyValue::String(v) => ParamValue::String(v.clone()),
        }
    }
}

//! Runtime parameters: valores que se enlazan cuando el pipeline se ejecuta.
//!
//! Un `RuntimeParameter` puede suministrarse en lugar de un valor concreto
//! para un parámetro cuyo tipo declarado coincida con su `ptype`. En las
//! execution properties se guarda su placeholder textual, que el runner
//! externo sustituye más tarde.
//!
//! Por ahora sólo se soportan runtime parameters de tipo `string`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{ParamType, ParamValue, PropertyValue};
use crate::constants::{RUNTIME_PLACEHOLDER_PREFIX, RUNTIME_PLACEHOLDER_SUFFIX};
use crate::errors::SpecError;
use crate::hashing::to_canonical_json;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuntimeParameter {
    name: String,
    ptype: ParamType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    default: Option<PropertyValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
}

impl RuntimeParameter {
    pub fn new(name: impl Into<String>,
               ptype: ParamType,
               default: Option<ParamValue>,
               description: Option<String>)
               -> Result<Self, SpecError> {
        let name = name.into();
        if ptype != ParamType::String {
            return Err(SpecError::RuntimeParameter { name,
                                                     reason: format!("only string typed runtime parameters are supported (got {ptype})") });
        }
        let default = match default {
            None => None,
            Some(value) => Some(Self::check_default(&name, &ptype, value)?),
        };
        Ok(Self { name,
                  ptype,
                  default,
                  description })
    }

    fn check_default(name: &str, ptype: &ParamType, value: ParamValue) -> Result<PropertyValue, SpecError> {
        let mismatch = || SpecError::RuntimeParameter { name: name.to_string(),
                                                        reason: format!("default value must be consistent with ptype {ptype} (got {})",
                                                                        value.describe()) };
        match (&value, ptype) {
            (ParamValue::String(v), ParamType::String) => Ok(PropertyValue::String(v.clone())),
            (ParamValue::Int(v), ParamType::Int) => Ok(PropertyValue::Int(*v)),
            (ParamValue::Float(v), ParamType::Float) => Ok(PropertyValue::Float(*v)),
            (ParamValue::Bool(v), ParamType::Bool) => Ok(PropertyValue::Bool(*v)),
            _ => Err(mismatch()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ptype(&self) -> &ParamType {
        &self.ptype
    }

    pub fn default_value(&self) -> Option<&PropertyValue> {
        self.default.as_ref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Forma textual estable, p.ej.
    /// `{{pipespec.runtime:{"name":"x","ptype":"string"}}}`.
    pub fn placeholder(&self) -> String {
        let mut fields = Map::new();
        fields.insert("name".to_string(), Value::String(self.name.clone()));
        fields.insert("ptype".to_string(), Value::String(self.ptype.to_string()));
        if let Some(default) = &self.default {
            fields.insert("default".to_string(), default.to_json_value());
        }
        if let Some(description) = &self.description {
            fields.insert("description".to_string(), Value::String(description.clone()));
        }
        let body = to_canonical_json(&Value::Object(fields));
        format!("{RUNTIME_PLACEHOLDER_PREFIX}{body}{RUNTIME_PLACEHOLDER_SUFFIX}")
    }

    /// Reconstruye un runtime parameter desde su placeholder, aplicando las
    /// mismas validaciones que `new`.
    pub fn parse(placeholder: &str) -> Result<Self, SpecError> {
        let invalid = |reason: String| SpecError::RuntimeParameter { name: placeholder.to_string(),
                                                                     reason };
        let body = placeholder.strip_prefix(RUNTIME_PLACEHOLDER_PREFIX)
                              .and_then(|rest| rest.strip_suffix(RUNTIME_PLACEHOLDER_SUFFIX))
                              .ok_or_else(|| invalid("not a runtime parameter placeholder".to_string()))?;
        let raw: RuntimeParameter = serde_json::from_str(body).map_err(|e| invalid(e.to_string()))?;
        Self::new(raw.name,
                  raw.ptype,
                  raw.default.as_ref().map(PropertyValue::to_param_value),
                  raw.description)
    }

    /// Indica si un string es un placeholder de runtime parameter.
    pub fn is_placeholder(value: &str) -> bool {
        value.starts_with(RUNTIME_PLACEHOLDER_PREFIX) && value.ends_with(RUNTIME_PLACEHOLDER_SUFFIX)
    }
}

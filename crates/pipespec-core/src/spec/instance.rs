//! Instancia resuelta de un descriptor y la pasada de validación que la
//! produce.
//!
//! Orden de validación (se reporta la primera violación):
//! 1. PARAMETERS en orden de declaración.
//! 2. INPUTS en orden de declaración.
//! 3. OUTPUTS en orden de declaración.
//! 4. Argumentos no declarados, en el orden en que se suministraron.
use std::sync::Arc;

use indexmap::IndexMap;
use log::{debug, warn};
use serde_json::{json, Map, Value};

use super::args::{ArgValue, SpecArgs};
use super::channel_map::ChannelMap;
use super::descriptor::Descriptor;
use super::field::{ChannelSpec, ParameterSpec};
use crate::constants::SPEC_FORMAT_VERSION;
use crate::errors::SpecError;
use crate::hashing::hash_value;
use crate::model::{Channel, ParamValue, PropertyValue, StructuredMessage};

/// Opciones de la pasada de validación.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationOptions {
    /// Si es `true` (por defecto), un argumento no declarado es error; si es
    /// `false` se descarta con un warning.
    pub strict_arguments: bool,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self { strict_arguments: true }
    }
}

/// Resultado inmutable de validar argumentos contra un descriptor.
#[derive(Debug, Clone, PartialEq)]
pub struct SpecInstance {
    spec_name: String,
    exec_properties: IndexMap<String, PropertyValue>,
    inputs: ChannelMap,
    outputs: ChannelMap,
}

impl SpecInstance {
    pub fn spec_name(&self) -> &str {
        &self.spec_name
    }

    pub fn exec_properties(&self) -> &IndexMap<String, PropertyValue> {
        &self.exec_properties
    }

    pub fn inputs(&self) -> &ChannelMap {
        &self.inputs
    }

    pub fn outputs(&self) -> &ChannelMap {
        &self.outputs
    }

    /// Decodifica una execution property estructurada a su mensaje.
    /// `Ok(None)` si la propiedad no está presente.
    pub fn exec_property_message<M: StructuredMessage>(&self, name: &str) -> Result<Option<M>, serde_json::Error> {
        match self.exec_properties.get(name) {
            None => Ok(None),
            Some(PropertyValue::String(s)) => serde_json::from_str(s).map(Some),
            Some(other) => serde_json::from_value(serde_json::to_value(other)?).map(Some),
        }
    }

    /// Vista JSON de la instancia: properties tal cual y channels por
    /// type-name. Los aliases no se incluyen.
    pub fn to_json(&self) -> Value {
        let channels = |m: &ChannelMap| {
            let out: Map<String, Value> = m.iter()
                                           .map(|(k, c)| (k.to_string(), serde_json::to_value(c.as_ref()).unwrap_or(Value::Null)))
                                           .collect();
            Value::Object(out)
        };
        let props: Map<String, Value> = self.exec_properties
                                            .iter()
                                            .map(|(k, v)| (k.clone(), serde_json::to_value(v).unwrap_or(Value::Null)))
                                            .collect();
        json!({
            "spec": self.spec_name,
            "exec_properties": props,
            "inputs": channels(&self.inputs),
            "outputs": channels(&self.outputs),
        })
    }

    /// Hash blake3 de la forma canónica de `to_json`. No depende del orden
    /// en que se suministraron los argumentos.
    pub fn fingerprint(&self) -> String {
        hash_value(&json!({
            "format": SPEC_FORMAT_VERSION,
            "instance": self.to_json(),
        }))
    }
}

pub(crate) fn resolve(descriptor: &Descriptor, args: SpecArgs, options: &ValidationOptions) -> Result<SpecInstance, SpecError> {
    let spec = descriptor.name();
    let mut remaining = args.into_values();

    let mut exec_properties = IndexMap::new();
    for (name, param) in descriptor.parameters() {
        match remaining.shift_remove(name) {
            Some(ArgValue::Param(value)) => {
                exec_properties.insert(name.clone(), resolve_parameter(name, param, value)?);
            }
            Some(ArgValue::Channel(channel)) => {
                return Err(SpecError::ParameterType { name: name.clone(),
                                                      expected: param.ty.clone(),
                                                      actual: channel.to_string() });
            }
            None if param.optional => {}
            None => {
                return Err(SpecError::MissingArgument { spec: spec.to_string(),
                                                        name: name.clone() })
            }
        }
    }

    let inputs = resolve_channels(spec, descriptor.inputs(), &mut remaining)?;
    let outputs = resolve_channels(spec, descriptor.outputs(), &mut remaining)?;

    for (name, value) in remaining {
        if options.strict_arguments {
            return Err(SpecError::UnexpectedArgument { spec: spec.to_string(),
                                                       name });
        }
        warn!("spec:drop_argument spec={spec} name={name} value={}", value.describe());
    }

    debug!("spec:resolved spec={spec} exec_properties={} inputs={} outputs={}",
           exec_properties.len(),
           inputs.len(),
           outputs.len());

    Ok(SpecInstance { spec_name: spec.to_string(),
                      exec_properties,
                      inputs: ChannelMap::new(inputs, descriptor.input_aliases().clone()),
                      outputs: ChannelMap::new(outputs, descriptor.output_aliases().clone()) })
}

fn resolve_parameter(name: &str, param: &ParameterSpec, value: ParamValue) -> Result<PropertyValue, SpecError> {
    if !param.ty.accepts(&value) {
        return Err(SpecError::ParameterType { name: name.to_string(),
                                              expected: param.ty.clone(),
                                              actual: value.describe() });
    }
    Ok(match value {
        ParamValue::Int(v) => PropertyValue::Int(v),
        ParamValue::Float(v) => PropertyValue::Float(v),
        ParamValue::Bool(v) => PropertyValue::Bool(v),
        ParamValue::String(v) => PropertyValue::String(v),
        ParamValue::Structured(s) => PropertyValue::String(s.to_canonical_string()),
        ParamValue::Runtime(rp) => PropertyValue::String(rp.placeholder()),
    })
}

fn resolve_channels(spec: &str,
                    declared: &IndexMap<String, ChannelSpec>,
                    remaining: &mut IndexMap<String, ArgValue>)
                    -> Result<IndexMap<String, Arc<Channel>>, SpecError> {
    let mut out = IndexMap::new();
    for (name, slot) in declared {
        match remaining.shift_remove(name) {
            Some(ArgValue::Channel(channel)) if channel.type_name() == slot.type_name => {
                out.insert(name.clone(), channel);
            }
            Some(other) => {
                return Err(SpecError::ChannelType { name: name.clone(),
                                                    expected: slot.type_name.clone(),
                                                    actual: other.describe() });
            }
            None if slot.optional => {}
            None => {
                return Err(SpecError::MissingArgument { spec: spec.to_string(),
                                                        name: name.clone() })
            }
        }
    }
    Ok(out)
}

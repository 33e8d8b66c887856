//! Declaración de descriptores desde documentos JSON.
//!
//! Formato:
//!
//! ```json
//! {
//!   "parameters": { "folds": { "kind": "parameter", "type": "int" } },
//!   "inputs":     { "input": { "kind": "channel", "type_name": "InputType" } },
//!   "outputs":    { "output": { "kind": "channel", "type_name": "OutputType" } },
//!   "input_aliases":  { "future_input_name": "input" },
//!   "output_aliases": { "future_output_name": "output" }
//! }
//! ```
//!
//! Aquí se detectan los errores que el builder tipado no puede representar:
//! secciones que no son un mapa y entradas que no son un parámetro de
//! componente. El resto del chequeo lo hace `DescriptorBuilder::build`.

use serde_json::{Map, Value};

use super::descriptor::{Descriptor, DescriptorBuilder};
use super::field::{FieldSpec, Section};
use crate::errors::DefinitionError;

const INPUT_ALIASES_KEY: &str = "input_aliases";
const OUTPUT_ALIASES_KEY: &str = "output_aliases";

impl Descriptor {
    /// Construye y valida un descriptor desde su declaración JSON.
    pub fn from_json(name: impl Into<String>, declaration: &Value) -> Result<Descriptor, DefinitionError> {
        let name = name.into();
        let empty = Map::new();
        let doc = declaration.as_object().unwrap_or(&empty);

        // Un descriptor al que le falta una sección es abstracto; se reporta
        // antes que cualquier otro defecto.
        if let Some(section) = Section::ALL.into_iter().find(|s| !doc.contains_key(s.json_key())) {
            return Err(DefinitionError::MissingSection { spec: name,
                                                         section });
        }

        let mut builder = DescriptorBuilder::new(name.clone());
        for section in Section::ALL {
            let entries = as_map(&name, section.json_key(), section.to_string(), &doc[section.json_key()])?;
            builder = builder.declare(section);
            for (field, raw) in entries {
                let spec: FieldSpec = serde_json::from_value(raw.clone()).map_err(|e| {
                                          DefinitionError::NotAComponentParameter { spec: name.clone(),
                                                                                    section,
                                                                                    name: field.clone(),
                                                                                    reason: e.to_string() }
                                      })?;
                builder = builder.entry(section, field.clone(), spec);
            }
        }

        for (alias, target) in aliases(&name, doc, INPUT_ALIASES_KEY)? {
            builder = builder.input_alias(alias, target);
        }
        for (alias, target) in aliases(&name, doc, OUTPUT_ALIASES_KEY)? {
            builder = builder.output_alias(alias, target);
        }
        builder.build()
    }

    /// Declaración JSON equivalente (inversa de `from_json`).
    pub fn to_json(&self) -> Value {
        let section = |entries: Vec<(String, FieldSpec)>| {
            let map: Map<String, Value> = entries.into_iter()
                                                 .map(|(k, v)| (k, serde_json::to_value(v).unwrap_or(Value::Null)))
                                                 .collect();
            Value::Object(map)
        };
        let parameters: Vec<(String, FieldSpec)> = self.parameters()
                                                       .iter()
                                                       .map(|(k, v)| (k.clone(), FieldSpec::Parameter(v.clone())))
                                                       .collect();
        let inputs: Vec<(String, FieldSpec)> = self.inputs()
                                                   .iter()
                                                   .map(|(k, v)| (k.clone(), FieldSpec::Channel(v.clone())))
                                                   .collect();
        let outputs: Vec<(String, FieldSpec)> = self.outputs()
                                                    .iter()
                                                    .map(|(k, v)| (k.clone(), FieldSpec::Channel(v.clone())))
                                                    .collect();
        let alias_map = |aliases: &indexmap::IndexMap<String, String>| {
            Value::Object(aliases.iter()
                                 .map(|(k, v)| (k.clone(), Value::String(v.clone())))
                                 .collect())
        };
        let mut doc = Map::new();
        doc.insert(Section::Parameters.json_key().to_string(), section(parameters));
        doc.insert(Section::Inputs.json_key().to_string(), section(inputs));
        doc.insert(Section::Outputs.json_key().to_string(), section(outputs));
        doc.insert(INPUT_ALIASES_KEY.to_string(), alias_map(self.input_aliases()));
        doc.insert(OUTPUT_ALIASES_KEY.to_string(), alias_map(self.output_aliases()));
        Value::Object(doc)
    }
}

fn json_kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn as_map<'a>(spec: &str, key: &str, label: String, v: &'a Value) -> Result<&'a Map<String, Value>, DefinitionError> {
    v.as_object().ok_or_else(|| {
                     log::debug!("descriptor:not_a_map spec={spec} key={key}");
                     DefinitionError::NotAMap { spec: spec.to_string(),
                                                section: label,
                                                found: json_kind(v).to_string() }
                 })
}

fn aliases(spec: &str, doc: &Map<String, Value>, key: &str) -> Result<Vec<(String, String)>, DefinitionError> {
    let Some(raw) = doc.get(key) else {
        return Ok(vec![]);
    };
    let map = as_map(spec, key, key.to_string(), raw)?;
    map.iter()
       .map(|(alias, target)| match target.as_str() {
           Some(t) => Ok((alias.clone(), t.to_string())),
           None => Err(DefinitionError::InvalidAlias { spec: spec.to_string(),
                                                       alias: alias.clone(),
                                                       reason: format!("target must be a string (got {})", json_kind(target)) }),
       })
       .collect()
}

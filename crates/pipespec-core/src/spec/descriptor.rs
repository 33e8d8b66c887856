//! Descriptor: esquema declarativo de un componente.
//!
//! Un `Descriptor` se construye una sola vez mediante `DescriptorBuilder`
//! (o `Descriptor::from_json`) y queda inmutable. `build` ejecuta el chequeo
//! de definición completo; si pasa, cualquier instanciación posterior sólo
//! puede fallar por culpa de los argumentos.
//!
//! Orden del chequeo de definición:
//! 1. Secciones declaradas (PARAMETERS, INPUTS, OUTPUTS).
//! 2. Tipo de cada entrada, sección por sección y en orden de declaración
//!    (incluye type-names estructurados que chocan con un primitivo).
//! 3. Nombres duplicados dentro de una sección o entre secciones.
//! 4. Aliases de inputs y luego de outputs.

use indexmap::IndexMap;
use log::debug;

use super::args::SpecArgs;
use super::field::{ChannelSpec, FieldSpec, ParameterSpec, Section};
use super::instance::{resolve, SpecInstance, ValidationOptions};
use crate::errors::{DefinitionError, SpecError};
use crate::model::ParamType;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Descriptor {
    name: String,
    parameters: IndexMap<String, ParameterSpec>,
    inputs: IndexMap<String, ChannelSpec>,
    outputs: IndexMap<String, ChannelSpec>,
    input_aliases: IndexMap<String, String>,
    output_aliases: IndexMap<String, String>,
}

impl Descriptor {
    pub fn builder(name: impl Into<String>) -> DescriptorBuilder {
        DescriptorBuilder::new(name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parameters(&self) -> &IndexMap<String, ParameterSpec> {
        &self.parameters
    }

    pub fn inputs(&self) -> &IndexMap<String, ChannelSpec> {
        &self.inputs
    }

    pub fn outputs(&self) -> &IndexMap<String, ChannelSpec> {
        &self.outputs
    }

    /// Alias → nombre canónico de input.
    pub fn input_aliases(&self) -> &IndexMap<String, String> {
        &self.input_aliases
    }

    /// Alias → nombre canónico de output.
    pub fn output_aliases(&self) -> &IndexMap<String, String> {
        &self.output_aliases
    }

    /// Sección en la que se declara `name`, si existe.
    pub fn section_of(&self, name: &str) -> Option<Section> {
        if self.parameters.contains_key(name) {
            Some(Section::Parameters)
        } else if self.inputs.contains_key(name) {
            Some(Section::Inputs)
        } else if self.outputs.contains_key(name) {
            Some(Section::Outputs)
        } else {
            None
        }
    }

    /// Valida `args` contra el descriptor con las opciones por defecto
    /// (argumentos no declarados son error).
    pub fn instantiate(&self, args: SpecArgs) -> Result<SpecInstance, SpecError> {
        self.instantiate_with(args, &ValidationOptions::default())
    }

    pub fn instantiate_with(&self, args: SpecArgs, options: &ValidationOptions) -> Result<SpecInstance, SpecError> {
        resolve(self, args, options)
    }
}

/// Registro de un descriptor. Las secciones que nunca se declaran (ni con
/// `declare` ni añadiendo entradas) hacen fallar `build` como descriptor
/// abstracto.
#[derive(Debug, Clone)]
pub struct DescriptorBuilder {
    name: String,
    sections: [Option<Vec<(String, FieldSpec)>>; 3],
    input_aliases: Vec<(String, String)>,
    output_aliases: Vec<(String, String)>,
}

impl DescriptorBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(),
               sections: [None, None, None],
               input_aliases: vec![],
               output_aliases: vec![] }
    }

    fn slot(section: Section) -> usize {
        match section {
            Section::Parameters => 0,
            Section::Inputs => 1,
            Section::Outputs => 2,
        }
    }

    /// Marca una sección como declarada (aunque quede vacía).
    pub fn declare(mut self, section: Section) -> Self {
        self.sections[Self::slot(section)].get_or_insert_with(Vec::new);
        self
    }

    /// Añade una entrada a una sección, declarándola si hacía falta.
    pub fn entry(mut self, section: Section, name: impl Into<String>, spec: impl Into<FieldSpec>) -> Self {
        self.sections[Self::slot(section)].get_or_insert_with(Vec::new)
                                          .push((name.into(), spec.into()));
        self
    }

    pub fn parameter(self, name: impl Into<String>, spec: impl Into<FieldSpec>) -> Self {
        self.entry(Section::Parameters, name, spec)
    }

    pub fn input(self, name: impl Into<String>, spec: impl Into<FieldSpec>) -> Self {
        self.entry(Section::Inputs, name, spec)
    }

    pub fn output(self, name: impl Into<String>, spec: impl Into<FieldSpec>) -> Self {
        self.entry(Section::Outputs, name, spec)
    }

    pub fn input_alias(mut self, alias: impl Into<String>, target: impl Into<String>) -> Self {
        self.input_aliases.push((alias.into(), target.into()));
        self
    }

    pub fn output_alias(mut self, alias: impl Into<String>, target: impl Into<String>) -> Self {
        self.output_aliases.push((alias.into(), target.into()));
        self
    }

    /// Ejecuta el chequeo de definición y produce el descriptor inmutable.
    pub fn build(self) -> Result<Descriptor, DefinitionError> {
        let DescriptorBuilder { name,
                                sections,
                                input_aliases,
                                output_aliases } = self;

        let [parameters, inputs, outputs] = sections;
        let parameters = parameters.ok_or_else(|| missing(&name, Section::Parameters))?;
        let inputs = inputs.ok_or_else(|| missing(&name, Section::Inputs))?;
        let outputs = outputs.ok_or_else(|| missing(&name, Section::Outputs))?;

        let parameters = parameters.into_iter()
                                   .map(|(field, spec)| match spec {
                                       FieldSpec::Parameter(ParameterSpec { ty: ParamType::Structured(type_name), .. })
                                           if ParamType::is_primitive_label(&type_name) =>
                                       {
                                           Err(DefinitionError::ReservedTypeName { spec: name.clone(),
                                                                                   name: field,
                                                                                   type_name })
                                       }
                                       FieldSpec::Parameter(p) => Ok((field, p)),
                                       FieldSpec::Channel(_) => {
                                           Err(DefinitionError::ExpectedParameterSpec { spec: name.clone(),
                                                                                        name: field })
                                       }
                                   })
                                   .collect::<Result<Vec<_>, _>>()?;
        let inputs = channel_entries(&name, Section::Inputs, inputs)?;
        let outputs = channel_entries(&name, Section::Outputs, outputs)?;

        let mut seen: IndexMap<String, Section> = IndexMap::new();
        let names = parameters.iter()
                              .map(|(n, _)| (n, Section::Parameters))
                              .chain(inputs.iter().map(|(n, _)| (n, Section::Inputs)))
                              .chain(outputs.iter().map(|(n, _)| (n, Section::Outputs)));
        for (field, section) in names {
            if let Some(first) = seen.insert(field.clone(), section) {
                return Err(DefinitionError::DuplicateArgument { spec: name.clone(),
                                                                name: field.clone(),
                                                                first,
                                                                second: section });
            }
        }

        let parameters: IndexMap<String, ParameterSpec> = parameters.into_iter().collect();
        let inputs: IndexMap<String, ChannelSpec> = inputs.into_iter().collect();
        let outputs: IndexMap<String, ChannelSpec> = outputs.into_iter().collect();

        let input_aliases = check_aliases(&name, Section::Inputs, input_aliases, &inputs, &seen)?;
        let output_aliases = check_aliases(&name, Section::Outputs, output_aliases, &outputs, &seen)?;
        if let Some(alias) = input_aliases.keys().find(|a| output_aliases.contains_key(*a)) {
            return Err(DefinitionError::AliasCollision { spec: name,
                                                         alias: alias.clone() });
        }

        debug!("descriptor:defined name={name} parameters={} inputs={} outputs={} aliases={}",
               parameters.len(),
               inputs.len(),
               outputs.len(),
               input_aliases.len() + output_aliases.len());

        Ok(Descriptor { name,
                        parameters,
                        inputs,
                        outputs,
                        input_aliases,
                        output_aliases })
    }
}

fn missing(spec: &str, section: Section) -> DefinitionError {
    DefinitionError::MissingSection { spec: spec.to_string(),
                                      section }
}

fn channel_entries(spec: &str,
                   section: Section,
                   entries: Vec<(String, FieldSpec)>)
                   -> Result<Vec<(String, ChannelSpec)>, DefinitionError> {
    entries.into_iter()
           .map(|(field, entry)| match entry {
               FieldSpec::Channel(c) => Ok((field, c)),
               FieldSpec::Parameter(_) => Err(DefinitionError::ExpectedChannelSpec { spec: spec.to_string(),
                                                                                     section,
                                                                                     name: field }),
           })
           .collect()
}

fn check_aliases(spec: &str,
                 section: Section,
                 aliases: Vec<(String, String)>,
                 targets: &IndexMap<String, ChannelSpec>,
                 declared: &IndexMap<String, Section>)
                 -> Result<IndexMap<String, String>, DefinitionError> {
    let mut out = IndexMap::new();
    for (alias, target) in aliases {
        if declared.contains_key(&alias) || out.contains_key(&alias) {
            return Err(DefinitionError::AliasCollision { spec: spec.to_string(),
                                                         alias });
        }
        if !targets.contains_key(&target) {
            return Err(DefinitionError::UnknownAliasTarget { spec: spec.to_string(),
                                                             section,
                                                             alias,
                                                             target });
        }
        out.insert(alias, target);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_within_one_section_is_rejected() {
        let err = Descriptor::builder("Dup").parameter("x", ParameterSpec::int())
                                            .parameter("x", ParameterSpec::string())
                                            .declare(Section::Inputs)
                                            .declare(Section::Outputs)
                                            .build()
                                            .unwrap_err();
        assert!(matches!(err, DefinitionError::DuplicateArgument { first: Section::Parameters, second: Section::Parameters, .. }));
    }

    #[test]
    fn section_of_reports_declaring_section() {
        let d = Descriptor::builder("S").parameter("p", ParameterSpec::int())
                                        .input("i", ChannelSpec::new("I"))
                                        .declare(Section::Outputs)
                                        .build()
                                        .unwrap();
        assert_eq!(d.section_of("p"), Some(Section::Parameters));
        assert_eq!(d.section_of("i"), Some(Section::Inputs));
        assert_eq!(d.section_of("o"), None);
    }
}

//! Errores del validador.
//!
//! - `DefinitionError`: la declaración de un descriptor es inválida. Es fatal
//!   para ese descriptor; nunca se reintenta.
//! - `SpecError`: los argumentos de una instanciación no cumplen el
//!   descriptor. El caller puede corregirlos y volver a intentar.
//! - `ChannelError`: un channel recibió artifacts de otro tipo.
//!
//! Los mensajes forman parte del contrato observable: siempre nombran el
//! campo afectado y, cuando aplica, el tipo esperado frente al recibido.

use thiserror::Error;

use crate::model::ParamType;
use crate::spec::Section;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum DefinitionError {
    #[error("Can't instantiate abstract component spec {spec}: {section} is not declared")]
    MissingSection { spec: String, section: Section },

    #[error("Component spec {spec} must override {section} with a map of name to spec (got {found})")]
    NotAMap { spec: String, section: String, found: String },

    #[error("Component spec {spec} expects {section} entries to be component parameters; '{name}' is not: {reason}")]
    NotAComponentParameter { spec: String, section: Section, name: String, reason: String },

    #[error("Component spec {spec} expects values of type ParameterSpec in PARAMETERS; '{name}' is a ChannelSpec")]
    ExpectedParameterSpec { spec: String, name: String },

    #[error("Component spec {spec} {section} expect values of type ChannelSpec; '{name}' is a ParameterSpec")]
    ExpectedChannelSpec { spec: String, section: Section, name: String },

    #[error("Component spec {spec}: parameter '{name}' declares structured type '{type_name}', which is reserved for a primitive type")]
    ReservedTypeName { spec: String, name: String, type_name: String },

    #[error("Component spec {spec} has a duplicate argument '{name}' (declared in {first} and {second})")]
    DuplicateArgument { spec: String, name: String, first: Section, second: Section },

    #[error("Component spec {spec}: alias '{alias}' refers to '{target}', which is not declared in {section}")]
    UnknownAliasTarget { spec: String, section: Section, alias: String, target: String },

    #[error("Component spec {spec}: alias '{alias}' collides with a declared argument")]
    AliasCollision { spec: String, alias: String },

    #[error("Component spec {spec}: invalid alias '{alias}': {reason}")]
    InvalidAlias { spec: String, alias: String, reason: String },
}

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum SpecError {
    #[error(transparent)]
    Definition(#[from] DefinitionError),

    #[error("Expected type {expected} for parameter '{name}' but got {actual}.")]
    ParameterType { name: String, expected: ParamType, actual: String },

    #[error("Argument '{name}' should be a Channel of type_name '{expected}' (got {actual}).")]
    ChannelType { name: String, expected: String, actual: String },

    #[error("Missing argument '{name}' for component spec {spec}")]
    MissingArgument { spec: String, name: String },

    #[error("Unexpected argument '{name}' for component spec {spec}")]
    UnexpectedArgument { spec: String, name: String },

    #[error("Could not serialize structured parameter '{name}': {reason}")]
    Serialization { name: String, reason: String },

    #[error("Invalid runtime parameter '{name}': {reason}")]
    RuntimeParameter { name: String, reason: String },
}

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ChannelError {
    #[error("artifact of type '{found}' cannot be placed in a Channel of type_name '{expected}'")]
    ArtifactType { expected: String, found: String },
}

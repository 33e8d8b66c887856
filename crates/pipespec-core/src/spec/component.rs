//! `ComponentSpec`: descriptor estático asociado a un tipo.
//!
//! Normalmente se implementa con el macro `component_spec!`, que declara el
//! struct, guarda el descriptor en un `Lazy` y lo valida la primera vez que
//! se necesita. Un descriptor inválido hace fallar cada intento de
//! instanciación con el mismo `DefinitionError`.
use std::ops::Deref;

use super::args::SpecArgs;
use super::descriptor::Descriptor;
use super::instance::{SpecInstance, ValidationOptions};
use crate::errors::{DefinitionError, SpecError};

pub trait ComponentSpec: Sized + Deref<Target = SpecInstance> {
    /// Descriptor validado del tipo (chequeo de definición ejecutado una vez).
    fn descriptor() -> Result<&'static Descriptor, DefinitionError>;

    fn from_instance(instance: SpecInstance) -> Self;

    fn into_instance(self) -> SpecInstance;

    fn new(args: SpecArgs) -> Result<Self, SpecError> {
        Self::with_options(args, &ValidationOptions::default())
    }

    fn with_options(args: SpecArgs, options: &ValidationOptions) -> Result<Self, SpecError> {
        let descriptor = Self::descriptor()?;
        descriptor.instantiate_with(args, options).map(Self::from_instance)
    }
}

//! pipespec-core: validador de descriptores de componentes.
//!
//! Un descriptor declara los parámetros de ejecución y los slots tipados de
//! input/output de un componente de pipeline. Este crate:
//! - Valida la declaración una sola vez (`DescriptorBuilder::build`).
//! - Valida y normaliza argumentos en una `SpecInstance` inmutable con tres
//!   mapas: execution properties, inputs y outputs (con aliases).
//! - Serializa parámetros estructurados a JSON canónico.
//!
//! No ejecuta componentes ni pipelines; eso es responsabilidad del runner.
pub mod constants;
pub mod errors;
pub mod hashing;
pub mod model;
pub mod spec;

pub use errors::{ChannelError, DefinitionError, SpecError};
pub use model::{Artifact, Channel, ParamType, ParamValue, PropertyValue, RuntimeParameter, StructuredMessage, StructuredValue};
pub use spec::{ArgValue, ChannelMap, ChannelSpec, ComponentSpec, Descriptor, DescriptorBuilder, FieldSpec, ParameterSpec, Section,
               SpecArgs, SpecInstance, ValidationOptions};

#[doc(hidden)]
pub mod __private {
    pub use once_cell::sync::Lazy;
}

//! Modelos neutrales: channels, artifacts y valores de parámetros.

pub mod artifact;
pub mod channel;
pub mod runtime;
pub mod value;

pub use artifact::Artifact;
pub use channel::Channel;
pub use runtime::RuntimeParameter;
pub use value::{ParamType, ParamValue, PropertyValue, StructuredMessage, StructuredValue};

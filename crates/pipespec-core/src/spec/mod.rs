//! Descriptores de componentes y su validación.
//!
//! - `DescriptorBuilder` / `Descriptor::from_json`: declaración + chequeo de
//!   definición.
//! - `SpecArgs` → `Descriptor::instantiate` → `SpecInstance`.
//! - `ComponentSpec` + `component_spec!`: descriptor estático por tipo.

mod args;
mod channel_map;
mod component;
mod descriptor;
mod field;
mod instance;
mod json;
pub mod macros;

pub use args::{ArgValue, SpecArgs};
pub use channel_map::ChannelMap;
pub use component::ComponentSpec;
pub use descriptor::{Descriptor, DescriptorBuilder};
pub use field::{ChannelSpec, FieldSpec, ParameterSpec, Section};
pub use instance::{SpecInstance, ValidationOptions};

//! PipeSpec Rust Library
//!
//! Este crate actúa como la librería central de PipeSpec:
//! - Re-exporta `pipespec_core` (descriptores, validación) y
//!   `pipespec_components` (componentes prebuilt).
//! - Expone `config` para leer opciones de validación y rutas del entorno.
//! - Expone `iris` con el pipeline de demo que usa `main-core`.
//!
//! Puede usarse desde `main.rs` o por otros crates/clientes.

pub mod config;
pub mod errors;
pub mod iris;

pub use pipespec_components as components;
pub use pipespec_core as spec;

use pipespec_core::{ComponentSpec, SpecArgs, SpecError};

/// Instancia `S` con las opciones de validación de `config`.
pub fn instantiate<S: ComponentSpec>(config: &config::AppConfig, args: SpecArgs) -> Result<S, SpecError> {
    S::with_options(args, &config.validation)
}

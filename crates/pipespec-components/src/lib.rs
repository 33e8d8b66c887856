//! pipespec-components: descriptores de los componentes prebuilt.
//!
//! Este crate provee:
//! - Los type-names estándar de artifacts (`artifacts`).
//! - Los mensajes estructurados que reciben como parámetros (`messages`).
//! - Los specs declarados con `component_spec!` (`specs`).
//! - Constructores de `Component` que crean los channels de salida para
//!   poder encadenar componentes (`component`).
//!
//! Nota: aquí sólo se valida la forma de cada componente. Ejecutarlos es
//! tarea del runner externo.

pub mod artifacts;
pub mod component;
pub mod messages;
pub mod specs;

pub use component::{csv_example_gen, example_validator, external_input, schema_gen, statistics_gen, tuner, Component};
pub use messages::{EvalArgs, Input, Output, Split, SplitConfig, TrainArgs};
pub use specs::{CsvExampleGenSpec, ExampleValidatorSpec, SchemaGenSpec, StatisticsGenSpec, TunerSpec};

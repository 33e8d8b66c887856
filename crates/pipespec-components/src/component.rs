//! `Component`: id + spec validado de un componente prebuilt.
//!
//! Los constructores crean un channel nuevo por cada output declarado, de
//! modo que el channel obtenido con `Component::output` puede pasarse como
//! input al siguiente componente.

use std::sync::Arc;

use log::debug;
use pipespec_core::{Artifact, Channel, ChannelError, ComponentSpec, SpecArgs, SpecError, SpecInstance, ValidationOptions};
use serde_json::{json, Value};

use crate::artifacts::{EXAMPLES, EXAMPLE_ANOMALIES, EXAMPLE_STATISTICS, EXTERNAL_PATH, MODEL, SCHEMA, TUNER_RESULTS};
use crate::messages::{EvalArgs, Input, Output, TrainArgs};
use crate::specs::{CsvExampleGenSpec, ExampleValidatorSpec, SchemaGenSpec, StatisticsGenSpec, TunerSpec};

#[derive(Debug, Clone)]
pub struct Component {
    id: String,
    spec: SpecInstance,
}

impl Component {
    /// Valida `args` contra el spec `S` y etiqueta la instancia con `id`.
    pub fn new<S: ComponentSpec>(id: impl Into<String>, args: SpecArgs) -> Result<Self, SpecError> {
        Self::with_options::<S>(id, args, &ValidationOptions::default())
    }

    pub fn with_options<S: ComponentSpec>(id: impl Into<String>,
                                          args: SpecArgs,
                                          options: &ValidationOptions)
                                          -> Result<Self, SpecError> {
        let id = id.into();
        let spec = S::with_options(args, options)?.into_instance();
        debug!("component:validated id={id} spec={} fingerprint={}", spec.spec_name(), spec.fingerprint());
        Ok(Self { id, spec })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn spec(&self) -> &SpecInstance {
        &self.spec
    }

    /// Channel de salida por nombre canónico o alias.
    pub fn output(&self, name: &str) -> Option<Arc<Channel>> {
        self.spec.outputs().get(name).cloned()
    }

    pub fn to_json(&self) -> Value {
        json!({ "id": self.id, "spec": self.spec.to_json() })
    }
}

/// Channel `ExternalPath` que apunta a un directorio de datos.
pub fn external_input(data_root: &str) -> Result<Arc<Channel>, ChannelError> {
    Channel::with_artifacts(EXTERNAL_PATH, vec![Artifact::new(EXTERNAL_PATH, data_root)]).map(Arc::new)
}

pub fn csv_example_gen(input: Arc<Channel>,
                       input_config: Option<Input>,
                       output_config: Option<Output>)
                       -> Result<Component, SpecError> {
    let mut args = SpecArgs::new().channel("input_base", input)
                                  .message("input_config", &input_config.unwrap_or_default())?
                                  .channel("examples", Channel::new(EXAMPLES));
    if let Some(output_config) = output_config {
        args = args.message("output_config", &output_config)?;
    }
    Component::new::<CsvExampleGenSpec>("CsvExampleGen", args)
}

pub fn statistics_gen(examples: Arc<Channel>) -> Result<Component, SpecError> {
    Component::new::<StatisticsGenSpec>("StatisticsGen",
                                        SpecArgs::new().channel("input_data", examples)
                                                       .channel("output", Channel::new(EXAMPLE_STATISTICS)))
}

pub fn schema_gen(statistics: Arc<Channel>, infer_feature_shape: bool) -> Result<Component, SpecError> {
    Component::new::<SchemaGenSpec>("SchemaGen",
                                    SpecArgs::new().param("infer_feature_shape", infer_feature_shape)
                                                   .channel("stats", statistics)
                                                   .channel("output", Channel::new(SCHEMA)))
}

pub fn example_validator(statistics: Arc<Channel>, schema: Arc<Channel>) -> Result<Component, SpecError> {
    Component::new::<ExampleValidatorSpec>("ExampleValidator",
                                           SpecArgs::new().channel("stats", statistics)
                                                          .channel("schema", schema)
                                                          .channel("output", Channel::new(EXAMPLE_ANOMALIES)))
}

pub fn tuner(examples: Arc<Channel>,
             schema: Arc<Channel>,
             module_file: &str,
             train_args: &TrainArgs,
             eval_args: &EvalArgs)
             -> Result<Component, SpecError> {
    let args = SpecArgs::new().param("module_file", module_file)
                              .message("train_args", train_args)?
                              .message("eval_args", eval_args)?
                              .channel("examples", examples)
                              .channel("schema", schema)
                              .channel("model_export_path", Channel::new(MODEL))
                              .channel("study_best_hparams_path", Channel::new(TUNER_RESULTS));
    Component::new::<TunerSpec>("Tuner", args)
}

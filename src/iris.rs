//! Pipeline iris con Tuner: ExampleGen → StatisticsGen → SchemaGen →
//! ExampleValidator → Tuner.
//!
//! Sólo arma y valida los componentes; no hay runner ni DAG.
use std::sync::Arc;

use indexmap::IndexMap;
use log::debug;
use pipespec_components::{csv_example_gen, example_validator, external_input, schema_gen, statistics_gen, tuner, Component,
                          EvalArgs, TrainArgs};
use pipespec_core::Channel;
use serde_json::{json, Map, Value};

use crate::config::PipelineConfig;
use crate::errors::AppError;

pub const TRAIN_STEPS: u32 = 100;
pub const EVAL_STEPS: u32 = 50;

/// Componentes del pipeline indexados por id, en orden de armado.
#[derive(Debug, Clone)]
pub struct IrisPipeline {
    pub config: PipelineConfig,
    pub components: IndexMap<String, Component>,
}

impl IrisPipeline {
    pub fn build(config: &PipelineConfig) -> Result<Self, AppError> {
        let example_gen = csv_example_gen(external_input(&config.data_root)?, None, None)?;
        let examples = output(&example_gen, "examples")?;

        let statistics_gen = statistics_gen(examples.clone())?;
        let statistics = output(&statistics_gen, "statistics")?;

        let infer_schema = schema_gen(statistics.clone(), true)?;
        let schema = output(&infer_schema, "schema")?;

        let validate_stats = example_validator(statistics, schema.clone())?;

        let tuner = tuner(examples,
                          schema,
                          &config.module_file,
                          &TrainArgs { num_steps: TRAIN_STEPS },
                          &EvalArgs { num_steps: EVAL_STEPS })?;

        let components: IndexMap<String, Component> = [example_gen, statistics_gen, infer_schema, validate_stats, tuner].into_iter()
                                                                                                                      .map(|c| (c.id().to_string(), c))
                                                                                                                      .collect();
        debug!("iris:built pipeline={} components={}", config.pipeline_name, components.len());
        Ok(Self { config: config.clone(),
                  components })
    }

    pub fn to_json(&self) -> Value {
        let components: Map<String, Value> = self.components.iter().map(|(id, c)| (id.clone(), c.to_json())).collect();
        json!({
            "pipeline": self.config,
            "components": components,
        })
    }
}

fn output(component: &Component, name: &str) -> Result<Arc<Channel>, AppError> {
    component.output(name)
             .ok_or_else(|| AppError::MissingOutput { component: component.id().to_string(),
                                                      name: name.to_string() })
}

//! Specs de los componentes prebuilt.
//!
//! Los aliases mantienen los nombres con los que los pipelines existentes
//! leen inputs/outputs (p.ej. `statistics` en lugar de `output`).

use pipespec_core::{component_spec, ChannelSpec, ParameterSpec};

use crate::artifacts::{EXAMPLES, EXAMPLE_ANOMALIES, EXAMPLE_STATISTICS, EXTERNAL_PATH, MODEL, SCHEMA, TUNER_RESULTS};
use crate::messages::{EvalArgs, Input, Output, TrainArgs};

component_spec! {
    /// Ingesta de CSVs desde un directorio externo.
    pub struct CsvExampleGenSpec {
        parameters: {
            "input_config" => ParameterSpec::structured::<Input>(),
            "output_config" => ParameterSpec::structured::<Output>().optional(),
        },
        inputs: { "input_base" => ChannelSpec::new(EXTERNAL_PATH) },
        outputs: { "examples" => ChannelSpec::new(EXAMPLES) },
        input_aliases: { "input" => "input_base" },
    }
}

component_spec! {
    /// Estadísticas sobre los ejemplos.
    pub struct StatisticsGenSpec {
        parameters: {},
        inputs: { "input_data" => ChannelSpec::new(EXAMPLES) },
        outputs: { "output" => ChannelSpec::new(EXAMPLE_STATISTICS) },
        input_aliases: { "examples" => "input_data" },
        output_aliases: { "statistics" => "output" },
    }
}

component_spec! {
    /// Inferencia de esquema a partir de estadísticas.
    pub struct SchemaGenSpec {
        parameters: { "infer_feature_shape" => ParameterSpec::bool().optional() },
        inputs: { "stats" => ChannelSpec::new(EXAMPLE_STATISTICS) },
        outputs: { "output" => ChannelSpec::new(SCHEMA) },
        input_aliases: { "statistics" => "stats" },
        output_aliases: { "schema" => "output" },
    }
}

component_spec! {
    /// Validación de estadísticas contra el esquema.
    pub struct ExampleValidatorSpec {
        parameters: {},
        inputs: {
            "stats" => ChannelSpec::new(EXAMPLE_STATISTICS),
            "schema" => ChannelSpec::new(SCHEMA),
        },
        outputs: { "output" => ChannelSpec::new(EXAMPLE_ANOMALIES) },
        input_aliases: { "statistics" => "stats" },
        output_aliases: { "anomalies" => "output" },
    }
}

component_spec! {
    /// Búsqueda de hiperparámetros.
    pub struct TunerSpec {
        parameters: {
            "module_file" => ParameterSpec::string(),
            "train_args" => ParameterSpec::structured::<TrainArgs>(),
            "eval_args" => ParameterSpec::structured::<EvalArgs>(),
        },
        inputs: {
            "examples" => ChannelSpec::new(EXAMPLES),
            "schema" => ChannelSpec::new(SCHEMA),
        },
        outputs: {
            "model_export_path" => ChannelSpec::new(MODEL),
            "study_best_hparams_path" => ChannelSpec::new(TUNER_RESULTS),
        },
    }
}

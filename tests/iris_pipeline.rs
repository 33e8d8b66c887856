use pipespec_rust::components::{EvalArgs, TrainArgs, TunerSpec};
use pipespec_rust::config::AppConfig;
use pipespec_rust::errors::AppError;
use pipespec_rust::instantiate;
use pipespec_rust::iris::{IrisPipeline, EVAL_STEPS, TRAIN_STEPS};
use pipespec_rust::spec::{Channel, SpecArgs, SpecError};

fn config(strict: &str) -> AppConfig {
    let strict = strict.to_string();
    AppConfig::from_vars(move |key| match key {
        "HOME" => Some("/home/test".to_string()),
        "PIPESPEC_STRICT_ARGUMENTS" => Some(strict.clone()),
        _ => None,
    }).expect("valid config")
}

fn tuner_args() -> SpecArgs {
    SpecArgs::new().param("module_file", "/home/test/iris/iris_utils.py")
                   .message("train_args", &TrainArgs { num_steps: 10 })
                   .unwrap()
                   .message("eval_args", &EvalArgs { num_steps: 5 })
                   .unwrap()
                   .channel("examples", Channel::new("Examples"))
                   .channel("schema", Channel::new("Schema"))
                   .channel("model_export_path", Channel::new("Model"))
                   .channel("study_best_hparams_path", Channel::new("TunerResults"))
}

#[test]
fn iris_pipeline_builds_every_component_in_order() {
    let cfg = config("true");
    let pipeline = IrisPipeline::build(&cfg.pipeline).expect("pipeline builds");
    let ids: Vec<&str> = pipeline.components.keys().map(String::as_str).collect();
    assert_eq!(ids, vec!["CsvExampleGen", "StatisticsGen", "SchemaGen", "ExampleValidator", "Tuner"]);

    let tuner = &pipeline.components["Tuner"];
    let train: TrainArgs = tuner.spec().exec_property_message("train_args").unwrap().unwrap();
    let eval: EvalArgs = tuner.spec().exec_property_message("eval_args").unwrap().unwrap();
    assert_eq!(train.num_steps, TRAIN_STEPS);
    assert_eq!(eval.num_steps, EVAL_STEPS);
    assert_eq!(tuner.spec().exec_properties()["module_file"].as_str(), Some("/home/test/iris/iris_utils.py"));
}

#[test]
fn iris_pipeline_json_mentions_paths_and_components() {
    let cfg = config("true");
    let json = IrisPipeline::build(&cfg.pipeline).unwrap().to_json();
    assert_eq!(json["pipeline"]["data_root"], "/home/test/iris/data");
    assert_eq!(json["components"]["SchemaGen"]["spec"]["exec_properties"]["infer_feature_shape"], true);
    assert_eq!(json["components"]["StatisticsGen"]["spec"]["outputs"]["output"]["type_name"], "ExampleStatistics");
}

#[test]
fn fingerprints_are_stable_between_builds() {
    let cfg = config("true");
    let a = IrisPipeline::build(&cfg.pipeline).unwrap();
    let b = IrisPipeline::build(&cfg.pipeline).unwrap();
    for (id, component) in &a.components {
        assert_eq!(component.spec().fingerprint(), b.components[id].spec().fingerprint(), "fingerprint of {id}");
    }
}

#[test]
fn strict_config_rejects_unknown_arguments() {
    let err = instantiate::<TunerSpec>(&config("true"), tuner_args().param("tune_args", 3)).unwrap_err();
    assert!(matches!(err, SpecError::UnexpectedArgument { ref name, .. } if name == "tune_args"));
}

#[test]
fn lenient_config_drops_unknown_arguments() {
    let spec = instantiate::<TunerSpec>(&config("false"), tuner_args().param("tune_args", 3)).expect("lenient mode");
    assert!(!spec.exec_properties().contains_key("tune_args"));
    assert_eq!(spec.exec_properties().len(), 3);
}

#[test]
fn spec_errors_convert_into_app_errors() {
    let err: AppError = instantiate::<TunerSpec>(&config("true"), SpecArgs::new()).unwrap_err().into();
    assert!(matches!(err, AppError::Spec(SpecError::MissingArgument { .. })));
}

//! Tests de integración de los componentes prebuilt (cadena
//! CsvExampleGen → StatisticsGen → SchemaGen → ExampleValidator → Tuner).

use std::sync::Arc;

use pipespec_components::artifacts::{EXAMPLES, EXAMPLE_STATISTICS, SCHEMA};
use pipespec_components::{csv_example_gen, example_validator, external_input, schema_gen, statistics_gen, tuner, EvalArgs,
                          Input, Output, StatisticsGenSpec, TrainArgs};
use pipespec_core::{Channel, ComponentSpec, PropertyValue, SpecArgs, SpecError};

#[test]
fn iris_chain_validates_and_wires_outputs() {
    let examples_in = external_input("/home/user/iris/data").expect("external path channel");
    let example_gen = csv_example_gen(examples_in.clone(), None, None).expect("example gen");
    assert!(Arc::ptr_eq(&example_gen.spec().inputs()["input"], &examples_in), "input alias resolves to input_base");

    let examples = example_gen.output("examples").expect("examples output");
    assert_eq!(examples.type_name(), EXAMPLES);

    let stats_gen = statistics_gen(examples.clone()).expect("statistics gen");
    let statistics = stats_gen.output("statistics").expect("statistics alias");
    assert!(Arc::ptr_eq(&statistics, &stats_gen.output("output").unwrap()));
    assert_eq!(statistics.type_name(), EXAMPLE_STATISTICS);

    let infer_schema = schema_gen(statistics.clone(), true).expect("schema gen");
    assert_eq!(infer_schema.spec().exec_properties()["infer_feature_shape"], PropertyValue::Bool(true));
    let schema = infer_schema.output("schema").expect("schema alias");
    assert_eq!(schema.type_name(), SCHEMA);

    let validate_stats = example_validator(statistics.clone(), schema.clone()).expect("example validator");
    assert!(validate_stats.output("anomalies").is_some());

    let tuner = tuner(examples,
                      schema,
                      "/home/user/iris/iris_utils.py",
                      &TrainArgs { num_steps: 100 },
                      &EvalArgs { num_steps: 50 }).expect("tuner");
    let train_args: TrainArgs = tuner.spec().exec_property_message("train_args").unwrap().unwrap();
    assert_eq!(train_args, TrainArgs { num_steps: 100 });
    assert_eq!(tuner.spec().exec_properties()["module_file"].as_str(), Some("/home/user/iris/iris_utils.py"));
    assert_eq!(tuner.id(), "Tuner");
}

#[test]
fn example_gen_defaults_to_single_split_input() {
    let gen = csv_example_gen(external_input("/data").unwrap(), None, Some(Output::default())).unwrap();
    let input: Input = gen.spec().exec_property_message("input_config").unwrap().unwrap();
    assert_eq!(input, Input::single_split("*"));
    let output: Output = gen.spec().exec_property_message("output_config").unwrap().unwrap();
    assert_eq!(output.splits.iter().map(|s| s.hash_buckets).sum::<u32>(), 3);
}

#[test]
fn example_gen_stores_custom_splits() {
    let input = Input::from_splits([("train", "train/*"), ("eval", "eval/*")]);
    let gen = csv_example_gen(external_input("/data").unwrap(), Some(input.clone()), None).unwrap();
    let stored: Input = gen.spec().exec_property_message("input_config").unwrap().unwrap();
    assert_eq!(stored, input);
    assert!(!gen.spec().exec_properties().contains_key("output_config"));
}

#[test]
fn mismatched_channels_are_rejected() {
    // estadísticas donde se esperan ejemplos
    let err = statistics_gen(Arc::new(Channel::new(EXAMPLE_STATISTICS))).unwrap_err();
    assert!(matches!(err, SpecError::ChannelType { ref name, ref expected, .. } if name == "input_data" && expected == EXAMPLES));

    // schema y estadísticas intercambiados
    let stats = Arc::new(Channel::new(EXAMPLE_STATISTICS));
    let schema = Arc::new(Channel::new(SCHEMA));
    assert!(example_validator(schema, stats).is_err());
}

#[test]
fn aliases_are_not_accepted_as_argument_names() {
    let err = StatisticsGenSpec::new(SpecArgs::new().channel("examples", Channel::new(EXAMPLES))
                                                    .channel("output", Channel::new(EXAMPLE_STATISTICS)))
              .unwrap_err();
    assert!(matches!(err, SpecError::MissingArgument { ref name, .. } if name == "input_data"));
}

//! Declaración de descriptores desde JSON.

use pipespec_core::{ChannelSpec, DefinitionError, Descriptor, ParamType, ParameterSpec, Section, SpecArgs, SpecError};
use serde_json::json;

fn basic_declaration() -> serde_json::Value {
    json!({
        "parameters": {
            "folds": { "kind": "parameter", "type": "int" },
            "proto": { "kind": "parameter", "type": "Input", "optional": true }
        },
        "inputs": { "input": { "kind": "channel", "type_name": "InputType" } },
        "outputs": { "output": { "kind": "channel", "type_name": "OutputType" } },
        "input_aliases": { "future_input_name": "input" },
        "output_aliases": { "future_output_name": "output" }
    })
}

#[test]
fn json_declaration_matches_builder() {
    let from_json = Descriptor::from_json("Basic", &basic_declaration()).expect("valid declaration");
    let built = Descriptor::builder("Basic").parameter("folds", ParameterSpec::int())
                                            .parameter("proto", ParameterSpec::new(ParamType::Structured("Input".into())).optional())
                                            .input("input", ChannelSpec::new("InputType"))
                                            .output("output", ChannelSpec::new("OutputType"))
                                            .input_alias("future_input_name", "input")
                                            .output_alias("future_output_name", "output")
                                            .build()
                                            .expect("valid builder");
    assert_eq!(from_json, built);

    // to_json es la inversa de from_json
    let again = Descriptor::from_json("Basic", &built.to_json()).expect("round trip");
    assert_eq!(again, built);
}

#[test]
fn missing_section_is_abstract() {
    for section in Section::ALL {
        let mut doc = basic_declaration();
        doc.as_object_mut().unwrap().remove(section.json_key());
        let err = Descriptor::from_json("Abstract", &doc).unwrap_err();
        assert_eq!(err,
                   DefinitionError::MissingSection { spec: "Abstract".into(),
                                                     section });
    }
}

#[test]
fn section_that_is_not_a_map_is_rejected() {
    for (key, label) in [("parameters", "PARAMETERS"), ("inputs", "INPUTS"), ("outputs", "OUTPUTS")] {
        let mut doc = basic_declaration();
        doc[key] = json!(["not", "a", "map"]);
        let err = Descriptor::from_json("WrongKind", &doc).unwrap_err();
        assert!(err.to_string().contains(&format!("must override {label} with a map")), "{err}");
    }
}

#[test]
fn entry_that_is_not_a_component_parameter_is_rejected() {
    let mut doc = basic_declaration();
    doc["parameters"]["x"] = json!({});
    let err = Descriptor::from_json("WrongValue", &doc).unwrap_err();
    assert!(matches!(err, DefinitionError::NotAComponentParameter { ref name, section: Section::Parameters, .. } if name == "x"));
    assert!(err.to_string().contains("expects PARAMETERS entries to be component parameters"), "{err}");
}

#[test]
fn channel_entry_in_parameters_is_rejected() {
    let mut doc = basic_declaration();
    doc["parameters"]["x"] = json!({ "kind": "channel", "type_name": "X" });
    let err = Descriptor::from_json("WrongValue", &doc).unwrap_err();
    assert_eq!(err,
               DefinitionError::ExpectedParameterSpec { spec: "WrongValue".into(),
                                                        name: "x".into() });
}

#[test]
fn duplicate_across_sections_is_rejected() {
    let mut doc = basic_declaration();
    doc["outputs"]["folds"] = json!({ "kind": "channel", "type_name": "X" });
    let err = Descriptor::from_json("Dup", &doc).unwrap_err();
    assert!(err.to_string().contains("has a duplicate argument 'folds'"), "{err}");
}

#[test]
fn alias_targets_must_be_strings() {
    let mut doc = basic_declaration();
    doc["input_aliases"]["bad"] = json!(3);
    let err = Descriptor::from_json("Alias", &doc).unwrap_err();
    assert!(matches!(err, DefinitionError::InvalidAlias { ref alias, .. } if alias == "bad"));
}

fn unordered_declaration() -> serde_json::Value {
    json!({
        "parameters": {
            "zeta": { "kind": "parameter", "type": "int" },
            "alpha": { "kind": "parameter", "type": "string" }
        },
        "inputs": {
            "statistics": { "kind": "channel", "type_name": "ExampleStatistics" },
            "examples": { "kind": "channel", "type_name": "Examples" }
        },
        "outputs": {}
    })
}

#[test]
fn json_declaration_keeps_document_order() {
    let from_json = Descriptor::from_json("Ordered", &unordered_declaration()).expect("valid declaration");
    assert_eq!(from_json.parameters().keys().collect::<Vec<_>>(), vec!["zeta", "alpha"]);
    assert_eq!(from_json.inputs().keys().collect::<Vec<_>>(), vec!["statistics", "examples"]);

    let again = Descriptor::from_json("Ordered", &from_json.to_json()).expect("round trip");
    assert_eq!(again.parameters().keys().collect::<Vec<_>>(), vec!["zeta", "alpha"]);
    assert_eq!(again.inputs().keys().collect::<Vec<_>>(), vec!["statistics", "examples"]);
}

#[test]
fn json_and_builder_report_the_same_first_violation() {
    let from_json = Descriptor::from_json("Ordered", &unordered_declaration()).unwrap();
    let built = Descriptor::builder("Ordered").parameter("zeta", ParameterSpec::int())
                                              .parameter("alpha", ParameterSpec::string())
                                              .input("statistics", ChannelSpec::new("ExampleStatistics"))
                                              .input("examples", ChannelSpec::new("Examples"))
                                              .declare(Section::Outputs)
                                              .build()
                                              .unwrap();

    let json_err = from_json.instantiate(SpecArgs::new()).unwrap_err();
    let built_err = built.instantiate(SpecArgs::new()).unwrap_err();
    assert_eq!(json_err,
               SpecError::MissingArgument { spec: "Ordered".into(),
                                            name: "zeta".into() });
    assert_eq!(json_err, built_err);

    let args = || SpecArgs::new().param("zeta", 1).param("alpha", "a");
    assert_eq!(from_json.instantiate(args()).unwrap_err(), built.instantiate(args()).unwrap_err());
}

#[test]
fn alias_section_that_is_not_a_map_is_rejected() {
    let mut doc = basic_declaration();
    doc["input_aliases"] = json!("input");
    let err = Descriptor::from_json("Alias", &doc).unwrap_err();
    assert_eq!(err,
               DefinitionError::NotAMap { spec: "Alias".into(),
                                          section: "input_aliases".into(),
                                          found: "string".into() });
}

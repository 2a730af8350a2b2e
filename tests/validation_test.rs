use anyhow::Result;
use scriptrun::script::ScriptDefinition;

fn complete_definition() -> ScriptDefinition {
    ScriptDefinition {
        name: "demo".into(),
        script: "age + 1".into(),
        input_types: vec!["i64".into()],
        return_type: "i64".into(),
    }
}

#[test]
fn complete_definition_passes() -> Result<()> {
    complete_definition().validate()
}

#[test]
fn missing_script_names_the_field() {
    let mut definition = complete_definition();
    definition.script = String::new();
    let err = definition.validate().unwrap_err().to_string();
    assert!(err.contains("required field: script"), "unexpected error: {}", err);
    assert!(err.contains("demo"), "unexpected error: {}", err);
}

#[test]
fn blank_script_is_rejected() {
    let mut definition = complete_definition();
    definition.script = "   ".into();
    assert!(definition.validate().is_err());
}

#[test]
fn missing_input_types_names_the_field() {
    let mut definition = complete_definition();
    definition.input_types.clear();
    let err = definition.validate().unwrap_err().to_string();
    assert!(
        err.contains("required field: input_types"),
        "unexpected error: {}",
        err
    );
}

#[test]
fn blank_input_type_entry_is_rejected() {
    let mut definition = complete_definition();
    definition.input_types.push("  ".into());
    let err = definition.validate().unwrap_err().to_string();
    assert!(
        err.contains("required field: input_types"),
        "unexpected error: {}",
        err
    );
}

#[test]
fn missing_return_type_names_the_field() {
    let mut definition = complete_definition();
    definition.return_type = String::new();
    let err = definition.validate().unwrap_err().to_string();
    assert!(
        err.contains("required field: return_type"),
        "unexpected error: {}",
        err
    );
}

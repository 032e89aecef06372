#![allow(non_snake_case)]

use super::*;
use test_case::test_case;

#[test]
fn GeneratorConfig___from_empty_toml___uses_defaults() {
    let config = GeneratorConfig::from_toml_str("").unwrap();

    assert_eq!(config, GeneratorConfig::default());
    assert_eq!(config.binding_namespace, "cyan::generated");
    assert_eq!(config.manifest_variable, "CYAN_GENERATED_SRC");
}

#[test]
fn GeneratorConfig___from_toml___overrides_selected_keys() {
    let toml = r#"
binding_namespace = "game::bindings"
manifest_variable = "GAME_GENERATED_SRC"
"#;

    let config = GeneratorConfig::from_toml_str(toml).unwrap();

    assert_eq!(config.binding_namespace, "game::bindings");
    assert_eq!(config.manifest_variable, "GAME_GENERATED_SRC");
    assert_eq!(config.output_extension, "hpp");
}

#[test]
fn GeneratorConfig___unknown_key___is_rejected() {
    let result = GeneratorConfig::from_toml_str("binding_namspace = \"x\"");

    assert!(matches!(result, Err(CodegenError::Config(_))));
}

#[test_case("marker = \"\"" ; "empty marker")]
#[test_case("schema_extension = \"\"" ; "empty schema extension")]
#[test_case("manifest_variable = \"  \"" ; "blank manifest variable")]
#[test_case("output_extension = \"json\"" ; "extensions collide")]
#[test_case("schema_extension = \".hpp\"" ; "extensions collide with dot")]
fn GeneratorConfig___invalid_values___fail_validation(toml: &str) {
    let result = GeneratorConfig::from_toml_str(toml);

    assert!(matches!(result, Err(CodegenError::Config(_))));
}

#[test_case("json", "json")]
#[test_case(".json", "json")]
fn GeneratorConfig___schema_ext___strips_leading_dot(value: &str, expected: &str) {
    let config = GeneratorConfig {
        schema_extension: value.to_string(),
        ..GeneratorConfig::default()
    };

    assert_eq!(config.schema_ext(), expected);
}

#[test]
fn GeneratorConfig___manifest_marker___rewrites_as_hash_comment() {
    let config = GeneratorConfig::default();

    assert_eq!(
        config.manifest_marker(),
        "# Auto-generated by cyan-codegen. DO NOT EDIT."
    );
}

#[test]
fn GeneratorConfig___discover_without_file___returns_defaults() {
    let dir = tempfile::tempdir().unwrap();

    let config = GeneratorConfig::discover(dir.path()).unwrap();

    assert_eq!(config, GeneratorConfig::default());
}

#[test]
fn GeneratorConfig___discover_with_file___loads_it() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join(CONFIG_FILE_NAME),
        "binding_class_suffix = \"Script\"\n",
    )
    .unwrap();

    let config = GeneratorConfig::discover(dir.path()).unwrap();

    assert_eq!(config.binding_class_suffix, "Script");
}

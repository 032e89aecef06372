#![allow(non_snake_case)]

use super::*;

fn schema(name: &str) -> SchemaModel {
    SchemaModel::parse_str(&format!(
        r#"{{"name": "{name}", "data": [{{"name": "value", "type": "int"}}], "generate": ["chai_bindings"]}}"#
    ))
    .unwrap()
}

fn registry() -> BindingRegistry {
    BindingRegistry::new("cyan::generated", "Component")
}

#[test]
fn BindingRegistry___new___is_empty() {
    let registry = registry();

    assert!(registry.is_empty());
    assert_eq!(registry.len(), 0);
}

#[test]
fn BindingRegistry___register___records_entry_with_include_path() {
    let mut registry = registry();

    registry
        .register(&schema("Health"), Path::new("out/components/Health.hpp"))
        .unwrap();

    let entry = &registry.entries()[0];
    assert_eq!(entry.include_path, "out/components/Health.hpp");
    assert_eq!(
        entry.declaration,
        "void make_Health_chai_bindings(chaiscript::ModulePtr m);"
    );
    assert!(
        entry
            .body
            .starts_with("void cyan::generated::make_Health_chai_bindings(")
    );
}

#[test]
fn BindingRegistry___combined_function___follows_registration_order() {
    let mut registry = registry();
    for name in ["Zeta", "Alpha", "Mid"] {
        registry
            .register(&schema(name), Path::new(&format!("out/{name}.hpp")))
            .unwrap();
    }

    let (_, body) = registry.combined_function();

    let zeta = body.find("make_Zeta_chai_bindings(m)").unwrap();
    let alpha = body.find("make_Alpha_chai_bindings(m)").unwrap();
    let mid = body.find("make_Mid_chai_bindings(m)").unwrap();
    assert!(zeta < alpha && alpha < mid);
}

#[test]
fn BindingRegistry___duplicate_qualified_name___rejected_first_kept() {
    let mut registry = registry();
    registry
        .register(&schema("Health"), Path::new("out/a/Health.hpp"))
        .unwrap();

    let result = registry.register(&schema("Health"), Path::new("out/b/Health.hpp"));

    assert!(matches!(
        result,
        Err(CodegenError::DuplicateBinding { ref qualified_name, .. }) if qualified_name == "Health"
    ));
    assert_eq!(registry.len(), 1);
    assert_eq!(registry.entries()[0].include_path, "out/a/Health.hpp");
}

#[test]
fn BindingRegistry___same_name_other_namespace___both_registered() {
    let mut registry = registry();
    let mut namespaced = schema("Health");
    namespaced.namespace = Some("game".to_string());

    registry
        .register(&schema("Health"), Path::new("out/Health.hpp"))
        .unwrap();
    registry
        .register(&namespaced, Path::new("out/game/Health.hpp"))
        .unwrap();

    assert_eq!(registry.len(), 2);
}

#[test]
fn BindingRegistry___mangled_names_clash___second_rejected() {
    let mut registry = registry();
    let mut namespaced = schema("Health");
    namespaced.namespace = Some("game".to_string());

    registry
        .register(&schema("game_Health"), Path::new("out/game_Health.hpp"))
        .unwrap();
    let result = registry.register(&namespaced, Path::new("out/game/Health.hpp"));

    match result {
        Err(CodegenError::BindingNameClash {
            function_name,
            qualified_name,
            existing,
            ..
        }) => {
            assert_eq!(function_name, "make_game_Health_chai_bindings");
            assert_eq!(qualified_name, "game::Health");
            assert_eq!(existing, "game_Health");
        }
        other => panic!("expected BindingNameClash, got {other:?}"),
    }
    assert_eq!(registry.len(), 1);

    let (_, body) = registry.combined_function();
    assert_eq!(body.matches("make_game_Health_chai_bindings(m);").count(), 1);
}

#[test]
fn BindingRegistry___render_files___header_declares_and_source_defines() {
    let mut registry = registry();
    registry
        .register(&schema("Health"), Path::new("out/Health.hpp"))
        .unwrap();

    let [(header_path, header), (source_path, source)] = registry.render_files(
        "// generated",
        PathBuf::from("out/chai_bindings.hpp"),
        PathBuf::from("out/chai_bindings.cpp"),
    );

    assert_eq!(header_path, PathBuf::from("out/chai_bindings.hpp"));
    assert_eq!(source_path, PathBuf::from("out/chai_bindings.cpp"));
    assert!(header.starts_with("// generated\n#pragma once\n"));
    assert!(header.contains("#include \"out/Health.hpp\"\n"));
    assert!(header.contains("void make_all_codegen_chai_bindings(chaiscript::ModulePtr m);"));
    assert!(source.starts_with("// generated\n#include \"chai_bindings.hpp\"\n"));
    assert!(source.contains(
        "void cyan::generated::make_all_codegen_chai_bindings(chaiscript::ModulePtr m) {\n    make_Health_chai_bindings(m);\n}\n"
    ));
}

#[test]
fn BindingRegistry___empty___still_renders_entry_point() {
    let registry = registry();

    let source = registry.render_source("// generated", Path::new("out/chai_bindings.hpp"));

    assert!(source.ends_with(
        "void cyan::generated::make_all_codegen_chai_bindings(chaiscript::ModulePtr m) {\n}\n"
    ));
}

#![allow(non_snake_case)]

use super::*;
use test_case::test_case;

fn schema_with(fields: &[(&str, &str)]) -> SchemaModel {
    let mut schema = SchemaModel::new("Entity");
    schema.fields = fields
        .iter()
        .map(|(name, ty)| FieldSpec::new(*name, *ty))
        .collect();
    schema
}

#[test]
fn EntityDef___three_fields___keeps_order_everywhere() {
    let schema = schema_with(&[("f1", "int"), ("f2", "std::string"), ("f3", "float")]);

    let def = EntityDef::from_schema(&schema);

    let decls: Vec<_> = def.fields.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(decls, vec!["f1", "f2", "f3"]);

    let default_inits: Vec<_> = def
        .default_constructor()
        .unwrap()
        .initializers
        .iter()
        .map(|i| i.member.as_str())
        .collect();
    assert_eq!(default_inits, vec!["f1", "f2", "f3"]);

    let ctor = def.field_list_constructor().unwrap();
    let params: Vec<_> = ctor.params.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(params, vec!["f1_", "f2_", "f3_"]);
    let inits: Vec<_> = ctor
        .initializers
        .iter()
        .map(|i| (i.member.as_str(), i.value.as_str()))
        .collect();
    assert_eq!(inits, vec![("f1", "f1_"), ("f2", "f2_"), ("f3", "f3_")]);
}

#[test_case(1, true ; "one field is explicit")]
#[test_case(2, false ; "two fields are implicit")]
#[test_case(5, false ; "five fields are implicit")]
fn EntityDef___field_list_constructor___explicit_only_for_single_param(
    count: usize,
    explicit: bool,
) {
    let names: Vec<String> = (0..count).map(|i| format!("f{i}")).collect();
    let fields: Vec<(&str, &str)> = names.iter().map(|n| (n.as_str(), "int")).collect();

    let def = EntityDef::from_schema(&schema_with(&fields));

    assert_eq!(def.field_list_constructor().unwrap().explicit, explicit);
}

#[test]
fn EntityDef___zero_fields___only_default_constructor() {
    let def = EntityDef::from_schema(&schema_with(&[]));

    assert_eq!(def.constructors.len(), 1);
    assert!(def.field_list_constructor().is_none());
    let default = def.default_constructor().unwrap();
    assert!(default.initializers.is_empty());
    assert!(!default.explicit);
}

#[test_case("float", ParamPassing::ByValue)]
#[test_case("bool", ParamPassing::ByValue)]
#[test_case("std::string", ParamPassing::ByConstRef)]
#[test_case("std::vector<int>", ParamPassing::ByConstRef)]
fn EntityDef___param_passing___follows_copyable_list(ty: &str, expected: ParamPassing) {
    let def = EntityDef::from_schema(&schema_with(&[("value", ty)]));

    assert_eq!(def.field_list_constructor().unwrap().params[0].passing, expected);
}

#[test]
fn EntityDef___default_constructor___uses_declared_defaults() {
    let mut schema = SchemaModel::new("Health");
    schema.fields = vec![
        FieldSpec::new("current", "int").with_default("100"),
        FieldSpec::new("label", "std::string"),
    ];

    let def = EntityDef::from_schema(&schema);

    let values: Vec<_> = def
        .default_constructor()
        .unwrap()
        .initializers
        .iter()
        .map(|i| i.value.as_str())
        .collect();
    assert_eq!(values, vec!["100", ""]);
}

#[test]
fn EntityDef___position___matches_reference_shape() {
    let schema =
        SchemaModel::parse_str(r#"{"name": "Position", "data": [{"name":"x", "type":"float"}, {"name":"y", "type":"float"}]}"#)
            .unwrap();

    let def = EntityDef::from_schema(&schema);

    assert_eq!(def.fields.len(), 2);
    assert!(def.fields.iter().all(|f| f.ty == "float"));
    assert!(
        def.default_constructor()
            .unwrap()
            .initializers
            .iter()
            .all(|i| i.value.is_empty())
    );
    let ctor = def.field_list_constructor().unwrap();
    assert!(!ctor.explicit);
    assert!(ctor.params.iter().all(|p| p.passing == ParamPassing::ByValue));
}

#[test]
fn ClassBinding___namespaced_entity___qualifies_type_and_names_function() {
    let mut schema = schema_with(&[("name", "std::string"), ("id", "uint32_t")]);
    schema.name = "DebugName".to_string();
    schema.namespace = Some("cyan".to_string());

    let binding = ClassBinding::from_schema(&schema, "Component");

    assert_eq!(binding.qualified_name, "cyan::DebugName");
    assert_eq!(binding.script_name, "DebugNameComponent");
    assert_eq!(binding.function_name, "make_cyan_DebugName_chai_bindings");
    assert_eq!(
        binding.field_ctor_args,
        Some(vec!["const std::string&".to_string(), "uint32_t".to_string()])
    );
    assert_eq!(binding.members, vec!["name", "id"]);
}

#[test]
fn ClassBinding___zero_fields___has_no_field_constructor() {
    let binding = ClassBinding::from_schema(&schema_with(&[]), "Component");

    assert_eq!(binding.field_ctor_args, None);
    assert!(binding.members.is_empty());
}

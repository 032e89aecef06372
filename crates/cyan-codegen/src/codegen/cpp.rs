//! C++ text rendering of the IR and of the aggregate files.

use super::ir::{Constructor, EntityDef, ParamPassing};

/// Leading lines of every generated header
pub fn preamble(marker: &str) -> String {
    format!("{marker}\n#pragma once\n\n")
}

/// Wrap `body` in `namespace ns { ... }` unless `namespace` is global
pub fn namespaced(body: &str, namespace: Option<&str>) -> String {
    match namespace {
        Some(ns) => format!("namespace {ns} {{\n\n{body}\n}}  // namespace {ns}\n"),
        None => body.to_string(),
    }
}

/// Render a complete entity header
pub fn render_entity(def: &EntityDef, marker: &str) -> String {
    let mut output = preamble(marker);

    if !def.includes.is_empty() {
        for include in &def.includes {
            output.push_str(&format!("#include <{include}>\n"));
        }
        output.push('\n');
    }

    output.push_str(&namespaced(&render_struct(def), def.namespace.as_deref()));
    output
}

/// Render the `struct Name { ... };` block
pub fn render_struct(def: &EntityDef) -> String {
    let mut body = format!("struct {} {{\n", def.name);

    for ctor in &def.constructors {
        body.push_str(&format!("    {}\n", render_constructor(&def.name, ctor)));
    }

    if !def.fields.is_empty() {
        body.push('\n');
        for field in &def.fields {
            body.push_str(&format!("    {} {};\n", field.ty, field.name));
        }
    }

    body.push_str("};\n");
    body
}

/// Render one constructor on a single line
pub fn render_constructor(struct_name: &str, ctor: &Constructor) -> String {
    let params = ctor
        .params
        .iter()
        .map(|p| format!("{} {}", param_type(&p.ty, p.passing), p.name))
        .collect::<Vec<_>>()
        .join(", ");

    let initializers = ctor
        .initializers
        .iter()
        .map(|i| format!("{}({})", i.member, i.value))
        .collect::<Vec<_>>()
        .join(", ");

    let mut code = String::new();
    if ctor.explicit {
        code.push_str("explicit ");
    }
    code.push_str(&format!("{struct_name}({params})"));
    if !initializers.is_empty() {
        code.push_str(&format!(" : {initializers}"));
    }
    code.push_str(" {}");
    code
}

/// Spell a parameter type according to how it is passed
pub fn param_type(ty: &str, passing: ParamPassing) -> String {
    match passing {
        ParamPassing::ByValue => ty.to_string(),
        ParamPassing::ByConstRef => format!("const {ty}&"),
    }
}

/// Render one x-macro list definition.
///
/// ```text
/// #define CYAN_COMPONENT_LIST \
///     X(Transform) \
///     X(Render)
/// ```
pub fn render_xlist_macro(list_name: &str, entries: &[String]) -> String {
    let mut lines = vec![format!("#define {list_name}")];
    lines.extend(entries.iter().map(|e| format!("    X({e})")));
    let mut output = lines.join(" \\\n");
    output.push('\n');
    output
}

/// Render an aggregate file: include lines first, then x-list macros
pub fn render_aggregate_file<'a>(
    includes: &[String],
    lists: impl IntoIterator<Item = (&'a str, &'a [String])>,
    marker: &str,
) -> String {
    let macros = lists
        .into_iter()
        .map(|(name, entries)| render_xlist_macro(name, entries))
        .collect::<Vec<_>>()
        .join("\n");

    let mut output = preamble(marker);
    for path in includes {
        output.push_str(&format!("#include \"{path}\"\n"));
    }
    if !includes.is_empty() && !macros.is_empty() {
        output.push('\n');
    }
    output.push_str(&macros);
    output
}

/// Render an x-list file holding one or more macro definitions
pub fn render_xlist_file<'a>(
    lists: impl IntoIterator<Item = (&'a str, &'a [String])>,
    marker: &str,
) -> String {
    render_aggregate_file(&[], lists, marker)
}

/// Render an include-list file
pub fn render_include_list(paths: &[String], marker: &str) -> String {
    render_aggregate_file(paths, std::iter::empty(), marker)
}

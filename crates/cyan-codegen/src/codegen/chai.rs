//! ChaiScript binding text.
//!
//! Every registered entity gets one function of the form
//!
//! ```text
//! void make_Position_chai_bindings(chaiscript::ModulePtr m);
//! ```
//!
//! which registers the default constructor, the field-list constructor and
//! one accessor per field with `chaiscript::utility::add_class`. A combined
//! function ([`COMBINED_BINDING_FUNCTION`]) calls all of them.

use super::cpp::preamble;
use super::ir::ClassBinding;
use super::naming::COMBINED_BINDING_FUNCTION;

const CHAISCRIPT_INCLUDE: &str = "chaiscript/chaiscript.hpp";

/// Declaration of a registration function taking the module pointer
pub fn function_declaration(function_name: &str) -> String {
    format!("void {function_name}(chaiscript::ModulePtr m);")
}

/// Definition of one entity's registration function.
///
/// `namespace_prefix` qualifies the function name, e.g. `cyan::generated::`.
pub fn function_body(binding: &ClassBinding, namespace_prefix: &str) -> String {
    let ty = &binding.qualified_name;

    let mut constructors = vec![format!("chaiscript::constructor<{ty}()>()")];
    if let Some(args) = &binding.field_ctor_args {
        constructors.push(format!(
            "chaiscript::constructor<{ty}({})>()",
            args.join(", ")
        ));
    }

    let members = binding
        .members
        .iter()
        .map(|m| format!("            {{ chaiscript::fun(&{ty}::{m}), \"{m}\" }}"))
        .collect::<Vec<_>>()
        .join(",\n");

    let mut code = format!(
        "void {namespace_prefix}{}(chaiscript::ModulePtr m) {{\n",
        binding.function_name
    );
    code.push_str(&format!("    chaiscript::utility::add_class<{ty}>(\n"));
    code.push_str("        *m,\n");
    code.push_str(&format!("        \"{}\",\n", binding.script_name));
    code.push_str(&format!(
        "        {{ {} }},\n",
        constructors.join(",\n          ")
    ));
    if members.is_empty() {
        code.push_str("        {}\n");
    } else {
        code.push_str(&format!("        {{\n{members}\n        }}\n"));
    }
    code.push_str("    );\n");
    code.push_str("}\n");
    code
}

/// Declaration of the combined registration function
pub fn combined_declaration() -> String {
    function_declaration(COMBINED_BINDING_FUNCTION)
}

/// Definition of the combined function; calls `function_names` in order
pub fn combined_body<'a>(
    function_names: impl IntoIterator<Item = &'a str>,
    namespace_prefix: &str,
) -> String {
    let mut code = format!(
        "void {namespace_prefix}{COMBINED_BINDING_FUNCTION}(chaiscript::ModulePtr m) {{\n"
    );
    for name in function_names {
        code.push_str(&format!("    {name}(m);\n"));
    }
    code.push_str("}\n");
    code
}

/// Combined binding header: declarations inside the binding namespace
pub fn render_header(
    marker: &str,
    entity_includes: &[String],
    namespace: &str,
    declarations: &[String],
) -> String {
    let mut output = preamble(marker);
    output.push_str(&format!("#include \"{CHAISCRIPT_INCLUDE}\"\n"));
    for include in entity_includes {
        output.push_str(&format!("#include \"{include}\"\n"));
    }
    output.push('\n');

    let body = declarations.join("\n") + "\n";
    if namespace.is_empty() {
        output.push_str(&body);
    } else {
        output.push_str(&format!(
            "namespace {namespace} {{\n\n{body}\n}}  // namespace {namespace}\n"
        ));
    }
    output
}

/// Combined binding source: function bodies qualified with the namespace
pub fn render_source(
    marker: &str,
    header_file_name: &str,
    entity_includes: &[String],
    bodies: &[String],
) -> String {
    let mut output = format!("{marker}\n");
    output.push_str(&format!("#include \"{header_file_name}\"\n\n"));
    for include in entity_includes {
        output.push_str(&format!("#include \"{include}\"\n"));
    }
    if !entity_includes.is_empty() {
        output.push('\n');
    }
    output.push_str(&bodies.join("\n"));
    output
}

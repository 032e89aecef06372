//! Naming and path conventions shared by the generators.
//!
//! | Input | Function | Output |
//! |-------|----------|--------|
//! | `cyan::ecs` | [`mangle_namespace`] | `cyan_ecs` |
//! | `cyan::ecs` | [`namespace_prefix`] | `cyan::ecs::` |
//! | entity `cyan::Transform` | [`binding_function_name`] | `make_cyan_Transform_chai_bindings` |
//! | `out\components\A.hpp` | [`to_include_path`] | `out/components/A.hpp` |

use crate::schema::SchemaModel;
use std::path::Path;

/// Name of the function that calls every per-entity registration function
pub const COMBINED_BINDING_FUNCTION: &str = "make_all_codegen_chai_bindings";

/// Turn a C++ namespace path into an identifier fragment.
///
/// # Examples
///
/// ```
/// use cyan_codegen::codegen::naming::mangle_namespace;
///
/// assert_eq!(mangle_namespace("cyan::ecs"), "cyan_ecs");
/// assert_eq!(mangle_namespace("cyan"), "cyan");
/// ```
pub fn mangle_namespace(namespace: &str) -> String {
    namespace
        .split("::")
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join("_")
}

/// `ns::` for a namespace, or nothing for the global namespace.
///
/// # Examples
///
/// ```
/// use cyan_codegen::codegen::naming::namespace_prefix;
///
/// assert_eq!(namespace_prefix("cyan::generated"), "cyan::generated::");
/// assert_eq!(namespace_prefix(""), "");
/// ```
pub fn namespace_prefix(namespace: &str) -> String {
    if namespace.is_empty() {
        String::new()
    } else {
        format!("{namespace}::")
    }
}

/// Registration function name for an entity.
///
/// Namespaced entities carry their namespace in the name so that two
/// entities called `Transform` in different namespaces do not collide.
pub fn binding_function_name(schema: &SchemaModel) -> String {
    match &schema.namespace {
        Some(ns) => format!(
            "make_{}_{}_chai_bindings",
            mangle_namespace(ns),
            schema.name
        ),
        None => format!("make_{}_chai_bindings", schema.name),
    }
}

/// Render a path the way it appears in `#include` lines and the manifest
pub fn to_include_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

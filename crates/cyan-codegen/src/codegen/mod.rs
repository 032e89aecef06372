//! Code synthesis for schema entities.
//!
//! Generation is a two-stage pipeline:
//!
//! ```text
//! SchemaModel
//!     ↓
//!  [ir]  decide fields, constructors, parameter passing, bindings
//!     ↓
//!  ├─→ [cpp]  → entity headers, x-list files, include-list files
//!  └─→ [chai] → combined binding header + source
//! ```
//!
//! All decisions live in [`ir`]; [`cpp`] and [`chai`] only spell them out.
//!
//! # Example
//!
//! ```rust
//! use cyan_codegen::SchemaModel;
//! use cyan_codegen::codegen::{EntityDef, render_entity};
//!
//! let schema = SchemaModel::parse_str(
//!     r#"{"name": "Position", "data": [{"name": "x", "type": "float"}, {"name": "y", "type": "float"}]}"#,
//! )?;
//! let code = render_entity(&EntityDef::from_schema(&schema), "// generated");
//!
//! assert!(code.contains("Position(float x_, float y_) : x(x_), y(y_) {}"));
//! # Ok::<(), cyan_codegen::SchemaError>(())
//! ```

pub mod chai;
pub mod cpp;
pub mod ir;
pub mod naming;

pub use cpp::render_entity;
pub use ir::{ClassBinding, Constructor, ConstructorKind, EntityDef, ParamPassing};

//! texgen — template-driven source generator for OpenGL texture object
//! classes and std140 layout test fixtures.
//!
//! 两条流水线共用同一套架构：
//!
//! ```text
//! 规格表 → 上下文推导 → 模板渲染 → 幂等写入
//! ```
//!
//! [`spec::SPEC_TABLE`] holds one sparse record per GL texture target;
//! [`context::derive_context`] expands a record into the complete naming and
//! parameter context every template consumes; [`templates`] renders; and
//! [`writer::write_if_changed`] only touches the filesystem when output
//! actually changed, so repeated runs cause zero rebuild churn.

pub mod context;
pub mod errors;
pub mod fixtures;
pub mod generator;
pub mod naming;
pub mod spec;
pub mod templates;
pub mod writer;

pub use context::{DerivedContext, derive_context};
pub use errors::{Result, TexGenError};
pub use generator::{
    GeneratorConfig, Report, generate_all, generate_std140_fixtures, generate_texture_objects,
};
pub use spec::{SPEC_TABLE, SpecDefaults, TexKindSpec};

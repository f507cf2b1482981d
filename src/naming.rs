//! Class-name derivation
//!
//! Turns a GL texture target enum into the PascalCase class name of the
//! generated wrapper by running an ordered substitution pipeline.
//!
//! The rule order is load-bearing: multi-word tokens must be contracted
//! before the shorter tokens they overlap with, otherwise `_ARRAY` would
//! tear `_CUBE_MAP_ARRAY` apart mid-token. The final rule collapses the
//! `Texture_` artifact left behind when the category prefix is stripped
//! from a target with a remaining suffix (`GL_TEXTURE_1D` → `Texture_1D`
//! → `Texture1D`).

use crate::errors::{Result, TexGenError};

/// Ordered (pattern, replacement) pipeline, applied strictly in sequence.
pub const CLASS_NAME_RULES: &[(&str, &str)] = &[
    ("GL_TEXTURE", "Texture"),
    ("_CUBE_MAP", "CubeMap"),
    ("_MULTISAMPLE", "Multisample"),
    ("_ARRAY", "Array"),
    ("_RECTANGLE", "Rectangle"),
    ("_BUFFER", "Buffer"),
    ("Texture_", "Texture"),
];

/// 依序应用全部替换规则。
#[must_use]
pub fn class_name_for(gl_type: &str) -> String {
    CLASS_NAME_RULES
        .iter()
        .fold(gl_type.to_string(), |name, (pattern, replacement)| {
            name.replace(pattern, replacement)
        })
}

/// Runs the pipeline and rejects anything that is not a C++ identifier.
pub fn validated_class_name(gl_type: &str) -> Result<String> {
    let name = class_name_for(gl_type);
    let mut chars = name.chars();
    let is_identifier = match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => chars.all(|c| c.is_ascii_alphanumeric()),
        _ => false,
    };
    if is_identifier {
        Ok(name)
    } else {
        Err(TexGenError::InvalidClassName {
            kind: gl_type.to_string(),
            name,
        })
    }
}

/// The companion binding-query enum for a texture target
/// (`GL_TEXTURE_2D` → `GL_TEXTURE_BINDING_2D`).
#[must_use]
pub fn binding_query_for(gl_type: &str) -> String {
    gl_type.replace("TEXTURE_", "TEXTURE_BINDING_")
}

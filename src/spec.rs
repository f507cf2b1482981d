//! 纹理目标规格表
//!
//! 生成器的唯一输入：每个 GL 纹理目标一条记录，只写与全局默认值不同的属性。
//! 表的顺序只影响日志输出，各条目相互独立地推导上下文。

/// Global default attributes shared by every table row.
///
/// Passed explicitly into derivation; per-kind overrides win, unset fields
/// fall back to these values.
#[derive(Debug, Clone)]
pub struct SpecDefaults {
    /// Default minification filter token
    pub min_filter: &'static str,
    /// Default wrap mode token
    pub wrap: &'static str,
    pub has_mipmaps: bool,
    pub has_immutable: bool,
    pub has_tex_params: bool,
}

impl Default for SpecDefaults {
    fn default() -> Self {
        Self {
            min_filter: "GL_NEAREST_MIPMAP_LINEAR",
            wrap: "GL_REPEAT",
            has_mipmaps: true,
            has_immutable: true,
            has_tex_params: true,
        }
    }
}

/// One row of the specification table.
///
/// `None` 表示落回 [`SpecDefaults`]，布尔旗标缺省为 false。
#[derive(Debug, Clone)]
pub struct TexKindSpec {
    /// GL texture target enum, unique per table (e.g. `GL_TEXTURE_2D`)
    pub gl_type: &'static str,
    /// Human-readable description used in generated doc comments
    pub short_desc: &'static str,
    /// Number of spatial axes (0–3)
    pub dims: u32,
    /// GLSL sampler naming suffix (e.g. `2D_ARRAY`)
    pub sampler_suffix: &'static str,

    pub array: bool,
    pub cubemap: bool,
    pub buffer: bool,
    pub multisample: bool,

    pub has_mipmaps: Option<bool>,
    pub has_immutable: Option<bool>,
    pub has_tex_params: Option<bool>,
    pub min_filter: Option<&'static str>,
    pub wrap: Option<&'static str>,
}

impl TexKindSpec {
    /// 只填必填字段的基础条目，其余属性全部落回默认值。
    #[must_use]
    pub const fn base(
        gl_type: &'static str,
        short_desc: &'static str,
        dims: u32,
        sampler_suffix: &'static str,
    ) -> Self {
        Self {
            gl_type,
            short_desc,
            dims,
            sampler_suffix,
            array: false,
            cubemap: false,
            buffer: false,
            multisample: false,
            has_mipmaps: None,
            has_immutable: None,
            has_tex_params: None,
            min_filter: None,
            wrap: None,
        }
    }
}

/// The authoritative texture-target table.
pub const SPEC_TABLE: &[TexKindSpec] = &[
    TexKindSpec::base("GL_TEXTURE_1D", "a 1D texture", 1, "1D"),
    TexKindSpec::base("GL_TEXTURE_2D", "a 2D texture", 2, "2D"),
    TexKindSpec::base("GL_TEXTURE_3D", "a 3D texture", 3, "3D"),
    TexKindSpec {
        array: true,
        ..TexKindSpec::base("GL_TEXTURE_1D_ARRAY", "an array of 1D textures", 1, "1D_ARRAY")
    },
    TexKindSpec {
        array: true,
        ..TexKindSpec::base("GL_TEXTURE_2D_ARRAY", "an array of 2D textures", 2, "2D_ARRAY")
    },
    TexKindSpec {
        min_filter: Some("GL_LINEAR"),
        wrap: Some("GL_CLAMP_TO_EDGE"),
        has_mipmaps: Some(false),
        ..TexKindSpec::base("GL_TEXTURE_RECTANGLE", "a rectangular texture", 2, "2D_RECT")
    },
    TexKindSpec {
        cubemap: true,
        ..TexKindSpec::base("GL_TEXTURE_CUBE_MAP", "a CubeMap texture", 2, "CUBE")
    },
    TexKindSpec {
        cubemap: true,
        array: true,
        ..TexKindSpec::base(
            "GL_TEXTURE_CUBE_MAP_ARRAY",
            "an array of CubeMap textures",
            2,
            "CUBE_MAP_ARRAY",
        )
    },
    TexKindSpec {
        buffer: true,
        has_mipmaps: Some(false),
        has_tex_params: Some(false),
        has_immutable: Some(false),
        ..TexKindSpec::base("GL_TEXTURE_BUFFER", "a texture buffer", 1, "BUFFER")
    },
    TexKindSpec {
        multisample: true,
        has_mipmaps: Some(false),
        has_immutable: Some(false),
        ..TexKindSpec::base(
            "GL_TEXTURE_2D_MULTISAMPLE",
            "a 2D multisampled texture",
            2,
            "2D_MULTISAMPLE",
        )
    },
    TexKindSpec {
        multisample: true,
        array: true,
        has_mipmaps: Some(false),
        has_immutable: Some(false),
        ..TexKindSpec::base(
            "GL_TEXTURE_2D_MULTISAMPLE_ARRAY",
            "an array of 2D multisampled textures",
            2,
            "2D_MULTISAMPLE_ARRAY",
        )
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_identifiers_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for spec in SPEC_TABLE {
            assert!(seen.insert(spec.gl_type), "duplicate entry {}", spec.gl_type);
        }
    }

    #[test]
    fn test_no_entry_sets_array_and_buffer() {
        for spec in SPEC_TABLE {
            assert!(
                !(spec.array && spec.buffer),
                "{} sets both array and buffer",
                spec.gl_type
            );
        }
    }

    #[test]
    fn test_base_entry_falls_back_to_defaults() {
        let spec = TexKindSpec::base("GL_TEXTURE_2D", "a 2D texture", 2, "2D");
        assert!(spec.has_mipmaps.is_none());
        assert!(spec.min_filter.is_none());
        assert!(!spec.array && !spec.cubemap && !spec.buffer && !spec.multisample);
    }
}

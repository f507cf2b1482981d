//! 上下文推导引擎
//!
//! 把一条稀疏的 [`TexKindSpec`] 展开为所有模板共用的完整上下文。
//! 推导是纯函数：相同的规格加相同的默认值总是得到逐字节相同的结果，
//! 这也是幂等写入能够生效的前提。
//!
//! 所有轴名列表都来自固定目录的前缀截取，截取长度由 `dims` 或
//! `storage_dim` 决定；目录和截取规则集中在本模块顶部的常量里。

use serde::Serialize;

use crate::errors::{Result, TexGenError};
use crate::naming;
use crate::spec::{SpecDefaults, TexKindSpec};

// ============================================================================
// 1. 轴名目录 (固定顺序，截取前 N 个)
// ============================================================================

/// GLSL 纹理坐标轴
const TEX_COORD_AXES: [&str; 3] = ["S", "T", "R"];
/// 尺寸成员名 (PascalCase)
const SIZE_MEMBER_AXES: [&str; 3] = ["Width", "Height", "Depth"];
/// 尺寸参数名 (camelCase)
const SIZE_VAR_AXES: [&str; 3] = ["width", "height", "depth"];
/// 偏移参数名
const OFFSET_VAR_AXES: [&str; 3] = ["x", "y", "z"];
/// 持久化偏移成员名
const OFFSET_MEMBER_AXES: [&str; 3] = ["OffsetX", "OffsetY", "OffsetZ"];
/// 零值填充源
const ZERO_FILL: [&str; 4] = ["0", "0", "0", "0"];

/// 固定三参数调用形式的目标参数个数 (glTexImage 系列)
const DIM_CALL_ARITY: usize = 3;

fn take_axes(catalog: &[&'static str], n: usize) -> Vec<&'static str> {
    catalog[..n.min(catalog.len())].to_vec()
}

// ============================================================================
// 2. DerivedContext
// ============================================================================

/// The complete, immutable naming/parameter context for one texture kind.
///
/// Every template consumes this same value; no template re-derives anything.
/// Serialized wholesale into the template engine, so every field listed here
/// is visible to every template (the engine treats missing keys as a hard
/// error, never as empty output).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DerivedContext {
    // --- 标识与命名 ---
    pub gl_type: String,
    /// Binding-query companion enum (`GL_TEXTURE_BINDING_*`)
    pub gl_binding_type: String,
    pub class_name: String,
    pub short_desc: String,
    pub sampler_suffix: String,

    // --- 行为旗标 (默认值合并之后) ---
    pub default_min_filter: String,
    pub default_wrap: String,
    pub has_mipmaps: bool,
    pub has_immutable: bool,
    pub has_tex_params: bool,
    pub array: bool,
    pub cubemap: bool,
    pub buffer: bool,
    pub multisample: bool,
    /// Plain-2D clear path needs a platform workaround
    pub has_clear_workaround: bool,
    pub has_depth_texture: bool,

    // --- 维度 ---
    pub dims: u32,
    /// 实际存储的轴数，数组目标多一个 layer 轴
    pub storage_dim: u32,

    // --- 轴名列表 ---
    pub tex_coords: Vec<&'static str>,
    pub size_members: Vec<&'static str>,
    pub size_vars: Vec<&'static str>,
    pub offset_vars: Vec<&'static str>,
    pub size_zeros: Vec<&'static str>,
    pub size_vars_reverse: Vec<&'static str>,
    /// (member, var) 对，供模板成对输出
    pub size_member_vars: Vec<(&'static str, &'static str)>,
    /// 持久化字段名，按 `storage_dim` 截取，与 `size_members` 相互独立
    pub size_data_members: Vec<&'static str>,
    pub offset_data_members: Vec<&'static str>,

    // --- 调用形式字符串 ---
    pub size_parameter: String,
    pub size_parameter_with_default: String,
    pub size_parameter_call: String,
    pub offset_parameter: String,
    pub offset_parameter_call: String,
    pub size_zero_call: String,
    pub size_call: String,
    /// `glTexImage` 风格的固定三参数调用，不足三个用 1 补齐
    pub dim_call: String,
}

// ============================================================================
// 3. 推导
// ============================================================================

/// Expands one spec row into the full template context.
///
/// Fails (naming the kind and the violated invariant) when `dims` exceeds 3,
/// when `array` and `buffer` are both set, or when the class-name pipeline
/// does not yield an identifier. Never returns a partial context.
pub fn derive_context(spec: &TexKindSpec, defaults: &SpecDefaults) -> Result<DerivedContext> {
    if spec.dims > 3 {
        return Err(TexGenError::DimsOutOfRange {
            kind: spec.gl_type.to_string(),
            dims: spec.dims,
        });
    }
    if spec.array && spec.buffer {
        return Err(TexGenError::AmbiguousExtent {
            kind: spec.gl_type.to_string(),
        });
    }

    let class_name = naming::validated_class_name(spec.gl_type)?;
    let gl_binding_type = naming::binding_query_for(spec.gl_type);

    let dims = spec.dims as usize;
    let storage_dim = dims + usize::from(spec.array);

    let tex_coords = take_axes(&TEX_COORD_AXES, dims);
    let mut size_members = take_axes(&SIZE_MEMBER_AXES, dims);
    let mut size_vars = take_axes(&SIZE_VAR_AXES, dims);
    let mut offset_vars = take_axes(&OFFSET_VAR_AXES, dims);

    // 数组目标追加 layer 轴；buffer 目标整体替换为线性 Size/Offset。
    // 追加必须先于替换，替换后的列表不再包含任何空间轴。
    if spec.array {
        size_members.push("Layers");
        size_vars.push("layers");
        offset_vars.push("l");
    }
    if spec.buffer {
        size_members = vec!["Size"];
        size_vars = vec!["size"];
        offset_vars = vec!["offset"];
    }

    let size_zeros = take_axes(&ZERO_FILL, size_vars.len());
    let mut size_vars_reverse = size_vars.clone();
    size_vars_reverse.reverse();

    let size_member_vars: Vec<(&'static str, &'static str)> =
        size_members.iter().copied().zip(size_vars.iter().copied()).collect();

    let size_data_members = take_axes(&SIZE_MEMBER_AXES, storage_dim);
    let offset_data_members = take_axes(&OFFSET_MEMBER_AXES, storage_dim);

    let size_parameter = join_mapped(&size_vars, |v| format!("int {v}"));
    let size_parameter_with_default = join_mapped(&size_vars, |v| format!("int {v} = 1"));
    let offset_parameter = join_mapped(&offset_vars, |v| format!("int {v}"));
    let size_parameter_call = size_vars.join(", ");
    let offset_parameter_call = offset_vars.join(", ");
    let size_zero_call = size_zeros.join(", ");
    let size_call = size_members.join(", ");

    let padding = DIM_CALL_ARITY.saturating_sub(size_vars.len());
    let dim_call = size_members
        .iter()
        .map(|m| format!("m{m}"))
        .chain(std::iter::repeat_n("1".to_string(), padding))
        .collect::<Vec<_>>()
        .join(", ");

    Ok(DerivedContext {
        gl_type: spec.gl_type.to_string(),
        gl_binding_type,
        class_name,
        short_desc: spec.short_desc.to_string(),
        sampler_suffix: spec.sampler_suffix.to_string(),

        default_min_filter: spec.min_filter.unwrap_or(defaults.min_filter).to_string(),
        default_wrap: spec.wrap.unwrap_or(defaults.wrap).to_string(),
        has_mipmaps: spec.has_mipmaps.unwrap_or(defaults.has_mipmaps),
        has_immutable: spec.has_immutable.unwrap_or(defaults.has_immutable),
        has_tex_params: spec.has_tex_params.unwrap_or(defaults.has_tex_params),
        array: spec.array,
        cubemap: spec.cubemap,
        buffer: spec.buffer,
        multisample: spec.multisample,
        has_clear_workaround: spec.dims == 2 && !spec.cubemap && !spec.array,
        has_depth_texture: spec.dims == 2,

        dims: spec.dims,
        storage_dim: storage_dim as u32,

        tex_coords,
        size_members,
        size_vars,
        offset_vars,
        size_zeros,
        size_vars_reverse,
        size_member_vars,
        size_data_members,
        offset_data_members,

        size_parameter,
        size_parameter_with_default,
        size_parameter_call,
        offset_parameter,
        offset_parameter_call,
        size_zero_call,
        size_call,
        dim_call,
    })
}

fn join_mapped(items: &[&str], f: impl Fn(&str) -> String) -> String {
    items.iter().map(|s| f(s)).collect::<Vec<_>>().join(", ")
}

// ============================================================================
// 4. Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::SPEC_TABLE;

    fn derive(spec: &TexKindSpec) -> DerivedContext {
        derive_context(spec, &SpecDefaults::default()).unwrap()
    }

    fn find(gl_type: &str) -> &'static TexKindSpec {
        SPEC_TABLE
            .iter()
            .find(|s| s.gl_type == gl_type)
            .unwrap_or_else(|| panic!("{gl_type} not in table"))
    }

    #[test]
    fn test_storage_dim_adds_layer_axis_only_for_arrays() {
        for spec in SPEC_TABLE {
            let ctx = derive(spec);
            let expected = spec.dims + u32::from(spec.array);
            assert_eq!(ctx.storage_dim, expected, "{}", spec.gl_type);
        }
    }

    #[test]
    fn test_plain_2d_lists() {
        let ctx = derive(find("GL_TEXTURE_2D"));
        assert_eq!(ctx.tex_coords, ["S", "T"]);
        assert_eq!(ctx.size_members, ["Width", "Height"]);
        assert_eq!(ctx.size_vars, ["width", "height"]);
        assert_eq!(ctx.offset_vars, ["x", "y"]);
        assert_eq!(ctx.size_parameter, "int width, int height");
        assert_eq!(ctx.size_parameter_with_default, "int width = 1, int height = 1");
        assert_eq!(ctx.size_zero_call, "0, 0");
        assert_eq!(ctx.dim_call, "mWidth, mHeight, 1");
    }

    #[test]
    fn test_2d_array_appends_layer_axis() {
        let ctx = derive(find("GL_TEXTURE_2D_ARRAY"));
        assert_eq!(ctx.size_members, ["Width", "Height", "Layers"]);
        assert_eq!(ctx.size_vars, ["width", "height", "layers"]);
        assert_eq!(ctx.offset_vars, ["x", "y", "l"]);
        assert_eq!(ctx.size_vars_reverse, ["layers", "height", "width"]);
        assert_eq!(ctx.dim_call, "mWidth, mHeight, mLayers");
        // 持久化字段按 storage_dim 截取，不含 layer 名
        assert_eq!(ctx.size_data_members, ["Width", "Height", "Depth"]);
        assert_eq!(ctx.offset_data_members, ["OffsetX", "OffsetY", "OffsetZ"]);
    }

    #[test]
    fn test_buffer_replaces_axis_lists_wholesale() {
        let ctx = derive(find("GL_TEXTURE_BUFFER"));
        assert_eq!(ctx.size_members, ["Size"]);
        assert_eq!(ctx.size_vars, ["size"]);
        assert_eq!(ctx.offset_vars, ["offset"]);
        assert_eq!(ctx.size_zeros, ["0"]);
        assert_eq!(ctx.size_parameter, "int size");
        assert_eq!(ctx.offset_parameter, "int offset");
        assert_eq!(ctx.dim_call, "mSize, 1, 1");
        // storage_dim 仍然来自 dims，持久化字段与替换后的列表无关
        assert_eq!(ctx.size_data_members, ["Width"]);
    }

    #[test]
    fn test_clear_workaround_truth_table() {
        assert!(derive(find("GL_TEXTURE_2D")).has_clear_workaround);
        assert!(derive(find("GL_TEXTURE_RECTANGLE")).has_clear_workaround);
        assert!(derive(find("GL_TEXTURE_2D_MULTISAMPLE")).has_clear_workaround);
        assert!(!derive(find("GL_TEXTURE_2D_ARRAY")).has_clear_workaround);
        assert!(!derive(find("GL_TEXTURE_CUBE_MAP")).has_clear_workaround);
        assert!(!derive(find("GL_TEXTURE_1D")).has_clear_workaround);
        assert!(!derive(find("GL_TEXTURE_3D")).has_clear_workaround);
    }

    #[test]
    fn test_depth_texture_only_for_two_dims() {
        for spec in SPEC_TABLE {
            assert_eq!(derive(spec).has_depth_texture, spec.dims == 2, "{}", spec.gl_type);
        }
    }

    #[test]
    fn test_override_layering() {
        let ctx = derive(find("GL_TEXTURE_RECTANGLE"));
        assert_eq!(ctx.default_min_filter, "GL_LINEAR");
        assert_eq!(ctx.default_wrap, "GL_CLAMP_TO_EDGE");
        assert!(!ctx.has_mipmaps);
        // 未覆写的属性落回默认值
        assert!(ctx.has_immutable);
        assert!(ctx.has_tex_params);

        let ctx = derive(find("GL_TEXTURE_2D"));
        assert_eq!(ctx.default_min_filter, "GL_NEAREST_MIPMAP_LINEAR");
        assert_eq!(ctx.default_wrap, "GL_REPEAT");
    }

    #[test]
    fn test_binding_type_and_class_name() {
        let ctx = derive(find("GL_TEXTURE_CUBE_MAP_ARRAY"));
        assert_eq!(ctx.class_name, "TextureCubeMapArray");
        assert_eq!(ctx.gl_binding_type, "GL_TEXTURE_BINDING_CUBE_MAP_ARRAY");
        assert_eq!(ctx.sampler_suffix, "CUBE_MAP_ARRAY");
    }

    #[test]
    fn test_dimensionless_kind_derives_empty_lists() {
        let spec = TexKindSpec::base("GL_TEXTURE_BUFFER", "a texture buffer", 0, "BUFFER");
        let ctx = derive(&spec);
        assert!(ctx.tex_coords.is_empty());
        assert!(ctx.size_members.is_empty());
        assert_eq!(ctx.size_parameter, "");
        assert_eq!(ctx.size_zero_call, "");
        assert_eq!(ctx.dim_call, "1, 1, 1");
    }

    #[test]
    fn test_derivation_is_deterministic() {
        let defaults = SpecDefaults::default();
        for spec in SPEC_TABLE {
            let a = derive_context(spec, &defaults).unwrap();
            let b = derive_context(spec, &defaults).unwrap();
            assert_eq!(a, b);
            // 序列化形式也逐字节一致
            assert_eq!(
                serde_json::to_string(&a).unwrap(),
                serde_json::to_string(&b).unwrap()
            );
        }
    }

    #[test]
    fn test_dims_out_of_range_is_rejected() {
        let spec = TexKindSpec::base("GL_TEXTURE_2D", "a 2D texture", 4, "2D");
        let err = derive_context(&spec, &SpecDefaults::default()).unwrap_err();
        assert!(matches!(
            err,
            TexGenError::DimsOutOfRange { ref kind, dims: 4 } if kind == "GL_TEXTURE_2D"
        ));
    }

    #[test]
    fn test_array_buffer_combination_is_rejected() {
        let spec = TexKindSpec {
            array: true,
            buffer: true,
            ..TexKindSpec::base("GL_TEXTURE_BUFFER", "a texture buffer", 1, "BUFFER")
        };
        let err = derive_context(&spec, &SpecDefaults::default()).unwrap_err();
        assert!(matches!(
            err,
            TexGenError::AmbiguousExtent { ref kind } if kind == "GL_TEXTURE_BUFFER"
        ));
    }

    #[test]
    fn test_size_member_vars_pairs_up() {
        let ctx = derive(find("GL_TEXTURE_1D_ARRAY"));
        assert_eq!(ctx.size_member_vars, [("Width", "width"), ("Layers", "layers")]);
        assert_eq!(ctx.dim_call, "mWidth, mLayers, 1");
    }
}
